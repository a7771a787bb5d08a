// SPDX-License-Identifier: MIT
//
// Copyright (c) 2025 Alexandre Severino
//
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.

pub mod basic_types;
pub mod core;
pub mod extension;
pub mod face;
pub mod generator;
pub mod insertion;
pub mod placement;
pub mod segment;
pub mod topology;
pub mod validation;

use crate::geometry::{Point2, Vector2};

pub type Point = Point2<f64>;
pub type Vector = Vector2<f64>;

pub use basic_types::{BorderSide, FaceId, SegmentId, StripId, Subdivision, WallSide};
pub use extension::{ProbeHit, extend_segment, probe_hits};
pub use face::{Face, ThicknessPolygon};
pub use generator::{GenerationReport, Progress, generate, generate_with_rng};
pub use insertion::Insertion;
pub use placement::{Placement, find_placement};
pub use segment::Segment;
pub use topology::{FaceLoop, FaceSplit, cyclic_arc, cyclic_steps, split_face};
