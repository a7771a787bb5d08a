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

//! Random planar subdivisions of the unit square grown by thick lines.
//!
//! Each insertion drops a corridor of a given width at a random point and
//! orientation inside an area-weighted random face. Its two parallel walls
//! are extended until they hit the face boundary, the face is split into two
//! flanks and the strip between the walls, and the segment adjacency graph is
//! patched in both directions.
//!
//! ```no_run
//! use linenet::{AngleSpec, generate};
//!
//! let report = generate(10, &[0.01; 10], AngleSpec::Uniform).unwrap();
//! assert_eq!(report.subdivision.faces().len(), 1 + report.inserted);
//! ```

pub mod config;
pub mod errors;
pub mod geometry;
pub mod kernel;
pub mod sampling;
pub mod subdivision;

pub use config::GeneratorConfig;
pub use errors::{ProbeSide, SubdivisionError};
pub use sampling::AngleSpec;
pub use subdivision::{
    FaceId, GenerationReport, Progress, SegmentId, StripId, Subdivision, generate,
    generate_with_rng,
};
