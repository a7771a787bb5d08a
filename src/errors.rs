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

//! Errors raised while growing a subdivision.

use std::fmt;

use thiserror::Error;

use crate::subdivision::{FaceId, Point, SegmentId, StripId};

/// Which side of a probe failed to find a terminating segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbeSide {
    Behind,
    Ahead,
}

impl fmt::Display for ProbeSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProbeSide::Behind => write!(f, "behind"),
            ProbeSide::Ahead => write!(f, "ahead"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SubdivisionError {
    /// No face could hold a thick line of this width. The driver treats this
    /// as the end of generation.
    #[error("no valid placement for thickness {thickness} after {attempts} attempts")]
    PlacementExhausted { thickness: f64, attempts: usize },

    /// A probe found nothing to terminate on, even after the y-axis fallback.
    #[error("no terminating boundary found {side} the probe at ({}, {})", .location.x, .location.y)]
    DegenerateProbe { side: ProbeSide, location: Point },

    /// A face was produced whose edge cycle and vertex ring differ in length.
    #[error("face {face} has {edges} edges but {vertices} vertices")]
    TopologyInvariantViolation {
        face: FaceId,
        edges: usize,
        vertices: usize,
    },

    /// The wall anchors do not appear around the face in the order a chord split needs.
    #[error("cannot split face {face}: {reason}")]
    DegenerateSplit { face: FaceId, reason: &'static str },

    #[error("segment {segment} is not on the boundary of face {face}")]
    MissingAnchor { face: FaceId, segment: SegmentId },

    #[error("unknown face {0}")]
    UnknownFace(FaceId),

    #[error("unknown segment {0}")]
    UnknownSegment(SegmentId),

    /// A planned insertion was committed against a different state than it was planned on.
    #[error("insertion planned for generation {planned} but the subdivision expects {expected}")]
    StaleInsertion { planned: u32, expected: u32 },

    #[error("faces have no positive total area to sample from")]
    ZeroArea,

    #[error("angle list is empty")]
    EmptyAngleSet,

    #[error("thickness #{index} is {thickness}; expected a finite non-negative value")]
    InvalidThickness { index: usize, thickness: f64 },

    #[error("{requested} insertions requested but only {provided} thicknesses given")]
    ScheduleTooShort { requested: usize, provided: usize },

    #[error("invalid configuration for `{field}`: {reason}")]
    InvalidConfig {
        field: &'static str,
        reason: &'static str,
    },

    #[error("segment {segment} lists {neighbor} as a neighbor but not the other way around")]
    AsymmetricNeighbor {
        segment: SegmentId,
        neighbor: SegmentId,
    },

    #[error("shared point between {segment} and {neighbor} is not on both segments")]
    DetachedNeighbor {
        segment: SegmentId,
        neighbor: SegmentId,
    },

    #[error("corner {corner} of face {face} is not on both edges it joins")]
    FaceCornerOffEdge { face: FaceId, corner: usize },

    #[error("corner {corner} of strip {strip} is not on both edges it joins")]
    StripCornerOffEdge { strip: StripId, corner: usize },

    #[error("faces and strips cover an area of {total}, expected 1")]
    AreaNotConserved { total: f64 },
}
