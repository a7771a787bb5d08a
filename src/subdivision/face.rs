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

use crate::geometry::{ring_contains, signed_area};
use crate::subdivision::{Point, SegmentId, segment::Segment};

/// A face of the subdivision.
///
/// `vertices[i]` is the corner shared by `edges[i]` and `edges[i + 1]`
/// (cyclically), so both rings always have the same length.
#[derive(Debug, Clone, PartialEq)]
pub struct Face {
    pub vertices: Vec<Point>,
    pub edges: Vec<SegmentId>,
    pub area: f64,
}

impl Face {
    pub fn new(vertices: Vec<Point>, edges: Vec<SegmentId>) -> Self {
        let area = signed_area(&vertices).abs();
        Self {
            vertices,
            edges,
            area,
        }
    }

    pub fn contains(&self, p: &Point) -> bool {
        ring_contains(&self.vertices, p)
    }

    pub fn is_aligned(&self) -> bool {
        self.vertices.len() == self.edges.len()
    }

    pub fn position(&self, edge: SegmentId) -> Option<usize> {
        self.edges.iter().position(|e| *e == edge)
    }
}

/// The strip between the two walls of one inserted thick line.
///
/// Not part of the face graph; `middle_segment` is the strip's centerline,
/// resolved against the same boundary as the walls.
#[derive(Debug, Clone, PartialEq)]
pub struct ThicknessPolygon {
    pub vertices: Vec<Point>,
    pub edges: Vec<SegmentId>,
    pub area: f64,
    pub thickness: f64,
    pub walls: [SegmentId; 2],
    pub middle_segment: Segment,
}
