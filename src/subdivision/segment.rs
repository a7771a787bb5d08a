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

use std::collections::BTreeMap;

use crate::geometry::Segment2;
use crate::subdivision::{Point, SegmentId, Vector};

/// A wall of the subdivision.
///
/// `neighbors_initial` records the two segments this one was terminated
/// against when it was created, start side first. `neighbors` starts out
/// equal to it and grows each time a later segment terminates on this one.
#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    pub start: Point,
    pub end: Point,
    pub neighbors: BTreeMap<SegmentId, Point>,
    pub neighbors_initial: [(SegmentId, Point); 2],
}

impl Segment {
    pub fn new(start_anchor: (SegmentId, Point), end_anchor: (SegmentId, Point)) -> Self {
        let mut neighbors = BTreeMap::new();
        neighbors.insert(start_anchor.0, start_anchor.1);
        neighbors.insert(end_anchor.0, end_anchor.1);
        Self {
            start: start_anchor.1,
            end: end_anchor.1,
            neighbors,
            neighbors_initial: [start_anchor, end_anchor],
        }
    }

    /// Border walls run between explicit endpoints; their anchors need not
    /// follow the start/end order.
    pub(crate) fn border(start: Point, end: Point, anchors: [(SegmentId, Point); 2]) -> Self {
        Self {
            start,
            end,
            neighbors: anchors.iter().copied().collect(),
            neighbors_initial: anchors,
        }
    }

    pub fn start_neighbor(&self) -> SegmentId {
        self.neighbors_initial[0].0
    }

    pub fn end_neighbor(&self) -> SegmentId {
        self.neighbors_initial[1].0
    }

    pub fn geometry(&self) -> Segment2<f64> {
        Segment2::new(self.start, self.end)
    }

    pub fn direction(&self) -> Vector {
        self.end - self.start
    }

    /// Records that `id` terminates on this segment at `at`.
    pub fn attach(&mut self, id: SegmentId, at: Point) {
        self.neighbors.insert(id, at);
    }

    pub fn is_axis_aligned(&self, eps: f64) -> bool {
        let d = self.direction();
        d.x.abs() < eps || d.y.abs() < eps
    }
}
