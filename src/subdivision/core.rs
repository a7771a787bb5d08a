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

use tracing::debug;

use crate::errors::SubdivisionError;
use crate::subdivision::{
    BorderSide, FaceId, Point, SegmentId, StripId, Subdivision, WallSide,
    face::{Face, ThicknessPolygon},
    insertion::Insertion,
    segment::Segment,
};

impl Subdivision {
    /// The unit square: four border walls and the single face `p1`.
    ///
    /// ```text
    ///  (0,1) ---- b3 ---- (1,1)
    ///    |                  |
    ///   b2        p1       b4
    ///    |                  |
    ///  (0,0) ---- b1 ---- (1,0)
    /// ```
    pub fn unit_square() -> Self {
        let p = |x: f64, y: f64| Point::new(x, y);
        let b = SegmentId::Border;
        let (b1, b2, b3, b4) = (
            b(BorderSide::Bottom),
            b(BorderSide::Left),
            b(BorderSide::Top),
            b(BorderSide::Right),
        );

        let mut segments = BTreeMap::new();
        segments.insert(
            b1,
            Segment::border(p(1.0, 0.0), p(0.0, 0.0), [(b2, p(0.0, 0.0)), (b4, p(1.0, 0.0))]),
        );
        segments.insert(
            b2,
            Segment::border(p(0.0, 1.0), p(0.0, 0.0), [(b1, p(0.0, 0.0)), (b3, p(0.0, 1.0))]),
        );
        segments.insert(
            b3,
            Segment::border(p(0.0, 1.0), p(1.0, 1.0), [(b2, p(0.0, 1.0)), (b4, p(1.0, 1.0))]),
        );
        segments.insert(
            b4,
            Segment::border(p(1.0, 1.0), p(1.0, 0.0), [(b1, p(1.0, 0.0)), (b3, p(1.0, 1.0))]),
        );

        let mut faces = BTreeMap::new();
        faces.insert(
            FaceId(1),
            Face::new(
                vec![p(0.0, 0.0), p(0.0, 1.0), p(1.0, 1.0), p(1.0, 0.0)],
                vec![b1, b2, b3, b4],
            ),
        );

        Self {
            segments,
            faces,
            strips: BTreeMap::new(),
            last_face: 1,
            generation: 0,
        }
    }

    pub fn segments(&self) -> &BTreeMap<SegmentId, Segment> {
        &self.segments
    }

    pub fn faces(&self) -> &BTreeMap<FaceId, Face> {
        &self.faces
    }

    pub fn strips(&self) -> &BTreeMap<StripId, ThicknessPolygon> {
        &self.strips
    }

    pub fn segment(&self, id: SegmentId) -> Result<&Segment, SubdivisionError> {
        self.segments.get(&id).ok_or(SubdivisionError::UnknownSegment(id))
    }

    pub fn face(&self, id: FaceId) -> Result<&Face, SubdivisionError> {
        self.faces.get(&id).ok_or(SubdivisionError::UnknownFace(id))
    }

    /// Number of committed thick lines.
    pub fn insertions(&self) -> u32 {
        self.generation
    }

    /// Generation number the next insertion will carry.
    pub fn next_generation(&self) -> u32 {
        self.generation + 1
    }

    /// Sum of face and strip areas; 1 for every reachable state.
    pub fn total_area(&self) -> f64 {
        let faces: f64 = self.faces.values().map(|f| f.area).sum();
        let strips: f64 = self.strips.values().map(|s| s.area).sum();
        faces + strips
    }

    /// Applies a planned insertion.
    ///
    /// Every lookup is checked before the first write, so on error the
    /// subdivision is left exactly as it was.
    pub fn commit_insertion(&mut self, insertion: Insertion) -> Result<StripId, SubdivisionError> {
        let expected = self.next_generation();
        if insertion.generation != expected {
            return Err(SubdivisionError::StaleInsertion {
                planned: insertion.generation,
                expected,
            });
        }
        if !self.faces.contains_key(&insertion.face) {
            return Err(SubdivisionError::UnknownFace(insertion.face));
        }
        for wall in &insertion.walls {
            for (anchor, _) in &wall.neighbors_initial {
                if !self.segments.contains_key(anchor) {
                    return Err(SubdivisionError::UnknownSegment(*anchor));
                }
            }
        }

        let Insertion {
            face,
            generation,
            thickness,
            walls,
            middle,
            split,
        } = insertion;

        self.last_face += 1;
        let new_face = FaceId(self.last_face);
        self.faces.insert(new_face, Face::new(split.first.vertices, split.first.edges));
        self.faces.insert(face, Face::new(split.second.vertices, split.second.edges));

        let ids = [
            SegmentId::wall(generation, WallSide::First),
            SegmentId::wall(generation, WallSide::Second),
        ];
        for (id, wall) in ids.into_iter().zip(walls) {
            for (anchor, at) in wall.neighbors_initial {
                if let Some(neighbor) = self.segments.get_mut(&anchor) {
                    neighbor.attach(id, at);
                }
            }
            self.segments.insert(id, wall);
        }

        let strip = StripId(generation);
        let strip_polygon = Face::new(split.middle.vertices, split.middle.edges);
        self.strips.insert(
            strip,
            ThicknessPolygon {
                vertices: strip_polygon.vertices,
                edges: strip_polygon.edges,
                area: strip_polygon.area,
                thickness,
                walls: ids,
                middle_segment: middle,
            },
        );
        self.generation = generation;

        debug!(
            generation,
            split_face = %face,
            new_face = %new_face,
            faces = self.faces.len(),
            strip_area = self.strips[&strip].area,
            "committed thick line"
        );

        Ok(strip)
    }
}

impl Default for Subdivision {
    fn default() -> Self {
        Self::unit_square()
    }
}
