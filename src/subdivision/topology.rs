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

use std::iter::once;

use crate::errors::SubdivisionError;
use crate::geometry::signed_area;
use crate::subdivision::{FaceId, Point, SegmentId, face::Face, segment::Segment};

/// Edge cycle plus the vertex ring aligned with it.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FaceLoop {
    pub edges: Vec<SegmentId>,
    pub vertices: Vec<Point>,
}

impl FaceLoop {
    pub fn is_aligned(&self) -> bool {
        self.edges.len() == self.vertices.len()
    }
}

/// The three pieces a face falls into when a thick line crosses it.
#[derive(Debug, Clone, PartialEq)]
pub struct FaceSplit {
    /// The strip between the walls.
    pub middle: FaceLoop,
    /// Flank on the first wall's side; gets a fresh face key.
    pub first: FaceLoop,
    /// Flank on the second wall's side; takes over the split face's key.
    pub second: FaceLoop,
}

/// Ring indices from `start` to `end`, both included, walking forward and
/// wrapping past the end of the ring.
///
/// `start == end` yields the single index.
pub fn cyclic_arc(len: usize, start: usize, end: usize) -> Vec<usize> {
    if len == 0 {
        return Vec::new();
    }
    (0..=cyclic_steps(len, start, end))
        .map(|k| (start + k) % len)
        .collect()
}

/// Forward distance from `start` to `end` around a ring of `len`.
pub fn cyclic_steps(len: usize, start: usize, end: usize) -> usize {
    (end + len - start % len) % len
}

/// All arc indices but the last.
fn open(arc: &[usize]) -> &[usize] {
    &arc[..arc.len().saturating_sub(1)]
}

/// Splits `face` along two parallel walls.
///
/// Each wall carries its anchors in `neighbors_initial`: the boundary
/// segment it starts on and the one it ends on. The face's ring runs
/// clockwise, so walking forward from a wall's start anchor to its end anchor
/// sweeps the side to the left of the wall; that side belongs to the first
/// wall. With anchors `n1a, n1b` (first wall) and `n2a, n2b` (second wall):
///
/// - first flank: `[wall1] + arc(n1a..n1b)`
/// - second flank: `[wall2] + arc(n2b..n2a)`
/// - strip: `[n1a, wall1] + arc(n1b..n2b) + [wall2] + arc(n2a..n1a)` without
///   the closing `n1a`
///
/// Vertex `i` of every piece is the corner between edges `i` and `i + 1`.
/// `eps` bounds how far the pieces' areas may drift from the face's.
pub fn split_face(
    face_id: FaceId,
    face: &Face,
    first: (SegmentId, &Segment),
    second: (SegmentId, &Segment),
    eps: f64,
) -> Result<FaceSplit, SubdivisionError> {
    let n = face.edges.len();
    if !face.is_aligned() || n < 3 {
        return Err(SubdivisionError::TopologyInvariantViolation {
            face: face_id,
            edges: n,
            vertices: face.vertices.len(),
        });
    }

    let (id1, wall1) = first;
    let (id2, wall2) = second;
    let [(n1a, v1_begin), (n1b, v1_end)] = wall1.neighbors_initial;
    let [(n2a, v2_begin), (n2b, v2_end)] = wall2.neighbors_initial;

    let locate = |segment: SegmentId| {
        face.position(segment)
            .ok_or(SubdivisionError::MissingAnchor {
                face: face_id,
                segment,
            })
    };
    let (i1a, i1b, i2a, i2b) = (locate(n1a)?, locate(n1b)?, locate(n2a)?, locate(n2b)?);

    if i1a == i1b || i2a == i2b {
        return Err(SubdivisionError::DegenerateSplit {
            face: face_id,
            reason: "a wall starts and ends on the same edge",
        });
    }
    let winding = cyclic_steps(n, i1a, i1b)
        + cyclic_steps(n, i1b, i2b)
        + cyclic_steps(n, i2b, i2a)
        + cyclic_steps(n, i2a, i1a);
    if winding != n {
        return Err(SubdivisionError::DegenerateSplit {
            face: face_id,
            reason: "wall anchors are not in boundary order",
        });
    }

    let edge = |i: &usize| face.edges[*i];
    let corner = |i: &usize| face.vertices[*i];

    let flank1 = cyclic_arc(n, i1a, i1b);
    let first = FaceLoop {
        edges: once(id1).chain(flank1.iter().map(edge)).collect(),
        vertices: once(v1_begin)
            .chain(open(&flank1).iter().map(corner))
            .chain(once(v1_end))
            .collect(),
    };

    let flank2 = cyclic_arc(n, i2b, i2a);
    let second = FaceLoop {
        edges: once(id2).chain(flank2.iter().map(edge)).collect(),
        vertices: once(v2_end)
            .chain(open(&flank2).iter().map(corner))
            .chain(once(v2_begin))
            .collect(),
    };

    let lead = cyclic_arc(n, i1b, i2b);
    let trail = cyclic_arc(n, i2a, i1a);
    let middle = FaceLoop {
        edges: [n1a, id1]
            .into_iter()
            .chain(lead.iter().map(edge))
            .chain(once(id2))
            .chain(open(&trail).iter().map(edge))
            .collect(),
        vertices: [v1_begin, v1_end]
            .into_iter()
            .chain(open(&lead).iter().map(corner))
            .chain([v2_end, v2_begin])
            .chain(open(&trail).iter().map(corner))
            .collect(),
    };

    for piece in [&middle, &first, &second] {
        if !piece.is_aligned() {
            return Err(SubdivisionError::TopologyInvariantViolation {
                face: face_id,
                edges: piece.edges.len(),
                vertices: piece.vertices.len(),
            });
        }
    }

    let covered: f64 = [&middle, &first, &second]
        .iter()
        .map(|piece| signed_area(&piece.vertices).abs())
        .sum();
    if (covered - face.area).abs() > eps {
        return Err(SubdivisionError::DegenerateSplit {
            face: face_id,
            reason: "pieces do not tile the face",
        });
    }

    Ok(FaceSplit {
        middle,
        first,
        second,
    })
}
