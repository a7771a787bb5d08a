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

use crate::errors::SubdivisionError;
use crate::kernel::{are_equal, is_point_on_segment};
use crate::subdivision::{Point, SegmentId, Subdivision};

impl Subdivision {
    /// Checks the structural invariants and reports the first violation.
    ///
    /// - every face has as many vertices as edges, all naming known segments
    /// - corner `i` of every face and strip lies on edges `i` and `i + 1`
    /// - neighbor links are symmetric and agree on the shared point
    /// - that point lies on both segments
    /// - faces and strips together cover an area of 1
    pub fn validate(&self, eps: f64) -> Result<(), SubdivisionError> {
        for (id, face) in &self.faces {
            if !face.is_aligned() {
                return Err(SubdivisionError::TopologyInvariantViolation {
                    face: *id,
                    edges: face.edges.len(),
                    vertices: face.vertices.len(),
                });
            }
            for edge in &face.edges {
                self.segment(*edge)?;
            }
            if let Some(corner) = self.corner_off_edges(&face.edges, &face.vertices, eps)? {
                return Err(SubdivisionError::FaceCornerOffEdge { face: *id, corner });
            }
        }

        for (id, strip) in &self.strips {
            if let Some(corner) = self.corner_off_edges(&strip.edges, &strip.vertices, eps)? {
                return Err(SubdivisionError::StripCornerOffEdge { strip: *id, corner });
            }
        }

        for (id, segment) in &self.segments {
            for (anchor, _) in &segment.neighbors_initial {
                if !segment.neighbors.contains_key(anchor) {
                    return Err(SubdivisionError::AsymmetricNeighbor {
                        segment: *id,
                        neighbor: *anchor,
                    });
                }
            }

            for (neighbor_id, at) in &segment.neighbors {
                let neighbor = self.segment(*neighbor_id)?;
                match neighbor.neighbors.get(id) {
                    Some(back) if are_equal(at, back, eps) => {}
                    _ => {
                        return Err(SubdivisionError::AsymmetricNeighbor {
                            segment: *id,
                            neighbor: *neighbor_id,
                        });
                    }
                }

                if !is_point_on_segment(at, &segment.geometry(), eps)
                    || !is_point_on_segment(at, &neighbor.geometry(), eps)
                {
                    return Err(SubdivisionError::DetachedNeighbor {
                        segment: *id,
                        neighbor: *neighbor_id,
                    });
                }
            }
        }

        let total = self.total_area();
        if (total - 1.0).abs() > eps {
            return Err(SubdivisionError::AreaNotConserved { total });
        }

        Ok(())
    }

    /// First corner of a ring that is missing from one of the two edges it
    /// joins. A ring whose lengths disagree fails at its first unmatched index.
    fn corner_off_edges(
        &self,
        edges: &[SegmentId],
        vertices: &[Point],
        eps: f64,
    ) -> Result<Option<usize>, SubdivisionError> {
        let n = edges.len();
        if n != vertices.len() {
            return Ok(Some(n.min(vertices.len())));
        }

        for (i, corner) in vertices.iter().enumerate() {
            for edge in [edges[i], edges[(i + 1) % n]] {
                let segment = self.segment(edge)?;
                if !is_point_on_segment(corner, &segment.geometry(), eps) {
                    return Ok(Some(i));
                }
            }
        }
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use crate::config::GeneratorConfig;
    use crate::errors::SubdivisionError;
    use crate::subdivision::{FaceId, Placement, Point, StripId, Subdivision, Vector};

    const EPS: f64 = 1e-6;

    #[test]
    fn permuted_face_edges_are_rejected() {
        let mut state = Subdivision::unit_square();
        assert!(state.validate(EPS).is_ok());

        // Same edge set, same vertex ring: only the order is wrong.
        if let Some(face) = state.faces.get_mut(&FaceId(1)) {
            face.edges.swap(0, 1);
        }
        assert_eq!(
            state.validate(EPS),
            Err(SubdivisionError::FaceCornerOffEdge {
                face: FaceId(1),
                corner: 1,
            })
        );
    }

    #[test]
    fn rotated_strip_edges_are_rejected() {
        let mut state = Subdivision::unit_square();
        let placement = Placement {
            face: FaceId(1),
            location: Point::new(0.5, 0.5),
            direction: Vector::new(1.0, 0.0),
            perpendicular: Vector::new(0.0, 1.0),
        };
        let insertion = state
            .plan_at(&placement, 0.1, &GeneratorConfig::default())
            .unwrap();
        state.commit_insertion(insertion).unwrap();
        assert!(state.validate(EPS).is_ok());

        if let Some(strip) = state.strips.get_mut(&StripId(1)) {
            strip.edges.rotate_left(1);
        }
        assert_eq!(
            state.validate(EPS),
            Err(SubdivisionError::StripCornerOffEdge {
                strip: StripId(1),
                corner: 0,
            })
        );
    }
}
