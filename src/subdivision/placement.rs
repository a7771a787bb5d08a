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

use rand::Rng;
use tracing::{debug, trace};

use crate::config::GeneratorConfig;
use crate::errors::SubdivisionError;
use crate::sampling::{canonical_perpendicular, pick_face_by_area, sample_direction, sample_in_polygon};
use crate::subdivision::{FaceId, Point, Vector, WallSide, face::Face};

/// Where a thick line goes: a centerline point inside `face` and its direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub face: FaceId,
    pub location: Point,
    pub direction: Vector,
    /// Unit normal with non-negative y; the first wall sits on this side.
    pub perpendicular: Vector,
}

impl Placement {
    /// Anchor of the given wall for a line of width `thickness`.
    pub fn offset(&self, thickness: f64, side: WallSide) -> Point {
        let shift = self.perpendicular.scale(thickness / 2.0);
        match side {
            WallSide::First => self.location.add_vector(&shift),
            WallSide::Second => self.location.sub_vector(&shift),
        }
    }
}

/// Searches for room for a line of width `thickness`.
///
/// The direction is drawn once. Each attempt then picks a face by area,
/// samples a point in it and accepts when both wall anchors land inside that
/// same face. Gives up with [`SubdivisionError::PlacementExhausted`] after
/// `config.max_attempts` tries.
pub fn find_placement<R: Rng>(
    faces: &BTreeMap<FaceId, Face>,
    thickness: f64,
    config: &GeneratorConfig,
    rng: &mut R,
) -> Result<Placement, SubdivisionError> {
    let direction = sample_direction(&config.angles, rng)?;
    let perpendicular = canonical_perpendicular(&direction).ok_or(SubdivisionError::InvalidConfig {
        field: "angles",
        reason: "direction has zero length",
    })?;

    for attempt in 0..config.max_attempts {
        let (face_id, face) = pick_face_by_area(faces, rng)?;
        let Some(location) = sample_in_polygon(&face.vertices, rng) else {
            continue;
        };

        let candidate = Placement {
            face: face_id,
            location,
            direction,
            perpendicular,
        };
        let upper = candidate.offset(thickness, WallSide::First);
        let lower = candidate.offset(thickness, WallSide::Second);
        if face.contains(&upper) && face.contains(&lower) {
            trace!(attempt, face = %face_id, "placement found");
            return Ok(candidate);
        }
    }

    debug!(thickness, attempts = config.max_attempts, "placement exhausted");
    Err(SubdivisionError::PlacementExhausted {
        thickness,
        attempts: config.max_attempts,
    })
}
