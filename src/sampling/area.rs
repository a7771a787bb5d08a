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

use crate::errors::SubdivisionError;
use crate::subdivision::{FaceId, face::Face};

/// Picks a face with probability proportional to its area.
///
/// Draws a threshold uniformly in `[0, total]` and returns the first face,
/// in key order, whose running area sum reaches it. Zero-area faces are
/// never returned; if no face has positive area the draw is refused with
/// [`SubdivisionError::ZeroArea`].
pub fn pick_face_by_area<'a, R: Rng>(
    faces: &'a BTreeMap<FaceId, Face>,
    rng: &mut R,
) -> Result<(FaceId, &'a Face), SubdivisionError> {
    let total: f64 = faces.values().map(|f| f.area).sum();
    if !(total.is_finite() && total > 0.0) {
        return Err(SubdivisionError::ZeroArea);
    }

    let threshold = rng.random_range(0.0..=total);
    let mut cumulative = 0.0;
    for (id, face) in faces {
        cumulative += face.area;
        if face.area > 0.0 && cumulative >= threshold {
            return Ok((*id, face));
        }
    }

    // The running sum ends on exactly `total`, so this is only reached when
    // the tail of the map is made of zero-area faces.
    faces
        .iter()
        .rev()
        .find(|(_, f)| f.area > 0.0)
        .map(|(id, f)| (*id, f))
        .ok_or(SubdivisionError::ZeroArea)
}
