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

use rand::Rng;
use rand::seq::IndexedRandom;

use crate::errors::SubdivisionError;
use crate::geometry::Vector2;

/// How insertion directions are drawn.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum AngleSpec {
    /// Normalize two independent `U(-1, 1)` draws. This is not uniform in
    /// angle: diagonal directions come up slightly more often than axis ones.
    #[default]
    Uniform,
    /// Pick one of these angles (radians) uniformly.
    Choice(Vec<f64>),
}

impl AngleSpec {
    pub fn choice(angles: impl Into<Vec<f64>>) -> Self {
        AngleSpec::Choice(angles.into())
    }

    pub fn validate(&self) -> Result<(), SubdivisionError> {
        match self {
            AngleSpec::Uniform => Ok(()),
            AngleSpec::Choice(angles) if angles.is_empty() => Err(SubdivisionError::EmptyAngleSet),
            AngleSpec::Choice(angles) if angles.iter().any(|a| !a.is_finite()) => {
                Err(SubdivisionError::InvalidConfig {
                    field: "angles",
                    reason: "every angle must be finite",
                })
            }
            AngleSpec::Choice(_) => Ok(()),
        }
    }
}

/// Unit direction drawn according to `angles`.
pub fn sample_direction<R: Rng>(
    angles: &AngleSpec,
    rng: &mut R,
) -> Result<Vector2<f64>, SubdivisionError> {
    match angles {
        AngleSpec::Uniform => loop {
            let v = Vector2::new(rng.random_range(-1.0..=1.0), rng.random_range(-1.0..=1.0));
            if let Some(unit) = v.normalized() {
                return Ok(unit);
            }
        },
        AngleSpec::Choice(angles) => {
            let angle = angles.choose(rng).ok_or(SubdivisionError::EmptyAngleSet)?;
            Vector2::from_angle(*angle)
                .normalized()
                .ok_or(SubdivisionError::InvalidConfig {
                    field: "angles",
                    reason: "every angle must be finite",
                })
        }
    }
}

/// `d` or `-d`, whichever points towards increasing x (increasing y when
/// vertical). Walking a wall from start to end follows this direction.
pub fn canonical_direction(d: &Vector2<f64>) -> Vector2<f64> {
    if d.x < 0.0 || (d.x == 0.0 && d.y < 0.0) {
        -*d
    } else {
        *d
    }
}

/// Unit perpendicular to `d` with a non-negative y component.
///
/// This is the left-hand normal of [`canonical_direction`], so a vertical
/// direction gets `(-1, 0)`. The first wall of a thick line sits on this side.
pub fn canonical_perpendicular(d: &Vector2<f64>) -> Option<Vector2<f64>> {
    canonical_direction(d).left_normal().normalized()
}
