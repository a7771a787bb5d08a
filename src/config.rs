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
use crate::sampling::AngleSpec;

pub const DEFAULT_MAX_ATTEMPTS: usize = 1000;
pub const DEFAULT_PROBE_EXTENT: f64 = 10.0;
pub const DEFAULT_TOLERANCE: f64 = 1e-6;

/// Knobs for the insertion pipeline.
///
/// `probe_extent` is how far a probe reaches on each side of its anchor, in
/// units of the (unit-length) direction. Everything lives in the unit square,
/// so the default of 10 crosses every boundary.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratorConfig {
    pub max_attempts: usize,
    pub probe_extent: f64,
    pub tolerance: f64,
    pub angles: AngleSpec,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            probe_extent: DEFAULT_PROBE_EXTENT,
            tolerance: DEFAULT_TOLERANCE,
            angles: AngleSpec::Uniform,
        }
    }
}

impl GeneratorConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    pub fn with_probe_extent(mut self, probe_extent: f64) -> Self {
        self.probe_extent = probe_extent;
        self
    }

    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    pub fn with_angles(mut self, angles: AngleSpec) -> Self {
        self.angles = angles;
        self
    }

    pub fn validate(&self) -> Result<(), SubdivisionError> {
        if !(self.probe_extent.is_finite() && self.probe_extent > 0.0) {
            return Err(SubdivisionError::InvalidConfig {
                field: "probe_extent",
                reason: "must be finite and positive",
            });
        }
        if !(self.tolerance.is_finite() && self.tolerance >= 0.0) {
            return Err(SubdivisionError::InvalidConfig {
                field: "tolerance",
                reason: "must be finite and non-negative",
            });
        }
        self.angles.validate()
    }
}
