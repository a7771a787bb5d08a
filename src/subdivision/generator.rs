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
use tracing::info;

use crate::config::GeneratorConfig;
use crate::errors::SubdivisionError;
use crate::sampling::AngleSpec;
use crate::subdivision::Subdivision;

/// How far a run has got.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    pub completed: usize,
    pub requested: usize,
}

impl Progress {
    pub fn percent(&self) -> f64 {
        if self.requested == 0 {
            return 100.0;
        }
        self.completed as f64 / self.requested as f64 * 100.0
    }
}

#[derive(Debug, Clone)]
pub struct GenerationReport {
    pub subdivision: Subdivision,
    pub requested: usize,
    pub inserted: usize,
    /// Set when a placement search came up empty before `requested` lines fit.
    pub stopped_early: bool,
}

/// Grows the unit square by `size` thick lines using the thread-local RNG.
///
/// `thickness[i]` is the width of line `i`.
pub fn generate(
    size: usize,
    thickness: &[f64],
    angles: AngleSpec,
) -> Result<GenerationReport, SubdivisionError> {
    let config = GeneratorConfig::default().with_angles(angles);
    generate_with_rng(size, thickness, &config, &mut rand::rng(), |_| {})
}

/// Like [`generate`] with an explicit configuration, RNG and progress hook.
///
/// Running out of room is not an error: the run stops at the first
/// exhausted placement search and returns what was built so far, with
/// `stopped_early` set. Any other failure aborts the run.
pub fn generate_with_rng<R, F>(
    size: usize,
    thickness: &[f64],
    config: &GeneratorConfig,
    rng: &mut R,
    mut on_progress: F,
) -> Result<GenerationReport, SubdivisionError>
where
    R: Rng,
    F: FnMut(Progress),
{
    config.validate()?;
    if thickness.len() < size {
        return Err(SubdivisionError::ScheduleTooShort {
            requested: size,
            provided: thickness.len(),
        });
    }
    let schedule = &thickness[..size];
    if let Some((index, &bad)) = schedule
        .iter()
        .enumerate()
        .find(|(_, t)| !(t.is_finite() && **t >= 0.0))
    {
        return Err(SubdivisionError::InvalidThickness {
            index,
            thickness: bad,
        });
    }

    let mut subdivision = Subdivision::unit_square();
    let mut stopped_early = false;

    for (i, &width) in schedule.iter().enumerate() {
        match subdivision.insert_thick_line(width, config, rng) {
            Ok(_) => {}
            Err(SubdivisionError::PlacementExhausted { attempts, .. }) => {
                info!(iteration = i, thickness = width, attempts, "no valid placement, stopping");
                stopped_early = true;
                break;
            }
            Err(err) => return Err(err),
        }
        on_progress(Progress {
            completed: i + 1,
            requested: size,
        });
    }

    let inserted = subdivision.insertions() as usize;
    info!(requested = size, inserted, faces = subdivision.faces().len(), "generation finished");

    Ok(GenerationReport {
        subdivision,
        requested: size,
        inserted,
        stopped_early,
    })
}
