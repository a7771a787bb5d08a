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

use crate::config::GeneratorConfig;
use crate::errors::SubdivisionError;
use crate::subdivision::{
    FaceId, Point, SegmentId, StripId, Subdivision, WallSide,
    extension::extend_segment,
    placement::{Placement, find_placement},
    segment::Segment,
    topology::{FaceSplit, split_face},
};

/// Everything one thick line changes, computed without touching the state.
#[derive(Debug, Clone, PartialEq)]
pub struct Insertion {
    pub face: FaceId,
    pub generation: u32,
    pub thickness: f64,
    /// First and second wall, in that order.
    pub walls: [Segment; 2],
    pub middle: Segment,
    pub split: FaceSplit,
}

impl Subdivision {
    /// Draws a placement and resolves it into an [`Insertion`].
    pub fn plan_insertion<R: Rng>(
        &self,
        thickness: f64,
        config: &GeneratorConfig,
        rng: &mut R,
    ) -> Result<Insertion, SubdivisionError> {
        if !(thickness.is_finite() && thickness >= 0.0) {
            return Err(SubdivisionError::InvalidThickness {
                index: self.generation as usize,
                thickness,
            });
        }
        let placement = find_placement(&self.faces, thickness, config, rng)?;
        self.plan_at(&placement, thickness, config)
    }

    /// Resolves a given placement: extends the centerline and both walls
    /// through the boundary of the placement's face and splits that face.
    pub fn plan_at(
        &self,
        placement: &Placement,
        thickness: f64,
        config: &GeneratorConfig,
    ) -> Result<Insertion, SubdivisionError> {
        let face = self.face(placement.face)?;
        let boundary = face
            .edges
            .iter()
            .map(|id| self.segment(*id).map(|s| (*id, s)))
            .collect::<Result<Vec<_>, _>>()?;

        let resolve = |location: Point| {
            extend_segment(
                boundary.iter().copied(),
                location,
                placement.direction,
                config.probe_extent,
                config.tolerance,
            )
        };
        let middle = resolve(placement.location)?;
        let first = resolve(placement.offset(thickness, WallSide::First))?;
        let second = resolve(placement.offset(thickness, WallSide::Second))?;

        let generation = self.next_generation();
        let split = split_face(
            placement.face,
            face,
            (SegmentId::wall(generation, WallSide::First), &first),
            (SegmentId::wall(generation, WallSide::Second), &second),
            config.tolerance,
        )?;

        Ok(Insertion {
            face: placement.face,
            generation,
            thickness,
            walls: [first, second],
            middle,
            split,
        })
    }

    /// Plans and commits one thick line. Either everything is applied or,
    /// on error, nothing is.
    pub fn insert_thick_line<R: Rng>(
        &mut self,
        thickness: f64,
        config: &GeneratorConfig,
        rng: &mut R,
    ) -> Result<StripId, SubdivisionError> {
        let insertion = self.plan_insertion(thickness, config, rng)?;
        self.commit_insertion(insertion)
    }
}
