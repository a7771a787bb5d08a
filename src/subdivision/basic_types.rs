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
use std::fmt;

use crate::subdivision::{face::Face, face::ThicknessPolygon, segment::Segment};

/// The four walls of the unit square, numbered `b1..b4` in the order the
/// initial face walks them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum BorderSide {
    Bottom,
    Left,
    Top,
    Right,
}

impl BorderSide {
    pub const ALL: [BorderSide; 4] = [
        BorderSide::Bottom,
        BorderSide::Left,
        BorderSide::Top,
        BorderSide::Right,
    ];

    pub fn number(self) -> u8 {
        match self {
            BorderSide::Bottom => 1,
            BorderSide::Left => 2,
            BorderSide::Top => 3,
            BorderSide::Right => 4,
        }
    }
}

/// The two parallel walls of one thick line. `First` is offset along the
/// canonical perpendicular, `Second` against it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum WallSide {
    First,
    Second,
}

impl WallSide {
    pub fn number(self) -> u8 {
        match self {
            WallSide::First => 1,
            WallSide::Second => 2,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SegmentId {
    Border(BorderSide),
    Generated { generation: u32, side: WallSide },
}

impl SegmentId {
    pub fn wall(generation: u32, side: WallSide) -> Self {
        SegmentId::Generated { generation, side }
    }

    pub fn is_border(&self) -> bool {
        matches!(self, SegmentId::Border(_))
    }
}

impl fmt::Display for SegmentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SegmentId::Border(side) => write!(f, "b{}", side.number()),
            SegmentId::Generated { generation, side } => {
                write!(f, "{}_{}", generation, side.number())
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FaceId(pub u32);

impl fmt::Display for FaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "p{}", self.0)
    }
}

/// Key of a thickness strip. Strip `n` belongs to generation `n`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StripId(pub u32);

impl fmt::Display for StripId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A planar subdivision of the unit square grown by thick-line insertions.
///
/// Faces iterate in key order, which is also the order they were first
/// created: a split reuses the parent's key in place and every other key is
/// freshly allocated above all existing ones.
#[derive(Debug, Clone)]
pub struct Subdivision {
    pub(crate) segments: BTreeMap<SegmentId, Segment>,
    pub(crate) faces: BTreeMap<FaceId, Face>,
    pub(crate) strips: BTreeMap<StripId, ThicknessPolygon>,
    pub(crate) last_face: u32,
    pub(crate) generation: u32,
}
