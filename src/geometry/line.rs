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

use num_traits::Float;

use crate::geometry::{Point2, Vector2};

/// Infinite line through `location` along `direction` (not necessarily unit length).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line2<T>
where
    T: Float,
{
    pub location: Point2<T>,
    pub direction: Vector2<T>,
}

impl<T> Line2<T>
where
    T: Float,
{
    pub fn new(location: Point2<T>, direction: Vector2<T>) -> Self {
        Self {
            location,
            direction,
        }
    }

    pub fn through(a: &Point2<T>, b: &Point2<T>) -> Self {
        Self {
            location: *a,
            direction: b - a,
        }
    }
}
