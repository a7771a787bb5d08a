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

use std::ops::{Add, Sub};

use num_traits::Float;

use crate::geometry::Vector2;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point2<T>
where
    T: Float,
{
    pub x: T,
    pub y: T,
}

impl<T> Point2<T>
where
    T: Float,
{
    pub fn new(x: T, y: T) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: &Self) -> T {
        (self.x - other.x).hypot(self.y - other.y)
    }

    pub fn add_vector(&self, v: &Vector2<T>) -> Self {
        Point2 {
            x: self.x + v.x,
            y: self.y + v.y,
        }
    }

    pub fn sub_vector(&self, v: &Vector2<T>) -> Self {
        Point2 {
            x: self.x - v.x,
            y: self.y - v.y,
        }
    }
}

impl<T: Float> Sub for Point2<T> {
    type Output = Vector2<T>;
    fn sub(self, rhs: Point2<T>) -> Vector2<T> {
        Vector2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl<'a, 'b, T: Float> Sub<&'b Point2<T>> for &'a Point2<T> {
    type Output = Vector2<T>;
    fn sub(self, rhs: &'b Point2<T>) -> Vector2<T> {
        *self - *rhs
    }
}

impl<T: Float> Add<Vector2<T>> for Point2<T> {
    type Output = Point2<T>;
    fn add(self, rhs: Vector2<T>) -> Point2<T> {
        self.add_vector(&rhs)
    }
}

impl<T: Float> Sub<Vector2<T>> for Point2<T> {
    type Output = Point2<T>;
    fn sub(self, rhs: Vector2<T>) -> Point2<T> {
        self.sub_vector(&rhs)
    }
}

impl<T: Float> From<(T, T)> for Point2<T> {
    fn from((x, y): (T, T)) -> Self {
        Point2 { x, y }
    }
}

impl<T: Float> From<Point2<T>> for (T, T) {
    fn from(p: Point2<T>) -> Self {
        (p.x, p.y)
    }
}
