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

use crate::geometry::Point2;

/// A closed polygon; the last vertex connects back to the first.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Polygon2<T>
where
    T: Float,
{
    vertices: Vec<Point2<T>>,
}

impl<T> Polygon2<T>
where
    T: Float,
{
    pub fn new(vertices: Vec<Point2<T>>) -> Self {
        Self { vertices }
    }

    pub fn vertices(&self) -> &[Point2<T>] {
        &self.vertices
    }

    pub fn signed_area(&self) -> T {
        signed_area(&self.vertices)
    }

    pub fn area(&self) -> T {
        self.signed_area().abs()
    }

    pub fn is_clockwise(&self) -> bool {
        self.signed_area() < T::zero()
    }

    pub fn contains(&self, p: &Point2<T>) -> bool {
        ring_contains(&self.vertices, p)
    }

    /// Area-weighted centroid, `None` for degenerate rings.
    pub fn centroid(&self) -> Option<Point2<T>> {
        let n = self.vertices.len();
        let a = self.signed_area();
        if n < 3 || a == T::zero() {
            return None;
        }

        let mut cx = T::zero();
        let mut cy = T::zero();
        for i in 0..n {
            let p = &self.vertices[i];
            let q = &self.vertices[(i + 1) % n];
            let w = p.x * q.y - q.x * p.y;
            cx = cx + (p.x + q.x) * w;
            cy = cy + (p.y + q.y) * w;
        }

        let two = T::one() + T::one();
        let six = two + two + two;
        Some(Point2::new(cx / (six * a), cy / (six * a)))
    }

    pub fn fan_triangles(&self) -> impl Iterator<Item = [Point2<T>; 3]> + '_ {
        fan_triangles(&self.vertices)
    }
}

/// Shoelace sum over a closed ring; positive for counter-clockwise rings.
pub fn signed_area<T: Float>(ring: &[Point2<T>]) -> T {
    let n = ring.len();
    if n < 3 {
        return T::zero();
    }

    let mut sum = T::zero();
    for i in 0..n {
        let p = &ring[i];
        let q = &ring[(i + 1) % n];
        sum = sum + (p.x * q.y - q.x * p.y);
    }
    sum / (T::one() + T::one())
}

/// Crossing-number test. Points exactly on the boundary are not
/// guaranteed either way.
pub fn ring_contains<T: Float>(ring: &[Point2<T>], p: &Point2<T>) -> bool {
    let n = ring.len();
    if n < 3 {
        return false;
    }

    let mut inside = false;
    let mut j = n - 1;
    for i in 0..n {
        let pi = &ring[i];
        let pj = &ring[j];

        if (pi.y > p.y) != (pj.y > p.y)
            && p.x < (pj.x - pi.x) * (p.y - pi.y) / (pj.y - pi.y) + pi.x
        {
            inside = !inside;
        }
        j = i;
    }

    inside
}

/// Fan triangulation from the first vertex. Only meaningful for convex
/// (or star-shaped around vertex 0) rings.
pub fn fan_triangles<T: Float>(ring: &[Point2<T>]) -> impl Iterator<Item = [Point2<T>; 3]> + '_ {
    let first = ring.first().copied();
    ring.windows(2)
        .skip(1)
        .filter_map(move |w| first.map(|a| [a, w[0], w[1]]))
}

/// Unsigned area of triangle `abc`.
pub fn triangle_area<T: Float>(a: &Point2<T>, b: &Point2<T>, c: &Point2<T>) -> T {
    let two = T::one() + T::one();
    ((b - a).cross(&(c - a)) / two).abs()
}
