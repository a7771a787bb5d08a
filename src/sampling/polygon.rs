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
use rand::distr::Distribution;
use rand::distr::weighted::WeightedIndex;

use crate::geometry::{Point2, fan_triangles, triangle_area};

/// Uniform point inside the convex polygon bounded by `ring`.
///
/// The polygon is fanned into triangles from its first vertex, a triangle is
/// chosen by area and a point is drawn uniformly inside it. Returns `None`
/// for polygons without positive area.
pub fn sample_in_polygon<R: Rng>(ring: &[Point2<f64>], rng: &mut R) -> Option<Point2<f64>> {
    let triangles: Vec<[Point2<f64>; 3]> = fan_triangles(ring).collect();
    let weights: Vec<f64> = triangles
        .iter()
        .map(|[a, b, c]| triangle_area(a, b, c))
        .collect();

    let index = WeightedIndex::new(&weights).ok()?;
    let [a, b, c] = triangles[index.sample(rng)];
    Some(sample_in_triangle(&a, &b, &c, rng))
}

pub fn sample_in_triangle<R: Rng>(
    a: &Point2<f64>,
    b: &Point2<f64>,
    c: &Point2<f64>,
    rng: &mut R,
) -> Point2<f64> {
    let r1 = rng.random::<f64>().sqrt();
    let r2 = rng.random::<f64>();

    let wa = 1.0 - r1;
    let wb = r1 * (1.0 - r2);
    let wc = r1 * r2;

    Point2::new(
        wa * a.x + wb * b.x + wc * c.x,
        wa * a.y + wb * b.y + wc * c.y,
    )
}
