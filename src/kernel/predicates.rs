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

use crate::geometry::{Point2, Segment2};
use crate::kernel::orient2d;

pub fn are_equal<T: Float>(p1: &Point2<T>, p2: &Point2<T>, eps: T) -> bool {
    (p1.x - p2.x).abs() < eps && (p1.y - p2.y).abs() < eps
}

/// Collinearity measured as the distance from `c` to the line `ab`.
pub fn are_collinear<T: Float>(a: &Point2<T>, b: &Point2<T>, c: &Point2<T>, eps: T) -> bool {
    let len = a.distance_to(b);
    if len <= eps {
        // A and B coincide; collinear iff C coincides too
        return a.distance_to(c) <= eps;
    }
    (orient2d(a, b, c) / len).abs() <= eps
}

pub fn is_point_on_segment<T: Float>(p: &Point2<T>, seg: &Segment2<T>, eps: T) -> bool {
    // 1.  If P, A, B are not collinear, P cannot lie on AB
    if !are_collinear(&seg.a, &seg.b, p, eps) {
        return false;
    }

    // 2.  On both axes, P must lie between A and B (±eps)
    let within = |v: T, a: T, b: T| {
        let (lo, hi) = if a < b { (a, b) } else { (b, a) };
        v >= lo - eps && v <= hi + eps
    };
    within(p.x, seg.a.x, seg.b.x) && within(p.y, seg.a.y, seg.b.y)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equal_within_tolerance() {
        let a = Point2::new(0.25, 0.75);
        let b = Point2::new(0.25 + 1e-8, 0.75 - 1e-8);
        assert!(are_equal(&a, &b, 1e-6));
        assert!(!are_equal(&a, &Point2::new(0.26, 0.75), 1e-6));
    }

    #[test]
    fn point_on_segment_interior_and_ends() {
        let seg = Segment2::new(Point2::new(1.0, 0.0), Point2::new(0.0, 0.0));
        assert!(is_point_on_segment(&Point2::new(0.3, 0.0), &seg, 1e-6));
        assert!(is_point_on_segment(&Point2::new(0.0, 0.0), &seg, 1e-6));
        assert!(is_point_on_segment(&Point2::new(1.0, 5e-7), &seg, 1e-6));
        assert!(!is_point_on_segment(&Point2::new(1.1, 0.0), &seg, 1e-6));
        assert!(!is_point_on_segment(&Point2::new(0.5, 0.01), &seg, 1e-6));
    }

    #[test]
    fn degenerate_segment() {
        let p = Point2::new(0.5, 0.5);
        let seg = Segment2::new(p, p);
        assert!(is_point_on_segment(&p, &seg, 1e-6));
        assert!(!is_point_on_segment(&Point2::new(0.6, 0.5), &seg, 1e-6));
    }
}
