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

use crate::geometry::{Line2, Point2, Segment2};

/// Intersection of two infinite lines, restricted to the unit square widened
/// by `eps` on every side.
///
/// Parallel lines are detected with an exact zero test on the determinant.
/// A crossing that falls outside `(-eps, 1 + eps)` on either axis is reported
/// as `None`: all geometry handled by this crate lives in the unit square.
pub fn line_line_intersection<T>(line1: &Line2<T>, line2: &Line2<T>, eps: T) -> Option<Point2<T>>
where
    T: Float,
{
    let (x1, y1) = (line1.location.x, line1.location.y);
    let (v1, w1) = (line1.direction.x, line1.direction.y);
    let (x2, y2) = (line2.location.x, line2.location.y);
    let (v2, w2) = (line2.direction.x, line2.direction.y);

    let determinant = v1 * w2 - v2 * w1;
    if determinant == T::zero() {
        return None;
    }

    let t1 = ((x2 - x1) * w2 - (y2 - y1) * v2) / determinant;
    let t2 = ((x2 - x1) * w1 - (y2 - y1) * v1) / determinant;

    let px = x1 + v1 * t1;
    let py = y2 + w2 * t2;

    let lo = -eps;
    let hi = T::one() + eps;
    if lo < px && px < hi && lo < py && py < hi {
        Some(Point2::new(px, py))
    } else {
        None
    }
}

/// Intersection of two finite segments.
///
/// Delegates to [`line_line_intersection`] on the supporting lines, then
/// requires the candidate to fall inside the x range and the y range of both
/// segments. Each range test is inclusive and also accepts values within
/// `eps` of an endpoint coordinate, so segments meeting at a shared endpoint
/// still intersect.
pub fn segment_segment_intersection<T>(
    seg1: &Segment2<T>,
    seg2: &Segment2<T>,
    eps: T,
) -> Option<Point2<T>>
where
    T: Float,
{
    let p = line_line_intersection(&seg1.to_line(), &seg2.to_line(), eps)?;

    let x_check = seg1.spans(0, p.x, eps) && seg2.spans(0, p.x, eps);
    let y_check = seg1.spans(1, p.y, eps) && seg2.spans(1, p.y, eps);

    if x_check && y_check { Some(p) } else { None }
}
