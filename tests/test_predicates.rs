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

use linenet::geometry::{Point2, Segment2};
use linenet::kernel::{are_collinear, are_equal, is_point_on_segment, orient2d};

const EPS: f64 = 1e-6;

#[test]
fn test_are_equal() {
    let p1 = Point2::new(1.00000000001, 2.0);
    let p2 = Point2::new(1.00000000002, 2.0);
    assert!(are_equal(&p1, &p2, EPS));
    assert!(!are_equal(&p1, &Point2::new(1.001, 2.0), EPS));
}

#[test]
fn test_are_collinear() {
    let a = Point2::new(0.0, 0.0);
    let b = Point2::new(1.0, 1.0);
    let c = Point2::new(2.0, 2.0);
    assert!(are_collinear(&a, &b, &c, EPS));
    assert!(!are_collinear(&a, &b, &Point2::new(2.0, 2.1), EPS));
}

#[test]
fn test_orientation_sign() {
    let a = Point2::new(0.0, 0.0);
    let b = Point2::new(1.0, 0.0);
    assert!(orient2d(&a, &b, &Point2::new(0.5, 1.0)) > 0.0);
    assert!(orient2d(&a, &b, &Point2::new(0.5, -1.0)) < 0.0);
}

#[test]
fn test_point_on_segment() {
    let seg = Segment2::new(Point2::new(0.0, 0.0), Point2::new(2.0, 2.0));
    let p_on = Point2::new(1.0, 1.0);
    let p_off = Point2::new(3.0, 3.0);

    assert!(is_point_on_segment(&p_on, &seg, EPS));
    assert!(!is_point_on_segment(&p_off, &seg, EPS));
    assert!(is_point_on_segment(&Point2::new(2.0, 2.0), &seg, EPS));
}
