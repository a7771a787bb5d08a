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

use linenet::subdivision::{
    BorderSide, Point, SegmentId, Subdivision, Vector, extend_segment, probe_hits,
};
use linenet::{ProbeSide, SubdivisionError};

const EPS: f64 = 1e-6;

fn border(side: BorderSide) -> SegmentId {
    SegmentId::Border(side)
}

fn assert_at(p: Point, x: f64, y: f64) {
    assert!(
        (p.x - x).abs() < 1e-9 && (p.y - y).abs() < 1e-9,
        "expected ({x}, {y}), got ({}, {})",
        p.x,
        p.y
    );
}

fn probe(
    square: &Subdivision,
    location: Point,
    direction: Vector,
    extent: f64,
) -> Result<linenet::subdivision::Segment, SubdivisionError> {
    extend_segment(
        square.segments().iter().map(|(id, s)| (*id, s)),
        location,
        direction,
        extent,
        EPS,
    )
}

#[test]
fn test_horizontal_probe_hits_left_and_right() {
    let square = Subdivision::unit_square();
    let wall = probe(&square, Point::new(0.3, 0.4), Vector::new(1.0, 0.0), 10.0).unwrap();

    assert_eq!(wall.start_neighbor(), border(BorderSide::Left));
    assert_eq!(wall.end_neighbor(), border(BorderSide::Right));
    assert_at(wall.start, 0.0, 0.4);
    assert_at(wall.end, 1.0, 0.4);
    assert_eq!(wall.neighbors.len(), 2);
}

#[test]
fn test_probe_orientation_ignores_direction_sign() {
    let square = Subdivision::unit_square();
    let forward = probe(&square, Point::new(0.6, 0.2), Vector::new(0.6, 0.8), 10.0).unwrap();
    let backward = probe(&square, Point::new(0.6, 0.2), Vector::new(-0.6, -0.8), 10.0).unwrap();

    assert_eq!(forward.neighbors_initial[0].0, backward.neighbors_initial[0].0);
    assert_eq!(forward.neighbors_initial[1].0, backward.neighbors_initial[1].0);
    assert!(forward.start.distance_to(&backward.start) < 1e-12);
    assert!(forward.end.distance_to(&backward.end) < 1e-12);

    assert_eq!(forward.start_neighbor(), border(BorderSide::Bottom));
    assert_eq!(forward.end_neighbor(), border(BorderSide::Right));
    assert_at(forward.start, 0.45, 0.0);
    assert_at(forward.end, 1.0, 0.2 + 0.4 * 0.8 / 0.6);
}

#[test]
fn test_vertical_probe_falls_back_to_y() {
    let square = Subdivision::unit_square();
    for direction in [Vector::new(0.0, 1.0), Vector::new(0.0, -1.0)] {
        let wall = probe(&square, Point::new(0.3, 0.4), direction, 10.0).unwrap();
        assert_eq!(wall.start_neighbor(), border(BorderSide::Bottom));
        assert_eq!(wall.end_neighbor(), border(BorderSide::Top));
        assert_at(wall.start, 0.3, 0.0);
        assert_at(wall.end, 0.3, 1.0);
    }
}

#[test]
fn test_probe_hits_skip_parallel_edges() {
    let square = Subdivision::unit_square();
    let hits = probe_hits(
        square.segments().iter().map(|(id, s)| (*id, s)),
        &Point::new(0.5, 0.5),
        &Vector::new(1.0, 0.0),
        10.0,
        EPS,
    );
    let mut ids: Vec<_> = hits.iter().map(|h| h.segment).collect();
    ids.sort();
    assert_eq!(ids, vec![border(BorderSide::Left), border(BorderSide::Right)]);
    for hit in &hits {
        assert!((hit.distance - 0.5).abs() < 1e-9);
    }
}

#[test]
fn test_probe_outside_square_is_degenerate() {
    let square = Subdivision::unit_square();
    let err = probe(&square, Point::new(2.0, 0.5), Vector::new(0.0, 1.0), 10.0).unwrap_err();
    assert!(matches!(
        err,
        SubdivisionError::DegenerateProbe {
            side: ProbeSide::Behind,
            ..
        }
    ));
}

#[test]
fn test_short_probe_is_degenerate() {
    let square = Subdivision::unit_square();
    let err = probe(&square, Point::new(0.5, 0.5), Vector::new(1.0, 0.0), 0.1).unwrap_err();
    assert!(matches!(err, SubdivisionError::DegenerateProbe { .. }));
}
