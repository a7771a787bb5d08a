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
    BorderSide, Face, FaceId, Placement, Point, SegmentId, StripId, Subdivision, Vector, WallSide,
};
use linenet::{GeneratorConfig, SubdivisionError};
use rand::SeedableRng;
use rand::rngs::StdRng;

const EPS: f64 = 1e-6;

fn near(p: &Point, x: f64, y: f64) -> bool {
    (p.x - x).abs() < 1e-9 && (p.y - y).abs() < 1e-9
}

fn horizontal_at_center() -> Placement {
    Placement {
        face: FaceId(1),
        location: Point::new(0.5, 0.5),
        direction: Vector::new(1.0, 0.0),
        perpendicular: Vector::new(0.0, 1.0),
    }
}

#[test]
fn test_unit_square_state() {
    let square = Subdivision::unit_square();
    assert_eq!(square.faces().len(), 1);
    assert_eq!(square.segments().len(), 4);
    assert!(square.strips().is_empty());
    assert_eq!(square.insertions(), 0);
    assert_eq!(square.next_generation(), 1);

    let face = square.face(FaceId(1)).unwrap();
    assert!((face.area - 1.0).abs() < 1e-12);
    assert_eq!(face.edges.len(), face.vertices.len());
    assert!(square.validate(EPS).is_ok());

    let bottom = square.segment(SegmentId::Border(BorderSide::Bottom)).unwrap();
    assert!(bottom.neighbors.contains_key(&SegmentId::Border(BorderSide::Left)));
    assert!(bottom.neighbors.contains_key(&SegmentId::Border(BorderSide::Right)));
}

#[test]
fn test_identifiers_display() {
    assert_eq!(SegmentId::Border(BorderSide::Bottom).to_string(), "b1");
    assert_eq!(SegmentId::Border(BorderSide::Right).to_string(), "b4");
    assert_eq!(SegmentId::wall(3, WallSide::First).to_string(), "3_1");
    assert_eq!(SegmentId::wall(12, WallSide::Second).to_string(), "12_2");
    assert_eq!(FaceId(7).to_string(), "p7");
}

#[test]
fn test_placement_offsets() {
    let placement = horizontal_at_center();
    assert!(near(&placement.offset(0.2, WallSide::First), 0.5, 0.6));
    assert!(near(&placement.offset(0.2, WallSide::Second), 0.5, 0.4));
}

#[test]
fn test_commit_horizontal_line() {
    let config = GeneratorConfig::default();
    let mut state = Subdivision::unit_square();
    let insertion = state.plan_at(&horizontal_at_center(), 0.1, &config).unwrap();
    assert_eq!(insertion.generation, 1);

    let strip = state.commit_insertion(insertion).unwrap();
    assert_eq!(strip, StripId(1));
    assert_eq!(state.insertions(), 1);

    // The split face keeps its key for the lower flank; the upper one is new.
    let lower = state.face(FaceId(1)).unwrap();
    let upper = state.face(FaceId(2)).unwrap();
    assert!((lower.area - 0.45).abs() < 1e-9);
    assert!((upper.area - 0.45).abs() < 1e-9);
    assert!(lower.vertices.iter().all(|v| v.y <= 0.45 + 1e-9));
    assert!(upper.vertices.iter().all(|v| v.y >= 0.55 - 1e-9));

    let thick = &state.strips()[&strip];
    assert!((thick.area - 0.1).abs() < 1e-9);
    assert!((thick.thickness - 0.1).abs() < 1e-12);
    assert!(near(&thick.middle_segment.start, 0.0, 0.5));
    assert!(near(&thick.middle_segment.end, 1.0, 0.5));

    let first = state.segment(SegmentId::wall(1, WallSide::First)).unwrap();
    assert!(near(&first.start, 0.0, 0.55));
    assert!(near(&first.end, 1.0, 0.55));
    assert_eq!(first.start_neighbor(), SegmentId::Border(BorderSide::Left));
    assert_eq!(first.end_neighbor(), SegmentId::Border(BorderSide::Right));

    let left = state.segment(SegmentId::Border(BorderSide::Left)).unwrap();
    let at = left.neighbors[&SegmentId::wall(1, WallSide::First)];
    assert!(near(&at, 0.0, 0.55));
    assert!(left.neighbors.contains_key(&SegmentId::wall(1, WallSide::Second)));

    assert!(state.validate(EPS).is_ok());
    assert!((state.total_area() - 1.0).abs() < 1e-9);
}

#[test]
fn test_vertical_line_inside_flank() {
    let config = GeneratorConfig::default();
    let mut state = Subdivision::unit_square();
    let first = state.plan_at(&horizontal_at_center(), 0.1, &config).unwrap();
    state.commit_insertion(first).unwrap();

    let placement = Placement {
        face: FaceId(2),
        location: Point::new(0.5, 0.8),
        direction: Vector::new(0.0, 1.0),
        perpendicular: Vector::new(-1.0, 0.0),
    };
    let second = state.plan_at(&placement, 0.1, &config).unwrap();
    state.commit_insertion(second).unwrap();

    assert_eq!(state.faces().len(), 3);
    assert_eq!(state.strips().len(), 2);

    let left_piece = state.face(FaceId(3)).unwrap();
    let right_piece = state.face(FaceId(2)).unwrap();
    assert!((left_piece.area - 0.2025).abs() < 1e-9);
    assert!((right_piece.area - 0.2025).abs() < 1e-9);
    assert!(left_piece.vertices.iter().all(|v| v.x <= 0.45 + 1e-9));
    assert!(right_piece.vertices.iter().all(|v| v.x >= 0.55 - 1e-9));

    let wall = state.segment(SegmentId::wall(2, WallSide::First)).unwrap();
    assert_eq!(wall.start_neighbor(), SegmentId::wall(1, WallSide::First));
    assert_eq!(wall.end_neighbor(), SegmentId::Border(BorderSide::Top));

    let below = state.segment(SegmentId::wall(1, WallSide::First)).unwrap();
    assert!(near(&below.neighbors[&SegmentId::wall(2, WallSide::First)], 0.45, 0.55));
    assert!(near(&below.neighbors[&SegmentId::wall(2, WallSide::Second)], 0.55, 0.55));

    assert!((state.strips()[&StripId(2)].area - 0.045).abs() < 1e-9);
    assert!(state.validate(EPS).is_ok());
}

#[test]
fn test_stale_insertion_is_refused() {
    let config = GeneratorConfig::default();
    let mut rng = StdRng::seed_from_u64(4);
    let mut state = Subdivision::unit_square();

    let a = state.plan_insertion(0.05, &config, &mut rng).unwrap();
    let b = state.plan_insertion(0.05, &config, &mut rng).unwrap();
    state.commit_insertion(a).unwrap();

    let faces_before = state.faces().clone();
    let segments_before = state.segments().clone();
    let err = state.commit_insertion(b).unwrap_err();
    assert_eq!(
        err,
        SubdivisionError::StaleInsertion {
            planned: 1,
            expected: 2,
        }
    );
    assert_eq!(state.faces(), &faces_before);
    assert_eq!(state.segments(), &segments_before);
    assert_eq!(state.insertions(), 1);
}

#[test]
fn test_unknown_face_is_refused() {
    let config = GeneratorConfig::default();
    let mut state = Subdivision::unit_square();
    let mut insertion = state.plan_at(&horizontal_at_center(), 0.1, &config).unwrap();
    insertion.face = FaceId(99);

    assert_eq!(
        state.commit_insertion(insertion).unwrap_err(),
        SubdivisionError::UnknownFace(FaceId(99))
    );
    assert_eq!(state.faces().len(), 1);
    assert_eq!(state.segments().len(), 4);
}

#[test]
fn test_negative_thickness_is_refused() {
    let config = GeneratorConfig::default();
    let mut rng = StdRng::seed_from_u64(0);
    let mut state = Subdivision::unit_square();
    let err = state.insert_thick_line(-0.1, &config, &mut rng).unwrap_err();
    assert!(matches!(err, SubdivisionError::InvalidThickness { .. }));
    assert_eq!(state.insertions(), 0);
}

#[test]
fn test_wide_line_exhausts_placement() {
    let config = GeneratorConfig::default().with_max_attempts(50);
    let mut rng = StdRng::seed_from_u64(0);
    let mut state = Subdivision::unit_square();
    let err = state.insert_thick_line(1.5, &config, &mut rng).unwrap_err();
    assert_eq!(
        err,
        SubdivisionError::PlacementExhausted {
            thickness: 1.5,
            attempts: 50,
        }
    );
    assert_eq!(state.faces().len(), 1);
}

#[test]
fn test_face_area_and_containment() {
    let b = SegmentId::Border;
    let face = Face::new(
        vec![
            Point::new(0.0, 0.0),
            Point::new(0.0, 1.0),
            Point::new(0.5, 1.0),
            Point::new(0.5, 0.0),
        ],
        vec![
            b(BorderSide::Bottom),
            b(BorderSide::Left),
            b(BorderSide::Top),
            b(BorderSide::Right),
        ],
    );
    // Clockwise ring, positive stored area.
    assert!((face.area - 0.5).abs() < 1e-12);
    assert!(face.is_aligned());
    assert_eq!(face.position(b(BorderSide::Top)), Some(2));
    assert!(face.contains(&Point::new(0.25, 0.5)));
    assert!(!face.contains(&Point::new(0.75, 0.5)));
}
