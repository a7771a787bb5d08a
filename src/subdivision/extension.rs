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

use tracing::trace;

use crate::errors::{ProbeSide, SubdivisionError};
use crate::geometry::{Segment2, segment_segment_intersection};
use crate::sampling::canonical_direction;
use crate::subdivision::{Point, SegmentId, Vector, segment::Segment};

/// A crossing between a probe and an existing segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProbeHit {
    pub segment: SegmentId,
    pub point: Point,
    /// Distance from the probe's anchor.
    pub distance: f64,
}

/// Crossings of the segment `location ± extent * direction` with `candidates`.
pub fn probe_hits<'a, I>(
    candidates: I,
    location: &Point,
    direction: &Vector,
    extent: f64,
    eps: f64,
) -> Vec<ProbeHit>
where
    I: IntoIterator<Item = (SegmentId, &'a Segment)>,
{
    let reach = direction.scale(extent);
    let probe = Segment2::new(location.sub_vector(&reach), location.add_vector(&reach));

    candidates
        .into_iter()
        .filter_map(|(id, segment)| {
            segment_segment_intersection(&probe, &segment.geometry(), eps).map(|point| ProbeHit {
                segment: id,
                point,
                distance: location.distance_to(&point),
            })
        })
        .collect()
}

fn split_at(hits: &[ProbeHit], pivot: f64, coord: impl Fn(&Point) -> f64) -> (Vec<ProbeHit>, Vec<ProbeHit>) {
    let behind = hits.iter().filter(|h| coord(&h.point) < pivot).copied().collect();
    let ahead = hits.iter().filter(|h| coord(&h.point) > pivot).copied().collect();
    (behind, ahead)
}

fn nearest(hits: &[ProbeHit]) -> Option<ProbeHit> {
    hits.iter()
        .min_by(|a, b| a.distance.total_cmp(&b.distance))
        .copied()
}

/// Grows a wall through `location` along `direction` until it meets the
/// nearest candidate on each side.
///
/// Hits are split into those behind and ahead of `location` by x; when one
/// side comes out empty (a near-vertical probe) they are split by y instead.
/// The wall runs from the endpoint with the smaller x to the other one, the
/// order being read off the canonical direction so that rounding in nearly
/// vertical probes cannot flip it. Its two terminating segments become its
/// initial neighbors.
pub fn extend_segment<'a, I>(
    candidates: I,
    location: Point,
    direction: Vector,
    extent: f64,
    eps: f64,
) -> Result<Segment, SubdivisionError>
where
    I: IntoIterator<Item = (SegmentId, &'a Segment)>,
{
    let hits = probe_hits(candidates, &location, &direction, extent, eps);

    let (mut behind, mut ahead) = split_at(&hits, location.x, |p| p.x);
    if behind.is_empty() || ahead.is_empty() {
        (behind, ahead) = split_at(&hits, location.y, |p| p.y);
    }

    let back = nearest(&behind).ok_or(SubdivisionError::DegenerateProbe {
        side: ProbeSide::Behind,
        location,
    })?;
    let front = nearest(&ahead).ok_or(SubdivisionError::DegenerateProbe {
        side: ProbeSide::Ahead,
        location,
    })?;

    let (start, end) = if (front.point - back.point).dot(&canonical_direction(&direction)) < 0.0 {
        (front, back)
    } else {
        (back, front)
    };

    trace!(
        hits = hits.len(),
        start = %start.segment,
        end = %end.segment,
        "probe resolved"
    );

    Ok(Segment::new(
        (start.segment, start.point),
        (end.segment, end.point),
    ))
}
