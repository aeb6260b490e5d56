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

//! Random point sets over a pixel canvas, biased toward the borders.

use rand::Rng;

use crate::geometry::point_2::Point2;

/// Chance, in percent, that a sampled coordinate snaps to the low border.
/// The high border gets the same chance.
const BORDER_PERCENT: u32 = 8;

/// Samples `count` distinct integer-coordinate points on a `width` x `height`
/// canvas.
///
/// The four canvas corners are always included so the triangulation reaches
/// the image boundary. Remaining points are drawn per axis: each coordinate
/// independently snaps to `0` or to the far border with [`BORDER_PERCENT`]
/// probability each, otherwise lands uniformly in the interior. Candidates
/// equal to an already chosen point are redrawn, so the result has exactly
/// `count` distinct points (or just the corners when `count <= 4`).
///
/// Requires `width >= 3` and `height >= 3` so the interior range is non-empty.
pub fn sample_canvas_points<R: Rng + ?Sized>(
    width: u32,
    height: u32,
    count: usize,
    rng: &mut R,
) -> Vec<Point2<f64>> {
    let far_x = f64::from(width - 1);
    let far_y = f64::from(height - 1);

    let mut points = vec![
        Point2::new(0.0, 0.0),
        Point2::new(0.0, far_y),
        Point2::new(far_x, 0.0),
        Point2::new(far_x, far_y),
    ];

    while points.len() < count {
        let candidate = Point2::new(sample_axis(width, rng), sample_axis(height, rng));

        if !points.contains(&candidate) {
            points.push(candidate);
        }
    }

    points
}

/// One coordinate along an axis of `extent` pixels: border, far border, or
/// uniform interior.
fn sample_axis<R: Rng + ?Sized>(extent: u32, rng: &mut R) -> f64 {
    let roll = rng.random_range(0..100);

    if roll < BORDER_PERCENT {
        0.0
    } else if roll < BORDER_PERCENT * 2 {
        f64::from(extent - 1)
    } else {
        f64::from(rng.random_range(1..extent - 1))
    }
}
