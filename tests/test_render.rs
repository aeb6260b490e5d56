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

use image::{Rgb, RgbImage};
use rand::SeedableRng;
use rand::rngs::StdRng;
use triart::geometry::{Point2, Triangle2};
use triart::render::raster::{fill_triangle, point_in_triangle};
use triart::render::{Palette, generate_artwork};
use triart::sampling::sample_canvas_points;

#[test]
fn test_sampling_includes_the_four_corners() {
    let mut rng = StdRng::seed_from_u64(7);
    let points = sample_canvas_points(64, 48, 24, &mut rng);

    assert!(points.contains(&Point2::new(0.0, 0.0)));
    assert!(points.contains(&Point2::new(0.0, 47.0)));
    assert!(points.contains(&Point2::new(63.0, 0.0)));
    assert!(points.contains(&Point2::new(63.0, 47.0)));
}

#[test]
fn test_sampling_count_bounds_and_uniqueness() {
    let mut rng = StdRng::seed_from_u64(42);
    let points = sample_canvas_points(64, 48, 40, &mut rng);

    assert_eq!(points.len(), 40);

    for p in &points {
        assert!(p.x >= 0.0 && p.x <= 63.0, "x out of canvas: {p:?}");
        assert!(p.y >= 0.0 && p.y <= 47.0, "y out of canvas: {p:?}");
        // samples land on the pixel grid
        assert_eq!(p.x.fract(), 0.0);
        assert_eq!(p.y.fract(), 0.0);
    }

    for (i, p) in points.iter().enumerate() {
        assert!(
            !points[i + 1..].contains(p),
            "duplicate sampled point: {p:?}"
        );
    }
}

#[test]
fn test_sampling_small_count_still_yields_corners() {
    let mut rng = StdRng::seed_from_u64(1);
    let points = sample_canvas_points(32, 32, 2, &mut rng);
    // the corner seed is unconditional
    assert_eq!(points.len(), 4);
}

#[test]
fn test_palette_shades_do_not_panic_across_seeds() {
    // shade arithmetic must stay within u8 for any draw
    for seed in 0..32 {
        let mut rng = StdRng::seed_from_u64(seed);
        let palette = Palette::random(&mut rng);
        for _ in 0..64 {
            let _ = palette.shade(&mut rng);
        }
    }
}

#[test]
fn test_point_in_triangle_interior_edge_exterior() {
    let t = Triangle2::new(
        Point2::new(0.0, 0.0),
        Point2::new(4.0, 0.0),
        Point2::new(0.0, 4.0),
    );

    assert!(point_in_triangle(Point2::new(1.0, 1.0), &t));
    assert!(point_in_triangle(Point2::new(2.0, 0.0), &t));
    assert!(!point_in_triangle(Point2::new(4.0, 4.0), &t));
}

#[test]
fn test_shared_edge_is_covered_by_both_triangles() {
    let lower = Triangle2::new(
        Point2::new(0.0, 0.0),
        Point2::new(4.0, 0.0),
        Point2::new(4.0, 4.0),
    );
    let upper = Triangle2::new(
        Point2::new(0.0, 0.0),
        Point2::new(0.0, 4.0),
        Point2::new(4.0, 4.0),
    );

    let on_diagonal = Point2::new(2.0, 2.0);
    assert!(point_in_triangle(on_diagonal, &lower));
    assert!(point_in_triangle(on_diagonal, &upper));
}

#[test]
fn test_fill_triangle_covers_a_split_square() {
    let mut image = RgbImage::new(4, 4);
    let white = Rgb([255u8, 255, 255]);

    let lower = Triangle2::new(
        Point2::new(0.0, 0.0),
        Point2::new(3.0, 0.0),
        Point2::new(3.0, 3.0),
    );
    let upper = Triangle2::new(
        Point2::new(0.0, 0.0),
        Point2::new(0.0, 3.0),
        Point2::new(3.0, 3.0),
    );
    fill_triangle(&mut image, &lower, white);
    fill_triangle(&mut image, &upper, white);

    for (x, y, pixel) in image.enumerate_pixels() {
        assert_eq!(*pixel, white, "uncovered pixel at ({x}, {y})");
    }
}

#[test]
fn test_fill_triangle_clamps_to_the_canvas() {
    let mut image = RgbImage::new(4, 4);
    let red = Rgb([200u8, 30, 30]);

    // hangs far off every side of the canvas, like a super-triangle fan
    let t = Triangle2::new(
        Point2::new(-100.0, -100.0),
        Point2::new(-100.0, 500.0),
        Point2::new(500.0, -100.0),
    );
    fill_triangle(&mut image, &t, red);

    for (_, _, pixel) in image.enumerate_pixels() {
        assert_eq!(*pixel, red);
    }
}

#[test]
fn test_fill_triangle_fully_off_canvas_is_a_no_op() {
    let mut image = RgbImage::new(4, 4);
    let t = Triangle2::new(
        Point2::new(-10.0, -10.0),
        Point2::new(-5.0, -10.0),
        Point2::new(-10.0, -5.0),
    );
    fill_triangle(&mut image, &t, Rgb([255u8, 255, 255]));

    for (_, _, pixel) in image.enumerate_pixels() {
        assert_eq!(*pixel, Rgb([0u8, 0, 0]));
    }
}

#[test]
fn test_generate_artwork_dimensions_and_content() {
    let mut rng = StdRng::seed_from_u64(1234);
    let image = generate_artwork(32, 24, 12, &mut rng);

    assert_eq!(image.dimensions(), (32, 24));

    // the super-triangle fans keep the whole canvas painted, so the image
    // cannot be uniformly one color
    let first = *image.get_pixel(0, 0);
    assert!(image.pixels().any(|p| *p != first));
}
