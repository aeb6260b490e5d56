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

use approx::assert_relative_eq;
use triart::geometry::{Point2, Triangle2, Vector2};
use triart::kernel::{circumcenter, in_circumcircle, line_intersection};

#[test]
fn test_line_intersection_perpendicular_lines() {
    // x axis meets the vertical line through (2, -1)
    let hit = line_intersection(
        Point2::new(0.0, 0.0),
        Point2::new(2.0, -1.0),
        Vector2::new(1.0, 0.0),
        Vector2::new(0.0, 1.0),
    );
    assert_relative_eq!(hit.x, 2.0);
    assert_relative_eq!(hit.y, 0.0);
}

#[test]
fn test_line_intersection_parallel_lines_is_non_finite() {
    // same direction, offset lines: the denominator cross product is zero
    let hit: Point2<f64> = line_intersection(
        Point2::new(0.0, 0.0),
        Point2::new(0.0, 1.0),
        Vector2::new(1.0, 1.0),
        Vector2::new(2.0, 2.0),
    );
    assert!(!hit.x.is_finite() || !hit.y.is_finite());
}

#[test]
fn test_circumcenter_right_triangle() {
    // circumcenter of a right triangle is the midpoint of the hypotenuse
    let t = Triangle2::new(
        Point2::new(0.0, 0.0),
        Point2::new(1.0, 0.0),
        Point2::new(0.0, 1.0),
    );
    let center = circumcenter(&t);
    assert_relative_eq!(center.x, 0.5);
    assert_relative_eq!(center.y, 0.5);
}

#[test]
fn test_circumcenter_is_equidistant_from_vertices() {
    let t = Triangle2::new(
        Point2::new(1.0, 2.0),
        Point2::new(7.0, 3.0),
        Point2::new(4.0, 9.0),
    );
    let center = circumcenter(&t);

    let ra = center.square_distance(&t.a);
    let rb = center.square_distance(&t.b);
    let rc = center.square_distance(&t.c);
    assert_relative_eq!(ra, rb, max_relative = 1e-12);
    assert_relative_eq!(ra, rc, max_relative = 1e-12);
}

#[test]
fn test_in_circumcircle_interior_point() {
    let t = Triangle2::new(
        Point2::new(0.0, 0.0),
        Point2::new(1.0, 0.0),
        Point2::new(0.0, 1.0),
    );
    assert!(in_circumcircle(&Point2::new(0.3, 0.3), &t));
}

#[test]
fn test_in_circumcircle_far_point() {
    let t = Triangle2::new(
        Point2::new(0.0, 0.0),
        Point2::new(1.0, 0.0),
        Point2::new(0.0, 1.0),
    );
    assert!(!in_circumcircle(&Point2::new(10.0, 10.0), &t));
}

#[test]
fn test_point_on_circle_counts_as_outside() {
    // circumcircle of this right triangle is centered at (0.5, 0.5) with
    // squared radius 0.5; (1, 1) lies exactly on it
    let t = Triangle2::new(
        Point2::new(0.0, 0.0),
        Point2::new(1.0, 0.0),
        Point2::new(0.0, 1.0),
    );
    assert!(!in_circumcircle(&Point2::new(1.0, 1.0), &t));
}

#[test]
fn test_degenerate_triangle_is_never_bad() {
    // collinear vertices: the perpendicular bisectors are parallel, the
    // circumcenter is non-finite, and the strict comparison stays false
    let t = Triangle2::new(
        Point2::new(0.0, 0.0),
        Point2::new(1.0, 1.0),
        Point2::new(2.0, 2.0),
    );
    assert!(!in_circumcircle(&Point2::new(1.0, 0.0), &t));
    assert!(!in_circumcircle(&Point2::new(1.0, 1.0), &t));
    assert!(!in_circumcircle(&Point2::new(1000.0, -1000.0), &t));
}
