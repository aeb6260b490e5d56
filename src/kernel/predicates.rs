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

//! Floating-point geometric predicates.
//!
//! These are deliberately inexact. Near-cocircular configurations can be
//! misclassified, and degenerate (collinear) triangles have a non-finite
//! circumcenter; both are tolerated rather than guarded against.

use crate::geometry::point_2::Point2;
use crate::geometry::triangle_2::Triangle2;
use crate::geometry::vector_2::Vector2;
use crate::numeric::scalar::Scalar;

/// Intersection of the lines `p1 + t * d1` and `p2 + u * d2`.
///
/// Solves `t = ((p2 - p1) x d2) / (d1 x d2)` and evaluates the first line at
/// `t`. When `d1` and `d2` are parallel the denominator is zero and the
/// result has non-finite coordinates. That case is intentionally not checked:
/// downstream comparisons against NaN/infinity come out `false`, which is how
/// degenerate triangles are kept out of the bad-triangle set.
pub fn line_intersection<T: Scalar>(
    p1: Point2<T>,
    p2: Point2<T>,
    d1: Vector2<T>,
    d2: Vector2<T>,
) -> Point2<T> {
    let delta = p1.vector_to(&p2);
    let t = delta.cross(&d2) / d1.cross(&d2);
    p1.advance(&d1, t)
}

/// Circumcenter of `t`, via the intersection of the perpendicular bisectors
/// of edges (a, b) and (b, c).
pub fn circumcenter<T: Scalar>(t: &Triangle2<T>) -> Point2<T> {
    let mid_ab = t.a.midpoint(&t.b);
    let mid_bc = t.b.midpoint(&t.c);

    let bisector_ab = t.a.vector_to(&t.b).perpendicular();
    let bisector_bc = t.b.vector_to(&t.c).perpendicular();

    line_intersection(mid_ab, mid_bc, bisector_ab, bisector_bc)
}

/// True iff `p` lies strictly inside the circumcircle of `t`.
///
/// Points exactly on the circle count as outside. A collinear `t` yields a
/// non-finite circumcenter and the strict comparison returns `false`, so such
/// triangles are never reported as violating the Delaunay condition.
pub fn in_circumcircle<T: Scalar>(p: &Point2<T>, t: &Triangle2<T>) -> bool {
    let center = circumcenter(t);

    let square_radius = center.square_distance(&t.a);
    center.square_distance(p) < square_radius
}
