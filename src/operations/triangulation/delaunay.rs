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

//! Incremental Delaunay triangulation (Bowyer-Watson).
//!
//! Points are inserted one at a time into a triangulation seeded with a large
//! synthetic super-triangle. Each insertion finds the triangles whose
//! circumcircle contains the new point, carves that cavity out, and fans new
//! triangles from the point to the cavity boundary. After every insertion the
//! triangle list satisfies the Delaunay condition with respect to all points
//! inserted so far (super-triangle corners included).
//!
//! Everything is rebuilt per insertion by linear scans; point sets are small
//! enough that no spatial index is warranted.

use crate::geometry::edge_2::Edge2;
use crate::geometry::point_2::Point2;
use crate::geometry::triangle_2::Triangle2;
use crate::kernel::predicates::in_circumcircle;
use crate::numeric::scalar::Scalar;

use super::Triangulation;

/// One triangulation run over a fixed point set.
///
/// Owns the input list and the growing triangle list for the duration of
/// [`Delaunay::triangulate`]; constructed once per run and consumed by it.
/// Duplicate points and collinear triples are not rejected; they surface as
/// zero-area triangles in the output rather than as errors.
#[derive(Debug, Clone)]
pub struct Delaunay<T: Scalar> {
    points: Vec<Point2<T>>,
    triangles: Vec<Triangle2<T>>,
    super_triangle: Triangle2<T>,
}

impl<T: Scalar> Delaunay<T> {
    /// Sets up a run over `points` on a `width` x `height` canvas.
    ///
    /// The canvas extents only size the super-triangle; its corners sit at
    /// `(-w, -h)`, `(-w, 5h)` and `(5w, -h)`, far enough out that the
    /// circumcircles met during insertion never reach past it for points on
    /// the canvas.
    pub fn new(points: Vec<Point2<T>>, width: T, height: T) -> Self {
        let five = T::from(5.0).unwrap();

        let super_triangle = Triangle2::new(
            Point2::new(-width, -height),
            Point2::new(-width, five * height),
            Point2::new(five * width, -height),
        );

        Self {
            points,
            triangles: Vec::new(),
            super_triangle,
        }
    }

    /// Runs the insertion loop and returns the finished triangulation.
    ///
    /// The result still includes every triangle connected to the
    /// super-triangle; see [`Triangulation::remove_super_triangle`].
    pub fn triangulate(mut self) -> Triangulation<T> {
        self.triangles.push(self.super_triangle);

        let points = std::mem::take(&mut self.points);
        for p in points {
            self.insert(p);
        }

        Triangulation::new(self.triangles, self.super_triangle)
    }

    /// One Bowyer-Watson step: carve the cavity around `p` and re-fan it.
    fn insert(&mut self, p: Point2<T>) {
        // Every triangle whose circumcircle strictly contains p is invalidated.
        let bad_triangles: Vec<Triangle2<T>> = self
            .triangles
            .iter()
            .filter(|t| in_circumcircle(&p, t))
            .copied()
            .collect();

        // The cavity boundary: edges belonging to at most one bad triangle.
        // An edge interior to the cavity is shared by exactly two of them.
        // Sharing is tested by vertex membership, not by edge position, which
        // matches the unordered equality on Edge2/Triangle2.
        let mut hole_boundary: Vec<Edge2<T>> = Vec::new();
        for t in &bad_triangles {
            for edge in t.edges() {
                let shared_by = bad_triangles
                    .iter()
                    .filter(|t2| t2.has_vertex(&edge.a) && t2.has_vertex(&edge.b))
                    .count();

                if shared_by <= 1 {
                    hole_boundary.push(edge);
                }
            }
        }

        // Remove each bad triangle by structural equality, first match only.
        for bad in &bad_triangles {
            if let Some(i) = self.triangles.iter().position(|t| t == bad) {
                self.triangles.remove(i);
            }
        }

        // Re-triangulate the cavity as a fan around the new point.
        for edge in hole_boundary {
            self.triangles.push(Triangle2::new(p, edge.a, edge.b));
        }
    }
}
