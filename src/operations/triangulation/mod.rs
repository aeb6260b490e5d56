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

use crate::geometry::triangle_2::Triangle2;
use crate::numeric::scalar::Scalar;

pub mod delaunay;

/// Result of one triangulation run.
///
/// The triangle list still contains every triangle touching the synthetic
/// super-triangle. Those fans are what make the mesh cover the whole canvas
/// edge to edge, so stripping them is an explicit caller decision, never
/// something the engine does on its own.
#[derive(Debug, Clone)]
pub struct Triangulation<T: Scalar> {
    pub triangles: Vec<Triangle2<T>>,
    super_triangle: Triangle2<T>,
}

impl<T: Scalar> Triangulation<T> {
    pub(crate) fn new(triangles: Vec<Triangle2<T>>, super_triangle: Triangle2<T>) -> Self {
        Self {
            triangles,
            super_triangle,
        }
    }

    /// The synthetic bounding triangle this run was seeded with.
    pub fn super_triangle(&self) -> &Triangle2<T> {
        &self.super_triangle
    }

    /// Drops every triangle that shares a vertex with the super-triangle,
    /// leaving only triangles whose vertices are all input points.
    ///
    /// After this the mesh covers exactly the convex hull of the input, with
    /// uncovered canvas outside it.
    pub fn remove_super_triangle(&mut self) {
        let sup = self.super_triangle;
        self.triangles.retain(|t| !t.shares_vertex_with(&sup));
    }

    /// Consumes the run and hands the triangle list to the caller.
    pub fn into_triangles(self) -> Vec<Triangle2<T>> {
        self.triangles
    }
}
