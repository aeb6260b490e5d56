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

use crate::geometry::edge_2::Edge2;
use crate::geometry::point_2::Point2;
use crate::numeric::scalar::Scalar;

/// A triangle stored as an ordered vertex triple but compared as an
/// unordered set of vertices.
#[derive(Debug, Clone, Copy)]
pub struct Triangle2<T>
where
    T: Scalar,
{
    pub a: Point2<T>,
    pub b: Point2<T>,
    pub c: Point2<T>,
}

impl<T> Triangle2<T>
where
    T: Scalar,
{
    pub fn new(a: Point2<T>, b: Point2<T>, c: Point2<T>) -> Self {
        Self { a, b, c }
    }

    /// True if `p` is one of the three vertices, by exact equality.
    pub fn has_vertex(&self, p: &Point2<T>) -> bool {
        self.a == *p || self.b == *p || self.c == *p
    }

    /// True if any vertex of `other` is also a vertex of `self`.
    pub fn shares_vertex_with(&self, other: &Self) -> bool {
        self.has_vertex(&other.a) || self.has_vertex(&other.b) || self.has_vertex(&other.c)
    }

    /// The three edges, in vertex order.
    pub fn edges(&self) -> [Edge2<T>; 3] {
        [
            Edge2::new(self.a, self.b),
            Edge2::new(self.b, self.c),
            Edge2::new(self.c, self.a),
        ]
    }

    /// Unsigned area via the shoelace formula. Zero for collinear vertices.
    pub fn area(&self) -> T {
        let half = T::from(0.5).unwrap();
        (half
            * (self.a.x * (self.b.y - self.c.y)
                + self.b.x * (self.c.y - self.a.y)
                + self.c.x * (self.a.y - self.b.y)))
            .abs()
    }
}

impl<T> PartialEq for Triangle2<T>
where
    T: Scalar,
{
    // Order and rotation independent: (A, B, C) == (C, B, A) == (B, C, A).
    fn eq(&self, other: &Self) -> bool {
        other.has_vertex(&self.a)
            && other.has_vertex(&self.b)
            && other.has_vertex(&self.c)
            && self.has_vertex(&other.a)
            && self.has_vertex(&other.b)
            && self.has_vertex(&other.c)
    }
}
