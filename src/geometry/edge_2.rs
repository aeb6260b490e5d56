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

use crate::geometry::point_2::Point2;
use crate::numeric::scalar::Scalar;

/// An unordered pair of vertices.
///
/// Only lives during cavity-boundary extraction inside the incremental
/// insertion step; the triangulation itself never stores edges.
#[derive(Debug, Clone, Copy)]
pub struct Edge2<T>
where
    T: Scalar,
{
    pub a: Point2<T>,
    pub b: Point2<T>,
}

impl<T> Edge2<T>
where
    T: Scalar,
{
    pub fn new(a: Point2<T>, b: Point2<T>) -> Self {
        Self { a, b }
    }

    pub fn has_vertex(&self, p: &Point2<T>) -> bool {
        self.a == *p || self.b == *p
    }
}

impl<T> PartialEq for Edge2<T>
where
    T: Scalar,
{
    // Unordered: (a, b) and (b, a) are the same edge.
    fn eq(&self, other: &Self) -> bool {
        (self.a == other.a && self.b == other.b) || (self.a == other.b && self.b == other.a)
    }
}
