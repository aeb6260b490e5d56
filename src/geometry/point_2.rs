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

use crate::geometry::vector_2::Vector2;
use crate::numeric::scalar::Scalar;

/// A 2D point with value semantics.
///
/// Vertex matching throughout the crate uses exact coordinate equality, no
/// epsilon. Two points that differ by one ulp are two distinct vertices.
#[derive(Debug, Clone, Copy)]
pub struct Point2<T>
where
    T: Scalar,
{
    pub x: T,
    pub y: T,
}

impl<T> Point2<T>
where
    T: Scalar,
{
    pub fn new(x: T, y: T) -> Self {
        Self { x, y }
    }

    /// Midpoint of the segment between `self` and `other`.
    pub fn midpoint(&self, other: &Self) -> Self {
        let two = T::from(2.0).unwrap();
        Self {
            x: (self.x + other.x) / two,
            y: (self.y + other.y) / two,
        }
    }

    /// Direction vector from `self` to `other`.
    pub fn vector_to(&self, other: &Self) -> Vector2<T> {
        Vector2 {
            x: other.x - self.x,
            y: other.y - self.y,
        }
    }

    /// Squared Euclidean distance to `other`.
    ///
    /// Squared so distance comparisons work without paying for a square root.
    pub fn square_distance(&self, other: &Self) -> T {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        dx * dx + dy * dy
    }

    /// The point `self + t * dir`.
    pub fn advance(&self, dir: &Vector2<T>, t: T) -> Self {
        Self {
            x: self.x + t * dir.x,
            y: self.y + t * dir.y,
        }
    }
}

impl<T> PartialEq for Point2<T>
where
    T: Scalar,
{
    fn eq(&self, other: &Self) -> bool {
        self.x == other.x && self.y == other.y
    }
}
