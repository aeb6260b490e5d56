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

use crate::geometry::point_2::Point2;
use crate::geometry::triangle_2::Triangle2;

/// Point-in-triangle by comparing sub-triangle areas: `p` is covered iff the
/// three triangles it forms with the edges of `t` sum to the area of `t`.
///
/// Areas are rounded through `f32` before comparing, which absorbs the
/// round-off from the sum and makes points on a shared edge count as covered
/// by both neighbors.
pub fn point_in_triangle(p: Point2<f64>, t: &Triangle2<f64>) -> bool {
    let total = t.area() as f32;

    let area_ab = Triangle2::new(p, t.a, t.b).area() as f32;
    let area_bc = Triangle2::new(p, t.b, t.c).area() as f32;
    let area_ca = Triangle2::new(p, t.a, t.c).area() as f32;

    total == area_ab + area_bc + area_ca
}

/// Paints every canvas pixel covered by `t` in the given color.
///
/// Scans the triangle's bounding box clamped to the image, so triangles that
/// hang off the canvas (the super-triangle fans in particular) cost only the
/// visible part. Overlapping triangles overwrite; last one painted wins.
pub fn fill_triangle(image: &mut RgbImage, t: &Triangle2<f64>, color: Rgb<u8>) {
    let (width, height) = image.dimensions();

    let min_x = t.a.x.min(t.b.x).min(t.c.x).max(0.0);
    let max_x = t.a.x.max(t.b.x).max(t.c.x).min(f64::from(width - 1));
    let min_y = t.a.y.min(t.b.y).min(t.c.y).max(0.0);
    let max_y = t.a.y.max(t.b.y).max(t.c.y).min(f64::from(height - 1));

    if min_x > max_x || min_y > max_y {
        return;
    }

    for x in min_x as u32..=max_x as u32 {
        for y in min_y as u32..=max_y as u32 {
            let p = Point2::new(f64::from(x), f64::from(y));

            if point_in_triangle(p, t) {
                image.put_pixel(x, y, color);
            }
        }
    }
}
