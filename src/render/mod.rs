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

//! Turning a triangulation into pixels.

use image::RgbImage;
use rand::Rng;

use crate::operations::triangulation::delaunay::Delaunay;
use crate::sampling::sample_canvas_points;

pub mod palette;
pub mod raster;

pub use palette::Palette;

/// The full pipeline: sample points, triangulate, shade every triangle.
///
/// The triangles touching the super-triangle are rendered too; their fans are
/// what fills the canvas border regions outside the convex hull of the
/// sampled points.
pub fn generate_artwork<R: Rng + ?Sized>(
    width: u32,
    height: u32,
    num_points: usize,
    rng: &mut R,
) -> RgbImage {
    let points = sample_canvas_points(width, height, num_points, rng);

    let triangulation =
        Delaunay::new(points, f64::from(width), f64::from(height)).triangulate();

    let palette = Palette::random(rng);
    let mut image = RgbImage::new(width, height);

    for triangle in &triangulation.triangles {
        raster::fill_triangle(&mut image, triangle, palette.shade(rng));
    }

    image
}
