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

use image::Rgb;
use rand::Rng;

/// A per-image color scheme: one base RGB color plus a jitter amplitude.
///
/// Every triangle gets the base color with an independent uniform offset in
/// `[-variation, variation)` per channel. The base channels are drawn from
/// `[variation, 256 - variation)`, so shaded channels always fit in a `u8`
/// without clamping.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    base: [i32; 3],
    variation: i32,
}

impl Palette {
    /// Draws a palette: jitter amplitude in `[10, 50)`, then a base color
    /// that leaves room for it on every channel.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let variation = rng.random_range(10..50);

        let mut channel = || rng.random_range(variation..256 - variation);
        let base = [channel(), channel(), channel()];

        Self { base, variation }
    }

    /// One shade of the base color, for a single triangle.
    pub fn shade<R: Rng + ?Sized>(&self, rng: &mut R) -> Rgb<u8> {
        let r = self.base[0] + rng.random_range(-self.variation..self.variation);
        let g = self.base[1] + rng.random_range(-self.variation..self.variation);
        let b = self.base[2] + rng.random_range(-self.variation..self.variation);

        Rgb([r as u8, g as u8, b as u8])
    }
}
