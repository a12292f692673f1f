/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use geo_overlay_canvas::Color;

///
/// A pixel as red, green, blue and alpha values, with the colour channels premultiplied by alpha
///
pub type RgbaPixel = [f32; 4];

///
/// A frame of rendered pixels
///
#[derive(Clone, PartialEq, Debug)]
pub struct RgbaFrame {
    width: usize,
    height: usize,
    pixels: Vec<RgbaPixel>,
}

///
/// Converts a colour to a pixel with premultiplied alpha, applying an extra alpha value on the way
///
#[inline]
pub fn premultiplied_pixel(color: Color, alpha: f32) -> RgbaPixel {
    let (r, g, b, a) = color.to_rgba_components();
    let a = (a * alpha).max(0.0).min(1.0);

    [r * a, g * a, b * a, a]
}

impl RgbaFrame {
    ///
    /// Creates a frame where every pixel is transparent
    ///
    pub fn transparent(width: usize, height: usize) -> RgbaFrame {
        RgbaFrame {
            width,
            height,
            pixels: vec![[0.0; 4]; width * height],
        }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    ///
    /// The pixel at a particular position (premultiplied)
    ///
    #[inline]
    pub fn pixel(&self, x: usize, y: usize) -> RgbaPixel {
        self.pixels[y * self.width + x]
    }

    ///
    /// The pixels in this frame, row by row
    ///
    #[inline]
    pub fn pixels(&self) -> &[RgbaPixel] {
        &self.pixels
    }

    #[inline]
    pub fn pixels_mut(&mut self) -> &mut [RgbaPixel] {
        &mut self.pixels
    }

    ///
    /// Converts this frame to 8-bit RGBA values, with alpha that isn't premultiplied
    ///
    pub fn to_rgba8(&self) -> Vec<u8> {
        let to_u8 = |value: f32| (value.max(0.0).min(1.0) * 255.0).round() as u8;
        let mut result = Vec::with_capacity(self.pixels.len() * 4);

        for [r, g, b, a] in self.pixels.iter().copied() {
            if a <= 0.0 {
                result.extend_from_slice(&[0, 0, 0, 0]);
            } else {
                result.extend_from_slice(&[to_u8(r / a), to_u8(g / a), to_u8(b / a), to_u8(a)]);
            }
        }

        result
    }
}
