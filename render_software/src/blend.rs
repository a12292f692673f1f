/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::frame::*;

use geo_overlay_canvas::BlendMode;

///
/// Combines a source pixel with a destination pixel (both with premultiplied alpha) using a blend mode
///
#[inline]
pub fn blend_pixel(mode: BlendMode, src: RgbaPixel, dst: RgbaPixel) -> RgbaPixel {
    let (src_alpha, dst_alpha) = (src[3], dst[3]);
    let mut result = [0.0; 4];

    for channel in 0..4 {
        let (s, d) = (src[channel], dst[channel]);

        result[channel] = match mode {
            BlendMode::SourceOver => s + d * (1.0 - src_alpha),
            BlendMode::DestinationOver => s * (1.0 - dst_alpha) + d,
            BlendMode::SourceIn => s * dst_alpha,
            BlendMode::DestinationIn => d * src_alpha,
            BlendMode::SourceOut => s * (1.0 - dst_alpha),
            BlendMode::DestinationOut => d * (1.0 - src_alpha),
            BlendMode::SourceATop => s * dst_alpha + d * (1.0 - src_alpha),
            BlendMode::DestinationATop => s * (1.0 - dst_alpha) + d * src_alpha,
            BlendMode::Screen => s + d - s * d,
            BlendMode::Multiply => s * d + s * (1.0 - dst_alpha) + d * (1.0 - src_alpha),
        };
    }

    result
}

///
/// Blends a source pixel onto a destination pixel, where the source only covers part of the destination
///
/// Pixels outside of a shape (coverage 0) are left alone whatever the blend mode.
///
#[inline]
pub fn blend_with_coverage(mode: BlendMode, src: RgbaPixel, dst: RgbaPixel, coverage: f32) -> RgbaPixel {
    if coverage <= 0.0 {
        return dst;
    }

    let blended = blend_pixel(mode, src, dst);
    if coverage >= 1.0 {
        return blended;
    }

    let mut result = [0.0; 4];
    for channel in 0..4 {
        result[channel] = dst[channel] + (blended[channel] - dst[channel]) * coverage;
    }

    result
}
