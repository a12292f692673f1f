/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use smallvec::*;

///
/// Represents a colour as red, green, blue and alpha components in the range 0-1
///
#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
pub enum Color {
    Rgba(f32, f32, f32, f32),
}

impl Color {
    ///
    /// Creates a colour from 8-bit RGB values and an alpha value
    ///
    pub fn from_rgb8(r: u8, g: u8, b: u8, alpha: f32) -> Color {
        Color::Rgba(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, alpha)
    }

    ///
    /// Creates a colour from a list of components, in the order red, green, blue, alpha
    ///
    /// Missing colour channels are read as 0. When there are components, the last one is taken as
    /// the alpha value, otherwise the colour is opaque. This means a list of three components is
    /// read as a colour whose alpha matches its blue channel: callers should always supply four.
    ///
    pub fn from_components(components: &[f32]) -> Color {
        if components.len() < 3 {
            log::warn!("Colour has {} components (expected 4): missing channels will be black", components.len());
        }

        let channel = |idx: usize| components.get(idx).copied().unwrap_or(0.0);
        let alpha = components.last().copied().unwrap_or(1.0);

        Color::Rgba(channel(0), channel(1), channel(2), alpha)
    }

    ///
    /// Returns the components of this colour, in the order red, green, blue, alpha
    ///
    pub fn components(&self) -> SmallVec<[f32; 4]> {
        let Color::Rgba(r, g, b, a) = *self;

        smallvec![r, g, b, a]
    }

    ///
    /// Returns the RGBA components of this colour
    ///
    #[inline]
    pub fn to_rgba_components(&self) -> (f32, f32, f32, f32) {
        let Color::Rgba(r, g, b, a) = *self;

        (r, g, b, a)
    }

    ///
    /// The alpha component of this colour
    ///
    #[inline]
    pub fn alpha_component(&self) -> f32 {
        let Color::Rgba(_, _, _, a) = *self;

        a
    }

    ///
    /// Returns this colour with a different alpha value
    ///
    #[inline]
    pub fn with_alpha(&self, new_alpha: f32) -> Color {
        let Color::Rgba(r, g, b, _) = *self;

        Color::Rgba(r, g, b, new_alpha)
    }

    ///
    /// Splits this colour into a fully opaque colour with the same RGB values and its original alpha
    ///
    /// Shadows cast with a translucent colour come out too light, so the inner shadow is cast in the
    /// opaque colour and the alpha is applied to the whole layer instead.
    ///
    pub fn opaque_with_alpha(&self) -> (Color, f32) {
        let components = self.components();
        let alpha = components.last().copied().unwrap_or(1.0);
        let opaque = Color::from_components(&[components[0], components[1], components[2], 1.0]);

        (opaque, alpha)
    }

    ///
    /// Recombines a colour split by `opaque_with_alpha()`
    ///
    #[inline]
    pub fn from_opaque_with_alpha(opaque: Color, alpha: f32) -> Color {
        opaque.with_alpha(alpha)
    }
}
