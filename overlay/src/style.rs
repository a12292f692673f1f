/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::error::*;

use geo_overlay_canvas::Color;
use once_cell::sync::Lazy;

use std::sync::Arc;

///
/// The style that circles are drawn with when none is specified
///
pub static DEFAULT_STYLE: Lazy<Arc<RenderStyle>> = Lazy::new(|| Arc::new(RenderStyle::default()));

///
/// How a shadowed circle is drawn
///
/// The line width and shadow blur are the values for a circle with a radius of `radius_normalization_unit`
/// meters: bigger circles get proportionally wider lines and softer shadows.
///
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderStyle {
    #[serde(with = "color_components")]
    pub stroke_color: Color,

    #[serde(with = "color_components")]
    pub fill_color: Color,

    /// Colour of the inner shadow (expected to be translucent)
    #[serde(with = "color_components")]
    pub shadow_color: Color,

    /// Outline width in map points for a circle whose radius is one normalization unit
    pub base_line_width: f32,

    /// Shadow blur in map points for a circle whose radius is one normalization unit
    pub base_shadow_blur: f32,

    /// Radius in meters that the base line width and shadow blur apply to
    pub radius_normalization_unit: f64,
}

impl Default for RenderStyle {
    fn default() -> RenderStyle {
        RenderStyle {
            stroke_color: Color::from_rgb8(25, 120, 224, 1.0),
            fill_color: Color::from_rgb8(25, 120, 224, 0.1),
            shadow_color: Color::from_rgb8(25, 120, 224, 0.6),
            base_line_width: 24.0,
            base_shadow_blur: 360.0,
            radius_normalization_unit: 100.0,
        }
    }
}

impl RenderStyle {
    ///
    /// Reads a style from a JSON configuration, using the default for any value that's left out
    ///
    /// Colours are lists of components (`[r, g, b, a]`, each 0-1).
    ///
    pub fn from_json(json: &str) -> Result<RenderStyle, OverlayError> {
        let style: RenderStyle = serde_json::from_str(json)?;
        style.validate()?;

        Ok(style)
    }

    ///
    /// Checks that the sizes in this style make sense
    ///
    pub fn validate(&self) -> Result<(), OverlayError> {
        if !(self.radius_normalization_unit > 0.0) {
            return Err(OverlayError::InvalidStyle(format!(
                "radius_normalization_unit must be greater than 0 (was {})",
                self.radius_normalization_unit
            )));
        }

        if !(self.base_line_width >= 0.0) || !(self.base_shadow_blur >= 0.0) {
            return Err(OverlayError::InvalidStyle(format!(
                "base_line_width and base_shadow_blur can't be negative (were {} and {})",
                self.base_line_width, self.base_shadow_blur
            )));
        }

        Ok(())
    }

    ///
    /// The width of the circle's outline in map points for a particular scale multiplier
    ///
    #[inline]
    pub fn line_width(&self, scale_multiplier: f64) -> f32 {
        (self.base_line_width as f64 * scale_multiplier) as f32
    }

    ///
    /// The blur radius of the inner shadow in map points for a particular scale multiplier
    ///
    #[inline]
    pub fn shadow_blur(&self, scale_multiplier: f64) -> f32 {
        (self.base_shadow_blur as f64 * scale_multiplier) as f32
    }
}

///
/// Serializes colours as lists of components
///
mod color_components {
    use geo_overlay_canvas::Color;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S: Serializer>(color: &Color, serializer: S) -> Result<S::Ok, S::Error> {
        color.components().as_slice().serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Color, D::Error> {
        let components = Vec::<f32>::deserialize(deserializer)?;

        Ok(Color::from_components(&components))
    }
}
