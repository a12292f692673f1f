/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use geo_overlay::*;
use geo_overlay_canvas::*;

#[test]
fn default_style_uses_map_blue() {
    let style = RenderStyle::default();

    assert!(style.stroke_color == Color::from_rgb8(25, 120, 224, 1.0));
    assert!(style.fill_color.alpha_component() == 0.1);
    assert!(style.shadow_color.alpha_component() == 0.6);
    assert!(style.base_line_width == 24.0);
    assert!(style.base_shadow_blur == 360.0);
    assert!(style.radius_normalization_unit == 100.0);
}

#[test]
fn shared_default_matches_default() {
    assert!(**DEFAULT_STYLE == RenderStyle::default());
}

#[test]
fn sizes_scale_linearly() {
    let style = RenderStyle::default();

    assert!(style.line_width(1.0) == 24.0);
    assert!(style.line_width(10.0) == 240.0);
    assert!(style.line_width(50.0) == 5.0 * style.line_width(10.0));
    assert!(style.shadow_blur(2.0) == 720.0);
}

#[test]
fn empty_json_is_default_style() {
    assert!(RenderStyle::from_json("{}").unwrap() == RenderStyle::default());
}

#[test]
fn json_overrides_values() {
    let style = RenderStyle::from_json(r#"{ "base_line_width": 4.0, "shadow_color": [0.0, 0.0, 0.0, 0.5] }"#).unwrap();

    assert!(style.base_line_width == 4.0);
    assert!(style.shadow_color == Color::Rgba(0.0, 0.0, 0.0, 0.5));
    assert!(style.fill_color == RenderStyle::default().fill_color);
}

#[test]
fn short_colours_are_zero_filled() {
    let style = RenderStyle::from_json(r#"{ "stroke_color": [1.0, 0.5] }"#).unwrap();

    assert!(style.stroke_color == Color::Rgba(1.0, 0.5, 0.0, 0.5));
}

#[test]
fn style_survives_json() {
    let style = RenderStyle {
        base_shadow_blur: 12.0,
        ..RenderStyle::default()
    };

    let json = serde_json::to_string(&style).unwrap();

    assert!(RenderStyle::from_json(&json).unwrap() == style);
}

#[test]
fn bad_json_is_invalid_style() {
    assert!(matches!(RenderStyle::from_json("{ not json"), Err(OverlayError::InvalidStyle(_))));
}

#[test]
fn zero_normalization_unit_is_invalid() {
    let result = RenderStyle::from_json(r#"{ "radius_normalization_unit": 0.0 }"#);

    assert!(matches!(result, Err(OverlayError::InvalidStyle(_))));
}

#[test]
fn negative_widths_are_invalid() {
    let result = RenderStyle::from_json(r#"{ "base_line_width": -1.0 }"#);

    assert!(matches!(result, Err(OverlayError::InvalidStyle(_))));
}
