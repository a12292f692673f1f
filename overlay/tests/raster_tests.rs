/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

mod planar_projection;

use self::planar_projection::*;

use geo_overlay::*;
use geo_overlay_canvas::*;
use geo_overlay_render_software::*;

use std::sync::Arc;

const FRAME_SIZE: usize = 100;

///
/// Renders a 30m circle in the middle of a 100x100 frame
///
fn render_circle(style: RenderStyle) -> RgbaFrame {
    let projection = PlanarProjection { zoom_scale: 1.0 };
    let circle = GeoCircle::new(GeoCoordinate::new(0.05, 0.05), 30.0);
    let renderer = ShadowCircleRenderer::with_style(circle, Arc::new(style));

    let mut drawing: Vec<Draw> = vec![];
    renderer.draw_with_projection(&projection, MapRect::new(0.0, 0.0, FRAME_SIZE as f64, FRAME_SIZE as f64), &mut drawing);

    CanvasRenderer::render(FRAME_SIZE, FRAME_SIZE, &drawing).unwrap()
}

///
/// A style that draws only the inner shadow
///
fn shadow_only_style(shadow_color: Color) -> RenderStyle {
    RenderStyle {
        fill_color: Color::Rgba(0.0, 0.0, 0.0, 0.0),
        stroke_color: Color::Rgba(0.0, 0.0, 0.0, 0.0),
        shadow_color,
        base_line_width: 0.0,
        base_shadow_blur: 20.0,
        radius_normalization_unit: 100.0,
    }
}

fn distance_from_center(x: usize, y: usize) -> f32 {
    ((x as f32 + 0.5 - 50.0).powi(2) + (y as f32 + 0.5 - 50.0).powi(2)).sqrt()
}

#[test]
fn opaque_shadow_stays_inside_disc() {
    let frame = render_circle(shadow_only_style(Color::Rgba(0.0, 0.0, 0.0, 1.0)));

    for y in 0..FRAME_SIZE {
        for x in 0..FRAME_SIZE {
            if distance_from_center(x, y) > 31.0 {
                assert!(frame.pixel(x, y)[3] == 0.0, "Shadow bled out to ({}, {})", x, y);
            }
        }
    }
}

#[test]
fn shadow_fades_towards_center() {
    let frame = render_circle(shadow_only_style(Color::Rgba(0.0, 0.0, 0.0, 1.0)));

    let edge = frame.pixel(78, 50)[3];
    let inside = frame.pixel(74, 50)[3];
    let center = frame.pixel(50, 50)[3];

    assert!(edge > inside, "Edge {} inside {}", edge, inside);
    assert!(inside > center, "Inside {} center {}", inside, center);
    assert!(center < 0.05, "Center {}", center);
}

#[test]
fn translucent_shadow_is_fainter() {
    let opaque = render_circle(shadow_only_style(Color::Rgba(0.0, 0.0, 0.0, 1.0)));
    let translucent = render_circle(shadow_only_style(Color::Rgba(0.0, 0.0, 0.0, 0.5)));

    let opaque_edge = opaque.pixel(78, 50)[3];
    let translucent_edge = translucent.pixel(78, 50)[3];

    assert!((translucent_edge - opaque_edge * 0.5).abs() < 1e-4, "{} vs {}", translucent_edge, opaque_edge);
}

#[test]
fn default_colours_draw_outline_fill_and_shadow() {
    let style = RenderStyle {
        base_line_width: 10.0,
        base_shadow_blur: 20.0,
        ..RenderStyle::default()
    };
    let frame = render_circle(style.clone());

    // Outline (3 units wide at this radius) in the stroke colour
    let outline = frame.pixel(80, 50);
    let (r, g, b, _) = style.stroke_color.to_rgba_components();
    assert!(outline[3] > 0.99);
    assert!((outline[0] - r).abs() < 0.01 && (outline[1] - g).abs() < 0.01 && (outline[2] - b).abs() < 0.01);

    // Just inside the outline the shadow darkens the translucent fill; the middle is mostly fill
    let near_edge = frame.pixel(76, 50)[3];
    let center = frame.pixel(50, 50)[3];
    assert!(near_edge > center);
    assert!((center - style.fill_color.alpha_component()).abs() < 0.05, "Center alpha {}", center);

    // Nothing outside the outline
    assert!(frame.pixel(95, 50)[3] == 0.0);
}

#[test]
fn rendering_twice_gives_identical_bytes() {
    let first = render_circle(RenderStyle::default());
    let second = render_circle(RenderStyle::default());

    assert!(first.to_rgba8() == second.to_rgba8());
    assert!(first.encode_png().unwrap() == second.encode_png().unwrap());
}
