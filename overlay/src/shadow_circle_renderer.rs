/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::error::*;
use super::geo::*;
use super::map::*;
use super::overlay::*;
use super::projection::*;
use super::screen_geometry::*;
use super::style::*;

use geo_overlay_canvas::*;

use std::sync::Arc;

///
/// Draws a circle on the map as a filled, outlined disc with an inner shadow
///
/// A renderer is bound to a single circle: when the circle changes, the map replaces the overlay and creates a
/// new renderer for it.
///
#[derive(Clone, Debug)]
pub struct ShadowCircleRenderer {
    circle: GeoCircle,
    style: Arc<RenderStyle>,
}

impl ShadowCircleRenderer {
    ///
    /// Creates a renderer for a circle that uses the default style
    ///
    pub fn new(circle: GeoCircle) -> ShadowCircleRenderer {
        ShadowCircleRenderer {
            circle,
            style: Arc::clone(&DEFAULT_STYLE),
        }
    }

    ///
    /// Creates a renderer for a circle with a custom style
    ///
    pub fn with_style(circle: GeoCircle, style: Arc<RenderStyle>) -> ShadowCircleRenderer {
        ShadowCircleRenderer { circle, style }
    }

    ///
    /// Creates a renderer for an overlay supplied by the map, which has to be a circle
    ///
    pub fn for_overlay(overlay: &dyn MapOverlay) -> Result<ShadowCircleRenderer, OverlayError> {
        match overlay.as_geo_circle() {
            Some(circle) => Ok(ShadowCircleRenderer::new(*circle)),
            None => Err(OverlayError::UnsupportedOverlay(overlay.kind())),
        }
    }

    #[inline]
    pub fn circle(&self) -> &GeoCircle {
        &self.circle
    }

    #[inline]
    pub fn style(&self) -> &RenderStyle {
        &self.style
    }

    ///
    /// Draws the part of the circle that's in the visible region of a web mercator map at the specified zoom scale
    ///
    pub fn draw<TContext: GraphicsContext + ?Sized>(&self, map_rect: MapRect, zoom_scale: f64, gc: &mut TContext) {
        let projection = WebMercatorProjection::new(map_rect, zoom_scale);

        self.draw_with_projection(&projection, map_rect, gc);
    }

    ///
    /// Draws the part of the circle inside a region of the map, using the map's own projection
    ///
    pub fn draw_with_projection<TProjection, TContext>(&self, projection: &TProjection, map_rect: MapRect, gc: &mut TContext)
    where
        TProjection: MapProjection + ?Sized,
        TContext: GraphicsContext + ?Sized,
    {
        let geometry = ProjectionAdapter::new(projection).screen_geometry(&self.circle, self.style.radius_normalization_unit);
        let target = projection.map_rect_to_screen(map_rect);

        log::trace!("Drawing circle {:?} as {:?} in {:?}", self.circle, geometry, target);

        draw_shadow_circle(&geometry, &self.style, target, gc);
    }
}

///
/// Draws a circle with an inner shadow at a position on the drawing surface
///
/// The line width and shadow blur of the style are map point sizes: they're converted to the surface with the same
/// scale as the circle itself, so the circle looks the same at every zoom level. Nothing is drawn if the circle is
/// entirely outside `target_rect`. Any state changed while drawing the shadow is
/// restored before this returns.
///
pub fn draw_shadow_circle<TContext>(geometry: &ScreenGeometry, style: &RenderStyle, target_rect: Rect, gc: &mut TContext)
where
    TContext: GraphicsContext + ?Sized,
{
    let line_width = geometry.surface_length(style.line_width(geometry.scale_multiplier));
    let drawn_extent = geometry.bounding_rect.inset_by(-line_width / 2.0);

    if !drawn_extent.intersects(&target_rect) {
        log::debug!("Circle at {:?} is outside {:?}: not drawing", geometry.bounding_rect, target_rect);
        return;
    }

    // The disc: one path, filled and then outlined
    gc.fill_color(style.fill_color);
    gc.stroke_color(style.stroke_color);
    gc.line_width(line_width);

    gc.new_path();
    gc.circle(geometry.center_point.x, geometry.center_point.y, geometry.radius_pixels);
    gc.fill_and_stroke();

    draw_inner_shadow(geometry, style, gc);
}

///
/// Draws the inner shadow of a circle: a blurred shadow cast inwards from the edge of the disc
///
fn draw_inner_shadow<TContext>(geometry: &ScreenGeometry, style: &RenderStyle, gc: &mut TContext)
where
    TContext: GraphicsContext + ?Sized,
{
    // The anchor square starts at the center of the circle: moving it back by half its size centers it on the disc
    let frame = geometry.anchor_rect;
    let shadow_frame = frame.offset_by(-frame.width / 2.0, -frame.height / 2.0);

    // A shadow cast in a translucent colour is too faint, so cast it opaque and fade the whole layer instead
    let (opaque_color, alpha) = style.shadow_color.opaque_with_alpha();

    let mut state = gc.saved_state();
    state.new_path();
    state.oval(shadow_frame);
    state.clip();
    state.global_alpha(alpha);

    // Filling the disc with source-out leaves nothing of the disc itself, only the part of its shadow that falls inside it
    let mut layer = state.transparency_layer();
    let blur = geometry.surface_length(style.shadow_blur(geometry.scale_multiplier));

    layer.shadow(Shadow::centered(blur, opaque_color));
    layer.blend_mode(BlendMode::SourceOut);
    layer.fill_color(opaque_color);
    layer.new_path();
    layer.oval(shadow_frame);
    layer.fill();
}
