/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::geo::*;
use super::map::*;
use super::projection::*;

use geo_overlay_canvas::{Point, Rect};

///
/// Where a circle appears on the drawing surface for a single redraw
///
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct ScreenGeometry {
    /// The center of the circle on the surface
    pub center_point: Point,

    /// The radius of the circle on the surface
    pub radius_pixels: f32,

    /// The square that's twice the radius wide, as the map places it: its origin is at the center of the circle
    pub anchor_rect: Rect,

    /// The square that encloses the circle
    pub bounding_rect: Rect,

    /// Real-world radius divided by the style's normalization unit (independent of zoom)
    pub scale_multiplier: f64,

    /// Surface units per map point around the circle: line widths and blurs are sized in map points
    pub surface_scale: f64,
}

impl ScreenGeometry {
    ///
    /// Converts a length in map points to a length on the drawing surface
    ///
    #[inline]
    pub fn surface_length(&self, map_length: f32) -> f32 {
        (map_length as f64 * self.surface_scale) as f32
    }
}

///
/// Works out where circles on the map appear on the drawing surface, using the projection supplied by the map
///
pub struct ProjectionAdapter<'a, TProjection: MapProjection + ?Sized> {
    projection: &'a TProjection,
}

impl<'a, TProjection: MapProjection + ?Sized> ProjectionAdapter<'a, TProjection> {
    pub fn new(projection: &'a TProjection) -> ProjectionAdapter<'a, TProjection> {
        ProjectionAdapter { projection }
    }

    ///
    /// Projects a circle onto the drawing surface
    ///
    /// A circle with a radius of 0 or less has no size on the surface.
    ///
    pub fn screen_geometry(&self, circle: &GeoCircle, normalization_unit: f64) -> ScreenGeometry {
        let map_center = self.projection.project(circle.center);
        let map_radius = circle.radius.max(0.0) * self.projection.map_points_per_meter(circle.center.latitude);

        // The map anchors the square at the projected center, so its origin on the surface is the center of the circle
        let map_square = MapRect::with_origin(map_center, map_radius * 2.0, map_radius * 2.0);
        let anchor_rect = self.projection.map_rect_to_screen(map_square);

        let radius_pixels = anchor_rect.width / 2.0;
        let bounding_rect = anchor_rect.offset_by(-anchor_rect.width / 2.0, -anchor_rect.height / 2.0);

        ScreenGeometry {
            center_point: anchor_rect.origin(),
            radius_pixels,
            anchor_rect,
            bounding_rect,
            scale_multiplier: circle.scale_multiplier(normalization_unit),
            surface_scale: self.projection.surface_units_per_map_point(map_center),
        }
    }
}
