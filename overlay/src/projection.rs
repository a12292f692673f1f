/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::geo::*;
use super::map::*;

use geo_overlay_canvas::Rect;

use std::f64::consts::PI;

///
/// The conversions between the earth, the projected map and the drawing surface that a map provides to its overlays
///
pub trait MapProjection {
    ///
    /// Converts a coordinate on the earth to a point on the projected map
    ///
    fn project(&self, coordinate: GeoCoordinate) -> MapPoint;

    ///
    /// The number of map points that make up a meter at the specified latitude
    ///
    fn map_points_per_meter(&self, latitude: f64) -> f64;

    ///
    /// Converts a rectangle on the projected map to the drawing surface, at the current zoom level
    ///
    fn map_rect_to_screen(&self, map_rect: MapRect) -> Rect;

    ///
    /// The length on the drawing surface of one map point near a point on the map
    ///
    fn surface_units_per_map_point(&self, near: MapPoint) -> f64 {
        self.map_rect_to_screen(MapRect::with_origin(near, 1.0, 1.0)).width as f64
    }
}

///
/// Spherical mercator projection of the sort used by most web and mobile map views
///
/// The whole world is `MAP_WORLD_SIZE` map points wide and high, with the origin at the top left. The visible
/// part of the map is drawn to the surface scaled by `zoom_scale` (surface units per map point), with the
/// origin of `visible_rect` at the origin of the surface.
///
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct WebMercatorProjection {
    pub visible_rect: MapRect,
    pub zoom_scale: f64,
}

impl WebMercatorProjection {
    pub fn new(visible_rect: MapRect, zoom_scale: f64) -> WebMercatorProjection {
        WebMercatorProjection {
            visible_rect,
            zoom_scale,
        }
    }

    ///
    /// The map point for a coordinate (this doesn't depend on which part of the map is visible)
    ///
    pub fn project_coordinate(coordinate: GeoCoordinate) -> MapPoint {
        let latitude = coordinate.latitude.max(-MAX_MERCATOR_LATITUDE).min(MAX_MERCATOR_LATITUDE);
        let sin_latitude = latitude.to_radians().sin();

        let x = (coordinate.longitude + 180.0) / 360.0 * MAP_WORLD_SIZE;
        let y = (0.5 - ((1.0 + sin_latitude) / (1.0 - sin_latitude)).ln() / (4.0 * PI)) * MAP_WORLD_SIZE;

        MapPoint::new(x, y)
    }

    ///
    /// The number of map points per meter at a latitude (this doesn't depend on which part of the map is visible)
    ///
    pub fn points_per_meter_at_latitude(latitude: f64) -> f64 {
        let latitude = latitude.max(-MAX_MERCATOR_LATITUDE).min(MAX_MERCATOR_LATITUDE);

        MAP_WORLD_SIZE / (EARTH_CIRCUMFERENCE * latitude.to_radians().cos())
    }
}

impl MapProjection for WebMercatorProjection {
    #[inline]
    fn project(&self, coordinate: GeoCoordinate) -> MapPoint {
        WebMercatorProjection::project_coordinate(coordinate)
    }

    #[inline]
    fn map_points_per_meter(&self, latitude: f64) -> f64 {
        WebMercatorProjection::points_per_meter_at_latitude(latitude)
    }

    #[inline]
    fn surface_units_per_map_point(&self, _near: MapPoint) -> f64 {
        self.zoom_scale
    }

    fn map_rect_to_screen(&self, map_rect: MapRect) -> Rect {
        let zoom = self.zoom_scale;

        Rect::new(
            ((map_rect.x - self.visible_rect.x) * zoom) as f32,
            ((map_rect.y - self.visible_rect.y) * zoom) as f32,
            (map_rect.width * zoom) as f32,
            (map_rect.height * zoom) as f32,
        )
    }
}
