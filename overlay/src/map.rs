/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

/// Width and height of the whole world in map points
pub const MAP_WORLD_SIZE: f64 = 268_435_456.0;

/// Length of the equator in meters
pub const EARTH_CIRCUMFERENCE: f64 = 40_075_016.686;

/// The furthest latitude from the equator that the mercator projection can show
pub const MAX_MERCATOR_LATITUDE: f64 = 85.051_128_78;

///
/// A point on the projected (flat) map, in map points
///
#[derive(Clone, Copy, PartialEq, Debug, Default, Serialize, Deserialize)]
pub struct MapPoint {
    pub x: f64,
    pub y: f64,
}

///
/// An axis-aligned rectangle on the projected map, in map points
///
#[derive(Clone, Copy, PartialEq, Debug, Default, Serialize, Deserialize)]
pub struct MapRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl MapPoint {
    #[inline]
    pub fn new(x: f64, y: f64) -> MapPoint {
        MapPoint { x, y }
    }
}

impl MapRect {
    #[inline]
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> MapRect {
        MapRect { x, y, width, height }
    }

    ///
    /// A rectangle whose origin is at a particular point
    ///
    #[inline]
    pub fn with_origin(origin: MapPoint, width: f64, height: f64) -> MapRect {
        MapRect::new(origin.x, origin.y, width, height)
    }

    #[inline]
    pub fn origin(&self) -> MapPoint {
        MapPoint::new(self.x, self.y)
    }
}
