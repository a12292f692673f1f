/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

///
/// A position on the surface of the earth, in degrees
///
#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
pub struct GeoCoordinate {
    pub latitude: f64,
    pub longitude: f64,
}

///
/// A circular region of the earth, described by its center and its radius in meters
///
/// Circles are values: changing the radius produces a new circle (see `with_radius()`).
///
#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
pub struct GeoCircle {
    pub center: GeoCoordinate,

    /// Radius in meters. Should be greater than 0: a circle with no radius is drawn with no size.
    pub radius: f64,
}

impl GeoCoordinate {
    #[inline]
    pub fn new(latitude: f64, longitude: f64) -> GeoCoordinate {
        GeoCoordinate { latitude, longitude }
    }
}

impl GeoCircle {
    #[inline]
    pub fn new(center: GeoCoordinate, radius: f64) -> GeoCircle {
        GeoCircle { center, radius }
    }

    ///
    /// A circle with the same center and a new radius
    ///
    #[inline]
    pub fn with_radius(&self, radius: f64) -> GeoCircle {
        GeoCircle {
            center: self.center,
            radius,
        }
    }

    ///
    /// How much bigger this circle is than a circle with a radius of `normalization_unit` meters
    ///
    /// This depends only on the real-world size of the circle and never on the zoom level.
    ///
    #[inline]
    pub fn scale_multiplier(&self, normalization_unit: f64) -> f64 {
        self.radius / normalization_unit
    }
}
