/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::geo::*;

///
/// The kinds of overlay a map can display
///
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum OverlayKind {
    Circle,
    Polygon,
    Polyline,
    Tile,
}

///
/// An overlay that the map displays on top of its content
///
pub trait MapOverlay {
    ///
    /// What sort of overlay this is
    ///
    fn kind(&self) -> OverlayKind;

    ///
    /// The region covered by this overlay, if it's a circle
    ///
    fn as_geo_circle(&self) -> Option<&GeoCircle> {
        None
    }
}

impl MapOverlay for GeoCircle {
    #[inline]
    fn kind(&self) -> OverlayKind {
        OverlayKind::Circle
    }

    #[inline]
    fn as_geo_circle(&self) -> Option<&GeoCircle> {
        Some(self)
    }
}
