/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//!
//! # geo_overlay
//!
//! Draws a circular region of a map as a filled, stroked disc with an inner shadow that fades in from its edge.
//! The width of the line and the softness of the shadow follow the real-world radius of the circle rather than
//! the current zoom level, so a circle keeps the same look however far the map is zoomed in or out.
//!
//! ```
//! # use geo_overlay::*;
//! # use geo_overlay_canvas::*;
//! let circle = GeoCircle::new(GeoCoordinate::new(40.748817, -73.985428), 1000.0);
//! let renderer = ShadowCircleRenderer::new(circle);
//!
//! // The host decides which part of the map is visible and how far it's zoomed in
//! let center = WebMercatorProjection::project_coordinate(circle.center);
//! let visible = MapRect::new(center.x - 50_000.0, center.y - 50_000.0, 100_000.0, 100_000.0);
//!
//! let mut drawing: Vec<Draw> = vec![];
//! renderer.draw(visible, 0.005, &mut drawing);
//!
//! // The outline is 240 map points wide, which is 1.2 units on the surface at this zoom
//! let line_width = drawing.iter().find_map(|draw| match draw {
//!     Draw::LineWidth(width) => Some(*width),
//!     _ => None,
//! });
//! assert!((line_width.unwrap() - 1.2).abs() < 1e-6);
//! ```
//!

#[macro_use]
extern crate serde_derive;

mod error;
mod geo;
mod map;
mod overlay;
mod projection;
mod screen_geometry;
mod shadow_circle_renderer;
mod style;

pub use self::error::*;
pub use self::geo::*;
pub use self::map::*;
pub use self::overlay::*;
pub use self::projection::*;
pub use self::screen_geometry::*;
pub use self::shadow_circle_renderer::*;
pub use self::style::*;
