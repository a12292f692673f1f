/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//!
//! # geo_overlay_render_software
//!
//! A deterministic CPU renderer for `geo_overlay_canvas` drawing instructions. It supports what map
//! overlays need: filled and stroked paths, clipping, global alpha, isolated transparency layers,
//! blurred shadows and the Porter-Duff blend modes.
//!
//! ```
//! # use geo_overlay_canvas::*;
//! # use geo_overlay_render_software::*;
//! let mut drawing: Vec<Draw> = vec![];
//! drawing.fill_color(Color::Rgba(0.0, 0.0, 1.0, 1.0));
//! drawing.new_path();
//! drawing.circle(32.0, 32.0, 16.0);
//! drawing.fill();
//!
//! let frame = CanvasRenderer::render(64, 64, &drawing).unwrap();
//! assert!(frame.pixel(32, 32)[3] > 0.99);
//! ```
//!

mod blend;
mod blur;
mod canvas_renderer;
mod coverage;
mod error;
mod flatten;
mod frame;
mod mask;

#[cfg(feature = "render_png")]
mod png_output;

pub use self::blend::*;
pub use self::blur::*;
pub use self::canvas_renderer::*;
pub use self::coverage::*;
pub use self::error::*;
pub use self::flatten::*;
pub use self::frame::*;
pub use self::mask::*;
