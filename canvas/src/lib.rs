/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//!
//! # geo_overlay_canvas
//!
//! Describes the drawing actions performed by map overlays without tying them to a particular
//! rendering backend. Drawing is expressed as a list of `Draw` instructions: anything that
//! implements `GraphicsContext` can receive them, and `Vec<Draw>` implements it so a drawing
//! can be recorded, compared or replayed later.
//!
//! ```
//! # use geo_overlay_canvas::*;
//! let mut drawing: Vec<Draw> = vec![];
//!
//! drawing.new_path();
//! drawing.circle(100.0, 100.0, 50.0);
//! drawing.fill_color(Color::Rgba(0.1, 0.5, 0.9, 1.0));
//! drawing.fill();
//! ```
//!
//! State changes (clipping, alpha, blend modes) are best made inside a `SavedState` or a
//! `TransparencyLayer` guard, which restore the previous state when dropped.
//!

#[macro_use]
extern crate serde_derive;

mod blend_mode;
mod color;
mod context;
mod draw;
mod path;
mod primitives;
mod rect;
mod saved_state;
mod shadow;

pub use self::blend_mode::*;
pub use self::color::*;
pub use self::context::*;
pub use self::draw::*;
pub use self::path::*;
pub use self::primitives::*;
pub use self::rect::*;
pub use self::saved_state::*;
pub use self::shadow::*;
