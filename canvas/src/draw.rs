/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::blend_mode::*;
use super::color::*;
use super::path::*;
use super::shadow::*;

///
/// Instructions for drawing to a canvas
///
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub enum Draw {
    /// Adds an operation to the current path
    Path(PathOp),

    /// Fills the current path
    Fill,

    /// Draws a line around the current path
    Stroke,

    /// Fills the current path then strokes it, so the line is drawn on top of the fill
    FillAndStroke,

    /// Sets the line width
    LineWidth(f32),

    /// Sets the colour used by subsequent fills
    FillColor(Color),

    /// Sets the colour used by subsequent strokes
    StrokeColor(Color),

    /// Sets the alpha value that all subsequent drawing is multiplied by
    GlobalAlpha(f32),

    /// Sets how new content is combined with the existing content of the current layer
    BlendMode(BlendMode),

    /// Sets the shadow cast by subsequent fills and strokes (or removes it when `None`)
    Shadow(Option<Shadow>),

    /// Intersects the current clipping region with the current path
    Clip,

    /// Removes the clipping region
    Unclip,

    /// Stores the current state (colours, line width, alpha, blend mode, shadow and clipping region) on the stack
    PushState,

    /// Restores the state most recently stored by `PushState`
    PopState,

    /// Starts an isolated layer: blend modes inside it only see content drawn within the layer, and it is composited
    /// with the alpha, clip and blend mode in effect when it was started. Implies `PushState`.
    BeginTransparencyLayer,

    /// Composites the current transparency layer onto the one below it and restores the state from when it began
    EndTransparencyLayer,
}
