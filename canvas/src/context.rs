/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::blend_mode::*;
use super::color::*;
use super::draw::*;
use super::path::*;
use super::shadow::*;

///
/// A graphics context provides the basic set of graphics actions that can be performed
///
/// Only `draw()` needs to be implemented: every other action is described by the `Draw` instruction
/// it generates.
///
pub trait GraphicsContext {
    ///
    /// Performs a single drawing instruction
    ///
    fn draw(&mut self, d: Draw);

    fn new_path(&mut self) {
        self.draw(Draw::Path(PathOp::NewPath));
    }
    fn move_to(&mut self, x: f32, y: f32) {
        self.draw(Draw::Path(PathOp::Move(x, y)));
    }
    fn line_to(&mut self, x: f32, y: f32) {
        self.draw(Draw::Path(PathOp::Line(x, y)));
    }
    /// Adds a bezier curve ending at (x1, y1) with the control points (x2, y2) and (x3, y3)
    fn bezier_curve_to(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, x3: f32, y3: f32) {
        self.draw(Draw::Path(PathOp::BezierCurve(((x2, y2), (x3, y3)), (x1, y1))));
    }
    fn close_path(&mut self) {
        self.draw(Draw::Path(PathOp::ClosePath));
    }

    fn fill(&mut self) {
        self.draw(Draw::Fill);
    }
    fn stroke(&mut self) {
        self.draw(Draw::Stroke);
    }
    fn fill_and_stroke(&mut self) {
        self.draw(Draw::FillAndStroke);
    }

    fn line_width(&mut self, width: f32) {
        self.draw(Draw::LineWidth(width));
    }
    fn fill_color(&mut self, col: Color) {
        self.draw(Draw::FillColor(col));
    }
    fn stroke_color(&mut self, col: Color) {
        self.draw(Draw::StrokeColor(col));
    }
    fn global_alpha(&mut self, alpha: f32) {
        self.draw(Draw::GlobalAlpha(alpha));
    }
    fn blend_mode(&mut self, mode: BlendMode) {
        self.draw(Draw::BlendMode(mode));
    }
    fn shadow(&mut self, shadow: Shadow) {
        self.draw(Draw::Shadow(Some(shadow)));
    }
    fn no_shadow(&mut self) {
        self.draw(Draw::Shadow(None));
    }

    fn clip(&mut self) {
        self.draw(Draw::Clip);
    }
    fn unclip(&mut self) {
        self.draw(Draw::Unclip);
    }

    fn push_state(&mut self) {
        self.draw(Draw::PushState);
    }
    fn pop_state(&mut self) {
        self.draw(Draw::PopState);
    }

    fn begin_transparency_layer(&mut self) {
        self.draw(Draw::BeginTransparencyLayer);
    }
    fn end_transparency_layer(&mut self) {
        self.draw(Draw::EndTransparencyLayer);
    }
}

impl GraphicsContext for Vec<Draw> {
    #[inline]
    fn draw(&mut self, d: Draw) {
        self.push(d);
    }
}
