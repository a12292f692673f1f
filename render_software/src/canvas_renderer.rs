/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::blend::*;
use super::blur::*;
use super::coverage::*;
use super::error::*;
use super::flatten::*;
use super::frame::*;
use super::mask::*;

use geo_overlay_canvas::*;

use std::sync::Arc;

///
/// The settings that apply to the next drawing operation
///
#[derive(Clone, Debug)]
struct DrawingState {
    fill_color: Color,
    stroke_color: Color,
    line_width: f32,
    global_alpha: f32,
    blend_mode: BlendMode,
    shadow: Option<Shadow>,
    clip: Option<Arc<CoverageMask>>,
}

///
/// Entries on the state stack
///
#[derive(Clone, Debug)]
enum StackEntry {
    /// Stored by `PushState`
    State(DrawingState),

    /// Stored by `BeginTransparencyLayer`: the state is also used to composite the layer when it ends
    Layer(DrawingState),
}

///
/// The parts of a path that can be painted
///
#[derive(Clone, Copy, PartialEq, Debug)]
enum PathArea {
    Interior,
    Outline,
}

///
/// Renders drawing instructions to a frame of pixels
///
pub struct CanvasRenderer {
    width: usize,
    height: usize,

    /// The layers being drawn: the first is the frame itself, the others are transparency layers
    layers: Vec<RgbaFrame>,

    state: DrawingState,
    state_stack: Vec<StackEntry>,
    path: FlatPathBuilder,
}

impl Default for DrawingState {
    fn default() -> DrawingState {
        DrawingState {
            fill_color: Color::Rgba(0.0, 0.0, 0.0, 1.0),
            stroke_color: Color::Rgba(0.0, 0.0, 0.0, 1.0),
            line_width: 1.0,
            global_alpha: 1.0,
            blend_mode: BlendMode::SourceOver,
            shadow: None,
            clip: None,
        }
    }
}

impl CanvasRenderer {
    ///
    /// Creates a renderer that draws to a transparent frame of the specified size
    ///
    pub fn new(width: usize, height: usize) -> Result<CanvasRenderer, RenderError> {
        if width == 0 || height == 0 {
            return Err(RenderError::EmptyFrame);
        }

        Ok(CanvasRenderer {
            width,
            height,
            layers: vec![RgbaFrame::transparent(width, height)],
            state: DrawingState::default(),
            state_stack: vec![],
            path: FlatPathBuilder::new(),
        })
    }

    ///
    /// Renders a list of drawing instructions to a new frame
    ///
    pub fn render(width: usize, height: usize, drawing: &[Draw]) -> Result<RgbaFrame, RenderError> {
        let mut renderer = CanvasRenderer::new(width, height)?;
        renderer.draw_all(drawing);

        Ok(renderer.finish())
    }

    ///
    /// Performs a list of drawing instructions
    ///
    pub fn draw_all<'a>(&mut self, drawing: impl IntoIterator<Item = &'a Draw>) {
        for draw in drawing {
            self.draw(draw);
        }
    }

    ///
    /// Finishes any layers that are still open and returns the rendered frame
    ///
    pub fn finish(mut self) -> RgbaFrame {
        while self.layers.len() > 1 {
            log::warn!("Transparency layer was never ended");
            self.end_layer();
        }

        self.layers.pop().unwrap_or_else(|| RgbaFrame::transparent(self.width, self.height))
    }

    ///
    /// Performs a single drawing instruction
    ///
    pub fn draw(&mut self, draw: &Draw) {
        match draw {
            Draw::Path(op) => self.path.apply(op),

            Draw::Fill => self.paint(&[(PathArea::Interior, self.state.fill_color)]),
            Draw::Stroke => self.paint(&[(PathArea::Outline, self.state.stroke_color)]),
            Draw::FillAndStroke => self.paint(&[(PathArea::Interior, self.state.fill_color), (PathArea::Outline, self.state.stroke_color)]),

            Draw::LineWidth(width) => self.state.line_width = *width,
            Draw::FillColor(color) => self.state.fill_color = *color,
            Draw::StrokeColor(color) => self.state.stroke_color = *color,
            Draw::GlobalAlpha(alpha) => self.state.global_alpha = alpha.max(0.0).min(1.0),
            Draw::BlendMode(mode) => self.state.blend_mode = *mode,
            Draw::Shadow(shadow) => self.state.shadow = *shadow,

            Draw::Clip => {
                let path_mask = self.coverage(PathArea::Interior, self.path.subpaths(), self.width, self.height);
                let clip = match &self.state.clip {
                    Some(existing) => existing.intersect(&path_mask),
                    None => path_mask,
                };

                self.state.clip = Some(Arc::new(clip));
            }

            Draw::Unclip => self.state.clip = None,

            Draw::PushState => self.state_stack.push(StackEntry::State(self.state.clone())),

            Draw::PopState => match self.state_stack.last() {
                Some(StackEntry::State(_)) => {
                    if let Some(StackEntry::State(state)) = self.state_stack.pop() {
                        self.state = state;
                    }
                }
                _ => log::warn!("PopState without a matching PushState"),
            },

            Draw::BeginTransparencyLayer => {
                self.state_stack.push(StackEntry::Layer(self.state.clone()));
                self.layers.push(RgbaFrame::transparent(self.width, self.height));

                // Drawing inside the layer starts from a neutral state: the layer's own alpha and blend mode are applied when it ends
                self.state.global_alpha = 1.0;
                self.state.blend_mode = BlendMode::SourceOver;
                self.state.shadow = None;
            }

            Draw::EndTransparencyLayer => match self.state_stack.last() {
                Some(StackEntry::Layer(_)) => self.end_layer(),
                _ => log::warn!("EndTransparencyLayer without a matching BeginTransparencyLayer"),
            },
        }
    }

    ///
    /// Composites the topmost transparency layer onto the layer beneath it
    ///
    /// Any states pushed inside the layer and never popped are discarded along with it.
    ///
    fn end_layer(&mut self) {
        if self.layers.len() <= 1 {
            return;
        }

        let mut composite_state = None;
        while let Some(entry) = self.state_stack.pop() {
            match entry {
                StackEntry::Layer(state) => {
                    composite_state = Some(state);
                    break;
                }
                StackEntry::State(_) => log::warn!("PushState inside a transparency layer was never popped"),
            }
        }

        let composite_state = composite_state.unwrap_or_else(|| self.state.clone());
        let layer = match self.layers.pop() {
            Some(layer) => layer,
            None => return,
        };

        if let Some(target) = self.layers.last_mut() {
            let alpha = composite_state.global_alpha;
            let clip = composite_state.clip.as_deref();

            for (idx, (dst, src)) in target.pixels_mut().iter_mut().zip(layer.pixels().iter()).enumerate() {
                let coverage = clip.map(|clip| clip.values[idx]).unwrap_or(1.0);
                let src = [src[0] * alpha, src[1] * alpha, src[2] * alpha, src[3] * alpha];

                *dst = blend_with_coverage(composite_state.blend_mode, src, *dst, coverage);
            }
        }

        self.state = composite_state;
    }

    ///
    /// Rasterizes part of a set of subpaths into a mask of the specified size
    ///
    fn coverage(&self, area: PathArea, subpaths: &[FlatSubpath], width: usize, height: usize) -> CoverageMask {
        match area {
            PathArea::Interior => fill_coverage(subpaths, width, height),
            PathArea::Outline => stroke_coverage(subpaths, self.state.line_width, width, height),
        }
    }

    ///
    /// The coverage of the shadow cast by some parts of the current path
    ///
    /// The shape is rasterized with enough margin around the frame that parts of it outside the frame still
    /// contribute to the blur.
    ///
    fn shadow_mask(&self, areas: &[PathArea], shadow: &Shadow) -> CoverageMask {
        let margin = blur_extent(shadow.blur);
        let (width, height) = (self.width + margin * 2, self.height + margin * 2);

        let (dx, dy) = (margin as f64 + shadow.offset.0 as f64, margin as f64 + shadow.offset.1 as f64);
        let subpaths = self.path.subpaths().iter().map(|subpath| subpath.translated(dx, dy)).collect::<Vec<_>>();

        let shape = areas
            .iter()
            .map(|area| self.coverage(*area, &subpaths, width, height))
            .reduce(|shape, mask| shape.union(&mask))
            .unwrap_or_else(|| CoverageMask::empty(width, height));

        gaussian_blur(&shape, shadow.blur).crop(margin, margin, self.width, self.height)
    }

    ///
    /// Paints a shape made up of one or more coloured parts of the current path onto the current layer, along with its shadow
    ///
    fn paint(&mut self, parts: &[(PathArea, Color)]) {
        let state = self.state.clone();

        if let Some(shadow) = state.shadow {
            let areas = parts.iter().map(|(area, _)| *area).collect::<Vec<_>>();
            let shadow_mask = self.shadow_mask(&areas, &shadow);

            self.composite(&state, &shadow_mask, shadow.color);
        }

        for (area, color) in parts.iter() {
            let mask = self.coverage(*area, self.path.subpaths(), self.width, self.height);
            self.composite(&state, &mask, *color);
        }
    }

    ///
    /// Blends a colour onto the current layer wherever it's covered by a mask
    ///
    fn composite(&mut self, state: &DrawingState, mask: &CoverageMask, color: Color) {
        let src = premultiplied_pixel(color, state.global_alpha);
        let clip = state.clip.as_deref();

        if let Some(target) = self.layers.last_mut() {
            for (idx, dst) in target.pixels_mut().iter_mut().enumerate() {
                let coverage = mask.values[idx] * clip.map(|clip| clip.values[idx]).unwrap_or(1.0);
                *dst = blend_with_coverage(state.blend_mode, src, *dst, coverage);
            }
        }
    }
}
