/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::context::*;
use super::rect::*;

use flo_curves::arc::*;
use flo_curves::bezier::path::*;
use flo_curves::*;

///
/// Shapes that are made up from the basic path operations of a graphics context
///
pub trait GraphicsPrimitives: GraphicsContext {
    ///
    /// Adds a closed circular subpath to the current path, running all the way around from angle 0
    ///
    fn circle(&mut self, center_x: f32, center_y: f32, radius: f32) {
        let circle = Circle::new(Coord2(center_x as f64, center_y as f64), radius as f64).to_path::<SimpleBezierPath>();
        self.bezier_path(&circle);
        self.close_path();
    }

    ///
    /// Adds a closed ellipse that fits inside the specified rectangle to the current path
    ///
    fn oval(&mut self, bounds: Rect) {
        let center = bounds.center();
        let (scale_x, scale_y) = (bounds.width as f64 / 2.0, bounds.height as f64 / 2.0);

        // Scaling a unit circle is an affine transform, so it also scales the control points exactly
        let (start, curves) = Circle::new(Coord2(0.0, 0.0), 1.0).to_path::<SimpleBezierPath>();
        let to_bounds = |point: Coord2| Coord2(point.0 * scale_x + center.x as f64, point.1 * scale_y + center.y as f64);
        let oval = (
            to_bounds(start),
            curves.into_iter().map(|(cp1, cp2, end)| (to_bounds(cp1), to_bounds(cp2), to_bounds(end))).collect(),
        );

        self.bezier_path(&oval);
        self.close_path();
    }

    ///
    /// Adds a rectangle to the current path
    ///
    fn rect(&mut self, bounds: Rect) {
        let max = bounds.max();

        self.move_to(bounds.x, bounds.y);
        self.line_to(max.x, bounds.y);
        self.line_to(max.x, max.y);
        self.line_to(bounds.x, max.y);
        self.close_path();
    }

    ///
    /// Adds a bezier path to the current path as a new subpath
    ///
    fn bezier_path(&mut self, path: &SimpleBezierPath) {
        let (start_point, curves) = path;

        self.move_to(start_point.x() as _, start_point.y() as _);
        for (cp1, cp2, end) in curves.iter() {
            self.bezier_curve_to(end.x() as _, end.y() as _, cp1.x() as _, cp1.y() as _, cp2.x() as _, cp2.y() as _);
        }
    }
}

impl<T: GraphicsContext + ?Sized> GraphicsPrimitives for T {}
