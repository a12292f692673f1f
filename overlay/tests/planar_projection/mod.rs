/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use geo_overlay::*;
use geo_overlay_canvas::*;

///
/// A flat projection with easy numbers: a degree is 1000 map points and a map point is a meter
///
pub struct PlanarProjection {
    pub zoom_scale: f64,
}

impl MapProjection for PlanarProjection {
    fn project(&self, coordinate: GeoCoordinate) -> MapPoint {
        MapPoint::new(coordinate.longitude * 1000.0, coordinate.latitude * 1000.0)
    }

    fn map_points_per_meter(&self, _latitude: f64) -> f64 {
        1.0
    }

    fn map_rect_to_screen(&self, map_rect: MapRect) -> Rect {
        let zoom = self.zoom_scale;

        Rect::new(
            (map_rect.x * zoom) as f32,
            (map_rect.y * zoom) as f32,
            (map_rect.width * zoom) as f32,
            (map_rect.height * zoom) as f32,
        )
    }
}

///
/// The instructions between the first instruction matching `from` and the next one matching `to`
///
#[allow(dead_code)]
pub fn instructions_between<'a>(drawing: &'a [Draw], from: &Draw, to: &Draw) -> &'a [Draw] {
    let start = drawing.iter().position(|draw| draw == from).expect("Missing start instruction");
    let end = start + drawing[start..].iter().position(|draw| draw == to).expect("Missing end instruction");

    &drawing[start..=end]
}

///
/// The end points of the path segments in a set of instructions
///
#[allow(dead_code)]
pub fn path_points(drawing: &[Draw]) -> Vec<(f32, f32)> {
    drawing
        .iter()
        .filter_map(|draw| match draw {
            Draw::Path(PathOp::Move(x, y)) => Some((*x, *y)),
            Draw::Path(PathOp::Line(x, y)) => Some((*x, *y)),
            Draw::Path(PathOp::BezierCurve(_, (x, y))) => Some((*x, *y)),
            _ => None,
        })
        .collect()
}

///
/// The center of the bounding box of some points
///
#[allow(dead_code)]
pub fn center_of(points: &[(f32, f32)]) -> (f32, f32) {
    let min_x = points.iter().map(|p| p.0).fold(f32::MAX, f32::min);
    let max_x = points.iter().map(|p| p.0).fold(f32::MIN, f32::max);
    let min_y = points.iter().map(|p| p.1).fold(f32::MAX, f32::min);
    let max_y = points.iter().map(|p| p.1).fold(f32::MIN, f32::max);

    ((min_x + max_x) / 2.0, (min_y + max_y) / 2.0)
}
