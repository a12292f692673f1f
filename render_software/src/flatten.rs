/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use geo_overlay_canvas::*;

use flo_curves::bezier::*;

/// The length of line to aim for when converting curves into line segments
const FLATTEN_LENGTH: f64 = 2.0;

///
/// A subpath made up of straight line segments
///
#[derive(Clone, PartialEq, Debug)]
pub struct FlatSubpath {
    pub points: Vec<(f64, f64)>,
    pub closed: bool,
}

impl FlatSubpath {
    ///
    /// This subpath moved by an offset
    ///
    pub fn translated(&self, dx: f64, dy: f64) -> FlatSubpath {
        FlatSubpath {
            points: self.points.iter().map(|(x, y)| (x + dx, y + dy)).collect(),
            closed: self.closed,
        }
    }
}

///
/// Builds up a path from path operations, converting curves to line segments as it goes
///
#[derive(Clone, Debug, Default)]
pub struct FlatPathBuilder {
    subpaths: Vec<FlatSubpath>,
    start_point: Option<(f64, f64)>,
}

impl FlatPathBuilder {
    pub fn new() -> FlatPathBuilder {
        FlatPathBuilder::default()
    }

    ///
    /// The subpaths generated so far
    ///
    pub fn subpaths(&self) -> &[FlatSubpath] {
        &self.subpaths
    }

    ///
    /// Applies a path operation to this path
    ///
    pub fn apply(&mut self, op: &PathOp) {
        match op {
            PathOp::NewPath => {
                self.subpaths.clear();
                self.start_point = None;
            }

            PathOp::Move(x, y) => {
                let point = (*x as f64, *y as f64);

                self.start_point = Some(point);
                self.subpaths.push(FlatSubpath {
                    points: vec![point],
                    closed: false,
                });
            }

            PathOp::Line(x, y) => {
                let point = (*x as f64, *y as f64);
                self.current_subpath().points.push(point);
            }

            PathOp::BezierCurve(((cp1x, cp1y), (cp2x, cp2y)), (x, y)) => {
                let subpath = self.current_subpath();
                let start = subpath.points.last().copied().unwrap_or((0.0, 0.0));

                let cp1 = Coord2(*cp1x as f64, *cp1y as f64);
                let cp2 = Coord2(*cp2x as f64, *cp2y as f64);
                let end = Coord2(*x as f64, *y as f64);
                let curve = Curve::from_points(Coord2(start.0, start.1), (cp1, cp2), end);

                let control_length = Coord2(start.0, start.1).distance_to(&cp1) + cp1.distance_to(&cp2) + cp2.distance_to(&end);
                let num_segments = (control_length / FLATTEN_LENGTH).ceil().max(4.0).min(128.0) as usize;

                for segment in 1..=num_segments {
                    let point = curve.point_at_pos(segment as f64 / num_segments as f64);
                    subpath.points.push((point.x(), point.y()));
                }
            }

            PathOp::ClosePath => {
                if let Some(subpath) = self.subpaths.last_mut() {
                    subpath.closed = true;
                }
            }
        }
    }

    ///
    /// Returns the subpath that new line segments should be added to
    ///
    /// A subpath that was closed (or a path with no start point) begins again at the last start point
    ///
    fn current_subpath(&mut self) -> &mut FlatSubpath {
        let needs_new_subpath = self.subpaths.last().map(|subpath| subpath.closed).unwrap_or(true);

        if needs_new_subpath {
            let start = self.start_point.unwrap_or((0.0, 0.0));
            self.start_point = Some(start);
            self.subpaths.push(FlatSubpath {
                points: vec![start],
                closed: false,
            });
        }

        let last_idx = self.subpaths.len() - 1;
        &mut self.subpaths[last_idx]
    }
}
