/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::draw::*;

///
/// Operations that define paths
///
#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
pub enum PathOp {
    /// Begins a new path
    NewPath,

    /// Move to a new point
    Move(f32, f32),

    /// Line to point
    Line(f32, f32),

    /// Bezier curve to point (control points, then the end point)
    BezierCurve(((f32, f32), (f32, f32)), (f32, f32)),

    /// Closes the current subpath
    ClosePath,
}

impl From<PathOp> for Draw {
    #[inline]
    fn from(op: PathOp) -> Draw {
        Draw::Path(op)
    }
}
