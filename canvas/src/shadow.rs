/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::color::*;

///
/// Describes the shadow cast by shapes that are filled or stroked while it is set
///
#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
pub struct Shadow {
    /// Offset of the shadow from the shape that casts it
    pub offset: (f32, f32),

    /// Blur radius, in canvas units
    pub blur: f32,

    /// Colour of the shadow
    pub color: Color,
}

impl Shadow {
    ///
    /// A shadow directly underneath its shape, visible only where it is blurred past the edges
    ///
    pub fn centered(blur: f32, color: Color) -> Shadow {
        Shadow {
            offset: (0.0, 0.0),
            blur,
            color,
        }
    }
}
