/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

///
/// How newly drawn content is combined with what is already on the surface (the Porter-Duff modes plus a couple of extras)
///
/// Blend modes apply to the layer that is currently being drawn on: inside a transparency layer, 'destination' means
/// only what was drawn since the layer began.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BlendMode {
    SourceOver,
    DestinationOver,
    SourceIn,
    DestinationIn,

    /// Keeps only the parts of the new content that lie outside what has already been drawn
    SourceOut,
    DestinationOut,
    SourceATop,
    DestinationATop,

    Screen,
    Multiply,
}

impl Default for BlendMode {
    fn default() -> BlendMode {
        BlendMode::SourceOver
    }
}
