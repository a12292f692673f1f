/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::error::Error;
use std::fmt;

///
/// Errors that can occur while rendering a set of drawing instructions
///
#[derive(Clone, PartialEq, Debug)]
pub enum RenderError {
    /// The frame to render to has no pixels
    EmptyFrame,

    /// The rendered frame could not be encoded as a PNG file
    PngEncoding(String),
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::EmptyFrame => write!(f, "cannot render to a frame with no pixels"),
            RenderError::PngEncoding(msg) => write!(f, "could not encode frame as PNG: {}", msg),
        }
    }
}

impl Error for RenderError {}

#[cfg(feature = "render_png")]
impl From<png::EncodingError> for RenderError {
    fn from(err: png::EncodingError) -> RenderError {
        RenderError::PngEncoding(err.to_string())
    }
}
