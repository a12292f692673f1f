/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::overlay::*;

use std::error::Error;
use std::fmt;

///
/// Errors that can occur while setting up an overlay renderer
///
#[derive(Clone, PartialEq, Debug)]
pub enum OverlayError {
    /// The map asked for an overlay that isn't a circle to be drawn as one
    UnsupportedOverlay(OverlayKind),

    /// A style configuration could not be read
    InvalidStyle(String),
}

impl fmt::Display for OverlayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OverlayError::UnsupportedOverlay(kind) => write!(f, "cannot draw a {:?} overlay as a shadowed circle", kind),
            OverlayError::InvalidStyle(msg) => write!(f, "invalid style: {}", msg),
        }
    }
}

impl Error for OverlayError {}

impl From<serde_json::Error> for OverlayError {
    fn from(err: serde_json::Error) -> OverlayError {
        OverlayError::InvalidStyle(err.to_string())
    }
}
