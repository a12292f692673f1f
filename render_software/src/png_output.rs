/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::error::*;
use super::frame::*;

use std::io::Write;

impl RgbaFrame {
    ///
    /// Writes this frame as a PNG image to a stream
    ///
    pub fn write_png<W: Write>(&self, target: W) -> Result<(), RenderError> {
        let mut encoder = png::Encoder::new(target, self.width() as u32, self.height() as u32);
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);

        let mut writer = encoder.write_header()?;
        writer.write_image_data(&self.to_rgba8())?;
        writer.finish()?;

        Ok(())
    }

    ///
    /// Encodes this frame as PNG data
    ///
    pub fn encode_png(&self) -> Result<Vec<u8>, RenderError> {
        let mut png_data = vec![];
        self.write_png(&mut png_data)?;

        Ok(png_data)
    }
}
