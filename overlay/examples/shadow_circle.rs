/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use geo_overlay::*;
use geo_overlay_canvas::*;
use geo_overlay_render_software::*;

use std::env;
use std::error::Error;
use std::fs::File;

///
/// Renders a 1km circle around the Empire State Building to a PNG file (`shadow_circle.png` unless a path is given)
///
pub fn main() -> Result<(), Box<dyn Error>> {
    let output_path = env::args().nth(1).unwrap_or_else(|| "shadow_circle.png".to_string());

    let circle = GeoCircle::new(GeoCoordinate::new(40.748817, -73.985428), 1000.0);

    let renderer = ShadowCircleRenderer::new(circle);

    // Show 4km of map at 512x512
    let size = 512;
    let center = WebMercatorProjection::project_coordinate(circle.center);
    let span = 4_000.0 * WebMercatorProjection::points_per_meter_at_latitude(circle.center.latitude);
    let visible = MapRect::new(center.x - span / 2.0, center.y - span / 2.0, span, span);
    let zoom_scale = size as f64 / span;

    let mut drawing: Vec<Draw> = vec![];
    drawing.fill_color(Color::Rgba(0.95, 0.95, 0.92, 1.0));
    drawing.new_path();
    drawing.rect(Rect::new(0.0, 0.0, size as f32, size as f32));
    drawing.fill();

    renderer.draw(visible, zoom_scale, &mut drawing);

    let frame = CanvasRenderer::render(size, size, &drawing)?;
    frame.write_png(File::create(&output_path)?)?;

    println!("Wrote {}", output_path);

    Ok(())
}
