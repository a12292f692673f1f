/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::flatten::*;
use super::mask::*;

use itertools::*;

/// Number of scanlines sampled per pixel row when filling
const SUBSAMPLES: usize = 4;

///
/// An edge of a filled shape
///
struct FillEdge {
    start: (f64, f64),
    end: (f64, f64),
    direction: i32,
}

///
/// Iterates over the line segments of a subpath, including the closing segment if `closed` is set
///
fn segments<'a>(subpath: &'a FlatSubpath, closed: bool) -> impl 'a + Iterator<Item = ((f64, f64), (f64, f64))> {
    let closing = if closed && subpath.points.len() > 1 {
        Some((subpath.points[subpath.points.len() - 1], subpath.points[0]))
    } else {
        None
    };

    subpath.points.iter().copied().tuple_windows().chain(closing)
}

///
/// Computes how much of each pixel is covered by the inside of a path, using the non-zero winding rule
///
/// Every subpath is treated as closed.
///
pub fn fill_coverage(subpaths: &[FlatSubpath], width: usize, height: usize) -> CoverageMask {
    let mut mask = CoverageMask::empty(width, height);

    let edges = subpaths
        .iter()
        .flat_map(|subpath| segments(subpath, true))
        .filter(|(start, end)| start.1 != end.1)
        .map(|(start, end)| FillEdge {
            start,
            end,
            direction: if end.1 > start.1 { 1 } else { -1 },
        })
        .collect::<Vec<_>>();

    if edges.is_empty() {
        return mask;
    }

    // Only the rows the path touches need to be considered
    let min_y = edges.iter().map(|edge| edge.start.1.min(edge.end.1)).fold(f64::MAX, f64::min);
    let max_y = edges.iter().map(|edge| edge.start.1.max(edge.end.1)).fold(f64::MIN, f64::max);
    let first_row = min_y.floor().max(0.0) as usize;
    let last_row = (max_y.ceil().max(0.0) as usize).min(height);

    let mut crossings = vec![];
    for row in first_row..last_row {
        let row_values = &mut mask.values[row * width..(row + 1) * width];

        for sample in 0..SUBSAMPLES {
            let y = row as f64 + (sample as f64 + 0.5) / SUBSAMPLES as f64;

            crossings.clear();
            for edge in edges.iter() {
                let (y0, y1) = (edge.start.1.min(edge.end.1), edge.start.1.max(edge.end.1));
                if y < y0 || y >= y1 {
                    continue;
                }

                let t = (y - edge.start.1) / (edge.end.1 - edge.start.1);
                let x = edge.start.0 + (edge.end.0 - edge.start.0) * t;
                crossings.push((x, edge.direction));
            }

            crossings.sort_by(|a, b| a.0.total_cmp(&b.0));

            let mut winding = 0;
            for ((x0, dir), (x1, _)) in crossings.iter().copied().tuple_windows() {
                winding += dir;
                if winding != 0 {
                    add_span(row_values, x0, x1, 1.0 / SUBSAMPLES as f32);
                }
            }
        }
    }

    for value in mask.values.iter_mut() {
        *value = value.min(1.0);
    }

    mask
}

///
/// Adds coverage for the horizontal span from x0 to x1 to a row of pixels
///
fn add_span(row: &mut [f32], x0: f64, x1: f64, weight: f32) {
    let width = row.len() as f64;
    let (x0, x1) = (x0.max(0.0), x1.min(width));
    if x1 <= x0 {
        return;
    }

    let first_pixel = x0.floor() as usize;
    let last_pixel = (x1.ceil() as usize).min(row.len());

    for pixel in first_pixel..last_pixel {
        let left = (pixel as f64).max(x0);
        let right = ((pixel + 1) as f64).min(x1);

        if right > left {
            row[pixel] += ((right - left) as f32) * weight;
        }
    }
}

///
/// Computes how much of each pixel is covered by a line of the specified width drawn along a path
///
pub fn stroke_coverage(subpaths: &[FlatSubpath], line_width: f32, width: usize, height: usize) -> CoverageMask {
    let mut mask = CoverageMask::empty(width, height);
    if line_width <= 0.0 {
        return mask;
    }

    let half_width = line_width as f64 / 2.0;
    let lines = subpaths.iter().flat_map(|subpath| segments(subpath, subpath.closed)).collect::<Vec<_>>();
    if lines.is_empty() {
        return mask;
    }

    let reach = half_width + 1.0;
    let min_x = lines.iter().map(|(a, b)| a.0.min(b.0)).fold(f64::MAX, f64::min) - reach;
    let max_x = lines.iter().map(|(a, b)| a.0.max(b.0)).fold(f64::MIN, f64::max) + reach;
    let min_y = lines.iter().map(|(a, b)| a.1.min(b.1)).fold(f64::MAX, f64::min) - reach;
    let max_y = lines.iter().map(|(a, b)| a.1.max(b.1)).fold(f64::MIN, f64::max) + reach;

    let (first_x, last_x) = (min_x.floor().max(0.0) as usize, (max_x.ceil().max(0.0) as usize).min(width));
    let (first_y, last_y) = (min_y.floor().max(0.0) as usize, (max_y.ceil().max(0.0) as usize).min(height));

    for y in first_y..last_y {
        for x in first_x..last_x {
            let point = (x as f64 + 0.5, y as f64 + 0.5);
            let distance = lines
                .iter()
                .map(|(start, end)| distance_to_segment(point, *start, *end))
                .fold(f64::MAX, f64::min);

            let coverage = (half_width + 0.5 - distance).max(0.0).min(1.0);
            mask.values[y * width + x] = coverage as f32;
        }
    }

    mask
}

///
/// The distance from a point to the closest point on a line segment
///
fn distance_to_segment(point: (f64, f64), start: (f64, f64), end: (f64, f64)) -> f64 {
    let (dx, dy) = (end.0 - start.0, end.1 - start.1);
    let length_squared = dx * dx + dy * dy;

    let t = if length_squared > 0.0 {
        (((point.0 - start.0) * dx + (point.1 - start.1) * dy) / length_squared).max(0.0).min(1.0)
    } else {
        0.0
    };

    let (closest_x, closest_y) = (start.0 + dx * t, start.1 + dy * t);
    ((point.0 - closest_x).powi(2) + (point.1 - closest_y).powi(2)).sqrt()
}
