/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::mask::*;

#[cfg(feature = "multithreading")]
use rayon::prelude::*;

/// Number of box blurs used to approximate a gaussian blur
const BOX_PASSES: usize = 3;

///
/// Works out the radii of the box blurs that approximate a gaussian blur with the specified standard deviation
///
pub fn box_blur_radii(sigma: f64) -> [usize; BOX_PASSES] {
    let mut radii = [0; BOX_PASSES];
    if sigma <= 0.0 {
        return radii;
    }

    let passes = BOX_PASSES as f64;
    let ideal_width = (12.0 * sigma * sigma / passes + 1.0).sqrt();
    let mut lower_width = ideal_width.floor() as i64;
    if lower_width % 2 == 0 {
        lower_width -= 1;
    }
    let upper_width = lower_width + 2;

    let lower = lower_width as f64;
    let num_lower = ((12.0 * sigma * sigma - passes * lower * lower - 4.0 * passes * lower - 3.0 * passes) / (-4.0 * lower - 4.0)).round();

    for (idx, radius) in radii.iter_mut().enumerate() {
        let box_width = if (idx as f64) < num_lower { lower_width } else { upper_width };
        *radius = ((box_width - 1) / 2).max(0) as usize;
    }

    radii
}

///
/// How far the blur with the specified blur radius can spread a single pixel
///
/// A mask padded by this many pixels on every side blurs exactly as if it carried on indefinitely.
///
pub fn blur_extent(blur_radius: f32) -> usize {
    if blur_radius <= 0.0 {
        0
    } else {
        box_blur_radii(blur_radius as f64 / 2.0).iter().sum()
    }
}

///
/// Blurs a single line of values with a box of the specified radius, treating everything beyond the ends as 0
///
fn box_blur_line(line: &mut [f32], radius: usize, prefix: &mut Vec<f64>) {
    if radius == 0 || line.is_empty() {
        return;
    }

    prefix.clear();
    prefix.push(0.0);
    for value in line.iter() {
        let total = prefix[prefix.len() - 1] + *value as f64;
        prefix.push(total);
    }

    let len = line.len();
    let box_size = (radius * 2 + 1) as f64;
    for (idx, value) in line.iter_mut().enumerate() {
        let start = idx.saturating_sub(radius);
        let end = (idx + radius + 1).min(len);

        *value = ((prefix[end] - prefix[start]) / box_size) as f32;
    }
}

///
/// Blurs every row of a set of values
///
fn blur_rows(values: &mut [f32], width: usize, radius: usize) {
    #[cfg(feature = "multithreading")]
    {
        values.par_chunks_mut(width).for_each_init(Vec::new, |prefix, row| box_blur_line(row, radius, prefix));
    }

    #[cfg(not(feature = "multithreading"))]
    {
        let mut prefix = vec![];
        values.chunks_mut(width).for_each(|row| box_blur_line(row, radius, &mut prefix));
    }
}

///
/// Swaps the rows and columns of a set of values
///
fn transpose(values: &[f32], width: usize, height: usize) -> Vec<f32> {
    let mut result = vec![0.0; values.len()];

    for y in 0..height {
        for x in 0..width {
            result[x * height + y] = values[y * width + x];
        }
    }

    result
}

///
/// Applies a gaussian blur with the specified blur radius to a coverage mask
///
/// The standard deviation of the blur is half of its radius, so the shadow fades out at about the blur radius.
///
pub fn gaussian_blur(mask: &CoverageMask, blur_radius: f32) -> CoverageMask {
    let (width, height) = (mask.width, mask.height);
    if blur_radius <= 0.0 || width == 0 || height == 0 {
        return mask.clone();
    }

    let radii = box_blur_radii(blur_radius as f64 / 2.0);
    let mut values = mask.values.clone();

    for radius in radii.iter() {
        blur_rows(&mut values, width, *radius);
    }

    let mut columns = transpose(&values, width, height);
    for radius in radii.iter() {
        blur_rows(&mut columns, height, *radius);
    }

    CoverageMask {
        width,
        height,
        values: transpose(&columns, height, width),
    }
}
