/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

///
/// How much of each pixel of a frame is covered by a shape, as a value from 0 to 1
///
#[derive(Clone, PartialEq, Debug)]
pub struct CoverageMask {
    pub width: usize,
    pub height: usize,
    pub values: Vec<f32>,
}

impl CoverageMask {
    ///
    /// Creates a mask that covers nothing
    ///
    pub fn empty(width: usize, height: usize) -> CoverageMask {
        CoverageMask {
            width,
            height,
            values: vec![0.0; width * height],
        }
    }

    ///
    /// The coverage at a particular pixel
    ///
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> f32 {
        self.values[y * self.width + x]
    }

    ///
    /// The area covered by both this mask and another one
    ///
    pub fn intersect(&self, other: &CoverageMask) -> CoverageMask {
        let values = self.values.iter().zip(other.values.iter()).map(|(a, b)| a * b).collect();

        CoverageMask {
            width: self.width,
            height: self.height,
            values,
        }
    }

    ///
    /// The area covered by either this mask or another one
    ///
    pub fn union(&self, other: &CoverageMask) -> CoverageMask {
        let values = self.values.iter().zip(other.values.iter()).map(|(a, b)| a.max(*b)).collect();

        CoverageMask {
            width: self.width,
            height: self.height,
            values,
        }
    }

    ///
    /// The part of this mask in a rectangle starting at `(x, y)`, which must be inside the mask
    ///
    pub fn crop(&self, x: usize, y: usize, width: usize, height: usize) -> CoverageMask {
        let mut values = Vec::with_capacity(width * height);
        for row in y..(y + height) {
            values.extend_from_slice(&self.values[row * self.width + x..row * self.width + x + width]);
        }

        CoverageMask { width, height, values }
    }

    ///
    /// True if no pixel is covered at all
    ///
    pub fn is_empty(&self) -> bool {
        self.values.iter().all(|value| *value <= 0.0)
    }
}
