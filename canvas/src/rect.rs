/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

///
/// A point on the drawing surface
///
#[derive(Clone, Copy, PartialEq, Debug, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

///
/// An axis-aligned rectangle on the drawing surface, described by its origin (the corner with the smallest
/// coordinates) and its size
///
#[derive(Clone, Copy, PartialEq, Debug, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Point {
    #[inline]
    pub fn new(x: f32, y: f32) -> Point {
        Point { x, y }
    }
}

impl Rect {
    #[inline]
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Rect {
        Rect {
            x,
            y,
            width,
            height,
        }
    }

    ///
    /// The origin of this rectangle
    ///
    #[inline]
    pub fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    ///
    /// The point in the middle of this rectangle
    ///
    #[inline]
    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    ///
    /// Returns this rectangle moved by the specified amount
    ///
    #[inline]
    pub fn offset_by(&self, dx: f32, dy: f32) -> Rect {
        Rect::new(self.x + dx, self.y + dy, self.width, self.height)
    }

    ///
    /// Returns this rectangle shrunk by `amount` on every side (negative amounts grow it)
    ///
    #[inline]
    pub fn inset_by(&self, amount: f32) -> Rect {
        Rect::new(self.x + amount, self.y + amount, self.width - amount * 2.0, self.height - amount * 2.0)
    }

    ///
    /// The largest coordinates covered by this rectangle
    ///
    #[inline]
    pub fn max(&self) -> Point {
        Point::new(self.x + self.width, self.y + self.height)
    }

    ///
    /// True if this rectangle has no area
    ///
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    ///
    /// True if the two rectangles overlap
    ///
    pub fn intersects(&self, other: &Rect) -> bool {
        let max = self.max();
        let other_max = other.max();

        self.x < other_max.x && other.x < max.x && self.y < other_max.y && other.y < max.y
    }
}
