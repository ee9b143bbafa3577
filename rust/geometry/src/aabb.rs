// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Axis-aligned bounding boxes

use nalgebra::Point3;

/// Axis-aligned min/max envelope of a set of points.
///
/// A freshly created box is in the invalid state (min > max) until the
/// first point is added; `min <= max` holds component-wise from then on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Point3<f32>,
    pub max: Point3<f32>,
}

impl Aabb {
    /// Create a new box initialized to the invalid state
    pub fn new() -> Self {
        Self {
            min: Point3::new(f32::MAX, f32::MAX, f32::MAX),
            max: Point3::new(f32::MIN, f32::MIN, f32::MIN),
        }
    }

    /// The degenerate box at the origin, reported for empty meshes
    pub fn zero() -> Self {
        Self {
            min: Point3::origin(),
            max: Point3::origin(),
        }
    }

    /// Check if at least one point has been added
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.min.x <= self.max.x && self.min.y <= self.max.y && self.min.z <= self.max.z
    }

    /// Expand the box to include a point
    #[inline]
    pub fn expand(&mut self, point: &Point3<f32>) {
        self.min.x = self.min.x.min(point.x);
        self.min.y = self.min.y.min(point.y);
        self.min.z = self.min.z.min(point.z);
        self.max.x = self.max.x.max(point.x);
        self.max.y = self.max.y.max(point.y);
        self.max.z = self.max.z.max(point.z);
    }

    /// Expand the box to enclose another box
    #[inline]
    pub fn union(&mut self, other: &Aabb) {
        if other.is_valid() {
            self.expand(&other.min);
            self.expand(&other.max);
        }
    }

    /// Center of the box
    #[inline]
    pub fn center(&self) -> Point3<f32> {
        if !self.is_valid() {
            return Point3::origin();
        }
        Point3::new(
            (self.min.x + self.max.x) / 2.0,
            (self.min.y + self.max.y) / 2.0,
            (self.min.z + self.max.z) / 2.0,
        )
    }
}

impl Default for Aabb {
    fn default() -> Self {
        Self::new()
    }
}
