// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Axis-aligned box collaborator.

use crate::error::SweepError;
use crate::math::{cell_of, Vec3};
use crate::types::body::SweepBody;

/// Axis-aligned bounding box in voxel space.
///
/// Invariants:
/// - `min` components are less than or equal to `max` components.
/// - Values are `f32`; one unit is one voxel edge.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Aabb {
    min: Vec3,
    max: Vec3,
}

impl Aabb {
    /// Constructs an AABB from its minimum and maximum corners.
    ///
    /// # Panics
    /// Panics if any component of `min` is greater than its counterpart in `max`.
    #[must_use]
    pub fn new(min: Vec3, max: Vec3) -> Self {
        let a = min.to_array();
        let b = max.to_array();
        assert!(a[0] <= b[0] && a[1] <= b[1] && a[2] <= b[2], "invalid AABB: min > max");
        Self { min, max }
    }

    /// Fallible counterpart of [`Aabb::new`].
    ///
    /// Rejects non-finite corners and any axis where `min > max`.
    pub fn try_new(min: Vec3, max: Vec3) -> Result<Self, SweepError> {
        if !min.is_finite() || !max.is_finite() {
            return Err(SweepError::NonFinite { input: "box corner" });
        }
        for axis in 0..3 {
            if min[axis] > max[axis] {
                return Err(SweepError::InvalidBox {
                    axis,
                    base: min[axis],
                    max: max[axis],
                });
            }
        }
        Ok(Self { min, max })
    }

    /// Builds an AABB centered at `center` with half-extents `hx, hy, hz`.
    #[must_use]
    pub fn from_center_half_extents(center: Vec3, hx: f32, hy: f32, hz: f32) -> Self {
        let he = Vec3::new(hx, hy, hz);
        Self::new(center.sub(&he), center.add(&he))
    }

    /// Returns the minimum corner.
    #[must_use]
    pub fn min(&self) -> Vec3 {
        self.min
    }

    /// Returns the maximum corner.
    #[must_use]
    pub fn max(&self) -> Vec3 {
        self.max
    }

    /// Size of the box along each axis.
    #[must_use]
    pub fn extent(&self) -> Vec3 {
        self.max.sub(&self.min)
    }

    /// Returns a copy shifted by `delta`.
    #[must_use]
    pub fn translated(&self, delta: Vec3) -> Self {
        Self {
            min: self.min.add(&delta),
            max: self.max.add(&delta),
        }
    }

    /// Inclusive range of voxel cells the box occupies, as `(low, high)`.
    ///
    /// Corners lying exactly on a boundary are pulled inward by `epsilon`, so
    /// a unit box at the origin covers the single cell `[0, 0, 0]`. A box
    /// thinner than `2 * epsilon` that sits on a boundary yields an empty range
    /// on that axis (`low > high`).
    #[must_use]
    pub fn cells(&self, epsilon: f32) -> ([i32; 3], [i32; 3]) {
        let epsilon = f64::from(epsilon);
        let mut low = [0; 3];
        let mut high = [0; 3];
        for axis in 0..3 {
            low[axis] = cell_of(f64::from(self.min[axis]) + epsilon);
            high[axis] = cell_of(f64::from(self.max[axis]) - epsilon);
        }
        (low, high)
    }
}

impl SweepBody for Aabb {
    fn base(&self) -> Vec3 {
        self.min
    }

    fn max(&self) -> Vec3 {
        self.max
    }

    fn translate(&mut self, delta: Vec3) {
        *self = self.translated(delta);
    }
}
