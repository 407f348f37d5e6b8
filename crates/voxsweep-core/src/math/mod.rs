// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Deterministic math helpers for the sweep engine.
//!
//! The public types are `f32`. The stepping loop widens them to `f64` so the
//! boundary nudge survives at large coordinates; results are rounded back once.

mod vec3;

pub use vec3::Vec3;

/// Default boundary nudge used when flooring box corners to voxel indices.
///
/// A corner lying exactly on a voxel boundary is pulled back into the cell
/// the box actually occupies instead of the neighbouring one. The nudge is
/// applied in `f64`, where it stays representable for every coordinate up to
/// [`MAX_COORDINATE`].
pub const DEFAULT_EPSILON: f32 = 1e-5;

/// Largest absolute box coordinate a sweep accepts, before or after moving.
///
/// Keeps every visited voxel index inside `i32`.
pub const MAX_COORDINATE: f32 = 1.0e9;

/// Returns the integer voxel coordinate containing `value`.
#[allow(clippy::cast_possible_truncation)]
pub(crate) fn cell_of(value: f64) -> i32 {
    value.floor() as i32
}

/// Returns the lower boundary coordinate of voxel `cell`.
pub(crate) fn cell_boundary(cell: i32) -> f64 {
    f64::from(cell)
}

/// Widens a vector for the stepping loop.
pub(crate) fn widen(v: Vec3) -> [f64; 3] {
    v.to_array().map(f64::from)
}

/// Rounds a stepping-loop vector back to the public `f32` representation.
#[allow(clippy::cast_possible_truncation)]
pub(crate) fn narrow(v: [f64; 3]) -> Vec3 {
    Vec3::from(v.map(|c| c as f32))
}

/// Euclidean length computed in `f64`; finite for every finite `f32` input.
pub(crate) fn length(v: [f64; 3]) -> f64 {
    (v[0] * v[0] + v[1] * v[1] + v[2] * v[2]).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cell_of_floors_toward_negative_infinity() {
        assert_eq!(cell_of(0.5), 0);
        assert_eq!(cell_of(-0.5), -1);
        assert_eq!(cell_of(2.0), 2);
        assert_eq!(cell_of(-2.0), -2);
    }

    #[test]
    fn epsilon_pulls_boundary_corner_into_owning_cell() {
        let eps = f64::from(DEFAULT_EPSILON);
        // A max corner at x = 1.0 belongs to cell 0 when moving +x.
        assert_eq!(cell_of(1.0 - eps), 0);
        // A base corner at x = 1.0 belongs to cell 1 when moving +x.
        assert_eq!(cell_of(1.0 + eps), 1);
    }

    #[test]
    fn nudge_survives_far_from_origin() {
        let eps = f64::from(DEFAULT_EPSILON);
        for boundary in [512.0f32, 1.0e4, 1.0e6] {
            let corner = f64::from(boundary);
            assert_eq!(cell_of(corner - eps), cell_of(corner) - 1, "at {boundary}");
            // The f32 subtraction collapses back onto the boundary.
            assert_eq!(boundary - DEFAULT_EPSILON, boundary);
        }
    }

    #[test]
    fn widen_then_narrow_is_exact() {
        let v = Vec3::new(0.1, -511.75, 1.0e9);
        assert_eq!(narrow(widen(v)), v);
        assert!(length(widen(Vec3::new(3.0e19, 3.0e19, 0.0))).is_finite());
    }
}
