// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! The box interface the engine reads and translates.

use crate::math::Vec3;

/// A movable axis-aligned box as seen by the sweep engine.
///
/// Implementors report two corners with `max[i] >= base[i]` on every axis and
/// shift both corners by the same delta in [`SweepBody::translate`].
pub trait SweepBody {
    /// Minimum corner.
    fn base(&self) -> Vec3;
    /// Maximum corner.
    fn max(&self) -> Vec3;
    /// Shifts both corners by `delta`.
    fn translate(&mut self, delta: Vec3);
}
