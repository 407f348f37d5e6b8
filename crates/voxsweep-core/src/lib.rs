// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![doc = r"Swept collision of an axis-aligned box against a voxel grid.

This crate provides:
- Deterministic `f32` vectors (`Vec3`) and a box collaborator (`Aabb`).
- The occupancy seam (`VoxelQuery`) and the contact seam (`ContactHandler`).
- The sweep engine (`sweep`, `try_sweep`, `SweepContext`), which walks the
  box's leading corner voxel boundary by voxel boundary, scans the leading
  face at each crossing, and hands every contact to the caller so it can stop,
  slide, or bounce.

Design notes:
- Deterministic: boundary crossings are processed in non-decreasing `t`, and
  exact ties pick the lowest axis index.
- Axes with zero displacement carry infinite step times; they are never
  selected and no branch special-cases them.
- The public API is `f32`; the stepping loop runs in `f64` so the boundary
  nudge holds anywhere within `MAX_COORDINATE` of the origin.
- Inputs are validated before the stepping loop starts; NaN never reaches it.
"]

/// Contacts, responses, and the caller-side handler seam.
pub mod contact;
/// Engine configuration.
pub mod config;
/// Error type shared by every entry point.
pub mod error;
/// Deterministic float32 vector math.
pub mod math;
/// Voxel occupancy seam.
pub mod query;
/// The sweep engine.
pub mod sweep;
/// Box collaborator types.
pub mod types;

pub use config::SweepConfig;
pub use contact::{
    Axis, BounceOnContact, Contact, ContactHandler, ContactLog, ContactResponse, SlideOnContact,
    StopOnContact,
};
pub use error::SweepError;
pub use math::{Vec3, DEFAULT_EPSILON, MAX_COORDINATE};
pub use query::VoxelQuery;
pub use sweep::{sweep, try_sweep, SweepContext, SweepOutcome, Translate};
pub use types::aabb::Aabb;
pub use types::body::SweepBody;
