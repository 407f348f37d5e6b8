// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Box collaborator types used by the sweep engine.
//!
//! The engine never mutates a caller's box directly: it reads the two corners
//! through [`body::SweepBody`] once per call and writes back at most once, via
//! `translate`, after the sweep finishes.

#[doc = "Axis-aligned bounding boxes in voxel space."]
pub mod aabb;
#[doc = "The box interface consumed by the sweep engine."]
pub mod body;
