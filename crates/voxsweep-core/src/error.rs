// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Errors surfaced by the sweep entry points.

use core::convert::Infallible;

use thiserror::Error;

/// Errors emitted by a sweep.
///
/// `E` is the error type of a fallible occupancy query or contact handler
/// (see [`crate::try_sweep`]). The infallible entry points use the default
/// `Infallible`, so the `Query` and `Handler` variants cannot occur there.
#[derive(Debug, Error)]
pub enum SweepError<E = Infallible> {
    /// A box reported `max < base` on some axis.
    #[error("invalid box on axis {axis}: max {max} < base {base}")]
    InvalidBox {
        /// Offending axis index (0, 1, or 2).
        axis: usize,
        /// Minimum corner component on that axis.
        base: f32,
        /// Maximum corner component on that axis.
        max: f32,
    },
    /// An input contained NaN or an infinity.
    #[error("non-finite {input}")]
    NonFinite {
        /// Which input was rejected.
        input: &'static str,
    },
    /// An input would carry the box past the range voxel indices can address.
    #[error("{input} outside the voxel index range")]
    OutOfRange {
        /// Which input was rejected.
        input: &'static str,
    },
    /// The configuration cannot drive a sweep.
    #[error("invalid sweep config: {reason}")]
    InvalidConfig {
        /// Human-readable reason.
        reason: &'static str,
    },
    /// The handler kept continuing past the configured contact budget.
    #[error("contact limit of {limit} exceeded")]
    ContactLimit {
        /// Configured `max_contacts`.
        limit: u32,
    },
    /// The occupancy query failed; the sweep was abandoned.
    #[error("voxel query failed: {0}")]
    Query(#[source] E),
    /// The contact handler failed; the sweep was abandoned.
    #[error("contact handler failed: {0}")]
    Handler(#[source] E),
}
