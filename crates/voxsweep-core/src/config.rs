// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Engine configuration.

use crate::error::SweepError;
use crate::math::DEFAULT_EPSILON;

/// Tunables for a [`crate::SweepContext`].
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct SweepConfig {
    /// Boundary nudge applied when flooring box corners to voxel indices.
    pub epsilon: f32,
    /// Maximum number of contacts a single call may resolve before it fails
    /// with [`SweepError::ContactLimit`].
    pub max_contacts: u32,
}

impl SweepConfig {
    /// Default contact budget per sweep call.
    pub const DEFAULT_MAX_CONTACTS: u32 = 1024;

    /// Checks that the configuration can drive a sweep.
    pub fn validate<E>(&self) -> Result<(), SweepError<E>> {
        if !self.epsilon.is_finite() || self.epsilon < 0.0 || self.epsilon >= 0.5 {
            return Err(SweepError::InvalidConfig {
                reason: "epsilon must be finite and within [0, 0.5)",
            });
        }
        if self.max_contacts == 0 {
            return Err(SweepError::InvalidConfig {
                reason: "max_contacts must be at least 1",
            });
        }
        Ok(())
    }
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            epsilon: DEFAULT_EPSILON,
            max_contacts: Self::DEFAULT_MAX_CONTACTS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(SweepConfig::default().validate::<()>().is_ok());
    }

    #[test]
    fn rejects_out_of_range_epsilon() {
        for epsilon in [-1e-5, 0.5, f32::NAN, f32::INFINITY] {
            let cfg = SweepConfig {
                epsilon,
                ..SweepConfig::default()
            };
            assert!(
                matches!(cfg.validate::<()>(), Err(SweepError::InvalidConfig { .. })),
                "epsilon {epsilon} should be rejected"
            );
        }
    }

    #[test]
    fn rejects_zero_contact_budget() {
        let cfg = SweepConfig {
            max_contacts: 0,
            ..SweepConfig::default()
        };
        assert!(cfg.validate::<()>().is_err());
    }
}
