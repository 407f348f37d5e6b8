// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Per-segment stepping state.

use crate::math::{cell_boundary, cell_of, length};

/// Per-segment working state of a sweep.
///
/// Rebuilt from `(vector, base, max)` at the start of a call and after every
/// contact the handler chooses to continue from. `t` runs from `0` to
/// `max_t`, the Euclidean length of the current segment. Everything is kept
/// in `f64`; the `f32` box corners convert exactly on the way in.
///
/// `lead_index` and `trail_index` bracket the voxels the box covers on each
/// axis: lead is the corner facing the direction of travel, trail the
/// opposite one. Both are floored with a small nudge into the box so a
/// corner resting exactly on a boundary never claims the neighbouring cell.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct SweepState {
    pub(crate) step: [i32; 3],
    pub(crate) lead_index: [i32; 3],
    pub(crate) trail_pos: [f64; 3],
    pub(crate) trail_index: [i32; 3],
    pub(crate) trail_nudge: [f64; 3],
    pub(crate) normalized: [f64; 3],
    pub(crate) t_delta: [f64; 3],
    pub(crate) t_next: [f64; 3],
    pub(crate) t: f64,
    pub(crate) max_t: f64,
}

impl Default for SweepState {
    fn default() -> Self {
        Self {
            step: [1; 3],
            lead_index: [0; 3],
            trail_pos: [0.0; 3],
            trail_index: [0; 3],
            trail_nudge: [0.0; 3],
            normalized: [0.0; 3],
            t_delta: [f64::INFINITY; 3],
            t_next: [f64::INFINITY; 3],
            t: 0.0,
            max_t: 0.0,
        }
    }
}

impl SweepState {
    /// Re-derives the state for sweeping the box `[base, max]` along `vector`.
    ///
    /// Returns `false` when `vector` has zero length; the state is then inert
    /// (`max_t == 0`) and the segment must not be stepped.
    pub(crate) fn reset(
        &mut self,
        vector: [f64; 3],
        base: [f64; 3],
        max: [f64; 3],
        epsilon: f64,
    ) -> bool {
        self.t = 0.0;
        self.max_t = length(vector);
        if self.max_t == 0.0 {
            return false;
        }

        for i in 0..3 {
            let positive = vector[i] >= 0.0;
            let step = if positive { 1 } else { -1 };
            let nudge = if positive { epsilon } else { -epsilon };
            let (trail, lead) = if positive {
                (base[i], max[i])
            } else {
                (max[i], base[i])
            };

            self.step[i] = step;
            self.trail_pos[i] = trail;
            self.trail_nudge[i] = nudge;
            self.lead_index[i] = cell_of(lead - nudge);
            self.trail_index[i] = cell_of(trail + nudge);
            self.normalized[i] = vector[i] / self.max_t;
            // 1 / ±0 is ±inf, so a still axis never wins the argmin in `step_forward`.
            self.t_delta[i] = (1.0 / self.normalized[i]).abs();

            // A lead corner less than `epsilon` past a boundary floors behind it;
            // clamp so `t` never starts negative.
            let dist = if positive {
                cell_boundary(self.lead_index[i] + 1) - lead
            } else {
                lead - cell_boundary(self.lead_index[i])
            }
            .max(0.0);
            self.t_next[i] = if self.t_delta[i] < f64::INFINITY {
                self.t_delta[i] * dist
            } else {
                f64::INFINITY
            };
        }
        true
    }

    /// `true` while the last crossing still lies on the current segment.
    pub(crate) fn in_segment(&self) -> bool {
        self.t <= self.max_t
    }
}
