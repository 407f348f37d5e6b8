// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Boundary-crossing selection and trailing-corner tracking.

use tracing::trace;

use super::state::SweepState;
use crate::contact::Axis;
use crate::math::cell_of;

impl SweepState {
    /// Axis with the nearest pending boundary crossing.
    ///
    /// Exact ties resolve to the lowest axis index.
    pub(crate) fn next_axis(&self) -> usize {
        let mut axis = 0;
        if self.t_next[1] < self.t_next[axis] {
            axis = 1;
        }
        if self.t_next[2] < self.t_next[axis] {
            axis = 2;
        }
        axis
    }

    /// Advances to the next voxel boundary crossing and returns its axis.
    pub(crate) fn step_forward(&mut self) -> Axis {
        let axis = self.next_axis();
        let dt = self.t_next[axis] - self.t;
        self.t = self.t_next[axis];
        self.lead_index[axis] += self.step[axis];
        self.t_next[axis] += self.t_delta[axis];
        for i in 0..3 {
            self.trail_pos[i] += dt * self.normalized[i];
            self.trail_index[i] = cell_of(self.trail_pos[i] + self.trail_nudge[i]);
        }
        trace!(axis, t = self.t, lead = ?self.lead_index, "boundary crossed");
        match axis {
            0 => Axis::X,
            1 => Axis::Y,
            _ => Axis::Z,
        }
    }
}
