// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Contact resolution: advance to the contact, ask the handler, restart.

use tracing::{debug, trace};

use super::{check_range, SweepContext};
use crate::contact::{Axis, Contact, ContactResponse};
use crate::error::SweepError;
use crate::math::{narrow, widen};

/// Whether the main loop keeps stepping after a contact.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(super) enum Flow {
    Stop,
    Continue,
}

impl SweepContext {
    /// Moves the box up to the contact, asks the handler what to do, and
    /// re-derives the state for the residual it hands back.
    pub(super) fn resolve_contact<E, H>(
        &mut self,
        axis: Axis,
        cell: [i32; 3],
        handler: &mut H,
    ) -> Result<Flow, SweepError<E>>
    where
        H: FnMut(&Contact) -> Result<ContactResponse, E>,
    {
        self.contacts += 1;
        if self.contacts > self.config.max_contacts {
            return Err(SweepError::ContactLimit {
                limit: self.config.max_contacts,
            });
        }

        let t = self.state.t;
        self.distance += t;
        let fraction = t / self.state.max_t;
        let mut residual = [0.0; 3];
        for i in 0..3 {
            let travelled = self.vector[i] * fraction;
            self.moved[i] += travelled;
            self.base[i] += travelled;
            self.max[i] += travelled;
            residual[i] = self.vector[i] - travelled;
        }
        let residual = narrow(residual);
        let direction = if self.state.step[axis.index()] > 0 { 1 } else { -1 };

        #[allow(clippy::cast_possible_truncation)]
        let contact = Contact::new(self.distance as f32, axis, direction, residual);
        debug!(
            distance = self.distance,
            ?axis,
            direction,
            ?cell,
            residual = ?residual.to_array(),
            "contact"
        );

        match handler(&contact).map_err(SweepError::Handler)? {
            ContactResponse::Stop => Ok(Flow::Stop),
            ContactResponse::Continue(next) => {
                if !next.is_finite() || !next.length().is_finite() {
                    return Err(SweepError::NonFinite {
                        input: "continuation vector",
                    });
                }
                self.vector = widen(next);
                check_range(self.base, self.max, self.vector, "continuation vector")?;
                if self.state.reset(
                    self.vector,
                    self.base,
                    self.max,
                    f64::from(self.config.epsilon),
                ) {
                    trace!(vector = ?next.to_array(), "segment restarted");
                    Ok(Flow::Continue)
                } else {
                    Ok(Flow::Stop)
                }
            }
        }
    }
}
