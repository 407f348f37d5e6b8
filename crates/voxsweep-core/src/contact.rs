// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Contacts reported by the engine and the policies that answer them.
//!
//! A sweep hands every contact to a [`ContactHandler`], which either stops the
//! sweep or returns the residual displacement to continue with. Sliding,
//! stopping, and bouncing are all expressed as edits of that residual.

use crate::math::Vec3;

/// One of the three grid axes.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Axis {
    /// Axis 0.
    X,
    /// Axis 1.
    Y,
    /// Axis 2.
    Z,
}

impl Axis {
    /// All axes in ascending index order.
    pub const ALL: [Self; 3] = [Self::X, Self::Y, Self::Z];

    /// Index of this axis (0, 1, or 2).
    pub const fn index(self) -> usize {
        match self {
            Self::X => 0,
            Self::Y => 1,
            Self::Z => 2,
        }
    }

    /// Axis for `index`, or `None` if `index > 2`.
    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Self::X),
            1 => Some(Self::Y),
            2 => Some(Self::Z),
            _ => None,
        }
    }
}

/// A blocked boundary crossing on the box's leading face.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Contact {
    distance: f32,
    axis: Axis,
    direction: i8,
    residual: Vec3,
}

impl Contact {
    pub(crate) const fn new(distance: f32, axis: Axis, direction: i8, residual: Vec3) -> Self {
        Self {
            distance,
            axis,
            direction,
            residual,
        }
    }

    /// Total distance travelled in this call up to the contact, summed over
    /// every segment so far.
    pub const fn distance(&self) -> f32 {
        self.distance
    }

    /// Axis whose leading face was blocked.
    pub const fn axis(&self) -> Axis {
        self.axis
    }

    /// Direction of travel on [`Contact::axis`]: `+1` or `-1`.
    pub const fn direction(&self) -> i8 {
        self.direction
    }

    /// Displacement of the current segment that has not been travelled yet.
    pub const fn residual(&self) -> Vec3 {
        self.residual
    }

    /// Residual with the blocked component zeroed: the slide response.
    pub fn slide(&self) -> Vec3 {
        self.residual.with_component(self.axis.index(), 0.0)
    }
}

/// What the sweep should do after a contact.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ContactResponse {
    /// End the sweep at the contact point.
    Stop,
    /// Keep sweeping along the given residual vector. A zero vector ends the
    /// sweep as if `Stop` had been returned.
    Continue(Vec3),
}

/// Caller-side decision point invoked at every contact.
pub trait ContactHandler {
    /// Decides how the sweep proceeds after `contact`.
    fn on_contact(&mut self, contact: &Contact) -> ContactResponse;
}

impl<F> ContactHandler for F
where
    F: FnMut(&Contact) -> ContactResponse,
{
    fn on_contact(&mut self, contact: &Contact) -> ContactResponse {
        self(contact)
    }
}

/// Stops at the first contact.
#[derive(Debug, Default, Copy, Clone)]
pub struct StopOnContact;

impl ContactHandler for StopOnContact {
    fn on_contact(&mut self, _contact: &Contact) -> ContactResponse {
        ContactResponse::Stop
    }
}

/// Cancels motion along the blocked axis and keeps the rest.
#[derive(Debug, Default, Copy, Clone)]
pub struct SlideOnContact;

impl ContactHandler for SlideOnContact {
    fn on_contact(&mut self, contact: &Contact) -> ContactResponse {
        ContactResponse::Continue(contact.slide())
    }
}

/// Reflects the blocked component of the residual, scaled by `restitution`.
///
/// A restitution of `0.0` behaves like [`SlideOnContact`].
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct BounceOnContact {
    /// Fraction of the blocked component kept after reflection.
    pub restitution: f32,
}

impl ContactHandler for BounceOnContact {
    fn on_contact(&mut self, contact: &Contact) -> ContactResponse {
        let axis = contact.axis().index();
        let residual = contact.residual();
        let reflected = -residual[axis] * self.restitution;
        ContactResponse::Continue(residual.with_component(axis, reflected))
    }
}

/// Records every contact before forwarding it to an inner handler.
#[derive(Debug, Default, Clone)]
pub struct ContactLog<H> {
    inner: H,
    contacts: Vec<Contact>,
}

impl<H> ContactLog<H> {
    /// Wraps `inner`.
    pub const fn new(inner: H) -> Self {
        Self {
            inner,
            contacts: Vec::new(),
        }
    }

    /// Contacts seen so far, in the order they occurred.
    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    /// Consumes the log, returning the inner handler and the recorded contacts.
    pub fn into_parts(self) -> (H, Vec<Contact>) {
        (self.inner, self.contacts)
    }
}

impl<H: ContactHandler> ContactHandler for ContactLog<H> {
    fn on_contact(&mut self, contact: &Contact) -> ContactResponse {
        self.contacts.push(*contact);
        self.inner.on_contact(contact)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contact_on(axis: Axis, residual: Vec3) -> Contact {
        Contact::new(1.0, axis, 1, residual)
    }

    #[test]
    fn slide_zeroes_only_the_blocked_axis() {
        let c = contact_on(Axis::Y, Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(
            SlideOnContact.on_contact(&c),
            ContactResponse::Continue(Vec3::new(1.0, 0.0, 3.0))
        );
    }

    #[test]
    fn bounce_reflects_and_scales_the_blocked_axis() {
        let c = contact_on(Axis::X, Vec3::new(4.0, 1.0, 0.0));
        let mut bounce = BounceOnContact { restitution: 0.5 };
        assert_eq!(
            bounce.on_contact(&c),
            ContactResponse::Continue(Vec3::new(-2.0, 1.0, 0.0))
        );
    }

    #[test]
    fn log_records_then_forwards() {
        let mut log = ContactLog::new(StopOnContact);
        let c = contact_on(Axis::Z, Vec3::UNIT_Z);
        assert_eq!(log.on_contact(&c), ContactResponse::Stop);
        assert_eq!(log.contacts(), &[c]);
    }

    #[test]
    fn axis_index_round_trips() {
        for axis in Axis::ALL {
            assert_eq!(Axis::from_index(axis.index()), Some(axis));
        }
        assert_eq!(Axis::from_index(3), None);
    }
}
