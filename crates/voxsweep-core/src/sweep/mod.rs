// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Swept box-versus-voxel collision.
//!
//! The box's leading corner is traced through the grid like a ray (a 3D DDA).
//! Each time it crosses a voxel boundary, the whole leading face on that axis
//! is checked against the occupancy query. On a hit the box is moved up to the
//! boundary and the handler decides whether the sweep stops or continues along
//! a new residual vector.

mod resolver;
mod scanner;
mod state;
mod stepper;

use core::convert::Infallible;

use tracing::{debug, instrument};

use self::resolver::Flow;
use self::state::SweepState;
use crate::config::SweepConfig;
use crate::contact::{Contact, ContactHandler, ContactResponse};
use crate::error::SweepError;
use crate::math::{narrow, widen, Vec3, MAX_COORDINATE};
use crate::query::VoxelQuery;
use crate::types::body::SweepBody;

/// Whether a finished sweep moves the caller's box.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum Translate {
    /// Call [`SweepBody::translate`] with the total displacement.
    #[default]
    Apply,
    /// Leave the box alone; the caller applies [`SweepOutcome::displacement`].
    Skip,
}

/// Result of a completed sweep.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SweepOutcome {
    /// Total distance travelled, summed over every segment. After a handler
    /// redirects the box this is generally larger than the straight-line
    /// distance between the start and end positions.
    pub distance: f32,
    /// Total translation of the box.
    pub displacement: Vec3,
    /// Number of contacts handed to the handler.
    pub contacts: u32,
}

/// Reusable sweep working state.
///
/// A context holds no borrowed data between calls; it can be kept around to
/// sweep many boxes one after another. Concurrent sweeps need one context
/// each.
#[derive(Debug, Clone, Default)]
pub struct SweepContext {
    config: SweepConfig,
    state: SweepState,
    vector: [f64; 3],
    base: [f64; 3],
    max: [f64; 3],
    moved: [f64; 3],
    distance: f64,
    contacts: u32,
}

impl SweepContext {
    /// Creates a context driven by `config`.
    pub fn new(config: SweepConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Configuration in use.
    pub const fn config(&self) -> &SweepConfig {
        &self.config
    }

    /// Sweeps `body` along `displacement` through the voxels reported by `query`.
    ///
    /// `handler` is called at every contact. With [`Translate::Apply`] the
    /// box is moved by the outcome's displacement before returning; on error
    /// the box is left untouched.
    #[instrument(level = "debug", skip_all, fields(displacement = ?displacement.to_array()))]
    pub fn sweep<Q, B, H>(
        &mut self,
        query: &Q,
        body: &mut B,
        displacement: Vec3,
        handler: &mut H,
        translate: Translate,
    ) -> Result<SweepOutcome, SweepError>
    where
        Q: VoxelQuery + ?Sized,
        B: SweepBody + ?Sized,
        H: ContactHandler + ?Sized,
    {
        let outcome = self.execute(
            &mut |cell| Ok::<_, Infallible>(query.is_solid(cell)),
            &mut |contact: &Contact| Ok::<_, Infallible>(handler.on_contact(contact)),
            body.base(),
            body.max(),
            displacement,
        )?;
        if translate == Translate::Apply {
            body.translate(outcome.displacement);
        }
        Ok(outcome)
    }

    /// Like [`SweepContext::sweep`], with a fallible query and handler.
    ///
    /// The first error either returns aborts the sweep and is surfaced as
    /// [`SweepError::Query`] or [`SweepError::Handler`].
    #[instrument(level = "debug", skip_all, fields(displacement = ?displacement.to_array()))]
    pub fn try_sweep<E, Q, B, H>(
        &mut self,
        mut query: Q,
        body: &mut B,
        displacement: Vec3,
        mut handler: H,
        translate: Translate,
    ) -> Result<SweepOutcome, SweepError<E>>
    where
        Q: FnMut([i32; 3]) -> Result<bool, E>,
        B: SweepBody + ?Sized,
        H: FnMut(&Contact) -> Result<ContactResponse, E>,
    {
        let outcome = self.execute(
            &mut query,
            &mut handler,
            body.base(),
            body.max(),
            displacement,
        )?;
        if translate == Translate::Apply {
            body.translate(outcome.displacement);
        }
        Ok(outcome)
    }

    fn execute<E, Q, H>(
        &mut self,
        query: &mut Q,
        handler: &mut H,
        base: Vec3,
        max: Vec3,
        displacement: Vec3,
    ) -> Result<SweepOutcome, SweepError<E>>
    where
        Q: FnMut([i32; 3]) -> Result<bool, E>,
        H: FnMut(&Contact) -> Result<ContactResponse, E>,
    {
        self.config.validate::<E>()?;
        check_inputs::<E>(base, max, displacement)?;

        self.vector = widen(displacement);
        self.base = widen(base);
        self.max = widen(max);
        check_range(self.base, self.max, self.vector, "displacement")?;
        self.moved = [0.0; 3];
        self.distance = 0.0;
        self.contacts = 0;

        if !self.state.reset(
            self.vector,
            self.base,
            self.max,
            f64::from(self.config.epsilon),
        ) {
            return Ok(self.outcome());
        }

        let mut axis = self.state.step_forward();
        while self.state.in_segment() {
            let hit = scanner::scan_leading_face(&self.state, axis, query)
                .map_err(SweepError::Query)?;
            if let Some(cell) = hit {
                if self.resolve_contact(axis, cell, handler)? == Flow::Stop {
                    return Ok(self.outcome());
                }
            }
            axis = self.state.step_forward();
        }

        self.distance += self.state.max_t;
        for i in 0..3 {
            self.moved[i] += self.vector[i];
        }
        debug!(
            distance = self.distance,
            contacts = self.contacts,
            "sweep completed unobstructed"
        );
        Ok(self.outcome())
    }

    #[allow(clippy::cast_possible_truncation)]
    fn outcome(&self) -> SweepOutcome {
        SweepOutcome {
            distance: self.distance as f32,
            displacement: narrow(self.moved),
            contacts: self.contacts,
        }
    }
}

fn check_inputs<E>(base: Vec3, max: Vec3, displacement: Vec3) -> Result<(), SweepError<E>> {
    if !displacement.is_finite() {
        return Err(SweepError::NonFinite {
            input: "displacement",
        });
    }
    if !base.is_finite() || !max.is_finite() {
        return Err(SweepError::NonFinite {
            input: "box corner",
        });
    }
    for axis in 0..3 {
        if max[axis] < base[axis] {
            return Err(SweepError::InvalidBox {
                axis,
                base: base[axis],
                max: max[axis],
            });
        }
    }
    if !displacement.length().is_finite() {
        return Err(SweepError::NonFinite {
            input: "displacement",
        });
    }
    Ok(())
}

/// Rejects a segment whose start or end corners leave `±MAX_COORDINATE`.
fn check_range<E>(
    base: [f64; 3],
    max: [f64; 3],
    vector: [f64; 3],
    input: &'static str,
) -> Result<(), SweepError<E>> {
    let limit = f64::from(MAX_COORDINATE);
    let inside = |c: f64| c.abs() <= limit;
    let corners_inside = (0..3).all(|i| inside(base[i]) && inside(max[i]));
    if !corners_inside {
        return Err(SweepError::OutOfRange { input: "box corner" });
    }
    let ends_inside = (0..3).all(|i| inside(base[i] + vector[i]) && inside(max[i] + vector[i]));
    if !ends_inside {
        return Err(SweepError::OutOfRange { input });
    }
    Ok(())
}

/// Sweeps `body` with a fresh default [`SweepContext`].
///
/// Returns the total distance travelled along with the displacement applied.
///
/// # Examples
/// ```
/// use voxsweep_core::{sweep, Aabb, StopOnContact, Translate, Vec3};
///
/// let floor = |_x: i32, y: i32, _z: i32| y < 0;
/// let mut body = Aabb::new(Vec3::new(0.0, 2.0, 0.0), Vec3::new(1.0, 3.0, 1.0));
/// let out = sweep(&floor, &mut body, Vec3::new(0.0, -5.0, 0.0), &mut StopOnContact, Translate::Apply)?;
/// assert_eq!(out.distance, 2.0);
/// assert_eq!(body.min().y(), 0.0);
/// # Ok::<(), voxsweep_core::SweepError>(())
/// ```
pub fn sweep<Q, B, H>(
    query: &Q,
    body: &mut B,
    displacement: Vec3,
    handler: &mut H,
    translate: Translate,
) -> Result<SweepOutcome, SweepError>
where
    Q: VoxelQuery + ?Sized,
    B: SweepBody + ?Sized,
    H: ContactHandler + ?Sized,
{
    SweepContext::default().sweep(query, body, displacement, handler, translate)
}

/// Fallible counterpart of [`sweep`].
pub fn try_sweep<E, Q, B, H>(
    query: Q,
    body: &mut B,
    displacement: Vec3,
    handler: H,
    translate: Translate,
) -> Result<SweepOutcome, SweepError<E>>
where
    Q: FnMut([i32; 3]) -> Result<bool, E>,
    B: SweepBody + ?Sized,
    H: FnMut(&Contact) -> Result<ContactResponse, E>,
{
    SweepContext::default().try_sweep(query, body, displacement, handler, translate)
}
