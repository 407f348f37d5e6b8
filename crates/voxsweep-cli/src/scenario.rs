// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Scenario files: a box, a displacement, a sparse voxel world, and a contact
//! response policy.

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use voxsweep_core::{
    Aabb, BounceOnContact, Contact, ContactHandler, ContactResponse, SlideOnContact,
    StopOnContact, Vec3, VoxelQuery,
};

/// On-disk shape of a scenario.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ScenarioFile {
    #[serde(rename = "box")]
    body: BoxSpec,
    displacement: [f32; 3],
    #[serde(default)]
    solid: Vec<[i32; 3]>,
    #[serde(default)]
    response: Response,
}

/// Box corners as written in scenario files and reports.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct BoxSpec {
    pub(crate) min: [f32; 3],
    pub(crate) max: [f32; 3],
}

impl From<Aabb> for BoxSpec {
    fn from(body: Aabb) -> Self {
        Self {
            min: body.min().to_array(),
            max: body.max().to_array(),
        }
    }
}

/// What the box does when it hits a solid voxel.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum Response {
    #[default]
    Stop,
    Slide,
    Bounce(f32),
}

impl ContactHandler for Response {
    fn on_contact(&mut self, contact: &Contact) -> ContactResponse {
        match *self {
            Self::Stop => StopOnContact.on_contact(contact),
            Self::Slide => SlideOnContact.on_contact(contact),
            Self::Bounce(restitution) => BounceOnContact { restitution }.on_contact(contact),
        }
    }
}

/// Sparse solid-voxel set, ordered so listings are stable.
#[derive(Debug, Default, Clone)]
pub(crate) struct World {
    solid: BTreeSet<[i32; 3]>,
}

impl World {
    /// Solid cells inside the box's inclusive cell range.
    pub(crate) fn overlapping(&self, body: &Aabb, epsilon: f32) -> Vec<[i32; 3]> {
        let (low, high) = body.cells(epsilon);
        self.solid
            .iter()
            .filter(|cell| (0..3).all(|a| low[a] <= cell[a] && cell[a] <= high[a]))
            .copied()
            .collect()
    }

    pub(crate) fn len(&self) -> usize {
        self.solid.len()
    }
}

impl VoxelQuery for World {
    fn is_solid(&self, cell: [i32; 3]) -> bool {
        self.solid.contains(&cell)
    }
}

/// A validated scenario.
#[derive(Debug, Clone)]
pub(crate) struct Scenario {
    pub(crate) body: Aabb,
    pub(crate) displacement: Vec3,
    pub(crate) world: World,
    pub(crate) response: Response,
}

impl Scenario {
    /// Reads and validates the scenario at `path`.
    pub(crate) fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read scenario {}", path.display()))?;
        Self::parse(&text).with_context(|| format!("invalid scenario {}", path.display()))
    }

    pub(crate) fn parse(text: &str) -> Result<Self> {
        let file: ScenarioFile = serde_json::from_str(text).context("malformed scenario JSON")?;
        let body = Aabb::try_new(Vec3::from(file.body.min), Vec3::from(file.body.max))
            .context("bad box")?;
        let displacement = Vec3::from(file.displacement);
        if !displacement.is_finite() {
            bail!("displacement must be finite");
        }
        if let Response::Bounce(r) = file.response {
            if !r.is_finite() {
                bail!("bounce restitution must be finite");
            }
        }
        Ok(Self {
            body,
            displacement,
            world: World {
                solid: file.solid.into_iter().collect(),
            },
            response: file.response,
        })
    }
}
