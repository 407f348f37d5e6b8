// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Human (table) and machine (JSON) renderings of a finished sweep.

use std::fmt::Write as _;

use anyhow::Result;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, CellAlignment, Table};
use serde::Serialize;
use voxsweep_core::{Aabb, Axis, Contact, SweepOutcome};

use crate::scenario::BoxSpec;

#[derive(Debug, Serialize)]
struct ContactRow {
    distance: f32,
    axis: &'static str,
    direction: i8,
    residual: [f32; 3],
}

impl From<&Contact> for ContactRow {
    fn from(c: &Contact) -> Self {
        Self {
            distance: c.distance(),
            axis: axis_name(c.axis()),
            direction: c.direction(),
            residual: c.residual().to_array(),
        }
    }
}

const fn axis_name(axis: Axis) -> &'static str {
    match axis {
        Axis::X => "x",
        Axis::Y => "y",
        Axis::Z => "z",
    }
}

/// Everything `voxsweep run` prints.
#[derive(Debug, Serialize)]
pub(crate) struct Report {
    distance: f32,
    displacement: [f32; 3],
    translated: bool,
    start: BoxSpec,
    #[serde(rename = "box")]
    end: BoxSpec,
    contacts: Vec<ContactRow>,
}

impl Report {
    /// `end` is the box as the caller holds it after the sweep; with
    /// `translated == false` it equals `start`.
    pub(crate) fn new(
        outcome: &SweepOutcome,
        contacts: &[Contact],
        start: Aabb,
        end: Aabb,
        translated: bool,
    ) -> Self {
        Self {
            distance: outcome.distance,
            displacement: outcome.displacement.to_array(),
            translated,
            start: start.into(),
            end: end.into(),
            contacts: contacts.iter().map(ContactRow::from).collect(),
        }
    }

    pub(crate) fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub(crate) fn render(&self) -> String {
        let mut out = String::new();
        if self.contacts.is_empty() {
            out.push_str("no contacts\n");
        } else {
            let mut table = Table::new();
            table.load_preset(UTF8_FULL).set_header(vec![
                "#",
                "distance",
                "axis",
                "dir",
                "residual",
            ]);
            for (i, row) in self.contacts.iter().enumerate() {
                table.add_row(vec![
                    Cell::new(i + 1).set_alignment(CellAlignment::Right),
                    Cell::new(format!("{:.4}", row.distance)).set_alignment(CellAlignment::Right),
                    Cell::new(row.axis),
                    Cell::new(format!("{:+}", row.direction)),
                    Cell::new(fmt3(row.residual)),
                ]);
            }
            let _ = writeln!(out, "{table}");
        }
        let _ = writeln!(out, "distance:     {:.4}", self.distance);
        let _ = writeln!(out, "displacement: {}", fmt3(self.displacement));
        let label = if self.translated { "box:" } else { "box (unmoved):" };
        let _ = writeln!(
            out,
            "{label} {} .. {}",
            fmt3(self.end.min),
            fmt3(self.end.max)
        );
        out
    }
}

fn fmt3(v: [f32; 3]) -> String {
    format!("({:.4}, {:.4}, {:.4})", v[0], v[1], v[2])
}
