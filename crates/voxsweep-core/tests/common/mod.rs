// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![allow(dead_code)]
use std::collections::HashSet;

use voxsweep_core::{Aabb, Vec3, VoxelQuery};

/// Sparse set of solid voxels.
#[derive(Debug, Default, Clone)]
pub struct Voxels {
    solid: HashSet<[i32; 3]>,
}

impl Voxels {
    pub fn new<I: IntoIterator<Item = [i32; 3]>>(cells: I) -> Self {
        Self {
            solid: cells.into_iter().collect(),
        }
    }
}

impl VoxelQuery for Voxels {
    fn is_solid(&self, cell: [i32; 3]) -> bool {
        self.solid.contains(&cell)
    }
}

pub fn approx_eq(a: f32, b: f32) {
    let diff = (a - b).abs();
    assert!(diff <= 1e-5, "expected {b}, got {a} (diff {diff})");
}

pub fn approx_eq3(a: [f32; 3], b: [f32; 3]) {
    for i in 0..3 {
        let diff = (a[i] - b[i]).abs();
        assert!(diff <= 1e-5, "expected {b:?}, got {a:?} (axis {i})");
    }
}

/// Unit cube whose minimum corner sits at `(x, y, z)`.
pub fn unit_box_at(x: f32, y: f32, z: f32) -> Aabb {
    Aabb::new(Vec3::new(x, y, z), Vec3::new(x + 1.0, y + 1.0, z + 1.0))
}
