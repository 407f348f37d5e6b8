// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Fixtures shared by the voxsweep benchmarks.

use std::collections::HashSet;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use voxsweep_core::{Aabb, Vec3, VoxelQuery};

/// Dense-ish random voxel field inside a cube of side `2 * half_extent`
/// centred on the origin. Cells outside the cube are empty.
#[derive(Debug, Clone)]
pub struct RandomField {
    solid: HashSet<[i32; 3]>,
}

impl RandomField {
    /// Fills each cell with probability `density`, reproducibly from `seed`.
    pub fn new(seed: u64, half_extent: i32, density: f64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut solid = HashSet::new();
        for x in -half_extent..half_extent {
            for y in -half_extent..half_extent {
                for z in -half_extent..half_extent {
                    if rng.gen_bool(density) {
                        solid.insert([x, y, z]);
                    }
                }
            }
        }
        Self { solid }
    }

    /// Number of solid cells.
    pub fn len(&self) -> usize {
        self.solid.len()
    }

    /// `true` when no cell is solid.
    pub fn is_empty(&self) -> bool {
        self.solid.is_empty()
    }
}

impl VoxelQuery for RandomField {
    fn is_solid(&self, cell: [i32; 3]) -> bool {
        self.solid.contains(&cell)
    }
}

/// `n` reproducible `(box, displacement)` pairs with boxes near the origin and
/// displacements up to `reach` long on each axis.
pub fn random_sweeps(seed: u64, n: usize, reach: f32) -> Vec<(Aabb, Vec3)> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|_| {
            let min = Vec3::new(
                rng.gen_range(-4.0..4.0),
                rng.gen_range(-4.0..4.0),
                rng.gen_range(-4.0..4.0),
            );
            let size = Vec3::new(
                rng.gen_range(0.3..2.0),
                rng.gen_range(0.3..2.0),
                rng.gen_range(0.3..2.0),
            );
            let v = Vec3::new(
                rng.gen_range(-reach..reach),
                rng.gen_range(-reach..reach),
                rng.gen_range(-reach..reach),
            );
            (Aabb::new(min, min.add(&size)), v)
        })
        .collect()
}
