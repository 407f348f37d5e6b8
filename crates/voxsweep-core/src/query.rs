// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Occupancy seam between the engine and the caller's voxel storage.

/// Read-only occupancy predicate over integer voxel coordinates.
///
/// The engine calls [`VoxelQuery::is_solid`] exactly once per cell visited in
/// each leading-face scan and treats it as pure. Any caching or side effects
/// are the implementor's business.
pub trait VoxelQuery {
    /// Returns `true` if the voxel at `cell` blocks motion.
    fn is_solid(&self, cell: [i32; 3]) -> bool;
}

impl<F> VoxelQuery for F
where
    F: Fn(i32, i32, i32) -> bool,
{
    fn is_solid(&self, cell: [i32; 3]) -> bool {
        self(cell[0], cell[1], cell[2])
    }
}
