use bevy::prelude::*;
use std::collections::HashMap;

use crate::voxel::types::{BlockType, Coordinate};

/// A mutation the renderer has not yet reflected.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VoxelChange {
    Placed { coord: Coordinate, block: BlockType },
    Removed { coord: Coordinate },
}

/// Sparse voxel storage: a coordinate is present iff a solid block is there.
///
/// Every coordinate that was never set reads as air, including anything
/// outside the generated area. Mutations are queued as [`VoxelChange`]s for
/// the render bridge to drain.
#[derive(Resource, Default, Debug)]
pub struct VoxelWorld {
    blocks: HashMap<Coordinate, BlockType>,
    pending: Vec<VoxelChange>,
}

impl VoxelWorld {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite the block at `coord`.
    pub fn set_block(&mut self, coord: Coordinate, block: BlockType) {
        self.blocks.insert(coord, block);
        self.pending.push(VoxelChange::Placed { coord, block });
    }

    pub fn get_block(&self, coord: Coordinate) -> Option<BlockType> {
        self.blocks.get(&coord).copied()
    }

    pub fn is_occupied(&self, coord: Coordinate) -> bool {
        self.blocks.contains_key(&coord)
    }

    /// Remove the block at `coord`. Returns what was there; removing air is
    /// a no-op and queues nothing.
    pub fn remove_block(&mut self, coord: Coordinate) -> Option<BlockType> {
        let removed = self.blocks.remove(&coord);
        if removed.is_some() {
            self.pending.push(VoxelChange::Removed { coord });
        }
        removed
    }

    /// Highest occupied y in the column at (x, z), scanning down from
    /// `ceiling` to 0. Empty columns report 0.
    pub fn ground_height(&self, x: i32, z: i32, ceiling: i32) -> i32 {
        (0..=ceiling)
            .rev()
            .find(|&y| self.is_occupied(IVec3::new(x, y, z)))
            .unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn has_pending_changes(&self) -> bool {
        !self.pending.is_empty()
    }

    /// Take all queued changes in the order they happened.
    pub fn drain_changes(&mut self) -> Vec<VoxelChange> {
        std::mem::take(&mut self.pending)
    }
}
