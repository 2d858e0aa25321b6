use log::debug;

use crate::interaction::raycast::PointerIntersection;
use crate::player::input::EditButtons;
use crate::voxel::types::{BlockType, Coordinate};
use crate::voxel::world::VoxelWorld;

/// What one editor tick did.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EditOutcome {
    /// Type under the crosshair, `None` when nothing is targeted
    pub targeted: Option<BlockType>,
    pub broken: Option<(Coordinate, BlockType)>,
    pub placed: Option<(Coordinate, BlockType)>,
}

/// Break/place protocol driven by the pointer intersection and held buttons.
///
/// Both actions fire on every tick the button stays down, so holding break
/// while sweeping the view removes one voxel per frame.
pub struct BlockEditor;

impl BlockEditor {
    /// Remove the voxel at `coord`; air is left as is.
    pub fn break_block(world: &mut VoxelWorld, coord: Coordinate) -> Option<BlockType> {
        world.remove_block(coord)
    }

    /// Put `block` at `coord` only if the cell is empty.
    pub fn place_block(world: &mut VoxelWorld, coord: Coordinate, block: BlockType) -> bool {
        if world.is_occupied(coord) {
            return false;
        }
        world.set_block(coord, block);
        true
    }

    pub fn tick(
        world: &mut VoxelWorld,
        hit: Option<PointerIntersection>,
        buttons: EditButtons,
        selected: BlockType,
    ) -> EditOutcome {
        let Some(hit) = hit else {
            return EditOutcome::default();
        };

        let mut outcome = EditOutcome {
            targeted: Some(hit.block),
            ..Default::default()
        };

        if buttons.primary {
            if let Some(block) = Self::break_block(world, hit.coord) {
                debug!("Broke {} at {}", block, hit.coord);
                outcome.broken = Some((hit.coord, block));
            }
        }

        if buttons.secondary {
            let target = hit.adjacent();
            if Self::place_block(world, target, selected) {
                debug!("Placed {} at {}", selected, target);
                outcome.placed = Some((target, selected));
            }
        }

        outcome
    }
}
