use bevy::prelude::*;

use crate::player::controller::PlayerState;
use crate::voxel::types::BlockType;

/// Number-row keys in hotbar order.
const HOTKEYS: [KeyCode; BlockType::COUNT] = [
    KeyCode::Digit1,
    KeyCode::Digit2,
    KeyCode::Digit3,
    KeyCode::Digit4,
    KeyCode::Digit5,
];

/// Hotbar slot bound to `key`, if any.
pub fn hotkey_slot(key: KeyCode) -> Option<usize> {
    HOTKEYS.iter().position(|&k| k == key)
}

/// Make the block in `slot` the one placed next. Out-of-range slots leave
/// the selection alone and return false.
pub fn select_slot(state: &mut PlayerState, slot: usize) -> bool {
    match BlockType::from_slot(slot) {
        Some(block) => {
            if state.selected != block {
                debug!("Selected {} (slot {})", block, slot + 1);
            }
            state.selected = block;
            true
        }
        None => false,
    }
}

pub fn hotkey_select_system(keys: Res<ButtonInput<KeyCode>>, mut player: ResMut<PlayerState>) {
    for key in keys.get_just_pressed() {
        if let Some(slot) = hotkey_slot(*key) {
            select_slot(&mut player, slot);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digits_map_in_order() {
        assert_eq!(hotkey_slot(KeyCode::Digit1), Some(0));
        assert_eq!(hotkey_slot(KeyCode::Digit5), Some(4));
        assert_eq!(hotkey_slot(KeyCode::Digit6), None);
        assert_eq!(hotkey_slot(KeyCode::KeyW), None);
    }

    #[test]
    fn selecting_slots() {
        let mut state = PlayerState::spawn_at(Vec3::ZERO);
        assert_eq!(state.selected, BlockType::Neuron);

        assert!(select_slot(&mut state, 3));
        assert_eq!(state.selected, BlockType::Blood);

        assert!(!select_slot(&mut state, 5));
        assert_eq!(state.selected, BlockType::Blood);
    }
}
