use bevy::input::mouse::AccumulatedMouseMotion;
use bevy::prelude::*;
use bevy::window::{CursorGrabMode, CursorOptions, PrimaryWindow};

use crate::player::controller::MovementIntent;

/// Whether the pointer is captured for mouse-look.
#[derive(Resource, Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointerLock {
    pub locked: bool,
}

/// Held state of the two edit buttons.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct EditButtons {
    /// Break
    pub primary: bool,
    /// Place
    pub secondary: bool,
}

impl EditButtons {
    /// A press only counts while the pointer is locked.
    pub fn press(&mut self, button: MouseButton, pointer_locked: bool) {
        if !pointer_locked {
            return;
        }
        match button {
            MouseButton::Left => self.primary = true,
            MouseButton::Right => self.secondary = true,
            _ => {}
        }
    }

    /// Releasing always clears, locked or not.
    pub fn release(&mut self, button: MouseButton) {
        match button {
            MouseButton::Left => self.primary = false,
            MouseButton::Right => self.secondary = false,
            _ => {}
        }
    }
}

/// Everything the tick reads from the user this frame.
#[derive(Resource, Default, Debug, Clone, PartialEq)]
pub struct InputSnapshot {
    pub movement: MovementIntent,
    pub edit: EditButtons,
    pub look_delta: Vec2,
}

pub fn movement_from_keys(keys: &ButtonInput<KeyCode>) -> MovementIntent {
    MovementIntent {
        forward: keys.pressed(KeyCode::KeyW),
        back: keys.pressed(KeyCode::KeyS),
        left: keys.pressed(KeyCode::KeyA),
        right: keys.pressed(KeyCode::KeyD),
        jump: keys.pressed(KeyCode::Space),
    }
}

/// Grab the cursor on click and release it on Escape.
pub fn pointer_lock_system(
    mouse: Res<ButtonInput<MouseButton>>,
    keys: Res<ButtonInput<KeyCode>>,
    ui_interactions: Query<&Interaction>,
    mut lock: ResMut<PointerLock>,
    mut cursor: Single<&mut CursorOptions, With<PrimaryWindow>>,
) {
    let locked = if lock.locked && keys.just_pressed(KeyCode::Escape) {
        false
    } else if !lock.locked && mouse.just_pressed(MouseButton::Left) {
        // Clicks on HUD widgets stay with the HUD
        if ui_interactions.iter().any(|i| *i != Interaction::None) {
            return;
        }
        true
    } else {
        return;
    };

    lock.locked = locked;
    apply_cursor(&mut cursor, locked);
}

fn apply_cursor(cursor: &mut CursorOptions, locked: bool) {
    cursor.visible = !locked;
    cursor.grab_mode = if locked {
        CursorGrabMode::Locked
    } else {
        CursorGrabMode::None
    };
}

/// Fold this frame's raw input into the [`InputSnapshot`].
pub fn capture_input_system(
    keys: Res<ButtonInput<KeyCode>>,
    mouse: Res<ButtonInput<MouseButton>>,
    motion: Res<AccumulatedMouseMotion>,
    lock: Res<PointerLock>,
    mut snapshot: ResMut<InputSnapshot>,
) {
    snapshot.movement = movement_from_keys(&keys);

    // Presses made before the lock took hold this frame are ignored
    let locked_before_frame = lock.locked && !lock.is_changed();
    for button in mouse.get_just_pressed() {
        snapshot.edit.press(*button, locked_before_frame);
    }
    for button in mouse.get_just_released() {
        snapshot.edit.release(*button);
    }

    snapshot.look_delta = if lock.locked { motion.delta } else { Vec2::ZERO };
}
