use bevy::prelude::*;

use crate::interaction::TargetedBlock;
use crate::player::controller::PlayerState;
use crate::player::inventory::select_slot;
use crate::voxel::types::BlockType;

/// Marker for the position readout
#[derive(Component)]
pub struct PositionText;

/// Marker for the "looking at" readout
#[derive(Component)]
pub struct LookingAtText;

/// A clickable hotbar slot.
#[derive(Component, Debug, Clone, Copy)]
pub struct InventorySlot(pub usize);

const SLOT_SIZE: f32 = 52.0;
const SLOT_FRAME: Color = Color::srgba(0.1, 0.1, 0.2, 0.8);
const SLOT_FRAME_SELECTED: Color = Color::WHITE;

/// Player position as whole voxel coordinates.
pub fn format_position(position: Vec3) -> String {
    format!(
        "{}, {}, {}",
        position.x.floor() as i32,
        position.y.floor() as i32,
        position.z.floor() as i32
    )
}

pub fn looking_at_label(target: Option<BlockType>) -> &'static str {
    target.map_or("None", BlockType::display_name)
}

pub fn setup_hud(mut commands: Commands) {
    // Readouts, top left
    commands
        .spawn(Node {
            position_type: PositionType::Absolute,
            left: Val::Px(12.0),
            top: Val::Px(12.0),
            flex_direction: FlexDirection::Column,
            row_gap: Val::Px(4.0),
            ..default()
        })
        .with_children(|parent| {
            parent.spawn((
                Text::new("Position: "),
                TextFont {
                    font_size: 18.0,
                    ..default()
                },
                TextColor(Color::WHITE),
                PositionText,
            ));
            parent.spawn((
                Text::new("Looking at: None"),
                TextFont {
                    font_size: 18.0,
                    ..default()
                },
                TextColor(Color::WHITE),
                LookingAtText,
            ));
        });

    // Crosshair
    commands.spawn((
        Node {
            position_type: PositionType::Absolute,
            left: Val::Percent(50.0),
            top: Val::Percent(50.0),
            width: Val::Px(4.0),
            height: Val::Px(4.0),
            margin: UiRect::all(Val::Px(-2.0)),
            ..default()
        },
        BackgroundColor(Color::WHITE),
    ));

    // Inventory bar, bottom centre
    commands
        .spawn(Node {
            position_type: PositionType::Absolute,
            width: Val::Percent(100.0),
            bottom: Val::Px(16.0),
            justify_content: JustifyContent::Center,
            column_gap: Val::Px(8.0),
            ..default()
        })
        .with_children(|bar| {
            for block in BlockType::ALL {
                bar.spawn((
                    Button,
                    Node {
                        width: Val::Px(SLOT_SIZE),
                        height: Val::Px(SLOT_SIZE),
                        padding: UiRect::all(Val::Px(4.0)),
                        ..default()
                    },
                    BackgroundColor(SLOT_FRAME),
                    InventorySlot(block.slot()),
                ))
                .with_children(|slot| {
                    slot.spawn((
                        Node {
                            width: Val::Percent(100.0),
                            height: Val::Percent(100.0),
                            justify_content: JustifyContent::Center,
                            align_items: AlignItems::Center,
                            ..default()
                        },
                        BackgroundColor(block.base_color()),
                    ))
                    .with_children(|swatch| {
                        swatch.spawn((
                            Text::new((block.slot() + 1).to_string()),
                            TextFont {
                                font_size: 14.0,
                                ..default()
                            },
                            TextColor(Color::BLACK),
                        ));
                    });
                });
            }
        });
}

pub fn update_hud_text(
    player: Res<PlayerState>,
    targeted: Res<TargetedBlock>,
    mut position_text: Single<&mut Text, (With<PositionText>, Without<LookingAtText>)>,
    mut looking_text: Single<&mut Text, (With<LookingAtText>, Without<PositionText>)>,
) {
    position_text.0 = format!("Position: {}", format_position(player.position));
    looking_text.0 = format!(
        "Looking at: {}",
        looking_at_label(targeted.hit.map(|hit| hit.block))
    );
}

pub fn inventory_click_system(
    slots: Query<(&Interaction, &InventorySlot), Changed<Interaction>>,
    mut player: ResMut<PlayerState>,
) {
    for (interaction, slot) in slots.iter() {
        if *interaction == Interaction::Pressed {
            select_slot(&mut player, slot.0);
        }
    }
}

pub fn highlight_selected_slot(
    player: Res<PlayerState>,
    mut slots: Query<(&InventorySlot, &mut BackgroundColor)>,
) {
    if !player.is_changed() {
        return;
    }
    for (slot, mut background) in slots.iter_mut() {
        background.0 = if slot.0 == player.selected.slot() {
            SLOT_FRAME_SELECTED
        } else {
            SLOT_FRAME
        };
    }
}

pub struct HudPlugin;

impl Plugin for HudPlugin {
    fn build(&self, app: &mut App) {
        app
            .add_systems(Startup, setup_hud)
            .add_systems(PostUpdate, (
                inventory_click_system,
                highlight_selected_slot,
                update_hud_text,
            ).chain());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn position_is_floored() {
        assert_eq!(format_position(Vec3::new(1.9, 6.8, -0.2)), "1, 6, -1");
    }

    #[test]
    fn label_falls_back_to_none() {
        assert_eq!(looking_at_label(None), "None");
        assert_eq!(looking_at_label(Some(BlockType::Blood)), "Blood Vessel");
    }
}
