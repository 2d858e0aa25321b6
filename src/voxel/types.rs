use bevy::prelude::*;
use std::fmt;

/// Integer voxel coordinate, the only key used for world lookups.
pub type Coordinate = IVec3;

/// The closed set of brain-tissue blocks. Declaration order is the hotbar
/// order (keys 1-5, inventory slots 0-4).
#[derive(Copy, Clone, Eq, PartialEq, Hash, Default, Debug)]
#[repr(u8)]
pub enum BlockType {
    #[default]
    Neuron = 0,
    Synapse = 1,
    Glial = 2,
    Blood = 3,
    Tissue = 4,
}

/// Static display metadata for a block type.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BlockTypeInfo {
    /// Base colour as 0xRRGGBB
    pub color: u32,
    /// Emissive glow as 0xRRGGBB
    pub emissive: u32,
    pub name: &'static str,
}

const BLOCK_INFO: [BlockTypeInfo; BlockType::COUNT] = [
    BlockTypeInfo { color: 0xff6b6b, emissive: 0x331111, name: "Neuron" },
    BlockTypeInfo { color: 0x4ecdc4, emissive: 0x112222, name: "Synapse" },
    BlockTypeInfo { color: 0x45b7d1, emissive: 0x111133, name: "Glial Cell" },
    BlockTypeInfo { color: 0xf39c12, emissive: 0x332211, name: "Blood Vessel" },
    BlockTypeInfo { color: 0x9b59b6, emissive: 0x221133, name: "Brain Tissue" },
];

impl BlockType {
    pub const COUNT: usize = 5;

    pub const ALL: [BlockType; BlockType::COUNT] = [
        BlockType::Neuron,
        BlockType::Synapse,
        BlockType::Glial,
        BlockType::Blood,
        BlockType::Tissue,
    ];

    pub fn info(self) -> &'static BlockTypeInfo {
        &BLOCK_INFO[self as usize]
    }

    pub fn display_name(self) -> &'static str {
        self.info().name
    }

    /// Position of this type in the hotbar.
    pub fn slot(self) -> usize {
        self as usize
    }

    /// Block type for a hotbar slot, `None` past the last slot.
    pub fn from_slot(slot: usize) -> Option<BlockType> {
        Self::ALL.get(slot).copied()
    }

    pub fn base_color(self) -> Color {
        hex_to_color(self.info().color)
    }

    pub fn emissive(self) -> LinearRgba {
        hex_to_color(self.info().emissive).to_linear()
    }
}

impl fmt::Display for BlockType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

pub fn hex_to_color(hex: u32) -> Color {
    Color::srgb_u8(
        ((hex >> 16) & 0xff) as u8,
        ((hex >> 8) & 0xff) as u8,
        (hex & 0xff) as u8,
    )
}
