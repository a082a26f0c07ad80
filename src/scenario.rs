//! Named local memory images consumed by the simulator's unit tests.

use std::path::PathBuf;

use rand::Rng;
use serde::Deserialize;

use crate::error::Result;
use crate::pack::pack;
use crate::select::select;

/// Parameters of one randomly generated mask.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MaskPreset {
    pub valid_cnt: usize,
    pub total_cnt: usize,
    #[serde(default)]
    pub last_valid: bool,
}

impl MaskPreset {
    pub const fn new(valid_cnt: usize, total_cnt: usize, last_valid: bool) -> Self {
        Self {
            valid_cnt,
            total_cnt,
            last_valid,
        }
    }

    /// Selects and packs one mask.
    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Vec<u8>> {
        let active = select(self.valid_cnt, self.total_cnt, self.last_valid, rng)?;
        pack(&active, self.total_cnt)
    }
}

/// Masks laid out back to back in the transfer unit test's local memory.
pub const TRANSFER_MASK_PRESETS: [MaskPreset; 4] = [
    MaskPreset::new(64, 128, true),
    MaskPreset::new(96, 192, false),
    MaskPreset::new(71, 160, true),
    MaskPreset::new(115, 224, false),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum Scenario {
    PimSet,
    PimOutput,
    PimTransfer,
}

impl Scenario {
    pub const ALL: [Scenario; 3] = [Self::PimSet, Self::PimOutput, Self::PimTransfer];

    pub fn name(self) -> &'static str {
        match self {
            Self::PimSet => "pim_set",
            Self::PimOutput => "pim_output",
            Self::PimTransfer => "pim_transfer",
        }
    }

    pub fn bytes(self) -> &'static [u8] {
        match self {
            Self::PimSet => &PIM_SET_LOCAL_MEMORY,
            Self::PimOutput => &PIM_OUTPUT_LOCAL_MEMORY,
            Self::PimTransfer => &PIM_TRANSFER_LOCAL_MEMORY,
        }
    }

    /// Byte length of each mask in the image, in order.
    pub fn mask_lengths(self) -> &'static [usize] {
        match self {
            Self::PimSet => &[32; 5],
            Self::PimOutput => &[32; 2],
            Self::PimTransfer => &[16, 24, 20, 28],
        }
    }

    /// Location of the image below the simulator's `test_data` directory.
    pub fn relative_path(self) -> PathBuf {
        [self.name(), "local_memory_image.bin"].iter().collect()
    }
}

const PIM_SET_LOCAL_MEMORY: [u8; 160] = [
    // mask 1: 256 active
    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
    // mask 2: 135 active
    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
    0x7f, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    // mask 3: 192 active
    0x55, 0x55, 0x55, 0x55, 0xff, 0xff, 0xff, 0xff, 0x55, 0x55, 0x55, 0x55, 0xff, 0xff, 0xff, 0xff,
    0x55, 0x55, 0x55, 0x55, 0xff, 0xff, 0xff, 0xff, 0x55, 0x55, 0x55, 0x55, 0xff, 0xff, 0xff, 0xff,
    // mask 4: 120 active
    0x55, 0x55, 0xff, 0xff, 0xff, 0xff, 0x55, 0x55, 0xff, 0xff, 0xff, 0xff, 0x55, 0x55, 0xff, 0xff,
    0xff, 0xff, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    // mask 5: 107 active
    0x2c, 0x19, 0x96, 0x56, 0xfd, 0x9a, 0x20, 0x42, 0xfd, 0xcc, 0xeb, 0x0b, 0x00, 0x00, 0x96, 0xe8,
    0x39, 0xca, 0x00, 0x00, 0x22, 0x7b, 0xbf, 0x25, 0x00, 0x00, 0x96, 0xb6, 0x25, 0xf2, 0x49, 0x7a,
];

const PIM_OUTPUT_LOCAL_MEMORY: [u8; 64] = [
    // mask 1: 48 active
    0x08, 0x08, 0x12, 0x28, 0x80, 0x20, 0x94, 0x04, 0x08, 0x08, 0x12, 0x28, 0x80, 0x20, 0x94, 0x04,
    0x08, 0x08, 0x12, 0x28, 0x80, 0x20, 0x94, 0x04, 0x08, 0x08, 0x12, 0x28, 0x80, 0x20, 0x94, 0x04,
    // mask 2: 24 active
    0x00, 0x49, 0x00, 0x01, 0x08, 0x20, 0x00, 0x00, 0x00, 0x49, 0x00, 0x01, 0x08, 0x20, 0x00, 0x00,
    0x00, 0x49, 0x00, 0x01, 0x08, 0x20, 0x00, 0x00, 0x00, 0x49, 0x00, 0x01, 0x08, 0x20, 0x00, 0x00,
];

const PIM_TRANSFER_LOCAL_MEMORY: [u8; 88] = [
    // mask 1: 16 bytes
    0x2c, 0x3a, 0xf0, 0xec, 0xef, 0x11, 0xf8, 0x06, 0x13, 0x28, 0x43, 0x90, 0x7f, 0x72, 0x2d, 0xfb,
    // mask 2: 24 bytes
    0x4c, 0xfb, 0xf3, 0x62, 0x4e, 0x11, 0xcd, 0x86, 0x45, 0x5e, 0x28, 0x61, 0xe4, 0xd3, 0x67, 0xd8,
    0xc5, 0x17, 0xf8, 0x83, 0xde, 0x56, 0x0b, 0x54,
    // mask 3: 20 bytes
    0xf1, 0x74, 0xeb, 0x82, 0x93, 0x11, 0xc4, 0x8d, 0x5e, 0x0e, 0x40, 0xb7, 0x28, 0x70, 0x82, 0x57,
    0xf6, 0xe2, 0x10, 0x85,
    // mask 4: 28 bytes
    0xf8, 0x58, 0x75, 0xe2, 0xb6, 0x6f, 0x86, 0x9a, 0x5c, 0x5f, 0xad, 0x46, 0xc4, 0x10, 0x22, 0xa8,
    0x73, 0x07, 0x3d, 0x8c, 0x47, 0xbe, 0x8f, 0x7c, 0xb9, 0xe3, 0xdd, 0x20,
];
