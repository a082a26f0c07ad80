//! Test fixture generation for the PIM simulator.
//!
//! The core picks sparse bitmasks with an exact number of active lanes
//! ([`select`]), packs them least-significant-bit first into byte images
//! ([`pack`]) and writes or prints the result ([`emit`]).
//!
//! ```
//! use pim_fixtures::{pack, rng, select, to_hex_list};
//!
//! let mut rng = rng::seeded(42);
//! let active = select(64, 128, true, &mut rng)?;
//! let bytes = pack(&active, 128)?;
//! assert_eq!(bytes.len(), 16);
//! assert_eq!(bytes[15] & 0x80, 0x80);
//! println!("{}", to_hex_list(&bytes));
//! # Ok::<(), pim_fixtures::FixtureError>(())
//! ```

pub mod bit_set;
pub mod cli;
pub mod emit;
pub mod error;
pub mod layer_config;
pub mod pack;
pub mod rng;
pub mod scenario;
pub mod select;
pub mod task;

pub use emit::{parse_hex_list, to_hex_list, write_fixture};
pub use error::FixtureError;
pub use pack::{pack, unpack};
pub use scenario::{MaskPreset, Scenario, TRANSFER_MASK_PRESETS};
pub use select::{ActiveSet, RandomByteMask, random_byte_mask, select};
