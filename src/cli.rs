//! Command line surface of the `pim-fixtures` binary.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};

use crate::emit::{parse_hex_list, to_hex_list, write_fixture};
use crate::layer_config::layer_config;
use crate::pack::unpack;
use crate::rng::seeded_or_entropy;
use crate::scenario::{MaskPreset, Scenario, TRANSFER_MASK_PRESETS};
use crate::select::random_byte_mask;
use crate::task::{Manifest, run_manifest};

/// PIM simulator test fixture generator
#[derive(Parser, Debug)]
#[command(name = "pim-fixtures")]
#[command(author, version, about = "Generate binary test fixtures for the PIM simulator")]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate one sparse bitmask
    Mask(MaskArgs),

    /// Print the four transfer unit test masks
    TransferMasks(SeedArgs),

    /// Print a 32-byte random mask and its active bit count
    RandomMask(SeedArgs),

    /// Emit one of the fixed local memory images
    Scenario(ScenarioArgs),

    /// Run every task listed in a JSON manifest
    Run(RunArgs),

    /// Decode a hex list back into active bit positions
    Inspect(InspectArgs),

    /// Print the layer_config fragment for a network data directory
    LayerConfig(LayerConfigArgs),
}

#[derive(Args, Debug)]
pub struct SeedArgs {
    /// Seed for reproducible output (OS entropy when omitted)
    #[arg(short, long)]
    pub seed: Option<u64>,
}

#[derive(Args, Debug)]
pub struct MaskArgs {
    /// Number of active bits
    #[arg(short, long)]
    pub valid_cnt: usize,

    /// Length of the bit field
    #[arg(short, long)]
    pub total_cnt: usize,

    /// Force the final bit to be active
    #[arg(short, long)]
    pub last_valid: bool,

    #[command(flatten)]
    pub seed: SeedArgs,

    /// Write the packed bytes here instead of printing them
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct ScenarioArgs {
    #[arg(value_enum)]
    pub scenario: Scenario,

    /// Write the image to this exact path
    #[arg(short, long, conflicts_with = "out_dir")]
    pub output: Option<PathBuf>,

    /// Write the image below this test data directory
    #[arg(short = 'd', long)]
    pub out_dir: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct RunArgs {
    /// Manifest file
    pub manifest: PathBuf,

    /// Directory that relative task outputs are resolved against
    #[arg(short = 'd', long, default_value = ".")]
    pub out_dir: PathBuf,

    /// Overrides the manifest seed
    #[arg(short, long)]
    pub seed: Option<u64>,
}

#[derive(Args, Debug)]
pub struct InspectArgs {
    /// Length of the bit field
    #[arg(short, long)]
    pub total_cnt: usize,

    /// Hex list such as "[0x81, 0x0]"
    pub hex: String,
}

#[derive(Args, Debug)]
pub struct LayerConfigArgs {
    /// Directory holding one subdirectory per layer
    pub data_dir: PathBuf,
}

pub fn execute(command: Commands) -> Result<()> {
    match command {
        Commands::Mask(args) => {
            let preset = MaskPreset::new(args.valid_cnt, args.total_cnt, args.last_valid);
            let mut rng = seeded_or_entropy(args.seed.seed)?;
            let bytes = preset
                .generate(&mut rng)
                .with_context(|| format!("Failed to generate mask {preset:?}"))?;
            emit(&bytes, args.output.as_deref())?;
        }
        Commands::TransferMasks(args) => {
            let mut rng = seeded_or_entropy(args.seed)?;
            for preset in TRANSFER_MASK_PRESETS {
                println!("{}", to_hex_list(&preset.generate(&mut rng)?));
            }
        }
        Commands::RandomMask(args) => {
            let mask = random_byte_mask(&mut seeded_or_entropy(args.seed)?);
            println!("{}", to_hex_list(&mask.bytes));
            println!("{}", mask.active_cnt);
        }
        Commands::Scenario(args) => {
            let output = match (args.output, args.out_dir) {
                (Some(path), _) => Some(path),
                (None, Some(dir)) => Some(dir.join(args.scenario.relative_path())),
                (None, None) => None,
            };
            emit(args.scenario.bytes(), output.as_deref())?;
        }
        Commands::Run(args) => {
            let manifest = Manifest::from_path(&args.manifest)?;
            let mut rng = seeded_or_entropy(args.seed.or(manifest.seed))?;
            let reports = run_manifest(&manifest, &args.out_dir, &mut rng)?;
            tracing::info!("completed {} tasks", reports.len());
        }
        Commands::Inspect(args) => {
            let bytes = parse_hex_list(&args.hex)?;
            let active = unpack(&bytes, args.total_cnt)?;
            let indices: Vec<usize> = active.iter().collect();
            println!("{indices:?}");
            println!("{}", active.len());
        }
        Commands::LayerConfig(args) => {
            println!("{}", layer_config(&args.data_dir)?);
        }
    }
    Ok(())
}

fn emit(bytes: &[u8], output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => write_fixture(path, bytes)?,
        None => println!("{}", to_hex_list(bytes)),
    }
    Ok(())
}
