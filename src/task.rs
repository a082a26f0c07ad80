use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use rand::Rng;
use serde::Deserialize;

use crate::emit::{to_hex_list, write_fixture};
use crate::scenario::{MaskPreset, Scenario};
use crate::select::random_byte_mask;

/// A list of named generation tasks, usually read from JSON.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    /// Seed used when the caller does not supply one.
    #[serde(default)]
    pub seed: Option<u64>,
    pub tasks: Vec<Task>,
}

impl Manifest {
    pub fn from_path(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read manifest {}", path.display()))?;
        Self::from_json(&text).with_context(|| format!("Invalid manifest {}", path.display()))
    }

    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Task {
    pub name: String,
    /// Destination relative to the output directory. Printed as hex when
    /// absent.
    #[serde(default)]
    pub output: Option<PathBuf>,
    #[serde(flatten)]
    pub kind: TaskKind,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TaskKind {
    Mask(MaskPreset),
    /// Several masks concatenated into one image.
    Masks { masks: Vec<MaskPreset> },
    Scenario { scenario: Scenario },
    RandomByteMask,
}

impl TaskKind {
    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Vec<u8>> {
        Ok(match self {
            Self::Mask(preset) => preset.generate(rng)?,
            Self::Masks { masks } => {
                let mut bytes = Vec::new();
                for preset in masks {
                    bytes.extend(preset.generate(rng)?);
                }
                bytes
            }
            Self::Scenario { scenario } => scenario.bytes().to_vec(),
            Self::RandomByteMask => random_byte_mask(rng).bytes.to_vec(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskReport {
    pub name: String,
    pub bytes: Vec<u8>,
    /// File the bytes went to, `None` when printed.
    pub destination: Option<PathBuf>,
}

/// Runs one task, writing below `out_dir` or printing to stdout.
pub fn run_task<R: Rng + ?Sized>(
    task: &Task,
    out_dir: &Path,
    rng: &mut R,
) -> Result<TaskReport> {
    let bytes = task.kind.generate(rng)?;
    let destination = match &task.output {
        Some(output) => {
            let path = out_dir.join(output);
            write_fixture(&path, &bytes)?;
            Some(path)
        }
        None => {
            println!("{}", to_hex_list(&bytes));
            None
        }
    };
    tracing::debug!(task = %task.name, len = bytes.len(), "task finished");
    Ok(TaskReport {
        name: task.name.clone(),
        bytes,
        destination,
    })
}

/// Runs every task in order, stopping at the first failure.
pub fn run_manifest<R: Rng + ?Sized>(
    manifest: &Manifest,
    out_dir: &Path,
    rng: &mut R,
) -> Result<Vec<TaskReport>> {
    manifest
        .tasks
        .iter()
        .map(|task| {
            tracing::info!("running task {}", task.name);
            run_task(task, out_dir, rng).with_context(|| format!("Task {} failed", task.name))
        })
        .collect()
}
