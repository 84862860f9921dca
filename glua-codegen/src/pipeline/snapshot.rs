//! Phase snapshots for `--visualize`.

use std::{
    fs,
    path::{Path, PathBuf},
    sync::{Mutex, PoisonError},
};

use eyre::{Result, WrapErr};
use serde::Serialize;

use super::{CompilationContext, Diagnostic, Plugin};
use crate::synthesis::{GeneratedType, QueryBinding};

/// Pipeline state captured after a phase.
#[derive(Debug, Clone, Serialize)]
pub struct PhaseSnapshot {
    pub phase: String,
    pub models: Vec<GeneratedType>,
    pub bindings: Vec<QueryBinding>,
    pub diagnostics: Vec<Diagnostic>,
}

/// Captures a [`PhaseSnapshot`] after every phase.
///
/// With an output directory configured, each snapshot is also written
/// immediately as `<phase>.json`.
#[derive(Default)]
pub struct SnapshotPlugin {
    snapshots: Mutex<Vec<PhaseSnapshot>>,
    output_dir: Option<PathBuf>,
}

impl SnapshotPlugin {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_output_dir(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            snapshots: Mutex::default(),
            output_dir: Some(output_dir.into()),
        }
    }

    /// All snapshots collected so far.
    pub fn snapshots(&self) -> Vec<PhaseSnapshot> {
        self.snapshots
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Write every collected snapshot to `dir`.
    pub fn write_to_dir(&self, dir: impl AsRef<Path>) -> Result<()> {
        for snapshot in self.snapshots() {
            write_snapshot(dir.as_ref(), &snapshot)?;
        }
        Ok(())
    }
}

fn write_snapshot(dir: &Path, snapshot: &PhaseSnapshot) -> Result<()> {
    fs::create_dir_all(dir)
        .wrap_err_with(|| format!("failed to create {}", dir.display()))?;
    let json = serde_json::to_string_pretty(snapshot)?;
    fs::write(dir.join(format!("{}.json", snapshot.phase)), json)?;
    Ok(())
}

impl Plugin for SnapshotPlugin {
    fn name(&self) -> &'static str {
        "snapshot"
    }

    fn on_after_phase(&self, phase: &str, ctx: &mut CompilationContext) -> Result<()> {
        let snapshot = PhaseSnapshot {
            phase: phase.to_string(),
            models: ctx.models.clone(),
            bindings: ctx.bindings.clone(),
            diagnostics: ctx.diagnostics.clone(),
        };

        if let Some(dir) = &self.output_dir {
            write_snapshot(dir, &snapshot)?;
        }

        self.snapshots
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(snapshot);
        Ok(())
    }
}
