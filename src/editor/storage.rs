//! The durable storage slot for the saved routine.

use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

use crate::config::Config;
use crate::routine::Routine;

/// One named slot holding the serialized routine. No versioning and no
/// migration; a save fully replaces the prior value.
#[derive(Debug, Clone)]
pub struct RoutineStore {
    path: PathBuf,
}

impl RoutineStore {
    pub fn new(config: &Config) -> Self {
        Self {
            path: config.routine_path(),
        }
    }

    /// A store at an explicit path (tests and tools).
    pub fn at_path(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    /// Read the slot. `Ok(None)` when nothing has been saved yet; an error
    /// when the slot exists but cannot be read or parsed.
    pub fn load(&self) -> Result<Option<Routine>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let contents =
            fs::read_to_string(&self.path).context("Failed to read saved routine")?;
        let routine: Routine =
            serde_json::from_str(&contents).context("Failed to parse saved routine")?;

        Ok(Some(routine))
    }

    /// Replace the slot with the given routine.
    pub fn save(&self, routine: &Routine) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).context("Failed to create state directory")?;
        }

        let contents = serde_json::to_string_pretty(routine)?;
        fs::write(&self.path, contents).context("Failed to write saved routine")?;

        Ok(())
    }
}
