use std::{
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use tracing::{debug, trace};

use crate::{tracker::state::TrackerState, utils::dir::home_dir};

use super::StateStore;

pub const STATE_FILE_NAME: &str = ".time_hedge_data.json";

/// The main realization of [StateStore]. Reads and overwrites the whole file on every call.
pub struct FileStateStore {
    path: PathBuf,
}

impl FileStateStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Store located at `$HOME/.time_hedge_data.json`.
    pub fn at_default_location() -> Result<Self> {
        Ok(Self::new(home_dir()?.join(STATE_FILE_NAME)))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl StateStore for FileStateStore {
    fn load(&self) -> Result<TrackerState> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("No state at {:?}, starting fresh", self.path);
                return Ok(TrackerState::default());
            }
            Err(e) => Err(e)?,
        };
        trace!("Loaded {content} from {:?}", self.path);
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse state file {:?}", self.path))
    }

    fn save(&self, state: &TrackerState) -> Result<()> {
        let content = serde_json::to_string(state)?;
        fs::write(&self.path, content)
            .with_context(|| format!("Failed to write state file {:?}", self.path))?;
        trace!("Saved {state:?} to {:?}", self.path);
        Ok(())
    }
}
