//! Persistence of the single [TrackerState](crate::tracker::state::TrackerState) record.
//!  - [file_store::FileStateStore] keeps it as a JSON document in the home directory.
//!  - [memory_store::MemoryStateStore] keeps it in memory, for tests and embedding.

pub mod file_store;
pub mod memory_store;

use std::ops::Deref;

use anyhow::Result;

use crate::tracker::state::TrackerState;

/// Interface for abstracting storage of the tracker state. There is no locking, the last write
/// wins.
#[cfg_attr(test, mockall::automock)]
pub trait StateStore {
    /// Returns the stored state, or the default state if nothing was stored yet.
    fn load(&self) -> Result<TrackerState>;

    /// Replaces the stored state as a whole.
    fn save(&self, state: &TrackerState) -> Result<()>;
}

impl<T: Deref> StateStore for T
where
    T::Target: StateStore,
{
    fn load(&self) -> Result<TrackerState> {
        self.deref().load()
    }

    fn save(&self, state: &TrackerState) -> Result<()> {
        self.deref().save(state)
    }
}
