use std::cell::RefCell;

use anyhow::Result;

use crate::tracker::state::TrackerState;

use super::StateStore;

/// [StateStore] without any I/O. Starts either empty, which loads as the default state, or with a
/// given record.
#[derive(Debug, Default)]
pub struct MemoryStateStore {
    state: RefCell<Option<TrackerState>>,
    saves: RefCell<usize>,
}

impl MemoryStateStore {
    pub fn with_state(state: TrackerState) -> Self {
        Self {
            state: RefCell::new(Some(state)),
            saves: RefCell::new(0),
        }
    }

    /// Last saved state, `None` if nothing was ever stored.
    pub fn stored(&self) -> Option<TrackerState> {
        self.state.borrow().clone()
    }

    pub fn save_count(&self) -> usize {
        *self.saves.borrow()
    }
}

impl StateStore for MemoryStateStore {
    fn load(&self) -> Result<TrackerState> {
        Ok(self.stored().unwrap_or_default())
    }

    fn save(&self, state: &TrackerState) -> Result<()> {
        *self.state.borrow_mut() = Some(state.clone());
        *self.saves.borrow_mut() += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use anyhow::Result;

    use crate::{
        storage::StateStore,
        tracker::state::{Mode, TrackerState},
    };

    use super::MemoryStateStore;

    #[test]
    fn empty_store_loads_default() -> Result<()> {
        let store = MemoryStateStore::default();
        assert_eq!(store.load()?, TrackerState::default());
        assert_eq!(store.stored(), None);
        Ok(())
    }

    #[test]
    fn save_then_load() -> Result<()> {
        let store = MemoryStateStore::default();
        let state = TrackerState {
            balance: 3.25,
            mode: Mode::Work,
            start_time: 42.5,
        };
        store.save(&state)?;
        assert_eq!(store.load()?, state);
        assert_eq!(store.save_count(), 1);
        Ok(())
    }
}
