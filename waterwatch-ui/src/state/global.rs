//! Global Application State
//!
//! Read-only data shared by every view. The active view is not in here:
//! it belongs to the app shell and is passed down explicitly.

use leptos::*;
use std::rc::Rc;

use waterwatch::{Config, Dataset, WaterBody};

/// Data provided to all components
#[derive(Clone)]
pub struct GlobalState {
    /// Water bodies in dataset order
    pub dataset: &'static Dataset,
    /// Display constants
    pub config: Rc<Config>,
}

impl GlobalState {
    pub fn new(dataset: &'static Dataset, config: Config) -> Self {
        Self {
            dataset,
            config: Rc::new(config),
        }
    }

    pub fn bodies(&self) -> &'static [WaterBody] {
        self.dataset.bodies()
    }

    /// Display names in dataset order, used as chart categories
    pub fn names(&self) -> Vec<String> {
        self.bodies().iter().map(|b| b.name.clone()).collect()
    }
}

/// Provide global state to the component tree
pub fn provide_global_state() {
    provide_context(GlobalState::new(Dataset::seed(), Config::default()));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_reads_seed_dataset() {
        let state = GlobalState::new(Dataset::seed(), Config::default());
        assert_eq!(state.bodies().len(), 4);
        assert_eq!(
            state.names(),
            vec!["Yamuna River", "Bhalswa Lake", "Naini Lake", "Sanjay Lake"]
        );
        assert_eq!(state.config.map.zoom, 11);
    }
}
