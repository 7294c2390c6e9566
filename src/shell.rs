//! View selection
//!
//! The dashboard shows exactly one of three views. [`Shell`] owns that
//! choice; components receive it as data and request changes through a
//! callback rather than touching shared state.

use serde::{Deserialize, Serialize};

/// One of the three top-level views
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum View {
    /// Summary cards and bar chart
    #[default]
    Dashboard,
    /// Risk assessment table
    Reports,
    /// Risk map
    Map,
}

impl View {
    /// Navigation order
    pub const ALL: [View; 3] = [View::Dashboard, View::Reports, View::Map];

    /// Navigation button label
    pub fn label(&self) -> &'static str {
        match self {
            View::Dashboard => "Dashboard",
            View::Reports => "Reports",
            View::Map => "Map",
        }
    }
}

impl std::fmt::Display for View {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            View::Dashboard => write!(f, "dashboard"),
            View::Reports => write!(f, "reports"),
            View::Map => write!(f, "map"),
        }
    }
}

/// Active-view state machine
///
/// Every state is reachable from every other; transitions only happen
/// through [`Shell::select_view`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Shell {
    active: View,
}

impl Shell {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> View {
        self.active
    }

    /// Switch to `view`. Returns true if the active view changed.
    pub fn select_view(&mut self, view: View) -> bool {
        let changed = self.active != view;
        if changed {
            tracing::debug!(from = %self.active, to = %view, "Switching view");
        }
        self.active = view;
        changed
    }

    pub fn is_visible(&self, view: View) -> bool {
        self.active == view
    }

    /// Views that are currently rendered
    pub fn visible(&self) -> impl Iterator<Item = View> + '_ {
        View::ALL.into_iter().filter(move |v| self.is_visible(*v))
    }
}
