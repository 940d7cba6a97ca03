//! Status filter selected by the tab row.

use std::fmt;

use crate::error::TodoError;

/// Which tasks are shown in the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Filter {
    #[default]
    All,
    Active,
    Completed,
}

impl Filter {
    /// Tabs in display order. A tab's index in this array is its tab index.
    pub const TABS: [Filter; 3] = [Filter::All, Filter::Active, Filter::Completed];

    /// Tab label.
    pub fn label(self) -> &'static str {
        match self {
            Filter::All => "All",
            Filter::Active => "Active",
            Filter::Completed => "Completed",
        }
    }

    pub fn tab_index(self) -> usize {
        match self {
            Filter::All => 0,
            Filter::Active => 1,
            Filter::Completed => 2,
        }
    }

    /// Map a selected tab index back to its filter.
    pub fn from_tab_index(index: usize) -> Result<Self, TodoError> {
        Self::TABS
            .get(index)
            .copied()
            .ok_or_else(|| TodoError::InvalidFilter(format!("tab index {index}")))
    }

    /// Whether a task with the given completion flag passes this filter.
    pub fn admits(self, completed: bool) -> bool {
        match self {
            Filter::All => true,
            Filter::Active => !completed,
            Filter::Completed => completed,
        }
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
