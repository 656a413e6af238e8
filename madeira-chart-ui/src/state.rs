//! UI state snapshot shared by every rule.
//!
//! The browser owns the state and sends the whole snapshot with each event,
//! so the server never holds per-client data.

use madeira_sales::SalesTable;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// CSS `display` value for a chart container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Display {
    Block,
    None,
}

impl Display {
    pub fn visible_if(visible: bool) -> Self {
        if visible {
            Display::Block
        } else {
            Display::None
        }
    }
}

/// A click on the bar chart: the category label of the clicked bar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClickData {
    pub presentation: String,
}

impl ClickData {
    pub fn new(presentation: impl Into<String>) -> Self {
        Self {
            presentation: presentation.into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardState {
    /// Position of the selected species in [`SalesTable::species`].
    #[serde(default)]
    pub species: Option<usize>,
    /// Last bar clicked since the species last changed.
    #[serde(default)]
    pub bar_click: Option<ClickData>,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DashboardError {
    #[error("species index {index} out of range ({available} species loaded)")]
    UnknownSpecies { index: usize, available: usize },

    #[error("callback graph has a cycle through {0}")]
    CallbackCycle(String),
}

impl DashboardState {
    pub fn with_species(index: usize) -> Self {
        Self {
            species: Some(index),
            bar_click: None,
        }
    }

    /// The selected species' name, if one is selected and it exists.
    pub fn species_name<'t>(&self, table: &'t SalesTable) -> Option<&'t str> {
        self.species.and_then(|idx| table.species_name(idx))
    }

    /// Reject snapshots that point outside the loaded table.
    pub fn validate(&self, table: &SalesTable) -> Result<(), DashboardError> {
        match self.species {
            Some(index) if index >= table.species().len() => Err(DashboardError::UnknownSpecies {
                index,
                available: table.species().len(),
            }),
            _ => Ok(()),
        }
    }
}
