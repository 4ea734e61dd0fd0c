//! Operator session: the court store plus the current selection.
//!
//! The session is an ordinary value owned by whichever front end drives it.
//! Mutations go through `&mut Session`; readers re-query afterwards.

use serde::Serialize;
use tracing::debug;

use crate::error::StoreError;
use crate::models::{Category, CourtKind, ItemStage};
use crate::store::CourtStore;
use crate::tasks::Task;

/// Snapshot of one court for reports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CourtReport {
    pub name: String,
    pub kind: CourtKind,
    pub progress: u8,
    pub tasks: Vec<String>,
}

#[derive(Debug, Default)]
pub struct Session {
    store: CourtStore,
    /// Selected court name, `None` for the overview
    selection: Option<String>,
}

impl Session {
    pub fn new(store: CourtStore) -> Self {
        Self {
            store,
            selection: None,
        }
    }

    pub fn store(&self) -> &CourtStore {
        &self.store
    }

    // =========================================================================
    // Selection
    // =========================================================================

    /// Select a court by name, or `None` to return to the overview.
    /// The name is not checked here; a dangling selection heals on read.
    pub fn select(&mut self, court: Option<&str>) {
        debug!(?court, "Selection changed");
        self.selection = court.map(str::to_string);
    }

    pub fn back(&mut self) {
        self.select(None);
    }

    /// Currently selected court, clearing the selection if that court is
    /// no longer in the store.
    pub fn selected(&mut self) -> Option<&str> {
        let missing = self
            .selection
            .as_deref()
            .is_some_and(|name| !self.store.contains(name));
        if missing {
            if let Some(name) = self.selection.take() {
                debug!(court = %name, "Selected court missing, returning to overview");
            }
        }
        self.selection.as_deref()
    }

    /// Raw selection without healing.
    pub fn selection(&self) -> Option<&str> {
        self.selection.as_deref()
    }

    // =========================================================================
    // Store passthrough
    // =========================================================================

    pub fn list_courts(&self) -> Vec<(&str, CourtKind)> {
        self.store.list_courts()
    }

    pub fn progress(&self, court: &str) -> u8 {
        self.store.progress(court)
    }

    pub fn next_tasks(&self, court: &str) -> Result<Vec<Task>, StoreError> {
        self.store.next_tasks(court)
    }

    pub fn stage_of(&self, court: &str, item: &str) -> Result<ItemStage, StoreError> {
        self.store.stage_of(court, item)
    }

    pub fn category_members(&self, court: &str, category: Category) -> Result<Vec<&str>, StoreError> {
        self.store.category_members(court, category)
    }

    pub fn cycle_stage(&mut self, court: &str, item: &str) -> Result<ItemStage, StoreError> {
        self.store.cycle_stage(court, item)
    }

    /// Progress and outstanding actions for every court, in creation order.
    pub fn report(&self) -> Vec<CourtReport> {
        self.store
            .courts()
            .iter()
            .map(|court| CourtReport {
                name: court.name.clone(),
                kind: court.kind,
                progress: court.progress(),
                tasks: crate::tasks::prioritize(court)
                    .iter()
                    .map(ToString::to_string)
                    .collect(),
            })
            .collect()
    }
}
