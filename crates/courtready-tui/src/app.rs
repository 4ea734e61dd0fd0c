//! Application state management for the court readiness dashboard.
//!
//! `App` wraps the core `Session` with the UI-only state: which overview
//! column has focus, list cursors, overlays and the status line. Every key
//! press mutates through the session and the next frame re-reads it.

use tracing::{debug, warn};

use courtready_core::{Category, Court, CourtKind, Session};

// ============================================================================
// UI State Types
// ============================================================================

/// Overview column, one per court kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    Production,
    Streaming,
}

impl Column {
    pub fn title(&self) -> &'static str {
        match self {
            Column::Production => "Production Courts",
            Column::Streaming => "Streaming Courts",
        }
    }

    pub fn kind(&self) -> CourtKind {
        match self {
            Column::Production => CourtKind::FullProduction,
            Column::Streaming => CourtKind::Streaming,
        }
    }

    pub fn other(&self) -> Self {
        match self {
            Column::Production => Column::Streaming,
            Column::Streaming => Column::Production,
        }
    }
}

/// Overall application state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    Normal,
    ShowingHelp,
    ConfirmingQuit,
    Quitting,
}

/// One selectable row of the court detail view
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailEntry {
    pub category: Category,
    pub item: String,
}

// ============================================================================
// Main Application Struct
// ============================================================================

pub struct App {
    pub session: Session,

    // UI State
    pub state: AppState,
    pub column: Column,
    pub production_selection: usize,
    pub streaming_selection: usize,
    pub item_selection: usize,

    /// Where the courts were imported from, for the status bar
    pub source_label: String,
    pub status_message: Option<String>,
}

impl App {
    pub fn new(session: Session, source_label: String) -> Self {
        // Start on whichever column has courts
        let has_production = session
            .list_courts()
            .iter()
            .any(|(_, kind)| *kind == CourtKind::FullProduction);
        let column = if has_production || session.store().is_empty() {
            Column::Production
        } else {
            Column::Streaming
        };

        Self {
            session,
            state: AppState::Normal,
            column,
            production_selection: 0,
            streaming_selection: 0,
            item_selection: 0,
            source_label,
            status_message: None,
        }
    }

    // =========================================================================
    // Overview
    // =========================================================================

    /// Courts shown in an overview column, in import order
    pub fn courts_in(&self, column: Column) -> Vec<&Court> {
        self.session
            .store()
            .courts()
            .iter()
            .filter(|c| c.kind == column.kind())
            .collect()
    }

    pub fn column_selection(&self, column: Column) -> usize {
        match column {
            Column::Production => self.production_selection,
            Column::Streaming => self.streaming_selection,
        }
    }

    fn column_selection_mut(&mut self) -> &mut usize {
        match self.column {
            Column::Production => &mut self.production_selection,
            Column::Streaming => &mut self.streaming_selection,
        }
    }

    /// Switch overview focus, skipping an empty column
    pub fn switch_column(&mut self) {
        let other = self.column.other();
        if !self.courts_in(other).is_empty() {
            self.column = other;
        }
    }

    pub fn highlighted_court(&self) -> Option<&Court> {
        self.courts_in(self.column)
            .get(self.column_selection(self.column))
            .copied()
    }

    /// Drill into the highlighted court
    pub fn open_highlighted(&mut self) {
        let Some(name) = self.highlighted_court().map(|c| c.name.clone()) else {
            return;
        };
        self.session.select(Some(&name));
        self.item_selection = 0;
        self.status_message = None;
    }

    // =========================================================================
    // Court detail
    // =========================================================================

    /// Court currently open, if any. Read-only: a dangling selection is
    /// cleared by `sync_selection` before each frame.
    pub fn current_court(&self) -> Option<&Court> {
        self.session
            .selection()
            .and_then(|name| self.session.store().get(name))
    }

    /// Drop a selection pointing at a court that no longer exists
    pub fn sync_selection(&mut self) {
        let had_selection = self.session.selection().is_some();
        if self.session.selected().is_none() && had_selection {
            warn!("Selected court disappeared, back to overview");
            self.status_message = Some("Court no longer available".to_string());
        }
    }

    pub fn back(&mut self) {
        self.session.back();
        self.item_selection = 0;
    }

    /// Items of the open court grouped by category panel, in panel order.
    /// An item in several categories shows up once per panel.
    pub fn detail_entries(&self) -> Vec<DetailEntry> {
        let Some(court) = self.current_court() else {
            return Vec::new();
        };
        Category::ALL
            .iter()
            .flat_map(|&category| {
                court
                    .category_members(category)
                    .into_iter()
                    .map(move |item| DetailEntry {
                        category,
                        item: item.to_string(),
                    })
            })
            .collect()
    }

    /// Advance the stage of the highlighted item
    pub fn cycle_selected_item(&mut self) {
        let Some(court) = self.session.selection().map(str::to_string) else {
            return;
        };
        let Some(entry) = self.detail_entries().into_iter().nth(self.item_selection) else {
            return;
        };

        match self.session.cycle_stage(&court, &entry.item) {
            Ok(stage) => {
                debug!(court = %court, item = %entry.item, ?stage, "Item cycled");
                self.status_message = Some(format!(
                    "{}: {} ({}% ready)",
                    entry.item,
                    stage.label(entry.category),
                    self.session.progress(&court)
                ));
            }
            Err(e) => {
                warn!(error = %e, "Cycle failed");
                self.status_message = Some(e.to_string());
            }
        }
    }

    // =========================================================================
    // Navigation
    // =========================================================================

    fn list_len(&self) -> usize {
        if self.current_court().is_some() {
            self.detail_entries().len()
        } else {
            self.courts_in(self.column).len()
        }
    }

    fn cursor_mut(&mut self) -> &mut usize {
        if self.current_court().is_some() {
            &mut self.item_selection
        } else {
            self.column_selection_mut()
        }
    }

    pub fn select_next(&mut self) {
        let len = self.list_len();
        let cursor = self.cursor_mut();
        if *cursor + 1 < len {
            *cursor += 1;
        }
    }

    pub fn select_prev(&mut self) {
        let cursor = self.cursor_mut();
        *cursor = cursor.saturating_sub(1);
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use courtready_core::import::{seed_store, KitRow};
    use courtready_core::ItemStage;

    fn app() -> App {
        let rows = vec![
            KitRow::new("Stadium", "Full Production"),
            KitRow::new("Court 3", "Streaming"),
            KitRow::new("Grandstand", "full"),
            KitRow::new("Court 7", "Streaming"),
        ];
        let (store, _) = seed_store(rows, None);
        App::new(Session::new(store), "test".to_string())
    }

    // -------------------------------------------------------------------------
    // Overview
    // -------------------------------------------------------------------------

    #[test]
    fn test_courts_split_by_kind() {
        let app = app();
        let production: Vec<&str> = app
            .courts_in(Column::Production)
            .iter()
            .map(|c| c.name.as_str())
            .collect();
        let streaming: Vec<&str> = app
            .courts_in(Column::Streaming)
            .iter()
            .map(|c| c.name.as_str())
            .collect();
        assert_eq!(production, vec!["Stadium", "Grandstand"]);
        assert_eq!(streaming, vec!["Court 3", "Court 7"]);
    }

    #[test]
    fn test_overview_navigation_clamps() {
        let mut app = app();
        app.select_prev();
        assert_eq!(app.production_selection, 0);
        app.select_next();
        app.select_next();
        assert_eq!(app.production_selection, 1);

        app.switch_column();
        assert_eq!(app.column, Column::Streaming);
        app.select_next();
        assert_eq!(app.highlighted_court().map(|c| c.name.as_str()), Some("Court 7"));
        // Production cursor kept its place
        assert_eq!(app.column_selection(Column::Production), 1);
    }

    #[test]
    fn test_streaming_only_starts_on_streaming() {
        let (store, _) = seed_store(vec![KitRow::new("Court 1", "Streaming")], None);
        let mut app = App::new(Session::new(store), "test".to_string());
        assert_eq!(app.column, Column::Streaming);
        app.switch_column();
        assert_eq!(app.column, Column::Streaming);
    }

    // -------------------------------------------------------------------------
    // Court detail
    // -------------------------------------------------------------------------

    #[test]
    fn test_open_and_back() {
        let mut app = app();
        app.switch_column();
        app.open_highlighted();
        assert_eq!(app.current_court().map(|c| c.name.as_str()), Some("Court 3"));

        app.back();
        assert!(app.current_court().is_none());
        assert_eq!(app.session.selection(), None);
    }

    #[test]
    fn test_detail_entries_in_panel_order() {
        let mut app = app();
        app.switch_column();
        app.open_highlighted();

        let entries: Vec<(Category, String)> = app
            .detail_entries()
            .into_iter()
            .map(|e| (e.category, e.item))
            .collect();
        assert_eq!(
            entries,
            vec![
                (Category::Video, "Camera 0".to_string()),
                (Category::Audio, "Near Mic L".to_string()),
                (Category::Audio, "Near Mic R".to_string()),
                (Category::Audio, "Umpire Mic".to_string()),
                (Category::Power, "Main Power".to_string()),
            ]
        );
    }

    #[test]
    fn test_cycle_selected_item() {
        let mut app = app();
        app.open_highlighted();
        // Stadium: 5 cameras, then 4 data lines
        for _ in 0..5 {
            app.select_next();
        }
        app.cycle_selected_item();

        assert_eq!(
            app.session.stage_of("Stadium", "Cam 1 Data"),
            Ok(ItemStage::Staged)
        );
        assert_eq!(
            app.status_message.as_deref(),
            Some("Cam 1 Data: RIGGED (2% ready)")
        );
    }

    #[test]
    fn test_detail_navigation_clamps_to_items() {
        let mut app = app();
        app.switch_column();
        app.open_highlighted();
        for _ in 0..20 {
            app.select_next();
        }
        assert_eq!(app.item_selection, 4);
        // Overview cursor untouched
        assert_eq!(app.streaming_selection, 0);
    }

    #[test]
    fn test_sync_selection_heals_dangling() {
        let mut app = app();
        app.session.select(Some("Court 99"));
        assert!(app.current_court().is_none());

        app.sync_selection();
        assert_eq!(app.session.selection(), None);
        assert_eq!(app.status_message.as_deref(), Some("Court no longer available"));
    }
}
