//! Seeding a court store from imported setup data.
//!
//! The importer needs two things from a data source: the kit rows naming
//! each court and its production type, and optionally a feed status lookup
//! telling whether a camera is already verified. `workbook` provides both
//! from an `.xlsx` file; anything else can implement `FeedStatus` directly.

pub mod workbook;

use std::collections::HashMap;

use tracing::{debug, info, warn};

use crate::catalog;
use crate::error::StoreError;
use crate::models::category::is_camera_item;
use crate::models::{CourtKind, ItemStage};
use crate::store::CourtStore;

pub use workbook::{FeedSheet, Grid, SheetNames, WorkbookData};

/// One row of the kit table: a court name and its raw production type.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct KitRow {
    pub court_name: String,
    pub kind_raw: String,
}

impl KitRow {
    pub fn new(court_name: impl Into<String>, kind_raw: impl Into<String>) -> Self {
        Self {
            court_name: court_name.into(),
            kind_raw: kind_raw.into(),
        }
    }
}

/// Source of setup already completed before the session started.
pub trait FeedStatus {
    fn is_verified(&self, court: &str, item: &str) -> bool;
}

/// Counts from a store seeding pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportSummary {
    pub courts_created: usize,
    pub blank_rows_skipped: usize,
    /// Names seen again after their first row; the first row wins
    pub duplicates: Vec<String>,
    pub items_preverified: usize,
}

/// Build a store from kit rows.
///
/// Blank court names are skipped. Camera items are marked verified when
/// `feeds` reports them so. A repeated court name keeps its first row.
pub fn seed_store<I>(rows: I, feeds: Option<&dyn FeedStatus>) -> (CourtStore, ImportSummary)
where
    I: IntoIterator<Item = KitRow>,
{
    let mut store = CourtStore::new();
    let mut summary = ImportSummary::default();

    for row in rows {
        let name = row.court_name.trim();
        if name.is_empty() {
            summary.blank_rows_skipped += 1;
            continue;
        }

        let kind = CourtKind::classify(&row.kind_raw);
        let initial = initial_stages(name, kind, feeds);
        let preverified = initial.len();

        match store.create_court(name, kind, &initial) {
            Ok(_) => {
                summary.courts_created += 1;
                summary.items_preverified += preverified;
            }
            Err(StoreError::DuplicateCourt(dup)) => {
                warn!(court = %dup, "Duplicate court in import data, keeping first row");
                summary.duplicates.push(dup);
            }
            Err(e) => {
                // create_court only rejects duplicates
                warn!(error = %e, "Skipping court row");
            }
        }
    }

    info!(
        courts = summary.courts_created,
        blank = summary.blank_rows_skipped,
        duplicates = summary.duplicates.len(),
        preverified = summary.items_preverified,
        "Court store seeded"
    );
    (store, summary)
}

fn initial_stages(
    court: &str,
    kind: CourtKind,
    feeds: Option<&dyn FeedStatus>,
) -> HashMap<String, ItemStage> {
    let Some(feeds) = feeds else {
        return HashMap::new();
    };

    catalog::items_for(kind)
        .iter()
        .filter(|item| is_camera_item(item) && feeds.is_verified(court, item))
        .map(|item| {
            debug!(court = %court, item = %item, "Pre-verified from feeds");
            (item.to_string(), ItemStage::Verified)
        })
        .collect()
}
