//! Reading kit rows and feed status out of an `.xlsx` setup workbook.
//!
//! Sheets are first flattened into a `Grid` of text cells at absolute
//! positions, so all lookups below work the same on real files and on
//! grids built in tests.

use std::path::Path;

use calamine::{open_workbook_auto, Data, Range, Reader};
use tracing::{debug, warn};

use super::{FeedStatus, KitRow};
use crate::error::ImportError;

/// Row holding the kit table column headers (second row of the sheet).
const KIT_HEADER_ROW: usize = 1;

const COURT_NAME_COLUMN: &str = "Court Name";
const PRODUCTION_TYPE_COLUMN: &str = "Production Type";

/// Row of the feeds sheet carrying one heading per court.
const FEED_HEADER_ROW: usize = 4;

/// Feed values that count as "already working".
const TRUTHY_VALUES: [&str; 5] = ["true", "yes", "on", "1", "ok"];

/// Which sheets to read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetNames {
    pub kit: String,
    /// Tried in order; the first present sheet is used
    pub feeds: Vec<String>,
}

impl Default for SheetNames {
    fn default() -> Self {
        Self {
            kit: "StadiumKit IDs".to_string(),
            feeds: vec!["Feeds ".to_string(), "Feeds".to_string()],
        }
    }
}

impl SheetNames {
    /// Pick the sheets to read from a workbook's sheet list: the kit sheet,
    /// which must exist, and the first feeds candidate present, if any.
    pub fn resolve(&self, available: &[String]) -> Result<(&str, Option<&str>), ImportError> {
        if !available.iter().any(|name| name == &self.kit) {
            return Err(ImportError::MissingSheet(self.kit.clone()));
        }
        let feeds = self
            .feeds
            .iter()
            .find(|name| available.contains(name))
            .map(String::as_str);
        Ok((self.kit.as_str(), feeds))
    }
}

// ============================================================================
// Grid
// ============================================================================

/// Rectangular sheet contents as text, indexed from A1.
/// Empty cells are `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Grid {
    rows: Vec<Vec<Option<String>>>,
}

impl Grid {
    pub fn from_range(range: &Range<Data>) -> Self {
        let Some((end_row, end_col)) = range.end() else {
            return Self::default();
        };

        let rows = (0..=end_row)
            .map(|r| {
                (0..=end_col)
                    .map(|c| range.get_value((r, c)).and_then(cell_text))
                    .collect()
            })
            .collect();
        Self { rows }
    }

    /// Build a grid from literal rows; empty strings become empty cells.
    pub fn from_rows<R, C>(rows: R) -> Self
    where
        R: IntoIterator<Item = C>,
        C: IntoIterator,
        C::Item: AsRef<str>,
    {
        let rows = rows
            .into_iter()
            .map(|row| {
                row.into_iter()
                    .map(|cell| {
                        let text = cell.as_ref();
                        (!text.is_empty()).then(|| text.to_string())
                    })
                    .collect()
            })
            .collect();
        Self { rows }
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    pub fn row(&self, row: usize) -> Option<&[Option<String>]> {
        self.rows.get(row).map(Vec::as_slice)
    }

    pub fn cell(&self, row: usize, col: usize) -> Option<&str> {
        self.rows.get(row)?.get(col)?.as_deref()
    }
}

/// Text form of a cell. Whole numbers drop their fraction and booleans
/// read `True`/`False`, matching how the sheets are filled in by hand.
fn cell_text(cell: &Data) -> Option<String> {
    match cell {
        Data::Empty => None,
        Data::String(s) if s.is_empty() => None,
        Data::String(s) => Some(s.clone()),
        Data::Float(f) if f.fract() == 0.0 && f.abs() < 1e15 => Some(format!("{}", *f as i64)),
        Data::Float(f) => Some(f.to_string()),
        Data::Int(i) => Some(i.to_string()),
        Data::Bool(true) => Some("True".to_string()),
        Data::Bool(false) => Some("False".to_string()),
        other => Some(other.to_string()),
    }
}

// ============================================================================
// Kit sheet
// ============================================================================

/// Kit rows below the header row. Rows without a court name come through
/// blank; the importer decides what to skip.
pub fn kit_rows(grid: &Grid, sheet: &str) -> Result<Vec<KitRow>, ImportError> {
    let header = grid.row(KIT_HEADER_ROW).unwrap_or(&[]);
    let column = |name: &str| {
        header
            .iter()
            .position(|cell| cell.as_deref().map(str::trim) == Some(name))
            .ok_or_else(|| ImportError::MissingColumn {
                sheet: sheet.to_string(),
                column: name.to_string(),
            })
    };
    let name_col = column(COURT_NAME_COLUMN)?;
    let kind_col = column(PRODUCTION_TYPE_COLUMN)?;

    let rows = (KIT_HEADER_ROW + 1..grid.height())
        .map(|r| KitRow {
            court_name: grid.cell(r, name_col).unwrap_or_default().trim().to_string(),
            kind_raw: grid.cell(r, kind_col).unwrap_or_default().to_string(),
        })
        .collect();
    Ok(rows)
}

// ============================================================================
// Feeds sheet
// ============================================================================

/// Feed status sheet: one column per court, one row per feed.
#[derive(Debug, Clone, Default)]
pub struct FeedSheet {
    grid: Grid,
}

impl FeedSheet {
    pub fn new(grid: Grid) -> Self {
        Self { grid }
    }

    /// First heading cell that mentions the court, ignoring case.
    fn court_column(&self, court: &str) -> Option<usize> {
        let needle = court.to_lowercase();
        self.grid.row(FEED_HEADER_ROW)?.iter().position(|cell| {
            cell.as_deref()
                .is_some_and(|text| text.to_lowercase().contains(&needle))
        })
    }

    /// First row whose first or second cell appears inside the item name.
    fn item_row(&self, item: &str) -> Option<usize> {
        let label = item.to_lowercase();
        (0..self.grid.height()).find(|&r| {
            [0, 1].iter().any(|&c| {
                self.grid
                    .cell(r, c)
                    .is_some_and(|key| label.contains(&key.to_lowercase()))
            })
        })
    }
}

impl FeedStatus for FeedSheet {
    fn is_verified(&self, court: &str, item: &str) -> bool {
        let (Some(col), Some(row)) = (self.court_column(court), self.item_row(item)) else {
            return false;
        };

        // Merged or offset entries sit one cell to the right
        let value = self
            .grid
            .cell(row, col)
            .or_else(|| self.grid.cell(row, col + 1));
        value.is_some_and(|v| TRUTHY_VALUES.contains(&v.trim().to_lowercase().as_str()))
    }
}

// ============================================================================
// Workbook
// ============================================================================

/// Everything the importer needs from a workbook.
#[derive(Debug, Clone, Default)]
pub struct WorkbookData {
    pub kit_rows: Vec<KitRow>,
    pub feeds: Option<FeedSheet>,
}

/// Open a workbook and pull out the kit rows and, when present, the feeds
/// sheet. A missing kit sheet is an error; a missing feeds sheet is not.
pub fn load(path: &Path, sheets: &SheetNames) -> Result<WorkbookData, ImportError> {
    debug!(path = %path.display(), "Opening workbook");
    let mut workbook = open_workbook_auto(path)?;
    let (kit_sheet, feeds_sheet) = sheets.resolve(&workbook.sheet_names())?;

    let kit_grid = Grid::from_range(&workbook.worksheet_range(kit_sheet)?);
    let kit_rows = kit_rows(&kit_grid, kit_sheet)?;
    debug!(rows = kit_rows.len(), "Kit sheet read");

    let feeds = match feeds_sheet {
        Some(name) => {
            let grid = Grid::from_range(&workbook.worksheet_range(name)?);
            debug!(sheet = %name, rows = grid.height(), "Feeds sheet read");
            Some(FeedSheet::new(grid))
        }
        None => {
            warn!(tried = ?sheets.feeds, "No feeds sheet, cameras start unverified");
            None
        }
    };

    Ok(WorkbookData { kit_rows, feeds })
}
