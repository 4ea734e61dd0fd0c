//! Checklist catalog: the equipment every court of a given kind must have.

use crate::models::CourtKind;

const FULL_PRODUCTION_ITEMS: [&str; 17] = [
    "Camera 1",
    "Camera 2",
    "Camera 3",
    "Camera 4",
    "Camera 0",
    "Near Mic L",
    "Near Mic R",
    "Far Mic L",
    "Far Mic R",
    "Umpire Mic",
    "Main Power",
    "Power Cam 3",
    "Power Cam 4",
    "Cam 1 Data",
    "Cam 2 Data",
    "Cam 3 Data",
    "Cam 4 Data",
];

const STREAMING_ITEMS: [&str; 5] = [
    "Camera 0",
    "Near Mic L",
    "Near Mic R",
    "Umpire Mic",
    "Main Power",
];

/// Required item names for `kind`, in checklist order.
pub fn items_for(kind: CourtKind) -> &'static [&'static str] {
    match kind {
        CourtKind::FullProduction => &FULL_PRODUCTION_ITEMS,
        CourtKind::Streaming => &STREAMING_ITEMS,
    }
}
