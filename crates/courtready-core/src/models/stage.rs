use serde::{Deserialize, Serialize};

use super::Category;

/// Checklist stage of a single item.
///
/// Stages are ordered and carry a point value used for progress:
/// not started = 0, staged = 1, verified = 2.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemStage {
    #[default]
    NotStarted = 0,
    Staged = 1,
    Verified = 2,
}

impl ItemStage {
    /// Number of points a verified item contributes.
    pub const MAX_VALUE: u32 = 2;

    pub fn value(&self) -> u32 {
        *self as u32
    }

    /// Advance one stage, wrapping verified back to not started.
    pub fn next(&self) -> Self {
        match self {
            ItemStage::NotStarted => ItemStage::Staged,
            ItemStage::Staged => ItemStage::Verified,
            ItemStage::Verified => ItemStage::NotStarted,
        }
    }

    pub fn is_verified(&self) -> bool {
        matches!(self, ItemStage::Verified)
    }

    /// Status pill text for an item shown under `category`.
    /// Power lines are located and brought up rather than rigged and tested.
    pub fn label(&self, category: Category) -> &'static str {
        match (category, self) {
            (Category::Power, ItemStage::NotStarted) => "NOT PROVIDED",
            (Category::Power, ItemStage::Staged) => "LOCATED",
            (Category::Power, ItemStage::Verified) => "UP & RUNNING",
            (_, ItemStage::NotStarted) => "NOT RIGGED",
            (_, ItemStage::Staged) => "RIGGED",
            (_, ItemStage::Verified) => "TESTED",
        }
    }
}
