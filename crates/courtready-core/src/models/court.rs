use serde::{Deserialize, Serialize};

use super::{Category, ItemStage};

/// Court production kind. Selects which checklist applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CourtKind {
    FullProduction,
    Streaming,
}

impl CourtKind {
    /// Classify a raw production type from import data.
    /// Anything mentioning "full" in any case is full production; every
    /// other value, including blanks, falls through to streaming.
    pub fn classify(raw: &str) -> Self {
        if raw.to_lowercase().contains("full") {
            CourtKind::FullProduction
        } else {
            CourtKind::Streaming
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            CourtKind::FullProduction => "Full Production",
            CourtKind::Streaming => "Streaming",
        }
    }
}

/// A court and the stage of each of its checklist items.
///
/// Items keep catalog order. The item set is fixed once the court exists;
/// only stages change.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Court {
    pub name: String,
    pub kind: CourtKind,
    items: Vec<(String, ItemStage)>,
}

impl Court {
    pub(crate) fn new(name: String, kind: CourtKind, items: Vec<(String, ItemStage)>) -> Self {
        Self { name, kind, items }
    }

    /// Items with their stages in insertion order.
    pub fn items(&self) -> impl Iterator<Item = (&str, ItemStage)> {
        self.items.iter().map(|(name, stage)| (name.as_str(), *stage))
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    pub fn stage_of(&self, item: &str) -> Option<ItemStage> {
        self.items
            .iter()
            .find(|(name, _)| name == item)
            .map(|(_, stage)| *stage)
    }

    pub(crate) fn stage_mut(&mut self, item: &str) -> Option<&mut ItemStage> {
        self.items
            .iter_mut()
            .find(|(name, _)| name == item)
            .map(|(_, stage)| stage)
    }

    /// Percent complete, truncated: `100 * points / (2 * items)`.
    /// A court without items reports 0.
    pub fn progress(&self) -> u8 {
        let total = self.items.len() as u32 * ItemStage::MAX_VALUE;
        if total == 0 {
            return 0;
        }
        let points: u32 = self.items.iter().map(|(_, stage)| stage.value()).sum();
        (points * 100 / total) as u8
    }

    pub fn is_complete(&self) -> bool {
        self.items.iter().all(|(_, stage)| stage.is_verified())
    }

    /// Item names belonging to `category`, in insertion order.
    pub fn category_members(&self, category: Category) -> Vec<&str> {
        self.items
            .iter()
            .filter(|(name, _)| category.contains(name))
            .map(|(name, _)| name.as_str())
            .collect()
    }
}
