use serde::{Deserialize, Serialize};

/// Equipment grouping used by the court detail view.
///
/// Membership is a case-sensitive substring match on the item name, so an
/// item can fall into several categories or none at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Video,
    Data,
    Audio,
    Power,
}

impl Category {
    /// Display order of the category panels.
    pub const ALL: [Category; 4] = [
        Category::Video,
        Category::Data,
        Category::Audio,
        Category::Power,
    ];

    /// Substring an item name must contain to belong here.
    pub fn keyword(&self) -> &'static str {
        match self {
            Category::Video => "Camera",
            Category::Data => "Data",
            Category::Audio => "Mic",
            Category::Power => "Power",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Category::Video => "Video",
            Category::Data => "Data",
            Category::Audio => "Audio",
            Category::Power => "Power",
        }
    }

    pub fn contains(&self, item: &str) -> bool {
        item.contains(self.keyword())
    }

    /// Every category whose keyword appears in `item`.
    pub fn matching(item: &str) -> Vec<Category> {
        Self::ALL.into_iter().filter(|c| c.contains(item)).collect()
    }
}

/// Power lines get locate/bring-up actions instead of rig/test.
pub fn is_power_item(item: &str) -> bool {
    item.contains("Power")
}

/// Only camera items are pre-seeded from feed status at import.
pub fn is_camera_item(item: &str) -> bool {
    item.contains("Camera")
}
