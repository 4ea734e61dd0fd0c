//! Prioritized action list for a court.
//!
//! Rigging comes before testing: every outstanding rig action is listed
//! ahead of any test action, and each group follows the court's item order.

use std::fmt;

use serde::Serialize;

use crate::models::category::is_power_item;
use crate::models::{Court, ItemStage};

/// Which half of the action list a task belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Bucket {
    Rig,
    Test,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TaskAction {
    /// Find a power line that has not been provided yet
    Locate,
    /// Bring a located power line up
    PowerUp,
    Rig,
    Test,
}

impl TaskAction {
    pub fn bucket(&self) -> Bucket {
        match self {
            TaskAction::Locate | TaskAction::Rig => Bucket::Rig,
            TaskAction::PowerUp | TaskAction::Test => Bucket::Test,
        }
    }
}

/// A single outstanding action on one item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Task {
    pub action: TaskAction,
    pub item: String,
}

impl Task {
    /// The action needed to move `item` on from `stage`, if any.
    pub fn for_item(item: &str, stage: ItemStage) -> Option<Self> {
        let power = is_power_item(item);
        let action = match (stage, power) {
            (ItemStage::NotStarted, true) => TaskAction::Locate,
            (ItemStage::Staged, true) => TaskAction::PowerUp,
            (ItemStage::NotStarted, false) => TaskAction::Rig,
            (ItemStage::Staged, false) => TaskAction::Test,
            (ItemStage::Verified, _) => return None,
        };
        Some(Self {
            action,
            item: item.to_string(),
        })
    }

    pub fn bucket(&self) -> Bucket {
        self.action.bucket()
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.action {
            TaskAction::Locate => write!(f, "Locate {}", self.item),
            TaskAction::PowerUp => write!(f, "Get {} Up & Running", self.item),
            TaskAction::Rig => write!(f, "Rig {}", self.item),
            TaskAction::Test => write!(f, "Test {}", self.item),
        }
    }
}

/// Build the action list for a court: one pass over the items for the rig
/// bucket, a second pass in the same order for the test bucket.
pub fn prioritize(court: &Court) -> Vec<Task> {
    let bucket = |wanted: Bucket| {
        court
            .items()
            .filter_map(|(item, stage)| Task::for_item(item, stage))
            .filter(move |task| task.bucket() == wanted)
    };

    bucket(Bucket::Rig).chain(bucket(Bucket::Test)).collect()
}
