//! In-memory registry of courts and their item stages.

use std::collections::HashMap;

use tracing::debug;

use crate::catalog;
use crate::error::StoreError;
use crate::models::{Category, Court, CourtKind, ItemStage};
use crate::tasks::{self, Task};

/// Court registry keyed by name, preserving creation order.
#[derive(Debug, Clone, Default)]
pub struct CourtStore {
    courts: Vec<Court>,
    index: HashMap<String, usize>,
}

impl CourtStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a court seeded with the catalog items for `kind`.
    ///
    /// Items start at `NotStarted` unless `initial_stages` names them.
    /// Entries for items outside the catalog set are ignored. An existing
    /// name is rejected and the store is left untouched.
    pub fn create_court(
        &mut self,
        name: &str,
        kind: CourtKind,
        initial_stages: &HashMap<String, ItemStage>,
    ) -> Result<&Court, StoreError> {
        if self.index.contains_key(name) {
            return Err(StoreError::DuplicateCourt(name.to_string()));
        }

        let items = catalog::items_for(kind)
            .iter()
            .map(|item| {
                let stage = initial_stages.get(*item).copied().unwrap_or_default();
                (item.to_string(), stage)
            })
            .collect();

        debug!(court = %name, ?kind, "Creating court");
        let position = self.courts.len();
        self.courts.push(Court::new(name.to_string(), kind, items));
        self.index.insert(name.to_string(), position);
        Ok(&self.courts[position])
    }

    /// Advance an item one stage, wrapping verified back to not started.
    /// Returns the new stage.
    pub fn cycle_stage(&mut self, court: &str, item: &str) -> Result<ItemStage, StoreError> {
        let position = *self
            .index
            .get(court)
            .ok_or_else(|| StoreError::CourtNotFound(court.to_string()))?;
        let stage = self.courts[position]
            .stage_mut(item)
            .ok_or_else(|| StoreError::ItemNotFound {
                court: court.to_string(),
                item: item.to_string(),
            })?;

        let previous = *stage;
        *stage = previous.next();
        debug!(court = %court, item = %item, from = ?previous, to = ?*stage, "Cycled stage");
        Ok(*stage)
    }

    /// Percent complete for a court; 0 when the court is unknown.
    pub fn progress(&self, court: &str) -> u8 {
        self.get(court).map(Court::progress).unwrap_or(0)
    }

    /// (name, kind) for every court in creation order.
    pub fn list_courts(&self) -> Vec<(&str, CourtKind)> {
        self.courts.iter().map(|c| (c.name.as_str(), c.kind)).collect()
    }

    pub fn courts(&self) -> &[Court] {
        &self.courts
    }

    pub fn get(&self, court: &str) -> Option<&Court> {
        self.index.get(court).map(|&i| &self.courts[i])
    }

    pub fn contains(&self, court: &str) -> bool {
        self.index.contains_key(court)
    }

    pub fn len(&self) -> usize {
        self.courts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.courts.is_empty()
    }

    pub fn stage_of(&self, court: &str, item: &str) -> Result<ItemStage, StoreError> {
        self.require(court)?
            .stage_of(item)
            .ok_or_else(|| StoreError::ItemNotFound {
                court: court.to_string(),
                item: item.to_string(),
            })
    }

    pub fn category_members(&self, court: &str, category: Category) -> Result<Vec<&str>, StoreError> {
        Ok(self.require(court)?.category_members(category))
    }

    /// Prioritized actions for a court: every rig action before any test.
    pub fn next_tasks(&self, court: &str) -> Result<Vec<Task>, StoreError> {
        Ok(tasks::prioritize(self.require(court)?))
    }

    fn require(&self, court: &str) -> Result<&Court, StoreError> {
        self.get(court)
            .ok_or_else(|| StoreError::CourtNotFound(court.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_stages() -> HashMap<String, ItemStage> {
        HashMap::new()
    }

    // -------------------------------------------------------------------------
    // Creation
    // -------------------------------------------------------------------------

    #[test]
    fn test_create_court_seeds_catalog_items() {
        let mut store = CourtStore::new();
        let court = store
            .create_court("Stadium", CourtKind::FullProduction, &no_stages())
            .unwrap();
        let names: Vec<&str> = court.items().map(|(n, _)| n).collect();
        assert_eq!(names, catalog::items_for(CourtKind::FullProduction));
        assert!(court.items().all(|(_, s)| s == ItemStage::NotStarted));
    }

    #[test]
    fn test_create_court_ignores_unknown_initial_stages() {
        let mut store = CourtStore::new();
        let mut initial = HashMap::new();
        initial.insert("Camera 0".to_string(), ItemStage::Verified);
        initial.insert("Camera 1".to_string(), ItemStage::Verified); // not a streaming item
        initial.insert("Jib Arm".to_string(), ItemStage::Staged);

        store.create_court("Court 7", CourtKind::Streaming, &initial).unwrap();

        let court = store.get("Court 7").unwrap();
        assert_eq!(court.item_count(), 5);
        assert_eq!(court.stage_of("Camera 0"), Some(ItemStage::Verified));
        assert_eq!(court.stage_of("Camera 1"), None);
        assert_eq!(court.stage_of("Jib Arm"), None);
    }

    #[test]
    fn test_create_duplicate_court_is_rejected() {
        let mut store = CourtStore::new();
        store.create_court("Court 1", CourtKind::Streaming, &no_stages()).unwrap();
        store.cycle_stage("Court 1", "Camera 0").unwrap();

        let err = store
            .create_court("Court 1", CourtKind::FullProduction, &no_stages())
            .unwrap_err();
        assert_eq!(err, StoreError::DuplicateCourt("Court 1".to_string()));

        // First court untouched
        assert_eq!(store.len(), 1);
        let court = store.get("Court 1").unwrap();
        assert_eq!(court.kind, CourtKind::Streaming);
        assert_eq!(court.stage_of("Camera 0"), Some(ItemStage::Staged));
    }

    #[test]
    fn test_list_courts_in_creation_order() {
        let mut store = CourtStore::new();
        store.create_court("Stadium", CourtKind::FullProduction, &no_stages()).unwrap();
        store.create_court("Court 4", CourtKind::Streaming, &no_stages()).unwrap();
        store.create_court("Court 2", CourtKind::Streaming, &no_stages()).unwrap();

        assert_eq!(
            store.list_courts(),
            vec![
                ("Stadium", CourtKind::FullProduction),
                ("Court 4", CourtKind::Streaming),
                ("Court 2", CourtKind::Streaming),
            ]
        );
    }

    // -------------------------------------------------------------------------
    // Stage cycling
    // -------------------------------------------------------------------------

    #[test]
    fn test_cycle_stage_advances_and_wraps() {
        let mut store = CourtStore::new();
        store.create_court("Court 1", CourtKind::Streaming, &no_stages()).unwrap();

        assert_eq!(store.cycle_stage("Court 1", "Umpire Mic"), Ok(ItemStage::Staged));
        assert_eq!(store.cycle_stage("Court 1", "Umpire Mic"), Ok(ItemStage::Verified));
        assert_eq!(store.cycle_stage("Court 1", "Umpire Mic"), Ok(ItemStage::NotStarted));
        assert_eq!(store.stage_of("Court 1", "Umpire Mic"), Ok(ItemStage::NotStarted));
    }

    #[test]
    fn test_cycle_stage_missing_court() {
        let mut store = CourtStore::new();
        let err = store.cycle_stage("Nowhere", "Camera 0").unwrap_err();
        assert_eq!(err, StoreError::CourtNotFound("Nowhere".to_string()));
        assert!(err.is_not_found());
    }

    #[test]
    fn test_cycle_stage_missing_item_leaves_state() {
        let mut store = CourtStore::new();
        store.create_court("Court 1", CourtKind::Streaming, &no_stages()).unwrap();

        let err = store.cycle_stage("Court 1", "Camera 3").unwrap_err();
        assert!(matches!(err, StoreError::ItemNotFound { .. }));
        assert_eq!(store.progress("Court 1"), 0);
        assert!(store
            .get("Court 1")
            .unwrap()
            .items()
            .all(|(_, s)| s == ItemStage::NotStarted));
    }

    // -------------------------------------------------------------------------
    // Queries
    // -------------------------------------------------------------------------

    #[test]
    fn test_progress_unknown_court_is_zero() {
        let store = CourtStore::new();
        assert_eq!(store.progress("Ghost Court"), 0);
    }

    #[test]
    fn test_progress_one_staged_camera_on_full_court() {
        let mut store = CourtStore::new();
        store.create_court("Stadium", CourtKind::FullProduction, &no_stages()).unwrap();
        store.cycle_stage("Stadium", "Camera 1").unwrap();
        // floor(100 * 1 / 34)
        assert_eq!(store.progress("Stadium"), 2);
    }

    #[test]
    fn test_progress_hits_100_only_when_all_verified() {
        let mut store = CourtStore::new();
        store.create_court("Court 3", CourtKind::Streaming, &no_stages()).unwrap();
        let items: Vec<String> = catalog::items_for(CourtKind::Streaming)
            .iter()
            .map(|s| s.to_string())
            .collect();

        for (i, item) in items.iter().enumerate() {
            store.cycle_stage("Court 3", item).unwrap();
            store.cycle_stage("Court 3", item).unwrap();
            if i + 1 < items.len() {
                assert!(store.progress("Court 3") < 100);
            }
        }
        assert_eq!(store.progress("Court 3"), 100);
    }

    #[test]
    fn test_category_members_for_full_court() {
        let mut store = CourtStore::new();
        store.create_court("Stadium", CourtKind::FullProduction, &no_stages()).unwrap();

        assert_eq!(
            store.category_members("Stadium", Category::Power).unwrap(),
            vec!["Main Power", "Power Cam 3", "Power Cam 4"]
        );
        assert_eq!(store.category_members("Stadium", Category::Video).unwrap().len(), 5);
        assert_eq!(store.category_members("Stadium", Category::Data).unwrap().len(), 4);
        assert_eq!(store.category_members("Stadium", Category::Audio).unwrap().len(), 5);
        assert!(store.category_members("Nowhere", Category::Audio).is_err());
    }

    #[test]
    fn test_stage_of_errors() {
        let mut store = CourtStore::new();
        store.create_court("Court 1", CourtKind::Streaming, &no_stages()).unwrap();
        assert!(matches!(
            store.stage_of("Court 2", "Camera 0"),
            Err(StoreError::CourtNotFound(_))
        ));
        assert!(matches!(
            store.stage_of("Court 1", "Far Mic L"),
            Err(StoreError::ItemNotFound { .. })
        ));
    }

    #[test]
    fn test_next_tasks_unknown_court_errors() {
        let store = CourtStore::new();
        assert_eq!(
            store.next_tasks("Ghost").unwrap_err(),
            StoreError::CourtNotFound("Ghost".to_string())
        );
    }
}
