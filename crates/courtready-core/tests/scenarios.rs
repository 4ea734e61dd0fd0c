//! End-to-end checks of a session driven the way the dashboard drives it.

use std::collections::HashMap;

use courtready_core::catalog::items_for;
use courtready_core::import::{seed_store, KitRow};
use courtready_core::{Bucket, Category, CourtKind, CourtStore, ItemStage, Session};

fn full_court_session() -> Session {
    let (store, _) = seed_store(vec![KitRow::new("Stadium", "Full Production Court")], None);
    Session::new(store)
}

fn task_labels(session: &Session, court: &str) -> Vec<String> {
    session
        .next_tasks(court)
        .unwrap()
        .iter()
        .map(ToString::to_string)
        .collect()
}

#[test]
fn test_fresh_full_court_needs_everything_rigged() {
    let session = full_court_session();

    assert_eq!(session.progress("Stadium"), 0);
    let tasks = session.next_tasks("Stadium").unwrap();
    assert_eq!(tasks.len(), 17);
    assert!(tasks.iter().all(|t| t.bucket() == Bucket::Rig));
    assert_eq!(tasks[0].to_string(), "Rig Camera 1");
    assert_eq!(tasks[10].to_string(), "Locate Main Power");
}

#[test]
fn test_staging_one_camera_moves_it_to_the_test_bucket() {
    let mut session = full_court_session();
    session.cycle_stage("Stadium", "Camera 1").unwrap();

    assert_eq!(session.progress("Stadium"), 2);
    let labels = task_labels(&session, "Stadium");
    assert_eq!(labels.len(), 17);
    assert!(!labels.contains(&"Rig Camera 1".to_string()));
    assert_eq!(labels.last().map(String::as_str), Some("Test Camera 1"));
    assert_eq!(labels[0], "Rig Camera 2");
}

#[test]
fn test_rig_actions_for_late_items_precede_test_actions_for_early_items() {
    let mut session = full_court_session();
    session.cycle_stage("Stadium", "Camera 1").unwrap();
    session.cycle_stage("Stadium", "Main Power").unwrap();

    let labels = task_labels(&session, "Stadium");
    let rig_cam4_data = labels.iter().position(|l| l == "Rig Cam 4 Data").unwrap();
    let test_cam1 = labels.iter().position(|l| l == "Test Camera 1").unwrap();
    let power_up = labels
        .iter()
        .position(|l| l == "Get Main Power Up & Running")
        .unwrap();
    assert!(rig_cam4_data < test_cam1);
    assert!(test_cam1 < power_up);
}

#[test]
fn test_verified_streaming_court_is_complete() {
    let mut store = CourtStore::new();
    let all_verified: HashMap<String, ItemStage> = items_for(CourtKind::Streaming)
        .iter()
        .map(|item| (item.to_string(), ItemStage::Verified))
        .collect();
    store
        .create_court("Court 6", CourtKind::Streaming, &all_verified)
        .unwrap();
    let session = Session::new(store);

    assert_eq!(session.progress("Court 6"), 100);
    assert!(session.next_tasks("Court 6").unwrap().is_empty());
}

#[test]
fn test_verified_items_never_appear_in_tasks() {
    let mut session = full_court_session();
    for item in ["Camera 3", "Far Mic R", "Power Cam 4"] {
        session.cycle_stage("Stadium", item).unwrap();
        session.cycle_stage("Stadium", item).unwrap();
    }

    for label in task_labels(&session, "Stadium") {
        assert!(!label.ends_with("Camera 3"));
        assert!(!label.ends_with("Far Mic R"));
        assert!(!label.contains("Power Cam 4"));
    }
    // 6 points of 34
    assert_eq!(session.progress("Stadium"), 17);
}

#[test]
fn test_progress_stays_in_range_through_every_cycle() {
    let mut session = full_court_session();
    let items: Vec<String> = items_for(CourtKind::FullProduction)
        .iter()
        .map(|s| s.to_string())
        .collect();

    for _ in 0..3 {
        for item in &items {
            session.cycle_stage("Stadium", item).unwrap();
            let progress = session.progress("Stadium");
            assert!(progress <= 100);
            let all_verified = items
                .iter()
                .all(|i| session.stage_of("Stadium", i) == Ok(ItemStage::Verified));
            assert_eq!(progress == 100, all_verified);
        }
    }
    // Three full cycles bring every item back to the start
    assert_eq!(session.progress("Stadium"), 0);
}

#[test]
fn test_dangling_selection_reads_as_overview() {
    let mut session = full_court_session();
    session.select(Some("Court 404"));

    assert_eq!(session.progress("Court 404"), 0);
    assert_eq!(session.selected(), None);
}

#[test]
fn test_category_groupings_are_independent() {
    let session = full_court_session();
    let video = session.category_members("Stadium", Category::Video).unwrap();
    let data = session.category_members("Stadium", Category::Data).unwrap();

    assert_eq!(video, vec!["Camera 1", "Camera 2", "Camera 3", "Camera 4", "Camera 0"]);
    assert_eq!(data, vec!["Cam 1 Data", "Cam 2 Data", "Cam 3 Data", "Cam 4 Data"]);
}
