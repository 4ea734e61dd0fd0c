//! Core library for courtready.
//!
//! Tracks setup readiness of event courts. Each court carries a fixed set of
//! equipment items taken from the checklist catalog for its kind, and each
//! item moves through a three-stage checklist:
//!
//! - `catalog`: court kind to required item names
//! - `models`: stages, kinds, categories and the `Court` record
//! - `store`: the in-memory court registry and its mutators
//! - `tasks`: the prioritized action list derived from item stages
//! - `session`: explicit owner of the store plus the current selection
//! - `import`: seeding a store from kit rows and feed status sources

pub mod catalog;
pub mod error;
pub mod import;
pub mod models;
pub mod session;
pub mod store;
pub mod tasks;

pub use error::{ImportError, StoreError};
pub use models::{Category, Court, CourtKind, ItemStage};
pub use session::{CourtReport, Session};
pub use store::CourtStore;
pub use tasks::{Bucket, Task, TaskAction};
