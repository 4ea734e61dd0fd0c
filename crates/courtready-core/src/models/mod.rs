//! Data models for court readiness tracking.
//!
//! - `ItemStage`: the three-stage checklist value for one item
//! - `CourtKind`: full production vs streaming, selects the catalog
//! - `Category`: Video/Data/Audio/Power groupings matched on item names
//! - `Court`: a named court with its ordered item stages

pub mod category;
pub mod court;
pub mod stage;

pub use category::Category;
pub use court::{Court, CourtKind};
pub use stage::ItemStage;
