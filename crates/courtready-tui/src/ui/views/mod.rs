//! Main content views: the court overview and a single court's checklist.

pub mod court;
pub mod overview;
