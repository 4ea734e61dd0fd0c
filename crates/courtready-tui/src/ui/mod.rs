//! Terminal UI module using ratatui.
//!
//! - `render`: Main frame rendering and layout
//! - `input`: Keyboard event handling
//! - `styles`: Color schemes and text styling
//! - `views`: Overview and court detail content

pub mod input;
pub mod render;
pub mod styles;
pub mod views;
