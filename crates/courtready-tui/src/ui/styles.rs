use ratatui::style::{Color, Modifier, Style};

use courtready_core::ItemStage;

// Color palette
pub const PRIMARY: Color = Color::Rgb(255, 152, 0);
pub const SECONDARY: Color = Color::Rgb(76, 175, 80);
pub const ACCENT: Color = Color::Rgb(255, 193, 7);
pub const INFO: Color = Color::Rgb(33, 150, 243);
pub const TEXT: Color = Color::Rgb(255, 183, 77);
pub const MUTED: Color = Color::Rgb(128, 128, 128);
pub const HIGHLIGHT: Color = Color::Rgb(48, 48, 64);

// Styles
pub fn title_style() -> Style {
    Style::default().fg(PRIMARY).add_modifier(Modifier::BOLD)
}

pub fn selected_style() -> Style {
    Style::default()
        .bg(HIGHLIGHT)
        .add_modifier(Modifier::BOLD)
}

pub fn list_item_style() -> Style {
    Style::default().fg(TEXT)
}

pub fn muted_style() -> Style {
    Style::default().fg(MUTED)
}

pub fn highlight_style() -> Style {
    Style::default().fg(ACCENT)
}

pub fn success_style() -> Style {
    Style::default().fg(SECONDARY)
}

pub fn border_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(PRIMARY)
    } else {
        Style::default().fg(MUTED)
    }
}

pub fn status_bar_style() -> Style {
    Style::default().bg(Color::Rgb(32, 32, 40)).fg(Color::White)
}

pub fn help_key_style() -> Style {
    Style::default()
        .fg(ACCENT)
        .add_modifier(Modifier::BOLD)
}

pub fn help_desc_style() -> Style {
    Style::default().fg(Color::White)
}

/// Progress bar colour: green once complete
pub fn progress_style(percent: u8) -> Style {
    if percent >= 100 {
        success_style()
    } else {
        Style::default().fg(PRIMARY)
    }
}

/// Status pill colour for an item stage. Power lines use amber for located,
/// everything else blue for rigged.
pub fn stage_style(stage: ItemStage, power: bool) -> Style {
    match stage {
        ItemStage::NotStarted => muted_style(),
        ItemStage::Staged if power => Style::default().fg(ACCENT),
        ItemStage::Staged => Style::default().fg(INFO),
        ItemStage::Verified => success_style().add_modifier(Modifier::BOLD),
    }
}
