/// Truncate a string to a maximum length, adding ellipsis if needed
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        s.chars().take(max_len).collect()
    } else {
        let truncated: String = s.chars().take(max_len - 3).collect();
        format!("{}...", truncated)
    }
}

/// Text progress bar `width` cells wide for a 0-100 percentage
pub fn progress_bar(percent: u8, width: usize) -> String {
    let percent = percent.min(100) as usize;
    let filled = percent * width / 100;
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Trailer for a task list cut down to `shown` entries
pub fn more_line(total: usize, shown: usize) -> Option<String> {
    (total > shown).then(|| format!("...and {} more", total - shown))
}
