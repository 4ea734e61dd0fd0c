use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

use courtready_core::{Category, Court, ItemStage};

use crate::app::{App, DetailEntry};
use crate::ui::styles;
use crate::utils::{more_line, truncate};

/// Priority actions listed before collapsing into "...and N more"
const TASK_PREVIEW_COUNT: usize = 4;

pub fn render(frame: &mut Frame, app: &App, court: &Court, area: Rect) {
    let task_lines = task_lines(app, court);
    let task_height = task_lines.len() as u16 + 2;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(task_height), Constraint::Min(6)])
        .split(area);

    let block = Block::default()
        .title(format!(" {} · {}% Ready ", court.name, court.progress()))
        .title_style(styles::title_style())
        .borders(Borders::ALL)
        .border_style(styles::border_style(false));
    frame.render_widget(Paragraph::new(task_lines).block(block), chunks[0]);

    render_categories(frame, app, court, chunks[1]);
}

fn task_lines(app: &App, court: &Court) -> Vec<Line<'static>> {
    let tasks = app.session.next_tasks(&court.name).unwrap_or_default();
    if tasks.is_empty() {
        return vec![Line::from(Span::styled(
            " ✓ Court Complete",
            styles::success_style(),
        ))];
    }

    let mut lines = vec![Line::from(Span::styled(
        " Priority Actions",
        styles::highlight_style(),
    ))];
    lines.extend(tasks.iter().take(TASK_PREVIEW_COUNT).map(|task| {
        Line::from(Span::styled(format!("  • {}", task), styles::list_item_style()))
    }));
    if let Some(more) = more_line(tasks.len(), TASK_PREVIEW_COUNT) {
        lines.push(Line::from(Span::styled(format!("  {}", more), styles::muted_style())));
    }
    lines
}

fn render_categories(frame: &mut Frame, app: &App, court: &Court, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 4); 4])
        .split(area);

    let entries = app.detail_entries();

    for (panel, category) in Category::ALL.into_iter().enumerate() {
        let label_width = (chunks[panel].width as usize).saturating_sub(17);
        let selected = panel_selection(&entries, category, app.item_selection);
        let power = category == Category::Power;

        let mut items: Vec<ListItem> = entries
            .iter()
            .filter(|entry| entry.category == category)
            .map(|entry| {
                let stage = court.stage_of(&entry.item).unwrap_or(ItemStage::NotStarted);
                ListItem::new(Line::from(vec![
                    Span::raw(format!(
                        " {:<width$}",
                        truncate(&entry.item, label_width),
                        width = label_width
                    )),
                    Span::styled(
                        format!(" {:>14}", stage.label(category)),
                        styles::stage_style(stage, power),
                    ),
                ]))
                .style(styles::list_item_style())
            })
            .collect();

        if items.is_empty() {
            items.push(ListItem::new(Line::from(Span::styled(
                " No items",
                styles::muted_style(),
            ))));
        }

        let block = Block::default()
            .title(format!(" {} ", category.title()))
            .title_style(styles::title_style())
            .borders(Borders::ALL)
            .border_style(styles::border_style(selected.is_some()));

        let list = List::new(items)
            .block(block)
            .highlight_style(styles::selected_style());

        // Scrolls the panel so the highlighted item stays visible
        let mut state = ListState::default();
        state.select(selected);

        frame.render_stateful_widget(list, chunks[panel], &mut state);
    }
}

/// Position of the highlighted entry within one category panel, if the
/// highlight is in that panel.
fn panel_selection(entries: &[DetailEntry], category: Category, item_selection: usize) -> Option<usize> {
    let selected = entries.get(item_selection)?;
    if selected.category != category {
        return None;
    }
    Some(
        entries[..item_selection]
            .iter()
            .filter(|e| e.category == category)
            .count(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entries() -> Vec<DetailEntry> {
        [
            (Category::Video, "Camera 0"),
            (Category::Audio, "Near Mic L"),
            (Category::Audio, "Near Mic R"),
            (Category::Audio, "Umpire Mic"),
            (Category::Power, "Main Power"),
        ]
        .into_iter()
        .map(|(category, item)| DetailEntry {
            category,
            item: item.to_string(),
        })
        .collect()
    }

    #[test]
    fn test_panel_selection_maps_to_local_index() {
        let entries = entries();
        assert_eq!(panel_selection(&entries, Category::Audio, 3), Some(2));
        assert_eq!(panel_selection(&entries, Category::Power, 4), Some(0));
        assert_eq!(panel_selection(&entries, Category::Video, 0), Some(0));
    }

    #[test]
    fn test_panel_selection_other_panels_unselected() {
        let entries = entries();
        assert_eq!(panel_selection(&entries, Category::Video, 3), None);
        assert_eq!(panel_selection(&entries, Category::Data, 1), None);
        assert_eq!(panel_selection(&entries, Category::Audio, 9), None);
    }
}
