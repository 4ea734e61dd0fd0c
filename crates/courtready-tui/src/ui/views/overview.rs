use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

use crate::app::{App, Column};
use crate::ui::styles;
use crate::utils::{progress_bar, truncate};

/// Width of the progress bar on each court card
const BAR_WIDTH: usize = 20;

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    if app.session.store().is_empty() {
        render_empty(frame, area);
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    render_column(frame, app, Column::Production, chunks[0]);
    render_column(frame, app, Column::Streaming, chunks[1]);
}

fn render_empty(frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(Span::styled(
            "No court data found.",
            styles::highlight_style(),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Check the workbook path and sheet names, then restart. See the log for details.",
            styles::muted_style(),
        )),
    ];

    let block = Block::default()
        .title(" Event Overview ")
        .title_style(styles::title_style())
        .borders(Borders::ALL)
        .border_style(styles::border_style(true));

    let paragraph = Paragraph::new(lines).block(block).wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}

fn render_column(frame: &mut Frame, app: &App, column: Column, area: Rect) {
    let courts = app.courts_in(column);
    let focused = app.column == column;
    let selection = app.column_selection(column);
    let name_width = (area.width as usize).saturating_sub(6);

    let items: Vec<ListItem> = courts
        .iter()
        .enumerate()
        .map(|(i, court)| {
            let progress = court.progress();
            let lines = vec![
                Line::from(Span::styled(
                    truncate(&court.name, name_width),
                    styles::title_style(),
                )),
                Line::from(Span::styled(court.kind.display_name(), styles::muted_style())),
                Line::from(vec![
                    Span::styled(progress_bar(progress, BAR_WIDTH), styles::progress_style(progress)),
                    Span::styled(format!(" {}% Ready", progress), styles::list_item_style()),
                ]),
                Line::from(""),
            ];

            let style = if focused && i == selection {
                styles::selected_style()
            } else {
                styles::list_item_style()
            };

            ListItem::new(lines).style(style)
        })
        .collect();

    let block = Block::default()
        .title(format!(" {} ({}) ", column.title(), courts.len()))
        .title_style(styles::title_style())
        .borders(Borders::ALL)
        .border_style(styles::border_style(focused));

    let list = List::new(items).block(block);

    let mut state = ListState::default();
    state.select((!courts.is_empty()).then_some(selection));

    frame.render_stateful_widget(list, area, &mut state);
}
