use super::app::App;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Clear, List, ListItem, ListState},
};

pub fn draw(f: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(
            [
                Constraint::Min(1),    // Scrollback grows
                Constraint::Length(3), // Single command line plus borders
            ]
            .as_ref(),
        )
        .split(f.area());

    // Scrollback: show the last messages that fit inside the panel
    let inner_height = chunks[0].height.saturating_sub(2) as usize;
    let skip_count = app.messages.len().saturating_sub(inner_height);

    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .skip(skip_count)
        .map(|line| ListItem::new(line.clone()))
        .collect();

    let messages_panel = List::new(messages)
        .block(Block::default().borders(Borders::ALL).title(" Session "))
        .style(Style::default().fg(Color::White));

    f.render_widget(messages_panel, chunks[0]);

    // Input line
    let textarea_rect = chunks[1];
    f.render_widget(&app.textarea, textarea_rect);

    // Suggestion popup, anchored under the cursor
    if app.popup_open && !app.suggestions.is_empty() {
        let (row, col) = app.textarea.cursor();

        let popup_x = textarea_rect.x + (col as u16) + 1;
        let popup_y = textarea_rect.y + (row as u16) + 2;

        let width = 24;
        let height = 5.min(app.suggestions.len() as u16 + 2);

        let area = Rect::new(
            popup_x.min(f.area().width.saturating_sub(width)),
            popup_y.min(f.area().height.saturating_sub(height)),
            width,
            height,
        );

        f.render_widget(Clear, area);

        let items: Vec<ListItem> = app
            .suggestions
            .iter()
            .map(|s| ListItem::new(s.as_str()))
            .collect();

        let mut state = ListState::default();
        state.select(Some(app.suggestion_index));

        let list = List::new(items)
            .block(Block::default().borders(Borders::ALL).title(" Complete "))
            .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
            .highlight_symbol(">> ");

        f.render_stateful_widget(list, area, &mut state);
    }
}
