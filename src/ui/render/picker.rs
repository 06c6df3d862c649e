use super::{main::centered_rect, Frame};
use crate::state::{PickerGroup, State};
use crate::ui::widgets::styling;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph},
};

/// Render the add-element picker: a modal with one tab per element group
/// and the entries of the current group below.
///
pub fn picker(frame: &mut Frame, size: Rect, state: &State) {
    let popup_area = centered_rect(50, 50, size);

    // Clear the area first (ratatui modal pattern)
    frame.render_widget(Clear, popup_area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(5),
        ])
        .split(popup_area);

    let theme = state.get_theme();
    let title_block = Block::default()
        .borders(Borders::ALL)
        .title(Span::styled(
            "Add Element",
            Style::default()
                .fg(theme.info.to_color())
                .add_modifier(Modifier::BOLD),
        ))
        .border_style(styling::active_block_border_style(theme));
    let title_text = Paragraph::new("h/l: groups, j/k: entries, Enter: select, Esc: cancel")
        .block(title_block)
        .alignment(Alignment::Center);
    frame.render_widget(title_text, chunks[0]);

    // Group tabs.
    let current_group = state.get_picker_group();
    let mut tab_spans = Vec::new();
    for group in PickerGroup::ALL {
        let style = if group == *current_group {
            Style::default()
                .fg(theme.highlight_fg.to_color())
                .bg(theme.highlight_bg.to_color())
                .add_modifier(Modifier::BOLD)
        } else {
            styling::muted_text_style(theme)
        };
        tab_spans.push(Span::styled(format!(" {} ", group.title()), style));
        tab_spans.push(Span::raw(" "));
    }
    let tabs = Paragraph::new(Line::from(tab_spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(styling::normal_block_border_style(theme)),
    );
    frame.render_widget(tabs, chunks[1]);

    // Entries of the current group.
    let entries = current_group.entries();
    let items: Vec<ListItem> = entries.iter().map(|entry| ListItem::new(*entry)).collect();

    let mut list_state = ListState::default();
    if !items.is_empty() {
        let safe_index = state.get_picker_index().min(items.len() - 1);
        list_state.select(Some(safe_index));
    }

    let list_block = Block::default()
        .borders(Borders::ALL)
        .title(format!("{} ({})", current_group.title(), entries.len()))
        .border_style(styling::active_block_border_style(theme));
    let list = List::new(items)
        .block(list_block)
        .style(styling::normal_text_style(theme))
        .highlight_style(
            Style::default()
                .fg(theme.highlight_fg.to_color())
                .bg(theme.highlight_bg.to_color())
                .add_modifier(Modifier::BOLD),
        );

    frame.render_stateful_widget(list, chunks[2], &mut list_state);
}
