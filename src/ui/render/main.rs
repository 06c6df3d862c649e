use super::{app_form, board, label_form, picker, welcome, widget_form, Frame};
use crate::state::{State, View};
use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Render main widget according to state.
///
pub fn main(frame: &mut Frame, size: Rect, state: &mut State) {
    match state.current_view() {
        View::Welcome => {
            welcome::welcome(frame, size, state);
        }
        View::Board => {
            board::board(frame, size, state);
        }
    }

    // Overlays stack above whichever view is underneath.
    if state.is_picker_open() {
        picker::picker(frame, size, state);
    }
    if state.get_app_form().is_some() {
        app_form::app_form(frame, size, state);
    }
    if state.get_widget_form().is_some() {
        widget_form::widget_form(frame, size, state);
    }
    if state.get_label_form().is_some() {
        label_form::label_form(frame, size, state);
    }
    if state.get_delete_confirmation().is_some() {
        render_delete_confirmation(frame, size, state);
    }
    if state.is_theme_selector_open() {
        render_theme_selector_modal(frame, size, state);
    }
}

fn render_delete_confirmation(frame: &mut Frame, size: Rect, state: &State) {
    use ratatui::{
        layout::Alignment,
        style::{Modifier, Style},
        text::{Line, Span},
        widgets::{Block, Borders, Clear, Paragraph, Wrap},
    };

    // Create a centered popup dialog using ratatui pattern
    let popup_area = centered_rect(60, 25, size);

    // Clear the area first (ratatui modal pattern)
    frame.render_widget(Clear, popup_area);

    // Format the text - truncate long element names
    let description = state
        .delete_confirmation_description()
        .unwrap_or_else(|| "this element".to_string());
    let display_name = if description.chars().count() > 45 {
        format!("{}...", description.chars().take(45).collect::<String>())
    } else {
        description
    };

    let theme = state.get_theme();
    let text = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("Delete {}?", display_name),
            Style::default()
                .fg(theme.text.to_color())
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "This action cannot be undone.",
            Style::default()
                .fg(theme.warning.to_color())
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Enter: confirm, Esc: cancel",
            Style::default().fg(theme.text_muted.to_color()),
        )),
    ];

    let paragraph = Paragraph::new(text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(Span::styled(
                    "⚠️  Confirm Delete",
                    Style::default()
                        .fg(theme.error.to_color())
                        .add_modifier(Modifier::BOLD),
                ))
                .border_style(
                    Style::default()
                        .fg(theme.error.to_color())
                        .add_modifier(Modifier::BOLD),
                ),
        )
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });

    frame.render_widget(paragraph, popup_area);
}

fn render_theme_selector_modal(frame: &mut Frame, size: Rect, state: &State) {
    use crate::ui::widgets::styling;
    use ratatui::{
        layout::Alignment,
        style::{Modifier, Style},
        text::Span,
        widgets::{Block, Borders, Clear, List, ListItem, Paragraph},
    };

    // Create a centered popup dialog using ratatui pattern
    let popup_area = centered_rect(50, 50, size);

    // Clear the area first (ratatui modal pattern)
    frame.render_widget(Clear, popup_area);

    // Get available themes and selected index
    let available_themes = crate::ui::Theme::available_themes();
    let selected_index = state.get_theme_dropdown_index();

    // Split popup into title and list areas
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(5)])
        .split(popup_area);

    // Title block
    let theme = state.get_theme();
    let title_block = Block::default()
        .borders(Borders::ALL)
        .title(Span::styled(
            "Select Theme",
            Style::default()
                .fg(theme.info.to_color())
                .add_modifier(Modifier::BOLD),
        ))
        .border_style(styling::active_block_border_style(theme));

    let title_text = Paragraph::new("j/k: navigate, Enter: select, Esc: cancel")
        .block(title_block)
        .alignment(Alignment::Center);
    frame.render_widget(title_text, chunks[0]);

    // Create list items from theme names
    let items: Vec<ListItem> = available_themes
        .iter()
        .map(|theme_name| {
            // Format theme name nicely (e.g., "tokyo-night" -> "Tokyo Night")
            let display_name = theme_name
                .split('-')
                .map(|word| {
                    let mut chars = word.chars();
                    match chars.next() {
                        None => String::new(),
                        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                    }
                })
                .collect::<Vec<_>>()
                .join(" ");

            // Show indicator if this is the current theme
            let current_indicator = if theme_name == &state.get_theme().name {
                " (current)"
            } else {
                ""
            };

            ListItem::new(format!("{}{}", display_name, current_indicator))
        })
        .collect();

    // Use ListState for proper selection display
    let mut list_state = ratatui::widgets::ListState::default();
    if !items.is_empty() {
        let safe_index = selected_index.min(items.len().saturating_sub(1));
        list_state.select(Some(safe_index));
    }

    // Create list block with theme count
    let list_block = Block::default()
        .borders(Borders::ALL)
        .title(format!("Themes ({})", available_themes.len()))
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

    frame.render_stateful_widget(list, chunks[1], &mut list_state);
}

/// Helper function to create a centered rectangle (ratatui modal pattern)
pub(super) fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Compute the window of form fields that fits in the available height
/// while keeping the current field visible.
///
pub(super) fn visible_window(heights: &[u16], current: usize, available: u16) -> (usize, usize) {
    let mut start = 0;
    loop {
        let mut end = start;
        let mut used: u16 = 0;
        while end < heights.len() && used + heights[end] <= available {
            used += heights[end];
            end += 1;
        }
        if current < end || start + 1 >= heights.len() {
            return (start, end.max(start + 1).min(heights.len()));
        }
        start += 1;
    }
}
