use super::{app_form::render_field, main::centered_rect, Frame};
use crate::state::State;
use crate::ui::widgets::styling;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Clear, Paragraph},
};

/// Render the label creation and edit form as a small modal. The form has
/// a single text field which is always in typing mode.
///
pub fn label_form(frame: &mut Frame, size: Rect, state: &State) {
    let form = match state.get_label_form() {
        Some(form) => form.clone(),
        None => return,
    };

    let popup_area = centered_rect(50, 25, size);
    frame.render_widget(Clear, popup_area);

    let theme = state.get_theme();
    let title = if form.editing.is_some() {
        "Edit Label"
    } else {
        "New Label"
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(1),
        ])
        .split(popup_area);

    let title_block = Block::default()
        .borders(Borders::ALL)
        .title(Span::styled(
            title,
            Style::default()
                .fg(theme.info.to_color())
                .add_modifier(Modifier::BOLD),
        ))
        .border_style(styling::active_block_border_style(theme));
    let title_text = Paragraph::new("Type the label text, Enter: save, Esc: cancel")
        .block(title_block)
        .alignment(Alignment::Center);
    frame.render_widget(title_text, chunks[0]);

    render_field(frame, chunks[1], theme, "Text", &form.text, false, true, true);

    if let Some(error) = &form.error {
        let error_line = Paragraph::new(Span::styled(
            error.clone(),
            styling::error_text_style(theme),
        ))
        .alignment(Alignment::Center);
        frame.render_widget(error_line, chunks[2]);
    }
}
