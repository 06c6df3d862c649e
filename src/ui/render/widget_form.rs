use super::{app_form::render_field, main::visible_window, Frame};
use crate::state::{State, WidgetFormKind};
use crate::ui::widgets::styling;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Clear, Paragraph},
};

/// Render the widget creation and edit form over the full main pane.
///
pub fn widget_form(frame: &mut Frame, size: Rect, state: &State) {
    let form = match state.get_widget_form() {
        Some(form) => form.clone(),
        None => return,
    };

    frame.render_widget(Clear, size);

    let theme = state.get_theme();
    let title = match (form.kind, form.editing.is_some()) {
        (WidgetFormKind::Rss, false) => "New RSS Feed",
        (WidgetFormKind::Rss, true) => "Edit RSS Feed",
        (WidgetFormKind::Clock, false) => "New Clock",
        (WidgetFormKind::Clock, true) => "Edit Clock",
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(size);

    let title_block = Block::default()
        .borders(Borders::ALL)
        .title(Span::styled(
            title,
            Style::default()
                .fg(theme.info.to_color())
                .add_modifier(Modifier::BOLD),
        ))
        .border_style(styling::active_block_border_style(theme));
    let title_text = Paragraph::new("j/k: fields, Enter: edit/toggle, s: save, Esc: cancel")
        .block(title_block)
        .alignment(Alignment::Center);
    frame.render_widget(title_text, chunks[0]);

    let fields = form.fields();
    let heights: Vec<u16> = fields.iter().map(|_| 3).collect();
    let current_index = fields
        .iter()
        .position(|field| *field == form.field)
        .unwrap_or(0);
    let (start, end) = visible_window(&heights, current_index, chunks[1].height);

    let constraints: Vec<Constraint> = heights[start..end]
        .iter()
        .map(|height| Constraint::Length(*height))
        .collect();
    let field_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(chunks[1]);

    let editing_mode = state.is_field_editing_mode();
    for (offset, field) in fields[start..end].iter().enumerate() {
        let is_selected = *field == form.field;
        render_field(
            frame,
            field_chunks[offset],
            theme,
            field.label(),
            &form.field_value(*field),
            field.is_toggle(),
            is_selected,
            is_selected && editing_mode,
        );
    }

    if let Some(error) = &form.error {
        let error_line = Paragraph::new(Span::styled(
            error.clone(),
            styling::error_text_style(theme),
        ))
        .alignment(Alignment::Center);
        frame.render_widget(error_line, chunks[2]);
    }
}
