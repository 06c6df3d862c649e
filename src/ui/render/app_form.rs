use super::{main::visible_window, Frame};
use crate::state::{AppFormField, State};
use crate::ui::widgets::styling;
use crate::ui::Theme;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

/// Render the app creation and edit form over the full main pane.
///
pub fn app_form(frame: &mut Frame, size: Rect, state: &mut State) {
    frame.render_widget(Clear, size);

    let theme = state.get_theme().clone();
    let (current_field, title, error) = match state.get_app_form() {
        Some(form) => (
            form.field,
            if form.editing.is_some() {
                "Edit App"
            } else {
                "New App"
            },
            form.error.clone(),
        ),
        None => return,
    };
    let editing_mode = state.is_field_editing_mode();

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
        .border_style(styling::active_block_border_style(&theme));
    let title_text = Paragraph::new("j/k: fields, Enter: edit/toggle, s: save, Esc: cancel")
        .block(title_block)
        .alignment(Alignment::Center);
    frame.render_widget(title_text, chunks[0]);

    // The description textarea is taller than the single-line fields.
    let fields = AppFormField::ALL;
    let heights: Vec<u16> = fields
        .iter()
        .map(|field| match field {
            AppFormField::Description => 5,
            _ => 3,
        })
        .collect();
    let current_index = fields
        .iter()
        .position(|field| *field == current_field)
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

    for (offset, field) in fields[start..end].iter().enumerate() {
        let is_selected = *field == current_field;
        let is_editing = is_selected && editing_mode;
        if *field == AppFormField::Description {
            render_description_field(frame, field_chunks[offset], state, &theme, is_selected, is_editing);
        } else {
            let value = match state.get_app_form() {
                Some(form) => form.field_value(*field),
                None => String::new(),
            };
            render_field(
                frame,
                field_chunks[offset],
                &theme,
                field.label(),
                &value,
                field.is_toggle(),
                is_selected,
                is_editing,
            );
        }
    }

    if let Some(error) = error {
        let error_line = Paragraph::new(Span::styled(
            error,
            styling::error_text_style(&theme),
        ))
        .alignment(Alignment::Center);
        frame.render_widget(error_line, chunks[2]);
    }
}

/// Render the multi-line description textarea with the form field chrome.
fn render_description_field(
    frame: &mut Frame,
    size: Rect,
    state: &mut State,
    theme: &Theme,
    is_selected: bool,
    is_editing: bool,
) {
    let block = if is_editing {
        Block::default()
            .borders(Borders::ALL)
            .title("Description [EDITING - Esc to exit]")
            .border_style(
                Style::default()
                    .fg(theme.warning.to_color())
                    .add_modifier(Modifier::BOLD),
            )
    } else if is_selected {
        Block::default()
            .borders(Borders::ALL)
            .title("Description [Press Enter to edit]")
            .border_style(styling::active_block_border_style(theme))
    } else {
        Block::default()
            .borders(Borders::ALL)
            .title("Description")
            .border_style(styling::normal_block_border_style(theme))
    };

    if let Some(form) = state.get_app_form_mut() {
        form.description.set_block(block);
        frame.render_widget(form.description.widget(), size);
    }
}

/// Render a single-line form field with selection and editing chrome.
///
/// Shared by the app, widget, and label forms.
#[allow(clippy::too_many_arguments)]
pub(super) fn render_field(
    frame: &mut Frame,
    size: Rect,
    theme: &Theme,
    label: &str,
    value: &str,
    is_toggle: bool,
    is_selected: bool,
    is_editing: bool,
) {
    let block = if is_editing {
        Block::default()
            .borders(Borders::ALL)
            .title(format!("{} [EDITING]", label))
            .border_style(
                Style::default()
                    .fg(theme.warning.to_color())
                    .add_modifier(Modifier::BOLD),
            )
    } else if is_selected {
        let hint = if is_toggle {
            "[Enter to toggle]"
        } else {
            "[Press Enter to edit]"
        };
        Block::default()
            .borders(Borders::ALL)
            .title(format!("{} {}", label, hint))
            .border_style(styling::active_block_border_style(theme))
    } else {
        Block::default()
            .borders(Borders::ALL)
            .title(label.to_string())
            .border_style(styling::normal_block_border_style(theme))
    };

    let display_value = if value.is_empty() {
        if is_editing {
            "Type to enter value...".to_string()
        } else {
            "Empty".to_string()
        }
    } else {
        value.to_string()
    };
    let value_style = if value.is_empty() {
        styling::muted_text_style(theme)
    } else {
        styling::normal_text_style(theme)
    };

    let mut spans = Vec::new();
    if is_selected {
        spans.push(Span::styled(
            "▸ ",
            Style::default().fg(theme.primary.to_color()),
        ));
    }
    spans.push(Span::styled(display_value, value_style));
    if is_editing {
        spans.push(Span::styled(
            " █",
            Style::default().fg(theme.warning.to_color()),
        ));
    }

    let paragraph = Paragraph::new(Line::from(spans)).block(block);
    frame.render_widget(paragraph, size);
}
