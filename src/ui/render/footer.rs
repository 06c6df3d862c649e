use super::Frame;
use crate::state::{Focus, State, View};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

/// Render footer widget: the current mode, its key hints, and the version.
///
pub fn footer(frame: &mut Frame, size: Rect, state: &State) {
    let theme = state.get_theme();

    // Modal modes take precedence over the focused pane.
    let (mode, mode_bg, controls_text) = if state.is_picker_open() {
        (
            "PICK:",
            theme.footer_pick.to_color(),
            " h/l: groups, j/k: entries, Enter: select, Esc: cancel",
        )
    } else if state.get_delete_confirmation().is_some() {
        (
            "DELETE:",
            theme.footer_delete.to_color(),
            " Enter: confirm delete, Esc: cancel",
        )
    } else if state.is_theme_selector_open() {
        (
            "THEME:",
            theme.footer_theme.to_color(),
            " j/k: navigate themes, Enter: select theme, Esc: cancel",
        )
    } else if state.is_field_editing_mode() {
        (
            "EDIT:",
            theme.footer_edit.to_color(),
            " Type to edit, Enter/Esc: back to fields",
        )
    } else if state.get_label_form().is_some() {
        (
            "EDIT:",
            theme.footer_edit.to_color(),
            " Type the label text, Enter: save, Esc: cancel",
        )
    } else if state.get_app_form().is_some() || state.get_widget_form().is_some() {
        (
            "EDIT:",
            theme.footer_edit.to_color(),
            " j/k: fields, Enter: edit/toggle, s: save, Esc: cancel",
        )
    } else if state.is_debug_mode() {
        ("DEBUG:", theme.footer_debug.to_color(), normal_hints(state))
    } else {
        (
            "NORMAL:",
            theme.footer_normal.to_color(),
            normal_hints(state),
        )
    };

    let controls_content = Line::from(vec![
        Span::styled(
            mode,
            Style::default()
                .fg(theme.text.to_color())
                .bg(mode_bg)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            controls_text,
            Style::default().fg(theme.warning.to_color()),
        ),
    ]);
    let controls_widget = Paragraph::new(controls_content).alignment(Alignment::Left);

    let right_content = Line::from(vec![Span::styled(
        format!(" {}", env!("CARGO_PKG_VERSION")),
        Style::default().fg(theme.secondary.to_color()),
    )]);
    let right_content_width = right_content.width();
    let right_widget = Paragraph::new(right_content).alignment(Alignment::Right);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(1),
            Constraint::Length(right_content_width.try_into().unwrap_or(0)),
        ])
        .split(size);

    frame.render_widget(controls_widget, columns[0]);
    frame.render_widget(right_widget, columns[1]);
}

/// Key hints outside of any modal, scoped to the focused pane.
fn normal_hints(state: &State) -> &'static str {
    match state.current_view() {
        View::Welcome => " a: add your first element, t: themes, q: quit",
        View::Board => match state.current_focus() {
            Focus::Menu => {
                " j/k: select, h/l: focus, Enter: copy app URL, a: add, e: edit, x: delete, r: refresh, t: themes, d: logs, q: quit"
            }
            Focus::View => {
                " j/k: items, h/l: focus, y: copy item link, a: add, e: edit, x: delete, r: refresh, q: quit"
            }
        },
    }
}
