use super::Frame;
use crate::state::State;
use crate::ui::widgets::styling;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

/// Render status widget summarizing the board.
///
pub fn status(frame: &mut Frame, size: Rect, state: &State) {
    let theme = state.get_theme();
    let block = Block::default()
        .borders(Borders::ALL)
        .title(state.get_title().to_string())
        .border_style(styling::normal_block_border_style(theme));

    let up_style = if state.up_app_count() == state.app_count() {
        Style::default().fg(theme.success.to_color())
    } else {
        Style::default().fg(theme.warning.to_color())
    };

    let lines = vec![
        Line::from(vec![
            Span::styled("Apps: ", styling::muted_text_style(theme)),
            Span::styled(
                format!("{}/{} up", state.up_app_count(), state.app_count()),
                up_style.add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  Widgets: {}", state.widget_count()),
                styling::normal_text_style(theme),
            ),
        ]),
        Line::from(vec![
            Span::styled("API: ", styling::muted_text_style(theme)),
            Span::styled(state.get_api_url(), styling::muted_text_style(theme)),
        ]),
    ];

    let paragraph = Paragraph::new(lines).block(block);
    frame.render_widget(paragraph, size);
}
