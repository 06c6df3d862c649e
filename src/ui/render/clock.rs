use super::Frame;
use crate::board::ClockOptions;
use crate::state::State;
use crate::ui::widgets::styling;
use chrono::Local;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

/// Render a clock tile with the current local time.
///
pub fn clock(frame: &mut Frame, size: Rect, state: &State, options: &ClockOptions, is_selected: bool) {
    let theme = state.get_theme();
    let now = Local::now();

    let time = if options.military_time {
        now.format("%H:%M:%S").to_string()
    } else {
        now.format("%I:%M:%S %p").to_string()
    };

    let mut lines = vec![Line::from(""); usize::from(size.height / 2).saturating_sub(1)];
    lines.push(Line::from(Span::styled(
        time,
        Style::default()
            .fg(theme.primary.to_color())
            .add_modifier(Modifier::BOLD),
    )));
    if options.show_date {
        lines.push(Line::from(Span::styled(
            now.format("%A, %B %e, %Y").to_string(),
            styling::muted_text_style(theme),
        )));
    }

    let block = if is_selected {
        Block::default()
            .borders(Borders::ALL)
            .title(Span::styled("Clock", styling::active_block_title_style()))
            .border_style(styling::active_block_border_style(theme))
    } else {
        Block::default()
            .borders(Borders::ALL)
            .title("Clock")
            .border_style(styling::normal_block_border_style(theme))
    };

    let paragraph = Paragraph::new(lines)
        .block(block)
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, size);
}
