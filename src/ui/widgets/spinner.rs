use crate::state::State;
use ratatui::{
    layout::Alignment,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

/// Braille spinner frames advanced by the tick handler.
///
pub const FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Return a paragraph showing the current spinner frame, padded so the
/// frame sits roughly centered for the given pane height.
///
pub fn widget(state: &State, height: u16) -> Paragraph<'static> {
    let frame = FRAMES[state.get_spinner_index() % FRAMES.len()];
    let style = Style::default().fg(state.get_theme().primary.to_color());
    let mut lines = vec![Line::from(""); usize::from(height / 2).saturating_sub(1)];
    lines.push(Line::from(Span::styled(frame, style)));
    Paragraph::new(lines).alignment(Alignment::Center)
}
