use super::{clock, rss, Frame};
use crate::board::WidgetKind;
use crate::state::{Focus, State};
use crate::ui::widgets::styling;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    widgets::{Block, Borders, Paragraph},
};

/// Render the widget column: one tile per widget, stacked vertically.
///
pub fn board(frame: &mut Frame, size: Rect, state: &mut State) {
    let tiles: Vec<_> = state
        .widget_tiles()
        .into_iter()
        .cloned()
        .collect();

    if tiles.is_empty() {
        let theme = state.get_theme();
        let block = Block::default()
            .borders(Borders::ALL)
            .title("Board")
            .border_style(styling::normal_block_border_style(theme));
        let hint = Paragraph::new("No widgets yet. Press a to add one.")
            .style(styling::muted_text_style(theme))
            .block(block)
            .alignment(Alignment::Center);
        frame.render_widget(hint, size);
        return;
    }

    let share = 100 / tiles.len() as u16;
    let constraints: Vec<Constraint> = tiles
        .iter()
        .map(|_| Constraint::Percentage(share))
        .collect();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(size);

    for (index, tile) in tiles.iter().enumerate() {
        let is_selected =
            *state.current_focus() == Focus::View && index == state.get_selected_widget_index();
        match &tile.widget {
            WidgetKind::Rss(options) => {
                rss::rss(frame, chunks[index], state, tile, options, is_selected);
            }
            WidgetKind::Clock(options) => {
                clock::clock(frame, chunks[index], state, options, is_selected);
            }
        }
    }
}
