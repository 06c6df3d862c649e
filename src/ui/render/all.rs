use super::{elements, footer, log, main, status, Frame};
use crate::state::State;
use ratatui::layout::{Constraint, Direction, Layout};

/// Render all widgets according to state.
///
pub fn all(frame: &mut Frame, state: &mut State) {
    let size = frame.size();

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(size);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(34), Constraint::Min(1)])
        .split(rows[0]);

    let sidebar = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(4), Constraint::Min(1)])
        .split(columns[0]);

    status(frame, sidebar[0], state);
    elements(frame, sidebar[1], state);

    if state.is_debug_mode() {
        let panes = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(1), Constraint::Length(10)])
            .split(columns[1]);
        main(frame, panes[0], state);
        log(frame, panes[1], state);
    } else {
        main(frame, columns[1], state);
    }

    footer(frame, rows[1], state);
}
