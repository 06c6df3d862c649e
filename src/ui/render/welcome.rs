use super::Frame;
use crate::state::State;
use crate::ui::widgets::styling;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::Text,
    widgets::{Block, Borders, Paragraph},
};

pub const BANNER: &str = "
 _                              _           _
| |__   ___  _ __ ___   ___  __| | __ _ ___| |__
| '_ \\ / _ \\| '_ ` _ \\ / _ \\/ _` |/ _` / __| '_ \\
| | | | (_) | | | | | |  __/ (_| | (_| \\__ \\ | | |
|_| |_|\\___/|_| |_| |_|\\___|\\__,_|\\__,_|___/_| |_|
";

pub const CONTENT: &str = "

 Press a to add your first element.

 Apps, widgets, and static elements live side by side on the board.

 Press t to change the theme and q to quit.

";

/// Render the welcome screen shown while the board has no elements.
///
pub fn welcome(frame: &mut Frame, size: Rect, state: &State) {
    let theme = state.get_theme();

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(6), Constraint::Min(1)].as_ref())
        .margin(2)
        .split(size);

    let block = Block::default()
        .borders(Borders::ALL)
        .title("Welcome")
        .border_style(styling::active_block_border_style(theme));
    frame.render_widget(block, size);

    let mut banner = Text::from(BANNER);
    banner = banner.patch_style(styling::banner_style(theme));
    let banner_widget = Paragraph::new(banner);
    frame.render_widget(banner_widget, rows[0]);

    let mut content = Text::from(CONTENT);
    content = content.patch_style(styling::normal_text_style(theme));
    let content_widget = Paragraph::new(content);
    frame.render_widget(content_widget, rows[1]);
}
