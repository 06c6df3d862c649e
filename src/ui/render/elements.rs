use super::Frame;
use crate::board::Element;
use crate::state::{Focus, PingState, State};
use crate::ui::theme::Theme;
use crate::ui::widgets::styling;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
};

const BLOCK_TITLE: &str = "Elements";

/// Render the sidebar list of board elements.
///
pub fn elements(frame: &mut Frame, size: Rect, state: &mut State) {
    let theme = state.get_theme().clone();
    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_style(styling::normal_block_border_style(&theme));

    let list_item_style;
    if *state.current_focus() == Focus::Menu {
        list_item_style = styling::active_list_item_style(&theme);
        block = block
            .border_style(styling::active_block_border_style(&theme))
            .title(Span::styled(
                BLOCK_TITLE,
                styling::active_block_title_style(),
            ));
    } else {
        list_item_style = styling::current_list_item_style(&theme);
        block = block.title(BLOCK_TITLE);
    }

    let items: Vec<ListItem> = state
        .sidebar_elements()
        .iter()
        .map(|element| element_item(element, state, &theme))
        .collect();

    if items.is_empty() {
        let list = List::new(vec![ListItem::new("Press a to add an element")])
            .style(styling::muted_text_style(&theme))
            .block(block);
        frame.render_widget(list, size);
        return;
    }

    let list = List::new(items)
        .style(styling::normal_text_style(&theme))
        .highlight_style(list_item_style)
        .block(block);

    frame.render_stateful_widget(list, size, state.get_elements_list_state());
}

/// Build the list entry for one sidebar element.
///
fn element_item(element: &Element, state: &State, theme: &Theme) -> ListItem<'static> {
    match element {
        Element::App(app) => {
            let icon_color = match state.get_ping_state(&app.id) {
                PingState::Up(_) => theme.success.to_color(),
                PingState::Down(_) => theme.error.to_color(),
                PingState::Unknown => theme.text_muted.to_color(),
            };
            let mut spans = vec![
                Span::styled(
                    format!("{} ", app.layout.icon),
                    Style::default().fg(icon_color),
                ),
                Span::styled(app.name.clone(), styling::normal_text_style(theme)),
            ];
            if app.layout.show_url {
                spans.push(Span::styled(
                    format!(" {}", app.url),
                    styling::muted_text_style(theme),
                ));
            }
            ListItem::new(Line::from(spans))
        }
        Element::Label(label) => ListItem::new(Line::from(vec![Span::styled(
            label.text.clone(),
            styling::muted_text_style(theme).add_modifier(Modifier::ITALIC),
        )])),
        Element::Spacer(_) => ListItem::new(""),
        // Widgets render in the board pane, not the sidebar.
        Element::Widget(_) => ListItem::new(""),
    }
}
