use super::Frame;
use crate::board::{RssOptions, WidgetTile};
use crate::state::{FeedSlot, State};
use crate::ui::widgets::{spinner, styling};
use crate::utils::{text_processing::clamp_line, time::humanize_pub_date};
use chrono::Utc;
use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};

/// Render an RSS feed tile. The tile body depends on the slot lifecycle:
/// a spinner while the fetch is in flight, an error hint when it failed,
/// and the item list once a feed arrived.
///
pub fn rss(
    frame: &mut Frame,
    size: Rect,
    state: &State,
    tile: &WidgetTile,
    options: &RssOptions,
    is_selected: bool,
) {
    let theme = state.get_theme();
    let slot = state.get_feed_slot(&tile.id);

    let title = match slot.and_then(|slot| slot.feed()).and_then(|feed| feed.title.clone()) {
        Some(title) => title,
        None => options.feed_url.clone(),
    };
    let block = if is_selected {
        Block::default()
            .borders(Borders::ALL)
            .title(Span::styled(title, styling::active_block_title_style()))
            .border_style(styling::active_block_border_style(theme))
    } else {
        Block::default()
            .borders(Borders::ALL)
            .title(title)
            .border_style(styling::normal_block_border_style(theme))
    };

    let feed = match slot {
        None | Some(FeedSlot::Loading) => {
            let spinner = spinner::widget(state, size.height).block(block);
            frame.render_widget(spinner, size);
            return;
        }
        Some(FeedSlot::Error) => {
            let message = Paragraph::new("Failed to load feed. Press r to retry.")
                .style(styling::error_text_style(theme))
                .block(block)
                .alignment(Alignment::Center);
            frame.render_widget(message, size);
            return;
        }
        Some(FeedSlot::Ready(feed)) => feed,
    };

    if feed.items.is_empty() {
        let message = Paragraph::new("No items in feed")
            .style(styling::muted_text_style(theme))
            .block(block)
            .alignment(Alignment::Center);
        frame.render_widget(message, size);
        return;
    }

    // Each item takes three rows: title, content preview, metadata.
    let width = usize::from(size.width.saturating_sub(4));
    let max_visible = usize::from(size.height.saturating_sub(2)) / 3;
    let selected_item = if is_selected {
        Some(state.get_feed_item_index())
    } else {
        None
    };

    // Keep the selected item inside the visible window.
    let offset = match selected_item {
        Some(selected) if feed.items.len() > max_visible => {
            let max_offset = feed.items.len() - max_visible;
            (selected as i32 - max_visible as i32 / 2)
                .max(0)
                .min(max_offset as i32) as usize
        }
        _ => 0,
    };

    let now = Utc::now();
    let items: Vec<ListItem> = feed
        .items
        .iter()
        .enumerate()
        .skip(offset)
        .take(max_visible.max(1))
        .map(|(index, item)| {
            let is_current = selected_item == Some(index);
            let marker = if is_current { "▸ " } else { "  " };
            let title_style = if is_current {
                styling::active_list_item_style(theme)
            } else {
                styling::current_list_item_style(theme)
            };

            let item_title = item.title.clone().unwrap_or_else(|| "Untitled".to_string());
            let title_line = Line::from(Span::styled(
                format!("{}{}", marker, clamp_line(&item_title, width)),
                title_style,
            ));

            let content = item.content.clone().unwrap_or_default();
            let content_line = Line::from(Span::styled(
                format!("  {}", clamp_line(&content, width)),
                styling::muted_text_style(theme),
            ));

            let mut meta = Vec::new();
            if let Some(pub_date) = &item.pub_date {
                meta.push(humanize_pub_date(pub_date, now));
            }
            if !item.categories.is_empty() {
                meta.push(item.categories.join(", "));
            }
            if item.enclosure.is_some() {
                meta.push("[img]".to_string());
            }
            let meta_line = Line::from(Span::styled(
                format!("  {}", clamp_line(&meta.join("  "), width)),
                styling::muted_text_style(theme),
            ));

            ListItem::new(vec![title_line, content_line, meta_line])
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .style(styling::normal_text_style(theme));
    frame.render_widget(list, size);
}
