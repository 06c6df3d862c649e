use crate::api::{DashApi, Feed};
use crate::board::RssOptions;
use crate::state::{PingState, State};
use crate::utils::text_processing::strip_html;
use crate::utils::time::parse_feed_date;
use anyhow::Result;
use log::*;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Specify different network event types.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    LoadBoard,
    FetchFeed { widget_id: String },
    RefreshFeeds,
    CheckApp { app_id: String },
    CheckApps,
}

/// Specify struct for managing state with network events.
///
pub struct Handler<'a> {
    state: &'a Arc<Mutex<State>>,
    api: &'a DashApi,
}

impl<'a> Handler<'a> {
    /// Return new instance with reference to state.
    ///
    pub fn new(state: &'a Arc<Mutex<State>>, api: &'a DashApi) -> Self {
        Handler { state, api }
    }

    /// Handle network events by type.
    ///
    pub async fn handle(&mut self, event: Event) -> Result<()> {
        debug!("Processing network event '{:?}'...", event);
        match event {
            Event::LoadBoard => self.load_board().await?,
            Event::FetchFeed { widget_id } => self.fetch_feed(widget_id).await?,
            Event::RefreshFeeds => self.refresh_feeds().await?,
            Event::CheckApp { app_id } => self.check_app(app_id).await?,
            Event::CheckApps => self.check_apps().await?,
        }
        Ok(())
    }

    /// Fetch every feed and check every app on the board.
    ///
    async fn load_board(&mut self) -> Result<()> {
        info!("Loading board data...");
        self.refresh_feeds().await?;
        self.check_apps().await?;
        info!("Loaded board data.");
        Ok(())
    }

    /// Fetch the feed of every RSS widget on the board.
    ///
    async fn refresh_feeds(&mut self) -> Result<()> {
        let widget_ids;
        {
            let state = self.state.lock().await;
            widget_ids = state.rss_widget_ids();
        }
        for widget_id in widget_ids {
            self.fetch_feed(widget_id).await?;
        }
        Ok(())
    }

    /// Fetch one widget's feed and store the outcome in its slot.
    ///
    /// Endpoint and transport failures land in the slot as an error state
    /// instead of aborting the handler, so one broken feed never blocks
    /// the rest of the board.
    ///
    async fn fetch_feed(&mut self, widget_id: String) -> Result<()> {
        let options;
        {
            let mut state = self.state.lock().await;
            options = match state.find_rss_options(&widget_id) {
                Some(options) => options,
                None => {
                    warn!("Skipping feed fetch for unknown widget {}.", widget_id);
                    return Ok(());
                }
            };
            state.set_feed_loading(&widget_id);
        }
        info!(
            "Fetching feed {} for widget {}...",
            options.feed_url, widget_id
        );
        match self.api.rss_feed(&widget_id, &options.feed_url).await {
            Ok(response) => {
                let feed = if response.success { response.feed } else { None };
                match feed {
                    Some(mut feed) => {
                        prepare_feed(&mut feed, &options);
                        info!(
                            "Received {} feed items for widget {}.",
                            feed.items.len(),
                            widget_id
                        );
                        let mut state = self.state.lock().await;
                        state.set_feed_ready(&widget_id, feed);
                    }
                    None => {
                        error!("Feed endpoint reported failure for widget {}.", widget_id);
                        let mut state = self.state.lock().await;
                        state.set_feed_error(&widget_id);
                    }
                }
            }
            Err(e) => {
                error!("Failed to fetch feed for widget {}: {}", widget_id, e);
                let mut state = self.state.lock().await;
                state.set_feed_error(&widget_id);
            }
        }
        Ok(())
    }

    /// Check every app on the board with status checks enabled.
    ///
    async fn check_apps(&mut self) -> Result<()> {
        let app_ids;
        {
            let state = self.state.lock().await;
            app_ids = state.checkable_app_ids();
        }
        for app_id in app_ids {
            self.check_app(app_id).await?;
        }
        Ok(())
    }

    /// Check one app's URL and store the outcome.
    ///
    async fn check_app(&mut self, app_id: String) -> Result<()> {
        let app;
        {
            let state = self.state.lock().await;
            app = match state.find_app(&app_id) {
                Some(app) => app,
                None => {
                    warn!("Skipping status check for unknown app {}.", app_id);
                    return Ok(());
                }
            };
        }
        if !app.network.status_check {
            debug!("Status checks disabled for app '{}'.", app.name);
            return Ok(());
        }
        debug!("Checking status of app '{}' at {}...", app.name, app.url);
        let ping = match self.api.ping(&app.url).await {
            Ok(status) if app.network.ok_status.contains(&status) => PingState::Up(status),
            Ok(status) => {
                warn!(
                    "App '{}' answered with unexpected status {}.",
                    app.name, status
                );
                PingState::Down(Some(status))
            }
            Err(e) => {
                warn!("App '{}' is unreachable: {}", app.name, e);
                PingState::Down(None)
            }
        };
        let mut state = self.state.lock().await;
        state.set_ping_state(&app_id, ping);
        Ok(())
    }
}

/// Normalizes a fetched feed for display: HTML is stripped from item text
/// at ingestion, items are ordered newest first when the widget asks for
/// it, and the list is cut down to the widget's item limit.
///
fn prepare_feed(feed: &mut Feed, options: &RssOptions) {
    if let Some(title) = &feed.title {
        feed.title = Some(strip_html(title));
    }
    for item in &mut feed.items {
        if let Some(title) = &item.title {
            item.title = Some(strip_html(title));
        }
        if let Some(content) = &item.content {
            item.content = Some(strip_html(content));
        }
    }
    if options.sort_by_date {
        // Items without a parseable date sink to the end.
        feed.items.sort_by(|a, b| {
            let a_date = a.pub_date.as_deref().and_then(parse_feed_date);
            let b_date = b.pub_date.as_deref().and_then(parse_feed_date);
            b_date.cmp(&a_date)
        });
    }
    if options.max_items > 0 {
        feed.items.truncate(options.max_items);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::FeedItem;
    use crate::board::{AppLink, Element, Network, WidgetKind, WidgetTile};
    use crate::state::FeedSlot;
    use fake::{Fake, Faker};
    use httpmock::MockServer;
    use serde_json::json;
    use std::sync::mpsc;

    fn item(title: &str, pub_date: Option<&str>) -> FeedItem {
        FeedItem {
            title: Some(title.to_string()),
            pub_date: pub_date.map(String::from),
            ..FeedItem::default()
        }
    }

    fn board_state(elements: Vec<Element>) -> Arc<Mutex<State>> {
        let (net_sender, _net_receiver) = mpsc::channel();
        let (save_sender, _save_receiver) = mpsc::channel();
        // The receivers are dropped on purpose, dispatches are not under test.
        Arc::new(Mutex::new(State::new(
            net_sender,
            save_sender,
            "Dashboard".to_string(),
            "http://localhost:3000".to_string(),
            elements,
            crate::ui::Theme::default(),
        )))
    }

    fn rss_widget(id: &str, feed_url: &str) -> Element {
        Element::Widget(WidgetTile {
            id: id.to_string(),
            widget: WidgetKind::Rss(RssOptions {
                feed_url: feed_url.to_string(),
                ..RssOptions::default()
            }),
        })
    }

    #[test]
    fn prepare_feed_strips_html_and_sorts() {
        let mut feed = Feed {
            title: Some("Self-hosted &amp; proud".to_string()),
            items: vec![
                item("Older", Some("Mon, 01 Apr 2024 08:00:00 +0000")),
                item("Undated", None),
                item("<b>Newer</b>", Some("Tue, 02 Apr 2024 08:00:00 +0000")),
            ],
            ..Feed::default()
        };
        feed.items[0].content = Some("<p>Body of the older post</p>".to_string());

        prepare_feed(&mut feed, &RssOptions::default());
        assert_eq!(feed.title.as_deref(), Some("Self-hosted & proud"));
        assert_eq!(feed.items[0].title.as_deref(), Some("Newer"));
        assert_eq!(feed.items[1].title.as_deref(), Some("Older"));
        assert_eq!(feed.items[2].title.as_deref(), Some("Undated"));
        assert_eq!(
            feed.items[1].content.as_deref(),
            Some("Body of the older post")
        );
    }

    #[test]
    fn prepare_feed_honours_item_limit_and_order() {
        let mut feed = Feed {
            items: vec![
                item("First", Some("Mon, 01 Apr 2024 08:00:00 +0000")),
                item("Second", Some("Tue, 02 Apr 2024 08:00:00 +0000")),
                item("Third", Some("Wed, 03 Apr 2024 08:00:00 +0000")),
            ],
            ..Feed::default()
        };
        let options = RssOptions {
            max_items: 2,
            sort_by_date: false,
            ..RssOptions::default()
        };

        prepare_feed(&mut feed, &options);
        assert_eq!(feed.items.len(), 2);
        assert_eq!(feed.items[0].title.as_deref(), Some("First"));
    }

    #[tokio::test]
    async fn fetch_feed_stores_ready_slot() -> Result<()> {
        let server = MockServer::start();
        let mock = server
            .mock_async(|when, then| {
                when.method("GET")
                    .path("/api/widgets/rss")
                    .query_param("widget", "w1");
                then.status(200).json_body(json!({
                    "success": true,
                    "feed": {
                        "title": "Homelab news",
                        "items": [
                            {
                                "title": "<h1>Release</h1>",
                                "content": "<p>Notes</p>",
                                "link": "https://news.local/release",
                                "pubDate": "Tue, 02 Apr 2024 08:00:00 +0000"
                            }
                        ]
                    }
                }));
            })
            .await;

        let state = board_state(vec![rss_widget("w1", "https://news.local/rss.xml")]);
        let api = DashApi::new(&server.base_url(), None);
        let mut handler = Handler::new(&state, &api);
        handler.handle(Event::FetchFeed {
            widget_id: "w1".to_string(),
        })
        .await?;
        mock.assert_async().await;

        let state = state.lock().await;
        match state.get_feed_slot("w1") {
            Some(FeedSlot::Ready(feed)) => {
                assert_eq!(feed.title.as_deref(), Some("Homelab news"));
                assert_eq!(feed.items[0].title.as_deref(), Some("Release"));
                assert_eq!(feed.items[0].content.as_deref(), Some("Notes"));
            }
            other => panic!("expected a ready slot, got {:?}", other),
        }
        Ok(())
    }

    #[tokio::test]
    async fn fetch_feed_stores_error_slot_on_failure_response() -> Result<()> {
        let server = MockServer::start();
        server
            .mock_async(|when, then| {
                when.method("GET").path("/api/widgets/rss");
                then.status(200).json_body(json!({ "success": false }));
            })
            .await;

        let state = board_state(vec![rss_widget("w1", "https://news.local/rss.xml")]);
        let api = DashApi::new(&server.base_url(), None);
        let mut handler = Handler::new(&state, &api);
        handler.handle(Event::FetchFeed {
            widget_id: "w1".to_string(),
        })
        .await?;

        let state = state.lock().await;
        assert_eq!(state.get_feed_slot("w1"), Some(&FeedSlot::Error));
        Ok(())
    }

    #[tokio::test]
    async fn fetch_feed_stores_error_slot_on_transport_failure() -> Result<()> {
        // No server is listening on this address.
        let state = board_state(vec![rss_widget("w1", "https://news.local/rss.xml")]);
        let api = DashApi::new("http://127.0.0.1:9", None);
        let mut handler = Handler::new(&state, &api);
        handler.handle(Event::FetchFeed {
            widget_id: "w1".to_string(),
        })
        .await?;

        let state = state.lock().await;
        assert_eq!(state.get_feed_slot("w1"), Some(&FeedSlot::Error));
        Ok(())
    }

    #[tokio::test]
    async fn fetch_feed_ignores_unknown_widget() -> Result<()> {
        let state = board_state(vec![]);
        let api = DashApi::new("http://127.0.0.1:9", None);
        let mut handler = Handler::new(&state, &api);
        handler.handle(Event::FetchFeed {
            widget_id: "ghost".to_string(),
        })
        .await?;

        let state = state.lock().await;
        assert_eq!(state.get_feed_slot("ghost"), None);
        Ok(())
    }

    #[tokio::test]
    async fn check_app_maps_status_codes() -> Result<()> {
        let server = MockServer::start();
        server
            .mock_async(|when, then| {
                when.method("GET").path("/ok");
                then.status(204);
            })
            .await;
        server
            .mock_async(|when, then| {
                when.method("GET").path("/broken");
                then.status(503);
            })
            .await;

        let up = AppLink {
            id: "up1".to_string(),
            url: server.url("/ok"),
            network: Network {
                status_check: true,
                ok_status: vec![200, 204],
            },
            ..Faker.fake()
        };
        let down = AppLink {
            id: "down1".to_string(),
            url: server.url("/broken"),
            network: Network {
                status_check: true,
                ok_status: vec![200],
            },
            ..Faker.fake()
        };
        let state = board_state(vec![Element::App(up), Element::App(down)]);
        let api = DashApi::new(&server.base_url(), None);
        let mut handler = Handler::new(&state, &api);
        handler.handle(Event::CheckApps).await?;

        let state = state.lock().await;
        assert_eq!(state.get_ping_state("up1"), PingState::Up(204));
        assert_eq!(state.get_ping_state("down1"), PingState::Down(Some(503)));
        Ok(())
    }

    #[tokio::test]
    async fn check_app_unreachable_is_down() -> Result<()> {
        let app = AppLink {
            id: "gone1".to_string(),
            url: "http://127.0.0.1:9".to_string(),
            network: Network {
                status_check: true,
                ok_status: vec![200],
            },
            ..Faker.fake()
        };
        let state = board_state(vec![Element::App(app)]);
        let api = DashApi::new("http://127.0.0.1:9", None);
        let mut handler = Handler::new(&state, &api);
        handler.handle(Event::CheckApp {
            app_id: "gone1".to_string(),
        })
        .await?;

        let state = state.lock().await;
        assert_eq!(state.get_ping_state("gone1"), PingState::Down(None));
        Ok(())
    }
}
