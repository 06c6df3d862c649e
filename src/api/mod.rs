mod client;
mod error;
mod resource;

pub use error::ApiError;
pub use resource::*;

use client::Client;
use log::*;

/// Responsible for asynchronous interaction with the dashboard API including
/// decoding response data into explicitly-defined types.
///
pub struct DashApi {
    client: Client,
}

impl DashApi {
    /// Returns a new instance for the given base URL and optional API token.
    ///
    pub fn new(base_url: &str, api_token: Option<&str>) -> DashApi {
        debug!("Initializing dashboard API client for {}...", base_url);
        DashApi {
            client: Client::new(base_url, api_token),
        }
    }

    /// Returns the parsed feed for an RSS widget. The endpoint is keyed by
    /// the widget identifier and the feed URL the widget is configured with.
    ///
    pub async fn rss_feed(
        &self,
        widget_id: &str,
        feed_url: &str,
    ) -> Result<FeedResponse, ApiError> {
        debug!(
            "Requesting feed for widget {} from {}...",
            widget_id, feed_url
        );
        self.client
            .get_json::<FeedResponse>("api/widgets/rss", &[("widget", widget_id), ("url", feed_url)])
            .await
    }

    /// Pings an app URL and reports the HTTP status code. The caller decides
    /// which codes count as "up".
    ///
    pub async fn ping(&self, url: &str) -> Result<u16, ApiError> {
        debug!("Checking status of {}...", url);
        self.client.get_status(url).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use fake::uuid::UUIDv4;
    use fake::{Fake, Faker};
    use httpmock::MockServer;
    use serde_json::json;
    use uuid::Uuid;

    const FEED_URL: &str = "https://this-week-in-rust.org/rss.xml";

    #[tokio::test]
    async fn rss_feed_success() -> Result<()> {
        let token: Uuid = UUIDv4.fake();

        let server = MockServer::start();
        let mock = server
            .mock_async(|when, then| {
                when.method("GET")
                    .path("/api/widgets/rss")
                    .query_param("widget", "feed0001")
                    .query_param("url", FEED_URL)
                    .header("Authorization", &format!("Bearer {}", &token));
                then.status(200).json_body(json!({
                    "success": true,
                    "feed": {
                        "title": "This Week in Rust",
                        "feedUrl": FEED_URL,
                        "pubDate": "Wed, 14 Aug 2024 00:00:00 +0000",
                        "lastBuildDate": "Wed, 14 Aug 2024 00:00:00 +0000",
                        "copyright": null,
                        "image": { "url": "https://example.com/logo.png" },
                        "items": [
                            {
                                "title": "This Week in Rust 560",
                                "content": "<p>Hello and welcome</p>",
                                "link": "https://this-week-in-rust.org/blog/560",
                                "pubDate": "Wed, 14 Aug 2024 00:00:00 +0000",
                                "categories": ["rust", "newsletter"],
                                "enclosure": { "url": "https://example.com/560.png" }
                            }
                        ]
                    }
                }));
            })
            .await;

        let api = DashApi::new(&server.base_url(), Some(&token.to_string()));
        let response = api.rss_feed("feed0001", FEED_URL).await?;
        mock.assert_async().await;

        assert!(response.success);
        let feed = response.feed.expect("feed should be present");
        assert_eq!(feed.title.as_deref(), Some("This Week in Rust"));
        assert_eq!(feed.items.len(), 1);
        assert_eq!(feed.items[0].categories, vec!["rust", "newsletter"]);
        assert_eq!(
            feed.items[0].enclosure.as_ref().and_then(|e| e.url.as_deref()),
            Some("https://example.com/560.png")
        );
        Ok(())
    }

    #[tokio::test]
    async fn rss_feed_round_trips_generated_feeds() -> Result<()> {
        let feed: Feed = Faker.fake();

        let server = MockServer::start();
        let mock = server
            .mock_async(|when, then| {
                when.method("GET").path("/api/widgets/rss");
                then.status(200)
                    .json_body(json!({ "success": true, "feed": feed }));
            })
            .await;

        let api = DashApi::new(&server.base_url(), None);
        let response = api.rss_feed("feed0001", FEED_URL).await?;
        mock.assert_async().await;

        assert_eq!(response.feed, Some(feed));
        Ok(())
    }

    #[tokio::test]
    async fn rss_feed_unsuccessful_response_is_not_an_error() -> Result<()> {
        let server = MockServer::start();
        let mock = server
            .mock_async(|when, then| {
                when.method("GET").path("/api/widgets/rss");
                then.status(200).json_body(json!({ "success": false }));
            })
            .await;

        let api = DashApi::new(&server.base_url(), None);
        let response = api.rss_feed("feed0001", FEED_URL).await?;
        mock.assert_async().await;

        assert!(!response.success);
        assert!(response.feed.is_none());
        Ok(())
    }

    #[tokio::test]
    async fn rss_feed_error_status() {
        let server = MockServer::start();
        let mock = server
            .mock_async(|when, then| {
                when.method("GET").path("/api/widgets/rss");
                then.status(500);
            })
            .await;

        let api = DashApi::new(&server.base_url(), None);
        let result = api.rss_feed("feed0001", FEED_URL).await;
        mock.assert_async().await;

        assert!(matches!(result, Err(ApiError::Status { status: 500 })));
    }

    #[tokio::test]
    async fn rss_feed_decode_failure() {
        let server = MockServer::start();
        let mock = server
            .mock_async(|when, then| {
                when.method("GET").path("/api/widgets/rss");
                then.status(200).body("not json at all");
            })
            .await;

        let api = DashApi::new(&server.base_url(), None);
        let result = api.rss_feed("feed0001", FEED_URL).await;
        mock.assert_async().await;

        assert!(matches!(result, Err(ApiError::Decode(_))));
    }

    #[tokio::test]
    async fn ping_reports_the_status_code() -> Result<()> {
        let server = MockServer::start();
        let up = server
            .mock_async(|when, then| {
                when.method("GET").path("/up");
                then.status(204);
            })
            .await;
        let down = server
            .mock_async(|when, then| {
                when.method("GET").path("/down");
                then.status(503);
            })
            .await;

        let api = DashApi::new(&server.base_url(), None);
        // A reachable URL reports whatever code the server answered with;
        // mapping codes to up/down is the caller's job.
        assert_eq!(api.ping(&server.url("/up")).await?, 204);
        assert_eq!(api.ping(&server.url("/down")).await?, 503);
        up.assert_async().await;
        down.assert_async().await;
        Ok(())
    }
}
