use fake::{Dummy, Fake};
use serde::{Deserialize, Serialize};

/// Defines the envelope returned by the feed endpoint.
///
#[derive(Clone, Debug, Default, Dummy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedResponse {
    pub success: bool,
    #[serde(default)]
    pub feed: Option<Feed>,
}

/// Defines a parsed syndication feed.
///
#[derive(Clone, Debug, Default, Dummy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Feed {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub items: Vec<FeedItem>,
    #[serde(default)]
    pub copyright: Option<String>,
    #[serde(default)]
    pub pub_date: Option<String>,
    #[serde(default)]
    pub last_build_date: Option<String>,
    #[serde(default)]
    pub feed_url: Option<String>,
    #[serde(default)]
    pub image: Option<FeedImage>,
}

/// Defines a single feed item.
///
#[derive(Clone, Debug, Default, Dummy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedItem {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub pub_date: Option<String>,
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default)]
    pub enclosure: Option<FeedEnclosure>,
}

/// Defines channel art metadata.
///
#[derive(Clone, Debug, Default, Dummy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedImage {
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub link: Option<String>,
}

/// Defines an item enclosure (media attachment).
///
#[derive(Clone, Debug, Default, Dummy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedEnclosure {
    #[serde(default)]
    pub url: Option<String>,
}
