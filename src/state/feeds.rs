//! Per-element network state: feed slots and status-check results.

use crate::api::Feed;

/// Lifecycle of the feed data behind an RSS widget.
///
/// Every RSS widget id maps to exactly one slot at any time. A fetch moves
/// the slot to `Loading`, and the outcome replaces it with `Ready` or
/// `Error`.
#[derive(Clone, Debug, PartialEq)]
pub enum FeedSlot {
    Loading,
    Error,
    Ready(Feed),
}

impl FeedSlot {
    pub fn is_loading(&self) -> bool {
        matches!(self, FeedSlot::Loading)
    }

    /// The feed when the slot holds one.
    pub fn feed(&self) -> Option<&Feed> {
        match self {
            FeedSlot::Ready(feed) => Some(feed),
            _ => None,
        }
    }
}

/// Result of the most recent reachability check for an app.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PingState {
    /// No check has completed yet.
    Unknown,
    /// The app answered with an accepted status code.
    Up(u16),
    /// The app answered with an unexpected code, or not at all.
    Down(Option<u16>),
}

impl PingState {
    pub fn is_up(&self) -> bool {
        matches!(self, PingState::Up(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fake::{Fake, Faker};

    #[test]
    fn is_loading() {
        assert!(FeedSlot::Loading.is_loading());
        assert!(!FeedSlot::Error.is_loading());
        assert!(!FeedSlot::Ready(Faker.fake()).is_loading());
    }

    #[test]
    fn feed() {
        let feed: Feed = Faker.fake();
        assert_eq!(FeedSlot::Ready(feed.clone()).feed(), Some(&feed));
        assert_eq!(FeedSlot::Loading.feed(), None);
        assert_eq!(FeedSlot::Error.feed(), None);
    }

    #[test]
    fn is_up() {
        assert!(PingState::Up(200).is_up());
        assert!(!PingState::Down(Some(503)).is_up());
        assert!(!PingState::Down(None).is_up());
        assert!(!PingState::Unknown.is_up());
    }
}
