//! Board element types.
//!
//! A board is a flat list of elements: app launcher tiles, widget tiles, and
//! static elements (labels and spacers). Elements are persisted in the
//! configuration file and rendered by the UI layer.

use fake::{Dummy, Fake};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Length of generated element identifiers.
///
const ELEMENT_ID_LEN: usize = 8;

/// Returns a fresh alphanumeric element identifier.
///
pub fn new_element_id() -> String {
    let mut rng = rand::thread_rng();
    (0..ELEMENT_ID_LEN)
        .map(|_| rng.sample(rand::distributions::Alphanumeric) as char)
        .collect()
}

/// Defines anything placeable on the board.
///
#[derive(Clone, Debug, Dummy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Element {
    App(AppLink),
    Widget(WidgetTile),
    Label(Label),
    Spacer(Spacer),
}

impl Element {
    /// Return the identifier of the element.
    ///
    pub fn id(&self) -> &str {
        match self {
            Element::App(app) => &app.id,
            Element::Widget(widget) => &widget.id,
            Element::Label(label) => &label.id,
            Element::Spacer(spacer) => &spacer.id,
        }
    }

    /// Return a short human-readable description for confirmation dialogs.
    ///
    pub fn describe(&self) -> String {
        match self {
            Element::App(app) => format!("app \"{}\"", app.name),
            Element::Widget(widget) => format!("{} widget", widget.widget.display_name()),
            Element::Label(label) => format!("label \"{}\"", label.text),
            Element::Spacer(_) => String::from("spacer"),
        }
    }
}

/// Defines the application descriptor behind an app tile.
///
#[derive(Clone, Debug, Dummy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppLink {
    pub id: String,
    pub name: String,
    pub url: String,
    #[serde(default)]
    pub behaviour: Behaviour,
    #[serde(default)]
    pub network: Network,
    #[serde(default)]
    pub layout: Layout,
}

impl AppLink {
    /// Return the descriptor used to seed the app creation modal.
    ///
    pub fn template() -> AppLink {
        AppLink {
            id: new_element_id(),
            name: String::from("New app"),
            url: String::from("http://localhost"),
            behaviour: Behaviour::default(),
            network: Network::default(),
            layout: Layout::default(),
        }
    }

    /// Return the URL to hand out when the app is launched. Falls back to
    /// the service URL when no separate launch URL is configured.
    ///
    pub fn launch_url(&self) -> &str {
        match &self.behaviour.launch_url {
            Some(url) if !url.is_empty() => url,
            _ => &self.url,
        }
    }
}

/// Defines behaviour properties of an app tile.
///
#[derive(Clone, Debug, Default, Dummy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Behaviour {
    /// URL handed to the clipboard on launch when it differs from the
    /// service URL used for status checks.
    #[serde(default)]
    pub launch_url: Option<String>,
    /// Free-form description shown in the status bar while selected.
    #[serde(default)]
    pub description: Option<String>,
}

/// Defines network properties of an app tile.
///
#[derive(Clone, Debug, Dummy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Network {
    /// Whether the app URL is pinged for a status dot.
    pub status_check: bool,
    /// HTTP status codes treated as "up".
    pub ok_status: Vec<u16>,
}

impl Default for Network {
    fn default() -> Network {
        Network {
            status_check: true,
            ok_status: vec![200],
        }
    }
}

/// Defines layout properties of an app tile.
///
#[derive(Clone, Debug, Dummy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Layout {
    /// Glyph rendered in front of the app name.
    pub icon: String,
    /// Whether the URL is rendered next to the name.
    pub show_url: bool,
}

impl Default for Layout {
    fn default() -> Layout {
        Layout {
            icon: String::from("●"),
            show_url: false,
        }
    }
}

/// Defines a widget tile: an identifier plus typed options.
///
#[derive(Clone, Debug, Dummy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WidgetTile {
    pub id: String,
    pub widget: WidgetKind,
}

/// Specify the available widget kinds and their options.
///
#[derive(Clone, Debug, Dummy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum WidgetKind {
    Rss(RssOptions),
    Clock(ClockOptions),
}

impl WidgetKind {
    /// Return the widget name shown in the picker and tile titles.
    ///
    pub fn display_name(&self) -> &'static str {
        match self {
            WidgetKind::Rss(_) => "RSS feed",
            WidgetKind::Clock(_) => "Clock",
        }
    }
}

/// Defines options for the RSS feed widget.
///
#[derive(Clone, Debug, Dummy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RssOptions {
    pub feed_url: String,
    #[serde(default = "default_refresh_minutes")]
    pub refresh_minutes: u32,
    #[serde(default = "default_max_items")]
    pub max_items: usize,
    #[serde(default = "default_sort_by_date")]
    pub sort_by_date: bool,
}

fn default_refresh_minutes() -> u32 {
    30
}

fn default_max_items() -> usize {
    12
}

fn default_sort_by_date() -> bool {
    true
}

impl Default for RssOptions {
    fn default() -> RssOptions {
        RssOptions {
            feed_url: String::new(),
            refresh_minutes: default_refresh_minutes(),
            max_items: default_max_items(),
            sort_by_date: default_sort_by_date(),
        }
    }
}

/// Defines options for the clock widget.
///
#[derive(Clone, Debug, Dummy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClockOptions {
    #[serde(default = "default_true")]
    pub military_time: bool,
    #[serde(default = "default_true")]
    pub show_date: bool,
}

fn default_true() -> bool {
    true
}

impl Default for ClockOptions {
    fn default() -> ClockOptions {
        ClockOptions {
            military_time: true,
            show_date: true,
        }
    }
}

/// Defines a static label element used to group apps.
///
#[derive(Clone, Debug, Dummy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Label {
    pub id: String,
    pub text: String,
}

/// Defines a static spacer element.
///
#[derive(Clone, Debug, Dummy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Spacer {
    pub id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn element_ids_are_alphanumeric() {
        let id = new_element_id();
        assert_eq!(id.len(), 8);
        assert!(id.chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn element_ids_are_distinct() {
        let ids: Vec<String> = (0..64).map(|_| new_element_id()).collect();
        for (i, a) in ids.iter().enumerate() {
            for b in ids.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn template_seeds_status_check_defaults() {
        let app = AppLink::template();
        assert_eq!(app.name, "New app");
        assert!(app.network.status_check);
        assert_eq!(app.network.ok_status, vec![200]);
        assert!(!app.layout.show_url);
        assert!(app.behaviour.launch_url.is_none());
    }

    #[test]
    fn launch_url_falls_back_to_service_url() {
        let mut app = AppLink::template();
        app.url = String::from("http://media.local:8096");
        assert_eq!(app.launch_url(), "http://media.local:8096");

        app.behaviour.launch_url = Some(String::from("https://media.example.com"));
        assert_eq!(app.launch_url(), "https://media.example.com");

        // An empty launch URL behaves like an unset one
        app.behaviour.launch_url = Some(String::new());
        assert_eq!(app.launch_url(), "http://media.local:8096");
    }

    #[test]
    fn app_element_round_trips_through_yaml() {
        let element = Element::App(AppLink {
            id: String::from("abc12345"),
            name: String::from("Jellyfin"),
            url: String::from("http://media.local:8096"),
            behaviour: Behaviour {
                launch_url: None,
                description: Some(String::from("Movies and shows")),
            },
            network: Network {
                status_check: true,
                ok_status: vec![200, 401],
            },
            layout: Layout {
                icon: String::from("▶"),
                show_url: true,
            },
        });

        let yaml = serde_yaml::to_string(&element).unwrap();
        let parsed: Element = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(parsed, element);
    }

    #[test]
    fn widget_element_round_trips_through_yaml() {
        let element = Element::Widget(WidgetTile {
            id: String::from("feed0001"),
            widget: WidgetKind::Rss(RssOptions {
                feed_url: String::from("https://this-week-in-rust.org/rss.xml"),
                refresh_minutes: 15,
                max_items: 6,
                sort_by_date: true,
            }),
        });

        let yaml = serde_yaml::to_string(&element).unwrap();
        let parsed: Element = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(parsed, element);
    }

    #[test]
    fn rss_options_fill_defaults_for_missing_fields() {
        let yaml = "feed_url: https://example.com/rss.xml\n";
        let options: RssOptions = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(options.refresh_minutes, 30);
        assert_eq!(options.max_items, 12);
        assert!(options.sort_by_date);
    }

    #[test]
    fn describe_names_the_element_kind() {
        let label = Element::Label(Label {
            id: new_element_id(),
            text: String::from("Media"),
        });
        assert_eq!(label.describe(), "label \"Media\"");

        let spacer = Element::Spacer(Spacer {
            id: new_element_id(),
        });
        assert_eq!(spacer.describe(), "spacer");
    }
}
