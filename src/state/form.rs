//! Form state for the element creation and edit modals.
//!
//! Each modal form owns its field values as text until submit, when
//! `build` validates them and produces a board element. The `editing`
//! field carries the id of the element being edited, or `None` while
//! creating a new one.

use tui_textarea::TextArea;

use crate::board::{AppLink, ClockOptions, Label, RssOptions, WidgetKind, WidgetTile};

/// Fields of the app form, in navigation order.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum AppFormField {
    Name,
    Url,
    Icon,
    LaunchUrl,
    Description,
    StatusCheck,
    OkStatus,
    ShowUrl,
}

impl AppFormField {
    pub const ALL: [AppFormField; 8] = [
        AppFormField::Name,
        AppFormField::Url,
        AppFormField::Icon,
        AppFormField::LaunchUrl,
        AppFormField::Description,
        AppFormField::StatusCheck,
        AppFormField::OkStatus,
        AppFormField::ShowUrl,
    ];

    /// Label shown next to the field in the modal.
    pub fn label(&self) -> &'static str {
        match self {
            AppFormField::Name => "Name",
            AppFormField::Url => "URL",
            AppFormField::Icon => "Icon",
            AppFormField::LaunchUrl => "Launch URL",
            AppFormField::Description => "Description",
            AppFormField::StatusCheck => "Status check",
            AppFormField::OkStatus => "Accepted status codes",
            AppFormField::ShowUrl => "Show URL on tile",
        }
    }

    /// Whether the field is a boolean toggled in place rather than edited.
    pub fn is_toggle(&self) -> bool {
        matches!(self, AppFormField::StatusCheck | AppFormField::ShowUrl)
    }
}

/// State of the app creation and edit modal.
#[derive(Clone, Debug)]
pub struct AppForm {
    pub editing: Option<String>,
    pub name: String,
    pub url: String,
    pub icon: String,
    pub launch_url: String,
    pub description: TextArea<'static>,
    pub status_check: bool,
    pub ok_status: String,
    pub show_url: bool,
    pub field: AppFormField,
    pub error: Option<String>,
}

impl AppForm {
    /// A creation form seeded from the app template.
    pub fn from_template() -> Self {
        Self::seeded(AppLink::template(), None)
    }

    /// An edit form seeded from an existing app.
    pub fn from_app(app: &AppLink) -> Self {
        Self::seeded(app.clone(), Some(app.id.clone()))
    }

    fn seeded(app: AppLink, editing: Option<String>) -> Self {
        let description = match app.behaviour.description {
            Some(text) => TextArea::from(text.lines().map(String::from).collect::<Vec<_>>()),
            None => TextArea::default(),
        };
        AppForm {
            editing,
            name: app.name,
            url: app.url,
            icon: app.layout.icon,
            launch_url: app.behaviour.launch_url.unwrap_or_default(),
            description,
            status_check: app.network.status_check,
            ok_status: app
                .network
                .ok_status
                .iter()
                .map(|code| code.to_string())
                .collect::<Vec<_>>()
                .join(", "),
            show_url: app.layout.show_url,
            field: AppFormField::Name,
            error: None,
        }
    }

    pub fn next_field(&mut self) {
        self.field = cycle(&AppFormField::ALL, self.field, 1);
    }

    pub fn previous_field(&mut self) {
        self.field = cycle(&AppFormField::ALL, self.field, -1);
    }

    /// Appends a character to the selected text field.
    pub fn input_char(&mut self, c: char) {
        match self.field {
            AppFormField::Name => self.name.push(c),
            AppFormField::Url => self.url.push(c),
            AppFormField::Icon => self.icon.push(c),
            AppFormField::LaunchUrl => self.launch_url.push(c),
            AppFormField::OkStatus => self.ok_status.push(c),
            // The description textarea receives raw key events instead.
            AppFormField::Description => {}
            AppFormField::StatusCheck | AppFormField::ShowUrl => {}
        }
    }

    /// Removes the last character of the selected text field.
    pub fn delete_char(&mut self) {
        match self.field {
            AppFormField::Name => {
                self.name.pop();
            }
            AppFormField::Url => {
                self.url.pop();
            }
            AppFormField::Icon => {
                self.icon.pop();
            }
            AppFormField::LaunchUrl => {
                self.launch_url.pop();
            }
            AppFormField::OkStatus => {
                self.ok_status.pop();
            }
            AppFormField::Description => {}
            AppFormField::StatusCheck | AppFormField::ShowUrl => {}
        }
    }

    /// Flips the selected boolean field.
    pub fn toggle(&mut self) {
        match self.field {
            AppFormField::StatusCheck => self.status_check = !self.status_check,
            AppFormField::ShowUrl => self.show_url = !self.show_url,
            _ => {}
        }
    }

    /// Current value of the selected field, for rendering.
    pub fn field_value(&self, field: AppFormField) -> String {
        match field {
            AppFormField::Name => self.name.clone(),
            AppFormField::Url => self.url.clone(),
            AppFormField::Icon => self.icon.clone(),
            AppFormField::LaunchUrl => self.launch_url.clone(),
            AppFormField::Description => self.description.lines().join(" "),
            AppFormField::StatusCheck => checkbox(self.status_check),
            AppFormField::OkStatus => self.ok_status.clone(),
            AppFormField::ShowUrl => checkbox(self.show_url),
        }
    }

    /// Validates the form and produces an app carrying the given id.
    pub fn build(&self, id: String) -> Result<AppLink, String> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err("App name must not be empty".to_string());
        }
        let url = self.url.trim();
        if url.is_empty() {
            return Err("App URL must not be empty".to_string());
        }
        let mut app = AppLink::template();
        app.id = id;
        app.name = name.to_string();
        app.url = url.to_string();
        app.behaviour.launch_url = none_if_empty(self.launch_url.trim());
        app.behaviour.description = none_if_empty(self.description.lines().join("\n").trim());
        app.network.status_check = self.status_check;
        app.network.ok_status = parse_ok_status(&self.ok_status);
        let icon = self.icon.trim();
        if !icon.is_empty() {
            app.layout.icon = icon.to_string();
        }
        app.layout.show_url = self.show_url;
        Ok(app)
    }
}

/// Which widget variant a widget form configures.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum WidgetFormKind {
    Rss,
    Clock,
}

/// Fields of the widget form, in navigation order.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum WidgetFormField {
    FeedUrl,
    RefreshMinutes,
    MaxItems,
    SortByDate,
    MilitaryTime,
    ShowDate,
}

impl WidgetFormField {
    pub fn label(&self) -> &'static str {
        match self {
            WidgetFormField::FeedUrl => "Feed URL",
            WidgetFormField::RefreshMinutes => "Refresh interval (minutes)",
            WidgetFormField::MaxItems => "Maximum items",
            WidgetFormField::SortByDate => "Sort by publication date",
            WidgetFormField::MilitaryTime => "24-hour clock",
            WidgetFormField::ShowDate => "Show date",
        }
    }

    pub fn is_toggle(&self) -> bool {
        matches!(
            self,
            WidgetFormField::SortByDate | WidgetFormField::MilitaryTime | WidgetFormField::ShowDate
        )
    }
}

/// State of the widget creation and edit modal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WidgetForm {
    pub editing: Option<String>,
    pub kind: WidgetFormKind,
    pub feed_url: String,
    pub refresh_minutes: String,
    pub max_items: String,
    pub sort_by_date: bool,
    pub military_time: bool,
    pub show_date: bool,
    pub field: WidgetFormField,
    pub error: Option<String>,
}

impl WidgetForm {
    /// A creation form for an RSS widget with default options.
    pub fn for_rss() -> Self {
        Self::from_kind(WidgetKind::Rss(RssOptions::default()), None)
    }

    /// A creation form for a clock widget with default options.
    pub fn for_clock() -> Self {
        Self::from_kind(WidgetKind::Clock(ClockOptions::default()), None)
    }

    /// An edit form seeded from an existing widget tile.
    pub fn from_widget(tile: &WidgetTile) -> Self {
        Self::from_kind(tile.widget.clone(), Some(tile.id.clone()))
    }

    fn from_kind(widget: WidgetKind, editing: Option<String>) -> Self {
        let rss_defaults = RssOptions::default();
        let clock_defaults = ClockOptions::default();
        let mut form = WidgetForm {
            editing,
            kind: WidgetFormKind::Rss,
            feed_url: String::new(),
            refresh_minutes: rss_defaults.refresh_minutes.to_string(),
            max_items: rss_defaults.max_items.to_string(),
            sort_by_date: rss_defaults.sort_by_date,
            military_time: clock_defaults.military_time,
            show_date: clock_defaults.show_date,
            field: WidgetFormField::FeedUrl,
            error: None,
        };
        match widget {
            WidgetKind::Rss(options) => {
                form.feed_url = options.feed_url;
                form.refresh_minutes = options.refresh_minutes.to_string();
                form.max_items = options.max_items.to_string();
                form.sort_by_date = options.sort_by_date;
            }
            WidgetKind::Clock(options) => {
                form.kind = WidgetFormKind::Clock;
                form.military_time = options.military_time;
                form.show_date = options.show_date;
                form.field = WidgetFormField::MilitaryTime;
            }
        }
        form
    }

    /// Fields shown for the form's widget kind, in navigation order.
    pub fn fields(&self) -> &'static [WidgetFormField] {
        match self.kind {
            WidgetFormKind::Rss => &[
                WidgetFormField::FeedUrl,
                WidgetFormField::RefreshMinutes,
                WidgetFormField::MaxItems,
                WidgetFormField::SortByDate,
            ],
            WidgetFormKind::Clock => &[WidgetFormField::MilitaryTime, WidgetFormField::ShowDate],
        }
    }

    pub fn next_field(&mut self) {
        self.field = cycle(self.fields(), self.field, 1);
    }

    pub fn previous_field(&mut self) {
        self.field = cycle(self.fields(), self.field, -1);
    }

    pub fn input_char(&mut self, c: char) {
        match self.field {
            WidgetFormField::FeedUrl => self.feed_url.push(c),
            WidgetFormField::RefreshMinutes => self.refresh_minutes.push(c),
            WidgetFormField::MaxItems => self.max_items.push(c),
            _ => {}
        }
    }

    pub fn delete_char(&mut self) {
        match self.field {
            WidgetFormField::FeedUrl => {
                self.feed_url.pop();
            }
            WidgetFormField::RefreshMinutes => {
                self.refresh_minutes.pop();
            }
            WidgetFormField::MaxItems => {
                self.max_items.pop();
            }
            _ => {}
        }
    }

    pub fn toggle(&mut self) {
        match self.field {
            WidgetFormField::SortByDate => self.sort_by_date = !self.sort_by_date,
            WidgetFormField::MilitaryTime => self.military_time = !self.military_time,
            WidgetFormField::ShowDate => self.show_date = !self.show_date,
            _ => {}
        }
    }

    pub fn field_value(&self, field: WidgetFormField) -> String {
        match field {
            WidgetFormField::FeedUrl => self.feed_url.clone(),
            WidgetFormField::RefreshMinutes => self.refresh_minutes.clone(),
            WidgetFormField::MaxItems => self.max_items.clone(),
            WidgetFormField::SortByDate => checkbox(self.sort_by_date),
            WidgetFormField::MilitaryTime => checkbox(self.military_time),
            WidgetFormField::ShowDate => checkbox(self.show_date),
        }
    }

    /// Validates the form and produces a widget tile carrying the given id.
    ///
    /// Unparseable numeric fields fall back to the widget defaults rather
    /// than blocking submission.
    pub fn build(&self, id: String) -> Result<WidgetTile, String> {
        let widget = match self.kind {
            WidgetFormKind::Rss => {
                let feed_url = self.feed_url.trim();
                if feed_url.is_empty() {
                    return Err("Feed URL must not be empty".to_string());
                }
                let defaults = RssOptions::default();
                WidgetKind::Rss(RssOptions {
                    feed_url: feed_url.to_string(),
                    refresh_minutes: self
                        .refresh_minutes
                        .trim()
                        .parse()
                        .unwrap_or(defaults.refresh_minutes),
                    max_items: self.max_items.trim().parse().unwrap_or(defaults.max_items),
                    sort_by_date: self.sort_by_date,
                })
            }
            WidgetFormKind::Clock => WidgetKind::Clock(ClockOptions {
                military_time: self.military_time,
                show_date: self.show_date,
            }),
        };
        Ok(WidgetTile { id, widget })
    }
}

/// State of the label creation and edit modal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LabelForm {
    pub editing: Option<String>,
    pub text: String,
    pub error: Option<String>,
}

impl LabelForm {
    pub fn new() -> Self {
        LabelForm {
            editing: None,
            text: String::new(),
            error: None,
        }
    }

    pub fn from_label(label: &Label) -> Self {
        LabelForm {
            editing: Some(label.id.clone()),
            text: label.text.clone(),
            error: None,
        }
    }

    /// Validates the form and produces a label carrying the given id.
    pub fn build(&self, id: String) -> Result<Label, String> {
        let text = self.text.trim();
        if text.is_empty() {
            return Err("Label text must not be empty".to_string());
        }
        Ok(Label {
            id,
            text: text.to_string(),
        })
    }
}

impl Default for LabelForm {
    fn default() -> Self {
        LabelForm::new()
    }
}

/// Parses a comma or space separated list of status codes.
///
/// Entries that are not valid status codes are dropped, and a list with
/// no valid entry falls back to `[200]`.
fn parse_ok_status(raw: &str) -> Vec<u16> {
    let codes: Vec<u16> = raw
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|part| !part.is_empty())
        .filter_map(|part| part.parse().ok())
        .collect();
    if codes.is_empty() {
        vec![200]
    } else {
        codes
    }
}

fn none_if_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

fn checkbox(on: bool) -> String {
    if on {
        "[x] yes".to_string()
    } else {
        "[ ] no".to_string()
    }
}

/// The field `steps` positions away from `current` within `fields`,
/// wrapping around both ends.
fn cycle<T: Copy + PartialEq>(fields: &[T], current: T, steps: i32) -> T {
    let len = fields.len() as i32;
    let index = fields
        .iter()
        .position(|field| *field == current)
        .unwrap_or(0) as i32;
    fields[((index + steps).rem_euclid(len)) as usize]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Behaviour, Element, Network};
    use fake::{Fake, Faker};

    #[test]
    fn app_form_from_template() {
        let form = AppForm::from_template();
        assert_eq!(form.name, "New app");
        assert_eq!(form.url, "http://localhost");
        assert_eq!(form.field, AppFormField::Name);
        assert!(form.editing.is_none());
        assert!(form.error.is_none());
    }

    #[test]
    fn app_form_from_app() {
        let app = AppLink {
            behaviour: Behaviour {
                launch_url: Some("http://media.local/web".to_string()),
                description: Some("Media server".to_string()),
            },
            network: Network {
                status_check: true,
                ok_status: vec![200, 301],
            },
            ..Faker.fake()
        };
        let form = AppForm::from_app(&app);
        assert_eq!(form.editing, Some(app.id.clone()));
        assert_eq!(form.name, app.name);
        assert_eq!(form.launch_url, "http://media.local/web");
        assert_eq!(form.ok_status, "200, 301");
        assert_eq!(form.description.lines().join("\n"), "Media server");
    }

    #[test]
    fn app_form_build() {
        let mut form = AppForm::from_template();
        form.name = "Jellyfin".to_string();
        form.url = "http://media.local:8096".to_string();
        form.icon = "▶".to_string();
        form.launch_url = String::new();
        form.ok_status = "200 301,308".to_string();
        form.show_url = true;

        let app = form.build("abc123".to_string()).unwrap();
        assert_eq!(app.id, "abc123");
        assert_eq!(app.name, "Jellyfin");
        assert_eq!(app.behaviour.launch_url, None);
        assert_eq!(app.network.ok_status, vec![200, 301, 308]);
        assert_eq!(app.layout.icon, "▶");
        assert!(app.layout.show_url);
    }

    #[test]
    fn app_form_build_rejects_empty_name() {
        let mut form = AppForm::from_template();
        form.name = "   ".to_string();
        let error = form.build("abc123".to_string()).unwrap_err();
        assert!(error.contains("name"));
    }

    #[test]
    fn app_form_build_rejects_empty_url() {
        let mut form = AppForm::from_template();
        form.url = String::new();
        assert!(form.build("abc123".to_string()).is_err());
    }

    #[test]
    fn app_form_field_cycle() {
        let mut form = AppForm::from_template();
        form.next_field();
        assert_eq!(form.field, AppFormField::Url);
        form.previous_field();
        form.previous_field();
        assert_eq!(form.field, AppFormField::ShowUrl);
    }

    #[test]
    fn app_form_input_char() {
        let mut form = AppForm::from_template();
        form.name.clear();
        form.input_char('h');
        form.input_char('i');
        assert_eq!(form.name, "hi");
        form.delete_char();
        assert_eq!(form.name, "h");
    }

    #[test]
    fn app_form_toggle() {
        let mut form = AppForm::from_template();
        form.field = AppFormField::ShowUrl;
        assert!(!form.show_url);
        form.toggle();
        assert!(form.show_url);
        form.field = AppFormField::Name;
        form.toggle();
        assert!(form.show_url);
    }

    #[test]
    fn widget_form_for_rss() {
        let form = WidgetForm::for_rss();
        assert_eq!(form.kind, WidgetFormKind::Rss);
        assert_eq!(form.field, WidgetFormField::FeedUrl);
        assert_eq!(form.refresh_minutes, "30");
        assert_eq!(form.max_items, "12");
        assert!(form.sort_by_date);
    }

    #[test]
    fn widget_form_from_widget() {
        let tile = WidgetTile {
            id: "w1".to_string(),
            widget: WidgetKind::Clock(ClockOptions {
                military_time: false,
                show_date: true,
            }),
        };
        let form = WidgetForm::from_widget(&tile);
        assert_eq!(form.kind, WidgetFormKind::Clock);
        assert_eq!(form.editing, Some("w1".to_string()));
        assert!(!form.military_time);
        assert_eq!(form.field, WidgetFormField::MilitaryTime);
    }

    #[test]
    fn widget_form_field_cycle_stays_within_kind() {
        let mut form = WidgetForm::for_clock();
        form.next_field();
        assert_eq!(form.field, WidgetFormField::ShowDate);
        form.next_field();
        assert_eq!(form.field, WidgetFormField::MilitaryTime);
    }

    #[test]
    fn widget_form_build_rss() {
        let mut form = WidgetForm::for_rss();
        form.feed_url = "https://news.local/rss.xml".to_string();
        form.refresh_minutes = "5".to_string();
        form.max_items = "not a number".to_string();

        let tile = form.build("w2".to_string()).unwrap();
        match tile.widget {
            WidgetKind::Rss(options) => {
                assert_eq!(options.feed_url, "https://news.local/rss.xml");
                assert_eq!(options.refresh_minutes, 5);
                assert_eq!(options.max_items, 12);
            }
            WidgetKind::Clock(_) => panic!("expected an RSS widget"),
        }
    }

    #[test]
    fn widget_form_build_rejects_empty_feed_url() {
        let mut form = WidgetForm::for_rss();
        form.feed_url = "  ".to_string();
        let error = form.build("w2".to_string()).unwrap_err();
        assert!(error.contains("Feed URL"));
    }

    #[test]
    fn label_form_build() {
        let mut form = LabelForm::new();
        form.text = "  Media  ".to_string();
        let label = form.build("l1".to_string()).unwrap();
        assert_eq!(label.text, "Media");
        assert!(LabelForm::new().build("l2".to_string()).is_err());
    }

    #[test]
    fn label_form_from_label() {
        let element: Element = Element::Label(Label {
            id: "l3".to_string(),
            text: "Network".to_string(),
        });
        if let Element::Label(label) = &element {
            let form = LabelForm::from_label(label);
            assert_eq!(form.editing, Some("l3".to_string()));
            assert_eq!(form.text, "Network");
        }
    }

    #[test]
    fn test_parse_ok_status() {
        assert_eq!(parse_ok_status("200"), vec![200]);
        assert_eq!(parse_ok_status("200, 301 308"), vec![200, 301, 308]);
        assert_eq!(parse_ok_status(""), vec![200]);
        assert_eq!(parse_ok_status("teapot"), vec![200]);
        assert_eq!(parse_ok_status("204, teapot"), vec![204]);
    }
}
