use crate::api::Feed;
use crate::app::NetworkEventSender;
use crate::board::{new_element_id, AppLink, Element, RssOptions, WidgetKind, WidgetTile};
use crate::events::network::Event as NetworkEvent;
use crate::ui::SPINNER_FRAME_COUNT;
use chrono::{DateTime, Duration, Utc};
use log::*;
use ratatui::layout::Rect;
use ratatui::widgets::ListState;
use std::collections::HashMap;

use super::feeds::{FeedSlot, PingState};
use super::form::{AppForm, AppFormField, LabelForm, WidgetForm};
use super::navigation::{Focus, PickerGroup, View};

/// How often app reachability is rechecked in the background.
const APP_CHECK_INTERVAL_IN_MINUTES: i64 = 5;

/// Houses data representative of application state.
///
pub struct State {
    net_sender: Option<NetworkEventSender>,
    config_save_sender: Option<crate::app::ConfigSaveSender>,
    title: String,
    api_url: String,
    elements: Vec<Element>,
    feed_slots: HashMap<String, FeedSlot>,
    last_fetch: HashMap<String, DateTime<Utc>>,
    last_app_check: Option<DateTime<Utc>>,
    ping_states: HashMap<String, PingState>,
    terminal_size: Rect,
    spinner_index: usize,
    current_focus: Focus,
    elements_list_state: ListState,
    selected_widget_index: usize,
    feed_item_index: usize,
    picker_open: bool,
    picker_group: PickerGroup,
    picker_index: usize,
    app_form: Option<AppForm>,
    widget_form: Option<WidgetForm>,
    label_form: Option<LabelForm>,
    field_editing_mode: bool, // Whether actively editing a field (vs navigating)
    delete_confirmation: Option<String>, // Id of element pending deletion confirmation
    theme_selector_open: bool,
    theme_dropdown_index: usize,
    debug_mode: bool,
    theme: crate::ui::Theme,
}

/// Defines default application state.
///
impl Default for State {
    fn default() -> State {
        State {
            net_sender: None,
            config_save_sender: None,
            title: String::new(),
            api_url: String::new(),
            elements: vec![],
            feed_slots: HashMap::new(),
            last_fetch: HashMap::new(),
            last_app_check: None,
            ping_states: HashMap::new(),
            terminal_size: Rect::default(),
            spinner_index: 0,
            current_focus: Focus::Menu,
            elements_list_state: ListState::default(),
            selected_widget_index: 0,
            feed_item_index: 0,
            picker_open: false,
            picker_group: PickerGroup::Apps,
            picker_index: 0,
            app_form: None,
            widget_form: None,
            label_form: None,
            field_editing_mode: false,
            delete_confirmation: None,
            theme_selector_open: false,
            theme_dropdown_index: 0,
            debug_mode: false,
            theme: crate::ui::Theme::default(),
        }
    }
}

impl State {
    pub fn new(
        net_sender: NetworkEventSender,
        config_save_sender: crate::app::ConfigSaveSender,
        title: String,
        api_url: String,
        elements: Vec<Element>,
        theme: crate::ui::Theme,
    ) -> Self {
        let mut state = State {
            net_sender: Some(net_sender),
            config_save_sender: Some(config_save_sender),
            title,
            api_url,
            elements,
            last_app_check: Some(Utc::now()),
            theme,
            ..State::default()
        };
        if !state.sidebar_elements().is_empty() {
            state.elements_list_state.select(Some(0));
        }
        state
    }

    /// Get the current theme.
    ///
    pub fn get_theme(&self) -> &crate::ui::Theme {
        &self.theme
    }

    /// Return the board title.
    ///
    pub fn get_title(&self) -> &str {
        &self.title
    }

    /// Return the base URL of the dashboard API.
    ///
    pub fn get_api_url(&self) -> &str {
        &self.api_url
    }

    /// Sets the terminal size.
    ///
    pub fn set_terminal_size(&mut self, size: Rect) -> &mut Self {
        self.terminal_size = size;
        self
    }

    /// Return the terminal size.
    ///
    pub fn get_terminal_size(&self) -> Rect {
        self.terminal_size
    }

    /// Advance the spinner index.
    ///
    pub fn advance_spinner_index(&mut self) -> &mut Self {
        self.spinner_index += 1;
        if self.spinner_index >= SPINNER_FRAME_COUNT {
            self.spinner_index = 0;
        }
        self
    }

    /// Return the current spinner index.
    ///
    pub fn get_spinner_index(&self) -> &usize {
        &self.spinner_index
    }

    /// Return the current focus.
    ///
    pub fn current_focus(&self) -> &Focus {
        &self.current_focus
    }

    /// Change focus to the elements sidebar.
    ///
    pub fn focus_menu(&mut self) -> &mut Self {
        self.current_focus = Focus::Menu;
        self
    }

    /// Change focus to the widget column.
    ///
    pub fn focus_view(&mut self) -> &mut Self {
        self.current_focus = Focus::View;
        self
    }

    /// Move focus to the next pane, walking through each widget tile
    /// before returning to the sidebar.
    ///
    pub fn cycle_focus(&mut self) -> &mut Self {
        let widget_count = self.widget_tiles().len();
        match self.current_focus {
            Focus::Menu => {
                if widget_count > 0 {
                    self.current_focus = Focus::View;
                    self.selected_widget_index = 0;
                    self.feed_item_index = 0;
                }
            }
            Focus::View => {
                if self.selected_widget_index + 1 < widget_count {
                    self.selected_widget_index += 1;
                    self.feed_item_index = 0;
                } else {
                    self.current_focus = Focus::Menu;
                }
            }
        }
        self
    }

    /// The view to render, derived from board contents.
    ///
    pub fn current_view(&self) -> View {
        if self.elements.is_empty() {
            View::Welcome
        } else {
            View::Board
        }
    }

    /// All board elements in board order.
    ///
    pub fn get_elements(&self) -> &Vec<Element> {
        &self.elements
    }

    /// Elements shown in the sidebar, everything except widget tiles.
    ///
    pub fn sidebar_elements(&self) -> Vec<&Element> {
        self.elements
            .iter()
            .filter(|element| !matches!(element, Element::Widget(_)))
            .collect()
    }

    /// Widget tiles in board order.
    ///
    pub fn widget_tiles(&self) -> Vec<&WidgetTile> {
        self.elements
            .iter()
            .filter_map(|element| match element {
                Element::Widget(tile) => Some(tile),
                _ => None,
            })
            .collect()
    }

    fn widget_elements(&self) -> Vec<&Element> {
        self.elements
            .iter()
            .filter(|element| matches!(element, Element::Widget(_)))
            .collect()
    }

    /// Return the sidebar list state for stateful rendering.
    ///
    pub fn get_elements_list_state(&mut self) -> &mut ListState {
        &mut self.elements_list_state
    }

    /// Return the index of the selected widget tile.
    ///
    pub fn get_selected_widget_index(&self) -> usize {
        self.selected_widget_index
    }

    /// Return the index of the selected item within the focused feed.
    ///
    pub fn get_feed_item_index(&self) -> usize {
        self.feed_item_index
    }

    /// Select the next sidebar element, wrapping at the end.
    ///
    pub fn next_sidebar_index(&mut self) -> &mut Self {
        let count = self.sidebar_elements().len();
        if count == 0 {
            self.elements_list_state.select(None);
            return self;
        }
        let current = self.elements_list_state.selected().unwrap_or(0);
        let next = if current + 1 < count { current + 1 } else { 0 };
        self.elements_list_state.select(Some(next));
        self
    }

    /// Select the previous sidebar element, wrapping at the start.
    ///
    pub fn previous_sidebar_index(&mut self) -> &mut Self {
        let count = self.sidebar_elements().len();
        if count == 0 {
            self.elements_list_state.select(None);
            return self;
        }
        let current = self.elements_list_state.selected().unwrap_or(0);
        let previous = if current > 0 { current - 1 } else { count - 1 };
        self.elements_list_state.select(Some(previous));
        self
    }

    /// Select the next item of the focused feed, wrapping at the end.
    ///
    pub fn next_feed_item(&mut self) -> &mut Self {
        let count = self.selected_feed_item_count();
        if count == 0 {
            self.feed_item_index = 0;
            return self;
        }
        self.feed_item_index = if self.feed_item_index + 1 < count {
            self.feed_item_index + 1
        } else {
            0
        };
        self
    }

    /// Select the previous item of the focused feed, wrapping at the start.
    ///
    pub fn previous_feed_item(&mut self) -> &mut Self {
        let count = self.selected_feed_item_count();
        if count == 0 {
            self.feed_item_index = 0;
            return self;
        }
        self.feed_item_index = if self.feed_item_index > 0 {
            self.feed_item_index - 1
        } else {
            count - 1
        };
        self
    }

    fn selected_feed_item_count(&self) -> usize {
        let tiles = self.widget_tiles();
        match tiles.get(self.selected_widget_index) {
            Some(tile) => match self.feed_slots.get(&tile.id) {
                Some(FeedSlot::Ready(feed)) => feed.items.len(),
                _ => 0,
            },
            None => 0,
        }
    }

    /// The element targeted by edit, delete and launch actions, depending
    /// on which pane is focused.
    ///
    pub fn selected_element(&self) -> Option<&Element> {
        match self.current_focus {
            Focus::Menu => {
                let index = self.elements_list_state.selected().unwrap_or(0);
                self.sidebar_elements().get(index).copied()
            }
            Focus::View => self
                .widget_elements()
                .get(self.selected_widget_index)
                .copied(),
        }
    }

    /// Launch URL of the selected app, if an app is selected.
    ///
    pub fn selected_launch_url(&self) -> Option<String> {
        match self.selected_element() {
            Some(Element::App(app)) => Some(app.launch_url().to_string()),
            _ => None,
        }
    }

    /// Link of the selected item within the focused feed.
    ///
    pub fn selected_feed_item_link(&self) -> Option<String> {
        let tiles = self.widget_tiles();
        let tile = tiles.get(self.selected_widget_index)?;
        match self.feed_slots.get(&tile.id) {
            Some(FeedSlot::Ready(feed)) => feed
                .items
                .get(self.feed_item_index)
                .and_then(|item| item.link.clone()),
            _ => None,
        }
    }

    /// Adds an element to the board, selects it, and kicks off its
    /// initial fetch or status check.
    ///
    pub fn insert_element(&mut self, element: Element) -> &mut Self {
        let id = element.id().to_string();
        let is_widget = matches!(element, Element::Widget(_));
        self.elements.push(element);
        if is_widget {
            self.current_focus = Focus::View;
            self.selected_widget_index = self.widget_tiles().len() - 1;
            self.feed_item_index = 0;
        } else {
            self.current_focus = Focus::Menu;
            let index = self.sidebar_elements().len() - 1;
            self.elements_list_state.select(Some(index));
        }
        self.start_element_network(&id);
        self.request_config_save();
        self
    }

    /// Replaces the element carrying the same id and refreshes its
    /// network state.
    ///
    pub fn update_element(&mut self, element: Element) -> &mut Self {
        let id = element.id().to_string();
        let position = match self.elements.iter().position(|e| e.id() == id) {
            Some(position) => position,
            None => return self,
        };
        self.elements[position] = element;
        self.start_element_network(&id);
        self.request_config_save();
        self
    }

    fn start_element_network(&mut self, id: &str) {
        let element = match self.elements.iter().find(|element| element.id() == id) {
            Some(element) => element,
            None => return,
        };
        match element {
            Element::App(app) => {
                if app.network.status_check {
                    let app_id = app.id.clone();
                    self.dispatch(NetworkEvent::CheckApp { app_id });
                } else {
                    self.ping_states.remove(id);
                }
            }
            Element::Widget(tile) => {
                if let WidgetKind::Rss(_) = tile.widget {
                    let widget_id = tile.id.clone();
                    self.feed_slots
                        .insert(widget_id.clone(), FeedSlot::Loading);
                    self.dispatch(NetworkEvent::FetchFeed { widget_id });
                }
            }
            _ => {}
        }
    }

    /// Removes an element and every piece of state keyed on its id.
    ///
    pub fn remove_element(&mut self, id: &str) -> &mut Self {
        let length = self.elements.len();
        self.elements.retain(|element| element.id() != id);
        if self.elements.len() == length {
            return self;
        }
        self.feed_slots.remove(id);
        self.last_fetch.remove(id);
        self.ping_states.remove(id);
        self.close_forms_for(id);
        self.clamp_selection();
        self.request_config_save();
        self
    }

    fn close_forms_for(&mut self, id: &str) {
        if let Some(form) = &self.app_form {
            if form.editing.as_deref() == Some(id) {
                self.app_form = None;
                self.field_editing_mode = false;
            }
        }
        if let Some(form) = &self.widget_form {
            if form.editing.as_deref() == Some(id) {
                self.widget_form = None;
                self.field_editing_mode = false;
            }
        }
        if let Some(form) = &self.label_form {
            if form.editing.as_deref() == Some(id) {
                self.label_form = None;
            }
        }
    }

    fn clamp_selection(&mut self) {
        let sidebar_count = self.sidebar_elements().len();
        if sidebar_count == 0 {
            self.elements_list_state.select(None);
        } else {
            let selected = self.elements_list_state.selected().unwrap_or(0);
            if selected >= sidebar_count {
                self.elements_list_state.select(Some(sidebar_count - 1));
            } else if self.elements_list_state.selected().is_none() {
                self.elements_list_state.select(Some(0));
            }
        }
        let widget_count = self.widget_tiles().len();
        if widget_count == 0 {
            self.selected_widget_index = 0;
            if self.current_focus == Focus::View {
                self.current_focus = Focus::Menu;
            }
        } else if self.selected_widget_index >= widget_count {
            self.selected_widget_index = widget_count - 1;
        }
        let item_count = self.selected_feed_item_count();
        if item_count == 0 {
            self.feed_item_index = 0;
        } else if self.feed_item_index >= item_count {
            self.feed_item_index = item_count - 1;
        }
    }

    fn unused_element_id(&self) -> String {
        loop {
            let id = new_element_id();
            if !self.elements.iter().any(|element| element.id() == id) {
                return id;
            }
        }
    }

    /// Whether the add-element picker is open.
    ///
    pub fn is_picker_open(&self) -> bool {
        self.picker_open
    }

    /// Open the add-element picker on its first group.
    ///
    pub fn open_picker(&mut self) -> &mut Self {
        self.picker_open = true;
        self.picker_group = PickerGroup::Apps;
        self.picker_index = 0;
        self
    }

    /// Close the add-element picker.
    ///
    pub fn close_picker(&mut self) -> &mut Self {
        self.picker_open = false;
        self
    }

    /// Return the active picker group.
    ///
    pub fn get_picker_group(&self) -> &PickerGroup {
        &self.picker_group
    }

    /// Return the selected entry index within the active picker group.
    ///
    pub fn get_picker_index(&self) -> usize {
        self.picker_index
    }

    /// Switch the picker to the group on the right, clamping the entry
    /// index to the new group.
    ///
    pub fn picker_next_group(&mut self) -> &mut Self {
        self.picker_group = self.picker_group.next();
        self.clamp_picker_index();
        self
    }

    /// Switch the picker to the group on the left, clamping the entry
    /// index to the new group.
    ///
    pub fn picker_previous_group(&mut self) -> &mut Self {
        self.picker_group = self.picker_group.previous();
        self.clamp_picker_index();
        self
    }

    fn clamp_picker_index(&mut self) {
        let count = self.picker_group.entries().len();
        if self.picker_index >= count {
            self.picker_index = count - 1;
        }
    }

    /// Select the next picker entry, wrapping at the end.
    ///
    pub fn picker_next_entry(&mut self) -> &mut Self {
        let count = self.picker_group.entries().len();
        self.picker_index = if self.picker_index + 1 < count {
            self.picker_index + 1
        } else {
            0
        };
        self
    }

    /// Select the previous picker entry, wrapping at the start.
    ///
    pub fn picker_previous_entry(&mut self) -> &mut Self {
        let count = self.picker_group.entries().len();
        self.picker_index = if self.picker_index > 0 {
            self.picker_index - 1
        } else {
            count - 1
        };
        self
    }

    /// Act on the selected picker entry, opening the matching creation
    /// form or inserting the element directly.
    ///
    pub fn picker_select(&mut self) -> &mut Self {
        let group = self.picker_group;
        let index = self.picker_index;
        self.close_picker();
        match (group, index) {
            (PickerGroup::Apps, 0) => {
                self.app_form = Some(AppForm::from_template());
                self.field_editing_mode = false;
            }
            (PickerGroup::Widgets, 0) => {
                self.widget_form = Some(WidgetForm::for_rss());
                self.field_editing_mode = false;
            }
            (PickerGroup::Widgets, 1) => {
                self.widget_form = Some(WidgetForm::for_clock());
                self.field_editing_mode = false;
            }
            (PickerGroup::Static, 0) => {
                self.label_form = Some(LabelForm::new());
            }
            (PickerGroup::Static, 1) => {
                let id = self.unused_element_id();
                self.insert_element(Element::Spacer(crate::board::Spacer { id }));
            }
            _ => {}
        }
        self
    }

    /// Return the app form, if open.
    ///
    pub fn get_app_form(&self) -> Option<&AppForm> {
        self.app_form.as_ref()
    }

    /// Return the app form for mutation, if open.
    ///
    pub fn get_app_form_mut(&mut self) -> Option<&mut AppForm> {
        self.app_form.as_mut()
    }

    /// Close the app form without applying it.
    ///
    pub fn close_app_form(&mut self) -> &mut Self {
        self.app_form = None;
        self.field_editing_mode = false;
        self
    }

    /// Validate and apply the app form, keeping it open with an error
    /// message when validation fails.
    ///
    pub fn submit_app_form(&mut self) -> &mut Self {
        let form = match &self.app_form {
            Some(form) => form.clone(),
            None => return self,
        };
        let id = match form.editing.clone() {
            Some(id) => id,
            None => self.unused_element_id(),
        };
        match form.build(id) {
            Ok(app) => {
                self.close_app_form();
                if form.editing.is_some() {
                    self.update_element(Element::App(app));
                } else {
                    self.insert_element(Element::App(app));
                }
            }
            Err(message) => {
                if let Some(form) = &mut self.app_form {
                    form.error = Some(message);
                }
            }
        }
        self
    }

    /// Return the widget form, if open.
    ///
    pub fn get_widget_form(&self) -> Option<&WidgetForm> {
        self.widget_form.as_ref()
    }

    /// Return the widget form for mutation, if open.
    ///
    pub fn get_widget_form_mut(&mut self) -> Option<&mut WidgetForm> {
        self.widget_form.as_mut()
    }

    /// Close the widget form without applying it.
    ///
    pub fn close_widget_form(&mut self) -> &mut Self {
        self.widget_form = None;
        self.field_editing_mode = false;
        self
    }

    /// Validate and apply the widget form, keeping it open with an error
    /// message when validation fails.
    ///
    pub fn submit_widget_form(&mut self) -> &mut Self {
        let form = match &self.widget_form {
            Some(form) => form.clone(),
            None => return self,
        };
        let id = match form.editing.clone() {
            Some(id) => id,
            None => self.unused_element_id(),
        };
        match form.build(id) {
            Ok(tile) => {
                self.close_widget_form();
                if form.editing.is_some() {
                    self.update_element(Element::Widget(tile));
                } else {
                    self.insert_element(Element::Widget(tile));
                }
            }
            Err(message) => {
                if let Some(form) = &mut self.widget_form {
                    form.error = Some(message);
                }
            }
        }
        self
    }

    /// Return the label form, if open.
    ///
    pub fn get_label_form(&self) -> Option<&LabelForm> {
        self.label_form.as_ref()
    }

    /// Return the label form for mutation, if open.
    ///
    pub fn get_label_form_mut(&mut self) -> Option<&mut LabelForm> {
        self.label_form.as_mut()
    }

    /// Close the label form without applying it.
    ///
    pub fn close_label_form(&mut self) -> &mut Self {
        self.label_form = None;
        self
    }

    /// Validate and apply the label form, keeping it open with an error
    /// message when validation fails.
    ///
    pub fn submit_label_form(&mut self) -> &mut Self {
        let form = match &self.label_form {
            Some(form) => form.clone(),
            None => return self,
        };
        let id = match form.editing.clone() {
            Some(id) => id,
            None => self.unused_element_id(),
        };
        match form.build(id) {
            Ok(label) => {
                self.close_label_form();
                if form.editing.is_some() {
                    self.update_element(Element::Label(label));
                } else {
                    self.insert_element(Element::Label(label));
                }
            }
            Err(message) => {
                if let Some(form) = &mut self.label_form {
                    form.error = Some(message);
                }
            }
        }
        self
    }

    /// Open the matching edit form for the selected element.
    ///
    pub fn edit_selected_element(&mut self) -> &mut Self {
        let element = match self.selected_element() {
            Some(element) => element.clone(),
            None => return self,
        };
        match element {
            Element::App(app) => {
                self.app_form = Some(AppForm::from_app(&app));
                self.field_editing_mode = false;
            }
            Element::Widget(tile) => {
                self.widget_form = Some(WidgetForm::from_widget(&tile));
                self.field_editing_mode = false;
            }
            Element::Label(label) => {
                self.label_form = Some(LabelForm::from_label(&label));
            }
            Element::Spacer(_) => {}
        }
        self
    }

    /// Whether a form field is in text entry mode rather than navigation.
    ///
    pub fn is_field_editing_mode(&self) -> bool {
        self.field_editing_mode
    }

    /// Set whether a form field is in text entry mode.
    ///
    pub fn set_field_editing_mode(&mut self, editing: bool) -> &mut Self {
        self.field_editing_mode = editing;
        self
    }

    /// Whether keystrokes should be routed verbatim to the description
    /// text area of the app form.
    ///
    pub fn is_description_editing(&self) -> bool {
        self.field_editing_mode
            && self.app_form.as_ref().map(|form| form.field) == Some(AppFormField::Description)
    }

    /// Whether typed characters belong to an open form field.
    ///
    /// The label form is a single text field and always accepts input while
    /// open; the app and widget forms only do so while a non-toggle field is
    /// in editing mode. The description text area is routed separately.
    ///
    pub fn is_form_text_entry(&self) -> bool {
        if self.label_form.is_some() {
            return true;
        }
        if !self.field_editing_mode {
            return false;
        }
        if let Some(form) = &self.app_form {
            return form.field != AppFormField::Description && !form.field.is_toggle();
        }
        if let Some(form) = &self.widget_form {
            return !form.field.is_toggle();
        }
        false
    }

    /// Append a character to whichever form field is accepting input.
    ///
    pub fn form_input_char(&mut self, c: char) -> &mut Self {
        if let Some(form) = &mut self.label_form {
            form.text.push(c);
        } else if let Some(form) = &mut self.app_form {
            form.input_char(c);
        } else if let Some(form) = &mut self.widget_form {
            form.input_char(c);
        }
        self
    }

    /// Remove the last character from whichever form field is accepting
    /// input.
    ///
    pub fn form_delete_char(&mut self) -> &mut Self {
        if let Some(form) = &mut self.label_form {
            form.text.pop();
        } else if let Some(form) = &mut self.app_form {
            form.delete_char();
        } else if let Some(form) = &mut self.widget_form {
            form.delete_char();
        }
        self
    }

    /// Whether any modal surface is open above the board.
    ///
    pub fn is_modal_open(&self) -> bool {
        self.picker_open
            || self.theme_selector_open
            || self.delete_confirmation.is_some()
            || self.app_form.is_some()
            || self.widget_form.is_some()
            || self.label_form.is_some()
    }

    /// Ask for confirmation before deleting the selected element.
    ///
    pub fn request_delete_selected(&mut self) -> &mut Self {
        let id = self
            .selected_element()
            .map(|element| element.id().to_string());
        if let Some(id) = id {
            self.delete_confirmation = Some(id);
        }
        self
    }

    /// Return the id of the element pending deletion, if any.
    ///
    pub fn get_delete_confirmation(&self) -> Option<&String> {
        self.delete_confirmation.as_ref()
    }

    /// Human description of the element pending deletion, for the
    /// confirmation modal.
    ///
    pub fn delete_confirmation_description(&self) -> Option<String> {
        let id = self.delete_confirmation.as_ref()?;
        self.elements
            .iter()
            .find(|element| element.id() == id.as_str())
            .map(|element| element.describe())
    }

    /// Delete the element pending confirmation.
    ///
    pub fn confirm_delete(&mut self) -> &mut Self {
        if let Some(id) = self.delete_confirmation.take() {
            self.remove_element(&id);
        }
        self
    }

    /// Dismiss the delete confirmation.
    ///
    pub fn cancel_delete(&mut self) -> &mut Self {
        self.delete_confirmation = None;
        self
    }

    /// Whether the theme selector modal is open.
    ///
    pub fn is_theme_selector_open(&self) -> bool {
        self.theme_selector_open
    }

    /// Open the theme selector with the current theme highlighted.
    ///
    pub fn open_theme_selector(&mut self) -> &mut Self {
        self.theme_selector_open = true;
        let available_themes = crate::ui::Theme::available_themes();
        self.theme_dropdown_index = available_themes
            .iter()
            .position(|name| name == &self.theme.name)
            .unwrap_or(0);
        self
    }

    /// Close the theme selector.
    ///
    pub fn close_theme_selector(&mut self) -> &mut Self {
        self.theme_selector_open = false;
        self
    }

    /// Return the selected index in the theme selector.
    ///
    pub fn get_theme_dropdown_index(&self) -> usize {
        self.theme_dropdown_index
    }

    /// Move the theme selector down one entry.
    ///
    pub fn next_theme_dropdown_index(&mut self) -> &mut Self {
        let count = crate::ui::Theme::available_themes().len();
        if self.theme_dropdown_index + 1 < count {
            self.theme_dropdown_index += 1;
        }
        self
    }

    /// Move the theme selector up one entry.
    ///
    pub fn previous_theme_dropdown_index(&mut self) -> &mut Self {
        if self.theme_dropdown_index > 0 {
            self.theme_dropdown_index -= 1;
        }
        self
    }

    /// Select current theme and apply it.
    ///
    pub fn select_theme(&mut self) -> &mut Self {
        let available_themes = crate::ui::Theme::available_themes();
        if let Some(theme_name) = available_themes.get(self.theme_dropdown_index) {
            if let Some(new_theme) = crate::ui::Theme::from_name(theme_name) {
                self.theme = new_theme;
                self.request_config_save();
            }
        }
        self.close_theme_selector()
    }

    /// Whether the log pane is shown.
    ///
    pub fn is_debug_mode(&self) -> bool {
        self.debug_mode
    }

    /// Toggle the log pane.
    ///
    pub fn toggle_debug_mode(&mut self) -> &mut Self {
        self.debug_mode = !self.debug_mode;
        self
    }

    /// Mark a widget's feed as loading.
    ///
    pub fn set_feed_loading(&mut self, widget_id: &str) -> &mut Self {
        if self.has_element(widget_id) {
            self.feed_slots
                .insert(widget_id.to_string(), FeedSlot::Loading);
        }
        self
    }

    /// Store a fetched feed for a widget, ignoring ids no longer on the
    /// board.
    ///
    pub fn set_feed_ready(&mut self, widget_id: &str, feed: Feed) -> &mut Self {
        if self.has_element(widget_id) {
            self.feed_slots
                .insert(widget_id.to_string(), FeedSlot::Ready(feed));
            self.last_fetch.insert(widget_id.to_string(), Utc::now());
            self.clamp_selection();
        }
        self
    }

    /// Mark a widget's feed as failed, ignoring ids no longer on the
    /// board.
    ///
    pub fn set_feed_error(&mut self, widget_id: &str) -> &mut Self {
        if self.has_element(widget_id) {
            self.feed_slots
                .insert(widget_id.to_string(), FeedSlot::Error);
            self.last_fetch.insert(widget_id.to_string(), Utc::now());
        }
        self
    }

    /// Return the feed slot of a widget.
    ///
    pub fn get_feed_slot(&self, widget_id: &str) -> Option<&FeedSlot> {
        self.feed_slots.get(widget_id)
    }

    /// Store the status check outcome for an app, ignoring ids no longer
    /// on the board.
    ///
    pub fn set_ping_state(&mut self, app_id: &str, ping: PingState) -> &mut Self {
        if self.has_element(app_id) {
            self.ping_states.insert(app_id.to_string(), ping);
        }
        self
    }

    /// Return the status check outcome for an app.
    ///
    pub fn get_ping_state(&self, app_id: &str) -> PingState {
        self.ping_states
            .get(app_id)
            .copied()
            .unwrap_or(PingState::Unknown)
    }

    fn has_element(&self, id: &str) -> bool {
        self.elements.iter().any(|element| element.id() == id)
    }

    /// RSS options of the widget carrying the given id.
    ///
    pub fn find_rss_options(&self, widget_id: &str) -> Option<RssOptions> {
        self.elements.iter().find_map(|element| match element {
            Element::Widget(tile) if tile.id == widget_id => match &tile.widget {
                WidgetKind::Rss(options) => Some(options.clone()),
                WidgetKind::Clock(_) => None,
            },
            _ => None,
        })
    }

    /// The app carrying the given id.
    ///
    pub fn find_app(&self, app_id: &str) -> Option<AppLink> {
        self.elements.iter().find_map(|element| match element {
            Element::App(app) if app.id == app_id => Some(app.clone()),
            _ => None,
        })
    }

    /// Ids of every RSS widget on the board.
    ///
    pub fn rss_widget_ids(&self) -> Vec<String> {
        self.elements
            .iter()
            .filter_map(|element| match element {
                Element::Widget(tile) => match tile.widget {
                    WidgetKind::Rss(_) => Some(tile.id.clone()),
                    WidgetKind::Clock(_) => None,
                },
                _ => None,
            })
            .collect()
    }

    /// Ids of every app with status checks enabled.
    ///
    pub fn checkable_app_ids(&self) -> Vec<String> {
        self.elements
            .iter()
            .filter_map(|element| match element {
                Element::App(app) if app.network.status_check => Some(app.id.clone()),
                _ => None,
            })
            .collect()
    }

    /// Number of apps on the board.
    ///
    pub fn app_count(&self) -> usize {
        self.elements
            .iter()
            .filter(|element| matches!(element, Element::App(_)))
            .count()
    }

    /// Number of widget tiles on the board.
    ///
    pub fn widget_count(&self) -> usize {
        self.widget_elements().len()
    }

    /// Number of apps whose last status check succeeded.
    ///
    pub fn up_app_count(&self) -> usize {
        self.ping_states.values().filter(|ping| ping.is_up()).count()
    }

    /// Re-fetch every feed and re-check every app.
    ///
    pub fn refresh_board(&mut self) -> &mut Self {
        let widget_ids = self.rss_widget_ids();
        if !widget_ids.is_empty() {
            for widget_id in &widget_ids {
                self.feed_slots
                    .insert(widget_id.clone(), FeedSlot::Loading);
            }
            self.dispatch(NetworkEvent::RefreshFeeds);
        }
        if !self.checkable_app_ids().is_empty() {
            self.last_app_check = Some(Utc::now());
            self.dispatch(NetworkEvent::CheckApps);
        }
        self
    }

    /// Advance animations and kick off any fetch that has come due.
    ///
    pub fn on_tick(&mut self) -> &mut Self {
        self.advance_spinner_index();
        let now = Utc::now();
        for widget_id in self.due_feed_refreshes(now) {
            self.set_feed_loading(&widget_id);
            self.dispatch(NetworkEvent::FetchFeed { widget_id });
        }
        if self.app_check_due(now) {
            self.last_app_check = Some(now);
            self.dispatch(NetworkEvent::CheckApps);
        }
        self
    }

    fn due_feed_refreshes(&self, now: DateTime<Utc>) -> Vec<String> {
        self.elements
            .iter()
            .filter_map(|element| {
                let tile = match element {
                    Element::Widget(tile) => tile,
                    _ => return None,
                };
                let options = match &tile.widget {
                    WidgetKind::Rss(options) if options.refresh_minutes > 0 => options,
                    _ => return None,
                };
                match self.feed_slots.get(&tile.id) {
                    // A fetch is already in flight, or the board has not
                    // been loaded yet.
                    Some(FeedSlot::Loading) | None => None,
                    Some(_) => {
                        let due = match self.last_fetch.get(&tile.id) {
                            Some(last) => {
                                now.signed_duration_since(*last)
                                    >= Duration::minutes(options.refresh_minutes as i64)
                            }
                            None => true,
                        };
                        if due {
                            Some(tile.id.clone())
                        } else {
                            None
                        }
                    }
                }
            })
            .collect()
    }

    fn app_check_due(&self, now: DateTime<Utc>) -> bool {
        if self.checkable_app_ids().is_empty() {
            return false;
        }
        match self.last_app_check {
            Some(last) => {
                now.signed_duration_since(last)
                    >= Duration::minutes(APP_CHECK_INTERVAL_IN_MINUTES)
            }
            None => false,
        }
    }

    fn request_config_save(&self) {
        if let Some(sender) = &self.config_save_sender {
            let _ = sender.send(());
        }
    }

    /// Dispatches a network event to the network thread.
    ///
    pub fn dispatch(&self, event: NetworkEvent) {
        if let Some(net_sender) = &self.net_sender {
            if let Err(err) = net_sender.send(event) {
                error!("Received error from network dispatch: {}", err);
            }
        }
    }
}
