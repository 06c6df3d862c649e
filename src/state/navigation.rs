//! Navigation-related state types.
//!
//! This module contains enums and types related to navigation, views, and focus.

/// Specifying the different foci.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Focus {
    Menu,
    View,
}

/// Specifying the different views.
///
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum View {
    Welcome,
    Board,
}

/// Specifying the groups of the add-element picker.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum PickerGroup {
    Apps,
    Widgets,
    Static,
}

impl PickerGroup {
    /// All groups in display order.
    pub const ALL: [PickerGroup; 3] = [PickerGroup::Apps, PickerGroup::Widgets, PickerGroup::Static];

    /// Tab label shown in the picker header.
    pub fn title(&self) -> &'static str {
        match self {
            PickerGroup::Apps => "Apps",
            PickerGroup::Widgets => "Widgets",
            PickerGroup::Static => "Static",
        }
    }

    /// Selectable entries of this group, in display order.
    ///
    /// State navigation and rendering both index into this list, so the
    /// order here is authoritative.
    pub fn entries(&self) -> &'static [&'static str] {
        match self {
            PickerGroup::Apps => &["New app..."],
            PickerGroup::Widgets => &["RSS feed", "Clock"],
            PickerGroup::Static => &["Label...", "Spacer"],
        }
    }

    /// The group to the right, wrapping around.
    pub fn next(&self) -> PickerGroup {
        match self {
            PickerGroup::Apps => PickerGroup::Widgets,
            PickerGroup::Widgets => PickerGroup::Static,
            PickerGroup::Static => PickerGroup::Apps,
        }
    }

    /// The group to the left, wrapping around.
    pub fn previous(&self) -> PickerGroup {
        match self {
            PickerGroup::Apps => PickerGroup::Static,
            PickerGroup::Widgets => PickerGroup::Apps,
            PickerGroup::Static => PickerGroup::Widgets,
        }
    }
}
