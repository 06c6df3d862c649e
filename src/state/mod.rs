//! Application state management module.
//!
//! This module contains the core state management for the application, including:
//! - Main `State` struct that holds all application data
//! - Navigation types (View, Focus, PickerGroup)
//! - Feed and status-check slots (FeedSlot, PingState)
//! - Modal form state (AppForm, WidgetForm, LabelForm)
//! - State error handling

mod error;
mod feeds;
mod form;
mod navigation;

pub use error::StateError;
pub use feeds::{FeedSlot, PingState};
pub use form::{AppForm, AppFormField, LabelForm, WidgetForm, WidgetFormField, WidgetFormKind};
pub use navigation::{Focus, PickerGroup, View};

// Re-export implementation from state_impl.rs
// State struct, methods and Default impl are in state_impl.rs
#[path = "state_impl.rs"]
mod state_impl;

// Re-export State
pub use state_impl::State;
