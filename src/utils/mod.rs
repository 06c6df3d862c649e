//! Shared helpers for text and timestamp handling.

pub mod text_processing;
pub mod time;
