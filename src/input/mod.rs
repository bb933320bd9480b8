//! Input adapters that turn host input into explorer gestures.

#[cfg(feature = "gui")]
pub mod gui;
