//! UI Events
//!
//! Events emitted from the state layer to views for user-facing feedback.

use gpui::SharedString;

/// UI events for user feedback
#[derive(Clone, Debug, PartialEq)]
pub enum UIEvent {
    /// Display a status message
    Toast {
        /// Message to display
        message: SharedString,
        /// Whether this is an error (affects styling)
        is_error: bool,
    },
}

impl UIEvent {
    pub fn info(message: impl Into<SharedString>) -> Self {
        Self::Toast {
            message: message.into(),
            is_error: false,
        }
    }

    pub fn error(message: impl Into<SharedString>) -> Self {
        Self::Toast {
            message: message.into(),
            is_error: true,
        }
    }
}
