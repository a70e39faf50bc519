//! Page navigation.

use std::sync::Mutex;

/// Page every authentication failure sends the user to.
pub const LOGIN_PAGE: &str = "login.html";

/// Something that can move the user to another page.
///
/// Navigation is fire-and-forget: callers that trigger it are expected to stop
/// whatever they were doing, but nothing forces them to.
pub trait Navigator: Send + Sync {
    fn navigate(&self, target: &str);
}

/// Navigator that records every target it was sent to.
///
/// Headless callers inspect the history to find out whether a redirect
/// happened while a page was being prepared.
#[derive(Debug, Default)]
pub struct HistoryNavigator {
    history: Mutex<Vec<String>>,
}

impl HistoryNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn history(&self) -> Vec<String> {
        self.history.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    pub fn last(&self) -> Option<String> {
        self.history
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .last()
            .cloned()
    }

    pub fn redirected_to(&self, target: &str) -> bool {
        self.history
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .iter()
            .any(|t| t == target)
    }
}

impl Navigator for HistoryNavigator {
    fn navigate(&self, target: &str) {
        tracing::info!("Navigating to {}", target);
        self.history
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(target.to_string());
    }
}
