//! Page state and server-side rendering.
//!
//! A [`Page`] is the state behind one rendered page: its own content, the
//! chrome around it once the composer has run, and the current alert.
//! Rendering runs the [`PageShell`] component tree through `dioxus-ssr`, so
//! every change (stats arriving, the menu toggling) is a state update
//! followed by a fresh render.

use std::sync::Arc;

use dioxus::prelude::*;
use studybuddy_common::{GamificationStats, UserSummary};
use tokio::sync::RwLock;

use super::alert::{Alert, AlertKind};
use super::nav::NavItem;
use super::shell::{PageShell, PageShellProps};
use super::LayoutVariant;
use crate::auth::current_page;

/// A page shared between the composer and background loaders.
pub type SharedPage = Arc<RwLock<Page>>;

/// State of the sidebar, topbar and footer around a page.
#[derive(Debug, Clone, PartialEq)]
pub struct Chrome {
    pub title: String,
    pub variant: LayoutVariant,
    pub nav_items: Vec<NavItem>,
    pub user: Option<UserSummary>,
    /// Badge values. Defaults render as the `0` / `0` / `1` placeholders.
    pub stats: GamificationStats,
    pub sidebar_open: bool,
    pub overlay_visible: bool,
    /// Copyright year shown in the footer. `None` hides the footer.
    pub footer_year: Option<i32>,
}

impl Chrome {
    /// The highlighted navigation entries.
    pub fn active_items(&self) -> impl Iterator<Item = &NavItem> {
        self.nav_items.iter().filter(|item| item.active)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    path: String,
    content: String,
    chrome: Option<Chrome>,
    alert: Option<Alert>,
    alert_seq: u64,
}

impl Page {
    pub fn new(path: &str) -> Self {
        Self::with_content(path, "")
    }

    /// A page whose own markup is `content`.
    pub fn with_content(path: &str, content: impl Into<String>) -> Self {
        Self {
            path: path.to_string(),
            content: content.into(),
            chrome: None,
            alert: None,
            alert_seq: 0,
        }
    }

    pub fn into_shared(self) -> SharedPage {
        Arc::new(RwLock::new(self))
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// Last segment of the path, e.g. `quiz.html`.
    pub fn page(&self) -> &str {
        current_page(&self.path)
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn chrome(&self) -> Option<&Chrome> {
        self.chrome.as_ref()
    }

    pub fn chrome_mut(&mut self) -> Option<&mut Chrome> {
        self.chrome.as_mut()
    }

    pub fn set_chrome(&mut self, chrome: Chrome) {
        self.chrome = Some(chrome);
    }

    pub fn alert(&self) -> Option<&Alert> {
        self.alert.as_ref()
    }

    /// Replace the current alert. Returns a ticket for [`Page::dismiss_alert`].
    pub fn show_alert(&mut self, message: &str, kind: AlertKind) -> u64 {
        self.alert_seq += 1;
        self.alert = Some(Alert {
            message: message.to_string(),
            kind,
        });
        self.alert_seq
    }

    /// Remove the alert shown under `ticket`, unless a newer one replaced it.
    pub fn dismiss_alert(&mut self, ticket: u64) -> bool {
        if ticket != self.alert_seq || self.alert.is_none() {
            return false;
        }
        self.alert = None;
        true
    }

    /// Render the page body as HTML.
    pub fn render(&self) -> String {
        let mut dom = VirtualDom::new_with_props(PageShell, PageShellProps { page: self.clone() });
        dom.rebuild_in_place();
        format!("<body>{}</body>", dioxus_ssr::render(&dom))
    }
}
