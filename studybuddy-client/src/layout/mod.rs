//! Page chrome: sidebar, topbar and footer.
//!
//! The chrome is a small dioxus component tree ([`shell::PageShell`] and the
//! components it composes) rendered to HTML with `dioxus-ssr`. Components
//! take typed view-models ([`NavItem`], [`UserSummary`], stats) as props and
//! hold no state of their own: the [`LayoutComposer`] runs the auth gate and
//! fills in a page's [`Chrome`], interactions and the stats loader update that
//! state, and the next render reflects it.
//!
//! Two markup conventions are supported, see [`LayoutVariant`].
//!
//! [`UserSummary`]: studybuddy_common::UserSummary

pub mod alert;
pub mod footer;
pub mod nav;
pub mod page;
pub mod shell;
pub mod sidebar;
pub mod toggle;
pub mod topbar;

pub use alert::{flash_alert, Alert, AlertKind, ALERT_CONTAINER_ID};
pub use nav::{active_marker, default_nav_items, mark_active, mark_current_page, NavItem};
pub use page::{Chrome, Page, SharedPage};
pub use toggle::SidebarToggle;

use std::sync::Arc;

use chrono::Datelike;
use serde::{Deserialize, Serialize};
use studybuddy_common::GamificationStats;

use crate::auth::{self, AuthGate, GateDecision};
use crate::navigator::Navigator;
use crate::session::Session;

pub const APP_NAME: &str = "AI Study Buddy";
pub const UNIVERSITY: &str = "Università Milano-Bicocca";

/// Markup convention for the sidebar.
///
/// `Composed` renders `<li class="nav-item"><a class="nav-link">` entries
/// highlighted by id and shows the sidebar with `show`. `Static` renders flat
/// `<a class="nav-item">` links highlighted by matching `href` against the
/// current page, and shows the sidebar with `open` and the overlay with
/// `active`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutVariant {
    #[default]
    Composed,
    Static,
}

impl std::str::FromStr for LayoutVariant {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "composed" => Ok(LayoutVariant::Composed),
            "static" => Ok(LayoutVariant::Static),
            _ => Err(format!("unknown layout variant: {}", s)),
        }
    }
}

/// Per-page layout options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutOptions {
    /// Shown in the topbar.
    pub page_title: String,
    /// Id of the navigation entry to highlight. Derived from the page path when unset.
    pub active_page: Option<String>,
    pub show_footer: bool,
}

impl LayoutOptions {
    pub fn new(page_title: &str) -> Self {
        Self {
            page_title: page_title.to_string(),
            ..Default::default()
        }
    }

    pub fn active(mut self, id: &str) -> Self {
        self.active_page = Some(id.to_string());
        self
    }

    pub fn without_footer(mut self) -> Self {
        self.show_footer = false;
        self
    }
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            page_title: String::new(),
            active_page: None,
            show_footer: true,
        }
    }
}

/// Something the user can do with the chrome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    ToggleMenu,
    CloseOverlay,
    Logout,
    Navigate(String),
}

/// Renders the chrome into pages and reacts to clicks on it.
pub struct LayoutComposer {
    session: Session,
    navigator: Arc<dyn Navigator>,
    gate: AuthGate,
    variant: LayoutVariant,
    nav_items: Vec<NavItem>,
}

impl LayoutComposer {
    pub fn new(session: Session, navigator: Arc<dyn Navigator>, variant: LayoutVariant) -> Self {
        let gate = AuthGate::new(session.clone(), navigator.clone());
        Self {
            session,
            navigator,
            gate,
            variant,
            nav_items: default_nav_items(),
        }
    }

    pub fn with_nav_items(mut self, items: Vec<NavItem>) -> Self {
        self.nav_items = items;
        self
    }

    pub fn gate(&self) -> &AuthGate {
        &self.gate
    }

    pub fn variant(&self) -> LayoutVariant {
        self.variant
    }

    pub fn toggle(&self) -> SidebarToggle {
        SidebarToggle::for_variant(self.variant)
    }

    /// Check the session and, if the page may render, fill in its chrome.
    ///
    /// When the gate redirects, the page is left untouched.
    pub fn init_layout(&self, page: &mut Page, options: &LayoutOptions) -> GateDecision {
        let decision = self.gate.check(page.path());
        if decision.allows() {
            self.render(page, options);
        }
        decision
    }

    /// Fill in the page's chrome without checking the session.
    ///
    /// An explicit `active_page` picks the highlighted entry by id. Otherwise
    /// `Composed` derives the id from the page name and `Static` matches each
    /// entry's `href` against the current page. Exactly one entry ends up
    /// active when any matches.
    pub fn render(&self, page: &mut Page, options: &LayoutOptions) {
        let mut nav_items = self.nav_items.clone();
        match (&options.active_page, self.variant) {
            (Some(id), _) => mark_active(&mut nav_items, id),
            (None, LayoutVariant::Composed) => mark_active(&mut nav_items, &active_marker(page.path())),
            (None, LayoutVariant::Static) => mark_current_page(&mut nav_items, page.path()),
        }

        let footer_year = options.show_footer.then(|| chrono::Local::now().year());

        page.set_chrome(Chrome {
            title: options.page_title.clone(),
            variant: self.variant,
            nav_items,
            user: self.session.user(),
            stats: GamificationStats::default(),
            sidebar_open: false,
            overlay_visible: false,
            footer_year,
        });

        tracing::debug!("Rendered {:?} layout for {}", self.variant, page.path());
    }

    /// Carry out `action` against the page.
    pub fn dispatch(&self, page: &mut Page, action: &Action) {
        match action {
            Action::ToggleMenu => self.toggle().on_menu_click(page),
            Action::CloseOverlay => self.toggle().on_overlay_click(page),
            Action::Logout => auth::logout(&self.session, self.navigator.as_ref()),
            Action::Navigate(href) => self.navigator.navigate(href),
        }
    }
}

/// `base`, followed by `extra` when present.
pub(crate) fn class_list(base: &str, extra: Option<&str>) -> String {
    match extra {
        Some(extra) => format!("{} {}", base, extra),
        None => base.to_string(),
    }
}
