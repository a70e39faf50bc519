//! Root component of a rendered page.

use dioxus::prelude::*;

use super::alert::{AlertBanner, ALERT_CONTAINER_ID};
use super::footer::Footer;
use super::page::Page;
use super::sidebar::{Sidebar, SidebarOverlay};
use super::topbar::Topbar;

#[derive(Props, Clone, PartialEq)]
pub struct PageShellProps {
    pub page: Page,
}

/// The page content, wrapped in sidebar, topbar and footer once composed.
#[allow(non_snake_case)]
pub fn PageShell(props: PageShellProps) -> Element {
    let page = props.page;
    let content = page.content().to_string();
    let alert = page.alert().cloned();

    let body = rsx! {
        div { id: "{ALERT_CONTAINER_ID}",
            for alert in alert {
                AlertBanner { message: alert.message.clone(), kind: alert.kind }
            }
        }
        div { class: "page-content", dangerous_inner_html: "{content}" }
    };

    let Some(chrome) = page.chrome().cloned() else {
        return body;
    };

    rsx! {
        Sidebar {
            items: chrome.nav_items.clone(),
            variant: chrome.variant,
            open: chrome.sidebar_open,
        }
        SidebarOverlay { variant: chrome.variant, visible: chrome.overlay_visible }
        Topbar {
            title: chrome.title.clone(),
            user: chrome.user.clone().unwrap_or_default(),
            stats: chrome.stats.clone(),
        }
        {body}
        for year in chrome.footer_year {
            Footer { year: year }
        }
    }
}
