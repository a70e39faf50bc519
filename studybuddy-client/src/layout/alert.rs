//! Transient alert banners.

use std::time::Duration;

use dioxus::prelude::*;
use tokio::task::JoinHandle;

use super::page::SharedPage;

/// Id of the element alerts render into.
pub const ALERT_CONTAINER_ID: &str = "alertContainer";

/// How long an alert stays up.
pub const ALERT_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertKind {
    Error,
    Success,
}

impl AlertKind {
    fn class(&self) -> &'static str {
        match self {
            AlertKind::Error => "alert alert-error",
            AlertKind::Success => "alert alert-success",
        }
    }

    fn icon(&self) -> &'static str {
        match self {
            AlertKind::Error => "bi-exclamation-circle",
            AlertKind::Success => "bi-check-circle",
        }
    }
}

/// An alert currently shown on a page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub message: String,
    pub kind: AlertKind,
}

#[component]
pub fn AlertBanner(message: String, kind: AlertKind) -> Element {
    let class = kind.class();
    let icon = kind.icon();

    rsx! {
        div { class: "{class}",
            i { class: "bi {icon}" }
            span { "{message}" }
        }
    }
}

/// Show an alert and take it down again after [`ALERT_TIMEOUT`].
pub async fn flash_alert(page: &SharedPage, message: &str, kind: AlertKind) -> JoinHandle<()> {
    flash_alert_for(page, message, kind, ALERT_TIMEOUT).await
}

/// Show an alert and take it down again after `timeout`.
///
/// A newer alert shown in the meantime stays up.
pub async fn flash_alert_for(
    page: &SharedPage,
    message: &str,
    kind: AlertKind,
    timeout: Duration,
) -> JoinHandle<()> {
    let ticket = page.write().await.show_alert(message, kind);

    let page = page.clone();
    tokio::spawn(async move {
        tokio::time::sleep(timeout).await;
        page.write().await.dismiss_alert(ticket);
    })
}
