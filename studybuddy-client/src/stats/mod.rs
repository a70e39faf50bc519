//! Topbar gamification badges.
//!
//! The loader runs after the layout is in place and fills in the streak, XP
//! and level badges of the page's chrome once the stats arrive. It never fails loudly: any
//! error is logged and the placeholders stay.

mod format;

pub use format::format_number;

use std::sync::Arc;

use reqwest::Method;
use studybuddy_common::GamificationStats;
use tokio::task::JoinHandle;

use crate::api::{ApiClient, CancellationToken};
use crate::error::Result;
use crate::layout::{Page, SharedPage};

pub const STATS_ENDPOINT: &str = "/gamification/stats";

pub struct StatsLoader {
    api: Arc<ApiClient>,
}

impl StatsLoader {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }

    /// Fetch the current user's stats.
    ///
    /// Returns `Ok(None)` without a request when there is no token, and when
    /// the server answers with any non-success status. A 401 here leaves the
    /// session alone.
    pub async fn fetch(&self, cancel: &CancellationToken) -> Result<Option<GamificationStats>> {
        if !self.api.session().is_logged_in() {
            tracing::debug!("No token, skipping stats");
            return Ok(None);
        }

        let request = self.api.request(Method::GET, STATS_ENDPOINT);
        let response = self.api.send_unguarded(request, cancel).await?;

        if !response.status().is_success() {
            tracing::debug!("Stats request returned {}", response.status());
            return Ok(None);
        }

        let bytes = response.bytes().await?;
        Ok(Some(serde_json::from_slice(&bytes)?))
    }

    /// Fetch the stats and store them in `page`'s chrome.
    pub async fn load_into(&self, page: &SharedPage, cancel: &CancellationToken) {
        match self.fetch(cancel).await {
            Ok(Some(stats)) => {
                let mut page = page.write().await;
                if !apply_stats(&mut page, &stats) {
                    tracing::debug!("No chrome on {}, dropping stats", page.path());
                }
            }
            Ok(None) => {}
            Err(e) => tracing::error!("Error loading stats: {}", e),
        }
    }

    /// Run [`StatsLoader::load_into`] in the background.
    pub fn spawn(self: &Arc<Self>, page: SharedPage, cancel: CancellationToken) -> JoinHandle<()> {
        let loader = Arc::clone(self);
        tokio::spawn(async move {
            loader.load_into(&page, &cancel).await;
        })
    }
}

/// Show `stats` in the topbar badges. Returns `false` when the page has no chrome.
pub fn apply_stats(page: &mut Page, stats: &GamificationStats) -> bool {
    match page.chrome_mut() {
        Some(chrome) => {
            chrome.stats = stats.clone();
            true
        }
        None => false,
    }
}
