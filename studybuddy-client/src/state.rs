//! Shared application state.

use std::sync::Arc;

use tokio::task::JoinHandle;

use crate::api::{ApiClient, CancellationToken};
use crate::auth::GateDecision;
use crate::config::Config;
use crate::error::Result;
use crate::layout::{LayoutComposer, LayoutOptions, Page, SharedPage};
use crate::navigator::Navigator;
use crate::session::Session;
use crate::stats::StatsLoader;
use crate::storage::FileStore;

/// Everything a page needs, wired to one session.
pub struct AppState {
    pub config: Config,
    pub session: Session,
    pub navigator: Arc<dyn Navigator>,
    pub api: Arc<ApiClient>,
    pub composer: LayoutComposer,
    pub stats: Arc<StatsLoader>,
}

impl AppState {
    pub fn new(config: Config, session: Session, navigator: Arc<dyn Navigator>) -> Result<Self> {
        let api = Arc::new(ApiClient::from_config(
            &config.api,
            session.clone(),
            navigator.clone(),
        )?);
        let composer = LayoutComposer::new(session.clone(), navigator.clone(), config.layout.variant);
        let stats = Arc::new(StatsLoader::new(api.clone()));

        Ok(Self {
            config,
            session,
            navigator,
            api,
            composer,
            stats,
        })
    }

    /// State backed by the file stores named in `config.storage`.
    pub fn from_config(config: Config, navigator: Arc<dyn Navigator>) -> Result<Self> {
        let local = FileStore::open(config.storage.local_path())?;
        let scoped = FileStore::open(config.storage.session_path())?;
        tracing::debug!("Using storage in {}", config.storage.dir.display());

        let session = Session::new(Arc::new(local), Arc::new(scoped));
        Self::new(config, session, navigator)
    }

    /// Load the page at `path`: run the gate, compose the layout and start the
    /// stats loader.
    ///
    /// The returned handle owns the page. When the gate redirected, the page
    /// has no chrome and no stats request is made.
    pub fn open_page(&self, path: &str, options: &LayoutOptions) -> PageHandle {
        let mut page = Page::new(path);
        let decision = self.composer.init_layout(&mut page, options);
        let page = page.into_shared();
        let cancel = CancellationToken::new();

        let stats_task = if decision.allows() && self.session.is_logged_in() {
            Some(self.stats.spawn(page.clone(), cancel.clone()))
        } else {
            None
        };

        PageHandle {
            page,
            decision,
            cancel,
            stats_task,
        }
    }
}

/// A loaded page and its background work.
pub struct PageHandle {
    pub page: SharedPage,
    pub decision: GateDecision,
    cancel: CancellationToken,
    stats_task: Option<JoinHandle<()>>,
}

impl PageHandle {
    pub fn is_rendered(&self) -> bool {
        self.decision.allows()
    }

    /// Wait until the stats loader has updated the page or given up.
    pub async fn wait_for_stats(&mut self) {
        if let Some(task) = self.stats_task.take() {
            if let Err(e) = task.await {
                tracing::error!("Stats task failed: {}", e);
            }
        }
    }

    /// Leave the page, cancelling any request still in flight.
    pub fn close(&self) {
        self.cancel.cancel();
    }

    pub async fn render(&self) -> String {
        self.page.read().await.render()
    }
}

impl Drop for PageHandle {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}
