//! AI Study Buddy client.
//!
//! Session handling, the authentication gate, a bearer-token API client and
//! the page chrome (sidebar, topbar, footer) with its gamification badges.

pub mod api;
pub mod auth;
pub mod config;
pub mod error;
pub mod layout;
pub mod logging;
pub mod navigator;
pub mod session;
pub mod state;
pub mod stats;
pub mod storage;

pub use api::{ApiClient, CancellationToken};
pub use auth::{AuthGate, GateDecision};
pub use config::Config;
pub use error::{Error, Result};
pub use layout::{LayoutComposer, LayoutOptions, LayoutVariant, Page};
pub use navigator::{HistoryNavigator, Navigator};
pub use session::Session;
pub use state::{AppState, PageHandle};
pub use stats::StatsLoader;
