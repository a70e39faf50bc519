//! Session gate and token inspection.

mod gate;
mod token;

pub use gate::{current_page, AuthGate, GateDecision, RedirectReason, PUBLIC_PAGES, SESSION_EXPIRED_MESSAGE};
pub use token::TokenClaims;

use crate::navigator::{Navigator, LOGIN_PAGE};
use crate::session::Session;

/// End the session and go to the login page.
pub fn logout(session: &Session, navigator: &dyn Navigator) {
    if let Err(e) = session.clear() {
        tracing::error!("Failed to clear session on logout: {}", e);
    }
    tracing::info!("Logged out");
    navigator.navigate(LOGIN_PAGE);
}
