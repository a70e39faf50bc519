//! Page-load session check.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use super::token::TokenClaims;
use crate::navigator::{Navigator, LOGIN_PAGE};
use crate::session::Session;

/// Pages reachable without a session. The empty name is the site root.
pub const PUBLIC_PAGES: [&str; 3] = ["login.html", "register.html", ""];

/// Message queued for the login page when a stored session is rejected.
pub const SESSION_EXPIRED_MESSAGE: &str = "Sessione scaduta. Effettua nuovamente il login.";

/// Outcome of a gate check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateDecision {
    /// The page does not require a session.
    Public,
    /// A live session is present.
    Authenticated,
    /// The user was sent to the login page; the caller must stop rendering.
    Redirected(RedirectReason),
}

impl GateDecision {
    pub fn allows(&self) -> bool {
        !matches!(self, GateDecision::Redirected(_))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RedirectReason {
    MissingToken,
    Expired,
    Malformed,
}

/// Decides whether the current page may render.
pub struct AuthGate {
    session: Session,
    navigator: Arc<dyn Navigator>,
    public_pages: Vec<String>,
}

impl AuthGate {
    pub fn new(session: Session, navigator: Arc<dyn Navigator>) -> Self {
        Self {
            session,
            navigator,
            public_pages: PUBLIC_PAGES.iter().map(|p| p.to_string()).collect(),
        }
    }

    /// Replace the public allow-list.
    pub fn with_public_pages<I, S>(mut self, pages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.public_pages = pages.into_iter().map(Into::into).collect();
        self
    }

    pub fn is_public(&self, page: &str) -> bool {
        self.public_pages.iter().any(|p| p == page)
    }

    /// Check the session for the page at `path` against the current time.
    pub fn check(&self, path: &str) -> GateDecision {
        self.check_at(path, Utc::now())
    }

    pub fn check_at(&self, path: &str, now: DateTime<Utc>) -> GateDecision {
        let page = current_page(path);
        if self.is_public(page) {
            return GateDecision::Public;
        }

        let Some(token) = self.session.token() else {
            tracing::info!("No session for {}, redirecting to login", page);
            self.navigator.navigate(LOGIN_PAGE);
            return GateDecision::Redirected(RedirectReason::MissingToken);
        };

        match TokenClaims::decode(&token) {
            Ok(claims) if !claims.is_expired_at(now) => GateDecision::Authenticated,
            Ok(_) => {
                tracing::info!("Session expired on {}, redirecting to login", page);
                self.reject(RedirectReason::Expired)
            }
            Err(e) => {
                tracing::warn!("Stored token rejected on {}: {}", page, e);
                self.reject(RedirectReason::Malformed)
            }
        }
    }

    fn reject(&self, reason: RedirectReason) -> GateDecision {
        if let Err(e) = self.session.clear() {
            tracing::error!("Failed to clear session: {}", e);
        }
        if let Err(e) = self.session.stash_message(SESSION_EXPIRED_MESSAGE) {
            tracing::error!("Failed to queue session message: {}", e);
        }
        self.navigator.navigate(LOGIN_PAGE);
        GateDecision::Redirected(reason)
    }
}

/// Last segment of a URL path, ignoring any query string or fragment.
pub fn current_page(path: &str) -> &str {
    let path = path.split(['?', '#']).next().unwrap_or_default();
    path.rsplit('/').next().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::token::unsigned_token;
    use crate::navigator::HistoryNavigator;
    use chrono::TimeZone;
    use serde_json::json;
    use studybuddy_common::UserSummary;

    const NOW: i64 = 1_700_000_000;

    fn setup(token: Option<&str>) -> (AuthGate, Session, Arc<HistoryNavigator>) {
        let session = Session::in_memory();
        if let Some(token) = token {
            session
                .establish(token, &UserSummary::new("Mario", "Rossi", "m@r.it"))
                .unwrap();
        }
        let nav = Arc::new(HistoryNavigator::new());
        let gate = AuthGate::new(session.clone(), nav.clone());
        (gate, session, nav)
    }

    fn now() -> DateTime<Utc> {
        Utc.timestamp_opt(NOW, 0).unwrap()
    }

    #[test]
    fn test_current_page() {
        assert_eq!(current_page("/app/quiz.html"), "quiz.html");
        assert_eq!(current_page("/quiz.html?deck=3#top"), "quiz.html");
        assert_eq!(current_page("/"), "");
        assert_eq!(current_page(""), "");
        assert_eq!(current_page("index.html"), "index.html");
    }

    #[test]
    fn test_public_pages_never_redirect() {
        let expired = unsigned_token(&json!({"exp": NOW - 10}));
        for token in [None, Some("garbage"), Some(expired.as_str())] {
            let (gate, session, nav) = setup(token);
            for path in ["/login.html", "/register.html", "/", ""] {
                assert_eq!(gate.check_at(path, now()), GateDecision::Public);
            }
            assert!(nav.history().is_empty());
            assert_eq!(session.token().is_some(), token.is_some());
        }
    }

    #[test]
    fn test_missing_token_redirects_without_message() {
        let (gate, session, nav) = setup(None);
        let decision = gate.check_at("/index.html", now());

        assert_eq!(decision, GateDecision::Redirected(RedirectReason::MissingToken));
        assert_eq!(nav.last().as_deref(), Some(LOGIN_PAGE));
        assert!(session.take_message().is_none());
    }

    #[test]
    fn test_future_exp_passes() {
        let token = unsigned_token(&json!({"exp": NOW + 3600}));
        let (gate, session, nav) = setup(Some(&token));

        assert_eq!(gate.check_at("/quiz.html", now()), GateDecision::Authenticated);
        assert!(nav.history().is_empty());
        assert!(session.user().is_some());
    }

    #[test]
    fn test_past_exp_clears_session_and_queues_message() {
        let token = unsigned_token(&json!({"exp": NOW - 1}));
        let (gate, session, nav) = setup(Some(&token));

        let decision = gate.check_at("/quiz.html", now());
        assert_eq!(decision, GateDecision::Redirected(RedirectReason::Expired));
        assert!(!decision.allows());
        assert!(session.token().is_none());
        assert!(session.user().is_none());
        assert_eq!(session.take_message().as_deref(), Some(SESSION_EXPIRED_MESSAGE));
        assert_eq!(nav.history(), vec![LOGIN_PAGE]);
    }

    #[test]
    fn test_malformed_token_treated_as_expired() {
        let (gate, session, nav) = setup(Some("not-a-jwt"));

        let decision = gate.check_at("/profilo.html", now());
        assert_eq!(decision, GateDecision::Redirected(RedirectReason::Malformed));
        assert!(session.token().is_none());
        assert!(session.user().is_none());
        assert_eq!(session.take_message().as_deref(), Some(SESSION_EXPIRED_MESSAGE));
        assert_eq!(nav.last().as_deref(), Some(LOGIN_PAGE));
    }

    #[test]
    fn test_custom_public_pages() {
        let (gate, _session, nav) = setup(None);
        let gate = gate.with_public_pages(["about.html"]);

        assert_eq!(gate.check_at("/about.html", now()), GateDecision::Public);
        assert!(!gate.check_at("/login.html", now()).allows());
        assert_eq!(nav.history().len(), 1);
    }
}
