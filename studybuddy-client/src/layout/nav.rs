//! Navigation view-models.

use crate::auth::current_page;

/// One entry of the sidebar navigation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavItem {
    pub href: String,
    /// Bootstrap icon class, e.g. `bi-house-door`.
    pub icon: String,
    pub label: String,
    pub id: String,
    pub active: bool,
}

impl NavItem {
    pub fn new(href: &str, icon: &str, label: &str, id: &str) -> Self {
        Self {
            href: href.to_string(),
            icon: icon.to_string(),
            label: label.to_string(),
            id: id.to_string(),
            active: false,
        }
    }
}

/// The application's fixed navigation list.
pub fn default_nav_items() -> Vec<NavItem> {
    vec![
        NavItem::new("index.html", "bi-house-door", "Dashboard", "index"),
        NavItem::new("spiegazioni.html", "bi-lightbulb", "Spiegazioni", "spiegazioni"),
        NavItem::new("quiz.html", "bi-patch-question", "Quiz", "quiz"),
        NavItem::new("flashcards.html", "bi-stack", "Flashcards", "flashcards"),
        NavItem::new("profilo.html", "bi-person-circle", "Profilo", "profilo"),
        NavItem::new("leaderboard.html", "bi-trophy", "Classifica", "leaderboard"),
    ]
}

/// Mark exactly the items whose id equals `active_id`.
pub fn mark_active(items: &mut [NavItem], active_id: &str) {
    for item in items {
        item.active = item.id == active_id;
    }
}

/// Mark exactly the items linking to the page at `path`. The site root
/// counts as `index.html`.
pub fn mark_current_page(items: &mut [NavItem], path: &str) {
    let page = match current_page(path) {
        "" => "index.html",
        page => page,
    };
    for item in items {
        item.active = item.href == page;
    }
}

/// Active marker derived from a page path: `quiz.html` becomes `quiz`, the
/// site root becomes `index`.
pub fn active_marker(path: &str) -> String {
    let marker = current_page(path).replacen(".html", "", 1);
    if marker.is_empty() {
        "index".to_string()
    } else {
        marker
    }
}
