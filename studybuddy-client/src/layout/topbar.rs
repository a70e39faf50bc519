//! Topbar component.

use dioxus::prelude::*;
use studybuddy_common::{GamificationStats, UserSummary};

use crate::stats::format_number;

pub const MENU_BUTTON_ID: &str = "mobileMenuBtn";
pub const STREAK_ID: &str = "topbarStreak";
pub const XP_ID: &str = "topbarXp";
pub const LEVEL_ID: &str = "topbarLevel";
pub const AVATAR_ID: &str = "topbarAvatar";
pub const USER_NAME_ID: &str = "topbarUserName";

/// Page title, gamification badges and the user menu.
///
/// An unknown user shows as `?` / `Utente`; default stats show the `0`, `0`,
/// `1` placeholders.
#[component]
pub fn Topbar(title: String, user: UserSummary, stats: GamificationStats) -> Element {
    let initials = user.initials();
    let name = user.display_name();
    let streak = stats.streak();
    let xp = format_number(stats.xp());
    let level = stats.level();

    rsx! {
        header { class: "topbar",
            div { class: "topbar-left",
                button {
                    class: "mobile-menu-btn",
                    id: "{MENU_BUTTON_ID}",
                    "data-action": "toggle-menu",
                    i { class: "bi bi-list" }
                }
                h1 { class: "topbar-title", "{title}" }
            }
            div { class: "topbar-right",
                div { class: "streak-badge", title: "Giorni consecutivi di studio",
                    i { class: "bi bi-fire" }
                    span { id: "{STREAK_ID}", "{streak}" }
                }
                div { class: "xp-badge", title: "Punti esperienza",
                    i { class: "bi bi-lightning-charge-fill" }
                    span { id: "{XP_ID}", "{xp}" }
                }
                div { class: "level-badge", title: "Livello attuale",
                    i { class: "bi bi-star-fill" }
                    span {
                        "Lv."
                        span { id: "{LEVEL_ID}", "{level}" }
                    }
                }
                UserMenu { initials: initials, name: name }
            }
        }
    }
}

#[component]
fn UserMenu(initials: String, name: String) -> Element {
    rsx! {
        div { class: "dropdown",
            button {
                class: "user-menu-btn dropdown-toggle",
                "data-bs-toggle": "dropdown",
                div { class: "user-avatar", id: "{AVATAR_ID}", "{initials}" }
                span { class: "user-name", id: "{USER_NAME_ID}", "{name}" }
            }
            ul { class: "dropdown-menu dropdown-menu-end",
                li {
                    a { class: "dropdown-item", href: "profilo.html",
                        i { class: "bi bi-person me-2" }
                        "Profilo"
                    }
                }
                li {
                    a { class: "dropdown-item", href: "leaderboard.html",
                        i { class: "bi bi-trophy me-2" }
                        "Classifica"
                    }
                }
                li { hr { class: "dropdown-divider" } }
                li {
                    a { class: "dropdown-item", href: "#", "data-action": "logout",
                        i { class: "bi bi-box-arrow-right me-2" }
                        "Logout"
                    }
                }
            }
        }
    }
}
