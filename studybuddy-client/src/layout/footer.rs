//! Footer component.

use dioxus::prelude::*;

use super::{APP_NAME, UNIVERSITY};

#[component]
pub fn Footer(year: i32) -> Element {
    rsx! {
        footer { class: "app-footer",
            div { class: "footer-content",
                span { "© {year} {APP_NAME} - {UNIVERSITY}" }
                span {
                    a { href: "#", "Privacy" }
                    " · "
                    a { href: "#", "Termini" }
                    " · "
                    a { href: "#", "Contatti" }
                }
            }
        }
    }
}
