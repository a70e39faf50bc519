//! Sidebar components.

use dioxus::prelude::*;

use super::nav::NavItem;
use super::toggle::SidebarToggle;
use super::{class_list, LayoutVariant, APP_NAME};

pub const SIDEBAR_ID: &str = "sidebar";
pub const OVERLAY_ID: &str = "sidebarOverlay";

/// Navigation sidebar in the markup convention of `variant`.
///
/// `Composed` nests `a.nav-link` inside `li.nav-item`; `Static` uses flat
/// `a.nav-item` links.
#[component]
pub fn Sidebar(items: Vec<NavItem>, variant: LayoutVariant, open: bool) -> Element {
    let toggle = SidebarToggle::for_variant(variant);
    let class = class_list("sidebar", open.then_some(toggle.sidebar_class()));

    rsx! {
        nav { class: "{class}", id: "{SIDEBAR_ID}",
            div { class: "sidebar-header",
                i { class: "bi bi-mortarboard-fill" }
                span { "{APP_NAME}" }
            }
            if variant == LayoutVariant::Composed {
                ul { class: "sidebar-nav",
                    for item in items.iter() {
                        li { key: "{item.id}", class: "nav-item",
                            NavLink { item: item.clone(), variant: variant }
                        }
                    }
                }
            } else {
                div { class: "sidebar-nav",
                    for item in items.iter() {
                        NavLink { key: "{item.id}", item: item.clone(), variant: variant }
                    }
                }
            }
            div { class: "sidebar-footer",
                a {
                    class: "btn btn-outline-light btn-sm w-100",
                    href: "#",
                    "data-action": "logout",
                    i { class: "bi bi-box-arrow-right me-2" }
                    "Logout"
                }
            }
        }
    }
}

#[component]
fn NavLink(item: NavItem, variant: LayoutVariant) -> Element {
    let base = match variant {
        LayoutVariant::Composed => "nav-link",
        LayoutVariant::Static => "nav-item",
    };
    let class = class_list(base, item.active.then_some("active"));
    let NavItem { href, icon, label, .. } = item;

    rsx! {
        a { class: "{class}", href: "{href}",
            i { class: "bi {icon}" }
            span { "{label}" }
        }
    }
}

/// Backdrop behind the open sidebar on small screens.
#[component]
pub fn SidebarOverlay(variant: LayoutVariant, visible: bool) -> Element {
    let toggle = SidebarToggle::for_variant(variant);
    let class = class_list("sidebar-overlay", visible.then_some(toggle.overlay_class()));

    rsx! {
        div { class: "{class}", id: "{OVERLAY_ID}", "data-action": "close-overlay" }
    }
}
