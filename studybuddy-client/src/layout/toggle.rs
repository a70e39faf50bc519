//! Mobile sidebar toggle.

use super::page::Page;
use super::LayoutVariant;

/// Pairs the menu button with the overlay.
///
/// A menu click flips the sidebar and the overlay independently; an overlay
/// click closes both. The classes they render with depend on the variant.
/// Pages without chrome are left alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SidebarToggle {
    sidebar_class: &'static str,
    overlay_class: &'static str,
}

impl SidebarToggle {
    pub fn for_variant(variant: LayoutVariant) -> Self {
        match variant {
            LayoutVariant::Composed => Self {
                sidebar_class: "show",
                overlay_class: "show",
            },
            LayoutVariant::Static => Self {
                sidebar_class: "open",
                overlay_class: "active",
            },
        }
    }

    /// Class the open sidebar carries.
    pub fn sidebar_class(&self) -> &'static str {
        self.sidebar_class
    }

    /// Class the visible overlay carries.
    pub fn overlay_class(&self) -> &'static str {
        self.overlay_class
    }

    pub fn on_menu_click(&self, page: &mut Page) {
        if let Some(chrome) = page.chrome_mut() {
            chrome.sidebar_open = !chrome.sidebar_open;
            chrome.overlay_visible = !chrome.overlay_visible;
        }
    }

    pub fn on_overlay_click(&self, page: &mut Page) {
        if let Some(chrome) = page.chrome_mut() {
            chrome.sidebar_open = false;
            chrome.overlay_visible = false;
        }
    }

    pub fn is_open(&self, page: &Page) -> bool {
        page.chrome().map(|c| c.sidebar_open).unwrap_or(false)
    }

    pub fn is_overlay_visible(&self, page: &Page) -> bool {
        page.chrome().map(|c| c.overlay_visible).unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::page::Chrome;
    use crate::layout::nav::default_nav_items;
    use studybuddy_common::GamificationStats;

    fn page_for(variant: LayoutVariant) -> Page {
        let mut page = Page::new("/index.html");
        page.set_chrome(Chrome {
            title: "Dashboard".to_string(),
            variant,
            nav_items: default_nav_items(),
            user: None,
            stats: GamificationStats::default(),
            sidebar_open: false,
            overlay_visible: false,
            footer_year: None,
        });
        page
    }

    #[test]
    fn test_menu_click_toggles_both() {
        let toggle = SidebarToggle::for_variant(LayoutVariant::Composed);
        let mut page = page_for(LayoutVariant::Composed);

        toggle.on_menu_click(&mut page);
        assert!(toggle.is_open(&page));
        assert!(toggle.is_overlay_visible(&page));
        let html = page.render();
        assert!(html.contains(r#"class="sidebar show""#));
        assert!(html.contains(r#"class="sidebar-overlay show""#));

        toggle.on_menu_click(&mut page);
        assert!(!toggle.is_open(&page));
        assert!(!toggle.is_overlay_visible(&page));
    }

    #[test]
    fn test_overlay_click_closes() {
        let toggle = SidebarToggle::for_variant(LayoutVariant::Static);
        let mut page = page_for(LayoutVariant::Static);

        toggle.on_menu_click(&mut page);
        let html = page.render();
        assert!(html.contains(r#"class="sidebar open""#));
        assert!(html.contains(r#"class="sidebar-overlay active""#));

        toggle.on_overlay_click(&mut page);
        assert!(!toggle.is_open(&page));
        assert!(!toggle.is_overlay_visible(&page));

        // Closing an already closed sidebar is a no-op
        toggle.on_overlay_click(&mut page);
        assert!(!toggle.is_open(&page));
    }

    #[test]
    fn test_page_without_chrome_is_skipped() {
        let toggle = SidebarToggle::for_variant(LayoutVariant::Composed);
        let mut page = Page::new("/index.html");
        toggle.on_menu_click(&mut page);
        assert!(!toggle.is_open(&page));
    }
}
