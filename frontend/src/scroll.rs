use log::{debug, warn};
use web_sys::{window, Element, ScrollBehavior, ScrollIntoViewOptions, ScrollToOptions};

/// Where a click on a nav link should take the reader.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavTarget {
    /// Smooth scroll to the element with this id.
    Section(String),
    /// Leave the landing page for the banking app.
    App,
    /// Plain navigation to another page.
    Page(String),
    /// Bare `#`, nothing to scroll to.
    Stay,
}

pub fn resolve_nav_target(href: &str) -> NavTarget {
    let href = href.trim();
    if href.is_empty() {
        return NavTarget::App;
    }
    match href.strip_prefix('#') {
        Some("") => NavTarget::Stay,
        Some(id) => NavTarget::Section(id.to_string()),
        None => NavTarget::Page(href.to_string()),
    }
}

pub fn scroll_into_view_smooth(element: &Element) {
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}

pub fn scroll_to_section(id: &str) {
    let element = window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id));
    match element {
        Some(element) => {
            debug!("Scrolling to #{}", id);
            scroll_into_view_smooth(&element);
        }
        None => warn!("No section with id {}", id),
    }
}

pub fn scroll_to_top_smooth() {
    let Some(root) = window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    else {
        warn!("No document element to scroll");
        return;
    };
    let options = ScrollToOptions::new();
    options.set_top(0.0);
    options.set_behavior(ScrollBehavior::Smooth);
    root.scroll_to_with_scroll_to_options(&options);
}

pub fn navigate(href: &str) {
    if let Some(window) = window() {
        if let Err(err) = window.location().set_href(href) {
            warn!("Navigation to {} failed: {:?}", href, err);
        }
    }
}

/// Acts on a nav link click.
pub fn follow(target: &NavTarget, app_url: &str) {
    match target {
        NavTarget::Section(id) => scroll_to_section(id),
        NavTarget::App => navigate(app_url),
        NavTarget::Page(href) => navigate(href),
        NavTarget::Stay => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_links_scroll_to_sections() {
        assert_eq!(
            resolve_nav_target("#section--2"),
            NavTarget::Section("section--2".to_string())
        );
    }

    #[test]
    fn empty_href_goes_to_app() {
        assert_eq!(resolve_nav_target(""), NavTarget::App);
        assert_eq!(resolve_nav_target("   "), NavTarget::App);
    }

    #[test]
    fn bare_hash_stays() {
        assert_eq!(resolve_nav_target("#"), NavTarget::Stay);
    }

    #[test]
    fn other_links_navigate() {
        assert_eq!(
            resolve_nav_target("/careers"),
            NavTarget::Page("/careers".to_string())
        );
    }
}
