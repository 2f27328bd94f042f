use log::{error, Level};
use serde::Deserialize;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

#[cfg(debug_assertions)]
pub fn get_app_url() -> &'static str {
    "http://localhost:8080/app.html"  // Development URL when running locally
}

#[cfg(not(debug_assertions))]
pub fn get_app_url() -> &'static str {
    "app.html"
}

/// Opacity of the nav links and logo that are not hovered.
pub const NAV_FADE_OPACITY: f64 = 0.5;
/// Share of a section that has to be visible before it is revealed.
pub const REVEAL_THRESHOLD: f64 = 0.15;
/// Images start loading this far before they scroll into view.
pub const LAZY_IMAGE_MARGIN: &str = "200px";
/// Operations tab shown on first render.
pub const DEFAULT_TAB: u8 = 1;

const PAGE_JSON: &str = include_str!("../content/page.json");

#[derive(Deserialize, Clone, Debug, PartialEq, Default)]
pub struct NavLink {
    pub label: String,
    #[serde(default)]
    pub href: String,
    #[serde(default)]
    pub opens_modal: bool,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct Feature {
    pub title: String,
    pub text: String,
    pub image: String,
    pub placeholder: String,
    #[serde(default)]
    pub alt: String,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct OperationTab {
    pub id: u8,
    pub title: String,
    pub heading: String,
    pub body: String,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct Testimonial {
    pub heading: String,
    pub quote: String,
    pub author: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub photo: Option<String>,
}

#[derive(Deserialize, Clone, Debug, PartialEq, Default)]
#[serde(default)]
pub struct PageConfig {
    pub title: String,
    pub nav: Vec<NavLink>,
    pub features: Vec<Feature>,
    pub tabs: Vec<OperationTab>,
    pub testimonials: Vec<Testimonial>,
}

impl PageConfig {
    pub fn parse(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    /// Page content bundled into the binary. Falls back to empty content if it
    /// does not parse.
    pub fn load() -> Self {
        match Self::parse(PAGE_JSON) {
            Ok(config) => config,
            Err(err) => {
                error!("Failed to parse page content: {}", err);
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn bundled_content_parses() {
        let config = PageConfig::parse(PAGE_JSON).expect("bundled page.json");
        assert!(!config.testimonials.is_empty());
        assert!(!config.features.is_empty());
        assert!(config.nav.iter().any(|link| link.opens_modal));
    }

    #[test]
    fn tab_ids_are_unique_and_include_default() {
        let config = PageConfig::load();
        let ids: HashSet<u8> = config.tabs.iter().map(|t| t.id).collect();
        assert_eq!(ids.len(), config.tabs.len());
        assert!(ids.contains(&DEFAULT_TAB));
    }

    #[test]
    fn missing_sections_default_to_empty() {
        let config = PageConfig::parse(r#"{ "title": "Bare" }"#).unwrap();
        assert_eq!(config.title, "Bare");
        assert!(config.testimonials.is_empty());
        assert!(config.nav.is_empty());
    }

    #[test]
    fn nav_link_flags_default_off() {
        let config = PageConfig::parse(r##"{ "nav": [{ "label": "Features", "href": "#section--1" }] }"##).unwrap();
        assert_eq!(config.nav[0].href, "#section--1");
        assert!(!config.nav[0].opens_modal);
    }

    #[test]
    fn malformed_content_is_an_error() {
        assert!(PageConfig::parse(r#"{ "tabs": [{ "id": "one" }] }"#).is_err());
    }
}
