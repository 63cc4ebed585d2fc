//! Page document and widget settings.
//!
//! The styleguide page is described by a JSON document. A copy ships with the
//! crate; in the browser a host page can override it with an inline
//! `<script type="application/json" id="styleguide-config">` element.

use dioxus::logger::tracing::warn;
use serde::{Deserialize, Serialize};

use crate::error::Result;

const BUNDLED_PAGE: &str = include_str!("../assets/styleguide.json");
#[cfg(target_arch = "wasm32")]
const PAGE_OVERRIDE_ID: &str = "styleguide-config";

const DEFAULT_SCROLL_STEP_FRACTION: f64 = 0.67;

/// Widget behaviour shared by every instance on the page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WidgetSettings {
    /// Share of the visible extent moved by one scroll-button press.
    #[serde(default = "default_scroll_step_fraction")]
    pub scroll_step_fraction: f64,
    #[serde(default = "default_true")]
    pub smooth_scroll: bool,
    #[serde(default = "default_minutes_abbreviation")]
    pub minutes_abbreviation: String,
    #[serde(default = "default_hours_abbreviation")]
    pub hours_abbreviation: String,
}

fn default_scroll_step_fraction() -> f64 {
    DEFAULT_SCROLL_STEP_FRACTION
}

fn default_true() -> bool {
    true
}

fn default_minutes_abbreviation() -> String {
    "min".to_string()
}

fn default_hours_abbreviation() -> String {
    "hr".to_string()
}

impl Default for WidgetSettings {
    fn default() -> Self {
        Self {
            scroll_step_fraction: default_scroll_step_fraction(),
            smooth_scroll: true,
            minutes_abbreviation: default_minutes_abbreviation(),
            hours_abbreviation: default_hours_abbreviation(),
        }
    }
}

impl WidgetSettings {
    /// Step fraction clamped into `(0, 1]`; garbage falls back to the default.
    pub fn scroll_step(&self) -> f64 {
        let value = self.scroll_step_fraction;
        if !value.is_finite() || value <= 0.0 {
            return DEFAULT_SCROLL_STEP_FRACTION;
        }
        value.min(1.0)
    }
}

/// One audio clip rendered with an `AudioPlayer`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AudioEntry {
    pub title: String,
    pub src: String,
    /// Per-player overrides of the page abbreviations.
    #[serde(default)]
    pub minutes_abbreviation: Option<String>,
    #[serde(default)]
    pub hours_abbreviation: Option<String>,
    #[serde(default = "default_true")]
    pub show_duration: bool,
}

/// An option of the section navigation dropdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionLink {
    pub label: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VideoSource {
    pub src: String,
    #[serde(default)]
    pub poster: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaylistEntry {
    pub content_id: String,
    pub title: String,
    #[serde(default)]
    pub thumbnail: Option<String>,
    /// Player mounted into the active slot when this entry is loaded.
    pub video: VideoSource,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaylistDocument {
    #[serde(default)]
    pub title: String,
    pub fragment_uri: String,
    #[serde(default)]
    pub fragment_params: String,
    #[serde(default = "default_true")]
    pub clipped: bool,
    /// Player rendered before any entry has been selected.
    #[serde(default)]
    pub initial: Option<VideoSource>,
    #[serde(default)]
    pub items: Vec<PlaylistEntry>,
}

/// Everything the styleguide page renders.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PageDocument {
    #[serde(default)]
    pub settings: WidgetSettings,
    #[serde(default)]
    pub navigation_label: String,
    #[serde(default)]
    pub current_section: Option<String>,
    #[serde(default)]
    pub sections: Vec<SectionLink>,
    #[serde(default)]
    pub audio: Vec<AudioEntry>,
    #[serde(default)]
    pub playlist: Option<PlaylistDocument>,
}

impl PageDocument {
    pub fn from_json(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn bundled() -> Result<Self> {
        Self::from_json(BUNDLED_PAGE)
    }

    /// Resolve the page document, preferring an inline override on the host page.
    pub fn load() -> Self {
        #[cfg(target_arch = "wasm32")]
        if let Some(raw) = inline_page_override() {
            match Self::from_json(&raw) {
                Ok(page) => return page,
                Err(err) => warn!("ignoring #{PAGE_OVERRIDE_ID}: {err}"),
            }
        }

        Self::bundled().unwrap_or_else(|err| {
            warn!("bundled page document unusable: {err}");
            Self::default()
        })
    }
}

#[cfg(target_arch = "wasm32")]
fn inline_page_override() -> Option<String> {
    let document = web_sys::window()?.document()?;
    let element = document.get_element_by_id(PAGE_OVERRIDE_ID)?;
    element
        .text_content()
        .filter(|raw| !raw.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_document_parses() {
        let page = PageDocument::bundled().expect("bundled page should parse");
        assert!(!page.audio.is_empty());
        assert!(!page.sections.is_empty());
        let playlist = page.playlist.expect("bundled page has a playlist");
        assert!(playlist.items.len() >= 3);
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let page = PageDocument::from_json("{}").expect("empty object is valid");
        assert_eq!(page.settings, WidgetSettings::default());
        assert!(page.audio.is_empty());
        assert!(page.playlist.is_none());

        let page = PageDocument::from_json(r#"{ "settings": { "smooth_scroll": false } }"#)
            .expect("partial settings are valid");
        assert!(!page.settings.smooth_scroll);
        assert_eq!(page.settings.scroll_step_fraction, 0.67);
        assert_eq!(page.settings.minutes_abbreviation, "min");
    }

    #[test]
    fn malformed_json_is_rejected() {
        let err = PageDocument::from_json("{ \"audio\": [").unwrap_err();
        assert!(err.to_string().starts_with("invalid page configuration"));
    }

    #[test]
    fn playlist_entry_requires_video() {
        let raw = r#"{ "playlist": { "fragment_uri": "/f", "items": [ { "content_id": "a", "title": "A" } ] } }"#;
        assert!(PageDocument::from_json(raw).is_err());
    }

    #[test]
    fn scroll_step_is_clamped() {
        let mut settings = WidgetSettings::default();
        settings.scroll_step_fraction = 2.5;
        assert_eq!(settings.scroll_step(), 1.0);
        settings.scroll_step_fraction = -1.0;
        assert_eq!(settings.scroll_step(), 0.67);
        settings.scroll_step_fraction = f64::NAN;
        assert_eq!(settings.scroll_step(), 0.67);
        settings.scroll_step_fraction = 0.5;
        assert_eq!(settings.scroll_step(), 0.5);
    }
}
