//! Rendering options.
//!
//! All fields have defaults, so a partial `[render]` table (or none at all)
//! deserializes cleanly:
//!
//! ```rust
//! use home_render::config::{RenderConfig, UnknownSectionPolicy};
//!
//! let cfg: RenderConfig = serde_json::from_str(r#"{ "unknown_sections": "skip" }"#).unwrap();
//! assert_eq!(cfg.unknown_sections, UnknownSectionPolicy::Skip);
//! assert!(cfg.trust_richtext);
//! ```

use serde::{Deserialize, Serialize};

/// Default location of the content document, relative to the page.
pub const DEFAULT_SOURCE: &str = "data/home.json";

/// Editorial label that selects the two-column feature layout.
pub const DEFAULT_FEATURE_LABEL: &str = "Principal Note";

/// Background image of the feature layout's image column.
pub const DEFAULT_FEATURE_IMAGE: &str = "img/slider_5.png";

/// What to do with a section whose kind the renderer does not know.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnknownSectionPolicy {
    /// Render a block showing the raw section as pretty-printed JSON.
    #[default]
    Fallback,
    /// Produce no block.
    Skip,
}

/// Options shared by every rendering entry point.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Inject richtext markup verbatim. When `false`, the markup is shown as
    /// escaped text instead. The CMS authors are trusted by default.
    pub trust_richtext: bool,
    /// Handling of unrecognized section kinds.
    pub unknown_sections: UnknownSectionPolicy,
    /// Richtext sections titled with this label (any case) get the feature layout.
    pub feature_label: String,
    /// Image shown next to the feature text.
    pub feature_image: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            trust_richtext: true,
            unknown_sections: UnknownSectionPolicy::default(),
            feature_label: DEFAULT_FEATURE_LABEL.to_string(),
            feature_image: DEFAULT_FEATURE_IMAGE.to_string(),
        }
    }
}

impl RenderConfig {
    /// Whether a section title selects the feature layout.
    pub fn is_feature_title(&self, title: &str) -> bool {
        !self.feature_label.is_empty() && title.to_lowercase() == self.feature_label.to_lowercase()
    }
}
