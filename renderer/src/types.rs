//! Content data types for the home page document.
//!
//! These are the canonical shapes the renderer works with. They are produced
//! from raw `home.json` by the lenient normalizer in [`crate::normalize`], so
//! deserializing never fails on missing or renamed fields:
//!
//! ```rust
//! use home_render::types::{HomePayload, Section};
//!
//! let payload: HomePayload = serde_json::from_str(r#"{
//!     "hero": { "title": "Welcome" },
//!     "sections": [ { "name": "richtext", "content": "<p>Hi</p>" } ]
//! }"#).unwrap();
//!
//! assert_eq!(payload.hero.unwrap().title, "Welcome");
//! assert!(matches!(&payload.sections[0], Section::Richtext { html, .. } if html == "<p>Hi</p>"));
//! ```

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Root document: an optional hero and the ordered content sections.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Value")]
pub struct HomePayload {
    /// Hero block; `None` when the document has no (object) hero.
    pub hero: Option<Hero>,
    /// Sections in rendering order.
    pub sections: Vec<Section>,
}

/// Hero block content.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Hero {
    /// Plain text title (empty when absent)
    pub title: String,
    /// Plain text subtitle (empty when absent)
    pub subtitle: String,
    /// Call-to-action buttons in authored order, including incomplete ones
    pub buttons: Vec<Button>,
}

/// Call-to-action link in the hero.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Button {
    /// Visible label; empty when the author left it out
    pub label: String,
    /// Link target; empty when the author left it out
    pub href: String,
    /// Style tag, becomes the `btn-{variant}` class
    pub variant: String,
}

impl Button {
    /// Variant used when the author gives none.
    pub const DEFAULT_VARIANT: &'static str = "primary";

    /// A button renders only with both a label and a link.
    pub fn is_complete(&self) -> bool {
        !self.label.is_empty() && !self.href.is_empty()
    }
}

impl Default for Button {
    fn default() -> Self {
        Self {
            label: String::new(),
            href: String::new(),
            variant: Self::DEFAULT_VARIANT.to_string(),
        }
    }
}

/// One content section, discriminated by its normalized kind.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Section {
    /// Authored markup, injected as-is when richtext is trusted.
    Richtext {
        /// Optional heading
        title: Option<String>,
        /// Raw markup fragment (`html`, or legacy `content`)
        html: String,
    },
    /// Unordered list of short text entries.
    List {
        /// Optional heading
        title: Option<String>,
        /// Resolved, non-empty entries in authored order
        items: Vec<String>,
    },
    /// A kind this renderer does not know. Keeps the raw object for debugging.
    Unsupported {
        /// The kind as authored (`type` or `name`)
        name: String,
        /// The section exactly as it appeared in the document
        raw: Value,
    },
    /// An entry of `sections` that is not an object at all.
    Invalid {
        /// The offending value
        raw: Value,
    },
}

impl Section {
    /// Kind label used in diagnostics.
    pub fn kind(&self) -> &str {
        match self {
            Section::Richtext { .. } => "richtext",
            Section::List { .. } => "list",
            Section::Unsupported { name, .. } => name.as_str(),
            Section::Invalid { .. } => "invalid",
        }
    }

    /// Heading of the section, if it has one.
    pub fn title(&self) -> Option<&str> {
        match self {
            Section::Richtext { title, .. } | Section::List { title, .. } => title.as_deref(),
            Section::Unsupported { .. } | Section::Invalid { .. } => None,
        }
    }
}
