//! # home-render
//!
//! Lenient renderer for the CMS-authored home page document (`home.json`).
//!
//! The CMS publishes a hero and an ordered list of content sections. This
//! crate normalizes whatever shape the document arrives in and writes it into
//! the page's mount points using [Leptos](https://leptos.dev/) server-side
//! rendering for every fragment.
//!
//! ## Quick Start
//!
//! ```rust
//! use home_render::{render_home, MountRole, MountSet, RenderConfig};
//! use home_render::types::HomePayload;
//!
//! let payload: HomePayload = serde_json::from_str(r#"{
//!     "hero": { "title": "Welcome", "buttons": [{ "label": "Apply", "href": "/apply" }] },
//!     "sections": [{ "type": "list", "title": "Dates", "items": ["Open day", { "item": "Exams" }] }]
//! }"#).unwrap();
//!
//! let mut mounts = MountSet::in_memory();
//! let report = render_home(&payload, &mut mounts, &RenderConfig::default());
//!
//! assert_eq!(report.sections_rendered, 1);
//! let sections = mounts.get(MountRole::Sections).unwrap().inner_html();
//! assert!(sections.contains("<li>Exams</li>"));
//! ```
//!
//! ## Architecture
//!
//! - [`types`] - canonical content model
//! - [`normalize`] - raw JSON to [`types`], accepting legacy field names
//! - [`mount`] - mount points and the [`MountSet`] passed through rendering
//! - [`render`] - hero and section rendering into mounts
//! - [`components`] - Leptos views for every fragment
//! - [`fetch`] - cache-bypassing retrieval of the document
//! - [`people`] - People directory records
//!
//! In the browser, `home-render-wasm` resolves the DOM mount points and
//! calls [`load_home`]; the `homepage` CLI does the same against in-memory
//! mounts.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod components;
pub mod config;
pub mod error;
pub mod fetch;
pub mod mount;
pub mod normalize;
pub mod people;
pub mod render;
pub mod styles;
pub mod types;

pub use config::{RenderConfig, UnknownSectionPolicy};
pub use error::LoadError;
pub use fetch::ContentSource;
pub use mount::{MemoryMount, Mount, MountRole, MountSet};
pub use render::{RenderReport, render_hero, render_home, render_sections};

use components::PreviewDocument;
use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;
use tracing::{error, info};

/// Result of a successful [`load_home`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The page declares none of the mount points; nothing was fetched.
    Inactive,
    /// The document was loaded and rendered.
    Rendered(RenderReport),
}

/// Fetch the document from `source` and render it into `mounts`.
///
/// Pages without any mount point are left alone and no request is made. On
/// a fetch or parse failure the sections mount (if any) shows a single error
/// message and the error is returned; nothing is retried.
pub async fn load_home<M: Mount>(
    http: &reqwest::Client,
    source: &ContentSource,
    mounts: &mut MountSet<M>,
    config: &RenderConfig,
) -> Result<LoadOutcome, LoadError> {
    if !mounts.is_active() {
        info!("no home mount points on this page; renderer inactive");
        return Ok(LoadOutcome::Inactive);
    }

    match source.load(http).await {
        Ok(payload) => Ok(LoadOutcome::Rendered(render_home(&payload, mounts, config))),
        Err(err) => {
            report_load_failure(&source.to_string(), &err, mounts);
            Err(err)
        }
    }
}

/// Log a failed load of `origin` and show the error notice in the sections
/// mount, if the page has one.
pub fn report_load_failure<M: Mount>(origin: &str, err: &LoadError, mounts: &mut MountSet<M>) {
    error!(source = origin, error = %err, "home content load failed");
    render::render_load_error(&err.to_string(), mounts);
}

/// Render a standalone preview page with all four mount points.
///
/// Returns a complete HTML document, including `<!DOCTYPE html>`.
pub fn render_preview(mounts: MountSet<MemoryMount>) -> String {
    let doc = view! { <PreviewDocument mounts=mounts /> };

    // Leptos doesn't include DOCTYPE, so we add it
    format!("<!DOCTYPE html>\n{}", doc.to_html())
}
