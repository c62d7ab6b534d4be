//! Leptos views for the home page fragments.
//!
//! Each mount point receives the HTML of one of these views, rendered with
//! Leptos SSR. Text props are escaped by Leptos; trusted richtext goes
//! through `inner_html` untouched.
//!
//! # Component Hierarchy
//!
//! ```text
//! #home-hero-buttons
//! └── HeroButtons
//!
//! #home-sections (one per section, in order)
//! ├── RichtextSection  ── SectionLayout + Markup
//! ├── FeatureSection   ── two columns: Markup | background image
//! ├── ListSection      ── SectionLayout + <ul>
//! ├── FallbackSection  ── <pre> with the raw JSON
//! └── LoadErrorNotice  (replaces everything on load failure)
//!
//! PreviewDocument (homepage CLI only)
//! ```

mod document;
mod hero;
mod notice;
mod sections;

pub use document::PreviewDocument;
pub use hero::HeroButtons;
pub use notice::LoadErrorNotice;
pub use sections::{FallbackSection, FeatureSection, ListSection, Markup, RichtextSection, SectionLayout};
