//! DOM-backed mount points and page-level settings.

use home_render::config::DEFAULT_SOURCE;
use home_render::{
    ContentSource, LoadError, Mount, MountRole, MountSet, RenderConfig, UnknownSectionPolicy,
    report_load_failure,
};
use web_sys::{Document, Element};

/// A page element owned by the renderer.
#[derive(Clone, Debug)]
pub struct DomMount(Element);

impl DomMount {
    /// Wrap an element.
    pub fn new(element: Element) -> Self {
        Self(element)
    }

    /// The wrapped element.
    pub fn element(&self) -> &Element {
        &self.0
    }
}

impl Mount for DomMount {
    fn set_text(&mut self, text: &str) {
        self.0.set_text_content(Some(text));
    }

    fn set_html(&mut self, html: &str) {
        self.0.set_inner_html(html);
    }
}

/// Look up every mount point by id, once.
pub fn resolve_mounts(document: &Document) -> MountSet<DomMount> {
    MountSet::resolve(|role| document.get_element_by_id(role.element_id()).map(DomMount))
}

/// Rendering options from `data-*` attributes on the sections mount:
/// `data-unknown-sections="skip|fallback"`, `data-trust-richtext="false"`,
/// `data-feature-label`, `data-feature-image`.
pub fn page_config(mounts: &MountSet<DomMount>) -> RenderConfig {
    let mut config = RenderConfig::default();
    let Some(el) = mounts.get(MountRole::Sections).map(DomMount::element) else {
        return config;
    };

    match el.get_attribute("data-unknown-sections").as_deref() {
        Some("skip") => config.unknown_sections = UnknownSectionPolicy::Skip,
        Some("fallback") => config.unknown_sections = UnknownSectionPolicy::Fallback,
        _ => {}
    }
    if el.get_attribute("data-trust-richtext").as_deref() == Some("false") {
        config.trust_richtext = false;
    }
    if let Some(label) = el.get_attribute("data-feature-label") {
        config.feature_label = label;
    }
    if let Some(image) = el.get_attribute("data-feature-image") {
        config.feature_image = image;
    }
    config
}

/// Absolute URL of the content document.
///
/// `explicit` wins, then `data-source` on the sections mount, then
/// `data/home.json`. Relative locations resolve against `base` (the page URL).
pub fn content_source(
    base: &str,
    explicit: Option<&str>,
    mounts: &MountSet<DomMount>,
) -> Result<ContentSource, LoadError> {
    let from_page = mounts
        .get(MountRole::Sections)
        .and_then(|m| m.element().get_attribute("data-source"));
    let raw = explicit
        .map(str::to_string)
        .or(from_page)
        .unwrap_or_else(|| DEFAULT_SOURCE.to_string());

    let url = reqwest::Url::parse(base)
        .and_then(|base| base.join(&raw))
        .map_err(|e| LoadError::Transport(format!("invalid content URL {raw}: {e}")))?;
    Ok(ContentSource::Url(url.into()))
}

/// [`content_source`] for an active page: a location that cannot be resolved
/// is logged and shown in place of the sections, like a failed fetch.
pub fn resolve_source(
    base: &str,
    explicit: Option<&str>,
    mounts: &mut MountSet<DomMount>,
) -> Result<ContentSource, LoadError> {
    content_source(base, explicit, mounts).inspect_err(|err| {
        let origin = explicit.unwrap_or(base);
        report_load_failure(origin, err, mounts);
    })
}
