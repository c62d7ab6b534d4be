//! Writing normalized content into a [`MountSet`].
//!
//! Every step replaces the whole content of the mount points it touches, so
//! rendering the same payload twice leaves the page exactly as rendering it
//! once.

use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;
use serde::Serialize;
use tracing::{debug, warn};

use crate::components::{
    FallbackSection, FeatureSection, HeroButtons, ListSection, LoadErrorNotice, RichtextSection,
};
use crate::config::{RenderConfig, UnknownSectionPolicy};
use crate::mount::{Mount, MountRole, MountSet};
use crate::types::{Button, Hero, HomePayload, Section};

/// What a render did, for callers that surface schema drift.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct RenderReport {
    /// A hero object was present and written
    pub hero_rendered: bool,
    /// Buttons written to the buttons mount
    pub buttons_rendered: usize,
    /// Buttons dropped for a missing label or link
    pub buttons_dropped: usize,
    /// The page has a sections mount
    pub sections_mounted: bool,
    /// Blocks written for supported sections
    pub sections_rendered: usize,
    /// Raw-JSON blocks written for unsupported kinds
    pub fallback_sections: usize,
    /// Sections that produced no block
    pub skipped_sections: usize,
}

/// How one section ends up on the page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SectionOutput {
    /// A regular block
    Block(String),
    /// A raw-JSON debug block for an unsupported kind
    Fallback(String),
    /// Nothing
    Skipped,
}

/// Render hero and sections. The two steps are independent.
pub fn render_home<M: Mount>(
    payload: &HomePayload,
    mounts: &mut MountSet<M>,
    config: &RenderConfig,
) -> RenderReport {
    let mut report = RenderReport::default();
    render_hero(payload.hero.as_ref(), mounts, &mut report);
    render_sections(&payload.sections, mounts, config, &mut report);
    report
}

/// Fill the hero mount points. An absent hero leaves them untouched.
///
/// Title and subtitle are written as text. The buttons mount is rebuilt
/// from the complete buttons only; incomplete ones are dropped silently.
pub fn render_hero<M: Mount>(
    hero: Option<&Hero>,
    mounts: &mut MountSet<M>,
    report: &mut RenderReport,
) {
    let Some(hero) = hero else {
        return;
    };
    report.hero_rendered = true;

    if let Some(title) = mounts.get_mut(MountRole::HeroTitle) {
        title.set_text(&hero.title);
    }
    if let Some(subtitle) = mounts.get_mut(MountRole::HeroSubtitle) {
        subtitle.set_text(&hero.subtitle);
    }

    let (complete, incomplete): (Vec<Button>, Vec<Button>) = hero
        .buttons
        .iter()
        .cloned()
        .partition(Button::is_complete);
    report.buttons_dropped = incomplete.len();

    if let Some(buttons) = mounts.get_mut(MountRole::HeroButtons) {
        report.buttons_rendered = complete.len();
        let html = view! { <HeroButtons buttons=complete /> }.to_html();
        buttons.set_html(&html);
    }
}

/// Rebuild the sections mount from `sections`, in order.
///
/// Without a sections mount this is a no-op (the page simply has no dynamic
/// sections).
pub fn render_sections<M: Mount>(
    sections: &[Section],
    mounts: &mut MountSet<M>,
    config: &RenderConfig,
    report: &mut RenderReport,
) {
    let Some(mount) = mounts.get_mut(MountRole::Sections) else {
        warn!(
            mount = MountRole::Sections.element_id(),
            "sections mount not found; skipping dynamic sections"
        );
        return;
    };
    report.sections_mounted = true;

    let mut html = String::new();
    for (idx, section) in sections.iter().enumerate() {
        match render_section(section, config) {
            SectionOutput::Block(block) => {
                report.sections_rendered += 1;
                html.push_str(&block);
            }
            SectionOutput::Fallback(block) => {
                warn!(index = idx, kind = section.kind(), "unsupported section kind; showing raw content");
                report.fallback_sections += 1;
                html.push_str(&block);
            }
            SectionOutput::Skipped => {
                warn!(index = idx, kind = section.kind(), "section skipped");
                report.skipped_sections += 1;
            }
        }
    }

    mount.set_html(&html);
    debug!(
        rendered = report.sections_rendered,
        fallback = report.fallback_sections,
        skipped = report.skipped_sections,
        "sections rendered"
    );
}

/// Render a single section to markup.
pub fn render_section(section: &Section, config: &RenderConfig) -> SectionOutput {
    let trusted = config.trust_richtext;
    match section.clone() {
        Section::Richtext { title: Some(title), html } if config.is_feature_title(&title) => {
            let image = config.feature_image.clone();
            SectionOutput::Block(
                view! { <FeatureSection title=title html=html image=image trusted=trusted /> }
                    .to_html(),
            )
        }
        Section::Richtext { title, html } => SectionOutput::Block(
            view! { <RichtextSection title=title html=html trusted=trusted /> }.to_html(),
        ),
        Section::List { title, items } => {
            SectionOutput::Block(view! { <ListSection title=title items=items /> }.to_html())
        }
        Section::Unsupported { raw, .. } => match config.unknown_sections {
            UnknownSectionPolicy::Fallback => {
                SectionOutput::Fallback(view! { <FallbackSection raw=raw /> }.to_html())
            }
            UnknownSectionPolicy::Skip => SectionOutput::Skipped,
        },
        Section::Invalid { .. } => SectionOutput::Skipped,
    }
}

/// Replace the sections with the load failure message, if the page has a
/// sections mount.
pub fn render_load_error<M: Mount>(detail: &str, mounts: &mut MountSet<M>) {
    if let Some(mount) = mounts.get_mut(MountRole::Sections) {
        let html = view! { <LoadErrorNotice detail=detail.to_string() /> }.to_html();
        mount.set_html(&html);
    }
}
