//! Mount points: the page locations the renderer owns.
//!
//! A page exposes up to four mount points. They are resolved once, at the
//! start of a load, into a [`MountSet`] that is passed through every
//! rendering step. Backends implement [`Mount`] (the browser binding wraps
//! DOM elements; [`MemoryMount`] keeps markup in a `String` for previews and
//! tests).

use leptos::tachys::view::RenderHtml;

/// Logical role of a mount point.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MountRole {
    /// Hero heading text
    HeroTitle,
    /// Hero sub-heading text
    HeroSubtitle,
    /// Container for the call-to-action links
    HeroButtons,
    /// Container for the content sections
    Sections,
}

impl MountRole {
    /// Every role, in page order.
    pub const ALL: [MountRole; 4] = [
        MountRole::HeroTitle,
        MountRole::HeroSubtitle,
        MountRole::HeroButtons,
        MountRole::Sections,
    ];

    /// Element id the host page uses for this role.
    pub fn element_id(self) -> &'static str {
        match self {
            MountRole::HeroTitle => "home-hero-title",
            MountRole::HeroSubtitle => "home-hero-subtitle",
            MountRole::HeroButtons => "home-hero-buttons",
            MountRole::Sections => "home-sections",
        }
    }
}

/// A location whose whole content the renderer replaces.
pub trait Mount {
    /// Replace the content with plain text (never interpreted as markup).
    fn set_text(&mut self, text: &str);

    /// Replace the content with a markup fragment.
    fn set_html(&mut self, html: &str);
}

/// The mount points present on one page.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MountSet<M> {
    hero_title: Option<M>,
    hero_subtitle: Option<M>,
    hero_buttons: Option<M>,
    sections: Option<M>,
}

impl<M> MountSet<M> {
    /// A set with no mount points.
    pub fn empty() -> Self {
        Self {
            hero_title: None,
            hero_subtitle: None,
            hero_buttons: None,
            sections: None,
        }
    }

    /// Resolve every role through `lookup` once.
    pub fn resolve(mut lookup: impl FnMut(MountRole) -> Option<M>) -> Self {
        Self {
            hero_title: lookup(MountRole::HeroTitle),
            hero_subtitle: lookup(MountRole::HeroSubtitle),
            hero_buttons: lookup(MountRole::HeroButtons),
            sections: lookup(MountRole::Sections),
        }
    }

    /// Builder-style insertion, mostly for tests and previews.
    pub fn with(mut self, role: MountRole, mount: M) -> Self {
        *self.slot(role) = Some(mount);
        self
    }

    /// The page declares at least one mount point.
    pub fn is_active(&self) -> bool {
        MountRole::ALL.iter().any(|role| self.get(*role).is_some())
    }

    /// Mount point for `role`, if the page has it.
    pub fn get(&self, role: MountRole) -> Option<&M> {
        match role {
            MountRole::HeroTitle => self.hero_title.as_ref(),
            MountRole::HeroSubtitle => self.hero_subtitle.as_ref(),
            MountRole::HeroButtons => self.hero_buttons.as_ref(),
            MountRole::Sections => self.sections.as_ref(),
        }
    }

    /// Mutable mount point for `role`, if the page has it.
    pub fn get_mut(&mut self, role: MountRole) -> Option<&mut M> {
        self.slot(role).as_mut()
    }

    fn slot(&mut self, role: MountRole) -> &mut Option<M> {
        match role {
            MountRole::HeroTitle => &mut self.hero_title,
            MountRole::HeroSubtitle => &mut self.hero_subtitle,
            MountRole::HeroButtons => &mut self.hero_buttons,
            MountRole::Sections => &mut self.sections,
        }
    }
}

/// In-memory mount holding the markup a DOM element would have after the
/// same calls.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MemoryMount {
    inner_html: String,
}

impl MemoryMount {
    /// Mount pre-filled with existing page markup.
    pub fn with_html(html: impl Into<String>) -> Self {
        Self {
            inner_html: html.into(),
        }
    }

    /// Current inner markup.
    pub fn inner_html(&self) -> &str {
        &self.inner_html
    }
}

impl Mount for MemoryMount {
    fn set_text(&mut self, text: &str) {
        // Leptos renders an empty text node as a single space
        self.inner_html = if text.is_empty() {
            String::new()
        } else {
            text.to_string().to_html()
        };
    }

    fn set_html(&mut self, html: &str) {
        self.inner_html = html.to_string();
    }
}

impl MountSet<MemoryMount> {
    /// A set with all four mount points present and empty.
    pub fn in_memory() -> Self {
        Self::resolve(|_| Some(MemoryMount::default()))
    }
}
