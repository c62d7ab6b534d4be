//! Standalone preview page - the four mount points inside a bare shell.
//!
//! Used by `homepage render` to look at rendered content without the real
//! site. Mount contents are inserted as already-rendered markup.

use leptos::prelude::*;

use crate::mount::{MemoryMount, MountRole, MountSet};
use crate::styles::{CSP, PREVIEW_CSS};

/// The complete HTML document for a preview.
#[component]
pub fn PreviewDocument(mounts: MountSet<MemoryMount>) -> impl IntoView {
    let markup = |role: MountRole| {
        mounts
            .get(role)
            .map(|mount| mount.inner_html().to_string())
            .unwrap_or_default()
    };

    let title = markup(MountRole::HeroTitle);
    let subtitle = markup(MountRole::HeroSubtitle);
    let buttons = markup(MountRole::HeroButtons);
    let sections = markup(MountRole::Sections);

    view! {
        <html>
            <head>
                <meta charset="UTF-8" />
                <meta http-equiv="Content-Security-Policy" content=CSP />
                <title>"Home preview"</title>
                <style>{PREVIEW_CSS}</style>
            </head>
            <body>
                <header class="hero">
                    <div class="container">
                        <h1 id=MountRole::HeroTitle.element_id() inner_html=title></h1>
                        <p id=MountRole::HeroSubtitle.element_id() inner_html=subtitle></p>
                        <div id=MountRole::HeroButtons.element_id() inner_html=buttons></div>
                    </div>
                </header>
                <main id=MountRole::Sections.element_id() inner_html=sections></main>
            </body>
        </html>
    }
}
