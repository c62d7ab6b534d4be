//! Section blocks rendered into `#home-sections`.
//!
//! The class names follow the site's ProBootstrap markup so authored CSS keeps
//! applying to generated blocks.

use leptos::prelude::*;
use serde_json::Value;

use crate::styles::feature_image_style;

/// Generic block: optional heading followed by the section body.
#[component]
pub fn SectionLayout(title: Option<String>, children: Children) -> impl IntoView {
    view! {
        <div class="probootstrap-section">
            <div class="container">
                <div class="row">
                    <div class="col-md-12">
                        {title.map(|title| view! { <h3>{title}</h3> })}
                        {children()}
                    </div>
                </div>
            </div>
        </div>
    }
}

/// Container for authored markup.
///
/// Trusted markup becomes the element's inner HTML byte for byte. Untrusted
/// markup is shown as text.
#[component]
pub fn Markup(html: String, trusted: bool, container_class: &'static str) -> impl IntoView {
    if trusted {
        view! { <div class=container_class inner_html=html></div> }.into_any()
    } else {
        view! { <div class=container_class>{html}</div> }.into_any()
    }
}

/// Richtext section in the generic layout.
#[component]
pub fn RichtextSection(title: Option<String>, html: String, trusted: bool) -> impl IntoView {
    view! {
        <SectionLayout title=title>
            <Markup html=html trusted=trusted container_class="probootstrap-text probootstrap-animate" />
        </SectionLayout>
    }
}

/// Two-column presentation for the editorial feature note: text on the left,
/// a fixed-height cover image on the right.
#[component]
pub fn FeatureSection(title: String, html: String, image: String, trusted: bool) -> impl IntoView {
    let image_style = feature_image_style(&image);

    view! {
        <section class="probootstrap-section">
            <div class="container">
                <div class="row">
                    <div class="col-md-12">
                        <div class="probootstrap-flex-block">
                            <div class="probootstrap-text probootstrap-animate">
                                <h3>{title}</h3>
                                <Markup html=html trusted=trusted container_class="home-richtext" />
                            </div>
                            <div class="probootstrap-image probootstrap-animate" style=image_style></div>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

/// Unordered list of plain-text entries.
#[component]
pub fn ListSection(title: Option<String>, items: Vec<String>) -> impl IntoView {
    view! {
        <SectionLayout title=title>
            <ul class="list-unstyled">
                {items.into_iter().map(|item| view! { <li>{item}</li> }).collect::<Vec<_>>()}
            </ul>
        </SectionLayout>
    }
}

/// Debug block for a section kind the renderer does not support.
#[component]
pub fn FallbackSection(raw: Value) -> impl IntoView {
    let pretty = serde_json::to_string_pretty(&raw).unwrap_or_else(|_| raw.to_string());

    view! {
        <div class="home-section">
            <pre>{pretty}</pre>
        </div>
    }
}
