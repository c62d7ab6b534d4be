//! Presentational constants shared by the section views and the preview page.
//!
//! The live site ships its own ProBootstrap stylesheet; the renderer only
//! emits the class names that stylesheet expects plus a few inline styles the
//! original page markup carried. [`PREVIEW_CSS`] is a small stand-in used by
//! `homepage render` so previews are readable without the site's assets.

/// Right margin between hero buttons.
pub const BUTTON_SPACING: &str = "margin-right: 8px";

/// Height of the image column in the feature layout.
pub const FEATURE_IMAGE_HEIGHT: &str = "600px";

/// Inline style of the feature image column.
pub fn feature_image_style(image: &str) -> String {
    format!(
        "background-image: url('{}'); height: {}; background-size: cover; background-position: center",
        image.replace('\'', "%27"),
        FEATURE_IMAGE_HEIGHT
    )
}

/// Content Security Policy for preview documents. Richtext may reference
/// remote images, so `img-src` stays open.
pub const CSP: &str = "default-src 'self'; img-src * data:; style-src 'self' 'unsafe-inline'; script-src 'none'; connect-src 'none';";

/// Minimal stylesheet approximating the site's layout classes.
pub const PREVIEW_CSS: &str = r#"
:root {
    --text: #222222;
    --text-soft: #777777;
    --accent: #1e6fd9;
    --container-max: 1140px;
}

*, *::before, *::after {
    box-sizing: border-box;
}

body {
    font-family: system-ui, -apple-system, 'Segoe UI', sans-serif;
    color: var(--text);
    line-height: 1.6;
    margin: 0;
}

.container {
    max-width: var(--container-max);
    margin: 0 auto;
    padding: 0 15px;
}

.hero {
    padding: 64px 0 48px;
    background: #f4f6f9;
}

.btn {
    display: inline-block;
    padding: 8px 20px;
    border-radius: 4px;
    text-decoration: none;
    border: 1px solid var(--accent);
}

.btn-primary {
    background: var(--accent);
    color: #ffffff;
}

.btn-secondary, .btn-outline {
    background: transparent;
    color: var(--accent);
}

.probootstrap-section {
    padding: 40px 0;
}

.probootstrap-flex-block {
    display: flex;
    gap: 24px;
}

.probootstrap-flex-block .probootstrap-text,
.probootstrap-flex-block .probootstrap-image {
    flex: 1 1 50%;
}

.list-unstyled {
    list-style: none;
    padding-left: 0;
}

.soft {
    color: var(--text-soft);
}

pre {
    background: #f7f7f7;
    padding: 12px;
    overflow-x: auto;
}
"#;
