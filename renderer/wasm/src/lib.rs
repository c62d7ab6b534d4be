//! Browser binding for the home page renderer.
//!
//! On start it waits for the DOM, resolves the four mount points
//! (`#home-hero-title`, `#home-hero-subtitle`, `#home-hero-buttons`,
//! `#home-sections`) and, if the page declares any of them, fetches
//! `home.json` and renders it. Pages without mount points are left alone
//! and make no request.
//!
//! Uses canonical types and rendering from `home-render`; this crate only
//! supplies the DOM [`dom::DomMount`], console logging and the entry points.

pub mod console;
pub mod dom;

use home_render::{LoadError, LoadOutcome, RenderReport, load_home};
use tracing::{Level, debug, error, warn};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::Document;

/// Initialize panic hook and logging, then render once the DOM is ready.
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    console::init(Level::INFO);

    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };

    if document.ready_state() == "loading" {
        let on_ready = Closure::once_into_js(move || {
            wasm_bindgen_futures::spawn_local(start_render());
        });
        if let Err(err) =
            document.add_event_listener_with_callback("DOMContentLoaded", on_ready.unchecked_ref())
        {
            error!(error = ?err, "cannot wait for DOMContentLoaded");
        }
    } else {
        wasm_bindgen_futures::spawn_local(start_render());
    }
}

async fn start_render() {
    if let Err(err) = render_page(None).await {
        warn!(error = %err, "initial home render did not complete");
    }
}

async fn render_page(source: Option<String>) -> Result<LoadOutcome, LoadError> {
    let window = web_sys::window().ok_or_else(|| LoadError::Transport("no window".into()))?;
    let document: Document = window
        .document()
        .ok_or_else(|| LoadError::Transport("no document".into()))?;

    let mut mounts = dom::resolve_mounts(&document);
    if !mounts.is_active() {
        debug!("page declares no home mount points");
        return Ok(LoadOutcome::Inactive);
    }

    // An unreadable page URL fails to resolve below and is reported there
    let base = window.location().href().unwrap_or_default();
    let source = dom::resolve_source(&base, source.as_deref(), &mut mounts)?;
    let config = dom::page_config(&mounts);

    load_home(&reqwest::Client::new(), &source, &mut mounts, &config).await
}

// ============================================================================
// WASM Exports
// ============================================================================

/// Re-render the page, optionally from a different document.
///
/// Resolves to the render report as JSON, `"inactive"` when the page has no
/// mount points, or rejects with the load error message.
#[wasm_bindgen]
pub async fn render_home_page(source: Option<String>) -> Result<String, JsValue> {
    match render_page(source).await {
        Ok(LoadOutcome::Rendered(report)) => Ok(report_json(&report)),
        Ok(LoadOutcome::Inactive) => Ok("inactive".to_string()),
        Err(err) => Err(JsValue::from_str(&err.to_string())),
    }
}

fn report_json(report: &RenderReport) -> String {
    serde_json::to_string(report).unwrap_or_else(|_| "{}".to_string())
}

/// Check if WASM module is loaded and functional.
#[wasm_bindgen]
pub fn health_check() -> String {
    format!("home-render-wasm v{} ready", env!("CARGO_PKG_VERSION"))
}
