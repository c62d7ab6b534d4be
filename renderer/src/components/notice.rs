//! User-visible message shown when `home.json` cannot be loaded.

use leptos::prelude::*;

/// Prefix of the load failure message.
pub(crate) const LOAD_ERROR_PREFIX: &str = "Failed to load home content: ";

/// Single paragraph replacing the sections on load failure.
#[component]
pub fn LoadErrorNotice(detail: String) -> impl IntoView {
    let message = format!("{LOAD_ERROR_PREFIX}{detail}");
    view! { <p class="soft">{message}</p> }
}
