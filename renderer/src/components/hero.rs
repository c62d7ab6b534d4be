//! Hero call-to-action links.

use leptos::prelude::*;

use crate::styles::BUTTON_SPACING;
use crate::types::Button;

/// One `<a class="btn btn-{variant}">` per button, in the given order.
///
/// Callers pass only complete buttons; see [`Button::is_complete`].
#[component]
pub fn HeroButtons(buttons: Vec<Button>) -> impl IntoView {
    buttons
        .into_iter()
        .map(|btn| {
            let class = format!("btn btn-{}", btn.variant);
            view! {
                <a href=btn.href class=class style=BUTTON_SPACING>{btn.label}</a>
            }
        })
        .collect::<Vec<_>>()
}
