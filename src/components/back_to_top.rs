//! Floating button returning the window to the top of the page.

use leptos::prelude::*;

use crate::state::nav::NavState;
use crate::util::scroll;

/// Back-to-top control; visible only past the scroll threshold tracked in
/// [`NavState`].
#[component]
pub fn BackToTop() -> impl IntoView {
    let nav = expect_context::<RwSignal<NavState>>();

    let class = move || {
        if nav.get().back_to_top_visible {
            "back-to-top visible"
        } else {
            "back-to-top"
        }
    };
    let on_click = move |_| scroll::scroll_to_top();

    view! {
        <button class=class aria-label="Back to top" on:click=on_click>
            "\u{2191}"
        </button>
    }
}
