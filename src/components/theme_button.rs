//! Theme Button Component

use leptos::prelude::*;

use crate::context::AppContext;
use crate::store::{use_page_store, PageStateStoreFields};

/// Dark/light switch; reads as pressed in light mode
#[component]
pub fn ThemeButton() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let page = use_page_store();

    view! {
        <button
            type="button"
            class="theme-btn"
            title="Toggle theme"
            aria-pressed=move || page.theme().get().is_light().to_string()
            on:click=move |_| {
                ctx.toggle_theme();
            }
        >
            {move || if page.theme().get().is_light() { "\u{2600}" } else { "\u{263E}" }}
        </button>
    }
}
