//! Visit Counter Component

use leptos::prelude::*;

use crate::store::{use_page_store, PageStateStoreFields};

#[component]
pub fn VisitCounter() -> impl IntoView {
    let page = use_page_store();

    view! {
        <p class="visits">
            "Visits from this browser: "
            <strong>{move || page.visits().get().to_string()}</strong>
        </p>
    }
}
