//! Site Footer Component

use leptos::prelude::*;

use crate::clock::current_year;

#[component]
pub fn SiteFooter() -> impl IntoView {
    view! {
        <footer class="site-footer">
            <small>"© " {current_year().to_string()}</small>
        </footer>
    }
}
