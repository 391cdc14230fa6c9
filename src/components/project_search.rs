//! Project Search Component
//!
//! Search box over the project cards. Cards stay mounted and are hidden
//! rather than removed, so the list never re-renders while typing.

use leptos::prelude::*;

use crate::config::PROJECTS;
use crate::filter::filter_projects;
use crate::store::{use_page_store, PageStateStoreFields};

#[component]
pub fn ProjectSearch() -> impl IntoView {
    let page = use_page_store();
    let outcome = Memo::new(move |_| filter_projects(&page.query().get(), PROJECTS));

    view! {
        <section class="projects" id="projects">
            <h2>"Projects"</h2>
            <input
                type="search"
                class="project-search"
                placeholder="Search projects..."
                prop:value=move || page.query().get()
                on:input=move |ev| page.query().set(event_target_value(&ev))
            />

            <div class="project-list">
                {PROJECTS.iter().enumerate().map(|(index, card)| {
                    view! {
                        <article
                            class="project"
                            data-tags=card.tags
                            hidden=move || !outcome.get().is_visible(index)
                        >
                            <h3>{card.title}</h3>
                            <p>{card.summary}</p>
                            <ul class="tags">
                                {card.tag_list().map(|tag| view! { <li class="tag">{tag}</li> }).collect_view()}
                            </ul>
                        </article>
                    }
                }).collect_view()}
            </div>

            <p class="muted no-result" hidden=move || !outcome.get().no_results()>
                "No matching projects."
            </p>
        </section>
    }
}
