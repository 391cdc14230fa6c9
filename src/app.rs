//! Portfolio Page App
//!
//! Loads persisted state once, then lays out the page sections.

use leptos::prelude::*;
use reactive_stores::Store;
use web_kv_store::{KvStore, LocalStorageBackend};

use crate::components::{ClockDisplay, ContactForm, ProjectSearch, SiteFooter, ThemeButton, TodoPanel, VisitCounter};
use crate::context::AppContext;
use crate::store::PageState;
use crate::theme::{apply_theme, load_theme};
use crate::todo::TodoStore;
use crate::visits::record_visit;

#[component]
pub fn App() -> impl IntoView {
    let kv = KvStore::new(LocalStorageBackend);

    let theme = load_theme(&kv);
    apply_theme(theme);
    let visits = record_visit(&kv);
    let todos = TodoStore::load(kv);

    let page = Store::new(PageState {
        todos: todos.items().to_vec(),
        theme,
        visits,
        query: String::new(),
    });

    // Provide context to all children
    provide_context(page);
    provide_context(AppContext::new(kv, todos, page));

    view! {
        <header class="site-header">
            <a class="brand" href="#top">"Portfolio"</a>
            <nav>
                <a href="#projects">"Projects"</a>
                <a href="#todos">"Todo"</a>
                <a href="#contact">"Contact"</a>
            </nav>
            <ClockDisplay />
            <ThemeButton />
        </header>

        <main class="container" id="top">
            <section class="intro">
                <h1>"Hi, welcome to my page."</h1>
                <VisitCounter />
            </section>
            <ProjectSearch />
            <TodoPanel />
            <ContactForm />
        </main>

        <SiteFooter />
    }
}
