//! Todo Panel Component
//!
//! Add form, the list itself and the clear button. The list region is
//! rebuilt from scratch whenever the todo snapshot changes.

use leptos::prelude::*;

use crate::components::TodoRow;
use crate::config::EMPTY_TODOS_TEXT;
use crate::context::AppContext;
use crate::store::{use_page_store, PageStateStoreFields};

#[component]
pub fn TodoPanel() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let page = use_page_store();

    let (new_text, set_new_text) = signal(String::new());

    let add_todo = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if ctx.add_todo(&new_text.get_untracked()) {
            set_new_text.set(String::new());
        }
    };

    view! {
        <section class="todos" id="todos">
            <h2>"Todo"</h2>
            <form class="todo-form" on:submit=add_todo>
                <input
                    type="text"
                    placeholder="Add a todo..."
                    prop:value=move || new_text.get()
                    on:input=move |ev| set_new_text.set(event_target_value(&ev))
                />
                <button type="submit">"Add"</button>
            </form>

            <ul class="todo-list">
                {move || {
                    let todos = page.todos().get();
                    if todos.is_empty() {
                        view! { <li class="muted">{EMPTY_TODOS_TEXT}</li> }.into_any()
                    } else {
                        todos
                            .into_iter()
                            .map(|item| view! { <TodoRow item=item /> })
                            .collect_view()
                            .into_any()
                    }
                }}
            </ul>

            <button type="button" class="clear-btn" on:click=move |_| ctx.clear_todos()>
                "Clear all"
            </button>
        </section>
    }
}
