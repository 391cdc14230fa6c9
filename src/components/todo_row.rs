//! Todo Row Component
//!
//! One todo item. Rows are rebuilt on every list change, so each row's
//! handlers always refer to the current item.

use leptos::prelude::*;

use crate::config::DELETE_TODO_TEXT;
use crate::context::AppContext;
use crate::models::TodoItem;

#[component]
pub fn TodoRow(item: TodoItem) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let toggle_id = item.id.clone();
    let delete_id = item.id;
    let text_class = if item.done { "todo-text done" } else { "todo-text" };

    view! {
        <li class="todo-item">
            <div class="todo-left">
                <input
                    type="checkbox"
                    prop:checked=item.done
                    on:change=move |ev| ctx.toggle_todo(&toggle_id, event_target_checked(&ev))
                />
                <div class=text_class>{item.text}</div>
            </div>
            <button
                type="button"
                class="icon-btn"
                on:click=move |_| ctx.delete_todo(&delete_id)
            >
                {DELETE_TODO_TEXT}
            </button>
        </li>
    }
}
