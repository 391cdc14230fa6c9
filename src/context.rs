//! Application Context
//!
//! Storage handles and the todo controller, provided via Leptos Context API.

use leptos::prelude::*;
use web_kv_store::{KvStore, LocalStorageBackend};

use crate::models::Theme;
use crate::store::{PageStateStoreFields, PageStore};
use crate::theme;
use crate::todo::TodoStore;

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Browser key-value storage
    pub kv: KvStore<LocalStorageBackend>,
    /// Todo list mirrored to storage (not reactive itself)
    todos: StoredValue<TodoStore<LocalStorageBackend>>,
    /// Where rendered snapshots go after each change
    page: PageStore,
}

impl AppContext {
    pub fn new(kv: KvStore<LocalStorageBackend>, todos: TodoStore<LocalStorageBackend>, page: PageStore) -> Self {
        Self {
            kv,
            todos: StoredValue::new(todos),
            page,
        }
    }

    /// Run a todo mutation, then publish the new list for rendering
    fn with_todos<R>(&self, mutate: impl FnOnce(&mut TodoStore<LocalStorageBackend>) -> R) -> Option<R> {
        let (result, snapshot) = self.todos.try_update_value(|todos| {
            let result = mutate(todos);
            (result, todos.items().to_vec())
        })?;
        self.page.todos().set(snapshot);
        Some(result)
    }

    /// Add a todo; `false` when the text was blank
    pub fn add_todo(&self, text: &str) -> bool {
        self.with_todos(|todos| todos.add(text)).unwrap_or(false)
    }

    pub fn toggle_todo(&self, id: &str, done: bool) {
        self.with_todos(|todos| todos.toggle(id, done));
    }

    pub fn delete_todo(&self, id: &str) {
        self.with_todos(|todos| todos.delete(id));
    }

    pub fn clear_todos(&self) {
        self.with_todos(|todos| todos.clear_all());
    }

    /// Flip the theme, persist it and apply it to the document
    pub fn toggle_theme(&self) -> Theme {
        let next = theme::switch_theme(&self.kv, self.page.theme().get_untracked());
        theme::apply_theme(next);
        self.page.theme().set(next);
        next
    }
}
