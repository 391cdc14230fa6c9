//! Page State Store
//!
//! Uses Leptos reactive_stores so each widget only re-renders for its field.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{TodoItem, Theme};

/// Rendered state of the page
#[derive(Clone, Debug, Default, Store)]
pub struct PageState {
    /// Snapshot of the todo list, newest first
    pub todos: Vec<TodoItem>,
    pub theme: Theme,
    /// Visit count for this browser, including the current load
    pub visits: u64,
    /// Current project search text
    pub query: String,
}

/// Type alias for the store
pub type PageStore = Store<PageState>;

/// Get the page store from context
pub fn use_page_store() -> PageStore {
    expect_context::<PageStore>()
}
