//! Todo List
//!
//! `TodoList` is the owned, newest-first sequence of items; every mutation
//! consumes it and hands back the next list. `TodoStore` pairs a list with
//! the key-value store and writes the whole list back after each change.

use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};
use web_kv_store::{KeyValueBackend, KvStore};

use crate::config::TODOS_KEY;
use crate::models::TodoItem;

/// Ordered todo items, newest first
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TodoList(Vec<TodoItem>);

impl TodoList {
    pub fn items(&self) -> &[TodoItem] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Put `item` in front of everything else
    pub fn with_added(mut self, item: TodoItem) -> Self {
        self.0.insert(0, item);
        self
    }

    /// Set `done` on the item with `id`; unknown ids change nothing
    pub fn with_toggled(mut self, id: &str, done: bool) -> Self {
        self.0
            .iter_mut()
            .filter(|item| item.id == id)
            .for_each(|item| item.done = done);
        self
    }

    /// Drop the item with `id`, keeping the order of the rest
    pub fn without(mut self, id: &str) -> Self {
        self.0.retain(|item| item.id != id);
        self
    }

    pub fn cleared(self) -> Self {
        Self::default()
    }
}

/// Trim user input; `None` when nothing is left
pub fn normalize_text(text: &str) -> Option<String> {
    let trimmed = text.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

static FALLBACK_SEQUENCE: AtomicU64 = AtomicU64::new(0);

/// Fresh item id: a random v4 UUID, or a timestamp id if randomness fails
///
/// Timestamp ids carry a per-session sequence number, so they never repeat
/// within one page load even if the clock stands still or jumps back.
pub fn new_todo_id() -> String {
    let mut bytes = [0u8; 16];
    match getrandom::fill(&mut bytes) {
        Ok(()) => uuid::Builder::from_random_bytes(bytes).into_uuid().to_string(),
        Err(err) => {
            log::debug!("[TODO] No random source ({}), using timestamp id", err);
            fallback_todo_id()
        }
    }
}

fn fallback_todo_id() -> String {
    let seq = FALLBACK_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    format!("{}-{}", chrono::Utc::now().timestamp_millis(), seq)
}

/// Todo list mirrored to the key-value store
#[derive(Debug, Clone)]
pub struct TodoStore<B> {
    kv: KvStore<B>,
    list: TodoList,
}

impl<B: KeyValueBackend> TodoStore<B> {
    /// Read the persisted list; anything unreadable starts an empty one
    pub fn load(kv: KvStore<B>) -> Self {
        let list = kv.get(TODOS_KEY, TodoList::default());
        log::info!("[TODO] Loaded {} items", list.len());
        Self { kv, list }
    }

    pub fn items(&self) -> &[TodoItem] {
        self.list.items()
    }

    pub fn list(&self) -> &TodoList {
        &self.list
    }

    /// Prepend a new item; whitespace-only text is ignored
    ///
    /// Returns whether an item was created.
    pub fn add(&mut self, text: &str) -> bool {
        let Some(text) = normalize_text(text) else {
            return false;
        };
        let item = TodoItem::new(new_todo_id(), text);
        log::debug!("[TODO] Add {}", item.id);
        self.apply(|list| list.with_added(item));
        true
    }

    pub fn toggle(&mut self, id: &str, done: bool) {
        log::debug!("[TODO] Toggle {} -> {}", id, done);
        self.apply(|list| list.with_toggled(id, done));
    }

    pub fn delete(&mut self, id: &str) {
        log::debug!("[TODO] Delete {}", id);
        self.apply(|list| list.without(id));
    }

    pub fn clear_all(&mut self) {
        log::debug!("[TODO] Clear all");
        self.apply(TodoList::cleared);
    }

    fn apply(&mut self, mutate: impl FnOnce(TodoList) -> TodoList) {
        self.list = mutate(std::mem::take(&mut self.list));
        self.kv.set(TODOS_KEY, &self.list);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use web_kv_store::{FailingBackend, MemoryBackend};

    fn make_item(id: &str, done: bool) -> TodoItem {
        TodoItem {
            id: id.to_string(),
            text: format!("Item {}", id),
            done,
        }
    }

    fn seeded(items: Vec<TodoItem>) -> (MemoryBackend, TodoStore<MemoryBackend>) {
        let mem = MemoryBackend::new();
        let kv = KvStore::new(mem.clone());
        kv.set(TODOS_KEY, &items);
        (mem.clone(), TodoStore::load(kv))
    }

    fn persisted(mem: &MemoryBackend) -> String {
        KvStore::new(mem.clone()).raw(TODOS_KEY).unwrap()
    }

    fn texts(store: &TodoStore<MemoryBackend>) -> Vec<&str> {
        store.items().iter().map(|i| i.text.as_str()).collect()
    }

    #[test]
    fn test_add_prepends_newest_first() {
        let (_, mut store) = seeded(vec![]);
        assert!(store.add("Buy milk"));
        assert!(store.add("Call Bob"));

        assert_eq!(texts(&store), vec!["Call Bob", "Buy milk"]);
        assert!(store.items().iter().all(|i| !i.done));
        assert_ne!(store.items()[0].id, store.items()[1].id);
    }

    #[test]
    fn test_add_trims_text() {
        let (_, mut store) = seeded(vec![]);
        store.add("  water plants \n");
        assert_eq!(texts(&store), vec!["water plants"]);
    }

    #[test]
    fn test_add_whitespace_is_noop() {
        let (mem, mut store) = seeded(vec![make_item("a", false)]);
        let before = persisted(&mem);
        assert!(!store.add("   \t"));
        assert!(!store.add(""));
        assert_eq!(store.items(), &[make_item("a", false)]);
        assert_eq!(persisted(&mem), before);
    }

    #[test]
    fn test_duplicate_text_allowed() {
        let (_, mut store) = seeded(vec![]);
        store.add("same");
        store.add("same");
        assert_eq!(texts(&store), vec!["same", "same"]);
    }

    #[test]
    fn test_toggle_flips_done_back_and_forth() {
        let (_, mut store) = seeded(vec![make_item("a", false)]);
        store.toggle("a", true);
        assert_eq!(store.items(), &[make_item("a", true)]);
        store.toggle("a", false);
        assert_eq!(store.items(), &[make_item("a", false)]);
    }

    #[test]
    fn test_toggle_keeps_order_and_others() {
        let (_, mut store) = seeded(vec![make_item("a", false), make_item("b", false), make_item("c", true)]);
        store.toggle("b", true);
        assert_eq!(
            store.items(),
            &[make_item("a", false), make_item("b", true), make_item("c", true)]
        );
    }

    #[test]
    fn test_toggle_unknown_id_is_unchanged() {
        let (mem, mut store) = seeded(vec![make_item("a", false)]);
        let before = persisted(&mem);
        store.toggle("missing", true);
        assert_eq!(store.items(), &[make_item("a", false)]);
        assert_eq!(persisted(&mem), before);
    }

    #[test]
    fn test_delete_is_idempotent() {
        let (_, mut store) = seeded(vec![make_item("a", false), make_item("b", true), make_item("c", false)]);
        store.delete("b");
        let once = store.list().clone();
        store.delete("b");
        assert_eq!(store.list(), &once);
        assert_eq!(store.items(), &[make_item("a", false), make_item("c", false)]);
    }

    #[test]
    fn test_clear_all() {
        let (mem, mut store) = seeded(vec![make_item("a", false), make_item("b", true)]);
        store.clear_all();
        assert!(store.list().is_empty());
        assert_eq!(persisted(&mem), "[]");
    }

    #[test]
    fn test_every_mutation_is_persisted() {
        let (mem, mut store) = seeded(vec![]);
        let check = |store: &TodoStore<MemoryBackend>| {
            assert_eq!(persisted(&mem), serde_json::to_string(store.list()).unwrap());
        };

        store.add("one");
        check(&store);
        store.add("two");
        check(&store);
        let id = store.items()[1].id.clone();
        store.toggle(&id, true);
        check(&store);
        store.delete(&id);
        check(&store);
        store.clear_all();
        check(&store);
    }

    #[test]
    fn test_reload_reproduces_list() {
        let (mem, mut store) = seeded(vec![]);
        store.add("first");
        store.add("second");
        let id = store.items()[0].id.clone();
        store.toggle(&id, true);

        let reloaded = TodoStore::load(KvStore::new(mem));
        assert_eq!(reloaded.list(), store.list());
    }

    #[test]
    fn test_load_from_failing_backend_is_empty() {
        let mut store = TodoStore::load(KvStore::new(FailingBackend));
        assert!(store.list().is_empty());

        // Writes are dropped but the in-memory list still works
        store.add("offline");
        assert_eq!(store.items().len(), 1);
    }

    #[test]
    fn test_load_malformed_is_empty() {
        let mem = MemoryBackend::new().with_entry(TODOS_KEY, "{not json");
        let store = TodoStore::load(KvStore::new(mem));
        assert!(store.list().is_empty());
    }

    #[test]
    fn test_list_value_semantics() {
        let list = TodoList::default()
            .with_added(make_item("a", false))
            .with_added(make_item("b", false));
        assert_eq!(list.items(), &[make_item("b", false), make_item("a", false)]);
        assert_eq!(list.clone().without("a").len(), 1);
        assert!(list.cleared().is_empty());
    }

    #[test]
    fn test_normalize_text() {
        assert_eq!(normalize_text("  hi "), Some("hi".to_string()));
        assert_eq!(normalize_text(" \n "), None);
    }

    #[test]
    fn test_generated_ids_are_unique() {
        let ids: std::collections::HashSet<_> = (0..100).map(|_| new_todo_id()).collect();
        assert_eq!(ids.len(), 100);
    }

    #[test]
    fn test_fallback_ids_are_unique_within_session() {
        let a = fallback_todo_id();
        let b = fallback_todo_id();
        assert_ne!(a, b);
    }
}
