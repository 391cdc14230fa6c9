//! Theme Handling
//!
//! Persisted dark/light choice, applied as `data-theme` on `<html>`.

use wasm_bindgen::JsCast;
use web_kv_store::{KeyValueBackend, KvStore};

use crate::config::THEME_KEY;
use crate::models::Theme;

pub fn load_theme<B: KeyValueBackend>(kv: &KvStore<B>) -> Theme {
    kv.get(THEME_KEY, Theme::default())
}

/// Flip `current`, persist the result and return it
pub fn switch_theme<B: KeyValueBackend>(kv: &KvStore<B>, current: Theme) -> Theme {
    let next = current.toggled();
    kv.set(THEME_KEY, &next);
    log::debug!("[THEME] {} -> {}", current.as_str(), next.as_str());
    next
}

/// Set `data-theme` on the document element
pub fn apply_theme(theme: Theme) {
    let Some(root) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    else {
        log::warn!("[THEME] No document element to theme");
        return;
    };
    let html = root.unchecked_into::<web_sys::HtmlElement>();
    if let Err(e) = html.dataset().set("theme", theme.as_str()) {
        log::warn!("[THEME] Could not set data-theme: {:?}", e);
    }
}
