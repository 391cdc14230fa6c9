//! Visit Counter
//!
//! Counts page loads in this browser. Never reset by the page itself.

use web_kv_store::{KeyValueBackend, KvStore};

use crate::config::VISITS_KEY;

/// Bump and persist the visit count, returning the new value
pub fn record_visit<B: KeyValueBackend>(kv: &KvStore<B>) -> u64 {
    let visits = kv.get(VISITS_KEY, 0u64).saturating_add(1);
    kv.set(VISITS_KEY, &visits);
    log::info!("[VISITS] Visit #{}", visits);
    visits
}
