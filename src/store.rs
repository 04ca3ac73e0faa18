//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{DroppedItems, ItemDescriptor};

/// Board state. The dropped-items list is its only field and drops are its only writer.
#[derive(Clone, Debug, Default, Store)]
pub struct BoardState {
    /// Every successful drop, in drop order
    pub dropped_items: DroppedItems,
}

/// Type alias for the store
pub type BoardStore = Store<BoardState>;

/// Current dropped-items snapshot, tracked
pub fn store_dropped_items(store: &BoardStore) -> DroppedItems {
    store.dropped_items().get()
}

/// Record a drop: replace the snapshot with one that has `item` appended
pub fn store_record_drop(store: &BoardStore, item: ItemDescriptor) {
    let next = store.dropped_items().get_untracked().appended(item);
    log::debug!("[STORE] {} dropped items", next.len());
    *store.dropped_items().write() = next;
}
