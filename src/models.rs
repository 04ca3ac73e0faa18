//! Frontend Models
//!
//! Drag payload and the dropped-items snapshot.

use std::sync::Arc;

use leptos_dragdrop::DragKind;
use serde::Serialize;

/// Drag kind shared by every box and zone on the board
pub const BOX_KIND: DragKind = "box";

/// Payload carried from a draggable box to the zone it lands on
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemDescriptor {
    /// Which draggable produced it
    pub id: String,
    /// Displayed content of the draggable, captured when the drag began
    pub content: String,
}

impl ItemDescriptor {
    pub fn new(id: impl Into<String>, content: impl Into<String>) -> Self {
        Self { id: id.into(), content: content.into() }
    }
}

/// Ordered record of every successful drop.
///
/// Immutable: a drop produces a new snapshot, earlier snapshots stay as they were.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DroppedItems(Arc<[ItemDescriptor]>);

impl DroppedItems {
    pub fn new() -> Self {
        Self::default()
    }

    /// New snapshot with `item` appended. Never rejects an item.
    pub fn appended(&self, item: ItemDescriptor) -> Self {
        Self(self.0.iter().cloned().chain(std::iter::once(item)).collect())
    }

    pub fn iter(&self) -> impl Iterator<Item = &ItemDescriptor> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<ItemDescriptor> for DroppedItems {
    fn from_iter<I: IntoIterator<Item = ItemDescriptor>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
