//! Draggable Box Component
//!
//! Absolutely positioned label that can be dragged onto a drop zone.

use leptos::prelude::*;
use leptos_dragdrop::use_drag;

use crate::models::{ItemDescriptor, BOX_KIND};

#[component]
pub fn DraggableBox(
    /// Identifies this source in the dropped item
    #[prop(into)]
    id: String,
    left: i32,
    top: i32,
    /// Leave only an empty anchor behind while dragging
    #[prop(optional)]
    hide_source_on_drag: bool,
    /// Displayed text, carried along as the item's content
    #[prop(into)]
    content: String,
) -> impl IntoView {
    let item_id = id.clone();
    let item_content = content.clone();
    let source = use_drag(BOX_KIND, move || ItemDescriptor::new(item_id.clone(), item_content.clone()));

    let is_dragging = source.is_dragging;
    let hidden = move || hide_source_on_drag && is_dragging.get();

    let box_style = move || {
        if hidden() {
            String::new()
        } else {
            format!("left: {}px; top: {}px; position: absolute; cursor: move; user-select: none;", left, top)
        }
    };

    view! {
        <div
            class=move || if is_dragging.get() { "draggable-box dragging" } else { "draggable-box" }
            data-id=id
            style=box_style
            on:mousedown=source.on_mousedown()
        >
            {move || (!hidden()).then(|| content.clone())}
        </div>
    }
}
