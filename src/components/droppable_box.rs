//! Droppable Box Component
//!
//! Zone accepting dropped boxes; highlighted while a box hovers over it.

use leptos::prelude::*;
use leptos_dragdrop::use_drop;

use crate::models::{ItemDescriptor, BOX_KIND};

/// Drop zone wrapping arbitrary children
#[component]
pub fn DroppableBox(
    #[prop(into)]
    id: String,
    /// Called once per box dropped here
    on_drop: Callback<ItemDescriptor>,
    children: Children,
) -> impl IntoView {
    let target = use_drop(&[BOX_KIND], on_drop);

    let is_over = target.is_over;
    let can_drop = target.can_drop;
    let is_active = move || can_drop.get() && is_over.get();

    view! {
        <div
            class="droppable-box"
            data-zone=id
            style="width: 100%; height: 100%;"
            on:mouseenter=target.on_mouseenter()
            on:mouseleave=target.on_mouseleave()
        >
            {children()}
            // Overlay must not take the pointer, or sibling zones never see mouseenter
            <Show when=is_active>
                <div
                    class="drop-overlay"
                    style="position: absolute; top: 0; left: 0; width: 100%; height: 100%; z-index: 1; opacity: 0.5; background-color: yellow; pointer-events: none;"
                />
            </Show>
        </div>
    }
}
