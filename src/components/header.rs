//! Header Component
//!
//! Banner listing the content of every dropped item.

use leptos::prelude::*;

use crate::models::DroppedItems;

/// Banner text: each item's content in drop order, joined by ", "
pub fn header_text(items: &DroppedItems) -> String {
    let contents: Vec<&str> = items.iter().map(|item| item.content.as_str()).collect();
    format!("Dropped Items: {}", contents.join(", "))
}

#[component]
pub fn Header(
    /// Current dropped-items snapshot
    #[prop(into)]
    dropped_items: Signal<DroppedItems>,
) -> impl IntoView {
    view! {
        <div
            class="board-header"
            style="width: 100%; height: 50px; background-color: lightblue; text-align: center; line-height: 50px;"
        >
            {move || dropped_items.with(header_text)}
        </div>
    }
}
