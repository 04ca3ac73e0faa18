//! Dropped Items App
//!
//! Board with a header, a plain drop zone and one zone per draggable box.

use leptos::prelude::*;
use leptos_dragdrop::{provide_dnd, DndOptions};
use reactive_stores::Store;

use crate::components::{DraggableBox, DroppableBox, Header};
use crate::config::BoardConfig;
use crate::models::ItemDescriptor;
use crate::store::{store_dropped_items, store_record_drop, BoardState};

#[component]
pub fn App(config: BoardConfig) -> impl IntoView {
    // State
    let store = Store::new(BoardState::default());

    // Drag backend for every box and zone below
    provide_dnd::<ItemDescriptor>(DndOptions::default());

    let on_drop = Callback::new(move |item: ItemDescriptor| {
        match serde_json::to_string(&item) {
            Ok(json) => log::info!("[APP] Dropped item: {}", json),
            Err(_) => log::info!("[APP] Dropped item: {:?}", item),
        }
        store_record_drop(&store, item);
    });

    let dropped_items = Signal::derive(move || store_dropped_items(&store));

    let board_style = format!(
        "position: relative; width: {}px; height: {}px; border: 1px solid black;",
        config.width, config.height
    );

    let boxes = config
        .boxes
        .into_iter()
        .map(|b| {
            view! {
                <DroppableBox id=b.id on_drop=on_drop>
                    <DraggableBox
                        id=b.id
                        left=b.left
                        top=b.top
                        hide_source_on_drag=b.hide_source_on_drag
                        content=b.label
                    />
                </DroppableBox>
            }
        })
        .collect_view();

    view! {
        <div class="board" style=board_style>
            <Header dropped_items=dropped_items />

            <DroppableBox id=config.drop_zone_id on_drop=on_drop>
                <div style="width: 100%; height: 50px; background-color: lightgray; text-align: center; line-height: 50px;">
                    "Drop Here"
                </div>
            </DroppableBox>

            {boxes}
        </div>
    }
}
