//! UI Components
//!
//! Board components: draggable boxes, drop zones and the header banner.

mod draggable_box;
mod droppable_box;
mod header;

pub use draggable_box::DraggableBox;
pub use droppable_box::DroppableBox;
pub use header::Header;
