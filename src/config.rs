//! Board Configuration
//!
//! Layout of the demo board. Compile-time data handed to `App`.

use log::LevelFilter;

/// One draggable box and the zone wrapping it
#[derive(Debug, Clone, PartialEq)]
pub struct BoxConfig {
    pub id: &'static str,
    pub label: &'static str,
    pub left: i32,
    pub top: i32,
    /// Render only an empty anchor at the origin while dragging
    pub hide_source_on_drag: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BoardConfig {
    /// Container width and height in px
    pub width: u32,
    pub height: u32,
    /// Id of the plain "Drop Here" zone under the header
    pub drop_zone_id: &'static str,
    pub boxes: Vec<BoxConfig>,
    pub log_level: LevelFilter,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            width: 400,
            height: 400,
            drop_zone_id: "header",
            boxes: vec![
                BoxConfig {
                    id: "box1",
                    label: "Field 1!",
                    left: 50,
                    top: 100,
                    hide_source_on_drag: false,
                },
                BoxConfig {
                    id: "box2",
                    label: "Field 2!",
                    left: 200,
                    top: 100,
                    hide_source_on_drag: false,
                },
            ],
            log_level: LevelFilter::Info,
        }
    }
}
