mod pointer;
mod reveal;

pub use pointer::wire_pointer_handlers;
pub use reveal::{wire_drill_controls, wire_reveal_areas, wire_tabs};
