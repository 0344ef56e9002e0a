pub mod pointer;
pub mod viewport;

pub use pointer::wire_pointer_parallax;
pub use viewport::{wire_resize, wire_scroll_reveal};
