pub mod canvas;
pub mod encode;
pub mod label;

pub use canvas::build_canvas;
pub use encode::{encode_jpeg, JPEG_CONTENT_TYPE};
pub use label::{draw_label, label_origin, measure_label};
