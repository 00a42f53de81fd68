pub mod color;
pub mod label;
pub mod size;

pub use color::decode_color;
pub use label::{default_label, resolve_label};
pub use size::{decode_dimensions, ensure_pixel_budget, Dimensions};
