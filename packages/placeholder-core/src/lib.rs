pub mod constants;
pub mod errors;
pub mod params;
pub mod render;
pub mod validation;

// 公開API
pub use constants::{JPEG_QUALITY, MAX_PIXELS};
pub use errors::PlaceholderError;
pub use params::{resolve_params, ParamKey, RequestParameters};
pub use render::{
    build_canvas, draw_label, encode_jpeg, label_origin, measure_label, JPEG_CONTENT_TYPE,
};
pub use validation::{
    decode_color, decode_dimensions, default_label, ensure_pixel_budget, resolve_label,
    Dimensions,
};
