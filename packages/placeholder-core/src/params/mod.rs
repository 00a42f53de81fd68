pub mod resolver;

pub use resolver::{resolve_params, ParamKey, RequestParameters};
