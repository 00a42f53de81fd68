mod types;

pub use types::PlaceholderError;
