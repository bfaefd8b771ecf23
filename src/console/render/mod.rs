mod json;
mod plain;

pub use json::JsonRenderer;
pub use plain::PlainRenderer;
