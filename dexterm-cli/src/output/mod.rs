//! Output formatting for CLI results.

pub mod json;
pub mod text;

pub use json::JsonFormatter;
pub use text::TextFormatter;
