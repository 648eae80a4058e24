//! Markdown and JSON renderers for ranked recommendations

pub mod markdown;
pub mod json;

pub use markdown::MarkdownFormatter;
pub use json::JsonFormatter;
