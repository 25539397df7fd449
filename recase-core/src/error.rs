use miette::Diagnostic;
use thiserror::Error;

/// Result type for recase-core operations.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("input must be a string or null, found {found}")]
    #[diagnostic(
        code(recase::invalid_input_type),
        help("pass a string, or null to get an empty result")
    )]
    InvalidInputType { found: &'static str },

    #[error("unknown case style '{name}'")]
    #[diagnostic(
        code(recase::unknown_style),
        help("expected one of: camel, pascal, kebab, snake")
    )]
    UnknownStyle { name: String },

    #[error("unknown language '{name}'")]
    #[diagnostic(
        code(recase::unknown_language),
        help("expected one of: rust, typescript, go")
    )]
    UnknownLanguage { name: String },

    #[error("keys '{first}' and '{second}' both convert to '{key}' in object at '{path}'")]
    #[diagnostic(
        code(recase::key_collision),
        help("rename one of the keys so they stay distinct after conversion")
    )]
    KeyCollision {
        path: String,
        key: String,
        first: String,
        second: String,
    },
}
