//! Identifier case-conversion engine.
//!
//! Converting a string runs a three-stage pipeline:
//! [`tokenize`] splits it into words, [`normalize`] lowercases them and
//! [`reassemble`] joins them in the target [`CaseStyle`].

mod convert;
mod error;
mod input;
mod keys;
pub mod naming;
mod normalize;
mod reassemble;
mod style;
mod token;
mod tokenizer;

// Entry points
pub use convert::{
    format, format_value, to_camel_case, to_kebab_case, to_pascal_case, to_snake_case,
};
pub use error::{Error, Result};
pub use input::Input;
// Document keys
pub use keys::{KeyOptions, convert_keys};
pub use naming::{Language, NamingConvention};
// Pipeline stages
pub use normalize::normalize;
pub use reassemble::reassemble;
pub use style::CaseStyle;
pub use token::Token;
pub use tokenizer::{is_separator, tokenize};
