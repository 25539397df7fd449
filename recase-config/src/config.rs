//! Settings read from recase.toml.

use std::{collections::HashSet, str::FromStr};

use recase_core::{CaseStyle, KeyOptions, Language, NamingConvention};
use serde::Deserialize;
use toml::Spanned;

use crate::{Error, Result, error::SourceContext};

/// Root of recase.toml. Every table is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Defaults for `recase convert`
    pub convert: ConvertConfig,
    /// Defaults for `recase keys`
    pub keys: KeysConfig,
    /// Defaults for `recase ident`
    pub naming: NamingConfig,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConvertConfig {
    pub style: CaseStyle,
}

#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct KeysConfig {
    pub style: CaseStyle,
    /// Rewrite keys of nested objects too
    pub recursive: bool,
}

impl Default for KeysConfig {
    fn default() -> Self {
        Self {
            style: CaseStyle::default(),
            recursive: true,
        }
    }
}

impl KeysConfig {
    pub fn options(&self) -> KeyOptions {
        KeyOptions {
            style: self.style,
            recursive: self.recursive,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NamingConfig {
    pub language: Language,
    /// Words escaped in addition to the language's reserved words
    pub reserved: Vec<Spanned<String>>,
}

impl NamingConfig {
    /// The naming profile for the configured language.
    pub fn convention(&self) -> &'static NamingConvention {
        self.language.naming()
    }

    /// Extra reserved words, without their spans.
    pub fn reserved_words(&self) -> Vec<&str> {
        self.reserved.iter().map(|w| w.get_ref().as_str()).collect()
    }
}

impl FromStr for Config {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        parse_config(s, "recase.toml")
    }
}

/// Parse a config from content with the given filename for error reporting.
pub fn parse_config(content: &str, filename: &str) -> Result<Config> {
    let ctx = SourceContext::new(content, filename);
    let config: Config = toml::from_str(content).map_err(|e| ctx.parse_error(e))?;
    validate_config(&config, &ctx)?;
    Ok(config)
}

fn validate_config(config: &Config, ctx: &SourceContext) -> Result<()> {
    let mut seen = HashSet::new();

    for word in &config.naming.reserved {
        let name = word.get_ref();
        if name.is_empty() {
            return Err(ctx.invalid_reserved_word_error(
                name,
                "reserved word is empty",
                word.span(),
            ));
        }
        if let Some(c) = name.chars().find(|c| !c.is_ascii_alphanumeric() && *c != '_') {
            return Err(ctx.invalid_reserved_word_error(
                name,
                format!("'{}' is not allowed in a reserved word", c),
                word.span(),
            ));
        }
        if !seen.insert(name.as_str()) {
            return Err(ctx.validation_error_at(
                format!("reserved word '{}' is listed twice", name),
                word.span(),
            ));
        }
    }

    Ok(())
}
