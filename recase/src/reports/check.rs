//! Check command report data structures.

use std::path::PathBuf;

use recase_config::Config;

use super::output::{Output, Report};

/// Effective settings after loading recase.toml.
#[derive(Debug)]
pub struct CheckReport {
    /// Path to the config file, `None` when defaults are in effect.
    pub config_path: Option<PathBuf>,
    pub convert_style: String,
    pub keys_style: String,
    pub keys_recursive: bool,
    pub language: String,
    pub reserved: Vec<String>,
}

impl CheckReport {
    pub fn new(config_path: Option<PathBuf>, config: &Config) -> Self {
        Self {
            config_path,
            convert_style: config.convert.style.to_string(),
            keys_style: config.keys.style.to_string(),
            keys_recursive: config.keys.recursive,
            language: config.naming.language.to_string(),
            reserved: config
                .naming
                .reserved_words()
                .into_iter()
                .map(String::from)
                .collect(),
        }
    }
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        match &self.config_path {
            Some(path) => out.preformatted(&format!("✓ {} is valid", path.display())),
            None => out.preformatted("No recase.toml found, using defaults"),
        }
        out.newline();

        out.section("convert");
        out.key_value_indented("style", &self.convert_style);

        out.section("keys");
        out.key_value_indented("style", &self.keys_style);
        out.key_value_indented("recursive", &self.keys_recursive.to_string());

        out.section("naming");
        out.key_value_indented("language", &self.language);
        if self.reserved.is_empty() {
            out.key_value_indented("reserved", "(none)");
        } else {
            out.key_value_indented("reserved", &self.reserved.join(", "));
        }
    }
}
