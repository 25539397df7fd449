//! Tokens command report data structures.

use recase_core::{CaseStyle, format, tokenize};

use super::output::{Output, Report};

/// How one input splits into words and renders in each style.
#[derive(Debug)]
pub struct TokensEntry {
    pub input: String,
    /// Tokens as found in the input, before lowercasing.
    pub tokens: Vec<String>,
    pub renderings: Vec<(CaseStyle, String)>,
}

impl TokensEntry {
    pub fn new(input: impl Into<String>) -> Self {
        let input = input.into();
        let tokens = tokenize(&input).iter().map(|t| t.to_string()).collect();
        let renderings = CaseStyle::ALL
            .iter()
            .map(|&style| (style, format(input.as_str(), style)))
            .collect();
        Self {
            input,
            tokens,
            renderings,
        }
    }
}

/// Report data for `recase tokens`.
#[derive(Debug)]
pub struct TokensReport {
    pub entries: Vec<TokensEntry>,
}

impl Report for TokensReport {
    fn render(&self, out: &mut dyn Output) {
        for (i, entry) in self.entries.iter().enumerate() {
            if i > 0 {
                out.newline();
            }
            out.section(&format!("{:?}", entry.input));

            if entry.tokens.is_empty() {
                out.key_value_indented("tokens", "(none)");
            } else {
                out.key_value_indented("tokens", &entry.tokens.join(" | "));
            }

            for (style, rendered) in &entry.renderings {
                let value: &str = if rendered.is_empty() { "(empty)" } else { rendered };
                out.key_value_indented(style.name(), value);
            }
        }
    }
}
