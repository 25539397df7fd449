use clap::Args;
use eyre::{Context, Result};
use recase_config::RecaseToml;
use recase_core::{CaseStyle, Input, format};
use serde_json::Value;

use super::inputs_or_stdin;

#[derive(Args)]
pub struct ConvertCommand {
    /// Strings to convert (reads lines from stdin when omitted)
    pub inputs: Vec<String>,

    /// Target style: camel, pascal, kebab or snake (defaults to [convert] style)
    #[arg(short, long)]
    pub style: Option<CaseStyle>,

    /// Parse each input as a JSON literal; null converts to an empty line
    #[arg(long)]
    pub json: bool,
}

impl ConvertCommand {
    pub fn run(&self, config: &RecaseToml) -> Result<()> {
        let style = self.style.unwrap_or(config.config().convert.style);
        let inputs = inputs_or_stdin(&self.inputs)?;

        for input in &inputs {
            println!("{}", convert_one(input, style, self.json)?);
        }

        Ok(())
    }
}

/// Convert one input, parsing it as a JSON literal when `json` is set.
///
/// `null` converts to an empty string. Text that yields no words is logged.
fn convert_one(input: &str, style: CaseStyle, json: bool) -> Result<String> {
    if !json {
        return Ok(convert_text(input, style));
    }

    let value: Value = serde_json::from_str(input)
        .wrap_err_with(|| format!("'{}' is not a JSON literal", input))?;
    match Input::try_from(&value)? {
        Input::Absent => Ok(String::new()),
        Input::Text(text) => Ok(convert_text(text, style)),
    }
}

fn convert_text(text: &str, style: CaseStyle) -> String {
    let converted = format(text, style);
    if converted.is_empty() && !text.trim().is_empty() {
        log::warn!("'{}' has no words to convert", text);
    }
    converted
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[derive(Parser)]
    struct Harness {
        #[command(flatten)]
        cmd: ConvertCommand,
    }

    #[test]
    fn test_parse_args() {
        let h = Harness::try_parse_from(["convert", "-s", "kebab-case", "fooBar", "baz_qux"])
            .unwrap();
        assert_eq!(h.cmd.style, Some(CaseStyle::Kebab));
        assert_eq!(h.cmd.inputs, ["fooBar", "baz_qux"]);
        assert!(!h.cmd.json);
    }

    #[test]
    fn test_convert_plain() {
        assert_eq!(convert_one("user_ID", CaseStyle::Camel, false).unwrap(), "userId");
        // not parsed as JSON without the flag
        assert_eq!(convert_one("null", CaseStyle::Snake, false).unwrap(), "null");
    }

    #[test]
    fn test_convert_json_string() {
        assert_eq!(
            convert_one(r#""user_ID""#, CaseStyle::Camel, true).unwrap(),
            "userId"
        );
        assert_eq!(convert_one(r#""""#, CaseStyle::Kebab, true).unwrap(), "");
    }

    #[test]
    fn test_convert_json_null() {
        for style in CaseStyle::ALL {
            assert_eq!(convert_one("null", style, true).unwrap(), "");
            assert_eq!(convert_one("  null ", style, true).unwrap(), "");
        }
    }

    #[test]
    fn test_convert_json_wrong_type() {
        for literal in ["42", "true", "[\"a\"]", "{\"a\": 1}"] {
            let err = convert_one(literal, CaseStyle::Camel, true).unwrap_err();
            assert!(
                matches!(
                    err.downcast_ref::<recase_core::Error>(),
                    Some(recase_core::Error::InvalidInputType { .. })
                ),
                "{literal}: {err}"
            );
        }
    }

    #[test]
    fn test_convert_json_not_a_literal() {
        let err = convert_one("user_ID", CaseStyle::Camel, true).unwrap_err();
        assert_eq!(err.to_string(), "'user_ID' is not a JSON literal");
        assert!(err.downcast_ref::<recase_core::Error>().is_none());
    }

    #[test]
    fn test_rejects_unknown_style() {
        assert!(Harness::try_parse_from(["convert", "--style", "title", "x"]).is_err());
    }
}
