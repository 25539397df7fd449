use std::{io::Read, path::PathBuf};

use clap::Args;
use eyre::{Context, Result};
use recase_config::RecaseToml;
use recase_core::{CaseStyle, KeyOptions, convert_keys};
use serde_json::Value;

use super::UnwrapOrExit;

#[derive(Args)]
pub struct KeysCommand {
    /// JSON file to read (reads stdin when omitted)
    pub file: Option<PathBuf>,

    /// Key style (defaults to [keys] style)
    #[arg(short, long)]
    pub style: Option<CaseStyle>,

    /// Only rename keys of the top-level object
    #[arg(long)]
    pub shallow: bool,
}

impl KeysCommand {
    pub fn run(&self, config: &RecaseToml) -> Result<()> {
        let content = self.read_document()?;
        let options = self.options(config);
        let value: Value = serde_json::from_str(&content).wrap_err("input is not valid JSON")?;

        let converted = convert_keys(&value, options).unwrap_or_exit();
        println!("{}", serde_json::to_string_pretty(&converted)?);

        Ok(())
    }

    /// Flags override the config file.
    fn options(&self, config: &RecaseToml) -> KeyOptions {
        let mut options = config.config().keys.options();
        if let Some(style) = self.style {
            options.style = style;
        }
        if self.shallow {
            options = options.shallow();
        }
        options
    }

    fn read_document(&self) -> Result<String> {
        match &self.file {
            Some(path) => std::fs::read_to_string(path)
                .wrap_err_with(|| format!("failed to read {}", path.display())),
            None => {
                let mut content = String::new();
                std::io::stdin()
                    .read_to_string(&mut content)
                    .wrap_err("failed to read stdin")?;
                Ok(content)
            }
        }
    }
}
