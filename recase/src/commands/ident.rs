use clap::{Args, ValueEnum};
use eyre::Result;
use recase_config::RecaseToml;
use recase_core::{Language, NamingConvention, format};

use super::inputs_or_stdin;

/// What kind of identifier to produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum IdentKind {
    Type,
    File,
    Field,
}

#[derive(Args)]
pub struct IdentCommand {
    /// Names to convert (reads lines from stdin when omitted)
    pub names: Vec<String>,

    /// Target language: rust, typescript or go (defaults to [naming] language)
    #[arg(short, long)]
    pub lang: Option<Language>,

    /// Kind of identifier
    #[arg(short, long, value_enum, default_value_t = IdentKind::Field)]
    pub kind: IdentKind,
}

impl IdentCommand {
    pub fn run(&self, config: &RecaseToml) -> Result<()> {
        let naming = &config.config().naming;
        let convention = self.lang.map_or(naming.convention(), Language::naming);
        let extra = naming.reserved_words();

        for name in inputs_or_stdin(&self.names)? {
            println!("{}", identifier(convention, self.kind, &name, &extra));
        }

        Ok(())
    }
}

/// Convert `name` for `kind`, escaping reserved words and any of `extra`.
fn identifier(
    convention: &NamingConvention,
    kind: IdentKind,
    name: &str,
    extra: &[&str],
) -> String {
    let style = match kind {
        IdentKind::Type => convention.type_style,
        IdentKind::Field => convention.field_style,
        IdentKind::File => return convention.file_name(name),
    };
    convention.safe_name_with(&format(name, style), extra)
}
