use clap::Args;
use eyre::Result;

use super::inputs_or_stdin;
use crate::reports::{Report, TerminalOutput, TokensEntry, TokensReport};

#[derive(Args)]
pub struct TokensCommand {
    /// Strings to inspect (reads lines from stdin when omitted)
    pub inputs: Vec<String>,
}

impl TokensCommand {
    pub fn run(&self) -> Result<()> {
        let entries = inputs_or_stdin(&self.inputs)?
            .into_iter()
            .map(TokensEntry::new)
            .collect();

        let report = TokensReport { entries };
        report.render(&mut TerminalOutput::new());

        Ok(())
    }
}
