use clap::Args;
use eyre::Result;
use recase_config::RecaseToml;

use crate::reports::{CheckReport, Report, TerminalOutput};

#[derive(Args)]
pub struct CheckCommand {}

impl CheckCommand {
    /// Run the check command
    ///
    /// Loading the config already validated it; this reports the result.
    pub fn run(&self, config: &RecaseToml) -> Result<()> {
        let report = CheckReport::new(config.path().map(Into::into), config.config());
        report.render(&mut TerminalOutput::new());

        Ok(())
    }
}
