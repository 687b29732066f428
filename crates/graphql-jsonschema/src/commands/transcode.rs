use crate::output_utils;
use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use crate::commands::WalkArgs;
use anyhow::Context;
use libgraphql_jsonschema::compose::validate_sync;
use libgraphql_jsonschema::transcode::ValidationResult;
use serde_json::Value;
use std::path::PathBuf;

#[derive(Debug, clap::Args)]
pub(crate) struct TranscodeCmd {
    #[command(flatten)]
    pub(crate) walk: WalkArgs,

    #[arg(
        help="Path to the JSON payload. Reads stdin when omitted or `-`.",
        name="PAYLOAD_PATH",
    )]
    pub(crate) payload: Option<PathBuf>,
}
impl TranscodeCmd {
    fn read_payload(&self) -> anyhow::Result<Value> {
        let content = match &self.payload {
            Some(path) if path.as_os_str() != "-" => std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read payload from {path:?}"))?,
            _ => std::io::read_to_string(std::io::stdin())
                .context("Failed to read payload from stdin")?,
        };
        serde_json::from_str(&content).context("The payload is not valid JSON")
    }

    fn transcode(&self) -> anyhow::Result<ValidationResult<Value>> {
        let payload = self.read_payload()?;
        let validator = self.walk.build_validator()?;
        Ok(validate_sync(validator.as_ref(), &payload)?)
    }
}

#[inherent::inherent]
impl RunnableCommand for TranscodeCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        match self.transcode() {
            Ok(Ok(transcoded)) => {
                log::info!("{} Payload is valid.", output_utils::GREEN_CHECK);
                CommandResult::stdout(format_args!(
                    "{}",
                    output_utils::pretty_json(&transcoded),
                ))
            },

            Ok(Err(issues)) => CommandResult::stderr(format_args!(
                "{} {issues}",
                output_utils::RED_X,
            )),

            Err(err) => CommandResult::stderr(format_args!(
                "{} Failed to transcode: {err:#}",
                output_utils::RED_X,
            )),
        }
    }
}
