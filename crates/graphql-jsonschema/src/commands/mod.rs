mod compile;
mod transcode;
mod walk_args;

use crate::Cli;
use crate::CommandResult;
use compile::CompileCmd;
use transcode::TranscodeCmd;
pub(crate) use walk_args::Target;
pub(crate) use walk_args::WalkArgs;

#[derive(Debug, clap::Parser)]
#[command(name = "graphql-jsonschema")]
pub(crate) enum CommandEnum {
    /// Print the JSON Schema for an operation or fragment.
    Compile(Box<CompileCmd>),

    /// Validate a JSON payload and print it converted in the chosen
    /// direction.
    Transcode(Box<TranscodeCmd>),
}
impl CommandEnum {
    pub(crate) async fn run(self, cli: Cli) -> CommandResult {
        match self {
            Self::Compile(cmd) => cmd.run(cli).await,
            Self::Transcode(cmd) => cmd.run(cli).await,
        }
    }
}
