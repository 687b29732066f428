use crate::output_utils;
use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use crate::commands::WalkArgs;
use anyhow::Context;
use libgraphql_jsonschema::compile::CompileOptions;
use libgraphql_jsonschema::dialect::Dialect;
use serde_json::Value;
use std::path::PathBuf;

#[derive(Debug, clap::Args)]
pub(crate) struct CompileCmd {
    #[command(flatten)]
    pub(crate) walk: WalkArgs,

    #[arg(
        default_value_t=Dialect::Draft2020_12,
        help="JSON Schema dialect to declare through `$schema` (draft-07 or \
             2020-12).",
        long,
    )]
    dialect: Dialect,

    #[arg(
        help="Path to a JSON file of compile options.",
        long,
    )]
    options: Option<PathBuf>,

    #[arg(
        help="Stamp `additionalProperties` with this value on generated \
             object schemas. Overrides the options file.",
        long,
    )]
    additional_properties: Option<bool>,

    #[arg(
        help="List nullable properties in `required` as well.",
        long,
    )]
    require_nullable: bool,
}
impl CompileCmd {
    fn compile_options(&self) -> anyhow::Result<CompileOptions> {
        let mut options = match &self.options {
            Some(path) => {
                let content = std::fs::read_to_string(path)
                    .with_context(|| format!("Failed to read compile options from {path:?}"))?;
                serde_json::from_str(&content)
                    .with_context(|| format!("Invalid compile options in {path:?}"))?
            },
            None => CompileOptions::default(),
        };
        if self.additional_properties.is_some() {
            options.additional_properties = self.additional_properties;
        }
        if self.require_nullable {
            options.optional_nullable_properties = false;
        }
        Ok(options)
    }

    fn compile(&self) -> anyhow::Result<Value> {
        let options = self.compile_options()?;
        let validator = self.walk.build_validator()?;
        log::debug!("Compiling with {options:?} for {}.", self.dialect);
        Ok(validator.json_schema(self.dialect, &options)?)
    }
}

#[inherent::inherent]
impl RunnableCommand for CompileCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        match self.compile() {
            Ok(schema) => CommandResult::stdout(format_args!(
                "{}",
                output_utils::pretty_json(&schema),
            )),

            Err(err) => CommandResult::stderr(format_args!(
                "{} Failed to compile: {err:#}",
                output_utils::RED_X,
            )),
        }
    }
}
