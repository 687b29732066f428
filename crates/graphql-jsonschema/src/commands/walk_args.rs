use crate::input_files::collect_input_files;
use anyhow::Context;
use libgraphql_jsonschema::compose::SchemaValidator;
use libgraphql_jsonschema::direction::Direction;
use libgraphql_jsonschema::document_schemas::FragmentSchemas;
use libgraphql_jsonschema::document_schemas::OperationSchemas;
use libgraphql_jsonschema::operation::ExecutableDocument;
use libgraphql_jsonschema::scalar::ScalarRegistry;
use libgraphql_jsonschema::schema::Schema;
use libgraphql_jsonschema::schema::SchemaBuilder;
use serde_json::Map;
use serde_json::Value;
use std::path::PathBuf;
use std::sync::Arc;

/// Which payload of an operation to work with.
#[derive(Clone, Copy, Debug, Eq, PartialEq, clap::ValueEnum)]
pub(crate) enum Target {
    /// The `data` selected by the operation (or fragment).
    Data,
    /// A whole response: `data`, `errors` and `extensions`.
    Response,
    /// The operation's variables object.
    Variables,
}

/// Where the schema, document, and selection to walk come from.
#[derive(Debug, clap::Args)]
pub(crate) struct WalkArgs {
    #[arg(
        help="Paths to one or more GraphQL schema files or directories \
             containing them.",
        long,
        num_args=1..,
        required=true,
        short='s',
    )]
    pub(crate) schema: Vec<PathBuf>,

    #[arg(
        default_values_t=[
            "graphql".to_string(),
            "graphqls".to_string(),
        ],
        help="Set of file extensions to filter to when searching for schema \
             files within a directory.",
        long,
        value_delimiter = ',',
    )]
    pub(crate) graphql_file_exts: Vec<String>,

    #[arg(
        help="Path to the executable GraphQL document.",
        long,
        short='d',
    )]
    pub(crate) document: PathBuf,

    #[arg(
        conflicts_with="fragment",
        help="Name of the operation to use. May be omitted when the document \
             defines exactly one operation.",
        long,
        short='o',
    )]
    pub(crate) operation: Option<String>,

    #[arg(
        help="Name of a fragment to use instead of an operation.",
        long,
        short='f',
    )]
    pub(crate) fragment: Option<String>,

    #[arg(
        default_value_t=Target::Data,
        help="Which payload to work with.",
        long,
        value_enum,
    )]
    pub(crate) target: Target,

    #[arg(
        default_value_t=Direction::Normalize,
        help="normalize (wire to wire), deserialize (wire to runtime), or \
             serialize (runtime to wire).",
        long,
    )]
    pub(crate) direction: Direction,

    #[arg(
        help="Path to a JSON object of variable values that @skip/@include \
             are evaluated against. Without it, placeholder values are \
             synthesized.",
        long,
    )]
    pub(crate) variables: Option<PathBuf>,

    #[arg(
        help="Treat every custom scalar without a registered codec as an \
             unconstrained JSON value.",
        long,
    )]
    pub(crate) opaque_scalars: bool,
}
impl WalkArgs {
    pub(crate) fn load_schema(&self) -> anyhow::Result<Schema> {
        let input_files = collect_input_files(&self.schema, &self.graphql_file_exts);
        if let Some(err) = input_files.errors.into_iter().next() {
            return Err(err).context("Failed to scan schema paths");
        }
        if input_files.file_paths.is_empty() {
            anyhow::bail!("No schema files found at {:?}", self.schema);
        }

        log::debug!("Loading schema from {} files.", input_files.file_paths.len());
        SchemaBuilder::new()
            .load_files(input_files.file_paths)
            .and_then(SchemaBuilder::build)
            .context("Failed to build the schema")
    }

    pub(crate) fn load_variables(&self) -> anyhow::Result<Option<Map<String, Value>>> {
        let Some(path) = &self.variables else {
            return Ok(None);
        };
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read variables from {path:?}"))?;
        let variables = serde_json::from_str(&content)
            .with_context(|| format!("{path:?} is not a JSON object of variables"))?;
        Ok(Some(variables))
    }

    /// The validator for the selected operation (or fragment) and target.
    pub(crate) fn build_validator(&self) -> anyhow::Result<Box<dyn SchemaValidator>> {
        let schema = self.load_schema()?;

        let mut scalars = ScalarRegistry::new();
        if self.opaque_scalars {
            scalars.insert_passthrough_for_unregistered(&schema);
            log::debug!("Registered {} opaque scalars.", scalars.len());
        }

        let document = ExecutableDocument::from_file(&self.document)
            .with_context(|| format!("Failed to load document {:?}", self.document))?;
        let variable_values = self.load_variables()?;

        let type_system = Arc::new(schema);
        let document = Arc::new(document);
        let scalars = Arc::new(scalars);

        if let Some(fragment_name) = &self.fragment {
            if self.target != Target::Data {
                anyhow::bail!("Fragments only have a `data` target");
            }
            let mut schemas = FragmentSchemas::new(
                type_system,
                document,
                fragment_name,
                scalars,
                self.direction,
            )?;
            if let Some(variable_values) = variable_values {
                schemas = schemas.with_variable_values(variable_values);
            }
            return Ok(Box::new(schemas.data()));
        }

        let mut schemas = OperationSchemas::new(
            type_system,
            document,
            self.operation.as_deref(),
            scalars,
            self.direction,
        )?;
        if let Some(variable_values) = variable_values {
            schemas = schemas.with_variable_values(variable_values);
        }
        log::debug!(
            "Using operation {:?} ({:?} target, {} direction).",
            schemas.operation_name(),
            self.target,
            self.direction,
        );

        Ok(match self.target {
            Target::Data => Box::new(schemas.data()),
            Target::Response => Box::new(schemas.response()),
            Target::Variables => Box::new(schemas.variables()),
        })
    }
}
