use crate::ast;
use crate::file_reader;
use crate::operation::FragmentRegistry;
use crate::operation::FragmentRegistryBuildError;
use crate::operation::FragmentRegistryBuilder;
use crate::operation::OperationRef;
use std::collections::HashSet;
use std::path::Path;
use std::path::PathBuf;
use thiserror::Error;

type Result<T> = std::result::Result<T, DocumentBuildError>;

/// A parsed GraphQL executable document: its operations together with a
/// validated [`FragmentRegistry`] of the fragments it defines.
///
/// The document is taken as-is. Any rewriting (persisted-query expansion,
/// field injection, etc) is expected to have happened before it gets here.
#[derive(Clone, Debug)]
pub struct ExecutableDocument {
    fragment_registry: FragmentRegistry,
    operations: Vec<ast::operation::OperationDefinition>,
}
impl ExecutableDocument {
    pub fn fragment(
        &self,
        name: &str,
    ) -> Result<&ast::operation::FragmentDefinition> {
        self.fragment_registry.get(name).ok_or_else(
            || DocumentBuildError::UnknownFragment(name.to_string()),
        )
    }

    pub fn fragment_registry(&self) -> &FragmentRegistry {
        &self.fragment_registry
    }

    pub fn from_ast(
        doc: &ast::operation::Document,
        file_path: Option<&Path>,
    ) -> Result<Self> {
        let mut fragment_builder = FragmentRegistryBuilder::new();
        fragment_builder.add_from_document_ast(doc, file_path)
            .map_err(DocumentBuildError::FragmentRegistryErrors)?;
        let fragment_registry = fragment_builder.build()
            .map_err(DocumentBuildError::FragmentRegistryErrors)?;

        let mut operations = vec![];
        let mut seen_names = HashSet::new();
        for def in &doc.definitions {
            if let ast::operation::Definition::Operation(op_def) = def {
                let op = OperationRef { def: op_def };
                if let Some(name) = op.name() {
                    if !seen_names.insert(name) {
                        return Err(DocumentBuildError::DuplicateOperationName(
                            name.to_string(),
                        ));
                    }
                }
                operations.push(op_def.clone());
            }
        }

        Ok(Self {
            fragment_registry,
            operations,
        })
    }

    pub fn from_file(file_path: impl AsRef<Path>) -> Result<Self> {
        let file_path = file_path.as_ref();
        let content = file_reader::read_content(file_path)
            .map_err(|err| DocumentBuildError::FileReadError(Box::new(err)))?;
        Self::from_str(Some(file_path), content)
    }

    pub fn from_str(
        file_path: Option<&Path>,
        content: impl AsRef<str>,
    ) -> Result<Self> {
        let doc = ast::operation::parse(content.as_ref())
            .map_err(|err| DocumentBuildError::ParseError {
                file: file_path.map(|p| p.to_path_buf()),
                err: err.to_string(),
            })?;
        Self::from_ast(&doc, file_path)
    }

    /// Select an operation by name, or the document's only operation when
    /// `name` is `None`.
    pub fn operation(&self, name: Option<&str>) -> Result<OperationRef<'_>> {
        match name {
            Some(name) => self.operations()
                .into_iter()
                .find(|op| op.name() == Some(name))
                .ok_or_else(|| DocumentBuildError::UnknownOperation(name.to_string())),

            None => match self.operations.as_slice() {
                [def] => Ok(OperationRef { def }),
                [] => Err(DocumentBuildError::NoOperations),
                defs => Err(DocumentBuildError::AmbiguousOperation {
                    operation_count: defs.len(),
                }),
            },
        }
    }

    pub fn operations(&self) -> Vec<OperationRef<'_>> {
        self.operations.iter().map(|def| OperationRef { def }).collect()
    }

    /// Parse a document from a string without an associated file.
    pub fn parse(content: impl AsRef<str>) -> Result<Self> {
        Self::from_str(None, content)
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum DocumentBuildError {
    #[error(
        "The document defines {operation_count} operations; an operation \
        name must be given to pick one"
    )]
    AmbiguousOperation {
        operation_count: usize,
    },

    #[error("Operation `{0}` is defined more than once")]
    DuplicateOperationName(String),

    #[error("Failed to read document file: {0}")]
    FileReadError(Box<file_reader::ReadContentError>),

    #[error("Invalid fragment definitions: {}", .0.iter().map(|e| e.to_string()).collect::<Vec<_>>().join("; "))]
    FragmentRegistryErrors(Vec<FragmentRegistryBuildError>),

    #[error("The document defines no operations")]
    NoOperations,

    #[error("Failed to parse document: {err}")]
    ParseError {
        file: Option<PathBuf>,
        err: String,
    },

    #[error("The document defines no fragment named `{0}`")]
    UnknownFragment(String),

    #[error("The document defines no operation named `{0}`")]
    UnknownOperation(String),
}
