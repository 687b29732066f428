use crate::ast;
use crate::file_reader;
use crate::loc;
use crate::operation::FragmentRegistry;
use indexmap::IndexMap;
use std::collections::HashSet;
use std::path::Path;
use std::path::PathBuf;
use thiserror::Error;

type Result<T> = std::result::Result<T, Vec<FragmentRegistryBuildError>>;

#[derive(Clone, Debug)]
struct RegisteredFragment {
    def: ast::operation::FragmentDefinition,
    file_path: Option<PathBuf>,
}

/// Builder for constructing a [`FragmentRegistry`] with validation.
///
/// Fragments may be added from any number of documents (strings, files, or
/// already-parsed ASTs). [`build`](FragmentRegistryBuilder::build) then checks
/// the whole set at once for cycles and references to undefined fragments,
/// reporting every problem it finds rather than only the first.
///
/// ```
/// use libgraphql_jsonschema::operation::FragmentRegistryBuilder;
///
/// let mut builder = FragmentRegistryBuilder::new();
/// builder.add_from_document_str(
///     "fragment UserFields on User { id name }",
///     None,
/// ).unwrap();
///
/// let registry = builder.build().unwrap();
/// assert!(registry.get("UserFields").is_some());
/// ```
#[derive(Debug, Default)]
pub struct FragmentRegistryBuilder {
    fragments: IndexMap<String, RegisteredFragment>,
}

impl FragmentRegistryBuilder {
    pub fn new() -> Self {
        Self {
            fragments: IndexMap::new(),
        }
    }

    /// Add a single fragment definition.
    ///
    /// Returns an error if a fragment with the same name already exists.
    pub fn add_fragment(
        &mut self,
        def: ast::operation::FragmentDefinition,
        file_path: Option<&Path>,
    ) -> std::result::Result<(), FragmentRegistryBuildError> {
        if let Some(existing) = self.fragments.get(def.name.as_str()) {
            return Err(FragmentRegistryBuildError::DuplicateFragmentDefinition {
                fragment_name: def.name.to_string(),
                first_def_location: loc::FilePosition::from_pos(
                    existing.file_path.as_deref(),
                    existing.def.position,
                ),
                second_def_location: loc::FilePosition::from_pos(
                    file_path,
                    def.position,
                ),
            });
        }

        self.fragments.insert(def.name.to_string(), RegisteredFragment {
            def,
            file_path: file_path.map(|p| p.to_path_buf()),
        });
        Ok(())
    }

    /// Add every fragment definition in `doc`. Operation definitions are
    /// ignored.
    pub fn add_from_document_ast(
        &mut self,
        doc: &ast::operation::Document,
        file_path: Option<&Path>,
    ) -> Result<()> {
        let mut errors = vec![];
        for def in &doc.definitions {
            if let ast::operation::Definition::Fragment(frag_def) = def {
                if let Err(err) = self.add_fragment(frag_def.clone(), file_path) {
                    errors.push(err);
                }
            }
        }

        if !errors.is_empty() {
            return Err(errors);
        }
        Ok(())
    }

    pub fn add_from_document_file(
        &mut self,
        file_path: impl AsRef<Path>,
    ) -> Result<()> {
        let file_path = file_path.as_ref();
        let content = file_reader::read_content(file_path)
            .map_err(|err| vec![FragmentRegistryBuildError::FileReadError(Box::new(err))])?;
        self.add_from_document_str(content, Some(file_path))
    }

    pub fn add_from_document_str(
        &mut self,
        content: impl AsRef<str>,
        file_path: Option<&Path>,
    ) -> Result<()> {
        let doc = ast::operation::parse(content.as_ref())
            .map_err(|err| vec![FragmentRegistryBuildError::ParseError {
                file: file_path.map(|p| p.to_path_buf()),
                err: err.to_string(),
            }])?;
        self.add_from_document_ast(&doc, file_path)
    }

    /// Build the immutable [`FragmentRegistry`].
    ///
    /// This performs the following validations:
    /// - Detects cycles in fragment spreads
    /// - Deduplicates phase-shifted cycles (e.g. A→B→C→A is the same as B→C→A→B)
    /// - Validates that all fragment references exist
    pub fn build(self) -> Result<FragmentRegistry> {
        let mut errors = Vec::new();
        errors.extend(self.validate_no_cycles());
        errors.extend(self.validate_fragment_references());

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(FragmentRegistry {
            fragments: self.fragments
                .into_iter()
                .map(|(name, registered)| (name, registered.def))
                .collect(),
        })
    }

    fn validate_no_cycles(&self) -> Vec<FragmentRegistryBuildError> {
        let mut all_cycles = Vec::new();
        let mut seen_normalized_cycles = HashSet::new();

        for fragment_name in self.fragments.keys() {
            let mut path = Vec::new();
            let mut visiting = HashSet::new();

            self.check_fragment_cycles(
                fragment_name,
                &mut path,
                &mut visiting,
                &mut all_cycles,
                &mut seen_normalized_cycles,
            );
        }

        all_cycles
    }

    fn check_fragment_cycles(
        &self,
        fragment_name: &str,
        path: &mut Vec<String>,
        visiting: &mut HashSet<String>,
        errors: &mut Vec<FragmentRegistryBuildError>,
        seen_normalized: &mut HashSet<Vec<String>>,
    ) {
        if visiting.contains(fragment_name) {
            path.push(fragment_name.to_string());

            // The DFS may enter a cycle part-way through a longer path, so
            // only the portion starting at the repeated fragment is the
            // cycle itself.
            let cycle_start = path.iter()
                .position(|name| name == fragment_name)
                .unwrap_or(0);
            let cycle = &path[cycle_start..];
            let normalized = Self::normalize_cycle(cycle);

            if seen_normalized.insert(normalized) {
                errors.push(FragmentRegistryBuildError::FragmentCycleDetected {
                    cycle_path: cycle.to_vec(),
                });
            }

            path.pop();
            return;
        }

        // Undefined fragments are reported by validate_fragment_references().
        let Some(fragment) = self.fragments.get(fragment_name) else {
            return;
        };

        path.push(fragment_name.to_string());
        visiting.insert(fragment_name.to_string());

        self.check_selection_set_cycles(
            &fragment.def.selection_set,
            path,
            visiting,
            errors,
            seen_normalized,
        );

        path.pop();
        visiting.remove(fragment_name);
    }

    fn check_selection_set_cycles(
        &self,
        selection_set: &ast::operation::SelectionSet,
        path: &mut Vec<String>,
        visiting: &mut HashSet<String>,
        errors: &mut Vec<FragmentRegistryBuildError>,
        seen_normalized: &mut HashSet<Vec<String>>,
    ) {
        use ast::operation::Selection;
        for selection in &selection_set.items {
            match selection {
                Selection::FragmentSpread(spread) => self.check_fragment_cycles(
                    spread.fragment_name.as_str(),
                    path,
                    visiting,
                    errors,
                    seen_normalized,
                ),

                Selection::InlineFragment(inline) => self.check_selection_set_cycles(
                    &inline.selection_set,
                    path,
                    visiting,
                    errors,
                    seen_normalized,
                ),

                Selection::Field(field) => self.check_selection_set_cycles(
                    &field.selection_set,
                    path,
                    visiting,
                    errors,
                    seen_normalized,
                ),
            }
        }
    }

    fn validate_fragment_references(&self) -> Vec<FragmentRegistryBuildError> {
        let mut errors = Vec::new();

        for (fragment_name, fragment) in &self.fragments {
            self.check_fragment_refs_in_selection_set(
                fragment_name,
                fragment.file_path.as_deref(),
                &fragment.def.selection_set,
                &mut errors,
            );
        }

        errors
    }

    fn check_fragment_refs_in_selection_set(
        &self,
        parent_fragment: &str,
        file_path: Option<&Path>,
        selection_set: &ast::operation::SelectionSet,
        errors: &mut Vec<FragmentRegistryBuildError>,
    ) {
        use ast::operation::Selection;
        for selection in &selection_set.items {
            match selection {
                Selection::FragmentSpread(spread) => {
                    let ref_name = spread.fragment_name.as_str();
                    if !self.fragments.contains_key(ref_name) {
                        errors.push(FragmentRegistryBuildError::UndefinedFragmentReference {
                            fragment_name: parent_fragment.to_string(),
                            undefined_fragment: ref_name.to_string(),
                            reference_location: loc::FilePosition::from_pos(
                                file_path,
                                spread.position,
                            ),
                        });
                    }
                },

                Selection::InlineFragment(inline) => self.check_fragment_refs_in_selection_set(
                    parent_fragment,
                    file_path,
                    &inline.selection_set,
                    errors,
                ),

                Selection::Field(field) => self.check_fragment_refs_in_selection_set(
                    parent_fragment,
                    file_path,
                    &field.selection_set,
                    errors,
                ),
            }
        }
    }

    /// Normalize a cycle to canonical form for deduplication.
    ///
    /// Cycles that are rotations of each other are considered identical, so
    /// `[A, B, C, A]`, `[B, C, A, B]`, and `[C, A, B, C]` all normalize to
    /// `[A, B, C, A]`.
    fn normalize_cycle(cycle: &[String]) -> Vec<String> {
        if cycle.is_empty() {
            return Vec::new();
        }

        let cycle_without_repeat = &cycle[..cycle.len() - 1];
        let min_idx = cycle_without_repeat
            .iter()
            .enumerate()
            .min_by(|(_, a), (_, b)| a.cmp(b))
            .map(|(idx, _)| idx)
            .unwrap_or(0);

        let mut normalized = Vec::new();
        normalized.extend_from_slice(&cycle_without_repeat[min_idx..]);
        normalized.extend_from_slice(&cycle_without_repeat[..min_idx]);
        if let Some(first) = normalized.first().cloned() {
            normalized.push(first);
        }

        normalized
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum FragmentRegistryBuildError {
    #[error("Duplicate fragment definition: '{fragment_name}'")]
    DuplicateFragmentDefinition {
        fragment_name: String,
        first_def_location: loc::FilePosition,
        second_def_location: loc::FilePosition,
    },

    #[error("Failed to read fragment file: {0}")]
    FileReadError(Box<file_reader::ReadContentError>),

    #[error("Fragment cycle detected: {}", .cycle_path.join(" -> "))]
    FragmentCycleDetected {
        cycle_path: Vec<String>,
    },

    #[error("Failed to parse fragment document: {err}")]
    ParseError {
        file: Option<PathBuf>,
        err: String,
    },

    #[error(
        "Fragment '{fragment_name}' references undefined fragment \
        '{undefined_fragment}' at {reference_location}"
    )]
    UndefinedFragmentReference {
        fragment_name: String,
        undefined_fragment: String,
        reference_location: loc::FilePosition,
    },
}
