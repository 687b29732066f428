use std::collections::HashSet;
use std::path::Path;
use std::path::PathBuf;
use walkdir::WalkDir;

/// The files found at or under a set of input paths.
#[derive(Debug, Default)]
pub(crate) struct InputFiles {
    pub(crate) errors: Vec<std::io::Error>,
    pub(crate) file_paths: Vec<PathBuf>,
    pub(crate) num_skipped: usize,
}

/// Normalize extensions to their dotted form (`graphql` -> `.graphql`).
pub(crate) fn normalize_exts(exts: &[String]) -> HashSet<String> {
    exts.iter()
        .map(|ext| {
            if !ext.starts_with('.') {
                format!(".{ext}")
            } else {
                ext.to_owned()
            }
        })
        .collect()
}

/// Recursively find every file at or under `paths` whose extension is one of
/// `exts`.
///
/// A single path naming a file is taken as-is even when its extension
/// doesn't match, since the user asked for that file explicitly.
pub(crate) fn collect_input_files(paths: &[PathBuf], exts: &[String]) -> InputFiles {
    let exts = normalize_exts(exts);
    let mut found = InputFiles::default();

    log::debug!("Scanning {} input paths...", paths.len());
    for path in paths {
        for entry in WalkDir::new(path.as_path()).follow_links(true) {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    log::trace!(
                        "Encountered an error while iterating recursive \
                        filesystem entities at/under {path:#?}."
                    );
                    found.errors.push(err.into());
                    continue;
                },
            };

            let entry_path = entry.path();
            if !entry.file_type().is_file() {
                log::trace!("Skipping non-file: {entry_path:#?}.");
                continue;
            }
            if has_ext(entry_path, &exts) {
                log::trace!("Found file at {entry_path:#?}.");
                push_canonical(&mut found, entry_path);
            } else {
                found.num_skipped += 1;
            }
        }
    }

    if found.file_paths.is_empty() && paths.len() == 1 {
        if let Some(first_path) = paths.first().filter(|path| path.is_file()) {
            log::warn!(
                "Proceeding with {first_path:#?} even though it doesn't match \
                any of the --graphql-file-exts ({}).",
                exts.iter()
                    .map(|ext| format!("`{ext}`"))
                    .collect::<Vec<_>>()
                    .join(", "),
            );
            found.num_skipped = found.num_skipped.saturating_sub(1);
            push_canonical(&mut found, first_path);
        }
    }

    log::debug!(
        "Found {} files ({} skipped).",
        found.file_paths.len(),
        found.num_skipped,
    );
    found
}

fn has_ext(path: &Path, exts: &HashSet<String>) -> bool {
    path.extension()
        .map(|ext| exts.contains(&format!(".{}", ext.to_string_lossy())))
        .unwrap_or(false)
}

fn push_canonical(found: &mut InputFiles, path: &Path) {
    match std::fs::canonicalize(path) {
        Ok(canonical) => found.file_paths.push(canonical),
        Err(err) => found.errors.push(err),
    }
}
