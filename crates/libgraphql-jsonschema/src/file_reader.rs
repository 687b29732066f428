use std::path::Path;
use std::path::PathBuf;
use thiserror::Error;

/// Read a UTF-8 GraphQL source file (SDL or executable document).
pub fn read_content<P: AsRef<Path>>(file_path: P) -> Result<String, ReadContentError> {
    let file_path = file_path.as_ref();
    if !file_path.is_file() {
        return Err(ReadContentError::PathIsNotAFile(file_path.to_path_buf()));
    }

    let bytes = std::fs::read(file_path).map_err(|err| ReadContentError::FileReadError {
        file_path: file_path.to_path_buf(),
        err,
    })?;

    String::from_utf8(bytes).map_err(|err| ReadContentError::FileDecodeError {
        file_path: file_path.to_path_buf(),
        err,
    })
}

#[derive(Debug, Error)]
pub enum ReadContentError {
    #[error("Failed to decode {file_path:?} as utf8: {err}")]
    FileDecodeError {
        file_path: PathBuf,
        err: std::string::FromUtf8Error,
    },

    #[error("Failed to read {file_path:?}: {err}")]
    FileReadError {
        file_path: PathBuf,
        err: std::io::Error,
    },

    #[error("{0:?} is not a file")]
    PathIsNotAFile(PathBuf),
}
impl ReadContentError {
    pub fn file_path(&self) -> &Path {
        match self {
            Self::FileDecodeError { file_path, .. }
            | Self::FileReadError { file_path, .. }
            | Self::PathIsNotAFile(file_path) => file_path,
        }
    }
}
// io::Error has no PartialEq; read failures compare by kind.
impl PartialEq for ReadContentError {
    fn eq(&self, other: &Self) -> bool {
        let same_cause = match (self, other) {
            (Self::FileDecodeError { err: a, .. }, Self::FileDecodeError { err: b, .. }) =>
                a == b,
            (Self::FileReadError { err: a, .. }, Self::FileReadError { err: b, .. }) =>
                a.kind() == b.kind(),
            (Self::PathIsNotAFile(_), Self::PathIsNotAFile(_)) => true,
            _ => false,
        };
        same_cause && self.file_path() == other.file_path()
    }
}
