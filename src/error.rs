use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by k-mer set construction, set algebra and assembly.
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid combination of parameters
    #[error("{0}")]
    Config(String),

    /// A file could not be opened, read or written
    #[error("file '{}' could not be processed: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Malformed FASTA/FASTQ input
    #[error("malformed sequence record in '{}': {message}", path.display())]
    Parse { path: PathBuf, message: String },

    #[error("at least one k-mer set is required")]
    NoInputs,

    #[error("k-mer length mismatch: expected {expected}, found {found}")]
    KMismatch { expected: usize, found: usize },

    /// Set sizes do not add up after subtraction
    #[error("k-mer set invariant violated: {0}")]
    Invariant(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Wrap an I/O error with the path it concerns.
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Error::Io { path: path.into(), source }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_message_carries_os_error() {
        let err = Error::io("missing.fa", io::Error::new(io::ErrorKind::NotFound, "No such file or directory"));
        let msg = err.to_string();
        assert!(msg.contains("missing.fa"));
        assert!(msg.contains("No such file or directory"));
    }
}
