use std::{io, path::PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
/// Represents the failures that abort a whole batch run.
pub enum BatchError {
    /// The input file does not exist. Reported before any output is written.
    #[error("'{}' not found in current directory.", path.display())]
    InputNotFound {
        /// The path that was looked up.
        path: PathBuf,
    },
    /// Reading the input or writing the output failed.
    #[error("I/O error while processing '{}' into '{}': {source}",
            input.display(),
            output.display())]
    Io {
        /// The input file.
        input:  PathBuf,
        /// The output file.
        output: PathBuf,
        /// The underlying error.
        #[source]
        source: io::Error,
    },
}
