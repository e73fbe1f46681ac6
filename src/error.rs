use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum HdlpadError {
    #[error("Failed to read {}: {source}", path.display())]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write {}: {source}", path.display())]
    WriteFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("No file to save to. Start hdlpad with a file path, e.g. `hdlpad top.v`")]
    NoFilePath,
}
