use thiserror::Error;

#[derive(Error, Debug)]
pub enum FtzError {
    #[error("Cannot read {path}: {source}")]
    ConfigRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type FtzResult<T> = Result<T, FtzError>;

/// Read a whole file, tagging I/O failures with the path.
pub(crate) fn read_file(path: &str) -> FtzResult<String> {
    std::fs::read_to_string(path).map_err(|source| FtzError::ConfigRead {
        path: path.to_string(),
        source,
    })
}
