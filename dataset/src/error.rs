use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("{path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{path}:{line}: invalid JSON record: {source}")]
    Json {
        path: PathBuf,
        line: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("record {index}: missing \"{which}\" line")]
    MissingPremise { index: usize, which: &'static str },

    #[error("record {index}: no candidate conclusions")]
    NoCandidates { index: usize },

    #[error("serializing dataset: {0}")]
    Serialize(#[from] serde_json::Error),
}
