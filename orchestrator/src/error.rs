use thiserror::Error;

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("no DRS model backend configured (set DRS2FOL_MODEL_ADDR or pass --model-addr)")]
    NotConfigured,

    #[error("backend connect to {addr}: {source}")]
    Connect {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    #[error("backend I/O: {0}")]
    Io(#[from] std::io::Error),

    #[error("backend protocol: {0}")]
    Protocol(#[from] serde_json::Error),

    #[error("backend error: {0}")]
    Backend(String),

    #[error("backend returned neither drs nor error")]
    EmptyResponse,

    #[error("no cached DRS for {0:?}")]
    MissingDrs(String),
}
