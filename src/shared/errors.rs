#[derive(Debug, thiserror::Error)]
pub enum FlagStoreError {
    #[error("failed to read flag store {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse flag store {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to encode flag store {path}: {source}")]
    Encode {
        path: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to write flag store {path}: {source}")]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },
}
