use thiserror::Error;

#[derive(Error, Debug)]
pub enum E {
    #[error("Chunk size must be at least 1 byte")]
    InvalidChunkSize,
    #[error("Chunk at offset {0} is incomplete: expected {1} bytes, got {2}")]
    IncompleteChunk(u64, u64, u64),
    #[error("Source error: {0}")]
    Source(String),
    #[error("Digest error: {0}")]
    Digest(String),
    #[error("Operation has been aborted")]
    Aborted,
}

impl E {
    pub fn source<Er: std::error::Error>(err: Er) -> E {
        E::Source(err.to_string())
    }
    pub fn digest<Er: std::error::Error>(err: Er) -> E {
        E::Digest(err.to_string())
    }
}
