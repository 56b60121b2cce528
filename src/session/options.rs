use super::Session;
use crate::{digest::Algorithm, pipeline::E, source::DEFAULT_CHUNK_SIZE};

/// Configuration for a `Session`.
#[derive(Default, Debug, Clone)]
pub struct Options {
    pub(crate) algorithm: Option<Algorithm>,
    pub(crate) chunk_size: Option<u64>,
}

impl Options {
    pub fn new() -> Self {
        Self {
            algorithm: None,
            chunk_size: None,
        }
    }

    /// Sets the digest algorithm computed by runs of the session. Without an explicit
    /// selection, SHA-256 is used.
    pub fn algorithm(&mut self, algorithm: Algorithm) -> &mut Self {
        self.algorithm = Some(algorithm);
        self
    }

    /// Sets the algorithm from a configuration label (`md5`, `sha1`, `sha256`, `sha512`);
    /// unrecognized labels route to SHA-256.
    pub fn algorithm_label<S: AsRef<str>>(&mut self, label: S) -> &mut Self {
        self.algorithm = Some(Algorithm::from_label(label));
        self
    }

    /// Sets the size of the windows a source is read in. The default is
    /// `DEFAULT_CHUNK_SIZE` (10 MiB).
    ///
    /// # Errors
    ///
    /// - `E::InvalidChunkSize` if `chunk_size` is 0.
    pub fn chunk_size(&mut self, chunk_size: u64) -> Result<&mut Self, E> {
        if chunk_size == 0 {
            return Err(E::InvalidChunkSize);
        }
        self.chunk_size = Some(chunk_size);
        Ok(self)
    }

    /// Builds a `Session` with the configured options.
    pub fn session(&mut self) -> Session {
        Session::new(
            self.algorithm.take().unwrap_or_default(),
            self.chunk_size.take().unwrap_or(DEFAULT_CHUNK_SIZE),
        )
    }
}
