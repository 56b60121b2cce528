pub mod error;

use crate::words::WordArray;
pub use error::E;
use md5::Md5;
use sha1::Sha1;
use sha2::{Digest, Sha256, Sha512};
use std::fmt;

/// Supported digest algorithms.
///
/// The selection is immutable for a hashing run; one run computes exactly one algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Md5,
    Sha1,
    Sha256,
    Sha512,
}

impl Default for Algorithm {
    /// SHA-256 is the algorithm used when no explicit selection is made.
    fn default() -> Self {
        Algorithm::Sha256
    }
}

impl Algorithm {
    /// Resolves an algorithm from a configuration label.
    ///
    /// Recognized labels are `md5`, `sha1`, `sha256` and `sha512` (case-insensitive).
    /// An unrecognized label resolves to `Algorithm::Sha256`.
    ///
    /// # Parameters
    ///
    /// - `label`: The label to resolve.
    ///
    /// # Returns
    ///
    /// - The matching `Algorithm`, or `Algorithm::Sha256` for unknown labels.
    pub fn from_label<S: AsRef<str>>(label: S) -> Self {
        match label.as_ref().to_ascii_lowercase().as_str() {
            "md5" => Algorithm::Md5,
            "sha1" => Algorithm::Sha1,
            "sha256" => Algorithm::Sha256,
            "sha512" => Algorithm::Sha512,
            _ => Algorithm::default(),
        }
    }

    /// Internal block size of the algorithm's compression function, in bytes.
    pub fn block_size(&self) -> usize {
        match self {
            Algorithm::Md5 | Algorithm::Sha1 | Algorithm::Sha256 => 64,
            Algorithm::Sha512 => 128,
        }
    }

    /// Length of the final digest, in bytes.
    pub fn output_len(&self) -> usize {
        match self {
            Algorithm::Md5 => 16,
            Algorithm::Sha1 => 20,
            Algorithm::Sha256 => 32,
            Algorithm::Sha512 => 64,
        }
    }

    /// Computes the digest of `data` in one pass.
    ///
    /// This is the short path for inputs that are already fully resident in memory; it is
    /// total and cannot fail.
    ///
    /// # Parameters
    ///
    /// - `data`: The bytes to hash.
    ///
    /// # Returns
    ///
    /// - The raw digest, `output_len()` bytes long.
    pub fn digest(&self, data: &[u8]) -> Vec<u8> {
        match self {
            Algorithm::Md5 => Md5::digest(data).to_vec(),
            Algorithm::Sha1 => Sha1::digest(data).to_vec(),
            Algorithm::Sha256 => Sha256::digest(data).to_vec(),
            Algorithm::Sha512 => Sha512::digest(data).to_vec(),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Algorithm::Md5 => "md5",
                Algorithm::Sha1 => "sha1",
                Algorithm::Sha256 => "sha256",
                Algorithm::Sha512 => "sha512",
            },
        )
    }
}

enum State {
    Md5(Md5),
    Sha1(Sha1),
    Sha256(Sha256),
    Sha512(Sha512),
}

impl State {
    fn new(algorithm: Algorithm) -> Self {
        match algorithm {
            Algorithm::Md5 => State::Md5(Md5::new()),
            Algorithm::Sha1 => State::Sha1(Sha1::new()),
            Algorithm::Sha256 => State::Sha256(Sha256::new()),
            Algorithm::Sha512 => State::Sha512(Sha512::new()),
        }
    }

    fn update(&mut self, data: &[u8]) {
        match self {
            State::Md5(h) => h.update(data),
            State::Sha1(h) => h.update(data),
            State::Sha256(h) => h.update(data),
            State::Sha512(h) => h.update(data),
        }
    }

    fn finalize(self) -> Vec<u8> {
        match self {
            State::Md5(h) => h.finalize().to_vec(),
            State::Sha1(h) => h.finalize().to_vec(),
            State::Sha256(h) => h.finalize().to_vec(),
            State::Sha512(h) => h.finalize().to_vec(),
        }
    }
}

/// `Engine` owns one algorithm's running digest state.
///
/// The state is mutated only by sequential `update` calls and consumed by exactly one
/// `finalize` call. Partial blocks are buffered internally across calls, so a sequence of
/// `update` calls with arbitrary chunk boundaries produces the same digest as a single
/// `update` with the concatenation of all chunks. After `finalize`, the instance is not
/// reusable until `reset` is called.
///
/// An instance is exclusively owned by one pipeline run; it is never shared between
/// concurrent runs.
pub struct Engine {
    algorithm: Algorithm,
    state: Option<State>,
}

impl Engine {
    /// Creates a new engine initialized to the algorithm's initial vector.
    pub fn new(algorithm: Algorithm) -> Self {
        Self {
            algorithm,
            state: Some(State::new(algorithm)),
        }
    }

    /// The algorithm this engine computes.
    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Discards the running state and reinitializes it to the algorithm's initial vector.
    pub fn reset(&mut self) {
        self.state = Some(State::new(self.algorithm));
    }

    /// Folds a block of input into the running state.
    ///
    /// # Parameters
    ///
    /// - `words`: The next portion of the message, in the engine's word representation.
    ///
    /// # Returns
    ///
    /// - `Ok(&mut Self)` on success, allowing chained updates.
    /// - `Err(E::AlreadyFinished)` if `finalize` has been called without a `reset`.
    pub fn update(&mut self, words: &WordArray) -> Result<&mut Self, E> {
        let state = self.state.as_mut().ok_or(E::AlreadyFinished)?;
        state.update(&words.bytes());
        Ok(self)
    }

    /// Applies the algorithm's padding and length encoding and returns the final digest.
    ///
    /// # Parameters
    ///
    /// - `tail`: Optional final portion of the message, folded in before padding.
    ///
    /// # Returns
    ///
    /// - `Ok(WordArray)` with the digest, `output_len()` significant bytes.
    /// - `Err(E::AlreadyFinished)` if `finalize` has already been called without a `reset`.
    pub fn finalize(&mut self, tail: Option<&WordArray>) -> Result<WordArray, E> {
        let mut state = self.state.take().ok_or(E::AlreadyFinished)?;
        if let Some(tail) = tail {
            state.update(&tail.bytes());
        }
        Ok(WordArray::from_bytes(&state.finalize()))
    }
}
