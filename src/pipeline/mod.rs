mod error;

use crate::{
    breaker::Breaker,
    digest::{Algorithm, Engine},
    source::{Chunks, Source},
    words::WordArray,
};
pub use error::E;
use log::debug;
use std::time::Instant;

/// Hashes a source sequentially, chunk by chunk, and returns the digest as a lowercase
/// hexadecimal string.
///
/// The run is strictly ordered: the bytes of chunk `i + 1` are not requested until chunk
/// `i` has been folded into the digest state, because digest state mutation is not
/// commutative across chunks. Each chunk is fetched with `Source::slice`, packed into the
/// engine's word representation and folded in with `Engine::update`; after the last chunk
/// the digest is finalized and encoded.
///
/// A failure at any fetch or update step aborts the remaining chain immediately; the
/// partial digest state is discarded and never surfaced. Between chunks the run consults
/// `breaker` and bails out with `E::Aborted` if an abort has been requested.
///
/// # Parameters
///
/// - `source`: The input to hash; exclusively owned by this run while it lasts.
/// - `algorithm`: The digest algorithm to compute.
/// - `chunk_size`: Window size in bytes; must be at least 1.
/// - `breaker`: Cooperative abort flag, checked at chunk boundaries.
///
/// # Returns
///
/// - `Ok(String)`: The digest as `2 × output_len` lowercase hexadecimal characters.
/// - `Err(E)`: The first failure encountered; no partial digest is returned.
pub fn run<S: Source>(
    source: &mut S,
    algorithm: Algorithm,
    chunk_size: u64,
    breaker: &Breaker,
) -> Result<String, E>
where
    E: From<<S as Source>::Error>,
{
    if chunk_size == 0 {
        return Err(E::InvalidChunkSize);
    }
    let now = Instant::now();
    let size = source.len()?;
    let mut engine = Engine::new(algorithm);
    let mut chunks = 0usize;
    for spec in Chunks::new(size, chunk_size) {
        if breaker.is_aborted() {
            return Err(E::Aborted);
        }
        let bytes = source.slice(spec.offset, spec.end())?;
        if bytes.len() as u64 != spec.length {
            return Err(E::IncompleteChunk(
                spec.offset,
                spec.length,
                bytes.len() as u64,
            ));
        }
        engine.update(&WordArray::from_bytes(&bytes))?;
        chunks += 1;
    }
    let digest = engine.finalize(None)?;
    debug!(
        "hashed {size} bytes ({chunks} chunks) with {algorithm} in {}µs / {}ms / {}s",
        now.elapsed().as_micros(),
        now.elapsed().as_millis(),
        now.elapsed().as_secs()
    );
    Ok(hex::encode(digest.bytes()))
}
