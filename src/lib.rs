#![doc = include_str!("../README.md")]

mod breaker;
pub mod digest;
mod error;
pub mod pipeline;
pub mod session;
pub mod source;
#[cfg(test)]
pub(crate) mod test;
pub mod words;

pub use breaker::Breaker;
pub use digest::{Algorithm, Engine};
pub use error::E;
pub use session::{hash_str, Options, Session, Status};
pub use source::{Buffer, ChunkSpec, Chunks, Mapping, Seeking, Source, DEFAULT_CHUNK_SIZE};
pub use words::WordArray;
