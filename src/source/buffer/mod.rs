mod error;

use super::Source;
use error::E;

/// Source over bytes that are already fully resident in memory.
#[derive(Default, Debug, Clone)]
pub struct Buffer {
    bytes: Vec<u8>,
}

impl Buffer {
    pub fn new(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }
}

impl From<Vec<u8>> for Buffer {
    fn from(bytes: Vec<u8>) -> Self {
        Self::new(bytes)
    }
}

impl From<&[u8]> for Buffer {
    fn from(bytes: &[u8]) -> Self {
        Self::new(bytes.to_vec())
    }
}

impl From<&str> for Buffer {
    fn from(text: &str) -> Self {
        Self::new(text.as_bytes().to_vec())
    }
}

impl From<String> for Buffer {
    fn from(text: String) -> Self {
        Self::new(text.into_bytes())
    }
}

impl Source for Buffer {
    type Error = E;
    fn len(&mut self) -> Result<u64, E> {
        Ok(self.bytes.len() as u64)
    }
    fn slice(&mut self, offset: u64, end: u64) -> Result<Vec<u8>, E> {
        let size = self.bytes.len() as u64;
        if offset > end || end > size {
            return Err(E::OutOfBounds(offset, end, size));
        }
        Ok(self.bytes[offset as usize..end as usize].to_vec())
    }
}
