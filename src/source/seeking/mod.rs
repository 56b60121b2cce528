mod error;

use super::Source;
use error::E;
use std::{
    fs::File,
    io::{Read, Seek, SeekFrom},
    path::{Path, PathBuf},
};

/// Source over a file, read window by window with `seek` + `read_exact`. The file is
/// opened lazily on the first request.
#[derive(Default)]
pub struct Seeking {
    path: PathBuf,
    file: Option<File>,
}

impl Seeking {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            file: None,
        }
    }
}

impl Source for Seeking {
    type Error = E;
    fn len(&mut self) -> Result<u64, E> {
        if self.file.is_none() {
            self.file = Some(File::open(&self.path)?);
        }
        if let Some(file) = self.file.as_ref() {
            Ok(file.metadata()?.len())
        } else {
            Ok(0)
        }
    }
    fn slice(&mut self, offset: u64, end: u64) -> Result<Vec<u8>, E> {
        if offset > end {
            return Err(E::InvalidRange(offset, end));
        }
        if self.file.is_none() {
            self.file = Some(File::open(&self.path)?);
        }
        if let Some(file) = self.file.as_mut() {
            file.seek(SeekFrom::Start(offset))?;
            let mut buffer = vec![0u8; (end - offset) as usize];
            file.read_exact(&mut buffer)?;
            Ok(buffer)
        } else {
            Ok(Vec::new())
        }
    }
}
