mod error;

use super::Source;
use error::E;
use memmap2::{Mmap, MmapOptions};
use std::{
    fs::File,
    path::{Path, PathBuf},
};

/// Source over a file mapped into memory with `memmap2`. Windows are copied out of the
/// map; the mapping is created lazily on the first request.
#[derive(Default)]
pub struct Mapping {
    path: PathBuf,
    mmap: Option<Mmap>,
}

impl Mapping {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            mmap: None,
        }
    }

    fn map(&mut self) -> Result<&Mmap, E> {
        if self.mmap.is_none() {
            let file = File::open(&self.path)?;
            let md = file.metadata()?;
            if md.len() > usize::MAX as u64 {
                return Err(E::FileIsTooBig);
            }
            self.mmap = Some(unsafe { MmapOptions::new().len(md.len() as usize).map(&file) }?);
        }
        if let Some(mmap) = self.mmap.as_ref() {
            Ok(mmap)
        } else {
            unreachable!("File has been mapped into memory");
        }
    }
}

impl Source for Mapping {
    type Error = E;
    fn len(&mut self) -> Result<u64, E> {
        Ok(self.map()?.len() as u64)
    }
    fn slice(&mut self, offset: u64, end: u64) -> Result<Vec<u8>, E> {
        let mmap = self.map()?;
        let size = mmap.len() as u64;
        if offset > end || end > size {
            return Err(E::OutOfBounds(offset, end, size));
        }
        Ok(mmap[offset as usize..end as usize].to_vec())
    }
}
