use std::io;
use thiserror::Error;

use crate::pipeline;

#[derive(Error, Debug)]
pub enum E {
    #[error("Fail to map file: {0}")]
    IOError(io::Error),
    #[error("File is too big to be mapped into memory")]
    FileIsTooBig,
    #[error("Invalid slice [{0}, {1}) for a mapping of {2} bytes")]
    OutOfBounds(u64, u64, u64),
}

impl From<io::Error> for E {
    fn from(err: io::Error) -> Self {
        E::IOError(err)
    }
}

impl From<E> for pipeline::E {
    fn from(val: E) -> Self {
        pipeline::E::Source(val.to_string())
    }
}
