use std::io;
use thiserror::Error;

use crate::pipeline;

#[derive(Error, Debug)]
pub enum E {
    #[error("Fail to read: {0}")]
    IOError(io::Error),
    #[error("Invalid range: [{0}, {1})")]
    InvalidRange(u64, u64),
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
