use thiserror::Error;

use crate::pipeline;

#[derive(Error, Debug)]
pub enum E {
    #[error("Invalid slice [{0}, {1}) for a buffer of {2} bytes")]
    OutOfBounds(u64, u64, u64),
}

impl From<E> for pipeline::E {
    fn from(val: E) -> Self {
        pipeline::E::Source(val.to_string())
    }
}
