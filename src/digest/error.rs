use thiserror::Error;

use crate::pipeline;

#[derive(Error, Debug)]
pub enum E {
    #[error("Hashing already finished")]
    AlreadyFinished,
}

impl From<E> for pipeline::E {
    fn from(val: E) -> Self {
        pipeline::E::Digest(val.to_string())
    }
}
