use crate::pipeline;
use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum E {
    #[error("{0}")]
    Pipeline(pipeline::E),
    #[error("IO: {0}")]
    IO(#[from] io::Error),
}

impl From<pipeline::E> for E {
    fn from(err: pipeline::E) -> Self {
        E::Pipeline(err)
    }
}
