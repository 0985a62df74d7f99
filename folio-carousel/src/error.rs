use thiserror::Error;

use crate::types::CarouselKey;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CarouselError {
    /// The owning task has exited; the carousel no longer accepts input.
    #[error("carousel {0} has been torn down")]
    Closed(CarouselKey),
}

pub type Result<T> = std::result::Result<T, CarouselError>;
