use thiserror::Error;

use crate::engine::SessionError;
use crate::model::PostError;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    #[error(transparent)]
    Post(#[from] PostError),
    #[error(transparent)]
    Session(#[from] SessionError),
}
