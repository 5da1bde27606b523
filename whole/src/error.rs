use std::collections::TryReserveError;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("failed to grow word buffer: {0}")]
    Alloc(#[from] TryReserveError),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
