use crate::grid::ValidationError;
use crate::store::StoreError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MutantError {
    #[error("Invalid DNA: {0}")]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Storage(#[from] StoreError),
}

pub type MutantResult<T> = Result<T, MutantError>;
