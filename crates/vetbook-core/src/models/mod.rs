//! Domain models for the vetbook system.

mod appointment;
mod association;
mod person;
mod pet;
mod tag;

pub use appointment::*;
pub use association::*;
pub use person::*;
pub use pet::*;
pub use tag::*;

use thiserror::Error;

/// Model construction errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),
}

pub type ModelResult<T> = Result<T, ModelError>;
