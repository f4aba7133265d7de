use thiserror::Error;

use crate::api::errors::ApiError;
use crate::domain::types::TypeConstraintError;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Record not found")]
    NotFound,

    /// User-correctable form or criteria problem.
    #[error("{0}")]
    Form(String),

    #[error(transparent)]
    Api(#[from] ApiError),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

impl From<TypeConstraintError> for ServiceError {
    fn from(err: TypeConstraintError) -> Self {
        ServiceError::Form(err.to_string())
    }
}
