use serde::Serialize;

/// Stable error classification shared by every domain exception.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum ErrorKind {
    Unauthorized,
    Forbidden,
    NotFound,
    ValidationError,
    InvalidTransition,
    Conflict,
    Internal,
}

impl ErrorKind {
    /// HTTP status the kind is reported with.
    pub fn status(&self) -> u16 {
        match self {
            ErrorKind::Unauthorized => 401,
            ErrorKind::Forbidden => 403,
            ErrorKind::NotFound => 404,
            ErrorKind::ValidationError => 400,
            ErrorKind::InvalidTransition | ErrorKind::Conflict => 409,
            ErrorKind::Internal => 500,
        }
    }
}

/// Implemented by the domain exception enums.
pub trait Classify {
    fn kind(&self) -> ErrorKind;
}
