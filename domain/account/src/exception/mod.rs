use architecture::exceptions::{Classify, ErrorKind};
use thiserror::Error;

pub type AccountResult<T> = Result<T, AccountException>;

#[derive(Error, Debug)]
pub enum AccountException {
    #[error("Wrong user name or password.")]
    InvalidCredentials,

    #[error("Invalid bearer token: {reason}.")]
    InvalidToken { reason: String },

    #[error("Only administrators can manage users.")]
    Forbidden,

    #[error("User name: {name} is already taken.")]
    NameTaken { name: String },

    #[error("Invalid user data: {reason}.")]
    Validation { reason: String },

    #[error("Account internal error: {source}")]
    InternalError {
        #[source]
        source: anyhow::Error,
    },
}

impl Classify for AccountException {
    fn kind(&self) -> ErrorKind {
        match self {
            AccountException::InvalidCredentials | AccountException::InvalidToken { .. } => {
                ErrorKind::Unauthorized
            }
            AccountException::Forbidden => ErrorKind::Forbidden,
            AccountException::NameTaken { .. } => ErrorKind::Conflict,
            AccountException::Validation { .. } => ErrorKind::ValidationError,
            AccountException::InternalError { .. } => ErrorKind::Internal,
        }
    }
}

impl From<anyhow::Error> for AccountException {
    fn from(e: anyhow::Error) -> Self {
        AccountException::InternalError { source: e }
    }
}
