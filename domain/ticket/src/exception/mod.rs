use architecture::{
    exceptions::{Classify, ErrorKind},
    repository::StaleWrite,
};
use thiserror::Error;
use uuid::Uuid;

use crate::model::vo::{ActionKind, SubjectKind};

pub type TicketResult<T> = Result<T, TicketException>;

#[derive(Error, Debug)]
pub enum TicketException {
    #[error("User {actor} is not allowed to {operation}.")]
    Forbidden { actor: Uuid, operation: String },

    #[error("Cannot {action} on {subject} in status {status}.")]
    InvalidTransition {
        action: ActionKind,
        subject: SubjectKind,
        status: String,
    },

    #[error("Claim {claim_id} still has an open work order.")]
    WorkOrderActive { claim_id: Uuid },

    #[error("Work order {work_order_id} has no results to close with.")]
    EmptyResults { work_order_id: Uuid },

    #[error("Invalid payload: {reason}.")]
    Validation { reason: String },

    #[error("No {entity} with id: {id}.")]
    NotFound { entity: &'static str, id: Uuid },

    #[error("No claim linked to {subject} {id}.")]
    MissingParent { subject: SubjectKind, id: Uuid },

    #[error("{entity} {id} was changed by another request.")]
    Conflict { entity: &'static str, id: Uuid },

    #[error("Ticket internal error: {source}")]
    InternalError {
        #[source]
        source: anyhow::Error,
    },
}

impl Classify for TicketException {
    fn kind(&self) -> ErrorKind {
        match self {
            TicketException::Forbidden { .. } => ErrorKind::Forbidden,
            TicketException::InvalidTransition { .. } | TicketException::WorkOrderActive { .. } => {
                ErrorKind::InvalidTransition
            }
            TicketException::EmptyResults { .. } | TicketException::Validation { .. } => {
                ErrorKind::ValidationError
            }
            TicketException::NotFound { .. } | TicketException::MissingParent { .. } => {
                ErrorKind::NotFound
            }
            TicketException::Conflict { .. } => ErrorKind::Conflict,
            TicketException::InternalError { .. } => ErrorKind::Internal,
        }
    }
}

impl From<anyhow::Error> for TicketException {
    fn from(e: anyhow::Error) -> Self {
        match e.downcast::<StaleWrite>() {
            Ok(stale) => TicketException::Conflict {
                entity: stale.entity,
                id: stale.id,
            },
            Err(e) => TicketException::InternalError { source: e },
        }
    }
}

#[cfg(test)]
mod tests {
    use anyhow::anyhow;

    use super::*;

    #[test]
    fn stale_writes_become_conflicts() {
        let id = Uuid::new_v4();
        let e: TicketException = anyhow::Error::new(StaleWrite { entity: "Claim", id }).into();
        assert!(matches!(e, TicketException::Conflict { entity: "Claim", id: got } if got == id));
        assert_eq!(e.kind(), ErrorKind::Conflict);

        let e: TicketException = anyhow!("connection reset").into();
        assert_eq!(e.kind(), ErrorKind::Internal);
    }
}
