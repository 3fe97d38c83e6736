use std::fmt::Display;

use uuid::Uuid;

use crate::model::entity::{Claim, InterventionRequest, WorkOrder};

/// 动作作用的实体
#[derive(Debug, Clone, Copy)]
pub enum Subject<'a> {
    Claim(&'a Claim),
    InterventionRequest(&'a InterventionRequest),
    WorkOrder(&'a WorkOrder),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubjectKind {
    Claim,
    InterventionRequest,
    WorkOrder,
}

impl Subject<'_> {
    pub fn kind(&self) -> SubjectKind {
        match self {
            Subject::Claim(_) => SubjectKind::Claim,
            Subject::InterventionRequest(_) => SubjectKind::InterventionRequest,
            Subject::WorkOrder(_) => SubjectKind::WorkOrder,
        }
    }

    pub fn id(&self) -> Uuid {
        match self {
            Subject::Claim(claim) => claim.id,
            Subject::InterventionRequest(request) => request.id,
            Subject::WorkOrder(order) => order.id,
        }
    }

    pub fn status(&self) -> String {
        match self {
            Subject::Claim(claim) => format!("{:?}", claim.status),
            Subject::InterventionRequest(request) => format!("{:?}", request.status),
            Subject::WorkOrder(order) => format!("{:?}", order.status),
        }
    }
}

impl Display for SubjectKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            SubjectKind::Claim => "claim",
            SubjectKind::InterventionRequest => "intervention request",
            SubjectKind::WorkOrder => "work order",
        };
        write!(f, "{name}")
    }
}
