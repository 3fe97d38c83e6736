//! 基于角色的访问控制
use domain_account::model::entity::Role;
use uuid::Uuid;

use crate::{
    exception::{TicketException, TicketResult},
    model::{
        entity::Claim,
        vo::{Action, ActionKind, Actor, Subject},
    },
};

/// Whether `actor` may apply `action` to `subject`, regardless of its status.
pub fn can_perform(actor: &Actor, action: &Action, subject: Subject<'_>) -> bool {
    match actor.role {
        Role::Admin => true,
        Role::Technician => match subject {
            // a pre-assigned technician may only take the request for themselves
            Subject::InterventionRequest(request) => {
                request.technician_id == Some(actor.id)
                    && match action {
                        Action::AssignTechnician { technician_id, .. } => *technician_id == actor.id,
                        _ => true,
                    }
            }
            Subject::WorkOrder(order) => order.technician_id == actor.id,
            Subject::Claim(_) => false,
        },
        Role::Agent => match subject {
            Subject::Claim(claim) => {
                claim.agent_id == actor.id
                    && matches!(
                        action.kind(),
                        ActionKind::AssignTechnician | ActionKind::RemoveTechnician
                    )
            }
            Subject::InterventionRequest(_) | Subject::WorkOrder(_) => false,
        },
    }
}

pub fn can_view(actor: &Actor, subject: Subject<'_>) -> bool {
    match actor.role {
        Role::Admin => true,
        Role::Technician => match subject {
            Subject::Claim(claim) => claim.technician_id == Some(actor.id),
            Subject::InterventionRequest(request) => request.technician_id == Some(actor.id),
            Subject::WorkOrder(order) => order.technician_id == actor.id,
        },
        Role::Agent => match subject {
            Subject::Claim(claim) => claim.agent_id == actor.id,
            Subject::InterventionRequest(_) | Subject::WorkOrder(_) => false,
        },
    }
}

pub fn can_create_claim(actor: &Actor) -> bool {
    match actor.role {
        Role::Admin | Role::Agent => true,
        Role::Technician => false,
    }
}

/// Manual intervention requests are opened by an administrator or the agent
/// owning the claim.
pub fn can_create_intervention_request(actor: &Actor, claim: &Claim) -> bool {
    match actor.role {
        Role::Admin => true,
        Role::Agent => claim.agent_id == actor.id,
        Role::Technician => false,
    }
}

pub fn can_list_technician_claims(actor: &Actor, technician_id: Uuid) -> bool {
    match actor.role {
        Role::Admin => true,
        Role::Technician => actor.id == technician_id,
        Role::Agent => false,
    }
}

pub fn authorize(actor: &Actor, action: &Action, subject: Subject<'_>) -> TicketResult<()> {
    if can_perform(actor, action, subject) {
        return Ok(());
    }
    Err(forbidden(
        actor,
        format!("{} {} {}", action.kind(), subject.kind(), subject.id()),
    ))
}

pub fn authorize_view(actor: &Actor, subject: Subject<'_>) -> TicketResult<()> {
    if can_view(actor, subject) {
        return Ok(());
    }
    Err(forbidden(
        actor,
        format!("view {} {}", subject.kind(), subject.id()),
    ))
}

pub fn forbidden(actor: &Actor, operation: String) -> TicketException {
    TicketException::Forbidden {
        actor: actor.id,
        operation,
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;
    use crate::model::{
        entity::{InterventionRequest, WorkOrder},
        vo::NewClaim,
    };

    fn claim(agent_id: Uuid, technician_id: Option<Uuid>) -> Claim {
        let mut claim = Claim::new(
            NewClaim {
                object: "Screen flickers".to_owned(),
                description: None,
                priority: Default::default(),
            },
            agent_id,
            Utc::now(),
        );
        claim.technician_id = technician_id;
        claim
    }

    #[test]
    fn admin_can_do_everything() {
        let admin = Actor::new(Uuid::new_v4(), Role::Admin);
        let claim = claim(Uuid::new_v4(), None);
        let order = WorkOrder::new(Uuid::new_v4(), "REC".to_owned(), Uuid::new_v4(), Utc::now());
        assert!(can_perform(&admin, &Action::CloseClaim, Subject::Claim(&claim)));
        assert!(can_perform(&admin, &Action::StartWork, Subject::WorkOrder(&order)));
        assert!(can_view(&admin, Subject::WorkOrder(&order)));
        assert!(can_create_claim(&admin));
        assert!(can_list_technician_claims(&admin, Uuid::new_v4()));
    }

    #[test]
    fn technician_only_acts_on_own_work() {
        let technician = Actor::new(Uuid::new_v4(), Role::Technician);
        let own = WorkOrder::new(Uuid::new_v4(), "REC".to_owned(), technician.id, Utc::now());
        let other = WorkOrder::new(Uuid::new_v4(), "REC".to_owned(), Uuid::new_v4(), Utc::now());
        assert!(can_perform(&technician, &Action::StartWork, Subject::WorkOrder(&own)));
        assert!(!can_perform(&technician, &Action::StartWork, Subject::WorkOrder(&other)));
        assert!(matches!(
            authorize(&technician, &Action::StartWork, Subject::WorkOrder(&other)),
            Err(TicketException::Forbidden { .. })
        ));

        let mut request = InterventionRequest::new(Uuid::new_v4(), Utc::now());
        assert!(!can_view(&technician, Subject::InterventionRequest(&request)));
        request.technician_id = Some(technician.id);
        assert!(can_view(&technician, Subject::InterventionRequest(&request)));
        let take = Action::AssignTechnician {
            technician_id: technician.id,
            equipment_id: None,
        };
        let hand_over = Action::AssignTechnician {
            technician_id: Uuid::new_v4(),
            equipment_id: None,
        };
        assert!(can_perform(&technician, &take, Subject::InterventionRequest(&request)));
        assert!(!can_perform(&technician, &hand_over, Subject::InterventionRequest(&request)));

        let assigned = claim(Uuid::new_v4(), Some(technician.id));
        assert!(can_view(&technician, Subject::Claim(&assigned)));
        assert!(!can_perform(
            &technician,
            &Action::RemoveTechnician,
            Subject::Claim(&assigned)
        ));
        assert!(!can_create_claim(&technician));
        assert!(!can_list_technician_claims(&technician, Uuid::new_v4()));
    }

    #[test]
    fn agent_manages_assignment_of_own_claims() {
        let agent = Actor::new(Uuid::new_v4(), Role::Agent);
        let own = claim(agent.id, None);
        let other = claim(Uuid::new_v4(), None);
        let assign = Action::AssignTechnician {
            technician_id: Uuid::new_v4(),
            equipment_id: None,
        };
        assert!(can_perform(&agent, &assign, Subject::Claim(&own)));
        assert!(can_perform(&agent, &Action::RemoveTechnician, Subject::Claim(&own)));
        assert!(!can_perform(&agent, &Action::CloseClaim, Subject::Claim(&own)));
        assert!(!can_perform(&agent, &assign, Subject::Claim(&other)));
        assert!(can_view(&agent, Subject::Claim(&own)));
        assert!(!can_view(&agent, Subject::Claim(&other)));
        assert!(can_create_intervention_request(&agent, &own));
        assert!(!can_create_intervention_request(&agent, &other));
        assert!(matches!(
            authorize_view(&agent, Subject::Claim(&other)),
            Err(TicketException::Forbidden { .. })
        ));
    }
}
