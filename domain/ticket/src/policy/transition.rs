//! 状态转换引擎
use domain_account::model::entity::Role;
use uuid::Uuid;

use crate::{
    exception::{TicketException, TicketResult},
    model::{
        entity::{
            claim::ClaimStatus, intervention_request::InterventionRequestStatus,
            work_order::WorkOrderStatus, Claim, InterventionRequest, WorkOrder,
        },
        vo::{Action, Actor, Effect, Subject, SubjectKind, Transition, TransitionContext},
    },
    policy::access,
};

/// An entity whose status is driven by [`Action`]s.
pub trait Transitionable: Clone {
    fn subject(&self) -> Subject<'_>;

    /// Computes the next state of `self` and the cascades it implies, without
    /// checking access.
    fn transition(&self, action: &Action, context: &TransitionContext)
        -> TicketResult<Transition<Self>>;
}

/// Checks access, then payload, then state, and returns the updated copy of
/// `entity` together with the effects the caller must apply.
pub fn apply_action<T: Transitionable>(
    entity: &T,
    action: &Action,
    actor: &Actor,
    context: &TransitionContext,
) -> TicketResult<Transition<T>> {
    access::authorize(actor, action, entity.subject())?;
    validate_payload(action, context)?;
    entity.transition(action, context)
}

fn validate_payload(action: &Action, context: &TransitionContext) -> TicketResult<()> {
    match action {
        Action::AssignTechnician { technician_id, .. } => validate_assignee(*technician_id, context),
        Action::SubmitResults { results } if results.is_empty() => Err(TicketException::Validation {
            reason: "results must not be empty".to_owned(),
        }),
        _ => Ok(()),
    }
}

fn validate_assignee(technician_id: Uuid, context: &TransitionContext) -> TicketResult<()> {
    let assignee = context
        .assignee
        .filter(|assignee| assignee.id == technician_id)
        .ok_or(TicketException::NotFound {
            entity: "User",
            id: technician_id,
        })?;
    match assignee.role {
        Role::Technician => Ok(()),
        Role::Admin | Role::Agent => Err(TicketException::Validation {
            reason: format!("user {technician_id} is not a technician"),
        }),
    }
}

fn invalid<T: Transitionable>(action: &Action, entity: &T) -> TicketException {
    let subject = entity.subject();
    TicketException::InvalidTransition {
        action: action.kind(),
        subject: subject.kind(),
        status: subject.status(),
    }
}

impl Transitionable for Claim {
    fn subject(&self) -> Subject<'_> {
        Subject::Claim(self)
    }

    fn transition(
        &self,
        action: &Action,
        context: &TransitionContext,
    ) -> TicketResult<Transition<Self>> {
        let mut next = self.clone();
        let mut effects = vec![];
        match (action, self.status) {
            (Action::AssignTechnician { technician_id, .. }, ClaimStatus::Open) => {
                next.status = ClaimStatus::InProgress;
                next.technician_id = Some(*technician_id);
                if context.open_intervention_requests > 0 {
                    effects.push(Effect::TransferWork {
                        claim_id: self.id,
                        technician_id: Some(*technician_id),
                    });
                } else if context.policy.auto_create_intervention_request {
                    effects.push(Effect::CreateInterventionRequest {
                        claim_id: self.id,
                        technician_id: Some(*technician_id),
                    });
                }
            }
            (Action::AssignTechnician { technician_id, .. }, ClaimStatus::InProgress)
                if self.technician_id.is_some_and(|current| current != *technician_id) =>
            {
                next.technician_id = Some(*technician_id);
                effects.push(Effect::TransferWork {
                    claim_id: self.id,
                    technician_id: Some(*technician_id),
                });
            }
            (Action::RemoveTechnician, ClaimStatus::InProgress) => {
                // a pending work order would stay with the removed technician
                if context.open_work_orders > 0 {
                    return Err(TicketException::WorkOrderActive { claim_id: self.id });
                }
                next.status = ClaimStatus::Open;
                next.technician_id = None;
                effects.push(Effect::TransferWork {
                    claim_id: self.id,
                    technician_id: None,
                });
            }
            (Action::CloseClaim, ClaimStatus::Resolved) => {
                next.status = ClaimStatus::Closed;
                next.closed_time = Some(context.now);
            }
            _ => return Err(invalid(action, self)),
        }
        next.last_modified_time = context.now;
        Ok(Transition {
            entity: next,
            effects,
        })
    }
}

impl Transitionable for InterventionRequest {
    fn subject(&self) -> Subject<'_> {
        Subject::InterventionRequest(self)
    }

    fn transition(
        &self,
        action: &Action,
        context: &TransitionContext,
    ) -> TicketResult<Transition<Self>> {
        let mut next = self.clone();
        let mut effects = vec![];
        match (action, self.status) {
            (
                Action::AssignTechnician {
                    technician_id,
                    equipment_id,
                },
                InterventionRequestStatus::Pending,
            ) if !context.has_work_order => {
                let claim = context.parent_claim.ok_or(TicketException::MissingParent {
                    subject: self.subject().kind(),
                    id: self.id,
                })?;
                if claim.status != ClaimStatus::InProgress {
                    return Err(TicketException::InvalidTransition {
                        action: action.kind(),
                        subject: SubjectKind::Claim,
                        status: format!("{:?}", claim.status),
                    });
                }
                let claim_number =
                    context
                        .claim_number
                        .clone()
                        .ok_or(TicketException::MissingParent {
                            subject: self.subject().kind(),
                            id: self.id,
                        })?;
                next.status = InterventionRequestStatus::InProgress;
                next.technician_id = Some(*technician_id);
                effects.push(Effect::CreateEquipmentOnRequest {
                    intervention_request_id: self.id,
                    equipment_id: *equipment_id,
                });
                effects.push(Effect::CreateWorkOrder {
                    intervention_request_id: self.id,
                    claim_number,
                    technician_id: *technician_id,
                });
            }
            _ => return Err(invalid(action, self)),
        }
        next.last_modified_time = context.now;
        Ok(Transition {
            entity: next,
            effects,
        })
    }
}

impl Transitionable for WorkOrder {
    fn subject(&self) -> Subject<'_> {
        Subject::WorkOrder(self)
    }

    fn transition(
        &self,
        action: &Action,
        context: &TransitionContext,
    ) -> TicketResult<Transition<Self>> {
        if let Action::CloseWorkOrder = action {
            if !self.results.as_ref().is_some_and(|results| !results.is_empty()) {
                return Err(TicketException::EmptyResults {
                    work_order_id: self.id,
                });
            }
        }

        let mut next = self.clone();
        let mut effects = vec![];
        match (action, self.status) {
            (Action::StartWork, WorkOrderStatus::Pending) => {
                next.status = WorkOrderStatus::InProgress;
                next.started_time = Some(context.now);
            }
            (Action::SubmitResults { results }, WorkOrderStatus::InProgress) => {
                next.status = WorkOrderStatus::Done;
                next.results = Some(results.clone());
                next.finished_time = Some(context.now);
            }
            (Action::CloseWorkOrder, WorkOrderStatus::Done) => {
                let claim = context.parent_claim.ok_or(TicketException::MissingParent {
                    subject: self.subject().kind(),
                    id: self.id,
                })?;
                next.status = WorkOrderStatus::Closed;
                next.closed_time = Some(context.now);
                effects.push(Effect::CloseInterventionRequest {
                    intervention_request_id: self.intervention_request_id,
                });
                match claim.status {
                    ClaimStatus::InProgress => effects.push(Effect::ResolveClaim {
                        claim_id: claim.id,
                        resolved_at: context.now,
                    }),
                    ClaimStatus::Resolved | ClaimStatus::Closed => {}
                    ClaimStatus::Open => {
                        return Err(TicketException::InvalidTransition {
                            action: action.kind(),
                            subject: SubjectKind::Claim,
                            status: format!("{:?}", claim.status),
                        })
                    }
                }
            }
            _ => return Err(invalid(action, self)),
        }
        next.last_modified_time = context.now;
        Ok(Transition {
            entity: next,
            effects,
        })
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, Utc};
    use serde_json::json;

    use super::*;
    use crate::model::vo::{Assignee, CascadePolicy, ClaimRef, NewClaim, WorkResults};

    fn admin() -> Actor {
        Actor::new(Uuid::new_v4(), Role::Admin)
    }

    fn technician() -> Actor {
        Actor::new(Uuid::new_v4(), Role::Technician)
    }

    fn open_claim() -> Claim {
        Claim::new(
            NewClaim {
                object: "Broken pump".to_owned(),
                description: Some("Leaks since monday".to_owned()),
                priority: Default::default(),
            },
            Uuid::new_v4(),
            Utc::now() - Duration::hours(1),
        )
    }

    fn assign(technician_id: Uuid) -> Action {
        Action::AssignTechnician {
            technician_id,
            equipment_id: None,
        }
    }

    fn assign_context(assignee: &Actor) -> TransitionContext {
        TransitionContext::builder()
            .now(Utc::now())
            .assignee(Some(Assignee {
                id: assignee.id,
                role: assignee.role,
            }))
            .build()
    }

    fn results(value: serde_json::Value) -> WorkResults {
        serde_json::from_value(value).unwrap()
    }

    fn work_order(status: WorkOrderStatus, technician_id: Uuid) -> WorkOrder {
        let mut order = WorkOrder::new(
            Uuid::new_v4(),
            "REC-20240301-000001".to_owned(),
            technician_id,
            Utc::now(),
        );
        order.status = status;
        order
    }

    #[test]
    fn assigning_open_claim_starts_it_and_creates_intervention_request() {
        let claim = open_claim();
        let tech = technician();
        let context = assign_context(&tech);
        let transition = apply_action(&claim, &assign(tech.id), &admin(), &context).unwrap();

        assert_eq!(transition.entity.status, ClaimStatus::InProgress);
        assert_eq!(transition.entity.technician_id, Some(tech.id));
        assert_eq!(transition.entity.last_modified_time, context.now);
        assert_eq!(
            transition.effects,
            vec![Effect::CreateInterventionRequest {
                claim_id: claim.id,
                technician_id: Some(tech.id),
            }]
        );
        // the input is left untouched
        assert_eq!(claim.status, ClaimStatus::Open);
    }

    #[test]
    fn open_requests_are_handed_to_the_new_technician_instead_of_duplicated() {
        let claim = open_claim();
        let tech = technician();
        let disabled = TransitionContext::builder()
            .now(Utc::now())
            .policy(CascadePolicy {
                auto_create_intervention_request: false,
            })
            .assignee(Some(Assignee {
                id: tech.id,
                role: Role::Technician,
            }))
            .build();
        let transition = apply_action(&claim, &assign(tech.id), &admin(), &disabled).unwrap();
        assert!(transition.effects.is_empty());

        let already_open = TransitionContext::builder()
            .now(Utc::now())
            .open_intervention_requests(1)
            .assignee(Some(Assignee {
                id: tech.id,
                role: Role::Technician,
            }))
            .build();
        let transition = apply_action(&claim, &assign(tech.id), &admin(), &already_open).unwrap();
        assert_eq!(transition.entity.status, ClaimStatus::InProgress);
        assert_eq!(
            transition.effects,
            vec![Effect::TransferWork {
                claim_id: claim.id,
                technician_id: Some(tech.id),
            }]
        );
    }

    #[test]
    fn same_technician_twice_is_rejected() {
        let claim = open_claim();
        let tech = technician();
        let context = assign_context(&tech);
        let first = apply_action(&claim, &assign(tech.id), &admin(), &context).unwrap();

        let second = apply_action(&first.entity, &assign(tech.id), &admin(), &context);
        assert!(matches!(
            second,
            Err(TicketException::InvalidTransition { .. })
        ));
    }

    #[test]
    fn reassigning_keeps_claim_in_progress_and_transfers_work() {
        let claim = open_claim();
        let first_tech = technician();
        let first =
            apply_action(&claim, &assign(first_tech.id), &admin(), &assign_context(&first_tech))
                .unwrap();

        let second_tech = technician();
        let context = TransitionContext::builder()
            .now(Utc::now())
            .open_intervention_requests(1)
            .assignee(Some(Assignee {
                id: second_tech.id,
                role: Role::Technician,
            }))
            .build();
        let second =
            apply_action(&first.entity, &assign(second_tech.id), &admin(), &context).unwrap();
        assert_eq!(second.entity.status, ClaimStatus::InProgress);
        assert_eq!(second.entity.technician_id, Some(second_tech.id));
        assert_eq!(
            second.effects,
            vec![Effect::TransferWork {
                claim_id: claim.id,
                technician_id: Some(second_tech.id),
            }]
        );
    }

    #[test]
    fn assignee_must_exist_and_be_a_technician() {
        let claim = open_claim();
        let tech = technician();
        let missing = TransitionContext::builder().now(Utc::now()).build();
        assert!(matches!(
            apply_action(&claim, &assign(tech.id), &admin(), &missing),
            Err(TicketException::NotFound { entity: "User", .. })
        ));

        let agent = Actor::new(Uuid::new_v4(), Role::Agent);
        assert!(matches!(
            apply_action(&claim, &assign(agent.id), &admin(), &assign_context(&agent)),
            Err(TicketException::Validation { .. })
        ));
    }

    #[test]
    fn remove_technician_reopens_claim_without_open_work() {
        let claim = open_claim();
        let tech = technician();
        let assigned = apply_action(&claim, &assign(tech.id), &admin(), &assign_context(&tech))
            .unwrap()
            .entity;

        let context = TransitionContext::builder().now(Utc::now()).build();
        let removed = apply_action(&assigned, &Action::RemoveTechnician, &admin(), &context).unwrap();
        assert_eq!(removed.entity.status, ClaimStatus::Open);
        assert_eq!(removed.entity.technician_id, None);
        assert_eq!(
            removed.effects,
            vec![Effect::TransferWork {
                claim_id: claim.id,
                technician_id: None,
            }]
        );

        // a pending work order counts as open work
        let busy = TransitionContext::builder()
            .now(Utc::now())
            .open_work_orders(1)
            .build();
        assert!(matches!(
            apply_action(&assigned, &Action::RemoveTechnician, &admin(), &busy),
            Err(TicketException::WorkOrderActive { .. })
        ));
    }

    #[test]
    fn claims_only_follow_documented_edges() {
        let context = TransitionContext::builder().now(Utc::now()).build();
        let mut claim = open_claim();

        for action in [
            Action::RemoveTechnician,
            Action::StartWork,
            Action::CloseWorkOrder,
            Action::CloseClaim,
        ] {
            assert!(matches!(
                apply_action(&claim, &action, &admin(), &context),
                Err(TicketException::InvalidTransition { .. })
            ));
        }

        claim.status = ClaimStatus::Resolved;
        let closed = apply_action(&claim, &Action::CloseClaim, &admin(), &context).unwrap();
        assert_eq!(closed.entity.status, ClaimStatus::Closed);
        assert_eq!(closed.entity.closed_time, Some(context.now));

        let tech = technician();
        for status in [ClaimStatus::Resolved, ClaimStatus::Closed] {
            claim.status = status;
            assert!(matches!(
                apply_action(&claim, &assign(tech.id), &admin(), &assign_context(&tech)),
                Err(TicketException::InvalidTransition { .. })
            ));
        }
        claim.status = ClaimStatus::Closed;
        assert!(matches!(
            apply_action(&claim, &Action::CloseClaim, &admin(), &context),
            Err(TicketException::InvalidTransition { .. })
        ));
    }

    #[test]
    fn assigning_pending_request_creates_equipment_and_work_order() {
        let tech = technician();
        let request = InterventionRequest::new(Uuid::new_v4(), Utc::now());
        let equipment_id = Uuid::new_v4();
        let parent = ClaimRef {
            id: request.claim_id,
            status: ClaimStatus::InProgress,
        };
        let context = TransitionContext::builder()
            .now(Utc::now())
            .claim_number(Some("REC-20240301-000042".to_owned()))
            .parent_claim(Some(parent))
            .assignee(Some(Assignee {
                id: tech.id,
                role: Role::Technician,
            }))
            .build();
        let action = Action::AssignTechnician {
            technician_id: tech.id,
            equipment_id: Some(equipment_id),
        };
        let transition = apply_action(&request, &action, &admin(), &context).unwrap();

        assert_eq!(
            transition.entity.status,
            InterventionRequestStatus::InProgress
        );
        assert_eq!(transition.entity.technician_id, Some(tech.id));
        assert_eq!(
            transition.effects,
            vec![
                Effect::CreateEquipmentOnRequest {
                    intervention_request_id: request.id,
                    equipment_id: Some(equipment_id),
                },
                Effect::CreateWorkOrder {
                    intervention_request_id: request.id,
                    claim_number: "REC-20240301-000042".to_owned(),
                    technician_id: tech.id,
                },
            ]
        );

        let owned = TransitionContext::builder()
            .now(Utc::now())
            .has_work_order(true)
            .claim_number(Some("REC-20240301-000042".to_owned()))
            .parent_claim(Some(parent))
            .assignee(Some(Assignee {
                id: tech.id,
                role: Role::Technician,
            }))
            .build();
        assert!(matches!(
            apply_action(&request, &action, &admin(), &owned),
            Err(TicketException::InvalidTransition { .. })
        ));
        assert!(matches!(
            apply_action(&transition.entity, &action, &admin(), &context),
            Err(TicketException::InvalidTransition { .. })
        ));
    }

    #[test]
    fn requests_are_only_assigned_under_a_claim_in_progress() {
        let tech = technician();
        let request = InterventionRequest::new(Uuid::new_v4(), Utc::now());
        let context = |parent: Option<ClaimRef>| {
            TransitionContext::builder()
                .now(Utc::now())
                .claim_number(Some("REC-20240301-000043".to_owned()))
                .parent_claim(parent)
                .assignee(Some(Assignee {
                    id: tech.id,
                    role: Role::Technician,
                }))
                .build()
        };

        for status in [ClaimStatus::Open, ClaimStatus::Resolved, ClaimStatus::Closed] {
            let parent = ClaimRef {
                id: request.claim_id,
                status,
            };
            assert!(matches!(
                apply_action(&request, &assign(tech.id), &admin(), &context(Some(parent))),
                Err(TicketException::InvalidTransition {
                    subject: SubjectKind::Claim,
                    ..
                })
            ));
        }
        assert!(matches!(
            apply_action(&request, &assign(tech.id), &admin(), &context(None)),
            Err(TicketException::MissingParent { .. })
        ));
    }

    #[test]
    fn work_order_runs_from_pending_to_done() {
        let tech = technician();
        let context = TransitionContext::builder().now(Utc::now()).build();
        let order = work_order(WorkOrderStatus::Pending, tech.id);

        let started = apply_action(&order, &Action::StartWork, &tech, &context).unwrap();
        assert_eq!(started.entity.status, WorkOrderStatus::InProgress);
        assert_eq!(started.entity.started_time, Some(context.now));

        let submit = Action::SubmitResults {
            results: results(json!({ "notes": "fixed" })),
        };
        let done = apply_action(&started.entity, &submit, &tech, &context).unwrap();
        assert_eq!(done.entity.status, WorkOrderStatus::Done);
        assert_eq!(done.entity.finished_time, Some(context.now));
        assert_eq!(done.entity.results, Some(results(json!({ "notes": "fixed" }))));

        assert!(matches!(
            apply_action(&order, &submit, &tech, &context),
            Err(TicketException::InvalidTransition { .. })
        ));
        let empty = Action::SubmitResults {
            results: results(json!({ "notes": "" })),
        };
        assert!(matches!(
            apply_action(&started.entity, &empty, &tech, &context),
            Err(TicketException::Validation { .. })
        ));
    }

    #[test]
    fn technician_cannot_touch_someone_elses_work_order() {
        let order = work_order(WorkOrderStatus::Pending, Uuid::new_v4());
        let context = TransitionContext::builder().now(Utc::now()).build();
        assert!(matches!(
            apply_action(&order, &Action::StartWork, &technician(), &context),
            Err(TicketException::Forbidden { .. })
        ));
    }

    #[test]
    fn closing_done_work_order_resolves_claim_and_closes_request() {
        let tech = technician();
        let claim_id = Uuid::new_v4();
        let mut order = work_order(WorkOrderStatus::Done, tech.id);
        order.results = Some(results(json!({ "notes": "fixed" })));
        let context = TransitionContext::builder()
            .now(Utc::now())
            .parent_claim(Some(ClaimRef {
                id: claim_id,
                status: ClaimStatus::InProgress,
            }))
            .build();

        let closed = apply_action(&order, &Action::CloseWorkOrder, &tech, &context).unwrap();
        assert_eq!(closed.entity.status, WorkOrderStatus::Closed);
        assert_eq!(closed.entity.closed_time, Some(context.now));
        assert_eq!(
            closed.effects,
            vec![
                Effect::CloseInterventionRequest {
                    intervention_request_id: order.intervention_request_id,
                },
                Effect::ResolveClaim {
                    claim_id,
                    resolved_at: context.now,
                },
            ]
        );

        let resolved = TransitionContext::builder()
            .now(Utc::now())
            .parent_claim(Some(ClaimRef {
                id: claim_id,
                status: ClaimStatus::Resolved,
            }))
            .build();
        let closed = apply_action(&order, &Action::CloseWorkOrder, &tech, &resolved).unwrap();
        assert_eq!(closed.effects.len(), 1);
    }

    #[test]
    fn closing_without_results_fails_before_touching_the_claim() {
        let tech = technician();
        let context = TransitionContext::builder()
            .now(Utc::now())
            .parent_claim(Some(ClaimRef {
                id: Uuid::new_v4(),
                status: ClaimStatus::InProgress,
            }))
            .build();

        for (status, payload) in [
            (WorkOrderStatus::Done, None),
            (WorkOrderStatus::Done, Some(results(json!({})))),
            (WorkOrderStatus::Pending, None),
            (WorkOrderStatus::Closed, Some(results(json!({ "notes": " " })))),
        ] {
            let mut order = work_order(status, tech.id);
            order.results = payload;
            assert!(matches!(
                apply_action(&order, &Action::CloseWorkOrder, &tech, &context),
                Err(TicketException::EmptyResults { .. })
            ));
        }
    }

    #[test]
    fn closing_requires_done_status_and_known_claim() {
        let tech = technician();
        let mut order = work_order(WorkOrderStatus::InProgress, tech.id);
        order.results = Some(results(json!({ "notes": "fixed" })));
        let context = TransitionContext::builder()
            .now(Utc::now())
            .parent_claim(Some(ClaimRef {
                id: Uuid::new_v4(),
                status: ClaimStatus::InProgress,
            }))
            .build();
        assert!(matches!(
            apply_action(&order, &Action::CloseWorkOrder, &tech, &context),
            Err(TicketException::InvalidTransition { .. })
        ));

        order.status = WorkOrderStatus::Done;
        let orphan = TransitionContext::builder().now(Utc::now()).build();
        assert!(matches!(
            apply_action(&order, &Action::CloseWorkOrder, &tech, &orphan),
            Err(TicketException::MissingParent { .. })
        ));
    }
}
