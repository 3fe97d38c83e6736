use std::sync::Arc;

use architecture::repository::ReadOnlyRepository;
use async_trait::async_trait;
use chrono::Utc;
use domain_account::repository::UserRepo;
use domain_ticket::{
    exception::{TicketException, TicketResult},
    model::{
        entity::{claim::ClaimStatus, Claim, Equipment, EquipmentOnRequest, InterventionRequest},
        vo::{Action, Actor, ClaimRef, Subject, TransitionContext},
    },
    policy::{access, apply_action},
    repository::{ClaimRepo, EquipmentOnRequestRepo, InterventionRequestRepo, WorkOrderRepo},
    service::{EffectApplyService, InterventionRequestService},
};
use uuid::Uuid;

use crate::assignee;

#[derive(typed_builder::TypedBuilder)]
pub struct InterventionRequestServiceImpl {
    intervention_request_repo: Arc<dyn InterventionRequestRepo>,
    claim_repo: Arc<dyn ClaimRepo>,
    work_order_repo: Arc<dyn WorkOrderRepo>,
    equipment_on_request_repo: Arc<dyn EquipmentOnRequestRepo>,
    equipment_repo: Arc<dyn ReadOnlyRepository<Equipment>>,
    user_repo: Arc<dyn UserRepo>,
    effect_service: Arc<dyn EffectApplyService>,
}

#[async_trait]
impl InterventionRequestService for InterventionRequestServiceImpl {
    async fn create(&self, actor: &Actor, claim_id: Uuid) -> TicketResult<InterventionRequest> {
        let claim = self.load_claim(claim_id).await?;
        if !access::can_create_intervention_request(actor, &claim) {
            return Err(access::forbidden(
                actor,
                format!("open intervention requests on claim {claim_id}"),
            ));
        }
        match claim.status {
            ClaimStatus::Open | ClaimStatus::InProgress => {}
            ClaimStatus::Resolved | ClaimStatus::Closed => {
                return Err(TicketException::Validation {
                    reason: format!("claim {} is already {:?}", claim.ticket_number, claim.status),
                })
            }
        }
        let request = InterventionRequest::new(claim.id, Utc::now());
        self.intervention_request_repo.insert(&request).await?;
        self.intervention_request_repo.save_changed().await?;
        tracing::info!(
            "Intervention request {} opened on claim {}.",
            request.id,
            claim.ticket_number
        );
        Ok(request)
    }

    async fn get(&self, actor: &Actor, id: Uuid) -> TicketResult<InterventionRequest> {
        let request = self.load(id).await?;
        access::authorize_view(actor, Subject::InterventionRequest(&request))?;
        Ok(request)
    }

    async fn get_equipments(
        &self,
        actor: &Actor,
        id: Uuid,
    ) -> TicketResult<Vec<EquipmentOnRequest>> {
        let request = self.get(actor, id).await?;
        Ok(self
            .equipment_on_request_repo
            .get_by_intervention_request(request.id)
            .await?)
    }

    async fn assign_technician(
        &self,
        actor: &Actor,
        id: Uuid,
        technician_id: Uuid,
        equipment_id: Option<Uuid>,
    ) -> TicketResult<InterventionRequest> {
        let request = self.load(id).await?;
        let action = Action::AssignTechnician {
            technician_id,
            equipment_id,
        };
        access::authorize(actor, &action, Subject::InterventionRequest(&request))?;

        if let Some(equipment_id) = equipment_id {
            self.equipment_repo
                .find_by_id(equipment_id)
                .await?
                .ok_or(TicketException::NotFound {
                    entity: "Equipment",
                    id: equipment_id,
                })?;
        }
        let technician = self.user_repo.find_by_id(technician_id).await?;
        let claim = self.claim_repo.find_by_id(request.claim_id).await?;
        let has_work_order = self
            .work_order_repo
            .get_by_intervention_request(request.id)
            .await?
            .is_some();
        let context = TransitionContext::builder()
            .now(Utc::now())
            .assignee(assignee(technician))
            .claim_number(claim.as_ref().map(|claim| claim.ticket_number.clone()))
            .parent_claim(claim.as_ref().map(|claim| ClaimRef {
                id: claim.id,
                status: claim.status,
            }))
            .has_work_order(has_work_order)
            .build();

        let transition = apply_action(&request, &action, actor, &context)?;
        self.intervention_request_repo
            .update_with_lock(&transition.entity, request.status)
            .await?;
        // the claim must still be in progress when the work order lands
        self.claim_repo
            .touch_with_lock(request.claim_id, ClaimStatus::InProgress, context.now)
            .await?;
        self.effect_service
            .apply(transition.effects, context.now)
            .await?;
        self.intervention_request_repo.save_changed().await?;
        tracing::info!("Technician {technician_id} assigned to intervention request {id}.");
        Ok(transition.entity)
    }
}

impl InterventionRequestServiceImpl {
    async fn load(&self, id: Uuid) -> TicketResult<InterventionRequest> {
        self.intervention_request_repo
            .find_by_id(id)
            .await?
            .ok_or(TicketException::NotFound {
                entity: "InterventionRequest",
                id,
            })
    }

    async fn load_claim(&self, id: Uuid) -> TicketResult<Claim> {
        self.claim_repo
            .find_by_id(id)
            .await?
            .ok_or(TicketException::NotFound { entity: "Claim", id })
    }
}
