use std::sync::Arc;

use architecture::model::{Pagination, PaginationResult};
use async_trait::async_trait;
use chrono::Utc;
use domain_account::{model::entity::Role, repository::UserRepo};
use domain_ticket::{
    exception::{TicketException, TicketResult},
    model::{
        entity::Claim,
        vo::{Action, Actor, CascadePolicy, NewClaim, Subject, TransitionContext},
    },
    policy::{access, apply_action},
    repository::{ClaimRepo, ClaimScope, InterventionRequestRepo, WorkOrderRepo},
    service::{ClaimService, EffectApplyService},
};
use uuid::Uuid;

use crate::assignee;

#[derive(typed_builder::TypedBuilder)]
pub struct ClaimServiceImpl {
    claim_repo: Arc<dyn ClaimRepo>,
    intervention_request_repo: Arc<dyn InterventionRequestRepo>,
    work_order_repo: Arc<dyn WorkOrderRepo>,
    user_repo: Arc<dyn UserRepo>,
    effect_service: Arc<dyn EffectApplyService>,
    #[builder(default)]
    policy: CascadePolicy,
}

#[async_trait]
impl ClaimService for ClaimServiceImpl {
    async fn create(&self, actor: &Actor, draft: NewClaim) -> TicketResult<Claim> {
        if !access::can_create_claim(actor) {
            return Err(access::forbidden(actor, "create claims".to_owned()));
        }
        draft.validate()?;
        let claim = Claim::new(draft, actor.id, Utc::now());
        self.claim_repo.insert(&claim).await?;
        self.claim_repo.save_changed().await?;
        tracing::info!("Claim {} created by {}.", claim.ticket_number, actor.id);
        Ok(claim)
    }

    async fn get(&self, actor: &Actor, id: Uuid) -> TicketResult<Claim> {
        let claim = self.load(id).await?;
        access::authorize_view(actor, Subject::Claim(&claim))?;
        Ok(claim)
    }

    async fn list(
        &self,
        actor: &Actor,
        pagination: &Pagination,
    ) -> TicketResult<PaginationResult<Claim>> {
        let scope = match actor.role {
            Role::Admin => ClaimScope::All,
            Role::Agent => ClaimScope::Agent(actor.id),
            Role::Technician => ClaimScope::Technician(actor.id),
        };
        Ok(self.claim_repo.get_page(scope, pagination).await?)
    }

    async fn list_by_technician(
        &self,
        actor: &Actor,
        technician_id: Uuid,
        pagination: &Pagination,
    ) -> TicketResult<PaginationResult<Claim>> {
        if !access::can_list_technician_claims(actor, technician_id) {
            return Err(access::forbidden(
                actor,
                format!("list claims of technician {technician_id}"),
            ));
        }
        Ok(self
            .claim_repo
            .get_page(ClaimScope::Technician(technician_id), pagination)
            .await?)
    }

    async fn assign_technician(
        &self,
        actor: &Actor,
        id: Uuid,
        technician_id: Uuid,
    ) -> TicketResult<Claim> {
        let claim = self.load(id).await?;
        let action = Action::AssignTechnician {
            technician_id,
            equipment_id: None,
        };
        access::authorize(actor, &action, Subject::Claim(&claim))?;

        let technician = self.user_repo.find_by_id(technician_id).await?;
        let open_intervention_requests = self
            .intervention_request_repo
            .get_by_claim(claim.id)
            .await?
            .iter()
            .filter(|request| request.is_open())
            .count();
        let context = TransitionContext::builder()
            .now(Utc::now())
            .policy(self.policy)
            .assignee(assignee(technician))
            .open_intervention_requests(open_intervention_requests)
            .build();

        let updated = self.commit(&claim, &action, actor, &context).await?;
        tracing::info!(
            "Technician {technician_id} assigned to claim {}.",
            updated.ticket_number
        );
        Ok(updated)
    }

    async fn remove_technician(&self, actor: &Actor, id: Uuid) -> TicketResult<Claim> {
        let claim = self.load(id).await?;
        let action = Action::RemoveTechnician;
        access::authorize(actor, &action, Subject::Claim(&claim))?;

        let open_work_orders = self
            .work_order_repo
            .get_by_claim(claim.id)
            .await?
            .iter()
            .filter(|order| order.status.is_open())
            .count();
        let context = TransitionContext::builder()
            .now(Utc::now())
            .open_work_orders(open_work_orders)
            .build();

        let transition = apply_action(&claim, &action, actor, &context)?;
        // fails at commit if a work order was opened since the count above
        self.claim_repo
            .update_if_idle(&transition.entity, &claim)
            .await?;
        self.effect_service
            .apply(transition.effects, context.now)
            .await?;
        self.claim_repo.save_changed().await?;
        tracing::info!(
            "Technician removed from claim {}.",
            transition.entity.ticket_number
        );
        Ok(transition.entity)
    }

    async fn close(&self, actor: &Actor, id: Uuid) -> TicketResult<Claim> {
        let claim = self.load(id).await?;
        let context = TransitionContext::builder().now(Utc::now()).build();
        let updated = self.commit(&claim, &Action::CloseClaim, actor, &context).await?;
        tracing::info!("Claim {} closed.", updated.ticket_number);
        Ok(updated)
    }
}

impl ClaimServiceImpl {
    async fn load(&self, id: Uuid) -> TicketResult<Claim> {
        self.claim_repo
            .find_by_id(id)
            .await?
            .ok_or(TicketException::NotFound { entity: "Claim", id })
    }

    /// Applies `action`, then queues the guarded update and the cascades and
    /// commits them together.
    async fn commit(
        &self,
        claim: &Claim,
        action: &Action,
        actor: &Actor,
        context: &TransitionContext,
    ) -> TicketResult<Claim> {
        let transition = apply_action(claim, action, actor, context)?;
        self.claim_repo
            .update_with_lock(&transition.entity, claim.status)
            .await?;
        self.effect_service
            .apply(transition.effects, context.now)
            .await?;
        self.claim_repo.save_changed().await?;
        Ok(transition.entity)
    }
}
