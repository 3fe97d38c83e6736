use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use domain_ticket::{
    exception::{TicketException, TicketResult},
    model::{
        entity::WorkOrder,
        vo::{Action, Actor, ClaimRef, Subject, TransitionContext, WorkResults},
    },
    policy::{access, apply_action},
    repository::{ClaimRepo, InterventionRequestRepo, WorkOrderRepo},
    service::{EffectApplyService, WorkOrderService},
};
use uuid::Uuid;

#[derive(typed_builder::TypedBuilder)]
pub struct WorkOrderServiceImpl {
    work_order_repo: Arc<dyn WorkOrderRepo>,
    intervention_request_repo: Arc<dyn InterventionRequestRepo>,
    claim_repo: Arc<dyn ClaimRepo>,
    effect_service: Arc<dyn EffectApplyService>,
}

#[async_trait]
impl WorkOrderService for WorkOrderServiceImpl {
    async fn get(&self, actor: &Actor, id: Uuid) -> TicketResult<WorkOrder> {
        let order = self.load(id).await?;
        access::authorize_view(actor, Subject::WorkOrder(&order))?;
        Ok(order)
    }

    async fn start(&self, actor: &Actor, id: Uuid) -> TicketResult<WorkOrder> {
        let order = self.load(id).await?;
        let context = TransitionContext::builder().now(Utc::now()).build();
        let updated = self.commit(&order, &Action::StartWork, actor, &context).await?;
        tracing::info!("Work on work order {id} started.");
        Ok(updated)
    }

    async fn submit_results(
        &self,
        actor: &Actor,
        id: Uuid,
        results: WorkResults,
    ) -> TicketResult<WorkOrder> {
        let order = self.load(id).await?;
        let context = TransitionContext::builder().now(Utc::now()).build();
        let action = Action::SubmitResults { results };
        let updated = self.commit(&order, &action, actor, &context).await?;
        tracing::info!("Results of work order {id} submitted.");
        Ok(updated)
    }

    async fn close(&self, actor: &Actor, id: Uuid) -> TicketResult<WorkOrder> {
        let order = self.load(id).await?;
        let action = Action::CloseWorkOrder;
        access::authorize(actor, &action, Subject::WorkOrder(&order))?;

        let parent_claim = match self
            .intervention_request_repo
            .find_by_id(order.intervention_request_id)
            .await?
        {
            Some(request) => self.claim_repo.find_by_id(request.claim_id).await?,
            None => None,
        };
        let context = TransitionContext::builder()
            .now(Utc::now())
            .parent_claim(parent_claim.map(|claim| ClaimRef {
                id: claim.id,
                status: claim.status,
            }))
            .build();

        let updated = self.commit(&order, &action, actor, &context).await?;
        tracing::info!("Work order {id} of claim {} closed.", updated.claim_number);
        Ok(updated)
    }
}

impl WorkOrderServiceImpl {
    async fn load(&self, id: Uuid) -> TicketResult<WorkOrder> {
        self.work_order_repo
            .find_by_id(id)
            .await?
            .ok_or(TicketException::NotFound {
                entity: "WorkOrder",
                id,
            })
    }

    async fn commit(
        &self,
        order: &WorkOrder,
        action: &Action,
        actor: &Actor,
        context: &TransitionContext,
    ) -> TicketResult<WorkOrder> {
        let transition = apply_action(order, action, actor, context)?;
        self.work_order_repo
            .update_with_lock(&transition.entity, order.status)
            .await?;
        self.effect_service
            .apply(transition.effects, context.now)
            .await?;
        self.work_order_repo.save_changed().await?;
        Ok(transition.entity)
    }
}
