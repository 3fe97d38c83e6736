use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use domain_ticket::{
    exception::{TicketException, TicketResult},
    model::{
        entity::{
            claim::ClaimStatus, intervention_request::InterventionRequestStatus,
            EquipmentOnRequest, InterventionRequest, WorkOrder,
        },
        vo::Effect,
    },
    repository::{ClaimRepo, EquipmentOnRequestRepo, InterventionRequestRepo, WorkOrderRepo},
    service::EffectApplyService,
};
use uuid::Uuid;

/// Turns effect descriptors into queued repository writes. Nothing is
/// committed here.
#[derive(typed_builder::TypedBuilder)]
pub struct EffectApplyServiceImpl {
    claim_repo: Arc<dyn ClaimRepo>,
    intervention_request_repo: Arc<dyn InterventionRequestRepo>,
    equipment_on_request_repo: Arc<dyn EquipmentOnRequestRepo>,
    work_order_repo: Arc<dyn WorkOrderRepo>,
}

#[async_trait]
impl EffectApplyService for EffectApplyServiceImpl {
    async fn apply(&self, effects: Vec<Effect>, now: DateTime<Utc>) -> TicketResult<()> {
        for effect in effects {
            tracing::debug!("Applying {effect:?}.");
            match effect {
                Effect::CreateInterventionRequest {
                    claim_id,
                    technician_id,
                } => {
                    let mut request = InterventionRequest::new(claim_id, now);
                    request.technician_id = technician_id;
                    self.intervention_request_repo.insert(&request).await?;
                }
                Effect::TransferWork {
                    claim_id,
                    technician_id,
                } => self.transfer_work(claim_id, technician_id, now).await?,
                Effect::CloseInterventionRequest {
                    intervention_request_id,
                } => {
                    let mut request = self
                        .intervention_request_repo
                        .find_by_id(intervention_request_id)
                        .await?
                        .ok_or(TicketException::NotFound {
                            entity: "InterventionRequest",
                            id: intervention_request_id,
                        })?;
                    let expected = request.status;
                    request.status = InterventionRequestStatus::Closed;
                    request.last_modified_time = now;
                    self.intervention_request_repo
                        .update_with_lock(&request, expected)
                        .await?;
                }
                Effect::CreateEquipmentOnRequest {
                    intervention_request_id,
                    equipment_id,
                } => {
                    let equipment =
                        EquipmentOnRequest::new(intervention_request_id, equipment_id, now);
                    self.equipment_on_request_repo.insert(&equipment).await?;
                }
                Effect::CreateWorkOrder {
                    intervention_request_id,
                    claim_number,
                    technician_id,
                } => {
                    let order =
                        WorkOrder::new(intervention_request_id, claim_number, technician_id, now);
                    self.work_order_repo.insert(&order).await?;
                }
                Effect::ResolveClaim {
                    claim_id,
                    resolved_at,
                } => {
                    let mut claim = self.claim_repo.find_by_id(claim_id).await?.ok_or(
                        TicketException::NotFound {
                            entity: "Claim",
                            id: claim_id,
                        },
                    )?;
                    claim.status = ClaimStatus::Resolved;
                    claim.resolution_date = Some(resolved_at);
                    claim.last_modified_time = now;
                    // the claim must still be in progress when the write lands
                    self.claim_repo
                        .update_with_lock(&claim, ClaimStatus::InProgress)
                        .await?;
                }
            }
        }
        Ok(())
    }
}

impl EffectApplyServiceImpl {
    async fn transfer_work(
        &self,
        claim_id: Uuid,
        technician_id: Option<Uuid>,
        now: DateTime<Utc>,
    ) -> TicketResult<()> {
        let requests = self.intervention_request_repo.get_by_claim(claim_id).await?;
        for mut request in requests.into_iter().filter(InterventionRequest::is_open) {
            if request.technician_id == technician_id {
                continue;
            }
            let expected = request.status;
            request.technician_id = technician_id;
            request.last_modified_time = now;
            self.intervention_request_repo
                .update_with_lock(&request, expected)
                .await?;
        }

        let orders = self.work_order_repo.get_by_claim(claim_id).await?;
        for mut order in orders.into_iter().filter(|order| order.status.is_open()) {
            let Some(technician_id) = technician_id else {
                return Err(TicketException::WorkOrderActive { claim_id });
            };
            if order.technician_id == technician_id {
                continue;
            }
            let expected = order.status;
            order.technician_id = technician_id;
            order.last_modified_time = now;
            self.work_order_repo.update_with_lock(&order, expected).await?;
        }
        Ok(())
    }
}
