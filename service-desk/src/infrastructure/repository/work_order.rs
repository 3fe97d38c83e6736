use architecture::repository::{DBRepository, MutableRepository, ReadOnlyRepository};
use database_model::system::prelude::*;
use domain_ticket::{
    model::entity::{work_order::WorkOrderStatus, WorkOrder},
    repository::WorkOrderRepo,
};
use sea_orm::{prelude::*, QueryTrait, Set};

use crate::infrastructure::database::OrmRepo;

fn active_model(order: &WorkOrder) -> anyhow::Result<WorkOrderActiveModel> {
    Ok(WorkOrderActiveModel {
        id: Set(order.id),
        intervention_request_id: Set(order.intervention_request_id),
        claim_number: Set(order.claim_number.clone()),
        technician_id: Set(order.technician_id),
        status: Set(order.status as i32),
        results: Set(order.results.as_ref().map(serde_json::to_value).transpose()?),
        created_time: Set(order.created_time),
        started_time: Set(order.started_time),
        finished_time: Set(order.finished_time),
        closed_time: Set(order.closed_time),
        last_modified_time: Set(order.last_modified_time),
    })
}

#[async_trait::async_trait]
impl ReadOnlyRepository<WorkOrder> for OrmRepo {
    async fn find_by_id(&self, id: Uuid) -> anyhow::Result<Option<WorkOrder>> {
        WorkOrderEntity::find_by_id(id)
            .one(self.connection())
            .await?
            .map(WorkOrder::try_from)
            .transpose()
    }
}

#[async_trait::async_trait]
impl MutableRepository<WorkOrder> for OrmRepo {
    async fn insert(&self, entity: &WorkOrder) -> anyhow::Result<Uuid> {
        let stmt = WorkOrderEntity::insert(active_model(entity)?).build(self.backend());
        self.push(stmt).await;
        Ok(entity.id)
    }

    async fn save_changed(&self) -> anyhow::Result<bool> {
        self.save_changed().await
    }
}

impl DBRepository<WorkOrder> for OrmRepo {}

#[async_trait::async_trait]
impl WorkOrderRepo for OrmRepo {
    async fn get_by_intervention_request(
        &self,
        intervention_request_id: Uuid,
    ) -> anyhow::Result<Option<WorkOrder>> {
        WorkOrderEntity::find()
            .filter(WorkOrderColumn::InterventionRequestId.eq(intervention_request_id))
            .one(self.connection())
            .await?
            .map(WorkOrder::try_from)
            .transpose()
    }

    async fn get_by_claim(&self, claim_id: Uuid) -> anyhow::Result<Vec<WorkOrder>> {
        WorkOrderEntity::find()
            .inner_join(InterventionRequestEntity)
            .filter(InterventionRequestColumn::ClaimId.eq(claim_id))
            .all(self.connection())
            .await?
            .into_iter()
            .map(WorkOrder::try_from)
            .collect()
    }

    async fn update_with_lock(
        &self,
        order: &WorkOrder,
        expected: WorkOrderStatus,
    ) -> anyhow::Result<()> {
        let stmt = WorkOrderEntity::update_many()
            .set(active_model(order)?)
            .filter(WorkOrderColumn::Id.eq(order.id))
            .filter(WorkOrderColumn::Status.eq(expected as i32))
            .build(self.backend());
        self.push_guarded(stmt, "WorkOrder", order.id).await;
        Ok(())
    }
}
