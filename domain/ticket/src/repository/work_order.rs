use architecture::repository::DBRepository;
use async_trait::async_trait;
use uuid::Uuid;

use crate::model::entity::{work_order::WorkOrderStatus, WorkOrder};

#[async_trait]
pub trait WorkOrderRepo: DBRepository<WorkOrder> + Send + Sync {
    async fn get_by_intervention_request(
        &self,
        intervention_request_id: Uuid,
    ) -> anyhow::Result<Option<WorkOrder>>;

    /// 获取报修单下全部干预申请的工单
    async fn get_by_claim(&self, claim_id: Uuid) -> anyhow::Result<Vec<WorkOrder>>;

    /// 以 `expected` 状态为条件更新工单
    async fn update_with_lock(
        &self,
        order: &WorkOrder,
        expected: WorkOrderStatus,
    ) -> anyhow::Result<()>;
}
