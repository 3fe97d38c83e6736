use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    exception::TicketResult,
    model::{
        entity::WorkOrder,
        vo::{Actor, WorkResults},
    },
};

#[async_trait]
pub trait WorkOrderService: Send + Sync {
    async fn get(&self, actor: &Actor, id: Uuid) -> TicketResult<WorkOrder>;

    async fn start(&self, actor: &Actor, id: Uuid) -> TicketResult<WorkOrder>;

    async fn submit_results(
        &self,
        actor: &Actor,
        id: Uuid,
        results: WorkResults,
    ) -> TicketResult<WorkOrder>;

    /// 关闭工单，并级联关闭干预申请、解决报修单
    async fn close(&self, actor: &Actor, id: Uuid) -> TicketResult<WorkOrder>;
}
