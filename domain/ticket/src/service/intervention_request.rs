use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    exception::TicketResult,
    model::{
        entity::{EquipmentOnRequest, InterventionRequest},
        vo::Actor,
    },
};

#[async_trait]
pub trait InterventionRequestService: Send + Sync {
    /// 手动为报修单创建干预申请
    async fn create(&self, actor: &Actor, claim_id: Uuid) -> TicketResult<InterventionRequest>;

    async fn get(&self, actor: &Actor, id: Uuid) -> TicketResult<InterventionRequest>;

    /// 干预申请关联的设备
    async fn get_equipments(
        &self,
        actor: &Actor,
        id: Uuid,
    ) -> TicketResult<Vec<EquipmentOnRequest>>;

    async fn assign_technician(
        &self,
        actor: &Actor,
        id: Uuid,
        technician_id: Uuid,
        equipment_id: Option<Uuid>,
    ) -> TicketResult<InterventionRequest>;
}
