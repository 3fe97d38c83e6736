use architecture::repository::DBRepository;
use async_trait::async_trait;
use uuid::Uuid;

use crate::model::entity::EquipmentOnRequest;

#[async_trait]
pub trait EquipmentOnRequestRepo: DBRepository<EquipmentOnRequest> + Send + Sync {
    async fn get_by_intervention_request(
        &self,
        intervention_request_id: Uuid,
    ) -> anyhow::Result<Vec<EquipmentOnRequest>>;
}
