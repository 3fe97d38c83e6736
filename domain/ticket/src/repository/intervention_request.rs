use architecture::repository::DBRepository;
use async_trait::async_trait;
use uuid::Uuid;

use crate::model::entity::{intervention_request::InterventionRequestStatus, InterventionRequest};

#[async_trait]
pub trait InterventionRequestRepo: DBRepository<InterventionRequest> + Send + Sync {
    /// 获取报修单的全部干预申请
    async fn get_by_claim(&self, claim_id: Uuid) -> anyhow::Result<Vec<InterventionRequest>>;

    /// 以 `expected` 状态为条件更新干预申请
    async fn update_with_lock(
        &self,
        request: &InterventionRequest,
        expected: InterventionRequestStatus,
    ) -> anyhow::Result<()>;
}
