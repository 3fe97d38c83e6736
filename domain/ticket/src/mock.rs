use architecture::{
    model::{Pagination, PaginationResult},
    repository::{DBRepository, MutableRepository, ReadOnlyRepository},
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use mockall::mock;
use uuid::Uuid;

use crate::{
    exception::TicketResult,
    model::{
        entity::{
            claim::ClaimStatus, intervention_request::InterventionRequestStatus,
            work_order::WorkOrderStatus, Claim, Equipment, EquipmentOnRequest,
            InterventionRequest, WorkOrder,
        },
        vo::Effect,
    },
    repository::{
        ClaimRepo, ClaimScope, EquipmentOnRequestRepo, InterventionRequestRepo, WorkOrderRepo,
    },
    service::EffectApplyService,
};

mock! {
    pub ClaimRepo {}
    #[async_trait]
    impl ClaimRepo for ClaimRepo {
        async fn get_page(
            &self,
            scope: ClaimScope,
            pagination: &Pagination,
        ) -> anyhow::Result<PaginationResult<Claim>>;
        async fn update_with_lock(&self, claim: &Claim, expected: ClaimStatus) -> anyhow::Result<()>;
        async fn update_if_idle(&self, claim: &Claim, current: &Claim) -> anyhow::Result<()>;
        async fn touch_with_lock(
            &self,
            id: Uuid,
            expected: ClaimStatus,
            now: DateTime<Utc>,
        ) -> anyhow::Result<()>;
    }
    #[async_trait]
    impl ReadOnlyRepository<Claim> for ClaimRepo {
        async fn find_by_id(&self, id: Uuid) -> anyhow::Result<Option<Claim>>;
    }
    #[async_trait]
    impl MutableRepository<Claim> for ClaimRepo {
        async fn insert(&self, entity: &Claim) -> anyhow::Result<Uuid>;
        async fn save_changed(&self) -> anyhow::Result<bool>;
    }
    impl DBRepository<Claim> for ClaimRepo {}
}

mock! {
    pub InterventionRequestRepo {}
    #[async_trait]
    impl InterventionRequestRepo for InterventionRequestRepo {
        async fn get_by_claim(&self, claim_id: Uuid) -> anyhow::Result<Vec<InterventionRequest>>;
        async fn update_with_lock(
            &self,
            request: &InterventionRequest,
            expected: InterventionRequestStatus,
        ) -> anyhow::Result<()>;
    }
    #[async_trait]
    impl ReadOnlyRepository<InterventionRequest> for InterventionRequestRepo {
        async fn find_by_id(&self, id: Uuid) -> anyhow::Result<Option<InterventionRequest>>;
    }
    #[async_trait]
    impl MutableRepository<InterventionRequest> for InterventionRequestRepo {
        async fn insert(&self, entity: &InterventionRequest) -> anyhow::Result<Uuid>;
        async fn save_changed(&self) -> anyhow::Result<bool>;
    }
    impl DBRepository<InterventionRequest> for InterventionRequestRepo {}
}

mock! {
    pub WorkOrderRepo {}
    #[async_trait]
    impl WorkOrderRepo for WorkOrderRepo {
        async fn get_by_intervention_request(
            &self,
            intervention_request_id: Uuid,
        ) -> anyhow::Result<Option<WorkOrder>>;
        async fn get_by_claim(&self, claim_id: Uuid) -> anyhow::Result<Vec<WorkOrder>>;
        async fn update_with_lock(
            &self,
            order: &WorkOrder,
            expected: WorkOrderStatus,
        ) -> anyhow::Result<()>;
    }
    #[async_trait]
    impl ReadOnlyRepository<WorkOrder> for WorkOrderRepo {
        async fn find_by_id(&self, id: Uuid) -> anyhow::Result<Option<WorkOrder>>;
    }
    #[async_trait]
    impl MutableRepository<WorkOrder> for WorkOrderRepo {
        async fn insert(&self, entity: &WorkOrder) -> anyhow::Result<Uuid>;
        async fn save_changed(&self) -> anyhow::Result<bool>;
    }
    impl DBRepository<WorkOrder> for WorkOrderRepo {}
}

mock! {
    pub EquipmentOnRequestRepo {}
    #[async_trait]
    impl EquipmentOnRequestRepo for EquipmentOnRequestRepo {
        async fn get_by_intervention_request(
            &self,
            intervention_request_id: Uuid,
        ) -> anyhow::Result<Vec<EquipmentOnRequest>>;
    }
    #[async_trait]
    impl ReadOnlyRepository<EquipmentOnRequest> for EquipmentOnRequestRepo {
        async fn find_by_id(&self, id: Uuid) -> anyhow::Result<Option<EquipmentOnRequest>>;
    }
    #[async_trait]
    impl MutableRepository<EquipmentOnRequest> for EquipmentOnRequestRepo {
        async fn insert(&self, entity: &EquipmentOnRequest) -> anyhow::Result<Uuid>;
        async fn save_changed(&self) -> anyhow::Result<bool>;
    }
    impl DBRepository<EquipmentOnRequest> for EquipmentOnRequestRepo {}
}

mock! {
    pub EquipmentRepo {}
    #[async_trait]
    impl ReadOnlyRepository<Equipment> for EquipmentRepo {
        async fn find_by_id(&self, id: Uuid) -> anyhow::Result<Option<Equipment>>;
    }
}

mock! {
    pub EffectApplyService {}
    #[async_trait]
    impl EffectApplyService for EffectApplyService {
        async fn apply(&self, effects: Vec<Effect>, now: DateTime<Utc>) -> TicketResult<()>;
    }
}
