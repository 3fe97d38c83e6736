use architecture::repository::{DBRepository, MutableRepository, ReadOnlyRepository};
use database_model::system::prelude::*;
use domain_ticket::{
    model::entity::{intervention_request::InterventionRequestStatus, InterventionRequest},
    repository::InterventionRequestRepo,
};
use sea_orm::{prelude::*, QueryOrder, QueryTrait, Set};

use crate::infrastructure::database::OrmRepo;

fn active_model(request: &InterventionRequest) -> InterventionRequestActiveModel {
    InterventionRequestActiveModel {
        id: Set(request.id),
        claim_id: Set(request.claim_id),
        status: Set(request.status as i32),
        technician_id: Set(request.technician_id),
        created_time: Set(request.created_time),
        last_modified_time: Set(request.last_modified_time),
    }
}

#[async_trait::async_trait]
impl ReadOnlyRepository<InterventionRequest> for OrmRepo {
    async fn find_by_id(&self, id: Uuid) -> anyhow::Result<Option<InterventionRequest>> {
        InterventionRequestEntity::find_by_id(id)
            .one(self.connection())
            .await?
            .map(InterventionRequest::try_from)
            .transpose()
    }
}

#[async_trait::async_trait]
impl MutableRepository<InterventionRequest> for OrmRepo {
    async fn insert(&self, entity: &InterventionRequest) -> anyhow::Result<Uuid> {
        let stmt = InterventionRequestEntity::insert(active_model(entity)).build(self.backend());
        self.push(stmt).await;
        Ok(entity.id)
    }

    async fn save_changed(&self) -> anyhow::Result<bool> {
        self.save_changed().await
    }
}

impl DBRepository<InterventionRequest> for OrmRepo {}

#[async_trait::async_trait]
impl InterventionRequestRepo for OrmRepo {
    async fn get_by_claim(&self, claim_id: Uuid) -> anyhow::Result<Vec<InterventionRequest>> {
        InterventionRequestEntity::find()
            .filter(InterventionRequestColumn::ClaimId.eq(claim_id))
            .order_by_asc(InterventionRequestColumn::CreatedTime)
            .all(self.connection())
            .await?
            .into_iter()
            .map(InterventionRequest::try_from)
            .collect()
    }

    async fn update_with_lock(
        &self,
        request: &InterventionRequest,
        expected: InterventionRequestStatus,
    ) -> anyhow::Result<()> {
        let stmt = InterventionRequestEntity::update_many()
            .set(active_model(request))
            .filter(InterventionRequestColumn::Id.eq(request.id))
            .filter(InterventionRequestColumn::Status.eq(expected as i32))
            .build(self.backend());
        self.push_guarded(stmt, "InterventionRequest", request.id).await;
        Ok(())
    }
}
