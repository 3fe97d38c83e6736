use architecture::repository::{DBRepository, MutableRepository, ReadOnlyRepository};
use database_model::system::prelude::*;
use domain_ticket::{model::entity::EquipmentOnRequest, repository::EquipmentOnRequestRepo};
use sea_orm::{prelude::*, QueryTrait, Set};

use crate::infrastructure::database::OrmRepo;

#[async_trait::async_trait]
impl ReadOnlyRepository<EquipmentOnRequest> for OrmRepo {
    async fn find_by_id(&self, id: Uuid) -> anyhow::Result<Option<EquipmentOnRequest>> {
        Ok(EquipmentOnRequestEntity::find_by_id(id)
            .one(self.connection())
            .await?
            .map(EquipmentOnRequest::from))
    }
}

#[async_trait::async_trait]
impl MutableRepository<EquipmentOnRequest> for OrmRepo {
    async fn insert(&self, entity: &EquipmentOnRequest) -> anyhow::Result<Uuid> {
        let model = EquipmentOnRequestActiveModel {
            id: Set(entity.id),
            intervention_request_id: Set(entity.intervention_request_id),
            equipment_id: Set(entity.equipment_id),
            created_time: Set(entity.created_time),
        };
        let stmt = EquipmentOnRequestEntity::insert(model).build(self.backend());
        self.push(stmt).await;
        Ok(entity.id)
    }

    async fn save_changed(&self) -> anyhow::Result<bool> {
        self.save_changed().await
    }
}

impl DBRepository<EquipmentOnRequest> for OrmRepo {}

#[async_trait::async_trait]
impl EquipmentOnRequestRepo for OrmRepo {
    async fn get_by_intervention_request(
        &self,
        intervention_request_id: Uuid,
    ) -> anyhow::Result<Vec<EquipmentOnRequest>> {
        Ok(EquipmentOnRequestEntity::find()
            .filter(EquipmentOnRequestColumn::InterventionRequestId.eq(intervention_request_id))
            .all(self.connection())
            .await?
            .into_iter()
            .map(EquipmentOnRequest::from)
            .collect())
    }
}
