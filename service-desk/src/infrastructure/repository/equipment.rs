use architecture::repository::ReadOnlyRepository;
use database_model::system::prelude::*;
use domain_ticket::model::entity::Equipment;
use sea_orm::prelude::*;

use crate::infrastructure::database::OrmRepo;

#[async_trait::async_trait]
impl ReadOnlyRepository<Equipment> for OrmRepo {
    async fn find_by_id(&self, id: Uuid) -> anyhow::Result<Option<Equipment>> {
        Ok(EquipmentEntity::find_by_id(id)
            .one(self.connection())
            .await?
            .map(Equipment::from))
    }
}
