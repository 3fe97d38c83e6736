use architecture::repository::{DBRepository, MutableRepository, ReadOnlyRepository};
use database_model::system::prelude::*;
use domain_account::{model::entity::User, repository::UserRepo};
use sea_orm::{prelude::*, QueryTrait, Set};

use crate::infrastructure::database::OrmRepo;

fn active_model(user: &User) -> UserActiveModel {
    UserActiveModel {
        id: Set(user.id),
        name: Set(user.name.clone()),
        role: Set(user.role as i32),
        position: Set(user.position.clone()),
        password_hash: Set(user.password_hash.clone()),
        created_time: Set(user.created_time),
    }
}

#[async_trait::async_trait]
impl ReadOnlyRepository<User> for OrmRepo {
    async fn find_by_id(&self, id: Uuid) -> anyhow::Result<Option<User>> {
        UserEntity::find_by_id(id)
            .one(self.connection())
            .await?
            .map(User::try_from)
            .transpose()
    }
}

#[async_trait::async_trait]
impl MutableRepository<User> for OrmRepo {
    async fn insert(&self, entity: &User) -> anyhow::Result<Uuid> {
        let stmt = UserEntity::insert(active_model(entity)).build(self.backend());
        self.push(stmt).await;
        Ok(entity.id)
    }

    async fn save_changed(&self) -> anyhow::Result<bool> {
        self.save_changed().await
    }
}

impl DBRepository<User> for OrmRepo {}

#[async_trait::async_trait]
impl UserRepo for OrmRepo {
    async fn find_by_name(&self, name: &str) -> anyhow::Result<Option<User>> {
        UserEntity::find()
            .filter(UserColumn::Name.eq(name))
            .one(self.connection())
            .await?
            .map(User::try_from)
            .transpose()
    }
}
