use architecture::repository::{DBRepository, MutableRepository, ReadOnlyRepository};
use async_trait::async_trait;
use mockall::mock;
use uuid::Uuid;

use crate::{model::entity::User, repository::UserRepo};

mock! {
    pub UserRepo {}
    #[async_trait]
    impl UserRepo for UserRepo {
        async fn find_by_name(&self, name: &str) -> anyhow::Result<Option<User>>;
    }
    #[async_trait]
    impl ReadOnlyRepository<User> for UserRepo {
        async fn find_by_id(&self, id: Uuid) -> anyhow::Result<Option<User>>;
    }
    #[async_trait]
    impl MutableRepository<User> for UserRepo {
        async fn insert(&self, entity: &User) -> anyhow::Result<Uuid>;
        async fn save_changed(&self) -> anyhow::Result<bool>;
    }
    impl DBRepository<User> for UserRepo {}
}
