use architecture::repository::DBRepository;
use async_trait::async_trait;

use crate::model::entity::User;

#[async_trait]
pub trait UserRepo: DBRepository<User> + Send + Sync {
    /// 根据用户名获取用户
    async fn find_by_name(&self, name: &str) -> anyhow::Result<Option<User>>;
}
