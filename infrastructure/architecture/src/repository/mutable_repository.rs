use uuid::Uuid;

use crate::model::AggregateRoot;

/// 可变仓储，对修改数据的仓储进行抽象
#[async_trait::async_trait]
pub trait MutableRepository<T>: Send + Sync
where
    T: Send + AggregateRoot,
{
    /// 插入数据
    async fn insert(&self, entity: &T) -> anyhow::Result<Uuid>;
    /// 提交变更，在带有事务的数据库将提交事务，否则该方法应该仅返回 `Ok(true)`
    async fn save_changed(&self) -> anyhow::Result<bool>;
}
