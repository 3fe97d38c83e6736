use uuid::Uuid;

use crate::model::AggregateRoot;

/// 只读仓储，对仅限读取的仓储进行抽象
#[async_trait::async_trait]
pub trait ReadOnlyRepository<T>: Send + Sync
where
    T: Send + AggregateRoot,
{
    /// 根据 uuid 获取唯一对象，不存在时返回 `None`
    async fn find_by_id(&self, id: Uuid) -> anyhow::Result<Option<T>>;
}
