use architecture::{
    model::{Pagination, PaginationResult},
    repository::DBRepository,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::model::entity::{claim::ClaimStatus, Claim};

/// 报修单列表的可见范围
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClaimScope {
    All,
    /// 由该客服专员创建
    Agent(Uuid),
    /// 分配给该技术员
    Technician(Uuid),
}

#[async_trait]
pub trait ClaimRepo: DBRepository<Claim> + Send + Sync {
    /// 分页获取范围内的报修单，按创建时间倒序
    async fn get_page(
        &self,
        scope: ClaimScope,
        pagination: &Pagination,
    ) -> anyhow::Result<PaginationResult<Claim>>;

    /// 以 `expected` 状态为条件更新报修单，提交时若未命中则整个事务失败
    async fn update_with_lock(&self, claim: &Claim, expected: ClaimStatus) -> anyhow::Result<()>;

    /// 以 `current` 的状态与修改时间为条件更新报修单，
    /// 且提交时报修单下不得存在未关闭的工单
    async fn update_if_idle(&self, claim: &Claim, current: &Claim) -> anyhow::Result<()>;

    /// 要求提交时报修单仍处于 `expected` 状态，并刷新其修改时间
    async fn touch_with_lock(
        &self,
        id: Uuid,
        expected: ClaimStatus,
        now: DateTime<Utc>,
    ) -> anyhow::Result<()>;
}
