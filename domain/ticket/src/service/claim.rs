use architecture::model::{Pagination, PaginationResult};
use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    exception::TicketResult,
    model::{
        entity::Claim,
        vo::{Actor, NewClaim},
    },
};

#[async_trait]
pub trait ClaimService: Send + Sync {
    /// 创建报修单，创建者即为客服专员
    async fn create(&self, actor: &Actor, draft: NewClaim) -> TicketResult<Claim>;

    async fn get(&self, actor: &Actor, id: Uuid) -> TicketResult<Claim>;

    /// 分页获取用户可见的报修单
    async fn list(
        &self,
        actor: &Actor,
        pagination: &Pagination,
    ) -> TicketResult<PaginationResult<Claim>>;

    /// 分页获取分配给技术员的报修单
    async fn list_by_technician(
        &self,
        actor: &Actor,
        technician_id: Uuid,
        pagination: &Pagination,
    ) -> TicketResult<PaginationResult<Claim>>;

    async fn assign_technician(
        &self,
        actor: &Actor,
        id: Uuid,
        technician_id: Uuid,
    ) -> TicketResult<Claim>;

    async fn remove_technician(&self, actor: &Actor, id: Uuid) -> TicketResult<Claim>;

    /// 关闭已解决的报修单
    async fn close(&self, actor: &Actor, id: Uuid) -> TicketResult<Claim>;
}
