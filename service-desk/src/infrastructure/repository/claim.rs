use architecture::{
    model::{Pagination, PaginationResult},
    repository::{DBRepository, MutableRepository, ReadOnlyRepository},
};
use database_model::system::prelude::*;
use domain_ticket::{
    model::entity::{claim::ClaimStatus, work_order::WorkOrderStatus, Claim},
    repository::{ClaimRepo, ClaimScope},
};
use sea_orm::{prelude::*, sea_query::Expr, QueryOrder, QuerySelect, QueryTrait, Set};

use crate::infrastructure::database::OrmRepo;

fn active_model(claim: &Claim) -> ClaimActiveModel {
    ClaimActiveModel {
        id: Set(claim.id),
        ticket_number: Set(claim.ticket_number.clone()),
        object: Set(claim.object.clone()),
        description: Set(claim.description.clone()),
        priority: Set(claim.priority as i32),
        status: Set(claim.status as i32),
        agent_id: Set(claim.agent_id),
        technician_id: Set(claim.technician_id),
        created_time: Set(claim.created_time),
        last_modified_time: Set(claim.last_modified_time),
        resolution_date: Set(claim.resolution_date),
        closed_time: Set(claim.closed_time),
    }
}

#[async_trait::async_trait]
impl ReadOnlyRepository<Claim> for OrmRepo {
    async fn find_by_id(&self, id: Uuid) -> anyhow::Result<Option<Claim>> {
        ClaimEntity::find_by_id(id)
            .one(self.connection())
            .await?
            .map(Claim::try_from)
            .transpose()
    }
}

#[async_trait::async_trait]
impl MutableRepository<Claim> for OrmRepo {
    async fn insert(&self, entity: &Claim) -> anyhow::Result<Uuid> {
        let stmt = ClaimEntity::insert(active_model(entity)).build(self.backend());
        self.push(stmt).await;
        Ok(entity.id)
    }

    async fn save_changed(&self) -> anyhow::Result<bool> {
        self.save_changed().await
    }
}

impl DBRepository<Claim> for OrmRepo {}

#[async_trait::async_trait]
impl ClaimRepo for OrmRepo {
    async fn get_page(
        &self,
        scope: ClaimScope,
        pagination: &Pagination,
    ) -> anyhow::Result<PaginationResult<Claim>> {
        let query = match scope {
            ClaimScope::All => ClaimEntity::find(),
            ClaimScope::Agent(agent_id) => {
                ClaimEntity::find().filter(ClaimColumn::AgentId.eq(agent_id))
            }
            ClaimScope::Technician(technician_id) => {
                ClaimEntity::find().filter(ClaimColumn::TechnicianId.eq(technician_id))
            }
        };
        let paginator = query
            .order_by_desc(ClaimColumn::CreatedTime)
            .paginate(self.connection(), pagination.limit());
        let total = paginator.num_items().await?;
        let items = paginator
            .fetch_page(pagination.page())
            .await?
            .into_iter()
            .map(Claim::try_from)
            .collect::<anyhow::Result<Vec<_>>>()?;
        Ok(PaginationResult { items, total })
    }

    async fn update_with_lock(&self, claim: &Claim, expected: ClaimStatus) -> anyhow::Result<()> {
        let stmt = ClaimEntity::update_many()
            .set(active_model(claim))
            .filter(ClaimColumn::Id.eq(claim.id))
            .filter(ClaimColumn::Status.eq(expected as i32))
            .build(self.backend());
        self.push_guarded(stmt, "Claim", claim.id).await;
        Ok(())
    }

    async fn update_if_idle(&self, claim: &Claim, current: &Claim) -> anyhow::Result<()> {
        let open_work = WorkOrderEntity::find()
            .select_only()
            .column(InterventionRequestColumn::ClaimId)
            .inner_join(InterventionRequestEntity)
            .filter(InterventionRequestColumn::ClaimId.eq(claim.id))
            .filter(WorkOrderColumn::Status.ne(WorkOrderStatus::Closed as i32))
            .into_query();
        let stmt = ClaimEntity::update_many()
            .set(active_model(claim))
            .filter(ClaimColumn::Id.eq(claim.id))
            .filter(ClaimColumn::Status.eq(current.status as i32))
            .filter(ClaimColumn::LastModifiedTime.eq(current.last_modified_time))
            .filter(ClaimColumn::Id.not_in_subquery(open_work))
            .build(self.backend());
        self.push_guarded(stmt, "Claim", claim.id).await;
        Ok(())
    }

    async fn touch_with_lock(
        &self,
        id: Uuid,
        expected: ClaimStatus,
        now: DateTimeUtc,
    ) -> anyhow::Result<()> {
        let stmt = ClaimEntity::update_many()
            .col_expr(ClaimColumn::LastModifiedTime, Expr::value(now))
            .filter(ClaimColumn::Id.eq(id))
            .filter(ClaimColumn::Status.eq(expected as i32))
            .build(self.backend());
        self.push_guarded(stmt, "Claim", id).await;
        Ok(())
    }
}
