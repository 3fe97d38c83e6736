//! 工单（BT）
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "work_order")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub intervention_request_id: Uuid,
    pub claim_number: String,
    pub technician_id: Uuid,
    pub status: i32,
    pub results: Option<Json>,
    pub created_time: DateTimeUtc,
    pub started_time: Option<DateTimeUtc>,
    pub finished_time: Option<DateTimeUtc>,
    pub closed_time: Option<DateTimeUtc>,
    pub last_modified_time: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::intervention_request::Entity",
        from = "Column::InterventionRequestId",
        to = "super::intervention_request::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    InterventionRequest,
}

impl Related<super::intervention_request::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::InterventionRequest.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
