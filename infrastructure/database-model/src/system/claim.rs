//! 报修单（Réclamation）
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "claim")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub ticket_number: String,
    pub object: String,
    #[sea_orm(column_type = "Text")]
    pub description: Option<String>,
    pub priority: i32,
    pub status: i32,
    pub agent_id: Uuid,
    pub technician_id: Option<Uuid>,
    pub created_time: DateTimeUtc,
    pub last_modified_time: DateTimeUtc,
    pub resolution_date: Option<DateTimeUtc>,
    pub closed_time: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::intervention_request::Entity")]
    InterventionRequest,
}

impl Related<super::intervention_request::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::InterventionRequest.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
