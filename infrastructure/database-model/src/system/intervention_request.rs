//! 干预申请（DI）
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "intervention_request")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub claim_id: Uuid,
    pub status: i32,
    pub technician_id: Option<Uuid>,
    pub created_time: DateTimeUtc,
    pub last_modified_time: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::claim::Entity",
        from = "Column::ClaimId",
        to = "super::claim::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Claim,
    #[sea_orm(has_many = "super::equipment_on_request::Entity")]
    EquipmentOnRequest,
    #[sea_orm(has_one = "super::work_order::Entity")]
    WorkOrder,
}

impl Related<super::claim::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Claim.def()
    }
}

impl Related<super::equipment_on_request::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::EquipmentOnRequest.def()
    }
}

impl Related<super::work_order::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::WorkOrder.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
