//! 干预申请关联设备（EquipDi）
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "equipment_on_request")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub intervention_request_id: Uuid,
    pub equipment_id: Option<Uuid>,
    pub created_time: DateTimeUtc,
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
    #[sea_orm(
        belongs_to = "super::equipment::Entity",
        from = "Column::EquipmentId",
        to = "super::equipment::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    Equipment,
}

impl Related<super::intervention_request::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::InterventionRequest.def()
    }
}

impl Related<super::equipment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Equipment.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
