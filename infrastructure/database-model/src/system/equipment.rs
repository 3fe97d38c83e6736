//! 设备
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "equipment")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    #[sea_orm(unique)]
    pub serial_number: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::equipment_on_request::Entity")]
    EquipmentOnRequest,
}

impl Related<super::equipment_on_request::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::EquipmentOnRequest.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
