pub mod claim;
pub mod equipment;
pub mod equipment_on_request;
pub mod intervention_request;
pub mod user;
pub mod work_order;

pub mod prelude {
    pub use super::{
        claim::{
            ActiveModel as ClaimActiveModel, Column as ClaimColumn, Entity as ClaimEntity,
            Model as ClaimModel, PrimaryKey as ClaimPrimaryKey, Relation as ClaimRelation,
        },
        equipment::{
            ActiveModel as EquipmentActiveModel, Column as EquipmentColumn,
            Entity as EquipmentEntity, Model as EquipmentModel,
            PrimaryKey as EquipmentPrimaryKey, Relation as EquipmentRelation,
        },
        equipment_on_request::{
            ActiveModel as EquipmentOnRequestActiveModel, Column as EquipmentOnRequestColumn,
            Entity as EquipmentOnRequestEntity, Model as EquipmentOnRequestModel,
            PrimaryKey as EquipmentOnRequestPrimaryKey, Relation as EquipmentOnRequestRelation,
        },
        intervention_request::{
            ActiveModel as InterventionRequestActiveModel, Column as InterventionRequestColumn,
            Entity as InterventionRequestEntity, Model as InterventionRequestModel,
            PrimaryKey as InterventionRequestPrimaryKey, Relation as InterventionRequestRelation,
        },
        user::{
            ActiveModel as UserActiveModel, Column as UserColumn, Entity as UserEntity,
            Model as UserModel, PrimaryKey as UserPrimaryKey, Relation as UserRelation,
        },
        work_order::{
            ActiveModel as WorkOrderActiveModel, Column as WorkOrderColumn,
            Entity as WorkOrderEntity, Model as WorkOrderModel,
            PrimaryKey as WorkOrderPrimaryKey, Relation as WorkOrderRelation,
        },
    };
}
