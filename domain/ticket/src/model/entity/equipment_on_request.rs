use architecture::model::AggregateRoot;
use chrono::{DateTime, Utc};
use database_model::system::prelude::EquipmentOnRequestModel;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 干预申请关联的设备（EquipDi）
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EquipmentOnRequest {
    pub id: Uuid,
    pub intervention_request_id: Uuid,
    pub equipment_id: Option<Uuid>,
    pub created_time: DateTime<Utc>,
}

impl AggregateRoot for EquipmentOnRequest {}

impl EquipmentOnRequest {
    pub fn new(
        intervention_request_id: Uuid,
        equipment_id: Option<Uuid>,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            intervention_request_id,
            equipment_id,
            created_time: now,
        }
    }
}

impl From<EquipmentOnRequestModel> for EquipmentOnRequest {
    fn from(model: EquipmentOnRequestModel) -> Self {
        Self {
            id: model.id,
            intervention_request_id: model.intervention_request_id,
            equipment_id: model.equipment_id,
            created_time: model.created_time,
        }
    }
}
