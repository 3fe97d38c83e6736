use architecture::model::AggregateRoot;
use database_model::system::prelude::EquipmentModel;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 设备，只读参考数据
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Equipment {
    pub id: Uuid,
    pub name: String,
    pub serial_number: String,
}

impl AggregateRoot for Equipment {}

impl From<EquipmentModel> for Equipment {
    fn from(model: EquipmentModel) -> Self {
        Self {
            id: model.id,
            name: model.name,
            serial_number: model.serial_number,
        }
    }
}
