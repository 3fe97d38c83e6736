use anyhow::anyhow;
use architecture::model::AggregateRoot;
use chrono::{DateTime, Utc};
use database_model::system::prelude::InterventionRequestModel;
use num_derive::{FromPrimitive, ToPrimitive};
use num_traits::FromPrimitive;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// # 干预申请（DI）
/// 由报修单派生的内部作业授权记录。
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct InterventionRequest {
    pub id: Uuid,
    /// 所属报修单
    pub claim_id: Uuid,
    pub status: InterventionRequestStatus,
    /// 分配的技术员
    pub technician_id: Option<Uuid>,
    pub created_time: DateTime<Utc>,
    pub last_modified_time: DateTime<Utc>,
}

impl AggregateRoot for InterventionRequest {}

#[derive(
    FromPrimitive, ToPrimitive, Clone, Copy, Serialize, Deserialize, Debug, Default, PartialEq, Eq,
)]
pub enum InterventionRequestStatus {
    /// 等待分配技术员
    #[default]
    Pending,
    /// 技术员已分配，工单已生成
    InProgress,
    /// 工单已关闭
    Closed,
}

impl InterventionRequest {
    pub fn new(claim_id: Uuid, now: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            claim_id,
            status: InterventionRequestStatus::Pending,
            technician_id: None,
            created_time: now,
            last_modified_time: now,
        }
    }

    pub fn is_open(&self) -> bool {
        self.status != InterventionRequestStatus::Closed
    }
}

impl TryFrom<InterventionRequestModel> for InterventionRequest {
    type Error = anyhow::Error;

    fn try_from(model: InterventionRequestModel) -> Result<Self, Self::Error> {
        let InterventionRequestModel {
            id,
            claim_id,
            status,
            technician_id,
            created_time,
            last_modified_time,
        } = model;

        Ok(Self {
            id,
            claim_id,
            status: InterventionRequestStatus::from_i32(status)
                .ok_or(anyhow!("Wrong intervention request status"))?,
            technician_id,
            created_time,
            last_modified_time,
        })
    }
}
