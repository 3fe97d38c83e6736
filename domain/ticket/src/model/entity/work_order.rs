use anyhow::anyhow;
use architecture::model::AggregateRoot;
use chrono::{DateTime, Utc};
use database_model::system::prelude::WorkOrderModel;
use num_derive::{FromPrimitive, ToPrimitive};
use num_traits::FromPrimitive;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::model::vo::WorkResults;

/// # 工单（BT）
/// 技术员执行的作业记录，由干预申请派生。
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WorkOrder {
    pub id: Uuid,
    pub intervention_request_id: Uuid,
    /// 冗余的报修单号
    pub claim_number: String,
    /// 执行的技术员
    pub technician_id: Uuid,
    pub status: WorkOrderStatus,
    /// 作业结果
    pub results: Option<WorkResults>,
    pub created_time: DateTime<Utc>,
    pub started_time: Option<DateTime<Utc>>,
    pub finished_time: Option<DateTime<Utc>>,
    pub closed_time: Option<DateTime<Utc>>,
    pub last_modified_time: DateTime<Utc>,
}

impl AggregateRoot for WorkOrder {}

#[derive(
    FromPrimitive, ToPrimitive, Clone, Copy, Serialize, Deserialize, Debug, Default, PartialEq, Eq,
)]
pub enum WorkOrderStatus {
    /// # 待开始
    #[default]
    Pending,
    /// # 进行中
    InProgress,
    /// # 已完成
    /// 结果已提交
    Done,
    /// # 已关闭
    /// 终态
    Closed,
}

impl WorkOrderStatus {
    pub fn is_open(&self) -> bool {
        *self != WorkOrderStatus::Closed
    }
}

impl WorkOrder {
    pub fn new(
        intervention_request_id: Uuid,
        claim_number: String,
        technician_id: Uuid,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            intervention_request_id,
            claim_number,
            technician_id,
            status: WorkOrderStatus::Pending,
            results: None,
            created_time: now,
            started_time: None,
            finished_time: None,
            closed_time: None,
            last_modified_time: now,
        }
    }
}

impl TryFrom<WorkOrderModel> for WorkOrder {
    type Error = anyhow::Error;

    fn try_from(model: WorkOrderModel) -> Result<Self, Self::Error> {
        let WorkOrderModel {
            id,
            intervention_request_id,
            claim_number,
            technician_id,
            status,
            results,
            created_time,
            started_time,
            finished_time,
            closed_time,
            last_modified_time,
        } = model;

        Ok(Self {
            id,
            intervention_request_id,
            claim_number,
            technician_id,
            status: WorkOrderStatus::from_i32(status).ok_or(anyhow!("Wrong work order status"))?,
            results: results.map(serde_json::from_value).transpose()?,
            created_time,
            started_time,
            finished_time,
            closed_time,
            last_modified_time,
        })
    }
}
