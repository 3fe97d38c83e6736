use anyhow::anyhow;
use architecture::model::AggregateRoot;
use chrono::{DateTime, Utc};
use database_model::system::prelude::ClaimModel;
use num_derive::{FromPrimitive, ToPrimitive};
use num_traits::FromPrimitive;
use rand::Rng;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::model::vo::NewClaim;

/// # 报修单
/// 客户报告的问题记录，由客服专员创建。
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Claim {
    /// id
    pub id: Uuid,
    /// 工单号
    pub ticket_number: String,
    /// 主题
    pub object: String,
    /// 描述
    pub description: Option<String>,
    /// 优先级
    pub priority: Priority,
    /// 状态
    pub status: ClaimStatus,
    /// 创建该报修单的客服专员
    pub agent_id: Uuid,
    /// 分配的技术员
    pub technician_id: Option<Uuid>,
    pub created_time: DateTime<Utc>,
    pub last_modified_time: DateTime<Utc>,
    /// 解决时间
    pub resolution_date: Option<DateTime<Utc>>,
    /// 关闭时间
    pub closed_time: Option<DateTime<Utc>>,
}

impl AggregateRoot for Claim {}

/// 报修单状态
#[derive(
    FromPrimitive, ToPrimitive, Clone, Copy, Serialize, Deserialize, Debug, Default, PartialEq, Eq,
)]
pub enum ClaimStatus {
    /// # 待处理
    /// 尚未分配技术员
    #[default]
    Open,
    /// # 处理中
    /// 已分配技术员
    InProgress,
    /// # 已解决
    /// 关联工单已关闭
    Resolved,
    /// # 已关闭
    /// 终态
    Closed,
}

/// 优先级
#[derive(
    FromPrimitive, ToPrimitive, Clone, Copy, Serialize, Deserialize, Debug, Default, PartialEq, Eq,
)]
pub enum Priority {
    Low,
    #[default]
    Normal,
    High,
    Urgent,
}

impl Claim {
    pub fn new(draft: NewClaim, agent_id: Uuid, now: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            ticket_number: Self::generate_ticket_number(now),
            object: draft.object.trim().to_owned(),
            description: draft.description,
            priority: draft.priority,
            status: ClaimStatus::Open,
            agent_id,
            technician_id: None,
            created_time: now,
            last_modified_time: now,
            resolution_date: None,
            closed_time: None,
        }
    }

    /// `REC-<date>-<6 digits>`, uniqueness is enforced by the store.
    fn generate_ticket_number(now: DateTime<Utc>) -> String {
        let serial: u32 = rand::thread_rng().gen_range(0..1_000_000);
        format!("REC-{}-{serial:06}", now.format("%Y%m%d"))
    }
}

impl TryFrom<ClaimModel> for Claim {
    type Error = anyhow::Error;

    fn try_from(model: ClaimModel) -> Result<Self, Self::Error> {
        let ClaimModel {
            id,
            ticket_number,
            object,
            description,
            priority,
            status,
            agent_id,
            technician_id,
            created_time,
            last_modified_time,
            resolution_date,
            closed_time,
        } = model;

        Ok(Self {
            id,
            ticket_number,
            object,
            description,
            priority: Priority::from_i32(priority).ok_or(anyhow!("Wrong claim priority"))?,
            status: ClaimStatus::from_i32(status).ok_or(anyhow!("Wrong claim status"))?,
            agent_id,
            technician_id,
            created_time,
            last_modified_time,
            resolution_date,
            closed_time,
        })
    }
}
