use chrono::{DateTime, Utc};
use domain_account::model::entity::Role;
use serde::Deserialize;
use typed_builder::TypedBuilder;
use uuid::Uuid;

use crate::model::entity::claim::ClaimStatus;

use super::Effect;

/// 级联策略
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
pub struct CascadePolicy {
    /// 为报修单分配技术员时自动创建干预申请
    pub auto_create_intervention_request: bool,
}

impl Default for CascadePolicy {
    fn default() -> Self {
        Self {
            auto_create_intervention_request: true,
        }
    }
}

/// 被分配的用户，由调用方加载
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Assignee {
    pub id: Uuid,
    pub role: Role,
}

/// 工单所属报修单的摘要
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClaimRef {
    pub id: Uuid,
    pub status: ClaimStatus,
}

/// 计算状态转换所需的外部事实，由调用方在请求作用域内构建
#[derive(Debug, Clone, TypedBuilder)]
pub struct TransitionContext {
    pub now: DateTime<Utc>,
    #[builder(default)]
    pub policy: CascadePolicy,
    #[builder(default)]
    pub assignee: Option<Assignee>,
    /// Intervention requests of the claim that are not closed.
    #[builder(default)]
    pub open_intervention_requests: usize,
    /// Work orders of the claim that are not closed.
    #[builder(default)]
    pub open_work_orders: usize,
    /// Whether the intervention request already owns a work order.
    #[builder(default)]
    pub has_work_order: bool,
    /// Ticket number of the claim an intervention request belongs to.
    #[builder(default)]
    pub claim_number: Option<String>,
    /// Claim an intervention request or work order belongs to.
    #[builder(default)]
    pub parent_claim: Option<ClaimRef>,
}

/// 转换结果：更新后的实体副本与级联效果
#[derive(Debug, Clone, PartialEq)]
pub struct Transition<T> {
    pub entity: T,
    pub effects: Vec<Effect>,
}
