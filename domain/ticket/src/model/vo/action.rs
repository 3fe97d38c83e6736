use std::fmt::Display;

use architecture::authorization::UserInfo;
use domain_account::model::entity::Role;
use uuid::Uuid;

use super::WorkResults;

/// 可对工单实体执行的动作
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// 分配技术员，对干预申请可附带设备
    AssignTechnician {
        technician_id: Uuid,
        equipment_id: Option<Uuid>,
    },
    /// 移除技术员
    RemoveTechnician,
    /// 开始作业
    StartWork,
    /// 提交作业结果
    SubmitResults { results: WorkResults },
    /// 关闭工单
    CloseWorkOrder,
    /// 关闭已解决的报修单
    CloseClaim,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionKind {
    AssignTechnician,
    RemoveTechnician,
    StartWork,
    SubmitResults,
    CloseWorkOrder,
    CloseClaim,
}

impl Action {
    pub fn kind(&self) -> ActionKind {
        match self {
            Action::AssignTechnician { .. } => ActionKind::AssignTechnician,
            Action::RemoveTechnician => ActionKind::RemoveTechnician,
            Action::StartWork => ActionKind::StartWork,
            Action::SubmitResults { .. } => ActionKind::SubmitResults,
            Action::CloseWorkOrder => ActionKind::CloseWorkOrder,
            Action::CloseClaim => ActionKind::CloseClaim,
        }
    }
}

impl Display for ActionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Debug::fmt(self, f)
    }
}

/// 发起动作的用户
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Actor {
    pub id: Uuid,
    pub role: Role,
}

impl Actor {
    pub fn new(id: Uuid, role: Role) -> Self {
        Self { id, role }
    }
}

impl TryFrom<&UserInfo> for Actor {
    type Error = anyhow::Error;

    fn try_from(user_info: &UserInfo) -> Result<Self, Self::Error> {
        Ok(Self {
            id: user_info.id,
            role: user_info.role.parse()?,
        })
    }
}
