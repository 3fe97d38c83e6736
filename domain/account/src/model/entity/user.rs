use std::fmt;
use std::str::FromStr;

use anyhow::anyhow;
use architecture::model::AggregateRoot;
use chrono::{DateTime, Utc};
use database_model::system::prelude::UserModel;
use num_derive::{FromPrimitive, ToPrimitive};
use num_traits::FromPrimitive;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// # 用户
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub role: Role,
    /// 岗位
    pub position: Option<String>,
    /// Salted password hash, never serialized to clients.
    #[serde(skip_serializing, default)]
    pub password_hash: String,
    pub created_time: DateTime<Utc>,
}

impl AggregateRoot for User {}

/// 用户角色
#[derive(
    FromPrimitive, ToPrimitive, Clone, Copy, Serialize, Deserialize, Debug, PartialEq, Eq, Hash,
)]
pub enum Role {
    /// 管理员，可执行所有操作
    Admin,
    /// 技术员，处理分配给自己的干预申请与工单
    Technician,
    /// 客服专员，创建报修单并分配技术员
    Agent,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "Admin",
            Role::Technician => "Technician",
            Role::Agent => "Agent",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Admin" => Ok(Role::Admin),
            "Technician" => Ok(Role::Technician),
            "Agent" => Ok(Role::Agent),
            _ => Err(anyhow!("Unknown role: {s}")),
        }
    }
}

impl TryFrom<UserModel> for User {
    type Error = anyhow::Error;

    fn try_from(model: UserModel) -> Result<Self, Self::Error> {
        let UserModel {
            id,
            name,
            role,
            position,
            password_hash,
            created_time,
        } = model;

        Ok(Self {
            id,
            name,
            role: Role::from_i32(role).ok_or(anyhow!("Wrong user role"))?,
            position,
            password_hash,
            created_time,
        })
    }
}
