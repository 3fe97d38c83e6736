use serde::{Deserialize, Serialize};

use crate::model::entity::{Role, User};

/// Data needed to register a user.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    pub name: String,
    pub password: String,
    pub role: Role,
    pub position: Option<String>,
}

/// 登录结果
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginInfo {
    pub token: String,
    /// Unix timestamp in seconds.
    pub expires_at: i64,
    pub user: User,
}
