use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 请求作用域内的用户信息，由认证中间件写入请求扩展
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct UserInfo {
    pub id: Uuid,
    pub name: String,
    pub role: String,
}

impl From<Payload> for UserInfo {
    fn from(payload: Payload) -> Self {
        Self {
            id: payload.sub,
            name: payload.name,
            role: payload.role,
        }
    }
}

/// 携带用户信息的 Payload，
/// 默认从 JWT 的 Payload 块中读取
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct Payload {
    /// 签发地
    pub iss: String,
    /// 用户 uuid
    pub sub: Uuid,
    /// 用户名
    pub name: String,
    /// 角色
    pub role: String,
    /// 签发时间
    pub iat: i64,
    /// 过期时间
    pub exp: i64,
}
