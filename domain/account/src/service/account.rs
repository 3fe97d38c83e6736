use async_trait::async_trait;

use crate::{
    exception::AccountResult,
    model::{
        entity::{Role, User},
        vo::{LoginInfo, NewUser},
    },
};

#[async_trait]
pub trait AccountService: Send + Sync {
    /// Check credentials and issue a bearer token.
    async fn login(&self, name: &str, password: &str) -> AccountResult<LoginInfo>;

    /// Register a user, only administrators may do so.
    async fn create_user(&self, actor_role: Role, new_user: NewUser) -> AccountResult<User>;

    /// Create the administrator account if no user carries that name yet.
    async fn ensure_admin(&self, name: &str, password: &str) -> AccountResult<()>;
}
