use architecture::authorization::UserInfo;

use crate::{exception::AccountResult, model::entity::User};

/// Issues and validates bearer tokens.
pub trait TokenService: Send + Sync {
    /// Returns the token and its expiry as a unix timestamp.
    fn issue(&self, user: &User) -> AccountResult<(String, i64)>;

    fn validate(&self, token: &str) -> AccountResult<UserInfo>;
}
