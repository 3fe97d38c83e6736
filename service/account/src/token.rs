use architecture::authorization::{Payload, UserInfo};
use chrono::Utc;
use domain_account::{
    exception::{AccountException, AccountResult},
    model::entity::{Role, User},
    service::TokenService,
};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};

/// HS256 bearer tokens
#[derive(typed_builder::TypedBuilder)]
pub struct JwtTokenServiceImpl {
    #[builder(setter(into))]
    secret: String,
    #[builder(setter(into))]
    issuer: String,
    /// Seconds a token stays valid.
    expires_in: i64,
    /// Clock skew tolerated on expiry, in seconds.
    #[builder(default = 30)]
    leeway: u64,
}

impl TokenService for JwtTokenServiceImpl {
    fn issue(&self, user: &User) -> AccountResult<(String, i64)> {
        let now = Utc::now().timestamp();
        let payload = Payload {
            iss: self.issuer.clone(),
            sub: user.id,
            name: user.name.clone(),
            role: user.role.to_string(),
            iat: now,
            exp: now + self.expires_in,
        };
        let token = encode(
            &Header::new(Algorithm::HS256),
            &payload,
            &EncodingKey::from_secret(self.secret.as_bytes()),
        )
        .map_err(|e| AccountException::InternalError { source: e.into() })?;
        Ok((token, payload.exp))
    }

    fn validate(&self, token: &str) -> AccountResult<UserInfo> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[&self.issuer]);
        validation.leeway = self.leeway;
        let data = decode::<Payload>(
            token,
            &DecodingKey::from_secret(self.secret.as_bytes()),
            &validation,
        )
        .map_err(|e| AccountException::InvalidToken {
            reason: e.to_string(),
        })?;
        data.claims
            .role
            .parse::<Role>()
            .map_err(|e| AccountException::InvalidToken {
                reason: e.to_string(),
            })?;
        Ok(data.claims.into())
    }
}
