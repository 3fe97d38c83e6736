use actix_web::{post, web};
use domain_account::model::{entity::User, vo::NewUser};

use super::{ApiResponder, ApiResult, Authenticated};
use crate::infrastructure::ServiceProviderScoped;

#[post("users")]
pub async fn create_user(
    scoped: ServiceProviderScoped,
    Authenticated(actor): Authenticated,
    body: web::Json<NewUser>,
) -> ApiResult<User> {
    let user = scoped
        .account_service
        .create_user(actor.role, body.into_inner())
        .await?;
    Ok(ApiResponder(user))
}
