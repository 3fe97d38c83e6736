use actix_web::{post, web};
use domain_account::model::vo::LoginInfo;

use super::{dtos::LoginRequest, ApiResponder, ApiResult};
use crate::infrastructure::ServiceProviderScoped;

#[post("auth/login")]
pub async fn login(
    scoped: ServiceProviderScoped,
    body: web::Json<LoginRequest>,
) -> ApiResult<LoginInfo> {
    let login_info = scoped
        .account_service
        .login(&body.name, &body.password)
        .await?;
    Ok(ApiResponder(login_info))
}
