use std::{
    fmt,
    future::{ready, Ready},
    str::FromStr,
};

use actix_web::{
    body::BoxBody, dev::Payload, http::StatusCode, web, FromRequest, HttpMessage,
    HttpRequest, HttpResponse, Responder, ResponseError,
};
use architecture::{
    authorization::UserInfo,
    exceptions::{Classify, ErrorKind},
    response::ResponseBase,
};
use domain_account::exception::AccountException;
use domain_ticket::{exception::TicketException, model::vo::Actor};
use serde::Serialize;
use uuid::Uuid;

pub mod auth;
pub mod claim;
pub mod dtos;
pub mod intervention_request;
pub mod user;
pub mod work_order;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(auth::login)
        .service(user::create_user)
        .service(claim::create_claim)
        .service(claim::list_claims)
        .service(claim::list_technician_claims)
        .service(claim::get_claim)
        .service(claim::assign_technician)
        .service(claim::remove_technician)
        .service(claim::close_claim)
        .service(intervention_request::create_intervention_request)
        .service(intervention_request::get_intervention_request)
        .service(intervention_request::get_equipments)
        .service(intervention_request::assign_technician)
        .service(work_order::get_work_order)
        .service(work_order::start_work)
        .service(work_order::submit_results)
        .service(work_order::close_work_order);
}

/// 以 `ResponseBase` 包装的成功响应
pub struct ApiResponder<T>(pub T);

pub type ApiResult<T> = Result<ApiResponder<T>, ApiError>;

impl<T: Serialize> Responder for ApiResponder<T> {
    type Body = BoxBody;

    fn respond_to(self, _: &HttpRequest) -> HttpResponse<Self::Body> {
        HttpResponse::Ok().json(ResponseBase::ok(Some(self.0)))
    }
}

#[derive(Serialize, Debug)]
pub struct ErrorDetail {
    pub kind: ErrorKind,
}

/// 接口错误，按错误类别映射 HTTP 状态码
#[derive(Debug)]
pub struct ApiError {
    kind: ErrorKind,
    message: String,
}

impl ApiError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::ValidationError, message)
    }

    fn classified<E: Classify + fmt::Display>(e: E) -> Self {
        let kind = e.kind();
        if kind == ErrorKind::Internal {
            tracing::error!("{e}");
            return Self::new(kind, "Internal server error.");
        }
        tracing::debug!("{e}");
        Self::new(kind, e.to_string())
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}: {}", self.kind, self.message)
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.kind.status()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    fn error_response(&self) -> HttpResponse<BoxBody> {
        HttpResponse::build(self.status_code()).json(ResponseBase::err(
            self.kind.status() as i32,
            &self.message,
            Some(ErrorDetail { kind: self.kind }),
        ))
    }
}

impl From<TicketException> for ApiError {
    fn from(e: TicketException) -> Self {
        Self::classified(e)
    }
}

impl From<AccountException> for ApiError {
    fn from(e: AccountException) -> Self {
        Self::classified(e)
    }
}

/// 已认证的请求发起者
pub struct Authenticated(pub Actor);

impl FromRequest for Authenticated {
    type Error = ApiError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let actor = match req.extensions().get::<UserInfo>() {
            Some(user_info) => Actor::try_from(user_info).map(Authenticated).map_err(|e| {
                ApiError::new(ErrorKind::Unauthorized, format!("Invalid bearer token: {e}."))
            }),
            None => Err(ApiError::new(
                ErrorKind::Unauthorized,
                "Missing or invalid bearer token.",
            )),
        };
        ready(actor)
    }
}

fn extract_uuid(s: &str) -> Result<Uuid, ApiError> {
    Uuid::from_str(s)
        .map_err(|e| ApiError::validation(format!(r#"error when parse uuid from "{s}": {e}"#)))
}
