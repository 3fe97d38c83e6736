use std::{
    future::{ready, Ready},
    rc::Rc,
    sync::Arc,
};

use actix_web::{
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    Error, HttpMessage,
};
use domain_account::service::TokenService;
use futures::future::LocalBoxFuture;

/// 校验 Bearer 令牌，并将 `UserInfo` 写入请求扩展
///
/// Requests without a valid token pass through untouched; handlers that
/// need an actor reject them.
pub struct JwtValidation {
    token_service: Arc<dyn TokenService>,
}

impl JwtValidation {
    pub fn new(token_service: Arc<dyn TokenService>) -> Self {
        Self { token_service }
    }
}

impl<S, B> Transform<S, ServiceRequest> for JwtValidation
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = JwtValidationMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(JwtValidationMiddleware {
            service: Rc::new(service),
            token_service: self.token_service.clone(),
        }))
    }
}

pub struct JwtValidationMiddleware<S> {
    service: Rc<S>,
    token_service: Arc<dyn TokenService>,
}

impl<S, B> Service<ServiceRequest> for JwtValidationMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = self.service.clone();
        let token_service = self.token_service.clone();
        Box::pin(async move {
            let user_info = match req.headers().get("Authorization") {
                Some(head) => match head.to_str() {
                    Ok(value) => match bearer_token(value) {
                        Some(token) => match token_service.validate(token) {
                            Ok(user_info) => Some(user_info),
                            Err(e) => {
                                tracing::debug!("{e}");
                                None
                            }
                        },
                        None => {
                            tracing::debug!("Not Bearer Token.");
                            None
                        }
                    },
                    Err(e) => {
                        tracing::debug!("{e}");
                        None
                    }
                },
                None => {
                    tracing::debug!("No Token.");
                    None
                }
            };
            if let Some(user_info) = user_info {
                req.extensions_mut().insert(user_info);
            }
            service.call(req).await
        })
    }
}

fn bearer_token(authorization: &str) -> Option<&str> {
    let mut parts = authorization.split_whitespace();
    match (parts.next(), parts.next(), parts.next()) {
        (Some(scheme), Some(token), None) if scheme.eq_ignore_ascii_case("Bearer") => Some(token),
        _ => None,
    }
}
