use std::{
    future::{ready, Ready},
    sync::Arc,
};

use actix_web::{dev::Payload, error::ErrorInternalServerError, web, FromRequest, HttpRequest};
use domain_account::service::{AccountService, TokenService};
use domain_ticket::{
    model::vo::CascadePolicy,
    service::{ClaimService, EffectApplyService, InterventionRequestService, WorkOrderService},
};
use service_account::{AccountServiceImpl, JwtTokenServiceImpl};
use service_ticket::{
    ClaimServiceImpl, EffectApplyServiceImpl, InterventionRequestServiceImpl,
    WorkOrderServiceImpl,
};

use super::{config::ServiceDeskConfig, database::Database, database::OrmRepo};

/// 单例服务容器
#[derive(Clone)]
pub struct ServiceProvider {
    config: Arc<ServiceDeskConfig>,
    database: Arc<Database>,
    token_service: Arc<dyn TokenService>,
}

impl ServiceProvider {
    pub async fn build(config: ServiceDeskConfig) -> anyhow::Result<Self> {
        let database = Arc::new(Database::new(&config.common.db.url).await?);
        let jwt = &config.common.jwt;
        let token_service: Arc<dyn TokenService> = Arc::new(
            JwtTokenServiceImpl::builder()
                .secret(jwt.secret.as_str())
                .issuer(jwt.issuer.as_str())
                .expires_in(jwt.expires_in)
                .leeway(jwt.leeway)
                .build(),
        );
        Ok(Self {
            config: Arc::new(config),
            database,
            token_service,
        })
    }

    pub fn config(&self) -> &ServiceDeskConfig {
        &self.config
    }

    pub fn token_service(&self) -> Arc<dyn TokenService> {
        self.token_service.clone()
    }

    /// Services sharing one request-scoped unit of work.
    pub fn create_scoped(&self) -> ServiceProviderScoped {
        let repo = Arc::new(OrmRepo::builder().db(self.database.clone()).build());
        let effect_service: Arc<dyn EffectApplyService> = Arc::new(
            EffectApplyServiceImpl::builder()
                .claim_repo(repo.clone())
                .intervention_request_repo(repo.clone())
                .equipment_on_request_repo(repo.clone())
                .work_order_repo(repo.clone())
                .build(),
        );
        let policy = CascadePolicy {
            auto_create_intervention_request: self.config.ticket.auto_create_intervention_request,
        };
        ServiceProviderScoped {
            account_service: Arc::new(
                AccountServiceImpl::builder()
                    .user_repo(repo.clone())
                    .token_service(self.token_service.clone())
                    .build(),
            ),
            claim_service: Arc::new(
                ClaimServiceImpl::builder()
                    .claim_repo(repo.clone())
                    .intervention_request_repo(repo.clone())
                    .work_order_repo(repo.clone())
                    .user_repo(repo.clone())
                    .effect_service(effect_service.clone())
                    .policy(policy)
                    .build(),
            ),
            intervention_request_service: Arc::new(
                InterventionRequestServiceImpl::builder()
                    .intervention_request_repo(repo.clone())
                    .claim_repo(repo.clone())
                    .work_order_repo(repo.clone())
                    .equipment_on_request_repo(repo.clone())
                    .equipment_repo(repo.clone())
                    .user_repo(repo.clone())
                    .effect_service(effect_service.clone())
                    .build(),
            ),
            work_order_service: Arc::new(
                WorkOrderServiceImpl::builder()
                    .work_order_repo(repo.clone())
                    .intervention_request_repo(repo.clone())
                    .claim_repo(repo)
                    .effect_service(effect_service)
                    .build(),
            ),
        }
    }
}

/// 请求作用域服务
pub struct ServiceProviderScoped {
    pub account_service: Arc<dyn AccountService>,
    pub claim_service: Arc<dyn ClaimService>,
    pub intervention_request_service: Arc<dyn InterventionRequestService>,
    pub work_order_service: Arc<dyn WorkOrderService>,
}

impl FromRequest for ServiceProviderScoped {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        ready(
            req.app_data::<web::Data<ServiceProvider>>()
                .map(|provider| provider.create_scoped())
                .ok_or_else(|| ErrorInternalServerError("Service provider is not registered.")),
        )
    }
}
