use std::sync::Arc;

use actix_web::web;
use colored::Colorize;
use tracing::{error, info, warn};

use crate::api::{self, ApiError};
use crate::infrastructure::{
    config::{build_config, ServiceDeskConfig},
    middleware::authorization::JwtValidation,
    telemetry::initialize_telemetry,
    ServiceProvider,
};

pub fn run() {
    match tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime.block_on(async_run()),
        Err(e) => eprintln!("{}: {}", "Cannot build runtime".red(), e),
    }
}

pub async fn async_run() {
    let config: ServiceDeskConfig = match build_config().and_then(|x| Ok(x.try_deserialize()?)) {
        Ok(x) => x,
        Err(e) => {
            return eprintln!("{}: {}", "Cannot build config".red(), e);
        }
    };
    if let Err(e) = initialize_telemetry(&config.common.telemetry) {
        return eprintln!("{}: {}", "Cannot build logger".red(), e);
    };
    if config.common.jwt.secret.is_empty() {
        warn!("jwt.secret is empty, bearer tokens can be forged.");
    }

    let service_provider = match ServiceProvider::build(config).await {
        Ok(x) => Arc::new(x),
        Err(e) => {
            return eprintln!("{}: {}", "Cannot build Service Provider".red(), e);
        }
    };
    if let Some(admin) = service_provider.config().admin.clone() {
        let scoped = service_provider.create_scoped();
        if let Err(e) = scoped
            .account_service
            .ensure_admin(&admin.name, &admin.password)
            .await
        {
            return eprintln!("{}: {}", "Cannot create administrator".red(), e);
        }
    }

    tokio::select! {
        _ = initialize_web_host(service_provider) => {}
        _ = tokio::signal::ctrl_c() => {
            info!("Stopping Services (ctrl-c handling).");
            std::process::exit(0);
        }
    }
}

pub async fn initialize_web_host(sp: Arc<ServiceProvider>) {
    let host = sp.config().common.host.clone();
    let server = actix_web::HttpServer::new(move || {
        let cors = actix_cors::Cors::default()
            .allow_any_origin()
            .allow_any_header()
            .allow_any_method()
            .max_age(86400);

        actix_web::App::new()
            .wrap(tracing_actix_web::TracingLogger::default())
            .wrap(cors)
            .app_data(web::Data::from(sp.clone()))
            .app_data(
                web::JsonConfig::default()
                    .error_handler(|e, _| ApiError::validation(e.to_string()).into()),
            )
            .app_data(
                web::QueryConfig::default()
                    .error_handler(|e, _| ApiError::validation(e.to_string()).into()),
            )
            .service(
                web::scope("")
                    .wrap(JwtValidation::new(sp.token_service()))
                    .configure(api::configure),
            )
    });
    let server = match server.bind((host.bind_address.to_owned(), host.bind_port)) {
        Ok(x) => x,
        Err(e) => {
            return error!(
                "Cannot bind {}:{}: {}",
                host.bind_address, host.bind_port, e
            );
        }
    };
    info!("Listening on {}:{}.", host.bind_address, host.bind_port);
    match server.disable_signals().run().await {
        Ok(_) => info!("Web server stopped successfully."),
        Err(e) => error!("Web server stopped with error: {}", e),
    }
}
