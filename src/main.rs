use actix_web::{App, HttpServer, middleware::Logger, web};
use chrono::Local; // timestamp in log lines
use env_logger::{Env, Target};
use std::io::Write; // for env_logger custom formatter

use wealth_dashboard::{
    config::Config,
    database::{create_pool, run_migrations},
    handlers,
    middlewares::create_cors,
    services::*,
    swagger::swagger_config,
};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .format(|buf, record| {
            let ts = Local::now().format("%Y-%m-%dT%H:%M:%S%.3f%:z");
            let level = record.level().as_str().to_ascii_lowercase();
            let msg_json = serde_json::to_string(&format!("{}", record.args()))
                .unwrap_or_else(|_| "\"<invalid utf8>\"".to_string());
            writeln!(
                buf,
                "{{\"timestamp\":\"{}\",\"level\":\"{}\",\"message\":{},\"target\":\"{}\"}}",
                ts,
                level,
                msg_json,
                record.target(),
            )
        })
        .target(Target::Stdout)
        .init();

    let config = Config::from_toml().expect("Failed to load configuration");

    let file_service = CustomerFileService::new(&config.data.customers_json_path);
    log::info!(
        "Serving /api/v1 customers from {}",
        config.data.customers_json_path
    );

    // without a database only /api/v1 is served
    let customer_service = match &config.database {
        Some(db_config) => {
            let pool = create_pool(db_config)
                .await
                .expect("Failed to create database connection pool");
            run_migrations(&pool)
                .await
                .expect("Failed to run database migrations");
            Some(web::Data::new(CustomerService::new(pool)))
        }
        None => {
            log::warn!("DATABASE_URL is not set, /api/v2 routes are disabled");
            None
        }
    };

    let pagination = config.pagination.clone();

    log::info!(
        "Starting HTTP server at {}:{}",
        config.server.host,
        config.server.port
    );

    HttpServer::new(move || {
        let customer_service = customer_service.clone();
        App::new()
            .wrap(Logger::default())
            .wrap(create_cors())
            .app_data(web::Data::new(file_service.clone()))
            .app_data(web::Data::new(pagination.clone()))
            .configure(swagger_config)
            .configure(handlers::health_config)
            .service(web::scope("/api/v1").configure(handlers::customer_v1_config))
            .configure(move |cfg| {
                if let Some(service) = customer_service {
                    cfg.service(
                        web::scope("/api/v2")
                            .app_data(service)
                            .configure(handlers::customer_v2_config),
                    );
                }
            })
    })
    .bind((config.server.host.as_str(), config.server.port))?
    .run()
    .await
}
