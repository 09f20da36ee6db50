use actix_web::web;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::handlers;
use crate::models::*;

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::health::health_check,
        handlers::customer::list_customers_v1,
        handlers::customer::get_customer_v1,
        handlers::customer::list_customers_v2,
        handlers::customer::get_customer_v2,
    ),
    components(
        schemas(
            Customer,
            CustomerType,
            AumLabel,
            TransactionLabel,
            Propensity,
            RiskProfile,
            CustomerDetailResponse,
            PageMeta,
            PageLinks,
            PaginatedCustomers,
            ApiResponse,
            ApiError,
            HealthResponse,
        )
    ),
    tags(
        (name = "customer", description = "Customer portfolio listing API"),
        (name = "health", description = "Liveness probe"),
    ),
    info(
        title = "Wealth Dashboard API",
        version = "1.0.0",
        description = "Customer data API behind the relationship manager dashboard"
    )
)]
pub struct ApiDoc;

pub fn swagger_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", ApiDoc::openapi()),
    )
    .route(
        "/swagger-ui",
        web::get().to(|| async {
            actix_web::HttpResponse::Found()
                .append_header(("Location", "/swagger-ui/"))
                .finish()
        }),
    );
}
