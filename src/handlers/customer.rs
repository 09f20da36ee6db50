use crate::config::PaginationConfig;
use crate::error::AppError;
use crate::models::*;
use crate::services::{CustomerFileService, CustomerService};
use actix_web::error::QueryPayloadError;
use actix_web::{HttpRequest, HttpResponse, ResponseError, Result, web};

/// Absolute url of the current request, query string included, so that page
/// links keep any filters the client sent.
fn request_base_url(req: &HttpRequest) -> String {
    let info = req.connection_info();
    let mut url = format!("{}://{}{}", info.scheme(), info.host(), req.path());
    if !req.query_string().is_empty() {
        url.push('?');
        url.push_str(req.query_string());
    }
    url
}

#[utoipa::path(
    get,
    path = "/api/v1/customers",
    tag = "customer",
    params(
        ("page" = Option<i64>, Query, description = "Page number, clamped into the available range"),
        ("limit" = Option<i64>, Query, description = "Items per page, must be positive")
    ),
    responses(
        (status = 200, description = "Customers from the export file", body = PaginatedCustomers),
        (status = 400, description = "Invalid limit", body = ApiResponse)
    )
)]
pub async fn list_customers_v1(
    file_service: web::Data<CustomerFileService>,
    pagination: web::Data<PaginationConfig>,
    req: HttpRequest,
    query: web::Query<PaginationQuery>,
) -> Result<HttpResponse> {
    let page = query.page_or(pagination.default_page);
    let limit = query.limit_or(pagination.default_limit);

    match file_service
        .list_customers(page, limit, &request_base_url(&req))
        .await
    {
        Ok(response) => Ok(HttpResponse::Ok().json(response)),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    get,
    path = "/api/v1/customers/{id}",
    tag = "customer",
    params(
        ("id" = i64, Path, description = "Customer ID")
    ),
    responses(
        (status = 200, description = "Customer found", body = CustomerDetailResponse),
        (status = 404, description = "Customer not found", body = ApiResponse)
    )
)]
pub async fn get_customer_v1(
    file_service: web::Data<CustomerFileService>,
    path: web::Path<i64>,
) -> Result<HttpResponse> {
    match file_service.get_customer(path.into_inner()).await {
        Ok(customer) => Ok(HttpResponse::Ok().json(CustomerDetailResponse {
            data: customer,
            status_code: 200,
        })),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    get,
    path = "/api/v2/customers",
    tag = "customer",
    params(
        ("page" = Option<i64>, Query, description = "Page number, clamped into the available range"),
        ("limit" = Option<i64>, Query, description = "Items per page, must be positive"),
        ("rm_number" = Option<String>, Query, description = "Assigned relationship manager"),
        ("aum" = Option<AumLabel>, Query, description = "AUM label"),
        ("risk_profile" = Option<RiskProfile>, Query, description = "Risk profile"),
        ("customer_type" = Option<CustomerType>, Query, description = "Net-worth tier")
    ),
    responses(
        (status = 200, description = "Customers from the database", body = PaginatedCustomers),
        (status = 400, description = "Invalid limit or filter", body = ApiResponse)
    )
)]
pub async fn list_customers_v2(
    customer_service: web::Data<CustomerService>,
    pagination: web::Data<PaginationConfig>,
    req: HttpRequest,
    query: web::Query<PaginationQuery>,
    filter: web::Query<CustomerFilter>,
) -> Result<HttpResponse> {
    let page = query.page_or(pagination.default_page);
    let limit = query
        .limit_or(pagination.v2_default_limit)
        .min(pagination.max_limit);

    match customer_service
        .list_customers(&filter, page, limit, &request_base_url(&req))
        .await
    {
        Ok(response) => Ok(HttpResponse::Ok().json(response)),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    get,
    path = "/api/v2/customers/{id}",
    tag = "customer",
    params(
        ("id" = i64, Path, description = "Customer ID")
    ),
    responses(
        (status = 200, description = "Customer found", body = Customer),
        (status = 404, description = "Customer not found", body = ApiResponse)
    )
)]
pub async fn get_customer_v2(
    customer_service: web::Data<CustomerService>,
    path: web::Path<i64>,
) -> Result<HttpResponse> {
    match customer_service.get_customer(path.into_inner()).await {
        Ok(customer) => Ok(HttpResponse::Ok().json(customer)),
        Err(e) => Ok(e.error_response()),
    }
}

/// Unparseable query strings (an unknown filter value, say) get the JSON
/// error envelope instead of actix's plain-text body.
fn query_error_handler(err: QueryPayloadError, _req: &HttpRequest) -> actix_web::Error {
    AppError::InvalidQuery(err.to_string()).into()
}

fn query_config() -> web::QueryConfig {
    web::QueryConfig::default().error_handler(query_error_handler)
}

pub fn customer_v1_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/customers")
            .app_data(query_config())
            .route("", web::get().to(list_customers_v1))
            .route("/{id}", web::get().to(get_customer_v1)),
    );
}

pub fn customer_v2_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/customers")
            .app_data(query_config())
            .route("", web::get().to(list_customers_v2))
            .route("/{id}", web::get().to(get_customer_v2)),
    );
}
