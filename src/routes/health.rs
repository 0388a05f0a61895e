use crate::models::health::HealthResponse;
use actix_web::{HttpResponse, Responder, web};

/// # Health Check Endpoint
///
/// Returns the current health status of the service along with a timestamp.
///
/// ## Response
///
/// - **200 OK**: Service is healthy
///   - Body: JSON object with `status` ("healthy"), `service`
///     ("notification-service") and `timestamp` in ISO 8601 format
///
/// ## Example Response
///
/// ```json
/// {
///   "status": "healthy",
///   "service": "notification-service",
///   "timestamp": "2023-10-05T12:34:56.789+00:00"
/// }
/// ```
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    ),
    tag = "Health Check"
)]
pub async fn health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse::healthy())
}

/// # Route Configuration
///
/// Registers the health endpoint. The route carries no method guard, so
/// every HTTP method reaches the handler.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/health").route(web::route().to(health)));
}
