use crate::models::home::HomeResponse;
use actix_web::{HttpResponse, Responder, web};

/// # Home Endpoint
///
/// Identifies the service and reports its API version.
///
/// ## Example Response
///
/// ```json
/// {
///   "message": "Notification Service API",
///   "version": "1.0.0"
/// }
/// ```
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Service identification", body = HomeResponse)
    ),
    tag = "Home"
)]
pub async fn home() -> impl Responder {
    HttpResponse::Ok().json(HomeResponse::new())
}

/// Registers the home endpoint at the root path, for any HTTP method.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/").route(web::route().to(home)));
}
