use crate::models::notification::NotificationsResponse;
use actix_web::{HttpResponse, Responder, web};

/// # Notifications Endpoint
///
/// Stub listing endpoint. Answers every request with an empty list,
/// ignoring any query parameters or request body.
///
/// ## Example Response
///
/// ```json
/// {
///   "notifications": [],
///   "message": "Notifications endpoint working"
/// }
/// ```
#[utoipa::path(
    get,
    path = "/notifications",
    responses(
        (status = 200, description = "Notification listing", body = NotificationsResponse)
    ),
    tag = "Notifications"
)]
pub async fn notifications() -> impl Responder {
    HttpResponse::Ok().json(NotificationsResponse::empty())
}

/// Registers the notifications endpoint, for any HTTP method.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/notifications").route(web::route().to(notifications)));
}
