use actix_web::web;

/// # Home Endpoint
///
/// Identifies the service and reports its API version.
pub mod home;

/// # Health Check Endpoint
///
/// Returns the current health status of the service along with a timestamp.
///
/// ## Response
///
/// - **200 OK**: Service is healthy
///   - Body: JSON object with `status` ("healthy"), `service`
///     ("notification-service") and `timestamp` in ISO 8601 format
pub mod health;

/// # Notifications Endpoint
///
/// Stub listing endpoint; always answers with an empty list.
pub mod notifications;

/// # API Route Configuration
///
/// Registers the three service endpoints at their fixed paths.
///
/// ## Mounted Services
/// - Home endpoint (see [`home::configure_routes`] for details)
/// - Health check endpoint (see [`health::configure_routes`] for details)
/// - Notifications endpoint (see [`notifications::configure_routes`] for details)
///
/// ## Example Endpoints
///
/// ```text
/// GET /              - Service identification
/// GET /health        - Service health status
/// GET /notifications - Notification listing (stub)
/// ```
///
/// Every endpoint accepts any HTTP method; paths outside this set fall
/// through to Actix-web's default not-found response.
///
/// [`home::configure_routes`]: crate::routes::home::configure_routes
/// [`health::configure_routes`]: crate::routes::health::configure_routes
/// [`notifications::configure_routes`]: crate::routes::notifications::configure_routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.configure(home::configure_routes)
        .configure(health::configure_routes)
        .configure(notifications::configure_routes);
}
