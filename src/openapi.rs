use utoipa::OpenApi;

/// OpenAPI Specification Documentation
///
/// Defines the API contract using OpenAPI 3.0 format with utoipa procedural macros.
/// This documentation serves as the source of truth for both API consumers and
/// automated documentation generators.
///
/// # Endpoints
/// - Home: `GET /`
/// - Health Check: `GET /health`
/// - Notifications: `GET /notifications`
///
/// # Schemas
/// - `HomeResponse`: Service identification payload
/// - `HealthResponse`: Service status payload
/// - `NotificationsResponse`: Notification listing payload
///
/// # Note
/// The OpenAPI spec is generated at compile time from these annotations. Any changes
/// to the API surface should be reflected here first to maintain documentation accuracy.
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::home::home,
        crate::routes::health::health,
        crate::routes::notifications::notifications,
    ),
    components(
        schemas(
            crate::models::home::HomeResponse,
            crate::models::health::HealthResponse,
            crate::models::notification::NotificationsResponse
        )
    ),
    tags(
        (name = "Home", description = "Service identification endpoint"),
        (name = "Health Check", description = "Service health monitoring endpoints"),
        (name = "Notifications", description = "Notification listing endpoints")
    ),
    info(
        description = "Placeholder API for the notification service",
        title = "Notification Service API",
        version = "1.0.0",
    )
)]
pub struct ApiDoc;
