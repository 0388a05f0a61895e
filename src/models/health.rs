use chrono::Utc;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// # Health Status Response
///
/// Represents the operational status of the service with a timestamp.
/// Used as the response format for the health check endpoint.
///
/// ## Fields
/// - `status`: String indicating service availability ("healthy")
/// - `service`: Name of the service reporting its status
/// - `timestamp`: ISO 8601 formatted timestamp of the status check
///
/// ## Serialization
/// Automatically implements `Serialize` and `Deserialize` for JSON format.
/// Fields serialize in declaration order.
///
/// ## Example JSON
/// ```json
/// {
///   "status": "healthy",
///   "service": "notification-service",
///   "timestamp": "2024-03-10T15:30:45.123456789+00:00"
/// }
/// ```
#[derive(Serialize, Debug, PartialEq, Deserialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub timestamp: String,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            service: "notification-service".to_string(),
            timestamp: Utc::now().to_rfc3339(),
        }
    }
}
