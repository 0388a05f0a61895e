/// # Home Response
///
/// Identifies the service and its API version. Used as the response
/// format for the home endpoint.
pub mod home;

/// # Health Status Response
///
/// Represents the operational status of the service with a timestamp.
/// Used as the response format for health check endpoints.
///
/// ## Fields
/// - `status`: String indicating service availability ("healthy")
/// - `service`: Name of the service reporting its status
/// - `timestamp`: ISO 8601 formatted timestamp of the status check
///
/// ## Example JSON
/// ```json
/// {
///   "status": "healthy",
///   "service": "notification-service",
///   "timestamp": "2024-03-10T15:30:45.123456789+00:00"
/// }
/// ```
pub mod health;

/// # Notifications Response
///
/// Carries the list of notifications returned by the notifications
/// endpoint. The list is currently always empty.
pub mod notification;
