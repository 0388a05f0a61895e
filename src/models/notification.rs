use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// # Notifications Response
///
/// Carries the list of notifications for the notifications endpoint.
/// The endpoint is a stub and the list is always empty; elements stay
/// untyped until a notification shape exists.
///
/// ## Example JSON
/// ```json
/// {
///   "notifications": [],
///   "message": "Notifications endpoint working"
/// }
/// ```
#[derive(Serialize, Debug, PartialEq, Deserialize, ToSchema)]
pub struct NotificationsResponse {
    #[schema(value_type = Vec<Object>)]
    pub notifications: Vec<serde_json::Value>,
    pub message: String,
}

impl NotificationsResponse {
    pub fn empty() -> Self {
        Self {
            notifications: Vec::new(),
            message: "Notifications endpoint working".to_string(),
        }
    }
}
