use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// # Home Response
///
/// Identifies the service and its API version. Returned by the home
/// endpoint for every request.
///
/// ## Fields
/// - `message`: Human-readable service name
/// - `version`: API version, taken from the package version
#[derive(Serialize, Debug, PartialEq, Deserialize, ToSchema)]
pub struct HomeResponse {
    pub message: String,
    pub version: String,
}

impl HomeResponse {
    pub fn new() -> Self {
        Self {
            message: "Notification Service API".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

impl Default for HomeResponse {
    fn default() -> Self {
        Self::new()
    }
}
