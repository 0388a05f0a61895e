use actix_web::{App, HttpServer, web::Data};
use env_logger::Env;
use log::info;
use notification_service::openapi::ApiDoc;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

const PORT: u16 = 9000;

/// Notification Service Entry Point
///
/// Configures and launches the Actix-web HTTP server with:
/// - JSON endpoints for the home, health, and notifications routes
/// - Swagger UI for API documentation
/// - Environment configuration via `.env` file
/// - Shared application state for the OpenAPI document
///
/// # Endpoints
/// - Home: `/`
/// - Health check: `/health`
/// - Notifications: `/notifications`
/// - Swagger UI: `/swagger-ui/`
/// - OpenAPI spec: `/api-docs/openapi.json`
///
/// # Configuration
/// - Server binds to `0.0.0.0:9000`; the port is fixed
/// - Environment variables loaded from `.env` file (if present)
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let server = HttpServer::new(|| {
        let openapi = ApiDoc::openapi();

        App::new()
            .app_data(Data::new(openapi.clone()))
            .configure(notification_service::routes::configure)
            .service(SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", openapi))
    })
    .bind(("0.0.0.0", PORT))?;

    info!("Notification service running on port {}", PORT);

    server.run().await
}
