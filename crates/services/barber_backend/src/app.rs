// --- File: crates/services/barber_backend/src/app.rs ---

use axum::{routing::get, Router};
use barber_booking::Route;
use barber_common::BarberError;
use barber_config::AppConfig;
use std::path::Path;
use std::sync::Arc;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;
use tracing::info;

/// Builds the full application router.
///
/// The booking API lives under `/api`. When `client.dir` is configured, every
/// named page route serves the client's `index.html` and all other paths fall
/// back to the bundle's static files.
pub fn build_app(config: Arc<AppConfig>) -> Result<Router, BarberError> {
    let booking_router = barber_booking::routes(config.clone())?;

    let api_router = Router::new()
        .route("/", get(|| async { "Welcome to the ToTa Booking API!" }))
        .merge(booking_router);

    #[allow(unused_mut)] // mutated only with the openapi feature
    let mut app = Router::new().nest("/api", api_router);

    #[cfg(feature = "openapi")]
    {
        use barber_booking::doc::BookingApiDoc;
        use utoipa::OpenApi;
        use utoipa_swagger_ui::SwaggerUi;

        #[derive(OpenApi)]
        #[openapi(
            info(
                title = "ToTa Booking API",
                version = "0.1.0",
                description = "Slot availability for a single barber shop",
                license(name = "MIT", url = "https://opensource.org/licenses/MIT")
            ),
            servers((url = "/api", description = "Main API Prefix")),
        )]
        struct ApiDoc;

        let mut openapi_doc = ApiDoc::openapi();
        openapi_doc.merge(BookingApiDoc::openapi());
        info!("Adding Swagger UI at /api/docs");
        app = app.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", openapi_doc));
    }

    if let Some(dir) = config.client.dir.as_deref() {
        app = with_client(app, Path::new(dir));
    }

    Ok(app.layer(TraceLayer::new_for_http()))
}

fn with_client(mut app: Router, dir: &Path) -> Router {
    info!("Serving client bundle from {}", dir.display());
    let index = dir.join("index.html");
    for route in Route::ALL {
        app = app.route_service(route.path(), ServeFile::new(&index));
    }
    app.fallback_service(ServeDir::new(dir))
}
