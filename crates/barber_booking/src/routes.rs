// --- File: crates/barber_booking/src/routes.rs ---

use axum::{routing::get, Router};
use barber_common::{config_error, BarberError};
use barber_config::AppConfig;
use std::sync::Arc;

use crate::clock::{Clock, SystemClock};
use crate::handlers::{get_calendar_handler, get_routes_handler, get_slots_handler, BookingState};

/// Read-only booking routes, evaluated against the shop's local clock.
///
/// Fails when the configured shop time zone is unknown.
pub fn routes(config: Arc<AppConfig>) -> Result<Router, BarberError> {
    let clock = SystemClock::from_name(&config.shop.time_zone).map_err(config_error)?;
    Ok(routes_with_clock(config, Arc::new(clock)))
}

/// Same routes with an injected clock.
pub fn routes_with_clock(config: Arc<AppConfig>, clock: Arc<dyn Clock>) -> Router {
    let state = Arc::new(BookingState { config, clock });

    Router::new()
        .route("/booking/slots", get(get_slots_handler))
        .route("/booking/calendar", get(get_calendar_handler))
        .route("/booking/routes", get(get_routes_handler))
        .with_state(state)
}
