// --- File: crates/barber_booking/src/handlers.rs ---
use axum::{
    extract::{Query, State},
    response::Json,
};
use barber_common::{validation_error, BarberError};
use barber_config::AppConfig;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, info};

use crate::calendar::CalendarMonth;
use crate::clock::Clock;
use crate::flow::Route;
use crate::models::DaySlots;

/// Shared state for the booking routes.
#[derive(Clone)]
pub struct BookingState {
    pub config: Arc<AppConfig>,
    pub clock: Arc<dyn Clock>,
}

#[cfg_attr(feature = "openapi", derive(utoipa::IntoParams, utoipa::ToSchema))]
#[derive(Debug, Deserialize)]
pub struct SlotsQuery {
    /// Day to evaluate, `YYYY-MM-DD`. Defaults to today.
    pub date: Option<String>,
}

#[cfg_attr(feature = "openapi", derive(utoipa::IntoParams, utoipa::ToSchema))]
#[derive(Debug, Deserialize)]
pub struct CalendarQuery {
    pub year: Option<i32>,
    pub month: Option<u32>,
}

#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteInfo {
    pub name: Route,
    #[cfg_attr(feature = "openapi", schema(value_type = String))]
    pub path: &'static str,
}

#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShopInfo {
    pub name: String,
    pub time_zone: String,
    pub routes: Vec<RouteInfo>,
}

fn parse_date(raw: &str) -> Result<NaiveDate, BarberError> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|_| validation_error(format!("Invalid date format (YYYY-MM-DD): {}", raw)))
}

/// Every catalog slot for a day, evaluated against the shop clock now.
#[cfg_attr(feature = "openapi", utoipa::path(
    get,
    path = "/booking/slots",
    params(SlotsQuery),
    responses(
        (status = 200, description = "Slot statuses for the day", body = DaySlots),
        (status = 400, description = "Invalid date")
    ),
    tag = "Booking"
))]
pub async fn get_slots_handler(
    State(state): State<Arc<BookingState>>,
    Query(query): Query<SlotsQuery>,
) -> Result<Json<DaySlots>, BarberError> {
    let now = state.clock.now();
    let date = match query.date.as_deref() {
        Some(raw) => parse_date(raw)?,
        None => now.date(),
    };
    let day = DaySlots::evaluate(date, now);
    debug!(
        %date,
        closed = day.closed,
        available = day.slots.iter().filter(|s| s.available).count(),
        "Evaluated slots"
    );
    Ok(Json(day))
}

/// Month tiles for the date picker.
#[cfg_attr(feature = "openapi", utoipa::path(
    get,
    path = "/booking/calendar",
    params(CalendarQuery),
    responses(
        (status = 200, description = "Calendar month", body = CalendarMonth),
        (status = 400, description = "Invalid month")
    ),
    tag = "Booking"
))]
pub async fn get_calendar_handler(
    State(state): State<Arc<BookingState>>,
    Query(query): Query<CalendarQuery>,
) -> Result<Json<CalendarMonth>, BarberError> {
    use chrono::Datelike;

    let today = state.clock.today();
    let year = query.year.unwrap_or_else(|| today.year());
    let month = query.month.unwrap_or_else(|| today.month());
    let calendar = CalendarMonth::build(year, month, today)
        .ok_or_else(|| validation_error(format!("Invalid month: {}-{}", year, month)))?;
    Ok(Json(calendar))
}

/// The page routes of the client and the shop it books for.
#[cfg_attr(feature = "openapi", utoipa::path(
    get,
    path = "/booking/routes",
    responses(
        (status = 200, description = "Shop and route table", body = ShopInfo)
    ),
    tag = "Booking"
))]
pub async fn get_routes_handler(State(state): State<Arc<BookingState>>) -> Json<ShopInfo> {
    info!("Serving route table");
    let routes = Route::ALL
        .into_iter()
        .map(|route| RouteInfo {
            name: route,
            path: route.path(),
        })
        .collect();
    Json(ShopInfo {
        name: state.config.shop.name.clone(),
        time_zone: state.config.shop.time_zone.clone(),
        routes,
    })
}
