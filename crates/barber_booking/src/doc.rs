// File: crates/barber_booking/src/doc.rs
#![cfg(feature = "openapi")]

use utoipa::OpenApi;

use crate::calendar::{CalendarMonth, CalendarTile, WeekdayHeader};
use crate::contact::ContactDetails;
use crate::flow::Route;
use crate::handlers::{CalendarQuery, RouteInfo, ShopInfo, SlotsQuery};
use crate::models::{BookingPayload, DaySlots, SlotChoice, SlotView};
use crate::rules::SlotStatus;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::get_slots_handler,
        crate::handlers::get_calendar_handler,
        crate::handlers::get_routes_handler
    ),
    components(
        schemas(
            SlotsQuery,
            CalendarQuery,
            DaySlots,
            SlotView,
            SlotStatus,
            CalendarMonth,
            CalendarTile,
            WeekdayHeader,
            RouteInfo,
            ShopInfo,
            Route,
            SlotChoice,
            BookingPayload,
            ContactDetails
        )
    ),
    tags(
        (name = "Booking", description = "Slot availability and calendar for the shop")
    ),
    servers(
        (url = "/api", description = "Booking API server")
    )
)]
pub struct BookingApiDoc;
