// File: services/barber_backend/src/bin/barber_kiosk.rs
use barber_backend::{Kiosk, KioskError};
use barber_booking::submission::SimulatedSubmitter;
use barber_booking::{FlowController, SystemClock};
use barber_common::logging::{self, level_from_str, log_error};
use barber_config::load_config;
use barber_firebase::auth_service;
use std::sync::Arc;
use tokio::io::{self, BufReader};
use tracing::info;

#[tokio::main]
async fn main() {
    let config = load_config().expect("Failed to load config");
    logging::init_with_level(level_from_str(&config.logging.level));

    let clock = match SystemClock::from_name(&config.shop.time_zone) {
        Ok(clock) => Arc::new(clock),
        Err(e) => {
            log_error(e, "Invalid shop time zone");
            std::process::exit(1);
        }
    };
    let auth = match auth_service(&config) {
        Ok(auth) => auth,
        Err(e) => {
            log_error(e, "Failed to set up authentication");
            std::process::exit(1);
        }
    };
    let submitter = Arc::new(SimulatedSubmitter::from_millis(
        config.shop.submission_delay_ms,
        clock.clone(),
    ));

    let flow = FlowController::new(auth, submitter, clock);
    let mut kiosk = Kiosk::new(flow, BufReader::new(io::stdin()), io::stdout());
    match kiosk.run().await {
        Ok(booking) => info!(
            date = %booking.selected_date,
            time = %booking.selected_time,
            "Kiosk session finished with a booking"
        ),
        Err(KioskError::InputClosed) => info!("Kiosk input closed"),
        Err(e) => {
            log_error(e, "Kiosk failed");
            std::process::exit(1);
        }
    }
}
