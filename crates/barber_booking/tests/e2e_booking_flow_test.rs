use barber_booking::contact::ContactField;
use barber_booking::details::SubmitOutcome;
use barber_booking::flow::{LandingAction, Page};
use barber_booking::submission::SimulatedSubmitter;
use barber_booking::{BookingMode, FixedClock, FlowController, Route};
use barber_firebase::LocalAuthService;
use chrono::NaiveDate;
use serde_json::json;
use std::sync::Arc;

#[tokio::test(start_paused = true)]
async fn guest_books_monday_ten_o_clock() {
    let now = NaiveDate::from_ymd_opt(2025, 4, 24)
        .unwrap()
        .and_hms_opt(9, 0, 0)
        .unwrap();
    let clock = Arc::new(FixedClock::new(now));
    let flow = FlowController::new(
        Arc::new(LocalAuthService::new()),
        Arc::new(SimulatedSubmitter::from_millis(1000, clock.clone())),
        clock,
    );

    // Landing -> guest booking page.
    let nav = flow.landing(LandingAction::BookAsGuest);
    let entered = flow.enter(nav);
    assert_eq!(entered.route, Route::GuestBooking);
    let (mode, mut selector) = match entered.page {
        Page::Selection { mode, selector } => (mode, selector),
        _ => panic!("expected the selection page"),
    };
    assert_eq!(mode, BookingMode::Guest);

    // Pick Monday 28th at 10:00 and confirm.
    let monday = NaiveDate::from_ymd_opt(2025, 4, 28).unwrap();
    selector.set_date(monday).unwrap();
    selector.select_time("10:00".parse().unwrap()).unwrap();
    assert_eq!(selector.toggle_confirm(), Ok(true));
    assert!(selector.can_advance());

    // Details page.
    let nav = flow.continue_to_details(&mode, &selector).unwrap();
    let entered = flow.enter(nav);
    assert_eq!(entered.route, Route::GuestBookingDetails);
    let (mode, mut page) = match entered.page {
        Page::Details { mode, page } => (mode, page),
        _ => panic!("expected the details page"),
    };
    page.set_field(ContactField::FullName, "Jane Doe");
    page.set_field(ContactField::Email, "jane@x.com");
    page.set_field(ContactField::Phone, "+12025550123");

    let receipt = match page.submit().unwrap().outcome().await {
        SubmitOutcome::Accepted(receipt) => receipt,
        other => panic!("submission not accepted: {:?}", other),
    };

    // Confirmation page.
    let entered = flow.enter(flow.confirm(&mode, receipt));
    assert_eq!(entered.route, Route::BookingConfirmation);
    let view = match entered.page {
        Page::Confirmation(view) => view,
        _ => panic!("expected the confirmation page"),
    };

    assert_eq!(
        serde_json::to_value(&view.booking).unwrap(),
        json!({
            "selectedDate": "2025-04-28",
            "selectedTime": "10:00",
            "fullName": "Jane Doe",
            "email": "jane@x.com",
            "phone": "+12025550123"
        })
    );
    assert_eq!(view.title, "Hooray!!! You are BOOKED!!");
    assert_eq!(view.message, "See you at 10:00 on Monday, April 28");
}

#[tokio::test(start_paused = true)]
async fn member_login_books_with_prefilled_details() {
    let now = NaiveDate::from_ymd_opt(2025, 4, 24)
        .unwrap()
        .and_hms_opt(15, 45, 0)
        .unwrap();
    let clock = Arc::new(FixedClock::new(now));
    let auth = Arc::new(LocalAuthService::new());
    {
        use barber_common::AuthService;
        auth.register("sam@x.com", "secret1", "Sam").await.unwrap();
        auth.logout().await.unwrap();
    }
    let flow = FlowController::new(
        auth,
        Arc::new(SimulatedSubmitter::from_millis(1000, clock.clone())),
        clock,
    );

    let entered = flow.enter(flow.login("sam@x.com", "secret1").await.unwrap());
    assert_eq!(entered.route, Route::LoginUserBooking);
    let (mode, mut selector) = match entered.page {
        Page::Selection { mode, selector } => (mode, selector),
        _ => panic!("expected the selection page"),
    };

    // Today at 15:45: 15:30 is gone, 16:00 is still open.
    assert!(selector.select_time("15:30".parse().unwrap()).is_err());
    selector.select_time("16:00".parse().unwrap()).unwrap();
    selector.toggle_confirm().unwrap();

    let entered = flow.enter(flow.continue_to_details(&mode, &selector).unwrap());
    let (mode, mut page) = match entered.page {
        Page::Details { mode, page } => (mode, page),
        _ => panic!("expected the details page"),
    };
    let form = page.form();
    assert_eq!(form.contact.full_name, "Sam");
    assert_eq!(form.contact.email, "sam@x.com");

    page.set_field(ContactField::Phone, "020 7946 0958");
    let receipt = match page.submit().unwrap().outcome().await {
        SubmitOutcome::Accepted(receipt) => receipt,
        other => panic!("submission not accepted: {:?}", other),
    };
    let nav = flow.confirm(&mode, receipt);
    assert_eq!(nav.state.member.as_ref().unwrap().username, "Sam");
    assert_eq!(nav.state.booking.as_ref().unwrap().contact.phone, "020 7946 0958");
}
