// --- File: crates/barber_booking/src/flow.rs ---
//! Page sequencing for the booking flow.
//!
//! Pages are addressed by [`Route`]. Moving between them produces a
//! [`Navigation`] that owns the in-memory [`NavigationState`]; the state is
//! moved along, never shared. Entering a page whose prerequisites are missing
//! redirects to the step that produces them.

use barber_common::{AuthError, AuthService, AuthUser};
use serde::Serialize;
use std::fmt;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::clock::Clock;
use crate::contact::ContactDetails;
use crate::details::DetailsPage;
use crate::format;
use crate::models::{BookingPayload, SlotChoice};
use crate::selection::{SelectionRejected, SlotSelector};
use crate::submission::{BookingReceipt, BookingSubmitter};

/// Named pages of the client.
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Route {
    Landing,
    Login,
    SignUp,
    GuestBooking,
    GuestBookingDetails,
    UserBooking,
    LoginUserBooking,
    BookingConfirmation,
}

impl Route {
    pub const ALL: [Route; 8] = [
        Route::Landing,
        Route::Login,
        Route::SignUp,
        Route::GuestBooking,
        Route::GuestBookingDetails,
        Route::UserBooking,
        Route::LoginUserBooking,
        Route::BookingConfirmation,
    ];

    pub fn path(&self) -> &'static str {
        match self {
            Route::Landing => "/",
            Route::Login => "/login",
            Route::SignUp => "/signup",
            Route::GuestBooking => "/guest-booking",
            Route::GuestBookingDetails => "/guest-booking-details",
            Route::UserBooking => "/user-booking",
            Route::LoginUserBooking => "/login-user-booking",
            Route::BookingConfirmation => "/booking-confirmation",
        }
    }

    /// Exact match on the path; a single trailing slash is tolerated.
    pub fn from_path(path: &str) -> Option<Route> {
        let trimmed = match path.strip_suffix('/') {
            Some("") | None => path,
            Some(rest) => rest,
        };
        Route::ALL.into_iter().find(|route| route.path() == trimmed)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// How the member arrived at the booking page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemberEntry {
    SignUp,
    Login,
}

/// A signed-in customer, carried in navigation state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Member {
    pub username: String,
    pub email: String,
    pub via: MemberEntry,
}

impl Member {
    /// Display name, else the part of the email before `@`, else `User`.
    pub fn from_user(user: &AuthUser, via: MemberEntry) -> Self {
        let username = user
            .display_name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .or_else(|| user.email.split('@').next().filter(|local| !local.is_empty()))
            .unwrap_or(format::DEFAULT_USERNAME)
            .to_string();
        Member {
            username,
            email: user.email.clone(),
            via,
        }
    }

    fn anonymous(via: MemberEntry) -> Self {
        Member {
            username: format::DEFAULT_USERNAME.to_string(),
            email: String::new(),
            via,
        }
    }

    pub fn greeting(&self) -> String {
        format::greeting(&self.username)
    }

    /// Details form prefilled from the profile.
    pub fn prefill(&self) -> ContactDetails {
        ContactDetails::new(self.username.clone(), self.email.clone(), "")
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookingMode {
    Guest,
    Member(Member),
}

impl BookingMode {
    /// The canonical slot-selection page for this mode.
    pub fn selection_route(&self) -> Route {
        match self {
            BookingMode::Guest => Route::GuestBooking,
            BookingMode::Member(member) => match member.via {
                MemberEntry::SignUp => Route::UserBooking,
                MemberEntry::Login => Route::LoginUserBooking,
            },
        }
    }

    fn member(&self) -> Option<&Member> {
        match self {
            BookingMode::Guest => None,
            BookingMode::Member(member) => Some(member),
        }
    }
}

/// Transient state handed from one page to the next.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavigationState {
    pub member: Option<Member>,
    pub slot: Option<SlotChoice>,
    pub booking: Option<BookingPayload>,
}

impl NavigationState {
    pub fn mode(&self) -> BookingMode {
        match &self.member {
            Some(member) => BookingMode::Member(member.clone()),
            None => BookingMode::Guest,
        }
    }

    fn for_mode(mode: &BookingMode) -> Self {
        NavigationState {
            member: mode.member().cloned(),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigation {
    pub to: Route,
    pub state: NavigationState,
    /// Set when a guard sent the user somewhere other than requested.
    pub redirected: bool,
}

impl Navigation {
    pub fn to(route: Route, state: NavigationState) -> Self {
        Navigation {
            to: route,
            state,
            redirected: false,
        }
    }

    fn redirect(route: Route, state: NavigationState) -> Self {
        Navigation {
            to: route,
            state,
            redirected: true,
        }
    }
}

/// Buttons on the landing page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LandingAction {
    BookAsGuest,
    Login,
    SignUp,
}

#[derive(Debug, Clone, Default)]
pub struct SignUpForm {
    pub username: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SignUpError {
    #[error("Passwords do not match")]
    PasswordMismatch,
    #[error(transparent)]
    Auth(#[from] AuthError),
}

/// What the confirmation page shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConfirmationView {
    pub title: &'static str,
    pub message: String,
    pub booking: BookingPayload,
}

impl ConfirmationView {
    pub fn new(booking: BookingPayload) -> Self {
        ConfirmationView {
            title: format::CONFIRMATION_TITLE,
            message: format::confirmation_message(booking.selected_date, booking.selected_time),
            booking,
        }
    }
}

/// A page ready to be rendered.
pub enum Page {
    Landing,
    Login,
    SignUp,
    Selection {
        mode: BookingMode,
        selector: SlotSelector,
    },
    Details {
        mode: BookingMode,
        page: DetailsPage,
    },
    Confirmation(ConfirmationView),
}

/// The result of entering a route: where the user actually landed.
pub struct Entered {
    pub route: Route,
    pub redirected: bool,
    pub page: Page,
}

/// Sequences the booking pages. Collaborators are injected.
pub struct FlowController {
    auth: Arc<dyn AuthService>,
    submitter: Arc<dyn BookingSubmitter>,
    clock: Arc<dyn Clock>,
}

impl FlowController {
    pub fn new(
        auth: Arc<dyn AuthService>,
        submitter: Arc<dyn BookingSubmitter>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            auth,
            submitter,
            clock,
        }
    }

    pub fn landing(&self, action: LandingAction) -> Navigation {
        let route = match action {
            LandingAction::BookAsGuest => Route::GuestBooking,
            LandingAction::Login => Route::Login,
            LandingAction::SignUp => Route::SignUp,
        };
        info!(%route, "Landing action");
        Navigation::to(route, NavigationState::default())
    }

    pub async fn login(&self, email: &str, password: &str) -> Result<Navigation, AuthError> {
        let user = self.auth.login(email, password).await.map_err(|err| {
            warn!(kind = err.kind(), "Login failed: {}", err);
            err
        })?;
        let member = Member::from_user(&user, MemberEntry::Login);
        info!(username = %member.username, "Logged in");
        Ok(self.start_booking(BookingMode::Member(member)))
    }

    pub async fn sign_up(&self, form: &SignUpForm) -> Result<Navigation, SignUpError> {
        if form.password != form.confirm_password {
            debug!("Sign-up rejected: password confirmation differs");
            return Err(SignUpError::PasswordMismatch);
        }
        let user = self
            .auth
            .register(&form.email, &form.password, form.username.trim())
            .await
            .map_err(|err| {
                warn!(kind = err.kind(), "Sign-up failed: {}", err);
                err
            })?;
        let member = Member::from_user(&user, MemberEntry::SignUp);
        info!(username = %member.username, "Signed up");
        Ok(self.start_booking(BookingMode::Member(member)))
    }

    pub async fn logout(&self) -> Result<Navigation, AuthError> {
        self.auth.logout().await?;
        info!("Logged out");
        Ok(Navigation::to(Route::Landing, NavigationState::default()))
    }

    pub async fn reset_password(&self, email: &str) -> Result<(), AuthError> {
        self.auth.reset_password(email).await?;
        info!("Password reset email requested");
        Ok(())
    }

    fn start_booking(&self, mode: BookingMode) -> Navigation {
        Navigation::to(mode.selection_route(), NavigationState::for_mode(&mode))
    }

    /// A fresh selection for a booking page.
    pub fn open_selection(&self) -> SlotSelector {
        SlotSelector::new(Arc::clone(&self.clock))
    }

    /// Moves a confirmed selection on to the details step.
    pub fn continue_to_details(
        &self,
        mode: &BookingMode,
        selector: &SlotSelector,
    ) -> Result<Navigation, SelectionRejected> {
        let choice = selector.confirmed_choice()?;
        info!(date = %choice.date, time = %choice.time, "Continue to details");
        let mut state = NavigationState::for_mode(mode);
        state.slot = Some(choice);
        Ok(Navigation::to(Route::GuestBookingDetails, state))
    }

    /// Back from the details step to the selection page for the same mode.
    pub fn back_from_details(&self, mode: &BookingMode) -> Navigation {
        Navigation::to(mode.selection_route(), NavigationState::for_mode(mode))
    }

    /// Carries an accepted booking to the confirmation page.
    pub fn confirm(&self, mode: &BookingMode, receipt: BookingReceipt) -> Navigation {
        info!(reference = %receipt.reference, "Booking confirmed");
        let mut state = NavigationState::for_mode(mode);
        state.slot = Some(receipt.payload.choice());
        state.booking = Some(receipt.payload);
        Navigation::to(Route::BookingConfirmation, state)
    }

    /// Applies the entry guards for `navigation.to`.
    pub fn resolve(&self, navigation: Navigation) -> Navigation {
        let Navigation {
            to,
            state,
            redirected,
        } = navigation;
        let mode = state.mode();
        match to {
            Route::GuestBookingDetails if state.slot.is_none() => {
                debug!(%to, "No slot in navigation state; back to selection");
                Navigation::redirect(mode.selection_route(), NavigationState::for_mode(&mode))
            }
            Route::BookingConfirmation if state.booking.is_none() => {
                if state.slot.is_some() {
                    debug!(%to, "No booking in navigation state; back to details");
                    Navigation::redirect(Route::GuestBookingDetails, state)
                } else {
                    debug!(%to, "No booking in navigation state; back to selection");
                    Navigation::redirect(mode.selection_route(), NavigationState::for_mode(&mode))
                }
            }
            _ => Navigation {
                to,
                state,
                redirected,
            },
        }
    }

    /// Resolves guards and builds the page the user ends up on.
    pub fn enter(&self, navigation: Navigation) -> Entered {
        let resolved = self.resolve(navigation);
        let Navigation {
            to,
            state,
            redirected,
        } = resolved;
        info!(route = %to, redirected, "Entering page");

        let page = match to {
            Route::Landing => Page::Landing,
            Route::Login => Page::Login,
            Route::SignUp => Page::SignUp,
            Route::GuestBooking => Page::Selection {
                mode: BookingMode::Guest,
                selector: self.open_selection(),
            },
            Route::UserBooking | Route::LoginUserBooking => {
                let via = if to == Route::UserBooking {
                    MemberEntry::SignUp
                } else {
                    MemberEntry::Login
                };
                let member = state.member.unwrap_or_else(|| Member::anonymous(via));
                Page::Selection {
                    mode: BookingMode::Member(member),
                    selector: self.open_selection(),
                }
            }
            Route::GuestBookingDetails => match state.slot {
                Some(choice) => {
                    let mode = state.mode();
                    let prefill = mode.member().map(Member::prefill).unwrap_or_default();
                    Page::Details {
                        page: DetailsPage::new(choice, prefill, Arc::clone(&self.submitter)),
                        mode,
                    }
                }
                None => Page::Landing,
            },
            Route::BookingConfirmation => match state.booking {
                Some(booking) => Page::Confirmation(ConfirmationView::new(booking)),
                None => Page::Landing,
            },
        };

        Entered {
            route: to,
            redirected,
            page,
        }
    }
}
