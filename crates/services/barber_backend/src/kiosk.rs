// --- File: crates/services/barber_backend/src/kiosk.rs ---
//! Line-oriented terminal front end for the booking flow.
//!
//! Each page of the flow reads commands from the input and writes plain text
//! to the output. The run ends on the confirmation page, or with
//! [`KioskError::InputClosed`] when the input runs dry.

use barber_booking::contact::ContactField;
use barber_booking::details::{DetailsPage, SubmitBlocked, SubmitOutcome};
use barber_booking::flow::{ConfirmationView, LandingAction, Page, SignUpForm};
use barber_booking::format::{self, APP_TITLE, CLOSED_HINT, CLOSED_TITLE, SHOP_TAGLINE};
use barber_booking::selection::SlotSelector;
use barber_booking::submission::SubmissionError;
use barber_booking::{
    BookingMode, BookingPayload, FlowController, Navigation, NavigationState, Route,
};
use chrono::NaiveDate;
use thiserror::Error;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, Lines};
use tracing::{debug, info};

#[derive(Error, Debug)]
pub enum KioskError {
    #[error("terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("input closed before the booking was confirmed")]
    InputClosed,
}

const SELECTION_HELP: &str =
    "Commands: date YYYY-MM-DD | time HH:MM | confirm | next | home | logout";

pub struct Kiosk<R, W> {
    flow: FlowController,
    input: Lines<R>,
    output: W,
}

impl<R, W> Kiosk<R, W>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    pub fn new(flow: FlowController, input: R, output: W) -> Self {
        Self {
            flow,
            input: input.lines(),
            output,
        }
    }

    /// Runs the flow from the landing page until a booking is confirmed.
    pub async fn run(&mut self) -> Result<BookingPayload, KioskError> {
        let mut navigation = Navigation::to(Route::Landing, NavigationState::default());
        loop {
            let entered = self.flow.enter(navigation);
            if entered.redirected {
                self.say(&format!("(redirected to {})", entered.route)).await?;
            }
            navigation = match entered.page {
                Page::Landing => self.landing().await?,
                Page::Login => self.login().await?,
                Page::SignUp => self.sign_up().await?,
                Page::Selection { mode, selector } => self.selection(mode, selector).await?,
                Page::Details { mode, page } => self.details(mode, page).await?,
                Page::Confirmation(view) => {
                    self.confirmation(&view).await?;
                    return Ok(view.booking);
                }
            };
        }
    }

    async fn landing(&mut self) -> Result<Navigation, KioskError> {
        self.say(&format!("\n== {} ==\n{}", APP_TITLE, SHOP_TAGLINE)).await?;
        loop {
            let action = match self.ask("1) Book as guest  2) Log in  3) Sign up").await?.as_str() {
                "1" => LandingAction::BookAsGuest,
                "2" => LandingAction::Login,
                "3" => LandingAction::SignUp,
                _ => continue,
            };
            return Ok(self.flow.landing(action));
        }
    }

    async fn login(&mut self) -> Result<Navigation, KioskError> {
        self.say("\n== Log in ==").await?;
        let email = self.ask("Email (empty to go back)").await?;
        if email.is_empty() {
            return Ok(Navigation::to(Route::Landing, NavigationState::default()));
        }
        let password = self.ask("Password (empty to reset it)").await?;
        if password.is_empty() {
            match self.flow.reset_password(&email).await {
                Ok(()) => self.say("Password reset email sent.").await?,
                Err(e) => self.say(&e.to_string()).await?,
            }
            return Ok(Navigation::to(Route::Login, NavigationState::default()));
        }

        match self.flow.login(&email, &password).await {
            Ok(navigation) => Ok(navigation),
            Err(e) => {
                self.say(&e.to_string()).await?;
                Ok(Navigation::to(Route::Login, NavigationState::default()))
            }
        }
    }

    async fn sign_up(&mut self) -> Result<Navigation, KioskError> {
        self.say("\n== Sign up ==").await?;
        let username = self.ask("Username (empty to go back)").await?;
        if username.is_empty() {
            return Ok(Navigation::to(Route::Landing, NavigationState::default()));
        }
        let form = SignUpForm {
            username,
            email: self.ask("Email").await?,
            password: self.ask("Password").await?,
            confirm_password: self.ask("Confirm password").await?,
        };

        match self.flow.sign_up(&form).await {
            Ok(navigation) => Ok(navigation),
            Err(e) => {
                self.say(&e.to_string()).await?;
                Ok(Navigation::to(Route::SignUp, NavigationState::default()))
            }
        }
    }

    async fn selection(
        &mut self,
        mode: BookingMode,
        mut selector: SlotSelector,
    ) -> Result<Navigation, KioskError> {
        if let BookingMode::Member(member) = &mode {
            self.say(&format!("\n{}", member.greeting())).await?;
        }
        self.say(SELECTION_HELP).await?;

        loop {
            self.show_board(&selector).await?;
            let line = self.ask("booking").await?;
            let (command, argument) = match line.split_once(' ') {
                Some((command, argument)) => (command, argument.trim()),
                None => (line.as_str(), ""),
            };

            let rejected = match command {
                "date" => match NaiveDate::parse_from_str(argument, "%Y-%m-%d") {
                    Ok(date) => selector.set_date(date).err(),
                    Err(_) => {
                        self.say("Dates look like 2025-04-28.").await?;
                        continue;
                    }
                },
                "time" => match argument.parse() {
                    Ok(time) => selector.select_time(time).err(),
                    Err(e) => {
                        self.say(&format!("{}", e)).await?;
                        continue;
                    }
                },
                "confirm" => selector.toggle_confirm().err(),
                "next" => match self.flow.continue_to_details(&mode, &selector) {
                    Ok(navigation) => return Ok(navigation),
                    Err(e) => Some(e),
                },
                "home" => return Ok(Navigation::to(Route::Landing, NavigationState::default())),
                "logout" if matches!(mode, BookingMode::Member(_)) => {
                    match self.flow.logout().await {
                        Ok(navigation) => return Ok(navigation),
                        Err(e) => {
                            self.say(&e.to_string()).await?;
                            continue;
                        }
                    }
                }
                _ => {
                    self.say(SELECTION_HELP).await?;
                    continue;
                }
            };
            if let Some(reason) = rejected {
                debug!(%reason, "kiosk selection rejected");
                self.say(&reason.to_string()).await?;
            }
        }
    }

    async fn show_board(&mut self, selector: &SlotSelector) -> Result<(), KioskError> {
        let board = selector.slot_board();
        if board.closed {
            return self
                .say(&format!("\n{}\n{}", CLOSED_TITLE, CLOSED_HINT))
                .await;
        }

        let state = selector.state();
        let mut text = format!("\n{}\n", format::selection_header(board.date));
        for slot in &board.slots {
            let marker = match state.selected_time {
                Some(time) if time == slot.time && state.confirmed => "[x]",
                Some(time) if time == slot.time => "[*]",
                _ if slot.available => "[ ]",
                _ => " - ",
            };
            text.push_str(&format!("  {} {}\n", marker, slot.time));
        }
        self.write(&text).await
    }

    async fn details(
        &mut self,
        mode: BookingMode,
        mut page: DetailsPage,
    ) -> Result<Navigation, KioskError> {
        let choice = page.choice();
        self.say(&format!(
            "\n== Your details ==\n{} at {}",
            format::long_date(choice.date),
            choice.time
        ))
        .await?;

        loop {
            let contact = page.form().contact;
            let full_name = self
                .ask_with_default("Full name (back to change the time)", &contact.full_name)
                .await?;
            if full_name == "back" {
                return Ok(self.flow.back_from_details(&mode));
            }
            page.set_field(ContactField::FullName, full_name);
            let email = self.ask_with_default("Email", &contact.email).await?;
            page.set_field(ContactField::Email, email);
            let phone = self.ask_with_default("Phone", &contact.phone).await?;
            page.set_field(ContactField::Phone, phone);

            let pending = match page.submit() {
                Ok(pending) => pending,
                Err(SubmitBlocked::Invalid(errors)) => {
                    for field in errors.fields() {
                        self.say(&format!("  {}", field.message())).await?;
                    }
                    continue;
                }
                Err(blocked) => {
                    self.say(&blocked.to_string()).await?;
                    continue;
                }
            };

            self.say("Submitting...").await?;
            match pending.outcome().await {
                SubmitOutcome::Accepted(receipt) => {
                    info!(reference = %receipt.reference, "kiosk booking accepted");
                    return Ok(self.flow.confirm(&mode, receipt));
                }
                SubmitOutcome::Rejected(e @ SubmissionError::SlotExpired { .. }) => {
                    self.say(&e.to_string()).await?;
                    return Ok(self.flow.back_from_details(&mode));
                }
                SubmitOutcome::Rejected(e) => self.say(&e.to_string()).await?,
                SubmitOutcome::Discarded => return Ok(self.flow.back_from_details(&mode)),
            }
        }
    }

    async fn confirmation(&mut self, view: &ConfirmationView) -> Result<(), KioskError> {
        self.say(&format!(
            "\n{}\n{}\n{} <{}> {}",
            view.title,
            view.message,
            view.booking.contact.full_name,
            view.booking.contact.email,
            view.booking.contact.phone
        ))
        .await
    }

    async fn ask(&mut self, prompt: &str) -> Result<String, KioskError> {
        self.write(&format!("{}> ", prompt)).await?;
        match self.input.next_line().await? {
            Some(line) => Ok(line.trim().to_string()),
            None => Err(KioskError::InputClosed),
        }
    }

    /// Like [`Self::ask`], but an empty answer keeps `current`.
    async fn ask_with_default(&mut self, prompt: &str, current: &str) -> Result<String, KioskError> {
        let answer = if current.is_empty() {
            self.ask(prompt).await?
        } else {
            self.ask(&format!("{} [{}]", prompt, current)).await?
        };
        Ok(if answer.is_empty() {
            current.to_string()
        } else {
            answer
        })
    }

    async fn say(&mut self, text: &str) -> Result<(), KioskError> {
        self.write(&format!("{}\n", text)).await
    }

    async fn write(&mut self, text: &str) -> Result<(), KioskError> {
        self.output.write_all(text.as_bytes()).await?;
        self.output.flush().await?;
        Ok(())
    }
}
