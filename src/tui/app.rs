use chrono::Local;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::layout::{Constraint, Layout};
use ratatui::{Frame, Terminal};

use crate::api::{ApiError, BookingApi};
use crate::model::DaySchedule;
use crate::session::Session;

use super::action::{Action, ScreenState};
use super::error::AppError;
use super::screens::{
    AppointmentCreatedState, CreateAppointmentState, DashboardState, ForgotPasswordState,
    ProfileState, SignInState, SignUpState, draw_appointment_created, draw_create_appointment,
    draw_dashboard, draw_forgot_password, draw_profile, draw_sign_in, draw_sign_up,
};
use super::widgets::{Notice, StatusBarContext, draw_notice, draw_status_bar};

/// All screens the app can navigate between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Screen {
    /// Exchange credentials for a session.
    SignIn,
    /// Create an account.
    SignUp,
    /// Request a password recovery e-mail.
    ForgotPassword,
    /// List providers; entry point while signed in.
    Dashboard,
    /// Edit the signed-in user's profile and avatar.
    Profile,
    /// Pick a provider, day, and hour slot.
    CreateAppointment,
    /// Confirmation after a successful booking.
    AppointmentCreated,
}

/// Top-level application state.
///
/// Screens return [`Action`]s from their key handlers; the `App` is the
/// only place that talks to the API or mutates the session.
pub struct App {
    screen: Screen,
    api: Box<dyn BookingApi>,
    session: Session,
    notice: Option<Notice>,
    should_quit: bool,
    sign_in: SignInState,
    sign_up: SignUpState,
    forgot_password: ForgotPasswordState,
    dashboard: DashboardState,
    profile: ProfileState,
    create_appointment: CreateAppointmentState,
    appointment_created: AppointmentCreatedState,
}

impl App {
    /// Creates the app. With a persisted sign-in the token is installed
    /// and the app opens on the dashboard; otherwise on the sign-in
    /// screen.
    pub fn new(mut api: Box<dyn BookingApi>, session: Session) -> Self {
        let signed_in = session.current().is_some();
        if let Some(token) = session.token() {
            api.set_token(Some(token.to_string()));
        }
        let mut app = Self {
            screen: Screen::SignIn,
            api,
            session,
            notice: None,
            should_quit: false,
            sign_in: SignInState::new(),
            sign_up: SignUpState::new(),
            forgot_password: ForgotPasswordState::new(),
            dashboard: DashboardState::new(),
            profile: ProfileState::new(),
            create_appointment: CreateAppointmentState::default(),
            appointment_created: AppointmentCreatedState::default(),
        };
        if signed_in {
            app.navigate(Screen::Dashboard);
        }
        app
    }

    /// Main event loop: draw → read event → dispatch → check quit.
    #[cfg_attr(coverage_nightly, coverage(off))]
    #[mutants::skip]
    pub fn run<B: ratatui::backend::Backend>(
        &mut self,
        terminal: &mut Terminal<B>,
    ) -> Result<(), AppError> {
        while !self.should_quit {
            terminal.draw(|frame| self.draw(frame))?;
            if let Event::Key(key) = event::read()? {
                self.handle_key(key);
            }
        }
        Ok(())
    }

    /// Renders the status bar, the current screen, and any notice on top.
    #[cfg_attr(coverage_nightly, coverage(off))]
    #[mutants::skip]
    fn draw(&self, frame: &mut Frame) {
        let [bar_area, body_area] =
            Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).areas(frame.area());

        let ctx = self
            .session
            .user()
            .map_or_else(StatusBarContext::default, |user| StatusBarContext {
                name: user.name.clone(),
                email: user.email.clone(),
            });
        draw_status_bar(&ctx, frame, bar_area);

        match self.screen {
            Screen::SignIn => draw_sign_in(&self.sign_in, frame, body_area),
            Screen::SignUp => draw_sign_up(&self.sign_up, frame, body_area),
            Screen::ForgotPassword => draw_forgot_password(&self.forgot_password, frame, body_area),
            Screen::Dashboard => draw_dashboard(&self.dashboard, frame, body_area),
            Screen::Profile => draw_profile(&self.profile, frame, body_area),
            Screen::CreateAppointment => {
                draw_create_appointment(&self.create_appointment, frame, body_area)
            }
            Screen::AppointmentCreated => {
                draw_appointment_created(&self.appointment_created, frame, body_area)
            }
        }

        if let Some(notice) = &self.notice {
            draw_notice(notice, frame);
        }
    }

    /// Handles a key event. An open notice swallows everything except
    /// its dismissal keys.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        if self.notice.is_some() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.notice = None;
            }
            return;
        }

        let action = match self.screen {
            Screen::SignIn => self.sign_in.handle_key(key),
            Screen::SignUp => self.sign_up.handle_key(key),
            Screen::ForgotPassword => self.forgot_password.handle_key(key),
            Screen::Dashboard => self.dashboard.handle_key(key),
            Screen::Profile => self.profile.handle_key(key),
            Screen::CreateAppointment => self.create_appointment.handle_key(key),
            Screen::AppointmentCreated => self.appointment_created.handle_key(key),
        };
        self.apply(action);
    }

    /// Performs the side effects a screen asked for.
    fn apply(&mut self, action: Action) {
        match action {
            Action::None => {}
            Action::Navigate(screen) => self.navigate(screen),
            Action::Notice(notice) => self.notice = Some(notice),
            Action::Quit => self.should_quit = true,
            Action::SignIn { email, password } => self.do_sign_in(&email, &password),
            Action::SignUp(user) => match self.api.create_user(&user) {
                Ok(_) => {
                    self.notice =
                        Some(Notice::new("Account created", "You can now sign in."));
                    self.navigate(Screen::SignIn);
                }
                Err(err) => self.notice = Some(rejection("Sign-up failed", err)),
            },
            Action::RecoverPassword { email } => match self.api.forgot_password(&email) {
                Ok(()) => {
                    self.notice = Some(Notice::new(
                        "Recovery e-mail sent",
                        "Check your inbox for password reset instructions.",
                    ));
                    self.navigate(Screen::SignIn);
                }
                Err(err) => self.notice = Some(rejection("Recovery failed", err)),
            },
            Action::SignOut => {
                if let Err(err) = self.session.sign_out() {
                    self.notice = Some(Notice::new("Session error", err.to_string()));
                    return;
                }
                self.api.set_token(None);
                self.navigate(Screen::SignIn);
            }
            Action::UpdateProfile(update) => match self.api.update_profile(&update) {
                Ok(user) => {
                    if let Err(err) = self.session.update_user(user) {
                        self.notice = Some(Notice::new("Session error", err.to_string()));
                        return;
                    }
                    self.notice = Some(Notice::new("Profile updated", "Your changes were saved."));
                    self.navigate(Screen::Dashboard);
                }
                Err(err) => self.notice = Some(rejection("Update failed", err)),
            },
            Action::UploadAvatar(path) => match self.api.update_avatar(&path) {
                Ok(user) => {
                    if let Err(err) = self.session.update_user(user) {
                        self.notice = Some(Notice::new("Session error", err.to_string()));
                        return;
                    }
                    self.notice = Some(Notice::new("Avatar updated", "Your new avatar was saved."));
                }
                Err(err) => self.notice = Some(rejection("Upload failed", err)),
            },
            Action::StartBooking(provider) => {
                let date = Local::now().date_naive();
                self.create_appointment
                    .start(&provider, self.dashboard.providers().to_vec(), date);
                self.screen = Screen::CreateAppointment;
                self.load_availability(&provider.id, date);
            }
            Action::LoadAvailability { provider_id, date } => {
                self.load_availability(&provider_id, date);
            }
            Action::BookAppointment { provider, time } => {
                match self.api.create_appointment(&provider.id, &time) {
                    Ok(()) => {
                        self.appointment_created.set(provider.name, time);
                        self.screen = Screen::AppointmentCreated;
                    }
                    Err(_) => {
                        self.notice = Some(Notice::new(
                            "Booking failed",
                            "Could not create the appointment, try again.",
                        ));
                    }
                }
            }
        }
    }

    fn do_sign_in(&mut self, email: &str, password: &str) {
        match self.api.sign_in(email, password) {
            Ok(auth) => {
                let token = auth.token.clone();
                if let Err(err) = self.session.sign_in(auth) {
                    self.notice = Some(Notice::new("Session error", err.to_string()));
                    return;
                }
                self.api.set_token(Some(token));
                self.navigate(Screen::Dashboard);
            }
            Err(_) => {
                self.notice = Some(Notice::new(
                    "Sign-in failed",
                    "Could not sign in, check your credentials.",
                ));
            }
        }
    }

    fn load_availability(&mut self, provider_id: &str, date: chrono::NaiveDate) {
        match self.api.day_availability(provider_id, date) {
            Ok(slots) => self
                .create_appointment
                .set_schedule(DaySchedule::partition(&slots)),
            Err(err) => self.notice = Some(rejection("Availability unavailable", err)),
        }
    }

    /// Switches screens, running each screen's entry behavior.
    fn navigate(&mut self, screen: Screen) {
        match screen {
            Screen::SignIn => self.sign_in.reset(),
            Screen::SignUp => self.sign_up.reset(),
            Screen::ForgotPassword => self.forgot_password.reset(),
            Screen::Dashboard => match self.api.providers() {
                Ok(providers) => self.dashboard.set_providers(providers),
                Err(err) => self.notice = Some(rejection("Dashboard", err)),
            },
            Screen::Profile => {
                let Some(user) = self.session.user().cloned() else {
                    // Signed out mid-flight; fall back to sign-in.
                    self.screen = Screen::SignIn;
                    self.sign_in.reset();
                    return;
                };
                self.profile.populate(&user);
            }
            Screen::CreateAppointment | Screen::AppointmentCreated => {}
        }
        self.screen = screen;
    }

    /// Returns the current screen.
    pub fn screen(&self) -> Screen {
        self.screen
    }

    /// Returns the open notice, if any.
    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    /// Returns `true` if the app should quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Returns the session.
    pub fn session(&self) -> &Session {
        &self.session
    }
}

fn rejection(title: &str, err: ApiError) -> Notice {
    Notice::new(title, err.to_string())
}
