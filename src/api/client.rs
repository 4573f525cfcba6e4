//! Blocking HTTP client for the booking service's REST API.

use std::path::Path;
use std::time::Duration;

use chrono::{Datelike, NaiveDate, NaiveDateTime};
use reqwest::StatusCode;
use reqwest::blocking::{Client as HttpClient, Response, multipart};
use serde::{Deserialize, Serialize};

use super::error::ApiError;
use crate::model::{AvailabilitySlot, Provider, User, wire_date};
use crate::session::AuthSession;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// The booking service operations the app depends on.
///
/// Screens never see this trait; the `App` is the only caller, and tests
/// substitute a recording fake.
pub trait BookingApi {
    /// Installs or clears the bearer token sent with subsequent requests.
    fn set_token(&mut self, token: Option<String>);

    /// `POST sessions` — exchanges credentials for a token and user.
    fn sign_in(&self, email: &str, password: &str) -> Result<AuthSession, ApiError>;

    /// `POST users` — creates an account.
    fn create_user(&self, user: &NewUser) -> Result<User, ApiError>;

    /// `GET providers` — lists bookable providers.
    fn providers(&self) -> Result<Vec<Provider>, ApiError>;

    /// `GET providers/{id}/day-availability` — the provider's slots for a day.
    fn day_availability(
        &self,
        provider_id: &str,
        date: NaiveDate,
    ) -> Result<Vec<AvailabilitySlot>, ApiError>;

    /// `POST appointments` — books the given timestamp with a provider.
    fn create_appointment(
        &self,
        provider_id: &str,
        date: &NaiveDateTime,
    ) -> Result<(), ApiError>;

    /// `POST password/forgot` — requests a recovery e-mail.
    fn forgot_password(&self, email: &str) -> Result<(), ApiError>;

    /// `PUT profile` — updates the signed-in user.
    fn update_profile(&self, update: &ProfileUpdate) -> Result<User, ApiError>;

    /// `PATCH users/avatar` — uploads a new avatar image.
    fn update_avatar(&self, path: &Path) -> Result<User, ApiError>;
}

/// Payload for account creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Payload for profile updates. The password trio is serialized only
/// when the user supplied their old password.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfileUpdate {
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub old_password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password_confirmation: Option<String>,
}

/// [`BookingApi`] over `reqwest::blocking` with a base URL and an
/// optional bearer token.
pub struct HttpApi {
    base_url: String,
    token: Option<String>,
    http: HttpClient,
}

impl HttpApi {
    /// Creates a client for the service at `base_url`.
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        let http = HttpClient::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            token: None,
            http,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{path}", self.base_url)
    }

    fn authorize(
        &self,
        request: reqwest::blocking::RequestBuilder,
    ) -> reqwest::blocking::RequestBuilder {
        match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    fn check(response: Response) -> Result<Response, ApiError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().unwrap_or_default();
        Err(ApiError::Rejected {
            status: status.as_u16(),
            message: rejection_message(status, &body),
        })
    }
}

/// Extracts the service's `{"message": "..."}` body when present,
/// falling back to the HTTP status reason.
fn rejection_message(status: StatusCode, body: &str) -> String {
    if let Ok(envelope) = serde_json::from_str::<ErrorEnvelope>(body)
        && let Some(message) = envelope.message
        && !message.is_empty()
    {
        return message;
    }
    status
        .canonical_reason()
        .unwrap_or("request failed")
        .to_string()
}

impl BookingApi for HttpApi {
    fn set_token(&mut self, token: Option<String>) {
        self.token = token;
    }

    fn sign_in(&self, email: &str, password: &str) -> Result<AuthSession, ApiError> {
        let response = self
            .http
            .post(self.url("sessions"))
            .json(&serde_json::json!({ "email": email, "password": password }))
            .send()?;
        Ok(Self::check(response)?.json()?)
    }

    fn create_user(&self, user: &NewUser) -> Result<User, ApiError> {
        let response = self.http.post(self.url("users")).json(user).send()?;
        Ok(Self::check(response)?.json()?)
    }

    fn providers(&self) -> Result<Vec<Provider>, ApiError> {
        let request = self.authorize(self.http.get(self.url("providers")));
        Ok(Self::check(request.send()?)?.json()?)
    }

    fn day_availability(
        &self,
        provider_id: &str,
        date: NaiveDate,
    ) -> Result<Vec<AvailabilitySlot>, ApiError> {
        let request = self
            .authorize(
                self.http
                    .get(self.url(&format!("providers/{provider_id}/day-availability"))),
            )
            .query(&[
                ("year", date.year().to_string()),
                ("month", date.month().to_string()),
                ("day", date.day().to_string()),
            ]);
        Ok(Self::check(request.send()?)?.json()?)
    }

    fn create_appointment(
        &self,
        provider_id: &str,
        date: &NaiveDateTime,
    ) -> Result<(), ApiError> {
        let request = self
            .authorize(self.http.post(self.url("appointments")))
            .json(&serde_json::json!({
                "provider_id": provider_id,
                "date": wire_date(date),
            }));
        Self::check(request.send()?)?;
        Ok(())
    }

    fn forgot_password(&self, email: &str) -> Result<(), ApiError> {
        let response = self
            .http
            .post(self.url("password/forgot"))
            .json(&serde_json::json!({ "email": email }))
            .send()?;
        Self::check(response)?;
        Ok(())
    }

    fn update_profile(&self, update: &ProfileUpdate) -> Result<User, ApiError> {
        let request = self
            .authorize(self.http.put(self.url("profile")))
            .json(update);
        Ok(Self::check(request.send()?)?.json()?)
    }

    fn update_avatar(&self, path: &Path) -> Result<User, ApiError> {
        let form = multipart::Form::new().file("avatar", path)?;
        let request = self
            .authorize(self.http.patch(self.url("users/avatar")))
            .multipart(form);
        Ok(Self::check(request.send()?)?.json()?)
    }
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    message: Option<String>,
}
