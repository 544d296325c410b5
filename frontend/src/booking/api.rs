use gloo_net::http::{Request, Response};
use log::{error, info, warn};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::booking::services::ServiceKind;
use crate::booking::session::{Otp, PhoneNumber};
use crate::config;

pub const SEND_OTP_PATH: &str = "/api/v1/web/send-otp";
pub const VERIFY_OTP_PATH: &str = "/api/v1/web/verify-otp";
pub const INSTANT_BOOKING_PATH: &str = "/api/v1/web/instant";

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(#[from] gloo_net::Error),
    #[error("could not read reply: {0}")]
    Decode(#[source] gloo_net::Error),
}

/// Account snapshot returned by the backend after a successful verification.
#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub is_onboarded: bool,
    #[serde(default)]
    pub has_completed_profile: bool,
}

impl User {
    /// Only fully set up accounts may book from the web.
    pub fn can_book(&self) -> bool {
        self.is_onboarded && self.has_completed_profile
    }
}

#[derive(Serialize)]
struct SendOtpRequest<'a> {
    phone: &'a str,
}

#[derive(Serialize)]
struct VerifyOtpRequest<'a> {
    phone: &'a str,
    otp: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct InstantBookingRequest<'a> {
    phone: &'a str,
    service_type: &'a str,
}

#[derive(Deserialize, Debug, Default)]
pub struct SendOtpReply {
    #[serde(default)]
    pub success: bool,
    pub message: Option<String>,
}

#[derive(Deserialize, Debug, Default)]
pub struct VerifyOtpReply {
    #[serde(default)]
    pub success: bool,
    pub message: Option<String>,
    pub user: Option<User>,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct BookingData {
    pub booking_number: String,
}

#[derive(Deserialize, Debug, Default)]
pub struct InstantBookingReply {
    #[serde(default)]
    pub success: bool,
    pub message: Option<String>,
    pub data: Option<BookingData>,
}

fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

#[derive(Clone, Debug, PartialEq)]
pub enum SendOtpOutcome {
    Sent,
    /// The backend has no account for this number.
    NotRegistered,
    Rejected(Option<String>),
    Unreachable,
}

impl SendOtpOutcome {
    /// `reply` is `None` when the body could not be decoded.
    pub fn from_reply(status: u16, reply: Option<SendOtpReply>) -> Self {
        if status == 404 {
            return SendOtpOutcome::NotRegistered;
        }
        match reply {
            Some(reply) if is_success(status) && reply.success => SendOtpOutcome::Sent,
            Some(reply) => SendOtpOutcome::Rejected(reply.message),
            None => SendOtpOutcome::Unreachable,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum VerifyOtpOutcome {
    Verified(User),
    Rejected(Option<String>),
    Unreachable,
}

impl VerifyOtpOutcome {
    pub fn from_reply(status: u16, reply: Option<VerifyOtpReply>) -> Self {
        match reply {
            Some(VerifyOtpReply {
                success: true,
                user: Some(user),
                ..
            }) if is_success(status) => VerifyOtpOutcome::Verified(user),
            Some(reply) => VerifyOtpOutcome::Rejected(reply.message),
            None => VerifyOtpOutcome::Unreachable,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BookingOutcome {
    Confirmed { booking_number: String },
    Failed,
}

impl BookingOutcome {
    pub fn from_reply(status: u16, reply: Option<InstantBookingReply>) -> Self {
        match reply {
            Some(InstantBookingReply {
                success: true,
                data: Some(data),
                ..
            }) if is_success(status) => BookingOutcome::Confirmed {
                booking_number: data.booking_number,
            },
            _ => BookingOutcome::Failed,
        }
    }
}

/// Thin client for the booking backend's web endpoints. No auth header is sent.
#[derive(Clone, Debug, PartialEq)]
pub struct BookingClient {
    base_url: String,
}

impl Default for BookingClient {
    fn default() -> Self {
        Self::new(config::get_backend_url())
    }
}

impl BookingClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub async fn send_otp(&self, phone: &PhoneNumber) -> SendOtpOutcome {
        let body = SendOtpRequest {
            phone: phone.as_str(),
        };
        match self.post(SEND_OTP_PATH, &body).await {
            Ok(response) => {
                let status = response.status();
                let reply = read_reply::<SendOtpReply>(response).await;
                let outcome = SendOtpOutcome::from_reply(status, reply);
                info!("send-otp answered {} -> {:?}", status, outcome);
                outcome
            }
            Err(e) => {
                error!("Error sending OTP: {}", e);
                SendOtpOutcome::Unreachable
            }
        }
    }

    pub async fn verify_otp(&self, phone: &PhoneNumber, otp: &Otp) -> VerifyOtpOutcome {
        let body = VerifyOtpRequest {
            phone: phone.as_str(),
            otp: otp.as_str(),
        };
        match self.post(VERIFY_OTP_PATH, &body).await {
            Ok(response) => {
                let status = response.status();
                let reply = read_reply::<VerifyOtpReply>(response).await;
                let outcome = VerifyOtpOutcome::from_reply(status, reply);
                if !matches!(outcome, VerifyOtpOutcome::Verified(_)) {
                    warn!("verify-otp failed with status {}", status);
                }
                outcome
            }
            Err(e) => {
                error!("Error verifying OTP: {}", e);
                VerifyOtpOutcome::Unreachable
            }
        }
    }

    pub async fn create_instant_booking(
        &self,
        phone: &PhoneNumber,
        service: ServiceKind,
    ) -> BookingOutcome {
        let service_type = service.wire_name();
        let body = InstantBookingRequest {
            phone: phone.as_str(),
            service_type: &service_type,
        };
        match self.post(INSTANT_BOOKING_PATH, &body).await {
            Ok(response) => {
                let status = response.status();
                let reply = read_reply::<InstantBookingReply>(response).await;
                BookingOutcome::from_reply(status, reply)
            }
            Err(e) => {
                error!("Booking error: {}", e);
                BookingOutcome::Failed
            }
        }
    }

    async fn post<B: Serialize>(&self, path: &str, body: &B) -> Result<Response, ApiError> {
        let response = Request::post(&self.endpoint(path))
            .json(body)?
            .send()
            .await?;
        Ok(response)
    }
}

async fn read_reply<T: DeserializeOwned>(response: Response) -> Option<T> {
    match response.json::<T>().await.map_err(ApiError::Decode) {
        Ok(reply) => Some(reply),
        Err(e) => {
            warn!("{} (status {})", e, response.status());
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn parse<T: DeserializeOwned>(value: serde_json::Value) -> Option<T> {
        serde_json::from_value(value).ok()
    }

    #[test]
    fn request_bodies_use_wire_names() {
        let body = serde_json::to_value(InstantBookingRequest {
            phone: "9876543210",
            service_type: "plumbing",
        })
        .unwrap();
        assert_eq!(body, json!({"phone": "9876543210", "serviceType": "plumbing"}));

        let body = serde_json::to_value(VerifyOtpRequest {
            phone: "9876543210",
            otp: "123456",
        })
        .unwrap();
        assert_eq!(body, json!({"phone": "9876543210", "otp": "123456"}));
    }

    #[test]
    fn send_otp_success() {
        let outcome = SendOtpOutcome::from_reply(200, parse(json!({"success": true})));
        assert_eq!(outcome, SendOtpOutcome::Sent);
    }

    #[test]
    fn send_otp_404_means_unregistered_even_without_body() {
        assert_eq!(
            SendOtpOutcome::from_reply(404, parse(json!({"success": false, "message": "User not found"}))),
            SendOtpOutcome::NotRegistered
        );
        assert_eq!(SendOtpOutcome::from_reply(404, None), SendOtpOutcome::NotRegistered);
    }

    #[test]
    fn send_otp_other_failures() {
        assert_eq!(
            SendOtpOutcome::from_reply(429, parse(json!({"success": false, "message": "Slow down"}))),
            SendOtpOutcome::Rejected(Some("Slow down".into()))
        );
        // 2xx without the success flag is still a rejection
        assert_eq!(
            SendOtpOutcome::from_reply(200, parse(json!({}))),
            SendOtpOutcome::Rejected(None)
        );
        assert_eq!(SendOtpOutcome::from_reply(502, None), SendOtpOutcome::Unreachable);
    }

    #[test]
    fn verify_otp_reads_user() {
        let reply = parse(json!({
            "success": true,
            "user": {
                "id": "65a1",
                "phone": "9876543210",
                "name": "Asha",
                "isOnboarded": false,
                "hasCompletedProfile": false
            }
        }));
        match VerifyOtpOutcome::from_reply(200, reply) {
            VerifyOtpOutcome::Verified(user) => {
                assert_eq!(user.name, "Asha");
                assert!(!user.can_book());
            }
            other => panic!("unexpected outcome {other:?}"),
        }
    }

    #[test]
    fn verify_otp_failures() {
        assert_eq!(
            VerifyOtpOutcome::from_reply(400, parse(json!({"success": false, "message": "OTP expired"}))),
            VerifyOtpOutcome::Rejected(Some("OTP expired".into()))
        );
        // success without a user record cannot be acted on
        assert_eq!(
            VerifyOtpOutcome::from_reply(200, parse(json!({"success": true}))),
            VerifyOtpOutcome::Rejected(None)
        );
        assert_eq!(VerifyOtpOutcome::from_reply(200, None), VerifyOtpOutcome::Unreachable);
    }

    #[test]
    fn booking_confirmation_carries_number() {
        let reply = parse(json!({"success": true, "data": {"bookingNumber": "BK1001"}}));
        assert_eq!(
            BookingOutcome::from_reply(201, reply),
            BookingOutcome::Confirmed {
                booking_number: "BK1001".into()
            }
        );
    }

    #[test]
    fn booking_failures() {
        assert_eq!(
            BookingOutcome::from_reply(500, parse(json!({"success": true, "data": {"bookingNumber": "BK1"}}))),
            BookingOutcome::Failed
        );
        assert_eq!(
            BookingOutcome::from_reply(200, parse(json!({"success": false}))),
            BookingOutcome::Failed
        );
        assert_eq!(BookingOutcome::from_reply(200, None), BookingOutcome::Failed);
    }

    #[test]
    fn endpoints_join_base_url() {
        let client = BookingClient::new("https://localfix.xyz");
        assert_eq!(
            client.endpoint(SEND_OTP_PATH),
            "https://localfix.xyz/api/v1/web/send-otp"
        );
    }
}
