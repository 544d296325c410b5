use std::fmt;
use std::rc::Rc;

use thiserror::Error;
use yew::Reducible;

use crate::booking::api::{SendOtpOutcome, User, VerifyOtpOutcome};

pub const PHONE_LEN: usize = 10;
pub const OTP_LEN: usize = 6;
pub const COUNTRY_PREFIX: &str = "+91";

pub const PHONE_REJECTED_FALLBACK: &str = "Unable to verify phone number.";
pub const SERVER_UNREACHABLE: &str = "Unable to reach server. Please try again.";
pub const OTP_REJECTED_FALLBACK: &str = "Invalid OTP. Please try again.";
pub const OTP_UNREACHABLE: &str = "Unable to verify OTP. Please try again.";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please enter a valid 10-digit phone number")]
    InvalidPhone,
    #[error("Please enter the 6-digit OTP")]
    InvalidOtp,
}

/// Keeps only ASCII digits, truncated to `max_len`.
pub fn digits_only(raw: &str, max_len: usize) -> String {
    raw.chars()
        .filter(|c| c.is_ascii_digit())
        .take(max_len)
        .collect()
}

fn is_digits(value: &str, len: usize) -> bool {
    value.len() == len && value.bytes().all(|b| b.is_ascii_digit())
}

/// A 10-digit local number. Never carries the country prefix.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        if is_digits(raw, PHONE_LEN) {
            Ok(Self(raw.to_string()))
        } else {
            Err(ValidationError::InvalidPhone)
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn international(&self) -> String {
        format!("{} {}", COUNTRY_PREFIX, self.0)
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Otp(String);

impl Otp {
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        if is_digits(raw, OTP_LEN) {
            Ok(Self(raw.to_string()))
        } else {
            Err(ValidationError::InvalidOtp)
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Where the customer is in the wizard. Each step owns exactly the data that
/// exists at that point of the flow.
#[derive(Clone, Debug, PartialEq, Default)]
pub enum Step {
    #[default]
    PhoneEntry,
    OtpEntry {
        phone: PhoneNumber,
    },
    /// `user` is `None` when the backend has never seen the number.
    DownloadPrompt {
        phone: PhoneNumber,
        user: Option<User>,
    },
    ServiceBooking {
        phone: PhoneNumber,
        user: User,
    },
}

impl Step {
    pub fn phone(&self) -> Option<&PhoneNumber> {
        match self {
            Step::PhoneEntry => None,
            Step::OtpEntry { phone }
            | Step::DownloadPrompt { phone, .. }
            | Step::ServiceBooking { phone, .. } => Some(phone),
        }
    }

    pub fn user(&self) -> Option<&User> {
        match self {
            Step::DownloadPrompt { user, .. } => user.as_ref(),
            Step::ServiceBooking { user, .. } => Some(user),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DotState {
    Idle,
    Active,
    Completed,
}

impl DotState {
    pub fn class(self) -> &'static str {
        match self {
            DotState::Idle => "step-dot",
            DotState::Active => "step-dot active",
            DotState::Completed => "step-dot completed",
        }
    }
}

#[derive(Clone, Debug)]
pub enum SessionAction {
    PhoneInput(String),
    OtpInput(String),
    SubmitPhone,
    SendOtpResolved {
        phone: PhoneNumber,
        outcome: SendOtpOutcome,
    },
    SubmitOtp,
    VerifyOtpResolved {
        phone: PhoneNumber,
        outcome: VerifyOtpOutcome,
    },
    Reset,
}

/// Client-side state of one run through the booking wizard.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct Session {
    pub step: Step,
    pub phone_input: String,
    pub otp_input: String,
    pub error: Option<String>,
    /// A send-OTP or verify-OTP call is in flight.
    pub busy: bool,
}

impl Session {
    pub fn can_submit_phone(&self) -> bool {
        matches!(self.step, Step::PhoneEntry) && !self.busy && self.phone_input.len() == PHONE_LEN
    }

    pub fn can_submit_otp(&self) -> bool {
        matches!(self.step, Step::OtpEntry { .. })
            && !self.busy
            && is_digits(&self.otp_input, OTP_LEN)
    }

    /// What submitting the phone form would do right now. `None` means the
    /// submission is ignored (wrong step or a call already in flight).
    pub fn phone_submission(&self) -> Option<Result<PhoneNumber, ValidationError>> {
        if self.busy || !matches!(self.step, Step::PhoneEntry) {
            return None;
        }
        Some(PhoneNumber::parse(&self.phone_input))
    }

    pub fn otp_submission(&self) -> Option<Result<(PhoneNumber, Otp), ValidationError>> {
        match &self.step {
            Step::OtpEntry { phone } if !self.busy => {
                Some(Otp::parse(&self.otp_input).map(|otp| (phone.clone(), otp)))
            }
            _ => None,
        }
    }

    pub fn step_indicator(&self) -> [DotState; 3] {
        match self.step {
            Step::PhoneEntry => [DotState::Active, DotState::Idle, DotState::Idle],
            Step::OtpEntry { .. } => [DotState::Completed, DotState::Active, DotState::Idle],
            Step::DownloadPrompt { .. } => [DotState::Completed, DotState::Idle, DotState::Idle],
            Step::ServiceBooking { .. } => {
                [DotState::Completed, DotState::Completed, DotState::Active]
            }
        }
    }

    fn awaiting_send_otp(&self, phone: &PhoneNumber) -> bool {
        self.busy
            && matches!(self.step, Step::PhoneEntry)
            && self.phone_input == phone.as_str()
    }

    fn awaiting_verify_otp(&self, phone: &PhoneNumber) -> bool {
        match &self.step {
            Step::OtpEntry { phone: current } => self.busy && current == phone,
            _ => false,
        }
    }

    fn enter(&mut self, step: Step) {
        self.step = step;
        self.otp_input.clear();
        self.error = None;
    }

    fn apply(&mut self, action: SessionAction) {
        match action {
            SessionAction::PhoneInput(raw) => {
                if matches!(self.step, Step::PhoneEntry) && !self.busy {
                    self.phone_input = digits_only(&raw, PHONE_LEN);
                }
            }
            SessionAction::OtpInput(raw) => {
                if matches!(self.step, Step::OtpEntry { .. }) && !self.busy {
                    self.otp_input = digits_only(&raw, OTP_LEN);
                }
            }
            SessionAction::SubmitPhone => match self.phone_submission() {
                Some(Ok(_)) => {
                    self.error = None;
                    self.busy = true;
                }
                Some(Err(err)) => self.error = Some(err.to_string()),
                None => {}
            },
            SessionAction::SendOtpResolved { phone, outcome } => {
                if !self.awaiting_send_otp(&phone) {
                    log::debug!("Dropping stale send-OTP reply for {}", phone);
                    return;
                }
                self.busy = false;
                match outcome {
                    SendOtpOutcome::Sent => self.enter(Step::OtpEntry { phone }),
                    SendOtpOutcome::NotRegistered => {
                        self.enter(Step::DownloadPrompt { phone, user: None })
                    }
                    SendOtpOutcome::Rejected(message) => {
                        self.error = Some(message_or(message, PHONE_REJECTED_FALLBACK));
                    }
                    SendOtpOutcome::Unreachable => {
                        self.error = Some(SERVER_UNREACHABLE.to_string());
                    }
                }
            }
            SessionAction::SubmitOtp => match self.otp_submission() {
                Some(Ok(_)) => {
                    self.error = None;
                    self.busy = true;
                }
                Some(Err(err)) => self.error = Some(err.to_string()),
                None => {}
            },
            SessionAction::VerifyOtpResolved { phone, outcome } => {
                if !self.awaiting_verify_otp(&phone) {
                    log::debug!("Dropping stale verify-OTP reply for {}", phone);
                    return;
                }
                self.busy = false;
                match outcome {
                    VerifyOtpOutcome::Verified(user) if user.can_book() => {
                        self.enter(Step::ServiceBooking { phone, user })
                    }
                    VerifyOtpOutcome::Verified(user) => self.enter(Step::DownloadPrompt {
                        phone,
                        user: Some(user),
                    }),
                    VerifyOtpOutcome::Rejected(message) => {
                        self.error = Some(message_or(message, OTP_REJECTED_FALLBACK));
                    }
                    VerifyOtpOutcome::Unreachable => {
                        self.error = Some(OTP_UNREACHABLE.to_string());
                    }
                }
            }
            SessionAction::Reset => *self = Session::default(),
        }
    }
}

fn message_or(message: Option<String>, fallback: &str) -> String {
    message
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(|| fallback.to_string())
}

impl Reducible for Session {
    type Action = SessionAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        next.apply(action);
        Rc::new(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn phone() -> PhoneNumber {
        PhoneNumber::parse("9876543210").unwrap()
    }

    fn user(onboarded: bool, profile: bool) -> User {
        User {
            id: "u-1".to_string(),
            phone: "9876543210".to_string(),
            name: "Asha".to_string(),
            is_onboarded: onboarded,
            has_completed_profile: profile,
        }
    }

    fn run(session: Session, actions: Vec<SessionAction>) -> Session {
        let mut state = Rc::new(session);
        for action in actions {
            state = state.reduce(action);
        }
        (*state).clone()
    }

    fn at_otp_entry() -> Session {
        run(
            Session::default(),
            vec![
                SessionAction::PhoneInput("9876543210".into()),
                SessionAction::SubmitPhone,
                SessionAction::SendOtpResolved {
                    phone: phone(),
                    outcome: SendOtpOutcome::Sent,
                },
            ],
        )
    }

    #[test]
    fn digit_filter_strips_and_truncates() {
        assert_eq!(digits_only("+91 98765-43210", PHONE_LEN), "9198765432");
        assert_eq!(digits_only("12a3b4c5d6e7", OTP_LEN), "123456");
        assert_eq!(digits_only("abc", OTP_LEN), "");
    }

    #[test]
    fn phone_parse_requires_exactly_ten_ascii_digits() {
        assert!(PhoneNumber::parse("9876543210").is_ok());
        for bad in ["", "987654321", "98765432101", "98765x3210", "٩٨٧٦٥٤٣٢١٠", " 9876543210"] {
            assert_eq!(PhoneNumber::parse(bad), Err(ValidationError::InvalidPhone), "{bad:?}");
        }
    }

    #[test]
    fn invalid_phone_is_rejected_without_going_busy() {
        let session = run(
            Session::default(),
            vec![
                SessionAction::PhoneInput("98765".into()),
                SessionAction::SubmitPhone,
            ],
        );
        assert!(!session.busy);
        assert_eq!(session.step, Step::PhoneEntry);
        assert_eq!(
            session.error.as_deref(),
            Some("Please enter a valid 10-digit phone number")
        );
        assert_eq!(
            session.phone_submission(),
            Some(Err(ValidationError::InvalidPhone))
        );
    }

    #[test]
    fn valid_phone_marks_busy_and_blocks_second_submit() {
        let session = run(
            Session::default(),
            vec![
                SessionAction::PhoneInput("9876543210".into()),
                SessionAction::SubmitPhone,
            ],
        );
        assert!(session.busy);
        assert!(session.error.is_none());
        assert!(!session.can_submit_phone());
        assert_eq!(session.phone_submission(), None);
    }

    #[test]
    fn sent_otp_moves_to_otp_entry_and_keeps_phone() {
        let session = at_otp_entry();
        assert_eq!(session.step, Step::OtpEntry { phone: phone() });
        assert_eq!(session.phone_input, "9876543210");
        assert!(!session.busy);
        assert_eq!(session.step.phone().unwrap().international(), "+91 9876543210");
    }

    #[test]
    fn unregistered_phone_skips_otp() {
        let session = run(
            Session::default(),
            vec![
                SessionAction::PhoneInput("9876543210".into()),
                SessionAction::SubmitPhone,
                SessionAction::SendOtpResolved {
                    phone: phone(),
                    outcome: SendOtpOutcome::NotRegistered,
                },
            ],
        );
        assert_eq!(
            session.step,
            Step::DownloadPrompt {
                phone: phone(),
                user: None
            }
        );
        assert!(session.step.user().is_none());
    }

    #[test]
    fn send_otp_failures_stay_on_phone_entry() {
        let cases = [
            (
                SendOtpOutcome::Rejected(Some("Too many attempts".into())),
                "Too many attempts",
            ),
            (SendOtpOutcome::Rejected(None), PHONE_REJECTED_FALLBACK),
            (SendOtpOutcome::Rejected(Some("  ".into())), PHONE_REJECTED_FALLBACK),
            (SendOtpOutcome::Unreachable, SERVER_UNREACHABLE),
        ];
        for (outcome, expected) in cases {
            let session = run(
                Session::default(),
                vec![
                    SessionAction::PhoneInput("9876543210".into()),
                    SessionAction::SubmitPhone,
                    SessionAction::SendOtpResolved {
                        phone: phone(),
                        outcome,
                    },
                ],
            );
            assert_eq!(session.step, Step::PhoneEntry);
            assert!(!session.busy);
            assert_eq!(session.error.as_deref(), Some(expected));
            assert!(session.can_submit_phone());
        }
    }

    #[test]
    fn otp_submit_disabled_unless_six_digits() {
        let mut session = at_otp_entry();
        for input in ["", "1", "12345"] {
            session = run(session, vec![SessionAction::OtpInput(input.into())]);
            assert!(!session.can_submit_otp(), "{input:?}");
        }
        session = run(session, vec![SessionAction::OtpInput("12-34-56-78".into())]);
        assert_eq!(session.otp_input, "123456");
        assert!(session.can_submit_otp());
    }

    #[test]
    fn short_otp_submit_is_not_sent() {
        let session = run(
            at_otp_entry(),
            vec![SessionAction::OtpInput("123".into()), SessionAction::SubmitOtp],
        );
        assert!(!session.busy);
        assert_eq!(session.error.as_deref(), Some("Please enter the 6-digit OTP"));
    }

    #[test]
    fn verified_complete_profile_goes_to_booking() {
        let session = run(
            at_otp_entry(),
            vec![
                SessionAction::OtpInput("123456".into()),
                SessionAction::SubmitOtp,
                SessionAction::VerifyOtpResolved {
                    phone: phone(),
                    outcome: VerifyOtpOutcome::Verified(user(true, true)),
                },
            ],
        );
        assert_eq!(
            session.step,
            Step::ServiceBooking {
                phone: phone(),
                user: user(true, true)
            }
        );
        assert!(session.otp_input.is_empty());
        assert_eq!(
            session.step_indicator(),
            [DotState::Completed, DotState::Completed, DotState::Active]
        );
    }

    #[test]
    fn verified_incomplete_profile_goes_to_download() {
        for (onboarded, profile) in [(false, false), (true, false), (false, true)] {
            let session = run(
                at_otp_entry(),
                vec![
                    SessionAction::OtpInput("123456".into()),
                    SessionAction::SubmitOtp,
                    SessionAction::VerifyOtpResolved {
                        phone: phone(),
                        outcome: VerifyOtpOutcome::Verified(user(onboarded, profile)),
                    },
                ],
            );
            assert!(matches!(session.step, Step::DownloadPrompt { user: Some(_), .. }));
        }
    }

    #[test]
    fn rejected_otp_keeps_otp_entry() {
        let session = run(
            at_otp_entry(),
            vec![
                SessionAction::OtpInput("000000".into()),
                SessionAction::SubmitOtp,
                SessionAction::VerifyOtpResolved {
                    phone: phone(),
                    outcome: VerifyOtpOutcome::Rejected(None),
                },
            ],
        );
        assert_eq!(session.step, Step::OtpEntry { phone: phone() });
        assert_eq!(session.error.as_deref(), Some(OTP_REJECTED_FALLBACK));
        assert!(session.can_submit_otp());
    }

    #[test]
    fn reset_restores_pristine_session_from_every_step() {
        let download = run(
            at_otp_entry(),
            vec![
                SessionAction::OtpInput("123456".into()),
                SessionAction::SubmitOtp,
                SessionAction::VerifyOtpResolved {
                    phone: phone(),
                    outcome: VerifyOtpOutcome::Verified(user(false, false)),
                },
            ],
        );
        let booking = run(
            at_otp_entry(),
            vec![
                SessionAction::OtpInput("123456".into()),
                SessionAction::SubmitOtp,
                SessionAction::VerifyOtpResolved {
                    phone: phone(),
                    outcome: VerifyOtpOutcome::Verified(user(true, true)),
                },
            ],
        );
        let busy_otp = run(
            at_otp_entry(),
            vec![SessionAction::OtpInput("123456".into()), SessionAction::SubmitOtp],
        );
        for session in [at_otp_entry(), download, booking, busy_otp] {
            let reset = run(session, vec![SessionAction::Reset]);
            assert_eq!(reset, Session::default());
            assert!(reset.step.user().is_none());
        }
    }

    #[test]
    fn late_reply_after_reset_is_ignored() {
        let session = run(
            Session::default(),
            vec![
                SessionAction::PhoneInput("9876543210".into()),
                SessionAction::SubmitPhone,
                SessionAction::Reset,
                SessionAction::SendOtpResolved {
                    phone: phone(),
                    outcome: SendOtpOutcome::Sent,
                },
            ],
        );
        assert_eq!(session, Session::default());
    }

    #[test]
    fn inputs_are_frozen_while_busy() {
        let session = run(
            Session::default(),
            vec![
                SessionAction::PhoneInput("9876543210".into()),
                SessionAction::SubmitPhone,
                SessionAction::PhoneInput("1111111111".into()),
            ],
        );
        assert_eq!(session.phone_input, "9876543210");
    }

    #[test]
    fn indicator_follows_step() {
        assert_eq!(
            Session::default().step_indicator(),
            [DotState::Active, DotState::Idle, DotState::Idle]
        );
        assert_eq!(
            at_otp_entry().step_indicator(),
            [DotState::Completed, DotState::Active, DotState::Idle]
        );
    }
}
