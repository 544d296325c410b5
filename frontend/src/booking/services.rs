use std::collections::HashMap;
use std::rc::Rc;

use yew::Reducible;

use crate::booking::api::BookingOutcome;

pub const BOOKING_FAILED: &str = "Unable to create booking. Please try again.";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ServiceKind {
    Plumbing,
    Electrical,
    Cleaning,
    Painting,
    Carpentry,
    AcRepair,
}

impl ServiceKind {
    pub const ALL: [ServiceKind; 6] = [
        ServiceKind::Plumbing,
        ServiceKind::Electrical,
        ServiceKind::Cleaning,
        ServiceKind::Painting,
        ServiceKind::Carpentry,
        ServiceKind::AcRepair,
    ];

    pub fn title(self) -> &'static str {
        match self {
            ServiceKind::Plumbing => "Plumbing",
            ServiceKind::Electrical => "Electrical",
            ServiceKind::Cleaning => "Cleaning",
            ServiceKind::Painting => "Painting",
            ServiceKind::Carpentry => "Carpentry",
            ServiceKind::AcRepair => "AC Repair",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            ServiceKind::Plumbing => "🔧",
            ServiceKind::Electrical => "⚡",
            ServiceKind::Cleaning => "🧹",
            ServiceKind::Painting => "🎨",
            ServiceKind::Carpentry => "🪚",
            ServiceKind::AcRepair => "❄️",
        }
    }

    /// `serviceType` as the backend expects it: the lowercased title.
    pub fn wire_name(self) -> String {
        self.title().to_lowercase()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum BookingStatus {
    #[default]
    Idle,
    InFlight,
    Confirmed(String),
    Failed,
}

impl BookingStatus {
    pub fn message(&self) -> Option<String> {
        match self {
            BookingStatus::Confirmed(number) => Some(format!(
                "Booking created! Check your mobile app. Booking ID: {}",
                number
            )),
            BookingStatus::Failed => Some(BOOKING_FAILED.to_string()),
            BookingStatus::Idle | BookingStatus::InFlight => None,
        }
    }
}

#[derive(Clone, Debug)]
pub enum BoardAction {
    Started(ServiceKind),
    Resolved(ServiceKind, BookingOutcome),
}

/// Booking status per service card. Entries are independent, so one pending
/// booking never blocks another card.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BookingBoard {
    statuses: HashMap<ServiceKind, BookingStatus>,
}

impl BookingBoard {
    pub fn status(&self, service: ServiceKind) -> BookingStatus {
        self.statuses.get(&service).cloned().unwrap_or_default()
    }

    pub fn is_in_flight(&self, service: ServiceKind) -> bool {
        matches!(self.statuses.get(&service), Some(BookingStatus::InFlight))
    }
}

impl Reducible for BookingBoard {
    type Action = BoardAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            BoardAction::Started(service) => {
                if self.is_in_flight(service) {
                    return self;
                }
                let mut next = (*self).clone();
                next.statuses.insert(service, BookingStatus::InFlight);
                Rc::new(next)
            }
            BoardAction::Resolved(service, outcome) => {
                if !self.is_in_flight(service) {
                    return self;
                }
                let status = match outcome {
                    BookingOutcome::Confirmed { booking_number } => {
                        BookingStatus::Confirmed(booking_number)
                    }
                    BookingOutcome::Failed => BookingStatus::Failed,
                };
                let mut next = (*self).clone();
                next.statuses.insert(service, status);
                Rc::new(next)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn apply(board: Rc<BookingBoard>, action: BoardAction) -> Rc<BookingBoard> {
        board.reduce(action)
    }

    #[test]
    fn wire_names_are_lowercased_titles() {
        assert_eq!(ServiceKind::Plumbing.wire_name(), "plumbing");
        assert_eq!(ServiceKind::AcRepair.wire_name(), "ac repair");
    }

    #[test]
    fn cards_track_their_own_flight() {
        let board = Rc::new(BookingBoard::default());
        let board = apply(board, BoardAction::Started(ServiceKind::Plumbing));
        let board = apply(board, BoardAction::Started(ServiceKind::Cleaning));
        assert!(board.is_in_flight(ServiceKind::Plumbing));
        assert!(board.is_in_flight(ServiceKind::Cleaning));
        assert!(!board.is_in_flight(ServiceKind::Painting));

        let board = apply(
            board,
            BoardAction::Resolved(ServiceKind::Cleaning, BookingOutcome::Failed),
        );
        assert!(board.is_in_flight(ServiceKind::Plumbing));
        assert_eq!(board.status(ServiceKind::Cleaning), BookingStatus::Failed);
        assert_eq!(board.status(ServiceKind::Painting), BookingStatus::Idle);
    }

    #[test]
    fn confirmation_message_includes_booking_number() {
        let board = Rc::new(BookingBoard::default());
        let board = apply(board, BoardAction::Started(ServiceKind::Plumbing));
        let board = apply(
            board,
            BoardAction::Resolved(
                ServiceKind::Plumbing,
                BookingOutcome::Confirmed {
                    booking_number: "BK1001".into(),
                },
            ),
        );
        let message = board.status(ServiceKind::Plumbing).message().unwrap();
        assert!(message.contains("BK1001"));
        assert!(!board.is_in_flight(ServiceKind::Plumbing));
    }

    #[test]
    fn failure_message_asks_to_retry() {
        assert_eq!(BookingStatus::Failed.message().as_deref(), Some(BOOKING_FAILED));
        assert_eq!(BookingStatus::InFlight.message(), None);
    }

    #[test]
    fn resolution_without_start_is_ignored() {
        let board = Rc::new(BookingBoard::default());
        let next = apply(
            board.clone(),
            BoardAction::Resolved(ServiceKind::Painting, BookingOutcome::Failed),
        );
        assert!(Rc::ptr_eq(&board, &next));
    }

    #[test]
    fn retry_after_failure_goes_back_in_flight() {
        let board = Rc::new(BookingBoard::default());
        let board = apply(board, BoardAction::Started(ServiceKind::Carpentry));
        let board = apply(
            board,
            BoardAction::Resolved(ServiceKind::Carpentry, BookingOutcome::Failed),
        );
        let board = apply(board, BoardAction::Started(ServiceKind::Carpentry));
        assert!(board.is_in_flight(ServiceKind::Carpentry));
    }
}
