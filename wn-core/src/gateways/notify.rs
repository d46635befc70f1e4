use wn_entities::{place::Place, user::User, verification::Verification};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NotificationType {
    PlaceAdded,
    VerificationSubmitted,
    VerificationModerated,
    UserRegistered,
}

#[derive(Debug)]
pub enum NotificationEvent<'a> {
    PlaceAdded {
        place: &'a Place,
    },
    VerificationSubmitted {
        place: &'a Place,
        verification: &'a Verification,
    },
    VerificationModerated {
        verification: &'a Verification,
        submitter: &'a User,
        place_title: &'a str,
    },
    UserRegistered {
        user: &'a User,
    },
}

impl NotificationEvent<'_> {
    pub fn kind(&self) -> NotificationType {
        use NotificationEvent as E;
        match self {
            E::PlaceAdded { .. } => NotificationType::PlaceAdded,
            E::VerificationSubmitted { .. } => NotificationType::VerificationSubmitted,
            E::VerificationModerated { .. } => NotificationType::VerificationModerated,
            E::UserRegistered { .. } => NotificationType::UserRegistered,
        }
    }
}

/// Fire-and-forget: implementations must never fail the calling workflow.
pub trait NotificationGateway {
    fn notify(&self, event: NotificationEvent);
}
