use std::{collections::HashSet, sync::Arc};

use wn_core::gateways::{
    email::EmailGateway,
    notify::{NotificationEvent, NotificationGateway, NotificationType},
};
use wn_entities::email::*;

use crate::user_communication;

/// Turns notification events into e-mails.
///
/// Submission events go to the configured moderation inbox, decision and
/// registration events to the affected user.
#[derive(Clone)]
pub struct Notify {
    email_gw: Arc<dyn EmailGateway + Send + Sync + 'static>,
    notify_on: HashSet<NotificationType>,
    moderation_inbox: Option<EmailAddress>,
}

impl Notify {
    pub fn new<G>(
        gw: G,
        notify_on: HashSet<NotificationType>,
        moderation_inbox: Option<EmailAddress>,
    ) -> Self
    where
        G: EmailGateway + Send + Sync + 'static,
    {
        Self {
            email_gw: Arc::new(gw),
            notify_on,
            moderation_inbox,
        }
    }

    fn skip(&self, ev: &NotificationEvent) -> bool {
        !self.notify_on.contains(&ev.kind())
    }
}

impl NotificationGateway for Notify {
    fn notify(&self, event: NotificationEvent) {
        use NotificationEvent as E;
        if self.skip(&event) {
            return;
        }
        match event {
            E::PlaceAdded { place } => {
                if let Some(inbox) = &self.moderation_inbox {
                    let content = user_communication::place_added_email(place);
                    log::info!(
                        "Sending e-mail to the moderation inbox after place {} was added",
                        place.id
                    );
                    self.email_gw
                        .compose_and_send(std::slice::from_ref(inbox), &content);
                }
            }
            E::VerificationSubmitted {
                place,
                verification,
            } => {
                if let Some(inbox) = &self.moderation_inbox {
                    let content = user_communication::verification_submitted_email(
                        &place.title,
                        verification,
                    );
                    log::info!(
                        "Sending e-mail to the moderation inbox after verification {} was submitted",
                        verification.id
                    );
                    self.email_gw
                        .compose_and_send(std::slice::from_ref(inbox), &content);
                }
            }
            E::VerificationModerated {
                verification,
                submitter,
                place_title,
            } => {
                let content =
                    user_communication::verification_decision_email(place_title, verification);
                log::info!(
                    "Sending decision e-mail to {} after verification {} was moderated",
                    submitter.email,
                    verification.id
                );
                self.email_gw
                    .compose_and_send(std::slice::from_ref(&submitter.email), &content);
            }
            E::UserRegistered { user } => {
                let content = user_communication::welcome_email(user);
                log::info!("Sending welcome e-mail to user {}", user.email);
                self.email_gw
                    .compose_and_send(std::slice::from_ref(&user.email), &content);
            }
        }
    }
}
