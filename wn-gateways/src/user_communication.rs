use wn_entities::{email::EmailContent, place::Place, user::User, verification::*};

fn signature() -> &'static str {
    "\nThanks for keeping the map accurate!\n\nThe WorkNook team"
}

pub fn welcome_email(user: &User) -> EmailContent {
    let subject = "Welcome to WorkNook".to_string();
    let body = format!(
        "Hi {name},\n\n\
         your account has been created.\n\n\
         Browse work-friendly places around you, submit the ones we are\n\
         still missing and help verifying the details of existing ones.\n\
         {signature}",
        name = user.display_name,
        signature = signature(),
    );
    EmailContent { subject, body }
}

pub fn place_added_email(place: &Place) -> EmailContent {
    let subject = format!("WorkNook - new place submitted: {}", place.title);
    let body = format!(
        "A new place has been submitted and awaits verification:\n\n\
         {title}\n\
         {address}\n\
         https://worknook.app/places/{id}\n\
         {signature}",
        title = place.title,
        address = place.address,
        id = place.id,
        signature = signature(),
    );
    EmailContent { subject, body }
}

pub fn verification_submitted_email(place_title: &str, verification: &Verification) -> EmailContent {
    let subject = format!("WorkNook - verification claim for: {place_title}");
    let body = format!(
        "A verification claim for \"{place_title}\" awaits review.\n\n\
         Proof: {proof_link}\n\
         https://worknook.app/admin\n\
         {signature}",
        proof_link = verification.proof_link,
        signature = signature(),
    );
    EmailContent { subject, body }
}

pub fn verification_decision_email(place_title: &str, verification: &Verification) -> EmailContent {
    let decision = if verification.status == PlaceStatus::Rejected {
        "rejected"
    } else {
        "approved"
    };
    let subject = format!("WorkNook - your verification of \"{place_title}\" was {decision}");
    let mut body = format!(
        "Hi,\n\n\
         a moderator has reviewed your verification claim for\n\
         \"{place_title}\" and {decision} it.\n"
    );
    if let Some(notes) = &verification.admin_notes {
        body.push_str(&format!("\nModerator notes:\n{notes}\n"));
    }
    body.push_str(signature());
    EmailContent { subject, body }
}
