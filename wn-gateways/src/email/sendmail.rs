use fast_chemail::is_valid_email;
use wn_core::gateways::email::EmailGateway;
use wn_entities::email::*;

use std::{
    io::{Error, ErrorKind, Result},
    thread,
};
#[cfg(not(test))]
use std::{
    io::prelude::*,
    process::{Command, Stdio},
};

use time::{format_description::well_known::Rfc2822, OffsetDateTime};

/// Pipes outgoing mail through the local `sendmail` binary.
#[derive(Debug, Clone)]
pub struct Sendmail {
    from: EmailAddress,
}

impl Sendmail {
    pub fn new(from: EmailAddress) -> Self {
        Self { from }
    }

    fn send(&self, mail: String) {
        thread::spawn(move || {
            if let Err(err) = send_raw(&mail) {
                log::warn!("Could not send e-mail: {}", err);
            }
        });
    }
}

#[cfg(not(test))]
fn send_raw(mail: &str) -> Result<()> {
    let mut child = Command::new("sendmail")
        .arg("-t")
        .stdin(Stdio::piped())
        .spawn()?;
    child
        .stdin
        .as_mut()
        .ok_or_else(|| Error::new(ErrorKind::Other, "Could not get stdin"))?
        .write_all(mail.as_bytes())?;
    child.wait_with_output()?;
    Ok(())
}

/// Don't actually send emails while running the tests.
#[cfg(test)]
fn send_raw(mail: &str) -> Result<()> {
    log::debug!("Would send e-mail: {}", mail);
    Ok(())
}

impl EmailGateway for Sendmail {
    fn compose_and_send(&self, recipients: &[EmailAddress], email: &EmailContent) {
        log::debug!("Sending e-mails to: {:?}", recipients);
        for to in recipients {
            match compose(&self.from, &[to], &email.subject, &email.body) {
                Ok(mail) => {
                    self.send(mail);
                }
                Err(err) => {
                    log::warn!("Failed to compose e-mail: {}", err);
                }
            }
        }
    }
}

fn compose(
    from: &EmailAddress,
    to: &[&EmailAddress],
    subject: &str,
    body: &str,
) -> Result<String> {
    let to: Vec<_> = to
        .iter()
        .filter(|email| is_valid_email(email.as_str()))
        .map(|email| email.as_str())
        .collect();

    if to.is_empty() {
        return Err(Error::new(
            ErrorKind::Other,
            "No valid email addresses specified",
        ));
    }

    let date = OffsetDateTime::now_utc()
        .format(&Rfc2822)
        .map_err(|err| Error::new(ErrorKind::Other, err))?;

    let mail = format!(
        "Date:{date}\r\n\
         From:{from}\r\n\
         To:{to}\r\n\
         Subject:{subject}\r\n\
         MIME-Version:1.0\r\n\
         Content-Type:text/plain;charset=utf-8\r\n\r\n\
         {body}",
        to = to.join(","),
    );

    log::debug!("composed email: {}", &mail);

    Ok(mail)
}
