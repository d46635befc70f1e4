use fast_chemail::is_valid_email;

use crate::entities::*;

pub fn email(addr: &EmailAddress) -> bool {
    is_valid_email(addr.as_str())
}

const MIN_TITLE_LEN: usize = 3;

pub fn place_title(title: &str) -> bool {
    title.trim().len() >= MIN_TITLE_LEN
}

pub fn display_name(name: &str) -> bool {
    name.trim().len() >= 2
}
