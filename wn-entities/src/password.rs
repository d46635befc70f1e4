use std::str::FromStr;

use pwhash::bcrypt;
use thiserror::Error;

const MIN_PLAIN_TEXT_LEN: usize = 6;

/// A bcrypt-hashed password.
///
/// The clear text never leaves [`FromStr`]; only the hash is stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Password(String);

impl Password {
    /// Wrap an already hashed value, e.g. loaded from the database.
    pub const fn from_hash(hash: String) -> Self {
        Self(hash)
    }

    pub fn verify(&self, plain_text: &str) -> bool {
        bcrypt::verify(plain_text, &self.0)
    }
}

impl AsRef<str> for Password {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<Password> for String {
    fn from(from: Password) -> Self {
        from.0
    }
}

#[derive(Debug, Error)]
#[error("Invalid password")]
pub struct ParseError;

impl FromStr for Password {
    type Err = ParseError;
    fn from_str(plain_text: &str) -> Result<Self, Self::Err> {
        if plain_text.len() < MIN_PLAIN_TEXT_LEN {
            return Err(ParseError);
        }
        let hash = bcrypt::hash(plain_text).map_err(|_| ParseError)?;
        Ok(Self(hash))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_and_verify() {
        let password = "secret".parse::<Password>().unwrap();
        assert_ne!("secret", password.as_ref());
        assert!(password.verify("secret"));
        assert!(!password.verify("wrong"));
    }

    #[test]
    fn reject_short_passwords() {
        assert!("12345".parse::<Password>().is_err());
        assert!("123456".parse::<Password>().is_ok());
    }
}
