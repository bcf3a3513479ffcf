use std::{fmt, str::FromStr};

use pwhash::bcrypt;
use thiserror::Error;

/// A bcrypt hashed password.
///
/// The plain text is never stored. Parsing a plain text password
/// hashes it, [`Password::from_hash`] restores a stored digest.
#[derive(Clone, PartialEq, Eq)]
pub struct Password(String);

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("The password must not be empty")]
    Empty,
    #[error("The password is too long")]
    TooLong,
    #[error("The password could not be hashed")]
    Hash,
}

// bcrypt ignores everything beyond 72 bytes
const MAX_LEN: usize = 72;

impl Password {
    pub fn from_hash(hash: String) -> Self {
        Self(hash)
    }

    pub fn as_hash(&self) -> &str {
        &self.0
    }

    /// Never fails: a malformed digest simply doesn't match.
    pub fn verify(&self, plain: &str) -> bool {
        bcrypt::verify(plain, &self.0)
    }
}

impl FromStr for Password {
    type Err = ParseError;
    fn from_str(plain: &str) -> Result<Self, Self::Err> {
        if plain.is_empty() {
            return Err(ParseError::Empty);
        }
        if plain.len() > MAX_LEN {
            return Err(ParseError::TooLong);
        }
        bcrypt::hash(plain).map(Self).map_err(|_| ParseError::Hash)
    }
}

impl From<Password> for String {
    fn from(from: Password) -> Self {
        from.0
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Password(***)")
    }
}
