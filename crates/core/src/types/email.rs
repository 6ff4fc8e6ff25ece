//! Contact email captured on the shipping form.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Why a contact email was rejected.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum EmailError {
    #[error("email address is blank")]
    Empty,
    #[error("email address has a space in it")]
    ContainsWhitespace,
    /// Zero or several `@` separators.
    #[error("email address needs exactly one '@'")]
    BadSeparator,
    #[error("email address has nothing before the '@'")]
    NoMailbox,
    /// Host is missing, or has no dot between two non-empty labels.
    #[error("email address needs a host like example.com after the '@'")]
    BadHost,
}

/// A customer contact address in `mailbox@host.tld` form.
///
/// Order confirmations and payment billing details carry this type, so a
/// value that exists has already passed the checkout form's email check.
///
/// ```
/// use dhanvantari_core::Email;
///
/// assert!(Email::parse("anjali.sharma@example.co.in").is_ok());
/// assert!(Email::parse("anjali@localhost").is_err());
/// assert!(Email::parse("anjali sharma@example.com").is_err());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(try_from = "String", into = "String")]
pub struct Email(String);

impl Email {
    /// Validate `raw` as typed into the form. No trimming is applied and no
    /// length cap beyond the shape check.
    ///
    /// # Errors
    ///
    /// Returns the first [`EmailError`] the input trips over.
    pub fn parse(raw: &str) -> Result<Self, EmailError> {
        if raw.is_empty() {
            return Err(EmailError::Empty);
        }
        if raw.contains(char::is_whitespace) {
            return Err(EmailError::ContainsWhitespace);
        }

        let mut halves = raw.split('@');
        let (Some(mailbox), Some(host), None) = (halves.next(), halves.next(), halves.next())
        else {
            return Err(EmailError::BadSeparator);
        };

        if mailbox.is_empty() {
            return Err(EmailError::NoMailbox);
        }
        if !host_has_tld(host) {
            return Err(EmailError::BadHost);
        }

        Ok(Self(raw.to_owned()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The part after the `@`.
    #[must_use]
    pub fn host(&self) -> &str {
        self.0.rsplit_once('@').map_or("", |(_, host)| host)
    }
}

/// True when some `.` in `host` has at least one character on each side.
fn host_has_tld(host: &str) -> bool {
    let last = host.len().saturating_sub(1);
    host.match_indices('.').any(|(at, _)| at > 0 && at < last)
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for Email {
    type Err = EmailError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Self::parse(raw)
    }
}

impl TryFrom<String> for Email {
    type Error = EmailError;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        Self::parse(&raw)
    }
}

impl From<Email> for String {
    fn from(email: Email) -> Self {
        email.0
    }
}
