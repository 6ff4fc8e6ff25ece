//! Shipping details collected during checkout.

use core::fmt;

use serde::{Deserialize, Serialize};

use super::email::{Email, EmailError};

/// Errors returned by [`ShippingInfo::validate`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ShippingError {
    /// One or more required fields are blank.
    #[error("missing required fields: {}", join_labels(.0))]
    MissingFields(Vec<ShippingField>),
    /// The email field is filled in but malformed.
    #[error("invalid email: {0}")]
    InvalidEmail(#[from] EmailError),
}

impl ShippingError {
    /// Short title for the user-visible alert.
    #[must_use]
    pub const fn title(&self) -> &'static str {
        match self {
            Self::MissingFields(_) => "Missing Information",
            Self::InvalidEmail(_) => "Invalid Email",
        }
    }

    /// Body text for the user-visible alert.
    #[must_use]
    pub const fn message(&self) -> &'static str {
        match self {
            Self::MissingFields(_) => "Please fill in all required fields",
            Self::InvalidEmail(_) => "Please enter a valid email address",
        }
    }
}

fn join_labels(fields: &[ShippingField]) -> String {
    fields
        .iter()
        .map(|f| f.label())
        .collect::<Vec<_>>()
        .join(", ")
}

/// A single field of the shipping form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShippingField {
    Name,
    Email,
    Phone,
    Address,
    City,
    State,
    ZipCode,
}

impl ShippingField {
    /// All fields in form order.
    pub const ALL: [Self; 7] = [
        Self::Name,
        Self::Email,
        Self::Phone,
        Self::Address,
        Self::City,
        Self::State,
        Self::ZipCode,
    ];

    /// Human-readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Name => "Full Name",
            Self::Email => "Email",
            Self::Phone => "Phone",
            Self::Address => "Address",
            Self::City => "City",
            Self::State => "State",
            Self::ZipCode => "ZIP Code",
        }
    }
}

impl fmt::Display for ShippingField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// In-progress shipping form contents.
///
/// Every field is a raw string so the form can hold partial input; call
/// [`ShippingInfo::validate`] before acting on it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShippingInfo {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
}

impl ShippingInfo {
    /// Read a field by name.
    #[must_use]
    pub fn field(&self, field: ShippingField) -> &str {
        match field {
            ShippingField::Name => &self.name,
            ShippingField::Email => &self.email,
            ShippingField::Phone => &self.phone,
            ShippingField::Address => &self.address,
            ShippingField::City => &self.city,
            ShippingField::State => &self.state,
            ShippingField::ZipCode => &self.zip_code,
        }
    }

    /// Overwrite a field by name.
    pub fn set(&mut self, field: ShippingField, value: impl Into<String>) {
        let slot = match field {
            ShippingField::Name => &mut self.name,
            ShippingField::Email => &mut self.email,
            ShippingField::Phone => &mut self.phone,
            ShippingField::Address => &mut self.address,
            ShippingField::City => &mut self.city,
            ShippingField::State => &mut self.state,
            ShippingField::ZipCode => &mut self.zip_code,
        };
        *slot = value.into();
    }

    /// Fields that are blank (empty or whitespace only), in form order.
    #[must_use]
    pub fn missing_fields(&self) -> Vec<ShippingField> {
        ShippingField::ALL
            .into_iter()
            .filter(|f| self.field(*f).trim().is_empty())
            .collect()
    }

    /// True when nothing has been entered yet.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        ShippingField::ALL
            .into_iter()
            .all(|f| self.field(f).is_empty())
    }

    /// Validate the form and return the parsed email.
    ///
    /// Missing fields are reported before email format problems.
    ///
    /// # Errors
    ///
    /// Returns [`ShippingError::MissingFields`] if any field is blank, or
    /// [`ShippingError::InvalidEmail`] if the email is malformed.
    pub fn validate(&self) -> Result<Email, ShippingError> {
        let missing = self.missing_fields();
        if !missing.is_empty() {
            return Err(ShippingError::MissingFields(missing));
        }
        Ok(Email::parse(&self.email)?)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn complete() -> ShippingInfo {
        ShippingInfo {
            name: "Anjali Sharma".to_string(),
            email: "anjali.sharma@example.com".to_string(),
            phone: "+91 98765 43210".to_string(),
            address: "123 Park Street".to_string(),
            city: "Mumbai".to_string(),
            state: "Maharashtra".to_string(),
            zip_code: "400001".to_string(),
        }
    }

    #[test]
    fn test_validate_complete() {
        let email = complete().validate().unwrap();
        assert_eq!(email.as_str(), "anjali.sharma@example.com");
    }

    #[test]
    fn test_each_missing_field_is_reported() {
        for field in ShippingField::ALL {
            let mut info = complete();
            info.set(field, "");
            assert_eq!(
                info.validate(),
                Err(ShippingError::MissingFields(vec![field])),
                "blank {field} should fail"
            );
        }
    }

    #[test]
    fn test_whitespace_only_counts_as_missing() {
        let mut info = complete();
        info.set(ShippingField::City, "   ");
        assert_eq!(
            info.validate(),
            Err(ShippingError::MissingFields(vec![ShippingField::City]))
        );
    }

    #[test]
    fn test_missing_fields_reported_before_email() {
        let mut info = complete();
        info.set(ShippingField::Email, "not-an-email");
        info.set(ShippingField::Phone, "");
        assert!(matches!(
            info.validate(),
            Err(ShippingError::MissingFields(_))
        ));
    }

    #[test]
    fn test_invalid_email() {
        for bad in ["user", "user@", "@example.com", "user@example", "a b@c.d"] {
            let mut info = complete();
            info.set(ShippingField::Email, bad);
            let err = info.validate().unwrap_err();
            assert!(
                matches!(err, ShippingError::InvalidEmail(_)),
                "{bad} should be rejected"
            );
            assert_eq!(err.title(), "Invalid Email");
        }
    }

    #[test]
    fn test_alert_text() {
        let err = ShippingInfo::default().validate().unwrap_err();
        assert_eq!(err.title(), "Missing Information");
        assert_eq!(err.message(), "Please fill in all required fields");
        assert_eq!(
            err.to_string(),
            "missing required fields: Full Name, Email, Phone, Address, City, State, ZIP Code"
        );
    }

    #[test]
    fn test_is_blank() {
        assert!(ShippingInfo::default().is_blank());
        assert!(!complete().is_blank());
    }
}
