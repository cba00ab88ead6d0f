//! Validated scalar types shared across the Rounds workspace.
//!
//! Each type here enforces its invariant at construction, so downstream code
//! can hold a value without re-checking it. Deserialization goes through the
//! same constructors, which keeps invalid data out regardless of where a
//! value originated.

/// Errors that can occur when creating validated text types.
#[derive(Debug, thiserror::Error)]
pub enum TextError {
    /// The input text was empty or contained only whitespace
    #[error("Text cannot be empty")]
    Empty,
}

/// Errors that can occur when parsing an email address.
#[derive(Debug, thiserror::Error)]
pub enum EmailError {
    #[error("email address cannot be empty")]
    Empty,
    #[error("email address must contain exactly one '@' with text on both sides")]
    MissingAtSign,
    #[error("email address must not contain whitespace")]
    ContainsWhitespace,
}

/// Errors that can occur when constructing a severity score.
#[derive(Debug, thiserror::Error)]
pub enum SeverityError {
    /// The score fell outside the 0–10 scale.
    #[error("severity score must be between 0 and 10, got {0}")]
    OutOfRange(u8),
}

/// A string type that guarantees non-empty content.
///
/// Wraps a `String` and ensures it contains at least one non-whitespace
/// character. Input is trimmed of leading and trailing whitespace during
/// construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NonEmptyText(String);

impl NonEmptyText {
    /// Creates a new `NonEmptyText` from the given input.
    ///
    /// The input is trimmed; if the trimmed result is empty an error is
    /// returned.
    ///
    /// # Errors
    ///
    /// Returns `TextError::Empty` if the input is empty or whitespace-only.
    pub fn new(input: impl AsRef<str>) -> Result<Self, TextError> {
        let trimmed = input.as_ref().trim();
        if trimmed.is_empty() {
            return Err(TextError::Empty);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the inner string as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the wrapper and returns the inner `String`.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl std::fmt::Display for NonEmptyText {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for NonEmptyText {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl serde::Serialize for NonEmptyText {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> serde::Deserialize<'de> for NonEmptyText {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        NonEmptyText::new(&s).map_err(serde::de::Error::custom)
    }
}

/// A syntactically plausible email address.
///
/// This is deliberately a shallow check - one `@` with non-empty local and
/// domain parts and no whitespace. Deliverability is not this type's
/// business.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Parses an email address from the given input.
    ///
    /// The input is trimmed before validation.
    ///
    /// # Errors
    ///
    /// Returns an `EmailError` describing the first failed check.
    pub fn parse(input: impl AsRef<str>) -> Result<Self, EmailError> {
        let trimmed = input.as_ref().trim();
        if trimmed.is_empty() {
            return Err(EmailError::Empty);
        }
        if trimmed.chars().any(char::is_whitespace) {
            return Err(EmailError::ContainsWhitespace);
        }
        let mut parts = trimmed.splitn(2, '@');
        let local = parts.next().unwrap_or_default();
        let domain = parts.next().unwrap_or_default();
        if local.is_empty() || domain.is_empty() || domain.contains('@') {
            return Err(EmailError::MissingAtSign);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the address as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl serde::Serialize for EmailAddress {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> serde::Deserialize<'de> for EmailAddress {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        EmailAddress::parse(&s).map_err(serde::de::Error::custom)
    }
}

/// A patient acuity score on the fixed 0–10 scale.
///
/// Scores are derived from vital signs by the severity engine; this type
/// guarantees the bound holds everywhere a score travels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Severity(u8);

impl Severity {
    /// The lowest score on the scale.
    pub const MIN: Severity = Severity(0);
    /// The highest score on the scale.
    pub const MAX: Severity = Severity(10);

    /// Creates a severity from a raw score.
    ///
    /// # Errors
    ///
    /// Returns `SeverityError::OutOfRange` if `score` exceeds 10.
    pub fn new(score: u8) -> Result<Self, SeverityError> {
        if score > Self::MAX.0 {
            return Err(SeverityError::OutOfRange(score));
        }
        Ok(Self(score))
    }

    /// Creates a severity from accumulated points, capping at the scale
    /// maximum.
    pub fn saturating(points: u32) -> Self {
        Self(points.min(u32::from(Self::MAX.0)) as u8)
    }

    /// Returns the raw score.
    pub fn get(self) -> u8 {
        self.0
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl serde::Serialize for Severity {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_u8(self.0)
    }
}

impl<'de> serde::Deserialize<'de> for Severity {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let score = u8::deserialize(deserializer)?;
        Severity::new(score).map_err(serde::de::Error::custom)
    }
}
