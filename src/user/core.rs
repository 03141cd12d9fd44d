//! The user record and the request payloads used to create and update it.

use std::fmt::Display;

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// A newtype wrapper for integer user IDs.
///
/// This helps disambiguate user IDs from other integers, e.g., path
/// parameters and counters, leading to better compile time errors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(i64);

impl UserId {
    /// Create a new user ID.
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    /// Cast the user ID to a 64 bit integer.
    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// A user record.
///
/// Users are only created by the [UserStore](crate::user::UserStore), which
/// assigns the ID and timestamps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    id: UserId,
    name: String,
    email: String,
    phone_number: Option<String>,
    #[serde(with = "time::serde::rfc3339")]
    created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    updated_at: OffsetDateTime,
}

impl User {
    pub(crate) fn new(
        id: UserId,
        name: String,
        email: String,
        phone_number: Option<String>,
        now: OffsetDateTime,
    ) -> Self {
        Self {
            id,
            name,
            email,
            phone_number,
            created_at: now,
            updated_at: now,
        }
    }

    /// The user's ID.
    pub fn id(&self) -> UserId {
        self.id
    }

    /// The user's full name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The user's email address, unique among all users.
    pub fn email(&self) -> &str {
        &self.email
    }

    /// The user's phone number, if one was given.
    pub fn phone_number(&self) -> Option<&str> {
        self.phone_number.as_deref()
    }

    /// When the user was created.
    pub fn created_at(&self) -> OffsetDateTime {
        self.created_at
    }

    /// When the user was last updated.
    pub fn updated_at(&self) -> OffsetDateTime {
        self.updated_at
    }

    pub(crate) fn set_name(&mut self, name: String) {
        self.name = name;
    }

    pub(crate) fn set_email(&mut self, email: String) {
        self.email = email;
    }

    pub(crate) fn set_phone_number(&mut self, phone_number: String) {
        self.phone_number = Some(phone_number);
    }

    /// Refresh the update time, never moving it before the creation time.
    pub(crate) fn touch(&mut self, now: OffsetDateTime) {
        self.updated_at = now.max(self.created_at);
    }
}

/// The payload for creating a user.
///
/// `name` and `email` are optional here so that a missing field is reported
/// the same way as a blank one.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    /// The user's full name.
    #[serde(default)]
    pub name: Option<String>,
    /// The user's email address.
    #[serde(default)]
    pub email: Option<String>,
    /// The user's phone number (optional).
    #[serde(default)]
    pub phone_number: Option<String>,
}

/// The payload for updating a user.
///
/// Each field is either absent (`None`, also used for JSON `null`), present
/// but empty (`Some("")`) or present with a value. Blank names and emails
/// are treated as absent, whereas an empty phone number replaces the stored
/// one.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserRequest {
    /// The new full name.
    #[serde(default)]
    pub name: Option<String>,
    /// The new email address.
    #[serde(default)]
    pub email: Option<String>,
    /// The new phone number.
    #[serde(default)]
    pub phone_number: Option<String>,
}

/// Returns the string if it contains at least one non-whitespace character.
pub(crate) fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|value| !value.trim().is_empty())
}
