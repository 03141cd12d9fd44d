//! The in-memory store that owns every [User] and allocates their IDs.

use time::OffsetDateTime;

use crate::{
    Error,
    user::core::{CreateUserRequest, UpdateUserRequest, User, UserId, non_blank},
};

/// A function returning the current time.
pub type Clock = fn() -> OffsetDateTime;

/// Holds the users in insertion order along with the next ID to hand out.
///
/// IDs start at 1 and are never reused, even after the user holding the ID
/// has been deleted.
#[derive(Debug, Clone)]
pub struct UserStore {
    users: Vec<User>,
    next_id: i64,
    clock: Clock,
}

impl Default for UserStore {
    fn default() -> Self {
        Self::new()
    }
}

impl UserStore {
    /// Create an empty store that timestamps users with the current UTC time.
    pub fn new() -> Self {
        Self::with_clock(OffsetDateTime::now_utc)
    }

    /// Create an empty store that reads the time from `clock`.
    pub fn with_clock(clock: Clock) -> Self {
        Self {
            users: Vec::new(),
            next_id: 1,
            clock,
        }
    }

    /// All users in the order they were created.
    pub fn list(&self) -> &[User] {
        &self.users
    }

    /// Get the user with the ID `id`.
    ///
    /// # Errors
    /// Returns [Error::UserNotFound] if there is no user with the ID `id`.
    pub fn get(&self, id: UserId) -> Result<&User, Error> {
        self.users
            .iter()
            .find(|user| user.id() == id)
            .ok_or(Error::UserNotFound(id))
    }

    /// Create a new user from `request` and return a copy of it.
    ///
    /// # Errors
    /// This function will return an error if:
    /// - the name or email is missing or blank ([Error::MissingRequiredFields]),
    /// - another user already has the email ([Error::DuplicateEmail]).
    pub fn create(&mut self, request: CreateUserRequest) -> Result<User, Error> {
        let (Some(name), Some(email)) = (non_blank(request.name), non_blank(request.email)) else {
            return Err(Error::MissingRequiredFields);
        };

        if self.email_in_use(&email, None) {
            return Err(Error::DuplicateEmail);
        }

        let id = UserId::new(self.next_id);
        self.next_id += 1;

        let user = User::new(id, name, email, request.phone_number, (self.clock)());
        self.users.push(user.clone());
        tracing::debug!("created user {id}");

        Ok(user)
    }

    /// Apply `request` to the user with the ID `id` and return a copy of the
    /// updated user.
    ///
    /// Blank or absent names and emails leave the stored values unchanged. A
    /// phone number is written whenever one is given, even if it is empty.
    /// The update time is refreshed even when no field changes.
    ///
    /// # Errors
    /// This function will return an error if:
    /// - there is no user with the ID `id` ([Error::UserNotFound]),
    /// - a different user already has the new email ([Error::DuplicateEmail]).
    ///
    /// Nothing is modified when an error is returned.
    pub fn update(&mut self, id: UserId, request: UpdateUserRequest) -> Result<User, Error> {
        let index = self.position(id)?;
        let name = non_blank(request.name);
        let email = non_blank(request.email);

        if email
            .as_deref()
            .is_some_and(|email| self.email_in_use(email, Some(id)))
        {
            return Err(Error::DuplicateEmail);
        }

        let now = (self.clock)();
        let user = &mut self.users[index];

        if let Some(name) = name {
            user.set_name(name);
        }

        if let Some(email) = email {
            user.set_email(email);
        }

        if let Some(phone_number) = request.phone_number {
            user.set_phone_number(phone_number);
        }

        user.touch(now);
        tracing::debug!("updated user {id}");

        Ok(user.clone())
    }

    /// Remove the user with the ID `id`.
    ///
    /// # Errors
    /// Returns [Error::UserNotFound] if there is no user with the ID `id`.
    pub fn delete(&mut self, id: UserId) -> Result<(), Error> {
        let index = self.position(id)?;
        self.users.remove(index);
        tracing::debug!("deleted user {id}");

        Ok(())
    }

    fn position(&self, id: UserId) -> Result<usize, Error> {
        self.users
            .iter()
            .position(|user| user.id() == id)
            .ok_or(Error::UserNotFound(id))
    }

    /// Whether a user other than `except` has the email `email`.
    fn email_in_use(&self, email: &str, except: Option<UserId>) -> bool {
        self.users
            .iter()
            .any(|user| user.email() == email && Some(user.id()) != except)
    }
}
