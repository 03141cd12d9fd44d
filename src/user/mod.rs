//! Users and the endpoints for managing them.

use std::sync::{Arc, Mutex, MutexGuard};

use axum::extract::FromRef;

use crate::{AppState, Error};

mod core;
mod create_endpoint;
mod delete_endpoint;
mod edit_endpoint;
mod get_endpoint;
mod list_endpoint;
mod store;

pub use self::core::{CreateUserRequest, UpdateUserRequest, User, UserId};
pub use create_endpoint::create_user_endpoint;
pub use delete_endpoint::delete_user_endpoint;
pub use edit_endpoint::edit_user_endpoint;
pub use get_endpoint::get_user_endpoint;
pub use list_endpoint::list_users_endpoint;
pub use store::UserStore;

#[cfg(test)]
pub(crate) use store::test_clock::ticking_clock;

/// The state needed by the user endpoints.
#[derive(Debug, Clone)]
pub struct UserStoreState {
    /// The store holding every user.
    pub user_store: Arc<Mutex<UserStore>>,
}

impl FromRef<AppState> for UserStoreState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            user_store: state.user_store.clone(),
        }
    }
}

impl UserStoreState {
    /// Lock the user store for the duration of a request.
    ///
    /// # Errors
    /// Returns [Error::StoreLockError] if the lock is poisoned.
    fn lock(&self) -> Result<MutexGuard<'_, UserStore>, Error> {
        self.user_store.lock().map_err(|error| {
            tracing::error!("could not acquire user store lock: {error}");
            Error::StoreLockError
        })
    }
}

#[cfg(test)]
pub(crate) fn get_test_state() -> UserStoreState {
    UserStoreState {
        user_store: Arc::new(Mutex::new(UserStore::with_clock(ticking_clock))),
    }
}
