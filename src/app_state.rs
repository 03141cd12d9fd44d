//! Implements a struct that holds the state of the REST server.

use std::sync::{Arc, Mutex};

use crate::user::UserStore;

/// The state of the REST server.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    /// The users shared by every request handler.
    pub user_store: Arc<Mutex<UserStore>>,
}

impl AppState {
    /// Create a new [AppState] that serves the users in `user_store`.
    pub fn new(user_store: UserStore) -> Self {
        Self {
            user_store: Arc::new(Mutex::new(user_store)),
        }
    }
}
