//! The endpoint for registering a new user account.

use std::sync::{Arc, Mutex};

use axum::{
    Json,
    extract::{FromRef, State},
    http::StatusCode,
};
use rusqlite::Connection;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use crate::{
    AppState, Error, PasswordHash,
    user::{create_user, get_user_by_email},
};

/// The state needed for creating a new user.
#[derive(Debug, Clone)]
pub struct RegistrationState {
    /// The database connection for managing users.
    pub db_connection: Arc<Mutex<Connection>>,
}

impl FromRef<AppState> for RegistrationState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
        }
    }
}

/// The raw data entered by the user in the registration form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterData {
    /// The user's display name.
    pub full_name: Option<String>,
    /// The email address to register. Must not already be in use.
    #[serde(default)]
    pub email: String,
    /// The plaintext password to hash and store.
    #[serde(default)]
    pub password: String,
}

/// A route handler for registering a new user.
///
/// The password is hashed with bcrypt before it is stored; the plaintext never
/// leaves this handler.
///
/// # Errors
///
/// This function will return an error in a few situations.
/// - The email or password is missing ([Error::InvalidInput]).
/// - The email is already registered ([Error::EmailTaken]).
/// - An internal error occurred while hashing the password or inserting the
///   user.
pub async fn register_endpoint(
    State(state): State<RegistrationState>,
    Json(data): Json<RegisterData>,
) -> Result<(StatusCode, Json<Value>), Error> {
    let email = data.email.trim();

    if email.is_empty() || data.password.is_empty() {
        return Err(Error::InvalidInput(
            "email and password are required".to_owned(),
        ));
    }

    {
        let connection = state
            .db_connection
            .lock()
            .map_err(|_| Error::DatabaseLockError)?;

        match get_user_by_email(email, &connection) {
            Ok(_) => return Err(Error::EmailTaken),
            Err(Error::NotFound) => {}
            Err(error) => return Err(error),
        }
    }

    // Hash outside the database lock, bcrypt is deliberately slow.
    let password_hash = PasswordHash::from_raw_password(&data.password, PasswordHash::DEFAULT_COST)?;

    let connection = state
        .db_connection
        .lock()
        .map_err(|_| Error::DatabaseLockError)?;

    // The unique constraint on email catches a concurrent registration that
    // slipped in between the lookup above and this insert.
    create_user(data.full_name.as_deref(), email, password_hash, &connection)?;

    Ok((StatusCode::CREATED, Json(json!({ "success": true }))))
}
