//! The endpoint for logging in with an email and password.
//!
//! The auth_cookie module handles the lower level session and cookie logic.

use std::sync::{Arc, Mutex};

use axum::{
    Json,
    extract::{FromRef, State},
    response::{IntoResponse, Response},
};
use axum_extra::extract::{PrivateCookieJar, cookie::Key};
use rusqlite::Connection;
use serde::{Deserialize, Serialize};
use serde_json::json;
use time::Duration;

use crate::{
    AppState, Error,
    auth_cookie::set_auth_cookie,
    user::{User, get_user_by_email},
};

/// The state needed to perform a login.
#[derive(Debug, Clone)]
pub struct LoginState {
    /// The key to be used for signing and encrypting private cookies.
    pub cookie_key: Key,
    /// The duration for which session cookies are valid.
    pub cookie_duration: Duration,
    /// The database connection for looking up users.
    pub db_connection: Arc<Mutex<Connection>>,
}

impl FromRef<AppState> for LoginState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            cookie_key: state.cookie_key.clone(),
            cookie_duration: state.cookie_duration,
            db_connection: state.db_connection.clone(),
        }
    }
}

// this impl tells `PrivateCookieJar` how to access the key from our state
impl FromRef<LoginState> for Key {
    fn from_ref(state: &LoginState) -> Self {
        state.cookie_key.clone()
    }
}

/// The raw data entered by the user in the log-in form.
///
/// The email and password are stored as plain strings. There is no need for validation here since
/// they will be compared against the email and password in the database, which have been verified.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogInData {
    /// Email entered during log-in.
    #[serde(default)]
    pub email: String,
    /// Password entered during log-in.
    #[serde(default)]
    pub password: String,
}

/// A route handler for log-in requests.
///
/// On success the session cookie is set and a payload echoing the user's
/// non-secret fields is returned.
///
/// # Errors
///
/// This function will return an error in a few situations.
/// - The email does not belong to a registered user.
/// - The password is not correct.
/// - An internal error occurred when verifying the password.
///
/// An unknown email and a wrong password produce the identical response so
/// that the endpoint does not reveal whether an account exists.
pub async fn log_in_endpoint(
    State(state): State<LoginState>,
    jar: PrivateCookieJar,
    Json(data): Json<LogInData>,
) -> Result<Response, Error> {
    let user: User = {
        let connection = state
            .db_connection
            .lock()
            .map_err(|_| Error::DatabaseLockError)?;

        match get_user_by_email(&data.email, &connection) {
            Ok(user) => user,
            Err(Error::NotFound) => return Err(Error::InvalidCredentials),
            Err(error) => {
                tracing::error!("Unhandled error while verifying credentials: {error}");
                return Err(error);
            }
        }
    };

    // Verify outside the database lock, bcrypt is deliberately slow.
    let is_password_valid = user.password_hash.verify(&data.password).map_err(|error| {
        tracing::error!("Unhandled error while verifying credentials: {error}");
        Error::HashingError(error.to_string())
    })?;

    if !is_password_valid {
        return Err(Error::InvalidCredentials);
    }

    let jar = set_auth_cookie(jar, user.id, state.cookie_duration)?;

    Ok((
        jar,
        Json(json!({
            "success": true,
            "user": {
                "user_id": user.id,
                "full_name": user.full_name,
                "email": user.email,
            },
        })),
    )
        .into_response())
}
