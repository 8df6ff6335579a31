//! Defines functions for handling user sessions with private cookies.

use axum_extra::extract::{
    PrivateCookieJar,
    cookie::{Cookie, SameSite},
};
use time::{Duration, OffsetDateTime};

use crate::{Error, session_token::SessionToken, user::UserID};

/// The name of the cookie holding the encrypted session token.
pub(crate) const COOKIE_TOKEN: &str = "token";

/// How long a session stays valid after the last authenticated request.
pub(crate) const DEFAULT_COOKIE_DURATION: Duration = Duration::hours(1);

/// Add an auth cookie to the cookie jar, indicating that a user is logged in and authenticated.
///
/// Sets the expiry of the session to `duration` from the current time.
/// You can use [DEFAULT_COOKIE_DURATION] for the default duration.
///
/// Returns the cookie jar with the cookie added.
///
/// # Errors
///
/// Returns an [Error::TokenFormat] if the session token cannot be serialized.
pub(crate) fn set_auth_cookie(
    jar: PrivateCookieJar,
    user_id: UserID,
    duration: Duration,
) -> Result<PrivateCookieJar, Error> {
    let expires_at = OffsetDateTime::now_utc() + duration;
    let token = SessionToken {
        user_id,
        expires_at,
    };
    let token_string =
        serde_json::to_string(&token).map_err(|error| Error::TokenFormat(error.to_string()))?;

    Ok(jar.add(
        Cookie::build((COOKIE_TOKEN, token_string))
            .expires(expires_at)
            .http_only(true)
            .same_site(SameSite::Strict)
            .secure(true),
    ))
}

/// Set the auth cookie to an invalid value and set its max age to zero, which should delete the cookie on the client side.
pub(crate) fn invalidate_auth_cookie(jar: PrivateCookieJar) -> PrivateCookieJar {
    jar.add(
        Cookie::build((COOKIE_TOKEN, "deleted"))
            .expires(OffsetDateTime::UNIX_EPOCH)
            .max_age(Duration::ZERO)
            .http_only(true)
            .same_site(SameSite::Strict)
            .secure(true),
    )
}

/// Read and validate the session token from the cookie jar.
///
/// # Errors
///
/// Returns [Error::Unauthenticated] if the cookie is missing, cannot be
/// decoded, or the session has expired.
pub(crate) fn get_session_token(jar: &PrivateCookieJar) -> Result<SessionToken, Error> {
    let cookie = jar.get(COOKIE_TOKEN).ok_or(Error::Unauthenticated)?;
    let token: SessionToken =
        serde_json::from_str(cookie.value_trimmed()).map_err(|_| Error::Unauthenticated)?;

    if token.is_expired() {
        return Err(Error::Unauthenticated);
    }

    Ok(token)
}

/// Push the session expiry out to the latest of UTC now plus `duration` and
/// the session's current expiry.
///
/// # Errors
///
/// The cookie jar is not modified if an error is returned.
///
/// Returns:
/// - [Error::Unauthenticated] if there is no valid session in the cookie jar.
/// - [Error::TokenFormat] if the extended token cannot be serialized.
pub(crate) fn extend_session_if_needed(
    jar: PrivateCookieJar,
    duration: Duration,
) -> Result<PrivateCookieJar, Error> {
    let token = get_session_token(&jar)?;
    let new_expiry = OffsetDateTime::now_utc()
        .checked_add(duration)
        .ok_or_else(|| Error::TokenFormat("session expiry overflowed".to_owned()))?;

    if new_expiry <= token.expires_at {
        return Ok(jar);
    }

    set_auth_cookie(jar, token.user_id, duration)
}
