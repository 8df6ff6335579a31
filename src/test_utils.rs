//! Helpers shared by tests across the crate.

use rusqlite::Connection;
use time::Date;

use crate::{
    PasswordHash,
    db::initialize,
    transaction::{TransactionData, TransactionType},
    user::{User, create_user},
};

/// A bcrypt hash of the password "okon", precomputed so that tests do not pay
/// for a real hash per user.
pub(crate) const TEST_PASSWORD_HASH: &str =
    "$2b$12$Gwf0uvxH3L7JLfo0CC/NCOoijK2vQ/wbgP.LeNup8vj6gg31IiFkm";

/// Open an in-memory SQLite database with all application tables created.
pub(crate) fn get_test_connection() -> Connection {
    let conn = Connection::open_in_memory().expect("Could not create in-memory SQLite database");
    initialize(&conn).expect("Could not initialize database");

    conn
}

/// Insert a user with a fixed email and the [TEST_PASSWORD_HASH] password.
pub(crate) fn create_test_user(connection: &Connection) -> User {
    create_test_user_with_email(connection, "test@example.com")
}

/// Insert a user with the given email and the [TEST_PASSWORD_HASH] password.
pub(crate) fn create_test_user_with_email(connection: &Connection, email: &str) -> User {
    create_user(
        Some("Test Owner"),
        email,
        PasswordHash::new_unchecked(TEST_PASSWORD_HASH),
        connection,
    )
    .expect("Could not create test user")
}

/// A transaction payload with the required fields set and empty text fields.
pub(crate) fn new_transaction_data(
    amount: f64,
    transaction_type: TransactionType,
    date: Date,
) -> TransactionData {
    TransactionData {
        date: Some(date),
        description: Some(String::new()),
        amount: Some(amount),
        transaction_type: Some(transaction_type),
        category: Some(String::new()),
        notes: Some(String::new()),
    }
}
