//! Defines the endpoint for replacing an existing transaction.

use std::sync::{Arc, Mutex};

use axum::{
    Extension, Json,
    extract::{FromRef, Path, State},
};
use rusqlite::Connection;
use serde_json::{Value, json};

use crate::{
    AppState, Error,
    transaction::{TransactionData, TransactionId, core::update_transaction},
    user::UserID,
};

/// The state needed to update a transaction.
#[derive(Debug, Clone)]
pub struct UpdateTransactionState {
    /// The database connection for managing transactions.
    pub db_connection: Arc<Mutex<Connection>>,
}

impl FromRef<AppState> for UpdateTransactionState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
        }
    }
}

/// A route handler for replacing every field of a transaction.
///
/// Responds with 404 if the transaction does not exist or belongs to another
/// user; the two cases are indistinguishable to the caller.
pub async fn update_transaction_endpoint(
    State(state): State<UpdateTransactionState>,
    Extension(user_id): Extension<UserID>,
    Path(transaction_id): Path<TransactionId>,
    Json(data): Json<TransactionData>,
) -> Result<Json<Value>, Error> {
    let connection = state
        .db_connection
        .lock()
        .map_err(|_| Error::DatabaseLockError)?;

    update_transaction(transaction_id, user_id, data, &connection)?;

    Ok(Json(json!({ "success": true })))
}
