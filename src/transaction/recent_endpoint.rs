//! Defines the endpoint for listing a user's most recent transactions.

use std::sync::{Arc, Mutex};

use axum::{
    Extension, Json,
    extract::{FromRef, Query, State},
};
use rusqlite::Connection;
use serde::Deserialize;

use crate::{
    AppState, Error,
    transaction::{Transaction, TransactionFilter, core::query_transactions},
    user::UserID,
};

/// How many transactions to return when the client does not say.
const DEFAULT_RECENT_LIMIT: i64 = 10;

/// The state needed to list recent transactions.
#[derive(Debug, Clone)]
pub struct RecentTransactionsState {
    /// The database connection for managing transactions.
    pub db_connection: Arc<Mutex<Connection>>,
}

impl FromRef<AppState> for RecentTransactionsState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
        }
    }
}

/// The query parameters for the recent transactions endpoint.
#[derive(Debug, Deserialize)]
pub struct RecentTransactionsParams {
    /// The maximum number of transactions to return. Defaults to 10.
    pub limit: Option<i64>,
}

/// A route handler for listing the logged-in user's most recent transactions,
/// ordered by transaction date descending.
pub async fn recent_transactions_endpoint(
    State(state): State<RecentTransactionsState>,
    Extension(user_id): Extension<UserID>,
    Query(params): Query<RecentTransactionsParams>,
) -> Result<Json<Vec<Transaction>>, Error> {
    let filter = TransactionFilter {
        limit: Some(params.limit.unwrap_or(DEFAULT_RECENT_LIMIT)),
        ..Default::default()
    };

    let connection = state
        .db_connection
        .lock()
        .map_err(|_| Error::DatabaseLockError)?;

    query_transactions(user_id, &filter, &connection).map(Json)
}
