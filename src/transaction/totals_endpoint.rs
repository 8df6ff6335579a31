//! Defines the endpoint for aggregate transaction totals over a trailing
//! window of days.

use std::sync::{Arc, Mutex};

use axum::{
    Extension, Json,
    extract::{FromRef, Query, State},
};
use rusqlite::Connection;
use serde::Deserialize;

use crate::{
    AppState, Error,
    transaction::{TransactionTotals, core::transaction_totals},
    user::UserID,
};

/// The window to aggregate over when the client does not say.
const DEFAULT_TOTALS_WINDOW_DAYS: i64 = 30;

/// The state needed to compute transaction totals.
#[derive(Debug, Clone)]
pub struct TransactionTotalsState {
    /// The database connection for managing transactions.
    pub db_connection: Arc<Mutex<Connection>>,
}

impl FromRef<AppState> for TransactionTotalsState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
        }
    }
}

/// The query parameters for the totals endpoint.
#[derive(Debug, Deserialize)]
pub struct TransactionTotalsParams {
    /// The size of the trailing window in days. Defaults to 30.
    pub days: Option<i64>,
}

/// A route handler for the logged-in user's income, expense, and net-profit
/// totals over the trailing window.
///
/// A window with no transactions produces zero totals rather than an error.
pub async fn transaction_totals_endpoint(
    State(state): State<TransactionTotalsState>,
    Extension(user_id): Extension<UserID>,
    Query(params): Query<TransactionTotalsParams>,
) -> Result<Json<TransactionTotals>, Error> {
    let days = params.days.unwrap_or(DEFAULT_TOTALS_WINDOW_DAYS);

    let connection = state
        .db_connection
        .lock()
        .map_err(|_| Error::DatabaseLockError)?;

    transaction_totals(user_id, days, &connection).map(Json)
}

#[cfg(test)]
mod transaction_totals_tests {
    use std::sync::{Arc, Mutex};

    use axum::{Extension, Router, routing::get};
    use axum_test::TestServer;
    use time::{Duration, OffsetDateTime};

    use crate::{
        endpoints,
        test_utils::{create_test_user, get_test_connection, new_transaction_data},
        transaction::{TransactionTotals, TransactionType, core::create_transaction},
        user::UserID,
    };

    use super::{TransactionTotalsState, transaction_totals_endpoint};

    fn get_test_server(state: TransactionTotalsState, user_id: UserID) -> TestServer {
        let app = Router::new()
            .route(
                endpoints::TRANSACTION_TOTALS,
                get(transaction_totals_endpoint),
            )
            .layer(Extension(user_id))
            .with_state(state);

        TestServer::new(app)
    }

    #[tokio::test]
    async fn totals_with_no_transactions_returns_zeros() {
        let conn = get_test_connection();
        let user = create_test_user(&conn);
        let state = TransactionTotalsState {
            db_connection: Arc::new(Mutex::new(conn)),
        };
        let server = get_test_server(state, user.id);

        let response = server.get(endpoints::TRANSACTION_TOTALS).await;

        response.assert_status_ok();
        let totals = response.json::<TransactionTotals>();
        assert_eq!(
            totals,
            TransactionTotals {
                total_sales: 0.0,
                total_expenses: 0.0,
                net_profit: 0.0,
            }
        );
    }

    #[tokio::test]
    async fn totals_sum_income_and_expenses_in_window() {
        let conn = get_test_connection();
        let user = create_test_user(&conn);
        let today = OffsetDateTime::now_utc().date();
        create_transaction(
            user.id,
            new_transaction_data(200.0, TransactionType::Income, today),
            &conn,
        )
        .unwrap();
        create_transaction(
            user.id,
            new_transaction_data(50.0, TransactionType::Expense, today),
            &conn,
        )
        .unwrap();
        let state = TransactionTotalsState {
            db_connection: Arc::new(Mutex::new(conn)),
        };
        let server = get_test_server(state, user.id);

        let response = server.get(endpoints::TRANSACTION_TOTALS).await;

        response.assert_status_ok();
        let totals = response.json::<TransactionTotals>();
        assert_eq!(
            totals,
            TransactionTotals {
                total_sales: 200.0,
                total_expenses: 50.0,
                net_profit: 150.0,
            }
        );
    }

    #[tokio::test]
    async fn totals_honour_the_days_parameter() {
        let conn = get_test_connection();
        let user = create_test_user(&conn);
        let today = OffsetDateTime::now_utc().date();
        create_transaction(
            user.id,
            new_transaction_data(200.0, TransactionType::Income, today),
            &conn,
        )
        .unwrap();
        create_transaction(
            user.id,
            new_transaction_data(
                75.0,
                TransactionType::Income,
                today.checked_sub(Duration::days(10)).unwrap(),
            ),
            &conn,
        )
        .unwrap();
        let state = TransactionTotalsState {
            db_connection: Arc::new(Mutex::new(conn)),
        };
        let server = get_test_server(state, user.id);

        let response = server
            .get(endpoints::TRANSACTION_TOTALS)
            .add_query_param("days", 5)
            .await;

        response.assert_status_ok();
        let totals = response.json::<TransactionTotals>();
        assert_eq!(totals.total_sales, 200.0);
    }
}
