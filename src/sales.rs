//! Monthly sales figures: the data model, queries, and the read endpoint.
//!
//! Rows are populated by an external import process; the API only reads them.

use std::sync::{Arc, Mutex};

use axum::{
    Extension, Json,
    extract::{FromRef, Query, State},
};
use rusqlite::Connection;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::{AppState, Error, user::UserID};

/// A single month's sales figure for a user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlySales {
    /// The calendar year the figure belongs to.
    pub year: i32,
    /// The month number, 1 through 12.
    pub month: u8,
    /// The month's display name, e.g. "June".
    pub month_name: String,
    /// The sales figure for the month.
    pub sales_amount: f64,
}

/// Create the monthly sales table.
///
/// # Errors
/// Returns an error if the SQL query failed.
pub(crate) fn create_monthly_sales_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute(
        "CREATE TABLE IF NOT EXISTS monthly_sales (
                user_id INTEGER NOT NULL,
                year INTEGER NOT NULL,
                month INTEGER NOT NULL,
                month_name TEXT NOT NULL,
                sales_amount REAL NOT NULL,
                UNIQUE(user_id, year, month),
                FOREIGN KEY(user_id) REFERENCES user(id) ON UPDATE CASCADE ON DELETE CASCADE
                )",
        (),
    )?;

    Ok(())
}

/// Get the monthly sales figures for `user_id` in `year`, ordered by month
/// ascending.
///
/// # Errors
/// This function will return an [Error::SqlError] if there is a SQL error.
pub(crate) fn monthly_sales_for_year(
    user_id: UserID,
    year: i32,
    connection: &Connection,
) -> Result<Vec<MonthlySales>, Error> {
    connection
        .prepare(
            "SELECT year, month, month_name, sales_amount FROM monthly_sales
             WHERE user_id = :user_id AND year = :year
             ORDER BY month ASC",
        )?
        .query_map(
            &[(":user_id", &user_id.as_i64()), (":year", &(year as i64))],
            |row| {
                Ok(MonthlySales {
                    year: row.get(0)?,
                    month: row.get(1)?,
                    month_name: row.get(2)?,
                    sales_amount: row.get(3)?,
                })
            },
        )?
        .map(|maybe_sales| maybe_sales.map_err(Error::SqlError))
        .collect()
}

/// The state needed to read monthly sales.
#[derive(Debug, Clone)]
pub struct MonthlySalesState {
    /// The database connection for reading sales figures.
    pub db_connection: Arc<Mutex<Connection>>,
}

impl FromRef<AppState> for MonthlySalesState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
        }
    }
}

/// The query parameters for the monthly sales endpoint.
#[derive(Debug, Deserialize)]
pub struct MonthlySalesParams {
    /// The calendar year to read. Defaults to the current year.
    pub year: Option<i32>,
}

/// A route handler for listing the logged-in user's monthly sales figures for
/// one calendar year.
pub async fn monthly_sales_endpoint(
    State(state): State<MonthlySalesState>,
    Extension(user_id): Extension<UserID>,
    Query(params): Query<MonthlySalesParams>,
) -> Result<Json<Vec<MonthlySales>>, Error> {
    let year = params
        .year
        .unwrap_or_else(|| OffsetDateTime::now_utc().year());

    let connection = state
        .db_connection
        .lock()
        .map_err(|_| Error::DatabaseLockError)?;

    monthly_sales_for_year(user_id, year, &connection).map(Json)
}

#[cfg(test)]
mod monthly_sales_tests {
    use std::sync::{Arc, Mutex};

    use axum::{Extension, Router, routing::get};
    use axum_test::TestServer;
    use rusqlite::{Connection, params};
    use time::OffsetDateTime;

    use crate::{
        endpoints,
        test_utils::{create_test_user, get_test_connection},
        user::UserID,
    };

    use super::{MonthlySales, MonthlySalesState, monthly_sales_endpoint};

    fn insert_sales_row(
        connection: &Connection,
        user_id: UserID,
        year: i32,
        month: u8,
        month_name: &str,
        sales_amount: f64,
    ) {
        connection
            .execute(
                "INSERT INTO monthly_sales (user_id, year, month, month_name, sales_amount)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
                params![user_id.as_i64(), year, month, month_name, sales_amount],
            )
            .expect("Could not insert monthly sales row");
    }

    fn get_test_server(state: MonthlySalesState, user_id: UserID) -> TestServer {
        let app = Router::new()
            .route(endpoints::MONTHLY_SALES, get(monthly_sales_endpoint))
            .layer(Extension(user_id))
            .with_state(state);

        TestServer::new(app)
    }

    #[tokio::test]
    async fn monthly_sales_are_ordered_by_month_ascending() {
        let conn = get_test_connection();
        let user = create_test_user(&conn);
        insert_sales_row(&conn, user.id, 2024, 3, "March", 300.0);
        insert_sales_row(&conn, user.id, 2024, 1, "January", 100.0);
        insert_sales_row(&conn, user.id, 2024, 2, "February", 200.0);
        let state = MonthlySalesState {
            db_connection: Arc::new(Mutex::new(conn)),
        };
        let server = get_test_server(state, user.id);

        let response = server
            .get(endpoints::MONTHLY_SALES)
            .add_query_param("year", 2024)
            .await;

        response.assert_status_ok();
        let sales = response.json::<Vec<MonthlySales>>();
        let months: Vec<u8> = sales.iter().map(|row| row.month).collect();
        assert_eq!(months, vec![1, 2, 3], "want months in ascending order");
    }

    #[tokio::test]
    async fn monthly_sales_filters_by_year_and_user() {
        let conn = get_test_connection();
        let user = create_test_user(&conn);
        let other_user = crate::test_utils::create_test_user_with_email(&conn, "other@example.com");
        insert_sales_row(&conn, user.id, 2024, 1, "January", 100.0);
        insert_sales_row(&conn, user.id, 2023, 1, "January", 999.0);
        insert_sales_row(&conn, other_user.id, 2024, 1, "January", 555.0);
        let state = MonthlySalesState {
            db_connection: Arc::new(Mutex::new(conn)),
        };
        let server = get_test_server(state, user.id);

        let response = server
            .get(endpoints::MONTHLY_SALES)
            .add_query_param("year", 2024)
            .await;

        response.assert_status_ok();
        let sales = response.json::<Vec<MonthlySales>>();
        assert_eq!(sales.len(), 1, "want 1 row, got {sales:?}");
        assert_eq!(sales[0].sales_amount, 100.0);
    }

    #[tokio::test]
    async fn monthly_sales_defaults_to_current_year() {
        let conn = get_test_connection();
        let user = create_test_user(&conn);
        let current_year = OffsetDateTime::now_utc().year();
        insert_sales_row(&conn, user.id, current_year, 1, "January", 100.0);
        insert_sales_row(&conn, user.id, current_year - 1, 1, "January", 999.0);
        let state = MonthlySalesState {
            db_connection: Arc::new(Mutex::new(conn)),
        };
        let server = get_test_server(state, user.id);

        let response = server.get(endpoints::MONTHLY_SALES).await;

        response.assert_status_ok();
        let sales = response.json::<Vec<MonthlySales>>();
        assert_eq!(sales.len(), 1, "want 1 row, got {sales:?}");
        assert_eq!(sales[0].year, current_year);
    }
}
