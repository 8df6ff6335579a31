//! Business metrics snapshots: the data model, queries, and the endpoints for
//! reading the latest snapshot and recording a new one.

use std::sync::{Arc, Mutex};

use axum::{
    Extension, Json,
    extract::{FromRef, State},
};
use rusqlite::{Connection, params};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use time::{Date, OffsetDateTime};

use crate::{AppState, Error, user::UserID};

/// A snapshot of topline business metrics on a given date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BusinessMetrics {
    /// The date the snapshot describes.
    pub metric_date: Date,
    /// Total sales on the snapshot date.
    pub total_sales: f64,
    /// Total expenses on the snapshot date.
    pub total_expenses: f64,
    /// Net profit on the snapshot date.
    pub net_profit: f64,
}

/// The fields accepted when recording a metrics snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BusinessMetricsData {
    /// The date the snapshot describes. Defaults to today.
    pub metric_date: Option<Date>,
    /// Total sales on the snapshot date. Defaults to zero.
    pub total_sales: Option<f64>,
    /// Total expenses on the snapshot date. Defaults to zero.
    pub total_expenses: Option<f64>,
    /// Net profit on the snapshot date. Defaults to zero.
    pub net_profit: Option<f64>,
}

/// Create the business metrics table.
///
/// # Errors
/// Returns an error if the SQL query failed.
pub(crate) fn create_business_metrics_table(
    connection: &Connection,
) -> Result<(), rusqlite::Error> {
    connection.execute(
        "CREATE TABLE IF NOT EXISTS business_metrics (
                user_id INTEGER NOT NULL,
                metric_date TEXT NOT NULL,
                total_sales REAL NOT NULL DEFAULT 0,
                total_expenses REAL NOT NULL DEFAULT 0,
                net_profit REAL NOT NULL DEFAULT 0,
                UNIQUE(user_id, metric_date),
                FOREIGN KEY(user_id) REFERENCES user(id) ON UPDATE CASCADE ON DELETE CASCADE
                )",
        (),
    )?;

    Ok(())
}

/// Get the most recent metrics snapshot for `user_id` by metric date.
///
/// Returns `None` when the user has no snapshots yet.
///
/// # Errors
/// This function will return an [Error::SqlError] if there is a SQL error.
pub(crate) fn latest_metrics(
    user_id: UserID,
    connection: &Connection,
) -> Result<Option<BusinessMetrics>, Error> {
    let result = connection
        .prepare(
            "SELECT metric_date, total_sales, total_expenses, net_profit FROM business_metrics
             WHERE user_id = :user_id
             ORDER BY metric_date DESC
             LIMIT 1",
        )?
        .query_row(&[(":user_id", &user_id.as_i64())], |row| {
            Ok(BusinessMetrics {
                metric_date: row.get(0)?,
                total_sales: row.get(1)?,
                total_expenses: row.get(2)?,
                net_profit: row.get(3)?,
            })
        });

    match result {
        Ok(metrics) => Ok(Some(metrics)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(error) => Err(error.into()),
    }
}

/// Insert a metrics snapshot for `(user_id, metric_date)`, overwriting the
/// totals if a snapshot for that pair already exists.
///
/// The insert-or-update is a single SQL statement, so concurrent upserts for
/// the same pair cannot leave a duplicate row.
///
/// # Errors
/// This function will return an [Error::SqlError] if there is a SQL error.
pub(crate) fn upsert_metrics(
    user_id: UserID,
    data: BusinessMetricsData,
    connection: &Connection,
) -> Result<(), Error> {
    let metric_date = data
        .metric_date
        .unwrap_or_else(|| OffsetDateTime::now_utc().date());

    connection.execute(
        "INSERT INTO business_metrics (user_id, metric_date, total_sales, total_expenses, net_profit)
         VALUES (?1, ?2, ?3, ?4, ?5)
         ON CONFLICT(user_id, metric_date) DO UPDATE SET
            total_sales = excluded.total_sales,
            total_expenses = excluded.total_expenses,
            net_profit = excluded.net_profit",
        params![
            user_id.as_i64(),
            metric_date,
            data.total_sales.unwrap_or_default(),
            data.total_expenses.unwrap_or_default(),
            data.net_profit.unwrap_or_default(),
        ],
    )?;

    Ok(())
}

/// The state needed to read and record metrics snapshots.
#[derive(Debug, Clone)]
pub struct MetricsState {
    /// The database connection for managing metrics snapshots.
    pub db_connection: Arc<Mutex<Connection>>,
}

impl FromRef<AppState> for MetricsState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
        }
    }
}

/// A route handler for the logged-in user's most recent metrics snapshot.
///
/// Responds with an empty JSON object when no snapshot exists, not a 404, so
/// the dashboard can treat a fresh account like any other.
pub async fn latest_metrics_endpoint(
    State(state): State<MetricsState>,
    Extension(user_id): Extension<UserID>,
) -> Result<Json<Value>, Error> {
    let connection = state
        .db_connection
        .lock()
        .map_err(|_| Error::DatabaseLockError)?;

    let body = match latest_metrics(user_id, &connection)? {
        Some(metrics) => {
            serde_json::to_value(metrics).map_err(|error| Error::JsonError(error.to_string()))?
        }
        None => json!({}),
    };

    Ok(Json(body))
}

/// A route handler for recording a metrics snapshot for the logged-in user.
///
/// Recording a second snapshot for the same date overwrites the first.
pub async fn upsert_metrics_endpoint(
    State(state): State<MetricsState>,
    Extension(user_id): Extension<UserID>,
    Json(data): Json<BusinessMetricsData>,
) -> Result<Json<Value>, Error> {
    let connection = state
        .db_connection
        .lock()
        .map_err(|_| Error::DatabaseLockError)?;

    upsert_metrics(user_id, data, &connection)?;

    Ok(Json(json!({ "success": true })))
}
