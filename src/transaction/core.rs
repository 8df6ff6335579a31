//! Defines the core data model and database queries for transactions.

use rusqlite::{
    Connection, Row, params, params_from_iter,
    types::{FromSql, FromSqlError, FromSqlResult, ToSql, ToSqlOutput, Value, ValueRef},
};
use serde::{Deserialize, Serialize};
use time::{Date, Duration, OffsetDateTime};

use crate::{Error, user::UserID};

/// A transaction's ID in the database.
pub type TransactionId = i64;

/// Whether a transaction brought money in or sent it out.
///
/// The sign of a transaction's amount is independent of its type: aggregate
/// totals derive sign from the type, not from the amount itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransactionType {
    /// Money earned, e.g. a sale.
    Income,
    /// Money spent, e.g. rent or stock purchases.
    Expense,
}

impl TransactionType {
    /// The string stored in the transaction_type column.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Income => "Income",
            Self::Expense => "Expense",
        }
    }
}

impl ToSql for TransactionType {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.as_str()))
    }
}

impl FromSql for TransactionType {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        match value.as_str()? {
            "Income" => Ok(Self::Income),
            "Expense" => Ok(Self::Expense),
            other => Err(FromSqlError::Other(
                format!("unknown transaction type {other:?}").into(),
            )),
        }
    }
}

/// A financial event recorded against a user's ledger.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// The ID of the transaction.
    #[serde(rename = "transaction_id")]
    pub id: TransactionId,
    /// When the transaction happened.
    #[serde(rename = "transaction_date")]
    pub date: Date,
    /// A text description of what the transaction was for.
    pub description: String,
    /// The amount of money involved.
    pub amount: f64,
    /// Whether the transaction is income or an expense.
    pub transaction_type: TransactionType,
    /// A free-form grouping label, e.g. "Rent" or "Utilities".
    pub category: String,
    /// Extra notes the user attached to the transaction.
    pub notes: String,
}

/// The fields accepted when creating or replacing a transaction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransactionData {
    /// When the transaction happened. Defaults to today.
    #[serde(rename = "transaction_date")]
    pub date: Option<Date>,
    /// A text description of what the transaction was for.
    pub description: Option<String>,
    /// The amount of money involved.
    pub amount: Option<f64>,
    /// Whether the transaction is income or an expense.
    pub transaction_type: Option<TransactionType>,
    /// A free-form grouping label.
    pub category: Option<String>,
    /// Extra notes to attach to the transaction.
    pub notes: Option<String>,
}

/// A transaction payload whose required fields have been checked and whose
/// optional fields have been filled with defaults.
pub(crate) struct TransactionRecord {
    pub(crate) date: Date,
    pub(crate) description: String,
    pub(crate) amount: f64,
    pub(crate) transaction_type: TransactionType,
    pub(crate) category: String,
    pub(crate) notes: String,
}

impl TransactionData {
    /// Check the required fields and apply defaults to the rest.
    ///
    /// # Errors
    /// Returns an [Error::InvalidInput] naming the missing field if `amount`
    /// or `transaction_type` is absent.
    pub(crate) fn into_record(self) -> Result<TransactionRecord, Error> {
        let amount = self
            .amount
            .ok_or_else(|| Error::InvalidInput("amount is required".to_owned()))?;
        let transaction_type = self
            .transaction_type
            .ok_or_else(|| Error::InvalidInput("transaction_type is required".to_owned()))?;

        Ok(TransactionRecord {
            date: self.date.unwrap_or_else(|| OffsetDateTime::now_utc().date()),
            description: self.description.unwrap_or_default(),
            amount,
            transaction_type,
            category: self.category.unwrap_or_default(),
            notes: self.notes.unwrap_or_default(),
        })
    }
}

/// Optional filters for listing a user's transactions.
///
/// Filters combine with logical AND. Queries are always scoped to the owning
/// user on top of these.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct TransactionFilter {
    /// Case-insensitive substring matched against description, category, and notes.
    pub search: Option<String>,
    /// Only return transactions of this type.
    #[serde(rename = "type")]
    pub transaction_type: Option<TransactionType>,
    /// The earliest transaction date to include (inclusive).
    pub start_date: Option<Date>,
    /// The latest transaction date to include (inclusive).
    pub end_date: Option<Date>,
    /// The maximum number of rows to return.
    pub limit: Option<i64>,
    /// Return only the transaction with this ID.
    pub id: Option<TransactionId>,
}

/// Aggregate income and expense totals over a trailing window of days.
#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct TransactionTotals {
    /// The sum of Income amounts in the window.
    pub total_sales: f64,
    /// The sum of Expense amounts in the window.
    pub total_expenses: f64,
    /// `total_sales` minus `total_expenses`.
    pub net_profit: f64,
}

/// Create the transactions table.
///
/// # Errors
/// Returns an error if the SQL query failed.
pub(crate) fn create_transaction_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute(
        "CREATE TABLE IF NOT EXISTS transactions (
                transaction_id INTEGER PRIMARY KEY,
                user_id INTEGER NOT NULL,
                transaction_date TEXT NOT NULL,
                description TEXT NOT NULL,
                amount REAL NOT NULL,
                transaction_type TEXT NOT NULL,
                category TEXT NOT NULL DEFAULT '',
                notes TEXT NOT NULL DEFAULT '',
                FOREIGN KEY(user_id) REFERENCES user(id) ON UPDATE CASCADE ON DELETE CASCADE
                )",
        (),
    )?;

    Ok(())
}

pub(crate) fn map_transaction_row(row: &Row) -> Result<Transaction, rusqlite::Error> {
    Ok(Transaction {
        id: row.get(0)?,
        date: row.get(1)?,
        description: row.get(2)?,
        amount: row.get(3)?,
        transaction_type: row.get(4)?,
        category: row.get(5)?,
        notes: row.get(6)?,
    })
}

const TRANSACTION_COLUMNS: &str =
    "transaction_id, transaction_date, description, amount, transaction_type, category, notes";

/// Create a new transaction owned by `user_id` and return its ID.
///
/// # Errors
/// Returns an [Error::InvalidInput] if a required field is missing, or an
/// [Error::SqlError] if the insert failed.
pub(crate) fn create_transaction(
    user_id: UserID,
    data: TransactionData,
    connection: &Connection,
) -> Result<TransactionId, Error> {
    let record = data.into_record()?;

    connection.execute(
        "INSERT INTO transactions (user_id, transaction_date, description, amount, transaction_type, category, notes)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        params![
            user_id.as_i64(),
            record.date,
            record.description,
            record.amount,
            record.transaction_type,
            record.category,
            record.notes,
        ],
    )?;

    Ok(connection.last_insert_rowid())
}

/// Replace every field of the transaction with `id` owned by `user_id`.
///
/// # Errors
/// Returns an [Error::NotFound] if no transaction matches both `id` and
/// `user_id`, so a caller can never touch another user's rows.
pub(crate) fn update_transaction(
    id: TransactionId,
    user_id: UserID,
    data: TransactionData,
    connection: &Connection,
) -> Result<(), Error> {
    let record = data.into_record()?;

    let rows_affected = connection.execute(
        "UPDATE transactions
         SET transaction_date = ?1, description = ?2, amount = ?3, transaction_type = ?4, category = ?5, notes = ?6
         WHERE transaction_id = ?7 AND user_id = ?8",
        params![
            record.date,
            record.description,
            record.amount,
            record.transaction_type,
            record.category,
            record.notes,
            id,
            user_id.as_i64(),
        ],
    )?;

    if rows_affected == 0 {
        return Err(Error::NotFound);
    }

    Ok(())
}

/// Delete the transaction with `id` owned by `user_id`.
///
/// # Errors
/// Returns an [Error::NotFound] if no transaction matches both `id` and
/// `user_id`.
pub(crate) fn delete_transaction(
    id: TransactionId,
    user_id: UserID,
    connection: &Connection,
) -> Result<(), Error> {
    let rows_affected = connection.execute(
        "DELETE FROM transactions WHERE transaction_id = ?1 AND user_id = ?2",
        params![id, user_id.as_i64()],
    )?;

    if rows_affected == 0 {
        return Err(Error::NotFound);
    }

    Ok(())
}

/// Query for the transactions owned by `user_id` that match `filter`.
///
/// Results are ordered by transaction date descending, newest inserts first
/// within a date.
///
/// # Errors
/// This function will return an [Error::SqlError] if there is a SQL error.
pub(crate) fn query_transactions(
    user_id: UserID,
    filter: &TransactionFilter,
    connection: &Connection,
) -> Result<Vec<Transaction>, Error> {
    let mut query = format!("SELECT {TRANSACTION_COLUMNS} FROM transactions WHERE user_id = ?1");
    let mut parameters = vec![Value::Integer(user_id.as_i64())];

    if let Some(search) = &filter.search {
        query.push_str(&format!(
            " AND (description LIKE ?{n} OR category LIKE ?{n} OR notes LIKE ?{n})",
            n = parameters.len() + 1
        ));
        parameters.push(Value::Text(format!("%{search}%")));
    }

    if let Some(transaction_type) = filter.transaction_type {
        query.push_str(&format!(
            " AND transaction_type = ?{}",
            parameters.len() + 1
        ));
        parameters.push(Value::Text(transaction_type.as_str().to_owned()));
    }

    if let Some(start_date) = filter.start_date {
        query.push_str(&format!(
            " AND transaction_date >= ?{}",
            parameters.len() + 1
        ));
        parameters.push(Value::Text(start_date.to_string()));
    }

    if let Some(end_date) = filter.end_date {
        query.push_str(&format!(
            " AND transaction_date <= ?{}",
            parameters.len() + 1
        ));
        parameters.push(Value::Text(end_date.to_string()));
    }

    if let Some(id) = filter.id {
        query.push_str(&format!(" AND transaction_id = ?{}", parameters.len() + 1));
        parameters.push(Value::Integer(id));
    }

    // Sort by date, and then ID to keep transaction order stable after updates
    query.push_str(" ORDER BY transaction_date DESC, transaction_id DESC");

    if let Some(limit) = filter.limit {
        query.push_str(&format!(" LIMIT {limit}"));
    }

    connection
        .prepare(&query)?
        .query_map(params_from_iter(parameters.iter()), map_transaction_row)?
        .map(|maybe_transaction| maybe_transaction.map_err(Error::SqlError))
        .collect()
}

/// Aggregate income and expense totals for `user_id` over the trailing window
/// of `days` days, ending today.
///
/// A window with no matching transactions produces zero totals, not an error.
///
/// # Errors
/// This function will return an [Error::SqlError] if there is a SQL error.
pub(crate) fn transaction_totals(
    user_id: UserID,
    days: i64,
    connection: &Connection,
) -> Result<TransactionTotals, Error> {
    let end_date = OffsetDateTime::now_utc().date();
    let start_date = end_date
        .checked_sub(Duration::days(days))
        .ok_or_else(|| Error::InvalidInput("days is out of range".to_owned()))?;

    let (total_sales, total_expenses) = connection
        .prepare(
            "SELECT
                COALESCE(SUM(CASE WHEN transaction_type = 'Income' THEN amount ELSE 0 END), 0),
                COALESCE(SUM(CASE WHEN transaction_type = 'Expense' THEN amount ELSE 0 END), 0)
             FROM transactions
             WHERE user_id = ?1 AND transaction_date BETWEEN ?2 AND ?3",
        )?
        .query_row(params![user_id.as_i64(), start_date, end_date], |row| {
            Ok((row.get(0)?, row.get(1)?))
        })?;

    Ok(TransactionTotals {
        total_sales,
        total_expenses,
        net_profit: total_sales - total_expenses,
    })
}

#[cfg(test)]
mod transaction_core_tests {
    use time::{Duration, OffsetDateTime, macros::date};

    use crate::{
        Error,
        test_utils::{create_test_user, get_test_connection, new_transaction_data},
        user::UserID,
    };

    use super::{
        TransactionFilter, TransactionType, create_transaction, delete_transaction,
        query_transactions, transaction_totals, update_transaction,
    };

    #[test]
    fn create_transaction_succeeds() {
        let conn = get_test_connection();
        let user = create_test_user(&conn);

        let transaction_id = create_transaction(
            user.id,
            new_transaction_data(12.3, TransactionType::Income, date!(2025 - 06 - 02)),
            &conn,
        )
        .unwrap();

        assert!(transaction_id > 0);

        let transactions =
            query_transactions(user.id, &TransactionFilter::default(), &conn).unwrap();
        assert_eq!(transactions.len(), 1);
        assert_eq!(transactions[0].id, transaction_id);
        assert_eq!(transactions[0].amount, 12.3);
        assert_eq!(transactions[0].transaction_type, TransactionType::Income);
    }

    #[test]
    fn create_transaction_fails_without_amount() {
        let conn = get_test_connection();
        let user = create_test_user(&conn);
        let mut data = new_transaction_data(1.0, TransactionType::Income, date!(2025 - 06 - 02));
        data.amount = None;

        let result = create_transaction(user.id, data, &conn);

        assert_eq!(
            result,
            Err(Error::InvalidInput("amount is required".to_owned()))
        );
    }

    #[test]
    fn create_transaction_fails_without_type() {
        let conn = get_test_connection();
        let user = create_test_user(&conn);
        let mut data = new_transaction_data(1.0, TransactionType::Income, date!(2025 - 06 - 02));
        data.transaction_type = None;

        let result = create_transaction(user.id, data, &conn);

        assert_eq!(
            result,
            Err(Error::InvalidInput("transaction_type is required".to_owned()))
        );
    }

    #[test]
    fn query_transactions_sorts_by_date_descending() {
        let conn = get_test_connection();
        let user = create_test_user(&conn);
        for (amount, date) in [
            (1.0, date!(2025 - 06 - 01)),
            (2.0, date!(2025 - 06 - 03)),
            (3.0, date!(2025 - 06 - 02)),
        ] {
            create_transaction(
                user.id,
                new_transaction_data(amount, TransactionType::Income, date),
                &conn,
            )
            .unwrap();
        }

        let got = query_transactions(user.id, &TransactionFilter::default(), &conn).unwrap();

        let got_amounts: Vec<f64> = got.iter().map(|transaction| transaction.amount).collect();
        assert_eq!(
            got_amounts,
            vec![2.0, 3.0, 1.0],
            "got transactions that were not sorted in descending date order"
        );
    }

    #[test]
    fn query_transactions_only_returns_own_rows() {
        let conn = get_test_connection();
        let user = create_test_user(&conn);
        create_transaction(
            user.id,
            new_transaction_data(1.0, TransactionType::Income, date!(2025 - 06 - 02)),
            &conn,
        )
        .unwrap();

        let someone_else = UserID::new(user.id.as_i64() + 1);
        let got = query_transactions(someone_else, &TransactionFilter::default(), &conn).unwrap();

        assert_eq!(got, []);
    }

    #[test]
    fn query_transactions_by_search_matches_description_category_and_notes() {
        let conn = get_test_connection();
        let user = create_test_user(&conn);
        let mut in_description =
            new_transaction_data(1.0, TransactionType::Expense, date!(2025 - 06 - 01));
        in_description.description = Some("Monthly rent payment".to_owned());
        let mut in_category =
            new_transaction_data(2.0, TransactionType::Expense, date!(2025 - 06 - 02));
        in_category.category = Some("Rent".to_owned());
        let mut in_notes = new_transaction_data(3.0, TransactionType::Expense, date!(2025 - 06 - 03));
        in_notes.notes = Some("includes rent arrears".to_owned());
        let unrelated = new_transaction_data(4.0, TransactionType::Expense, date!(2025 - 06 - 04));

        for data in [in_description, in_category, in_notes, unrelated] {
            create_transaction(user.id, data, &conn).unwrap();
        }

        let got = query_transactions(
            user.id,
            &TransactionFilter {
                search: Some("rent".to_owned()),
                ..Default::default()
            },
            &conn,
        )
        .unwrap();

        let got_amounts: Vec<f64> = got.iter().map(|transaction| transaction.amount).collect();
        assert_eq!(
            got_amounts,
            vec![3.0, 2.0, 1.0],
            "want the three transactions mentioning rent, got {got:?}"
        );
    }

    #[test]
    fn query_transactions_by_type() {
        let conn = get_test_connection();
        let user = create_test_user(&conn);
        create_transaction(
            user.id,
            new_transaction_data(100.0, TransactionType::Income, date!(2025 - 06 - 01)),
            &conn,
        )
        .unwrap();
        create_transaction(
            user.id,
            new_transaction_data(40.0, TransactionType::Expense, date!(2025 - 06 - 02)),
            &conn,
        )
        .unwrap();

        let got = query_transactions(
            user.id,
            &TransactionFilter {
                transaction_type: Some(TransactionType::Expense),
                ..Default::default()
            },
            &conn,
        )
        .unwrap();

        assert_eq!(got.len(), 1, "want 1 expense, got {}", got.len());
        assert_eq!(got[0].amount, 40.0);
    }

    #[test]
    fn query_transactions_by_date_range_is_inclusive() {
        let conn = get_test_connection();
        let user = create_test_user(&conn);
        let start_date = date!(2025 - 06 - 02);
        let end_date = date!(2025 - 06 - 04);

        for (amount, date) in [
            (1.0, date!(2025 - 06 - 01)),
            (2.0, start_date),
            (3.0, date!(2025 - 06 - 03)),
            (4.0, end_date),
            (5.0, date!(2025 - 06 - 05)),
        ] {
            create_transaction(
                user.id,
                new_transaction_data(amount, TransactionType::Income, date),
                &conn,
            )
            .unwrap();
        }

        let got = query_transactions(
            user.id,
            &TransactionFilter {
                start_date: Some(start_date),
                end_date: Some(end_date),
                ..Default::default()
            },
            &conn,
        )
        .unwrap();

        let got_amounts: Vec<f64> = got.iter().map(|transaction| transaction.amount).collect();
        assert_eq!(got_amounts, vec![4.0, 3.0, 2.0]);
    }

    #[test]
    fn query_transactions_with_limit() {
        let conn = get_test_connection();
        let user = create_test_user(&conn);
        for i in 1..=10 {
            create_transaction(
                user.id,
                new_transaction_data(i as f64, TransactionType::Income, date!(2025 - 06 - 01)),
                &conn,
            )
            .unwrap();
        }

        let got = query_transactions(
            user.id,
            &TransactionFilter {
                limit: Some(5),
                ..Default::default()
            },
            &conn,
        )
        .unwrap();

        assert_eq!(got.len(), 5, "got {} transactions, want 5", got.len());
    }

    #[test]
    fn query_transactions_by_id() {
        let conn = get_test_connection();
        let user = create_test_user(&conn);
        create_transaction(
            user.id,
            new_transaction_data(1.0, TransactionType::Income, date!(2025 - 06 - 01)),
            &conn,
        )
        .unwrap();
        let wanted_id = create_transaction(
            user.id,
            new_transaction_data(2.0, TransactionType::Income, date!(2025 - 06 - 02)),
            &conn,
        )
        .unwrap();

        let got = query_transactions(
            user.id,
            &TransactionFilter {
                id: Some(wanted_id),
                ..Default::default()
            },
            &conn,
        )
        .unwrap();

        assert_eq!(got.len(), 1);
        assert_eq!(got[0].id, wanted_id);
    }

    #[test]
    fn update_transaction_replaces_all_fields() {
        let conn = get_test_connection();
        let user = create_test_user(&conn);
        let transaction_id = create_transaction(
            user.id,
            new_transaction_data(1.0, TransactionType::Income, date!(2025 - 06 - 01)),
            &conn,
        )
        .unwrap();

        let mut replacement =
            new_transaction_data(99.0, TransactionType::Expense, date!(2025 - 06 - 30));
        replacement.description = Some("corrected".to_owned());
        update_transaction(transaction_id, user.id, replacement, &conn).unwrap();

        let got = query_transactions(user.id, &TransactionFilter::default(), &conn).unwrap();
        assert_eq!(got.len(), 1);
        assert_eq!(got[0].amount, 99.0);
        assert_eq!(got[0].transaction_type, TransactionType::Expense);
        assert_eq!(got[0].description, "corrected");
        assert_eq!(got[0].date, date!(2025 - 06 - 30));
    }

    #[test]
    fn update_transaction_fails_for_other_users_row() {
        let conn = get_test_connection();
        let user = create_test_user(&conn);
        let transaction_id = create_transaction(
            user.id,
            new_transaction_data(1.0, TransactionType::Income, date!(2025 - 06 - 01)),
            &conn,
        )
        .unwrap();

        let someone_else = UserID::new(user.id.as_i64() + 1);
        let result = update_transaction(
            transaction_id,
            someone_else,
            new_transaction_data(99.0, TransactionType::Expense, date!(2025 - 06 - 30)),
            &conn,
        );

        assert_eq!(result, Err(Error::NotFound));

        // The row must be untouched.
        let got = query_transactions(user.id, &TransactionFilter::default(), &conn).unwrap();
        assert_eq!(got[0].amount, 1.0);
    }

    #[test]
    fn delete_transaction_removes_row() {
        let conn = get_test_connection();
        let user = create_test_user(&conn);
        let transaction_id = create_transaction(
            user.id,
            new_transaction_data(1.0, TransactionType::Income, date!(2025 - 06 - 01)),
            &conn,
        )
        .unwrap();

        delete_transaction(transaction_id, user.id, &conn).unwrap();

        let got = query_transactions(user.id, &TransactionFilter::default(), &conn).unwrap();
        assert_eq!(got, []);
    }

    #[test]
    fn delete_transaction_fails_for_other_users_row() {
        let conn = get_test_connection();
        let user = create_test_user(&conn);
        let transaction_id = create_transaction(
            user.id,
            new_transaction_data(1.0, TransactionType::Income, date!(2025 - 06 - 01)),
            &conn,
        )
        .unwrap();

        let someone_else = UserID::new(user.id.as_i64() + 1);
        let result = delete_transaction(transaction_id, someone_else, &conn);

        assert_eq!(result, Err(Error::NotFound));
        let got = query_transactions(user.id, &TransactionFilter::default(), &conn).unwrap();
        assert_eq!(got.len(), 1, "the row must be left intact");
    }

    #[test]
    fn totals_with_no_transactions_are_zero() {
        let conn = get_test_connection();
        let user = create_test_user(&conn);

        let totals = transaction_totals(user.id, 30, &conn).unwrap();

        assert_eq!(totals.total_sales, 0.0);
        assert_eq!(totals.total_expenses, 0.0);
        assert_eq!(totals.net_profit, 0.0);
    }

    #[test]
    fn totals_derive_sign_from_type() {
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

        let totals = transaction_totals(user.id, 30, &conn).unwrap();

        assert_eq!(totals.total_sales, 200.0);
        assert_eq!(totals.total_expenses, 50.0);
        assert_eq!(totals.net_profit, 150.0);
    }

    #[test]
    fn totals_ignore_transactions_outside_window() {
        let conn = get_test_connection();
        let user = create_test_user(&conn);
        let today = OffsetDateTime::now_utc().date();
        let long_ago = today.checked_sub(Duration::days(60)).unwrap();
        create_transaction(
            user.id,
            new_transaction_data(200.0, TransactionType::Income, today),
            &conn,
        )
        .unwrap();
        create_transaction(
            user.id,
            new_transaction_data(999.0, TransactionType::Income, long_ago),
            &conn,
        )
        .unwrap();

        let totals = transaction_totals(user.id, 30, &conn).unwrap();

        assert_eq!(totals.total_sales, 200.0);
    }

    #[test]
    fn totals_ignore_other_users_transactions() {
        let conn = get_test_connection();
        let user = create_test_user(&conn);
        let today = OffsetDateTime::now_utc().date();
        create_transaction(
            user.id,
            new_transaction_data(200.0, TransactionType::Income, today),
            &conn,
        )
        .unwrap();

        let someone_else = UserID::new(user.id.as_i64() + 1);
        let totals = transaction_totals(someone_else, 30, &conn).unwrap();

        assert_eq!(totals.total_sales, 0.0);
    }
}
