//! Database schema initialization.

use rusqlite::{Connection, Transaction as SqlTransaction};

use crate::{Error, metrics, sales, transaction, user};

/// Create the application tables if they do not already exist.
///
/// Table creation runs inside a single exclusive transaction.
///
/// # Errors
/// Returns an [Error::SqlError] if any of the tables could not be created.
pub fn initialize(connection: &Connection) -> Result<(), Error> {
    let tx = SqlTransaction::new_unchecked(connection, rusqlite::TransactionBehavior::Exclusive)?;

    user::create_user_table(&tx)?;
    transaction::create_transaction_table(&tx)?;
    sales::create_monthly_sales_table(&tx)?;
    metrics::create_business_metrics_table(&tx)?;

    tx.commit()?;

    Ok(())
}
