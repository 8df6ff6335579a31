//! The user's ledger of income and expense events: the data model, the
//! database queries, and the JSON endpoints for listing, creating, updating,
//! deleting, and aggregating transactions.

mod core;
mod create_endpoint;
mod delete_endpoint;
mod list_endpoint;
mod recent_endpoint;
mod totals_endpoint;
mod update_endpoint;

pub use self::core::{
    Transaction, TransactionData, TransactionFilter, TransactionId, TransactionTotals,
    TransactionType,
};
pub(crate) use self::core::create_transaction_table;
pub use create_endpoint::create_transaction_endpoint;
pub use delete_endpoint::delete_transaction_endpoint;
pub use list_endpoint::list_transactions_endpoint;
pub use recent_endpoint::recent_transactions_endpoint;
pub use totals_endpoint::transaction_totals_endpoint;
pub use update_endpoint::update_transaction_endpoint;
