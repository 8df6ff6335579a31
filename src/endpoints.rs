//! The API endpoint URIs.
//!
//! For endpoints that take a parameter, e.g., '/api/transactions/{transaction_id}',
//! use [format_endpoint].

/// The route for registering a new user.
pub const REGISTER: &str = "/api/register";
/// The route for logging in a user.
pub const LOG_IN: &str = "/api/login";
/// The route for the client to log out the current user.
pub const LOG_OUT: &str = "/api/logout";
/// The route to read a user's monthly sales figures.
pub const MONTHLY_SALES: &str = "/api/sales/monthly";
/// The route to read a user's most recent metrics snapshot.
pub const LATEST_METRICS: &str = "/api/metrics/latest";
/// The route to record a metrics snapshot.
pub const METRICS: &str = "/api/metrics";
/// The route to list and create transactions.
pub const TRANSACTIONS: &str = "/api/transactions";
/// The route to list a user's most recent transactions.
pub const RECENT_TRANSACTIONS: &str = "/api/transactions/recent";
/// The route to read aggregate transaction totals.
pub const TRANSACTION_TOTALS: &str = "/api/transactions/totals";
/// The route to update or delete a single transaction.
pub const TRANSACTION: &str = "/api/transactions/{transaction_id}";
/// The route to request a cup of coffee (experimental).
pub const COFFEE: &str = "/api/coffee";

/// Replace the parameter in `endpoint_path` with `id`.
///
/// A parameter is a string that starts with a left brace, followed by
/// lowercase letters or underscores, and ends with a right brace.
/// For example, in the endpoint path '/api/transactions/{transaction_id}',
/// '{transaction_id}' is the parameter.
///
/// This function assumes that an endpoint path only contains ASCII characters
/// and a single parameter.
///
/// If no parameter is found in `endpoint_path`, the function returns the
/// original `endpoint_path`.
pub fn format_endpoint(endpoint_path: &str, id: i64) -> String {
    let mut param_start = None;
    let mut param_end = None;

    for (i, c) in endpoint_path.chars().enumerate() {
        if c == '{' {
            param_start = Some(i);
        } else if param_start.is_some() && c == '}' {
            param_end = Some(i + 1);
            break;
        }
    }

    let param_start = match param_start {
        Some(start) => start,
        None => return endpoint_path.to_string(),
    };

    let param_end = param_end.unwrap_or(endpoint_path.len());

    format!(
        "{}{}{}",
        &endpoint_path[..param_start],
        id,
        &endpoint_path[param_end..]
    )
}
