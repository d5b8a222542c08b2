//! Row-to-entity parsing helpers.
//!
//! Repos convert `libsql::Row` (column-indexed) into typed entity structs;
//! the nullable-column handling is isolated here.

use super::error::StoreResult;

/// Read a nullable TEXT column. Returns `None` for both SQL NULL and empty
/// string.
///
/// `row.get::<String>(idx)` on a NULL column returns an error, not `""`;
/// nullable columns must go through `get::<Option<String>>()`.
pub(crate) fn get_opt_string(row: &libsql::Row, idx: i32) -> StoreResult<Option<String>> {
    match row.get::<Option<String>>(idx)? {
        Some(s) if s.is_empty() => Ok(None),
        other => Ok(other),
    }
}

/// Read a nullable INTEGER column.
pub(crate) fn get_opt_i64(row: &libsql::Row, idx: i32) -> StoreResult<Option<i64>> {
    Ok(row.get::<Option<i64>>(idx)?)
}
