//! Input record types.

use serde::{Deserialize, Serialize};

/// One complaint row from an uploaded export.
///
/// Built per request from the ingested table and dropped with the response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComplaintRecord {
    /// 1-based position in the ingested table
    pub row_id: usize,

    /// Canonical `YYYY-MM-DD` date, the invalid-date marker, or `None`
    /// when the table has no date column
    pub date: Option<String>,

    /// Subject text, untouched
    pub subject: String,

    /// Message text, untouched
    pub message: String,
}
