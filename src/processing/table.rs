//! Parsed table representation and column role resolution.

use serde::{Deserialize, Serialize};

use super::dates::{parse_date, INVALID_DATE};
use crate::error::{AnalysisError, Result};
use crate::types::ComplaintRecord;

/// Aliases tried, in order, when the message hint is not a column.
pub const MESSAGE_ALIASES: &[&str] = &[
    "Contenido",
    "Content",
    "Inhalt",
    "Message",
    "Comentario",
    "Body",
    "Description",
];

/// Aliases tried, in order, when the subject hint is not a column.
pub const SUBJECT_ALIASES: &[&str] = &["Asunto", "Subject", "Betreff", "Title", "Titulo", "Topic"];

/// Aliases tried, in order, when the date hint is not a column.
pub const DATE_ALIASES: &[&str] = &["Fecha", "Date", "Zeitstempel", "Time", "Timestamp", "Datum"];

/// Logical role a column plays in a complaint export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnRole {
    Subject,
    Message,
    Date,
}

impl ColumnRole {
    /// Known column names for this role.
    pub fn aliases(&self) -> &'static [&'static str] {
        match self {
            ColumnRole::Subject => SUBJECT_ALIASES,
            ColumnRole::Message => MESSAGE_ALIASES,
            ColumnRole::Date => DATE_ALIASES,
        }
    }
}

impl std::fmt::Display for ColumnRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ColumnRole::Subject => write!(f, "subject"),
            ColumnRole::Message => write!(f, "message"),
            ColumnRole::Date => write!(f, "date"),
        }
    }
}

/// Caller-supplied column names for each role.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColumnHints {
    pub subject: String,
    pub message: String,
    pub date: String,
}

impl Default for ColumnHints {
    fn default() -> Self {
        Self {
            subject: "Asunto".to_string(),
            message: "Contenido".to_string(),
            date: "Fecha".to_string(),
        }
    }
}

impl ColumnHints {
    fn hint(&self, role: ColumnRole) -> &str {
        match role {
            ColumnRole::Subject => &self.subject,
            ColumnRole::Message => &self.message,
            ColumnRole::Date => &self.date,
        }
    }
}

/// Actual column names backing each role in a given table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedColumns {
    pub subject: String,
    pub message: String,
    pub date: Option<String>,
}

/// A parsed delimited table.
///
/// Every row has exactly `columns().len()` cells; short rows are padded
/// with empty strings at parse time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    /// Build a table, padding short rows to the header width.
    pub fn new(columns: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        let width = columns.len();
        let rows = rows
            .into_iter()
            .map(|mut row| {
                row.resize(width, String::new());
                row
            })
            .collect();
        Self { columns, rows }
    }

    /// Column names in file order.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Number of data rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Index of a column by exact name.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.column_index(name).is_some()
    }

    /// Values of a single column, top to bottom.
    pub fn column(&self, name: &str) -> Option<impl Iterator<Item = &str>> {
        let idx = self.column_index(name)?;
        Some(self.rows.iter().map(move |row| row[idx].as_str()))
    }

    /// Row by 0-based index.
    pub fn row(&self, index: usize) -> Option<&[String]> {
        self.rows.get(index).map(Vec::as_slice)
    }

    /// Find the column backing `role`: the hint if present, else the first alias.
    pub fn resolve_role(&self, role: ColumnRole, hint: &str) -> Option<String> {
        if self.has_column(hint) {
            return Some(hint.to_string());
        }
        role.aliases()
            .iter()
            .find(|alias| self.has_column(alias))
            .map(|alias| alias.to_string())
    }

    /// Resolve subject, message and date roles.
    ///
    /// Subject and message are required; a missing date column is not an error.
    pub fn resolve_columns(&self, hints: &ColumnHints) -> Result<ResolvedColumns> {
        let message = self.resolve_role(ColumnRole::Message, hints.hint(ColumnRole::Message));
        let subject = self.resolve_role(ColumnRole::Subject, hints.hint(ColumnRole::Subject));
        let date = self.resolve_role(ColumnRole::Date, hints.hint(ColumnRole::Date));

        match (subject, message) {
            (Some(subject), Some(message)) => Ok(ResolvedColumns {
                subject,
                message,
                date,
            }),
            (subject, message) => {
                let mut missing = Vec::new();
                if message.is_none() {
                    missing.push(ColumnRole::Message);
                }
                if subject.is_none() {
                    missing.push(ColumnRole::Subject);
                }
                Err(AnalysisError::MissingColumns {
                    missing,
                    available: self.columns.clone(),
                })
            }
        }
    }

    /// Turn rows into complaint records.
    ///
    /// Rows with an empty message are skipped; `row_id` keeps the 1-based
    /// position in the table so skipped rows leave gaps.
    pub fn to_records(&self, columns: &ResolvedColumns) -> Vec<ComplaintRecord> {
        let (Some(subject_idx), Some(message_idx)) = (
            self.column_index(&columns.subject),
            self.column_index(&columns.message),
        ) else {
            return Vec::new();
        };
        let date_idx = columns.date.as_deref().and_then(|d| self.column_index(d));

        self.rows
            .iter()
            .enumerate()
            .filter(|(_, row)| !row[message_idx].is_empty())
            .map(|(idx, row)| ComplaintRecord {
                row_id: idx + 1,
                date: date_idx.map(|d| {
                    parse_date(&row[d]).unwrap_or_else(|| INVALID_DATE.to_string())
                }),
                subject: row[subject_idx].clone(),
                message: row[message_idx].clone(),
            })
            .collect()
    }
}
