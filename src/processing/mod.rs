//! Processing module for upload ingestion and text preparation.
//!
//! This module provides:
//! - Delimited-table parsing with encoding and delimiter recovery
//! - Column role resolution (subject, message, date) via alias lists
//! - Lenient date parsing
//! - Accent-insensitive text normalization

pub mod dates;
pub mod ingest;
pub mod normalize;
pub mod table;

pub use dates::{parse_date, INVALID_DATE};
pub use ingest::TabularIngester;
pub use normalize::normalize;
pub use table::{ColumnHints, ColumnRole, ResolvedColumns, Table};
