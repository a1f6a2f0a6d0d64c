//! Insight Service Library
//!
//! Multilingual complaint classification: ingests heterogeneous CSV exports,
//! resolves column roles, normalizes text and tags each record with keyword
//! categories, returning paginated results and category statistics.

pub mod analyzer;
pub mod api;
pub mod dictionary;
pub mod error;
pub mod matcher;
pub mod processing;
pub mod report;
pub mod types;

pub use analyzer::ComplaintAnalyzer;
pub use dictionary::{Category, CategoryDictionary, DictionaryRegistry, DictionaryVariant, Language};
pub use error::AnalysisError;
pub use matcher::{CategoryMatcher, MatchMode, MatchResult};
pub use processing::{normalize, TabularIngester};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::analyzer::ComplaintAnalyzer;
    pub use crate::dictionary::*;
    pub use crate::error::AnalysisError;
    pub use crate::matcher::*;
    pub use crate::processing::*;
    pub use crate::types::*;
}

/// Default HTTP port
pub const DEFAULT_PORT: u16 = 3017;

/// Language accepted by default
pub const DEFAULT_LANGUAGE: &str = "es";

/// Default records per page
pub const DEFAULT_PAGE_SIZE: usize = 50;

/// Maximum upload size (20MB)
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 20 * 1024 * 1024;
