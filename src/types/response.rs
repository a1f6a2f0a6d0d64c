//! Request and response definitions for an analysis run.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::dictionary::{Category, DictionaryVariant};
use crate::processing::ColumnHints;
use crate::{DEFAULT_LANGUAGE, DEFAULT_PAGE_SIZE};

/// Parameters of a single analysis run.
#[derive(Debug, Clone)]
pub struct AnalysisRequest {
    /// Raw bytes of the uploaded delimited file
    pub content: Vec<u8>,

    /// Dictionary language code (e.g. "es")
    pub language: String,

    /// Dictionary family to classify with
    pub variant: DictionaryVariant,

    /// Preferred column names for subject, message and date
    pub hints: ColumnHints,

    /// 1-based page number
    pub page: usize,

    /// Records per page
    pub page_size: usize,
}

impl AnalysisRequest {
    /// Create a request for `content` with default parameters.
    pub fn new(content: impl Into<Vec<u8>>) -> Self {
        Self {
            content: content.into(),
            language: DEFAULT_LANGUAGE.to_string(),
            variant: DictionaryVariant::default(),
            hints: ColumnHints::default(),
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    /// Set the language code.
    pub fn with_language(mut self, language: &str) -> Self {
        self.language = language.to_string();
        self
    }

    /// Set the dictionary variant.
    pub fn with_variant(mut self, variant: DictionaryVariant) -> Self {
        self.variant = variant;
        self
    }

    /// Set the column hints.
    pub fn with_hints(mut self, hints: ColumnHints) -> Self {
        self.hints = hints;
        self
    }

    /// Set page number and size.
    pub fn with_page(mut self, page: usize, page_size: usize) -> Self {
        self.page = page;
        self.page_size = page_size;
        self
    }
}

/// Pagination block of the response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    pub current_page: usize,
    pub items_per_page: usize,
    pub total_pages: usize,
    pub total_items: usize,
}

/// Dataset-wide mention count for one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategorySummary {
    pub category: Category,
    pub total_mentions: usize,
}

/// Classification detail for one record on the requested page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordDetail {
    pub row_id: usize,

    /// Parsed date, invalid-date marker, or "N/A" without a date column
    pub date: String,

    pub subject: String,

    /// Message text, untouched
    pub preview: String,

    pub detected_categories: Vec<Category>,

    pub keywords_found: BTreeMap<Category, Vec<String>>,
}

/// Successful analysis result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisResponse {
    pub status: String,
    pub pagination: Pagination,
    pub statistics: Vec<CategorySummary>,
    pub data: Vec<RecordDetail>,

    /// Wall-clock processing time in seconds
    pub processing_time: f64,
}
