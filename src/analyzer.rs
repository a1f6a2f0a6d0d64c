//! The complaint analysis pipeline.

use std::time::Instant;

use tracing::{info, warn};

use crate::dictionary::DictionaryRegistry;
use crate::error::{AnalysisError, Result};
use crate::matcher::{CategoryMatcher, MatchMode};
use crate::processing::TabularIngester;
use crate::report;
use crate::types::{AnalysisRequest, AnalysisResponse, ServiceConfig};

/// Runs uploads through ingestion, matching and aggregation.
///
/// Holds only immutable state (dictionaries and compiled matchers), so one
/// instance can serve any number of concurrent requests.
pub struct ComplaintAnalyzer {
    registry: DictionaryRegistry,
    matcher: CategoryMatcher,
    ingester: TabularIngester,
}

impl ComplaintAnalyzer {
    /// Build an analyzer over `registry`, compiling every dictionary.
    pub fn new(registry: DictionaryRegistry, mode: MatchMode) -> std::result::Result<Self, regex::Error> {
        let matcher = CategoryMatcher::new(&registry, mode)?;
        Ok(Self {
            registry,
            matcher,
            ingester: TabularIngester::new(),
        })
    }

    /// Build an analyzer with the built-in dictionaries and the service settings.
    pub fn from_config(config: &ServiceConfig) -> std::result::Result<Self, regex::Error> {
        let registry = DictionaryRegistry::builtin(config.default_language, config.fallback_language);
        Self::new(registry, config.match_mode)
    }

    pub fn registry(&self) -> &DictionaryRegistry {
        &self.registry
    }

    /// Analyze one upload.
    pub fn analyze(&self, request: &AnalysisRequest) -> Result<AnalysisResponse> {
        let started = Instant::now();

        if request.page_size == 0 {
            return Err(AnalysisError::InvalidRequest(
                "page size must be at least 1".to_string(),
            ));
        }

        let dictionary = self.registry.resolve(&request.language, request.variant)?;
        let compiled = self
            .matcher
            .get(dictionary.language(), dictionary.variant())
            .filter(|c| !c.categories().is_empty())
            .ok_or_else(|| AnalysisError::EmptyDictionary {
                language: dictionary.language().to_string(),
                variant: dictionary.variant(),
            })?;

        let (table, columns) = self.ingester.ingest(&request.content, &request.hints)?;
        let records = table.to_records(&columns);
        drop(table);

        if records.is_empty() {
            warn!("Upload has no rows with a message");
        }

        let classification = compiled.classify(&records);
        let statistics = report::summarize(&classification);
        let pagination = report::paginate(records.len(), request.page, request.page_size);
        let data = report::page_details(
            &records,
            &classification.results,
            request.page,
            request.page_size,
        );

        let elapsed = started.elapsed().as_secs_f64();
        info!(
            language = %dictionary.language(),
            variant = %dictionary.variant(),
            page = pagination.current_page,
            total_pages = pagination.total_pages,
            rows = pagination.total_items,
            uncategorized = classification.uncategorized(),
            elapsed_secs = elapsed,
            "Page {} of {} processed",
            pagination.current_page,
            pagination.total_pages
        );

        Ok(AnalysisResponse {
            status: "success".to_string(),
            pagination,
            statistics,
            data,
            processing_time: (elapsed * 10_000.0).round() / 10_000.0,
        })
    }
}

impl Default for ComplaintAnalyzer {
    fn default() -> Self {
        Self::new(DictionaryRegistry::default(), MatchMode::default())
            .expect("Failed to compile built-in dictionaries")
    }
}
