//! Keyword-based multi-label category matching.
//!
//! Dictionary terms are normalized and compiled into one [`RegexSet`] per
//! category when the service starts; requests only run the cached sets
//! against normalized subjects.

use std::collections::{BTreeMap, HashMap};

use regex::RegexSet;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::dictionary::{Category, CategoryDictionary, DictionaryRegistry, DictionaryVariant, Language};
use crate::processing::normalize;
use crate::types::ComplaintRecord;

/// How single-word terms are anchored in the text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchMode {
    /// Term must start at a word boundary; it may be a prefix of a longer word.
    #[default]
    WordPrefix,
    /// Term may appear anywhere, including inside other words.
    Substring,
}

/// Categories and matched terms for one record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    /// Matched categories in dictionary order, or `[sin_categoria]`
    pub detected_categories: Vec<Category>,
    /// Normalized terms found, per matched category
    pub keywords_found: BTreeMap<Category, Vec<String>>,
}

impl MatchResult {
    /// Whether at least one real category matched.
    pub fn is_matched(&self) -> bool {
        !self.keywords_found.is_empty()
    }
}

/// One category's normalized terms and their compiled set.
#[derive(Debug, Clone)]
pub struct CompiledCategory {
    category: Category,
    terms: Vec<String>,
    set: RegexSet,
}

impl CompiledCategory {
    fn compile(category: Category, raw_terms: &[String], mode: MatchMode) -> Result<Self, regex::Error> {
        let mut terms: Vec<String> = Vec::with_capacity(raw_terms.len());
        for term in raw_terms.iter().map(|t| normalize(t.trim())) {
            if !term.is_empty() && !terms.contains(&term) {
                terms.push(term);
            }
        }
        let set = RegexSet::new(terms.iter().map(|t| term_pattern(t, mode)))?;
        Ok(Self { category, terms, set })
    }

    pub fn category(&self) -> Category {
        self.category
    }

    /// Normalized terms in dictionary order.
    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    /// Terms present in `normalized_text`, in dictionary order.
    pub fn find(&self, normalized_text: &str) -> Vec<String> {
        self.set
            .matches(normalized_text)
            .iter()
            .map(|idx| self.terms[idx].clone())
            .collect()
    }
}

fn term_pattern(term: &str, mode: MatchMode) -> String {
    let escaped = regex::escape(term);
    let anchorable = !term.contains(char::is_whitespace)
        && term.chars().next().map_or(false, char::is_alphanumeric);

    match mode {
        MatchMode::WordPrefix if anchorable => format!(r"\b{}", escaped),
        _ => escaped,
    }
}

/// A dictionary compiled for matching.
#[derive(Debug, Clone)]
pub struct CompiledDictionary {
    language: Language,
    variant: DictionaryVariant,
    categories: Vec<CompiledCategory>,
}

impl CompiledDictionary {
    /// Compile every category of `dictionary`; categories without terms are skipped.
    pub fn compile(dictionary: &CategoryDictionary, mode: MatchMode) -> Result<Self, regex::Error> {
        let categories = dictionary
            .categories()
            .iter()
            .filter(|(_, terms)| !terms.is_empty())
            .map(|(category, terms)| CompiledCategory::compile(*category, terms, mode))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            language: dictionary.language(),
            variant: dictionary.variant(),
            categories,
        })
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn variant(&self) -> DictionaryVariant {
        self.variant
    }

    /// Compiled categories in dictionary order.
    pub fn categories(&self) -> &[CompiledCategory] {
        &self.categories
    }

    /// Match an already-normalized subject.
    pub fn match_normalized(&self, normalized_text: &str) -> MatchResult {
        let mut detected_categories = Vec::new();
        let mut keywords_found = BTreeMap::new();

        for compiled in &self.categories {
            let found = compiled.find(normalized_text);
            if !found.is_empty() {
                detected_categories.push(compiled.category);
                keywords_found.insert(compiled.category, found);
            }
        }

        if detected_categories.is_empty() {
            detected_categories.push(Category::Uncategorized);
        }

        MatchResult {
            detected_categories,
            keywords_found,
        }
    }

    /// Normalize and match raw text.
    pub fn match_text(&self, text: &str) -> MatchResult {
        self.match_normalized(&normalize(text))
    }

    /// Classify every record's subject.
    pub fn classify(&self, records: &[ComplaintRecord]) -> Classification {
        let mut counts: Vec<(Category, usize)> = self
            .categories
            .iter()
            .map(|c| (c.category(), 0))
            .collect();
        let mut matched_records = 0;

        let results: Vec<MatchResult> = records
            .iter()
            .map(|record| {
                let result = self.match_text(&record.subject);
                if result.is_matched() {
                    matched_records += 1;
                    for (category, count) in counts.iter_mut() {
                        if result.keywords_found.contains_key(category) {
                            *count += 1;
                        }
                    }
                }
                result
            })
            .collect();

        Classification {
            results,
            category_counts: counts,
            matched_records,
        }
    }
}

/// Per-record results plus dataset-wide counts.
#[derive(Debug, Clone)]
pub struct Classification {
    /// One entry per input record, same order
    pub results: Vec<MatchResult>,
    /// Distinct matching records per category, in dictionary order
    pub category_counts: Vec<(Category, usize)>,
    /// Records that matched at least one category
    pub matched_records: usize,
}

impl Classification {
    pub fn total_records(&self) -> usize {
        self.results.len()
    }

    /// Records with no category: the complement of the union of matches.
    pub fn uncategorized(&self) -> usize {
        self.total_records() - self.matched_records
    }
}

/// Holds a compiled matcher for every registered dictionary.
pub struct CategoryMatcher {
    compiled: HashMap<(Language, DictionaryVariant), CompiledDictionary>,
    mode: MatchMode,
}

impl CategoryMatcher {
    /// Compile every dictionary in `registry`.
    pub fn new(registry: &DictionaryRegistry, mode: MatchMode) -> Result<Self, regex::Error> {
        let mut compiled = HashMap::new();
        for dictionary in registry.dictionaries() {
            let key = (dictionary.language(), dictionary.variant());
            compiled.insert(key, CompiledDictionary::compile(dictionary, mode)?);
        }
        debug!(dictionaries = compiled.len(), ?mode, "Compiled keyword matchers");
        Ok(Self { compiled, mode })
    }

    pub fn mode(&self) -> MatchMode {
        self.mode
    }

    /// Compiled form of a registered dictionary.
    pub fn get(&self, language: Language, variant: DictionaryVariant) -> Option<&CompiledDictionary> {
        self.compiled.get(&(language, variant))
    }
}
