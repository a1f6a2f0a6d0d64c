//! Keyword dictionaries and their selection rules.
//!
//! Two parallel families exist: a compact one with broad terms, and an
//! extended one with longer, more specific lists (plus the `delays` and
//! `user` categories). Dictionaries are immutable once the registry is built
//! and are shared read-only across requests.

mod compact;
mod extended;

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::{AnalysisError, Result};

/// Supported dictionary languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Es,
    En,
    De,
    Fr,
}

impl Language {
    /// Parse an ISO 639-1 code, ignoring case and surrounding whitespace.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_lowercase().as_str() {
            "es" => Some(Language::Es),
            "en" => Some(Language::En),
            "de" => Some(Language::De),
            "fr" => Some(Language::Fr),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Es => "es",
            Language::En => "en",
            Language::De => "de",
            Language::Fr => "fr",
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which dictionary family to classify with.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DictionaryVariant {
    /// Fewer, broader terms per category
    #[default]
    Compact,
    /// Larger, more specific term lists
    Extended,
}

impl DictionaryVariant {
    /// Map the upload form's boolean `type` field: `true` selects compact.
    pub fn from_type_flag(flag: bool) -> Self {
        if flag {
            DictionaryVariant::Compact
        } else {
            DictionaryVariant::Extended
        }
    }
}

impl std::fmt::Display for DictionaryVariant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DictionaryVariant::Compact => write!(f, "compact"),
            DictionaryVariant::Extended => write!(f, "extended"),
        }
    }
}

/// Thematic complaint category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Punctuality,
    Delays,
    Hygiene,
    Comfort,
    Infrastructure,
    Service,
    User,
    /// Marker for records that matched nothing
    #[serde(rename = "sin_categoria")]
    Uncategorized,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Punctuality => "punctuality",
            Category::Delays => "delays",
            Category::Hygiene => "hygiene",
            Category::Comfort => "comfort",
            Category::Infrastructure => "infrastructure",
            Category::Service => "service",
            Category::User => "user",
            Category::Uncategorized => "sin_categoria",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raw term table as written in the source files.
pub(crate) type TermTable = &'static [(Category, &'static [&'static str])];

/// Ordered category → terms mapping for one language and variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryDictionary {
    language: Language,
    variant: DictionaryVariant,
    categories: Vec<(Category, Vec<String>)>,
}

impl CategoryDictionary {
    pub fn new(
        language: Language,
        variant: DictionaryVariant,
        categories: Vec<(Category, Vec<String>)>,
    ) -> Self {
        Self {
            language,
            variant,
            categories,
        }
    }

    fn from_table(language: Language, variant: DictionaryVariant, table: TermTable) -> Self {
        let categories = table
            .iter()
            .map(|(category, terms)| (*category, terms.iter().map(|t| t.to_string()).collect()))
            .collect();
        Self::new(language, variant, categories)
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn variant(&self) -> DictionaryVariant {
        self.variant
    }

    /// Categories with their terms, in declaration order.
    pub fn categories(&self) -> &[(Category, Vec<String>)] {
        &self.categories
    }

    /// Terms for one category.
    pub fn terms(&self, category: Category) -> Option<&[String]> {
        self.categories
            .iter()
            .find(|(c, _)| *c == category)
            .map(|(_, terms)| terms.as_slice())
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

lazy_static::lazy_static! {
    /// Every dictionary shipped with the service.
    static ref BUILTIN_DICTIONARIES: Vec<CategoryDictionary> = {
        let mut dictionaries = Vec::new();
        for (language, table) in compact::TABLES {
            dictionaries.push(CategoryDictionary::from_table(*language, DictionaryVariant::Compact, *table));
        }
        for (language, table) in extended::TABLES {
            dictionaries.push(CategoryDictionary::from_table(*language, DictionaryVariant::Extended, *table));
        }
        dictionaries
    };
}

/// All dictionaries, keyed by variant then language.
#[derive(Debug, Clone)]
pub struct DictionaryRegistry {
    families: HashMap<DictionaryVariant, HashMap<Language, CategoryDictionary>>,
    default_language: Language,
    fallback_language: Language,
}

impl DictionaryRegistry {
    /// Create a registry with no dictionaries.
    pub fn empty(default_language: Language, fallback_language: Language) -> Self {
        Self {
            families: HashMap::new(),
            default_language,
            fallback_language,
        }
    }

    /// Create a registry holding the built-in compact and extended families.
    pub fn builtin(default_language: Language, fallback_language: Language) -> Self {
        let mut registry = Self::empty(default_language, fallback_language);
        for dictionary in BUILTIN_DICTIONARIES.iter() {
            registry.insert(dictionary.clone());
        }
        registry
    }

    /// Add or replace a dictionary.
    pub fn insert(&mut self, dictionary: CategoryDictionary) {
        self.families
            .entry(dictionary.variant)
            .or_default()
            .insert(dictionary.language, dictionary);
    }

    pub fn default_language(&self) -> Language {
        self.default_language
    }

    pub fn fallback_language(&self) -> Language {
        self.fallback_language
    }

    /// Iterate over every registered dictionary.
    pub fn dictionaries(&self) -> impl Iterator<Item = &CategoryDictionary> {
        self.families.values().flat_map(|family| family.values())
    }

    /// Whether any family has a dictionary for `language`.
    pub fn knows(&self, language: Language) -> bool {
        self.families.values().any(|family| family.contains_key(&language))
    }

    fn get(&self, variant: DictionaryVariant, language: Language) -> Option<&CategoryDictionary> {
        self.families.get(&variant)?.get(&language)
    }

    /// Pick the dictionary for a language code and variant.
    ///
    /// A language missing from the selected family only falls back to the
    /// fallback language when it is the default language; any other miss is
    /// reported as unsupported.
    pub fn resolve(&self, code: &str, variant: DictionaryVariant) -> Result<&CategoryDictionary> {
        let language = Language::from_code(code)
            .filter(|l| self.knows(*l) || *l == self.default_language)
            .ok_or_else(|| AnalysisError::UnsupportedLanguage(code.to_string()))?;

        let dictionary = match self.get(variant, language) {
            Some(dictionary) => dictionary,
            None if language == self.default_language => self
                .get(variant, self.fallback_language)
                .ok_or_else(|| AnalysisError::EmptyDictionary {
                    language: language.to_string(),
                    variant,
                })?,
            None => return Err(AnalysisError::UnsupportedLanguage(code.to_string())),
        };

        if dictionary.is_empty() {
            return Err(AnalysisError::EmptyDictionary {
                language: dictionary.language.to_string(),
                variant,
            });
        }

        Ok(dictionary)
    }
}

impl Default for DictionaryRegistry {
    fn default() -> Self {
        Self::builtin(Language::Es, Language::En)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn custom(language: Language, variant: DictionaryVariant, categories: Vec<(Category, Vec<&str>)>) -> CategoryDictionary {
        CategoryDictionary::new(
            language,
            variant,
            categories
                .into_iter()
                .map(|(c, terms)| (c, terms.into_iter().map(String::from).collect()))
                .collect(),
        )
    }

    #[test]
    fn test_builtin_families() {
        let registry = DictionaryRegistry::default();
        for code in ["es", "en", "de", "fr"] {
            assert!(registry.resolve(code, DictionaryVariant::Compact).is_ok(), "{}", code);
        }
        for code in ["es", "en", "de"] {
            assert!(registry.resolve(code, DictionaryVariant::Extended).is_ok(), "{}", code);
        }
    }

    #[test]
    fn test_extended_has_extra_categories() {
        let registry = DictionaryRegistry::default();
        let compact = registry.resolve("es", DictionaryVariant::Compact).unwrap();
        let extended = registry.resolve("es", DictionaryVariant::Extended).unwrap();

        assert!(compact.terms(Category::Delays).is_none());
        assert!(compact.terms(Category::User).is_none());
        assert!(extended.terms(Category::Delays).is_some());
        assert!(extended.terms(Category::User).is_some());
    }

    #[test]
    fn test_compact_spanish_terms() {
        let registry = DictionaryRegistry::default();
        let dict = registry.resolve("es", DictionaryVariant::Compact).unwrap();
        let punctuality = dict.terms(Category::Punctuality).unwrap();
        assert!(punctuality.iter().any(|t| t == "retraso"));
        let service = dict.terms(Category::Service).unwrap();
        assert!(service.iter().any(|t| t == "amable"));
    }

    #[test]
    fn test_extended_french_is_unsupported() {
        let registry = DictionaryRegistry::default();
        let err = registry.resolve("fr", DictionaryVariant::Extended).unwrap_err();
        assert!(matches!(err, AnalysisError::UnsupportedLanguage(code) if code == "fr"));
    }

    #[test]
    fn test_unknown_language_is_unsupported() {
        let registry = DictionaryRegistry::default();
        assert!(matches!(
            registry.resolve("pt", DictionaryVariant::Compact),
            Err(AnalysisError::UnsupportedLanguage(_))
        ));
    }

    #[test]
    fn test_language_code_is_case_insensitive() {
        let registry = DictionaryRegistry::default();
        let dict = registry.resolve(" DE ", DictionaryVariant::Compact).unwrap();
        assert_eq!(dict.language(), Language::De);
    }

    #[test]
    fn test_default_language_falls_back() {
        // French as default: missing from the extended family, so English is used.
        let registry = DictionaryRegistry::builtin(Language::Fr, Language::En);
        let dict = registry.resolve("fr", DictionaryVariant::Extended).unwrap();
        assert_eq!(dict.language(), Language::En);
        assert_eq!(dict.variant(), DictionaryVariant::Extended);
    }

    #[test]
    fn test_empty_dictionary() {
        let mut registry = DictionaryRegistry::empty(Language::Es, Language::En);
        registry.insert(custom(Language::Es, DictionaryVariant::Compact, vec![]));
        let err = registry.resolve("es", DictionaryVariant::Compact).unwrap_err();
        assert!(matches!(err, AnalysisError::EmptyDictionary { .. }));
    }

    #[test]
    fn test_default_language_without_any_dictionary() {
        let registry = DictionaryRegistry::empty(Language::Es, Language::En);
        let err = registry.resolve("es", DictionaryVariant::Compact).unwrap_err();
        assert!(matches!(err, AnalysisError::EmptyDictionary { .. }));
    }

    #[test]
    fn test_variant_from_type_flag() {
        assert_eq!(DictionaryVariant::from_type_flag(true), DictionaryVariant::Compact);
        assert_eq!(DictionaryVariant::from_type_flag(false), DictionaryVariant::Extended);
    }

    #[test]
    fn test_category_serialization() {
        assert_eq!(serde_json::to_string(&Category::Punctuality).unwrap(), "\"punctuality\"");
        assert_eq!(serde_json::to_string(&Category::Uncategorized).unwrap(), "\"sin_categoria\"");
    }
}
