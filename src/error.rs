//! Error taxonomy for the analysis pipeline.
//!
//! Every variant is request-scoped: it describes why one upload could not be
//! classified and is reported back to the client, never treated as fatal.

use thiserror::Error;

use crate::dictionary::DictionaryVariant;
use crate::processing::ColumnRole;

/// Errors produced while analyzing a complaint export.
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// The language is absent from both dictionary families.
    #[error("unsupported language: '{0}'")]
    UnsupportedLanguage(String),

    /// No encoding/delimiter combination produced more than one column.
    #[error("could not read the file as a delimited table ({0}); check the format and separators")]
    Format(String),

    /// Subject or message column could not be resolved.
    #[error(
        "missing required columns: {}; columns found: [{}]",
        join_roles(.missing),
        .available.join(", ")
    )]
    MissingColumns {
        missing: Vec<ColumnRole>,
        available: Vec<String>,
    },

    /// The resolved dictionary has no categories.
    #[error("no keywords configured for language '{language}' ({variant} dictionary)")]
    EmptyDictionary {
        language: String,
        variant: DictionaryVariant,
    },

    /// Malformed request parameters.
    #[error("invalid request: {0}")]
    InvalidRequest(String),
}

fn join_roles(roles: &[ColumnRole]) -> String {
    roles
        .iter()
        .map(|r| r.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

pub type Result<T> = std::result::Result<T, AnalysisError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_columns_message_lists_roles_and_columns() {
        let err = AnalysisError::MissingColumns {
            missing: vec![ColumnRole::Message, ColumnRole::Subject],
            available: vec!["id".to_string(), "texto".to_string()],
        };
        let msg = err.to_string();
        assert!(msg.contains("message"));
        assert!(msg.contains("subject"));
        assert!(msg.contains("[id, texto]"));
    }

    #[test]
    fn test_empty_dictionary_message() {
        let err = AnalysisError::EmptyDictionary {
            language: "de".to_string(),
            variant: DictionaryVariant::Extended,
        };
        assert_eq!(
            err.to_string(),
            "no keywords configured for language 'de' (extended dictionary)"
        );
    }
}
