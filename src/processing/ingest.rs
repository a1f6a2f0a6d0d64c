//! Delimited-text ingestion with encoding and delimiter recovery.
//!
//! Exports come from spreadsheets and ticketing tools in several locales, so
//! neither the separator nor the encoding is known up front. The ingester
//! walks a fixed fallback chain:
//!
//! 1. UTF-8 with `;`, `,` and tab
//! 2. Windows-1252 with the same delimiters
//! 3. a sniffed delimiter
//!
//! The first parse with more than one column wins.

use std::borrow::Cow;

use csv::{ReaderBuilder, Trim};
use encoding_rs::{UTF_8, WINDOWS_1252};
use tracing::debug;

use super::table::{ColumnHints, ResolvedColumns, Table};
use crate::error::{AnalysisError, Result};

/// Delimiters tried for each encoding, in order.
pub const CANDIDATE_DELIMITERS: &[u8] = &[b';', b',', b'\t'];

/// Delimiters considered by the sniffer.
const SNIFF_DELIMITERS: &[u8] = &[b',', b';', b'\t', b'|', b':'];

/// Lines sampled when sniffing.
const SNIFF_SAMPLE_LINES: usize = 10;

/// Why a single parse attempt was rejected.
#[derive(Debug, thiserror::Error)]
enum AttemptError {
    #[error("{0}")]
    Csv(#[from] csv::Error),
    #[error("expected {expected} fields in line {line}, saw {found}")]
    RaggedRow {
        line: u64,
        expected: usize,
        found: usize,
    },
    #[error("delimiter {0:?} produced a single column")]
    SingleColumn(char),
}

/// Turns raw upload bytes into a [`Table`].
#[derive(Debug, Clone)]
pub struct TabularIngester {
    delimiters: Vec<u8>,
}

impl Default for TabularIngester {
    fn default() -> Self {
        Self::new()
    }
}

impl TabularIngester {
    /// Create an ingester with the standard delimiter list.
    pub fn new() -> Self {
        Self {
            delimiters: CANDIDATE_DELIMITERS.to_vec(),
        }
    }

    /// Parse `bytes` and resolve column roles against `hints`.
    pub fn ingest(&self, bytes: &[u8], hints: &ColumnHints) -> Result<(Table, ResolvedColumns)> {
        let table = self.parse(bytes)?;
        let columns = table.resolve_columns(hints)?;
        debug!(
            rows = table.len(),
            subject = %columns.subject,
            message = %columns.message,
            date = ?columns.date,
            "Resolved column roles"
        );
        Ok((table, columns))
    }

    /// Parse `bytes` into a table, walking the encoding/delimiter chain.
    pub fn parse(&self, bytes: &[u8]) -> Result<Table> {
        let utf8 = decode_utf8(bytes);
        if let Some(text) = &utf8 {
            if let Ok(table) = self.try_delimiters(text) {
                return Ok(table);
            }
        }

        let latin = decode_windows_1252(bytes);
        let mut last_error = match self.try_delimiters(&latin) {
            Ok(table) => {
                debug!("Parsed upload as Windows-1252");
                return Ok(table);
            }
            Err(e) => e,
        };

        let text = utf8.unwrap_or(latin);
        if let Some(delimiter) = sniff_delimiter(&text) {
            debug!(delimiter = %(delimiter as char), "Falling back to sniffed delimiter");
            match parse_with_delimiter(&text, delimiter) {
                Ok(table) => return Ok(table),
                Err(e) => last_error = e,
            }
        }

        Err(AnalysisError::Format(last_error.to_string()))
    }

    fn try_delimiters(&self, text: &str) -> std::result::Result<Table, AttemptError> {
        let mut last_error = AttemptError::SingleColumn(';');
        for &delimiter in &self.delimiters {
            match parse_with_delimiter(text, delimiter) {
                Ok(table) => return Ok(table),
                Err(e) => last_error = e,
            }
        }
        Err(last_error)
    }
}

fn decode_utf8(bytes: &[u8]) -> Option<Cow<'_, str>> {
    let (text, had_errors) = UTF_8.decode_with_bom_removal(bytes);
    if had_errors {
        None
    } else {
        Some(text)
    }
}

fn decode_windows_1252(bytes: &[u8]) -> Cow<'_, str> {
    // Every byte maps to a code point, so this never fails.
    let (text, _) = WINDOWS_1252.decode_without_bom_handling(bytes);
    text
}

/// Parse with a fixed delimiter; accept only tables with more than one column.
fn parse_with_delimiter(text: &str, delimiter: u8) -> std::result::Result<Table, AttemptError> {
    let mut reader = ReaderBuilder::new()
        .delimiter(delimiter)
        .trim(Trim::Headers)
        .flexible(true)
        .from_reader(text.as_bytes());

    let columns: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();
    if columns.len() <= 1 {
        return Err(AttemptError::SingleColumn(delimiter as char));
    }

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result?;
        if record.len() > columns.len() {
            return Err(AttemptError::RaggedRow {
                line: record.position().map(|p| p.line()).unwrap_or_default(),
                expected: columns.len(),
                found: record.len(),
            });
        }
        rows.push(record.iter().map(str::to_string).collect());
    }

    Ok(Table::new(columns, rows))
}

/// Pick the delimiter whose per-line count is highest and most consistent.
fn sniff_delimiter(text: &str) -> Option<u8> {
    let sample: Vec<&str> = text
        .lines()
        .filter(|l| !l.trim().is_empty())
        .take(SNIFF_SAMPLE_LINES)
        .collect();
    if sample.is_empty() {
        return None;
    }

    let mut best: Option<(u8, f32)> = None;
    for &delimiter in SNIFF_DELIMITERS {
        let counts: Vec<f32> = sample
            .iter()
            .map(|line| line.bytes().filter(|&b| b == delimiter).count() as f32)
            .collect();
        let avg = counts.iter().sum::<f32>() / counts.len() as f32;
        if avg == 0.0 {
            continue;
        }
        let variance =
            counts.iter().map(|c| (c - avg).powi(2)).sum::<f32>() / counts.len() as f32;
        let score = avg / (1.0 + variance.sqrt());

        if best.map_or(true, |(_, s)| score > s) {
            best = Some((delimiter, score));
        }
    }

    best.map(|(d, _)| d)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const ROWS: &[[&str; 3]] = &[
        ["2024-01-10", "Tren con retraso", "El tren llegó 20 minutos tarde"],
        ["2024-01-11", "Personal muy amable", "Gracias por la ayuda"],
        ["2024-01-12", "Baños sucios", "No había papel"],
    ];

    fn render(delimiter: char) -> String {
        let mut out = format!("Fecha{d}Asunto{d}Contenido\n", d = delimiter);
        for row in ROWS {
            out.push_str(&row.join(&delimiter.to_string()));
            out.push('\n');
        }
        out
    }

    #[test]
    fn test_delimiters_yield_identical_tables() {
        let ingester = TabularIngester::new();
        let semicolon = ingester.parse(render(';').as_bytes()).unwrap();
        let comma = ingester.parse(render(',').as_bytes()).unwrap();
        let tab = ingester.parse(render('\t').as_bytes()).unwrap();

        assert_eq!(semicolon.columns(), &["Fecha", "Asunto", "Contenido"]);
        assert_eq!(semicolon.len(), 3);
        assert_eq!(semicolon, comma);
        assert_eq!(comma, tab);
    }

    #[test]
    fn test_semicolon_preferred_when_text_has_commas() {
        let content = "Asunto;Contenido\nRetraso, otra vez;Llegó tarde, como siempre\n";
        let table = TabularIngester::new().parse(content.as_bytes()).unwrap();
        assert_eq!(table.columns(), &["Asunto", "Contenido"]);
        assert_eq!(
            table.column("Asunto").unwrap().collect::<Vec<_>>(),
            vec!["Retraso, otra vez"]
        );
    }

    #[test]
    fn test_windows_1252_fallback() {
        // "Señal rota" with ñ as the single byte 0xF1
        let mut bytes = b"Asunto;Contenido\nSe".to_vec();
        bytes.push(0xF1);
        bytes.extend_from_slice(b"al rota;Sin luz\n");

        let table = TabularIngester::new().parse(&bytes).unwrap();
        assert_eq!(
            table.column("Asunto").unwrap().collect::<Vec<_>>(),
            vec!["Señal rota"]
        );
    }

    #[test]
    fn test_utf8_bom_is_stripped() {
        let content = "\u{FEFF}Asunto,Contenido\nhola,mundo\n";
        let table = TabularIngester::new().parse(content.as_bytes()).unwrap();
        assert_eq!(table.columns()[0], "Asunto");
    }

    #[test]
    fn test_sniffs_pipe_delimiter() {
        let content = "Asunto|Contenido\nRetraso|Llegó tarde\nLimpieza|Sucio\n";
        let table = TabularIngester::new().parse(content.as_bytes()).unwrap();
        assert_eq!(table.columns(), &["Asunto", "Contenido"]);
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_single_column_is_format_error() {
        let content = "solo\nuna\ncolumna\n";
        let err = TabularIngester::new().parse(content.as_bytes()).unwrap_err();
        assert!(matches!(err, AnalysisError::Format(_)));
    }

    #[test]
    fn test_empty_input_is_format_error() {
        let err = TabularIngester::new().parse(b"").unwrap_err();
        assert!(matches!(err, AnalysisError::Format(_)));
    }

    #[test]
    fn test_ragged_rows_reject_delimiter() {
        // Under ';' the second row has too many fields, so ',' is used instead.
        let content = "Asunto,Contenido;x\na;b;c,d\n";
        let table = TabularIngester::new().parse(content.as_bytes()).unwrap();
        assert_eq!(table.columns(), &["Asunto", "Contenido;x"]);
    }

    #[test]
    fn test_ingest_resolves_columns() {
        let content = "Date,Subject,Message\n2024-01-01,Door broken,It does not close\n";
        let (table, columns) = TabularIngester::new()
            .ingest(content.as_bytes(), &ColumnHints::default())
            .unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(columns.subject, "Subject");
        assert_eq!(columns.message, "Message");
        assert_eq!(columns.date.as_deref(), Some("Date"));
    }

    #[test]
    fn test_ingest_missing_columns() {
        let content = "a,b\n1,2\n";
        let err = TabularIngester::new()
            .ingest(content.as_bytes(), &ColumnHints::default())
            .unwrap_err();
        assert!(matches!(err, AnalysisError::MissingColumns { .. }));
    }
}
