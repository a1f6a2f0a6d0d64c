//! Result aggregation and pagination.

use crate::dictionary::Category;
use crate::matcher::{Classification, MatchResult};
use crate::types::{CategorySummary, ComplaintRecord, Pagination, RecordDetail};

/// Shown as the date when the table had no date column.
pub const NO_DATE: &str = "N/A";

/// Number of pages needed for `total_items`; `page_size` must be non-zero.
pub fn total_pages(total_items: usize, page_size: usize) -> usize {
    total_items.div_ceil(page_size)
}

/// Index range of a 1-based page, clamped to `len`.
///
/// Page 0 and pages past the end produce an empty range.
pub fn page_bounds(len: usize, page: usize, page_size: usize) -> std::ops::Range<usize> {
    if page == 0 {
        return 0..0;
    }
    let start = (page - 1).saturating_mul(page_size).min(len);
    let end = start.saturating_add(page_size).min(len);
    start..end
}

/// Build the pagination block.
pub fn paginate(total_items: usize, page: usize, page_size: usize) -> Pagination {
    Pagination {
        current_page: page,
        items_per_page: page_size,
        total_pages: total_pages(total_items, page_size),
        total_items,
    }
}

/// Category statistics sorted by descending mentions.
///
/// Ties keep dictionary order. The uncategorized bucket comes last and only
/// when non-zero.
pub fn summarize(classification: &Classification) -> Vec<CategorySummary> {
    let mut summary: Vec<CategorySummary> = classification
        .category_counts
        .iter()
        .map(|(category, count)| CategorySummary {
            category: *category,
            total_mentions: *count,
        })
        .collect();

    // Stable sort keeps dictionary order among equal counts.
    summary.sort_by(|a, b| b.total_mentions.cmp(&a.total_mentions));

    let uncategorized = classification.uncategorized();
    if uncategorized > 0 {
        summary.push(CategorySummary {
            category: Category::Uncategorized,
            total_mentions: uncategorized,
        });
    }

    summary
}

/// Detail rows for one page of records.
pub fn page_details(
    records: &[ComplaintRecord],
    results: &[MatchResult],
    page: usize,
    page_size: usize,
) -> Vec<RecordDetail> {
    let range = page_bounds(records.len().min(results.len()), page, page_size);

    records[range.clone()]
        .iter()
        .zip(&results[range])
        .map(|(record, result)| RecordDetail {
            row_id: record.row_id,
            date: record.date.clone().unwrap_or_else(|| NO_DATE.to_string()),
            subject: record.subject.clone(),
            preview: record.message.clone(),
            detected_categories: result.detected_categories.clone(),
            keywords_found: result.keywords_found.clone(),
        })
        .collect()
}
