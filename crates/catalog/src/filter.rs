//! Client-side search over the fetched row set.

use crate::product::ProductRow;

/// Rows matching the query, in their original order.
///
/// The query is matched case-insensitively as a substring of the row's
/// concatenated display fields (name, category, status, visibility; missing
/// fields are treated as empty). An empty or whitespace-only query passes
/// every row through unchanged.
pub fn filter_rows<'a>(rows: &'a [ProductRow], query: &str) -> Vec<&'a ProductRow> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return rows.iter().collect();
    }
    rows.iter()
        .filter(|row| haystack(row).contains(&needle))
        .collect()
}

fn haystack(row: &ProductRow) -> String {
    let field = |value: &Option<String>| value.as_deref().unwrap_or("").to_string();
    format!(
        "{} {} {} {}",
        field(&row.name),
        field(&row.category),
        field(&row.status),
        field(&row.visibility)
    )
    .to_lowercase()
}
