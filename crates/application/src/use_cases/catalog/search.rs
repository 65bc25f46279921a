use fertibase_domain::CatalogRecord;

/// Case-insensitive substring filter over each record's search fields.
///
/// An empty term returns the input unchanged. The input is never mutated.
pub fn search<T: CatalogRecord>(items: &[T], term: &str) -> Vec<T> {
    if term.is_empty() {
        return items.to_vec();
    }

    let needle = term.to_lowercase();
    items
        .iter()
        .filter(|item| item.matches(&needle))
        .cloned()
        .collect()
}
