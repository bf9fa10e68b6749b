/// Indices of the options matching `query`, in original order.
///
/// Matching is a case-insensitive substring test. An empty query matches
/// everything.
pub fn filter_options(options: &[String], query: &str) -> Vec<usize> {
    if query.is_empty() {
        return (0..options.len()).collect();
    }

    let query_lower = query.to_lowercase();
    options
        .iter()
        .enumerate()
        .filter(|(_, option)| option.to_lowercase().contains(&query_lower))
        .map(|(idx, _)| idx)
        .collect()
}
