//! Pluralization utilities.

/// Return "s" suffix for plural counts
///
/// # Examples
///
/// - `plural_s(0)` -> `"s"` (0 entries)
/// - `plural_s(1)` -> `""` (1 entry)
/// - `plural_s(5)` -> `"s"` (5 entries)
#[inline]
pub fn plural_s(n: usize) -> &'static str {
    if n == 1 { "" } else { "s" }
}

/// Format count with noun, handling pluralization
///
/// # Examples
///
/// - `plural_count(0, "shard")` -> `"0 shards"`
/// - `plural_count(1, "shard")` -> `"1 shard"`
#[inline]
pub fn plural_count(count: usize, noun: &str) -> String {
    format!("{} {}{}", count, noun, plural_s(count))
}
