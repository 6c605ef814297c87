//! Stable key ordering shared by the library stores

/// Sort `keys` ascending by an attribute resolved per key.
///
/// The attribute is resolved at most once per key. Keys that do not
/// resolve sort before keys that do, and ties keep their input order
/// (the underlying sort is stable).
pub(crate) fn by_attribute<A, F>(keys: &mut [String], resolve: F)
where
    A: Ord,
    F: FnMut(&String) -> Option<A>,
{
    keys.sort_by_cached_key(resolve);
}

/// Case-insensitive ordering key for names and titles
pub(crate) fn text_key(value: &str) -> String {
    value.to_lowercase()
}
