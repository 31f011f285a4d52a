//! Set difference between described and referenced columns.

use std::collections::BTreeSet;

/// Columns present in the table description but never referenced in LookML.
/// Pure set difference: the result is always a subset of `schema_keys` and
/// disjoint from `referenced`.
pub fn pending(schema_keys: &BTreeSet<String>, referenced: &BTreeSet<String>) -> BTreeSet<String> {
    schema_keys.difference(referenced).cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(names: &[&str]) -> BTreeSet<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn unreferenced_columns_remain() {
        let remaining = pending(&set(&["a", "b", "c"]), &set(&["a", "b"]));
        assert_eq!(remaining, set(&["c"]));
    }

    #[test]
    fn references_outside_the_schema_are_ignored() {
        let remaining = pending(&set(&["a"]), &set(&["ghost"]));
        assert_eq!(remaining, set(&["a"]));
    }

    #[test]
    fn empty_schema_yields_empty_pending() {
        assert!(pending(&BTreeSet::new(), &set(&["a"])).is_empty());
    }

    #[test]
    fn no_references_leaves_all_columns_pending() {
        let keys = set(&["a", "b"]);
        assert_eq!(pending(&keys, &BTreeSet::new()), keys);
    }
}
