//! Ordering rules shared by the session list store adapters.

use crate::domain::foundation::SessionName;

/// Moves `name` to the front, dropping any older copy, then trims the tail
/// to `retention` entries when a bound is set.
pub(crate) fn promote(list: &mut Vec<SessionName>, name: &SessionName, retention: Option<usize>) {
    list.retain(|existing| existing != name);
    list.insert(0, name.clone());
    if let Some(max) = retention {
        list.truncate(max);
    }
}

/// Drops every exact match of `name`. Returns how many were removed.
pub(crate) fn remove_all(list: &mut Vec<SessionName>, name: &SessionName) -> usize {
    let before = list.len();
    list.retain(|existing| existing != name);
    before - list.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(items: &[&str]) -> Vec<SessionName> {
        items.iter().map(|s| SessionName::new(*s).unwrap()).collect()
    }

    #[test]
    fn promote_inserts_new_name_at_front() {
        let mut list = names(&["a", "b"]);
        promote(&mut list, &SessionName::new("c").unwrap(), None);
        assert_eq!(list, names(&["c", "a", "b"]));
    }

    #[test]
    fn promote_moves_existing_name_without_duplicating() {
        let mut list = names(&["a", "b", "c"]);
        promote(&mut list, &SessionName::new("c").unwrap(), None);
        assert_eq!(list, names(&["c", "a", "b"]));
    }

    #[test]
    fn promote_trims_to_retention() {
        let mut list = names(&["a", "b", "c"]);
        promote(&mut list, &SessionName::new("d").unwrap(), Some(2));
        assert_eq!(list, names(&["d", "a"]));
    }

    #[test]
    fn remove_all_only_drops_exact_matches() {
        let mut list = names(&["a", "A", "a "]);
        let removed = remove_all(&mut list, &SessionName::new("a").unwrap());
        assert_eq!(removed, 1);
        assert_eq!(list, names(&["A", "a "]));
    }

    #[test]
    fn remove_all_of_absent_name_is_noop() {
        let mut list = names(&["a"]);
        assert_eq!(remove_all(&mut list, &SessionName::new("z").unwrap()), 0);
        assert_eq!(list, names(&["a"]));
    }
}
