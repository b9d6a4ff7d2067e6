//! The bounded list handed to the sink in one replace.

use serde::{Deserialize, Serialize};

use super::ShortcutDescriptor;

/// Hard cap on entries in the recent sessions category, regardless of how
/// many slots the platform offers.
pub const MAX_JUMPLIST_ITEMS: usize = 30;

/// Label of the only category this crate ever writes.
pub const RECENT_SESSIONS_CATEGORY: &str = "Recent Sessions";

/// Number of entries a rebuild may accept given the platform's slot maximum.
pub fn entry_budget(platform_max_slots: usize) -> usize {
    MAX_JUMPLIST_ITEMS.min(platform_max_slots)
}

/// One labelled category of shortcuts, in display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JumpListCommit {
    pub category: String,
    pub entries: Vec<ShortcutDescriptor>,
}

impl JumpListCommit {
    /// Empty "Recent Sessions" category.
    pub fn recent_sessions() -> Self {
        Self {
            category: RECENT_SESSIONS_CATEGORY.to_string(),
            entries: Vec::new(),
        }
    }

    pub fn push(&mut self, descriptor: ShortcutDescriptor) {
        self.entries.push(descriptor);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entry titles in display order.
    pub fn titles(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.title.as_str()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::SessionName;
    use std::path::Path;

    #[test]
    fn entry_budget_is_capped_by_both_limits() {
        assert_eq!(entry_budget(10), 10);
        assert_eq!(entry_budget(30), 30);
        assert_eq!(entry_budget(100), MAX_JUMPLIST_ITEMS);
        assert_eq!(entry_budget(0), 0);
    }

    #[test]
    fn recent_sessions_starts_empty_with_fixed_label() {
        let commit = JumpListCommit::recent_sessions();
        assert_eq!(commit.category, "Recent Sessions");
        assert!(commit.is_empty());
    }

    #[test]
    fn titles_follow_push_order() {
        let exe = Path::new("/opt/term/term");
        let mut commit = JumpListCommit::recent_sessions();
        for n in ["b", "a", "c"] {
            let name = SessionName::new(n).unwrap();
            commit.push(ShortcutDescriptor::for_session(exe, &name));
        }
        assert_eq!(commit.titles(), vec!["b", "a", "c"]);
        assert_eq!(commit.len(), 3);
    }
}
