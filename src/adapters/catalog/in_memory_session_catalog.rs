//! In-Memory Session Catalog Adapter

use async_trait::async_trait;
use std::collections::HashSet;
use std::sync::{Arc, RwLock};

use crate::domain::foundation::SessionName;
use crate::ports::SessionCatalog;

/// Set of known session names (testing/development).
#[derive(Debug, Clone, Default)]
pub struct InMemorySessionCatalog {
    known: Arc<RwLock<HashSet<SessionName>>>,
}

impl InMemorySessionCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Catalog that knows exactly `names`
    pub fn with_sessions<I>(names: I) -> Self
    where
        I: IntoIterator<Item = SessionName>,
    {
        Self {
            known: Arc::new(RwLock::new(names.into_iter().collect())),
        }
    }

    pub fn insert(&self, name: SessionName) {
        if let Ok(mut known) = self.known.write() {
            known.insert(name);
        }
    }

    pub fn forget(&self, name: &SessionName) {
        if let Ok(mut known) = self.known.write() {
            known.remove(name);
        }
    }
}

#[async_trait]
impl SessionCatalog for InMemorySessionCatalog {
    async fn exists(&self, name: &SessionName) -> bool {
        self.known
            .read()
            .map(|known| known.contains(name))
            .unwrap_or(false)
    }
}
