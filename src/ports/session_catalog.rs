//! Session Catalog Port - answers whether a saved session still exists.

use async_trait::async_trait;

use crate::domain::foundation::SessionName;

/// Validity oracle for session names.
///
/// Implementations check that a loadable configuration exists, typically by
/// opening it and closing it again. Any failure to open counts as "does not
/// exist"; this port has no error channel.
#[async_trait]
pub trait SessionCatalog: Send + Sync {
    async fn exists(&self, name: &SessionName) -> bool;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    struct FixedCatalog(HashSet<String>);

    #[async_trait]
    impl SessionCatalog for FixedCatalog {
        async fn exists(&self, name: &SessionName) -> bool {
            self.0.contains(name.as_str())
        }
    }

    #[tokio::test]
    async fn catalog_matches_exact_names() {
        let catalog = FixedCatalog(["web".to_string()].into_iter().collect());
        assert!(catalog.exists(&SessionName::new("web").unwrap()).await);
        assert!(!catalog.exists(&SessionName::new("Web").unwrap()).await);
    }

    #[test]
    fn session_catalog_trait_is_send_sync() {
        fn assert_send_sync<T: Send + Sync + ?Sized>() {}
        assert_send_sync::<dyn SessionCatalog>();
    }
}
