// Shared catalog handle - the single lock guarding all catalog state

use std::sync::Arc;
use tokio::sync::RwLock;

use crate::engine::Catalog;

/// Process-wide catalog handle
///
/// Cloning is cheap; all clones refer to the same catalog. Reads run
/// concurrently, while every write holds the lock for its whole
/// check-then-append sequence so registrations cannot race each other past
/// the capacity or duplicate checks.
#[derive(Debug, Clone, Default)]
pub struct SharedCatalog {
    inner: Arc<RwLock<Catalog>>,
}

impl SharedCatalog {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            inner: Arc::new(RwLock::new(catalog)),
        }
    }

    /// Run `f` with exclusive access and return its result
    pub async fn transact<T, F>(&self, f: F) -> T
    where
        F: FnOnce(&mut Catalog) -> T,
    {
        let mut guard = self.inner.write().await;
        f(&mut *guard)
    }

    /// Run `f` with shared access and return its result
    pub async fn view<T, F>(&self, f: F) -> T
    where
        F: FnOnce(&Catalog) -> T,
    {
        let guard = self.inner.read().await;
        f(&*guard)
    }
}

impl From<Catalog> for SharedCatalog {
    fn from(catalog: Catalog) -> Self {
        Self::new(catalog)
    }
}
