use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc,
};

use crate::{domain::types, port::catalog::Catalog};

/// Wraps a catalog and counts how often its enclosure table is read.
pub struct CountingCatalog<C: Catalog> {
    pub scans: Arc<AtomicUsize>,
    inner: C,
}

impl<C: Catalog> CountingCatalog<C> {
    pub fn new(inner: C) -> Self {
        CountingCatalog {
            scans: Arc::new(AtomicUsize::new(0)),
            inner,
        }
    }
}

impl<C: Catalog> Catalog for CountingCatalog<C> {
    fn species(&self, id: &str) -> Option<&types::Species> {
        self.inner.species(id)
    }

    fn enclosures(&self) -> &[types::Enclosure] {
        self.scans.fetch_add(1, Ordering::SeqCst);
        self.inner.enclosures()
    }
}
