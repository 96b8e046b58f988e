use crate::domain::types;

/// Read-only access to the reference tables the allocator decides against.
pub trait Catalog {
    fn species(&self, id: &str) -> Option<&types::Species>;

    /// All enclosures, in the order results are reported.
    fn enclosures(&self) -> &[types::Enclosure];
}

impl<C: Catalog + ?Sized> Catalog for &C {
    fn species(&self, id: &str) -> Option<&types::Species> {
        (**self).species(id)
    }

    fn enclosures(&self) -> &[types::Enclosure] {
        (**self).enclosures()
    }
}
