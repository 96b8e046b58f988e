//! Finds the zoo enclosures that can take in a new group of animals.
//!
//! An enclosure qualifies when its biome suits the species, nobody inside would eat
//! (or be eaten by) the newcomers, and the whole group fits in the remaining space.

pub mod adapter;
pub mod domain;
pub mod port;

pub use adapter::{
    builtin_catalog::builtin,
    json_catalog::parse_catalog,
    json_messages::{handle_request, render, Request},
    table_catalog::{CatalogError, TableCatalog},
};
pub use domain::{
    types::{Assessment, Diet, Enclosure, Species, ViableEnclosure},
    AllocationError, Allocator,
};
pub use port::catalog::Catalog;

/// Evaluates a request against the built-in catalog.
pub fn evaluate(species: &str, quantity: i64) -> Result<Vec<ViableEnclosure>, AllocationError> {
    Allocator::new(builtin()).evaluate(species, quantity)
}
