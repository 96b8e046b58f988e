//! The placement rules.
//!
//! Given a species and a group size, decides which enclosures could take the whole group in.
//! Reference data is only read through the `Catalog` port, never written, so an `Allocator`
//! can be shared freely and gives the same answer no matter how often it is asked.

use thiserror::Error;

use crate::port::catalog::Catalog;

use super::types::{Assessment, Diet, Enclosure, Space, Species, ViableEnclosure};

pub struct Allocator<C: Catalog> {
    catalog: C,
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AllocationError {
    #[error("Invalid animal")]
    InvalidSpecies,

    #[error("Invalid quantity")]
    InvalidQuantity,

    #[error("No viable enclosure")]
    NoViableEnclosure,
}

impl<C: Catalog> Allocator<C> {
    pub fn new(catalog: C) -> Self {
        Self { catalog }
    }

    /// Enclosures that can take `quantity` animals of `species`, in catalog order.
    pub fn evaluate(
        &self,
        species: &str,
        quantity: i64,
    ) -> Result<Vec<ViableEnclosure>, AllocationError> {
        let _span = tracing::info_span!("evaluate", species, quantity).entered();

        let viable: Vec<_> = self
            .assess(species, quantity)?
            .iter()
            .filter_map(Assessment::viable)
            .collect();

        if viable.is_empty() {
            log::info!("no enclosure can take {quantity} x {species}");
            return Err(AllocationError::NoViableEnclosure);
        }

        log::info!(
            "{quantity} x {species} fits in enclosures {:?}",
            viable.iter().map(|v| v.id).collect::<Vec<_>>()
        );
        Ok(viable)
    }

    /// Checks every enclosure against every rule, viable or not.
    pub fn assess(
        &self,
        species_id: &str,
        quantity: i64,
    ) -> Result<Vec<Assessment>, AllocationError> {
        let species = self
            .catalog
            .species(species_id)
            .ok_or(AllocationError::InvalidSpecies)?;
        let quantity = validate_quantity(quantity)?;
        let required = species.body_size.saturating_mul(quantity);

        Ok(self
            .catalog
            .enclosures()
            .iter()
            .map(|enclosure| self.assess_enclosure(enclosure, species_id, species, required))
            .collect())
    }

    fn assess_enclosure(
        &self,
        enclosure: &Enclosure,
        species_id: &str,
        species: &Species,
        required_space: Space,
    ) -> Assessment {
        let occupied_space = self.occupied_space(enclosure, species_id);
        let free_space = enclosure
            .capacity
            .checked_sub(occupied_space)
            .and_then(|left| left.checked_sub(required_space));

        let assessment = Assessment {
            id: enclosure.id,
            capacity: enclosure.capacity,
            biome_compatible: biome_compatible(&enclosure.biome, &species.biomes),
            diet_compatible: self.diet_compatible(enclosure, species.diet),
            occupied_space,
            required_space,
            free_space,
        };

        if !assessment.is_viable() {
            log::debug!(
                "enclosure {} rejected for {species_id}: biome ok {}, diet ok {}, fits {}",
                enclosure.id,
                assessment.biome_compatible,
                assessment.diet_compatible,
                free_space.is_some()
            );
        }

        assessment
    }

    /// Space taken by the current occupants, plus one unit if `species` would not be alone.
    fn occupied_space(&self, enclosure: &Enclosure, species: &str) -> Space {
        let occupied = enclosure
            .occupants
            .iter()
            .map(|(occupant, count)| match self.catalog.species(occupant) {
                Some(traits) => traits.body_size.saturating_mul(*count as Space),
                None => {
                    log::warn!("enclosure {} hosts unknown species {occupant}", enclosure.id);
                    0
                }
            })
            .fold(0, Space::saturating_add);

        // Flat, however many other species there are.
        if enclosure.hosts_other_than(species) {
            occupied.saturating_add(1)
        } else {
            occupied
        }
    }

    fn diet_compatible(&self, enclosure: &Enclosure, diet: Diet) -> bool {
        enclosure
            .occupants
            .iter()
            .all(|(occupant, _)| match self.catalog.species(occupant) {
                Some(traits) => traits.diet == diet,
                None => false,
            })
    }
}

/// The enclosure's tag may be compound ("savana e rio"), so this is a substring match.
fn biome_compatible(enclosure_biome: &str, habitable: &[String]) -> bool {
    habitable
        .iter()
        .any(|biome| enclosure_biome.contains(biome.as_str()))
}

fn validate_quantity(quantity: i64) -> Result<Space, AllocationError> {
    if quantity <= 0 {
        return Err(AllocationError::InvalidQuantity);
    }
    Ok(quantity as Space)
}
