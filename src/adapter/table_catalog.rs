use std::collections::{HashMap, HashSet};

use thiserror::Error;

use crate::{
    domain::types::{Enclosure, EnclosureId, Space, Species, SpeciesId},
    port::catalog::Catalog,
};

/// Reference tables held in memory, checked for consistency once on construction.
#[derive(Debug, Clone)]
pub struct TableCatalog {
    species: HashMap<SpeciesId, Species>,
    enclosures: Vec<Enclosure>,
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum CatalogError {
    #[error("species {0} has a body size of zero")]
    ZeroBodySize(SpeciesId),

    #[error("species {0} has no habitable biome")]
    NoBiomes(SpeciesId),

    #[error("enclosure {0} has no capacity")]
    ZeroCapacity(EnclosureId),

    #[error("enclosure {0} is listed more than once")]
    DuplicateEnclosure(EnclosureId),

    #[error("enclosure {enclosure} hosts unknown species {species}")]
    UnknownOccupant {
        enclosure: EnclosureId,
        species: SpeciesId,
    },

    #[error("enclosure {enclosure} lists zero animals of {species}")]
    EmptyOccupant {
        enclosure: EnclosureId,
        species: SpeciesId,
    },

    #[error("enclosure {enclosure} is over capacity: {occupied} of {capacity} used")]
    OverCapacity {
        enclosure: EnclosureId,
        occupied: Space,
        capacity: Space,
    },
}

impl TableCatalog {
    pub fn new(
        species: HashMap<SpeciesId, Species>,
        enclosures: Vec<Enclosure>,
    ) -> Result<Self, CatalogError> {
        for (id, traits) in &species {
            if traits.body_size == 0 {
                return Err(CatalogError::ZeroBodySize(id.clone()));
            }
            if traits.biomes.is_empty() {
                return Err(CatalogError::NoBiomes(id.clone()));
            }
        }

        let mut seen = HashSet::new();
        for enclosure in &enclosures {
            if !seen.insert(enclosure.id) {
                return Err(CatalogError::DuplicateEnclosure(enclosure.id));
            }
            if enclosure.capacity == 0 {
                return Err(CatalogError::ZeroCapacity(enclosure.id));
            }

            let mut occupied: Space = 0;
            let mut distinct = HashSet::new();
            for (occupant, count) in &enclosure.occupants {
                let traits = species
                    .get(occupant)
                    .ok_or_else(|| CatalogError::UnknownOccupant {
                        enclosure: enclosure.id,
                        species: occupant.clone(),
                    })?;
                if *count == 0 {
                    return Err(CatalogError::EmptyOccupant {
                        enclosure: enclosure.id,
                        species: occupant.clone(),
                    });
                }
                occupied = occupied.saturating_add(traits.body_size.saturating_mul(*count as Space));
                distinct.insert(occupant.as_str());
            }

            // Enclosures already shared by several species pay the mixing tax.
            if distinct.len() > 1 {
                occupied = occupied.saturating_add(1);
            }

            if occupied > enclosure.capacity {
                return Err(CatalogError::OverCapacity {
                    enclosure: enclosure.id,
                    occupied,
                    capacity: enclosure.capacity,
                });
            }
        }

        log::debug!(
            "catalog ready: {} species, {} enclosures",
            species.len(),
            enclosures.len()
        );

        Ok(Self {
            species,
            enclosures,
        })
    }
}

impl Catalog for TableCatalog {
    fn species(&self, id: &str) -> Option<&Species> {
        self.species.get(id)
    }

    fn enclosures(&self) -> &[Enclosure] {
        &self.enclosures
    }
}
