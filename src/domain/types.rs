use std::fmt;

#[cfg(test)]
use proptest_derive::Arbitrary;

pub type SpeciesId = String;

/// Abstract area units.
pub type Space = u64;

pub type Population = u32;

pub type EnclosureId = u32;

#[derive(Eq, PartialEq, Debug, Clone, Copy, Hash)]
#[cfg_attr(test, derive(Arbitrary))]
pub enum Diet {
    Carnivore,
    Herbivore,
}

#[derive(PartialEq, Eq, Debug, Clone)]
pub struct Species {
    pub body_size: Space,
    pub biomes: Vec<String>,
    pub diet: Diet,
}

impl Species {
    pub fn new(body_size: Space, biomes: &[&str], diet: Diet) -> Self {
        Self {
            body_size,
            biomes: biomes.iter().map(|b| b.to_string()).collect(),
            diet,
        }
    }
}

pub type Occupant = (SpeciesId, Population);

#[derive(PartialEq, Eq, Debug, Clone)]
pub struct Enclosure {
    pub id: EnclosureId,
    /// May name several biomes at once, e.g. "savana e rio".
    pub biome: String,
    pub capacity: Space,
    pub occupants: Vec<Occupant>,
}

impl Enclosure {
    pub fn new(id: EnclosureId, biome: &str, capacity: Space, occupants: &[(&str, Population)]) -> Self {
        Self {
            id,
            biome: biome.to_string(),
            capacity,
            occupants: occupants
                .iter()
                .map(|(species, count)| (species.to_string(), *count))
                .collect(),
        }
    }

    /// True if some occupant belongs to a species other than `species`.
    pub fn hosts_other_than(&self, species: &str) -> bool {
        self.occupants.iter().any(|(other, _)| other != species)
    }
}

#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub struct ViableEnclosure {
    pub id: EnclosureId,
    /// What is left after the requested group moves in.
    pub free_space: Space,
    pub capacity: Space,
}

impl fmt::Display for ViableEnclosure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Enclosure {} (free space: {} total: {})",
            self.id, self.free_space, self.capacity
        )
    }
}

/// How a single enclosure fares against each placement rule.
#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub struct Assessment {
    pub id: EnclosureId,
    pub capacity: Space,
    pub biome_compatible: bool,
    pub diet_compatible: bool,
    pub occupied_space: Space,
    pub required_space: Space,
    /// `None` when the group does not fit.
    pub free_space: Option<Space>,
}

impl Assessment {
    pub fn is_viable(&self) -> bool {
        self.biome_compatible && self.diet_compatible && self.free_space.is_some()
    }

    pub fn viable(&self) -> Option<ViableEnclosure> {
        match (self.is_viable(), self.free_space) {
            (true, Some(free_space)) => Some(ViableEnclosure {
                id: self.id,
                free_space,
                capacity: self.capacity,
            }),
            _ => None,
        }
    }
}
