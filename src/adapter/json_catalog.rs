//! Loading reference tables from JSON.
//!
//! ```json
//! {
//!   "species": { "LEAO": { "size": 3, "biomes": ["savana"], "carnivore": true } },
//!   "enclosures": [
//!     { "id": 5, "biome": "savana", "capacity": 9,
//!       "occupants": [{ "species": "LEAO", "count": 1 }] }
//!   ]
//! }
//! ```

use std::collections::HashMap;

use anyhow::{bail, Context};
use serde_json::Value;

use crate::domain::types::{Diet, Enclosure, Occupant, Species};

use super::table_catalog::TableCatalog;

pub fn parse_catalog(text: &str) -> anyhow::Result<TableCatalog> {
    let value: Value = serde_json::from_str(text).context("catalog is not valid JSON")?;
    catalog_from_json(&value)
}

pub fn catalog_from_json(val: &Value) -> anyhow::Result<TableCatalog> {
    let species = val["species"]
        .as_object()
        .context("missing \"species\" table")?
        .iter()
        .map(|(id, traits)| {
            let traits = species_from_json(traits).with_context(|| format!("in species {id}"))?;
            Ok((id.clone(), traits))
        })
        .collect::<anyhow::Result<HashMap<_, _>>>()?;

    let enclosures = val["enclosures"]
        .as_array()
        .context("missing \"enclosures\" list")?
        .iter()
        .enumerate()
        .map(|(i, enclosure)| {
            enclosure_from_json(enclosure).with_context(|| format!("in enclosure entry {i}"))
        })
        .collect::<anyhow::Result<Vec<_>>>()?;

    let catalog = TableCatalog::new(species, enclosures).context("inconsistent catalog")?;
    Ok(catalog)
}

fn species_from_json(val: &Value) -> anyhow::Result<Species> {
    let body_size = val["size"]
        .as_u64()
        .context("\"size\" must be a non-negative integer")?;

    let biomes = val["biomes"]
        .as_array()
        .context("\"biomes\" must be a list")?
        .iter()
        .map(|b| b.as_str().map(str::to_string).context("biomes must be strings"))
        .collect::<anyhow::Result<Vec<_>>>()?;

    let diet = match val["carnivore"].as_bool() {
        Some(true) => Diet::Carnivore,
        Some(false) => Diet::Herbivore,
        None => bail!("\"carnivore\" must be true or false"),
    };

    Ok(Species {
        body_size,
        biomes,
        diet,
    })
}

fn enclosure_from_json(val: &Value) -> anyhow::Result<Enclosure> {
    let id = val["id"].as_u64().context("\"id\" must be a non-negative integer")?;
    let id = u32::try_from(id).context("\"id\" is out of range")?;

    let biome = val["biome"].as_str().context("\"biome\" must be a string")?;
    let capacity = val["capacity"]
        .as_u64()
        .context("\"capacity\" must be a non-negative integer")?;

    // an enclosure without occupants may leave the list out
    let occupants = match &val["occupants"] {
        Value::Null => vec![],
        Value::Array(entries) => entries
            .iter()
            .map(occupant_from_json)
            .collect::<anyhow::Result<Vec<_>>>()
            .with_context(|| format!("in occupants of enclosure {id}"))?,
        _ => bail!("\"occupants\" of enclosure {id} must be a list"),
    };

    Ok(Enclosure {
        id,
        biome: biome.to_string(),
        capacity,
        occupants,
    })
}

fn occupant_from_json(val: &Value) -> anyhow::Result<Occupant> {
    let species = val["species"].as_str().context("\"species\" must be a string")?;
    let count = val["count"]
        .as_u64()
        .context("\"count\" must be a non-negative integer")?;
    let count = u32::try_from(count).context("\"count\" is out of range")?;
    Ok((species.to_string(), count))
}
