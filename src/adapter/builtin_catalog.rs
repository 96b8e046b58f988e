use std::collections::HashMap;

use crate::domain::types::{Diet, Enclosure, Species};

use super::table_catalog::TableCatalog;

lazy_static::lazy_static! {
    static ref BUILTIN: TableCatalog = TableCatalog::new(
        HashMap::from([
            ("LEAO".to_string(), Species::new(3, &["savana"], Diet::Carnivore)),
            ("LEOPARDO".to_string(), Species::new(2, &["savana"], Diet::Carnivore)),
            ("CROCODILO".to_string(), Species::new(3, &["rio"], Diet::Carnivore)),
            ("MACACO".to_string(), Species::new(1, &["savana", "floresta"], Diet::Herbivore)),
            ("GAZELA".to_string(), Species::new(2, &["savana"], Diet::Herbivore)),
            ("HIPOPOTAMO".to_string(), Species::new(4, &["savana", "rio"], Diet::Herbivore)),
        ]),
        vec![
            Enclosure::new(1, "savana", 10, &[("MACACO", 3)]),
            Enclosure::new(2, "floresta", 5, &[]),
            Enclosure::new(3, "savana e rio", 7, &[("GAZELA", 1)]),
            Enclosure::new(4, "rio", 8, &[]),
            Enclosure::new(5, "savana", 9, &[("LEAO", 1)]),
        ],
    )
    .unwrap();
}

/// The zoo's own enclosures and the species it can take in.
pub fn builtin() -> &'static TableCatalog {
    &BUILTIN
}
