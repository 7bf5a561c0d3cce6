use hotspot_core::catalog::{Catalog, Record};
use hotspot_core::error::Result;
use hotspot_core::query::top_by_genre_inefficient;
use hotspot_core::recorder::Variant;

use crate::dispatch::GenreQuery;

const HOT_SPOTS: &[(&str, &str)] = &[
    ("array_duplication", "3 full deep copies of the catalog (HOT SPOT 1)"),
    ("array_merge", "3x-sized merged collection (HOT SPOT 2)"),
    ("double_sorting", "title sort, then rating sort overrides it (HOT SPOT 5)"),
    ("intermediate_arrays", "fresh copies before each sort and for the result (HOT SPOT 3,4,6)"),
];

/// Hot-spot variant kept slow on purpose.
#[derive(Default)]
pub struct InefficientQuery;

impl InefficientQuery {
    pub fn new() -> Self {
        Self
    }
}

impl GenreQuery for InefficientQuery {
    fn variant(&self) -> Variant {
        Variant::Inefficient
    }

    fn details(&self) -> &'static [(&'static str, &'static str)] {
        HOT_SPOTS
    }

    fn run(&self, catalog: &Catalog, genre: &str, limit: i64) -> Result<Vec<Record>> {
        Ok(top_by_genre_inefficient(catalog.records(), genre, limit))
    }
}
