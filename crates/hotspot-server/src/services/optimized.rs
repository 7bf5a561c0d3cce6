use hotspot_core::catalog::{Catalog, Record};
use hotspot_core::error::Result;
use hotspot_core::query::top_by_genre_optimized;
use hotspot_core::recorder::Variant;

use crate::dispatch::GenreQuery;

const OPTIMIZATIONS: &[(&str, &str)] = &[
    ("single_sort", "single stable sort by rating"),
    ("no_intermediate_copies", "filter over borrowed records, no catalog copies"),
    ("early_truncate", "truncate before cloning"),
    ("minimal_allocation", "only returned records are cloned"),
];

#[derive(Default)]
pub struct OptimizedQuery;

impl OptimizedQuery {
    pub fn new() -> Self {
        Self
    }
}

impl GenreQuery for OptimizedQuery {
    fn variant(&self) -> Variant {
        Variant::Optimized
    }

    fn details(&self) -> &'static [(&'static str, &'static str)] {
        OPTIMIZATIONS
    }

    fn run(&self, catalog: &Catalog, genre: &str, limit: i64) -> Result<Vec<Record>> {
        Ok(top_by_genre_optimized(catalog.records(), genre, limit))
    }
}
