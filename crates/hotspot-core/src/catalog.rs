//! Read-only record catalog (the dataset under query).
//!
//! A catalog is loaded once at startup and shared behind an `Arc`; nothing
//! mutates it afterwards, so both queries may run on it concurrently.

use std::collections::HashSet;
use std::fs;

use serde::{Deserialize, Serialize};

use crate::error::{HotspotError, Result};

const BUILTIN_JSON: &str = include_str!("../data/movies.json");

/// One immutable catalog entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Record {
    pub id: i64,
    pub title: String,
    pub year: i32,
    pub genre: String,
    pub rating: f64,
    pub description: String,
}

#[derive(Debug, Clone)]
pub struct Catalog {
    records: Vec<Record>,
}

impl Catalog {
    /// The 15-record movie fixture compiled into the binary.
    pub fn builtin() -> Result<Self> {
        Self::from_json_str(BUILTIN_JSON)
    }

    pub fn from_file(path: &str) -> Result<Self> {
        let s = fs::read_to_string(path)
            .map_err(|e| HotspotError::Internal(format!("read catalog failed ({path}): {e}")))?;
        Self::from_json_str(&s)
    }

    pub fn from_json_str(s: &str) -> Result<Self> {
        let records: Vec<Record> = serde_json::from_str(s)
            .map_err(|e| HotspotError::BadRequest(format!("invalid catalog json: {e}")))?;
        Self::new(records)
    }

    pub fn new(records: Vec<Record>) -> Result<Self> {
        if records.is_empty() {
            return Err(HotspotError::BadRequest("catalog must not be empty".into()));
        }

        let mut seen = HashSet::with_capacity(records.len());
        for r in &records {
            if !seen.insert(r.id) {
                return Err(HotspotError::BadRequest(format!(
                    "duplicate record id in catalog: {}",
                    r.id
                )));
            }
        }

        Ok(Self { records })
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Distinct genres in first-seen order.
    pub fn genres(&self) -> Vec<&str> {
        let mut out: Vec<&str> = Vec::new();
        for r in &self.records {
            if !out.contains(&r.genre.as_str()) {
                out.push(&r.genre);
            }
        }
        out
    }

    /// Number of records whose genre matches exactly.
    pub fn count_genre(&self, genre: &str) -> usize {
        self.records.iter().filter(|r| r.genre == genre).count()
    }
}
