//! Top-N-by-genre queries: a deliberately wasteful variant and a lean one.
//!
//! Both return the records of one genre ordered by rating (highest first),
//! cut to `limit`. They differ in how much they copy and how many passes they
//! make, which is what the profiler compares.
//!
//! Tie-break order is NOT shared:
//! - inefficient: equal ratings stay in title order (left over from the
//!   title sort that precedes the stable rating sort)
//! - optimized: equal ratings stay in catalog order

use std::cmp::Ordering;
use std::collections::HashSet;

use crate::catalog::Record;

fn by_rating_desc(a: &Record, b: &Record) -> Ordering {
    b.rating.total_cmp(&a.rating)
}

fn by_title_asc(a: &Record, b: &Record) -> Ordering {
    a.title.cmp(&b.title)
}

/// Hot-spot version. Every step below is intentional; do not tidy it up.
pub fn top_by_genre_inefficient(records: &[Record], genre: &str, limit: i64) -> Vec<Record> {
    // 1) three full deep copies
    let copy1 = records.to_vec();
    let copy2 = records.to_vec();
    let copy3 = records.to_vec();

    // 2) 3x-sized merged collection
    let mut merged = Vec::new();
    merged.extend(copy1);
    merged.extend(copy2);
    merged.extend(copy3);

    // 3) filter over the merged collection
    let filtered: Vec<Record> = merged.into_iter().filter(|r| r.genre == genre).collect();

    // 4) first sort (title), on its own copy
    let mut sorted_by_title = filtered.clone();
    sorted_by_title.sort_by(by_title_asc);

    // 5) second sort (rating) overrides the first, again on a fresh copy
    let mut sorted_by_rating = sorted_by_title.clone();
    sorted_by_rating.sort_by(by_rating_desc);

    // Each match is present three times; keep the first occurrence per id.
    let mut seen = HashSet::new();
    sorted_by_rating.retain(|r| seen.insert(r.id));

    // 6) element-by-element result build
    let take = usize::try_from(limit).unwrap_or(0).min(sorted_by_rating.len());
    let mut result = Vec::new();
    for r in sorted_by_rating.iter().take(take) {
        result.push(r.clone());
    }
    result
}

/// Single filter pass, single stable sort, clone only what is returned.
pub fn top_by_genre_optimized(records: &[Record], genre: &str, limit: i64) -> Vec<Record> {
    let Ok(limit) = usize::try_from(limit) else {
        return Vec::new();
    };
    if limit == 0 {
        return Vec::new();
    }

    let mut matches: Vec<&Record> = records.iter().filter(|r| r.genre == genre).collect();
    matches.sort_by(|a, b| by_rating_desc(a, b));
    matches.truncate(limit);
    matches.into_iter().cloned().collect()
}
