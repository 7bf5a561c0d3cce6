//! Profiling HTTP API.
//!
//! - `GET  /recommendations`  : traced top-N-by-genre query
//! - `GET  /profiling-report` : aggregated comparison of both variants
//! - `POST /profiling-reset`  : clear recorded samples

pub mod error;
pub mod profiling;
pub mod recommendations;

pub use error::ApiError;

/// Round for display; never emits `-0.0`.
pub(crate) fn round_to(v: f64, places: i32) -> f64 {
    let f = 10f64.powi(places);
    let r = (v * f).round() / f;
    if r == 0.0 { 0.0 } else { r }
}

#[cfg(test)]
mod tests {
    use super::round_to;

    #[test]
    fn rounds_half_away_from_zero() {
        assert_eq!(round_to(1.005_1, 2), 1.01);
        assert_eq!(round_to(12.345, 1), 12.3);
        assert_eq!(round_to(-0.001, 2), 0.0);
        assert!(round_to(-0.001, 2).is_sign_positive());
    }
}
