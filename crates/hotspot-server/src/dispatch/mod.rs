//! Dispatcher module exports.
//!
//! Re-exports the dispatcher and the query trait so downstream consumers can
//! depend on this module directly.

pub mod dispatcher;

pub use dispatcher::{DispatchCtx, Dispatcher, GenreQuery, Served};
