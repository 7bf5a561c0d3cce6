//! Top-level facade crate for hotspot.
//!
//! Re-exports the core harness and the server library so users can depend on a single crate.

pub mod core {
    pub use hotspot_core::*;
}

pub mod server {
    pub use hotspot_server::*;
}
