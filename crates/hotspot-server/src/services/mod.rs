//! Built-in query variants.

pub mod inefficient;
pub mod optimized;

pub use inefficient::InefficientQuery;
pub use optimized::OptimizedQuery;
