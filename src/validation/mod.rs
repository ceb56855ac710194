//! URL liveness probing
//!
//! This module issues the header-only HTTP requests that turn an
//! extracted URL into a status code.

pub mod prober;

// Re-export commonly used items
pub use prober::{HttpProber, ProbeUrl};
