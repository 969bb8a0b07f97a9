//! # Layer 0: Primitives
//!
//! Basic building blocks for the cursor protocol:
//! - `bool.rs`: Type-level boolean logic (Present/Absent).
//! - `distance.rs`: Signed distance types.

pub mod bool;
pub mod distance;

// Re-export key types at this level
pub use bool::{Absent, Bool, Present};
pub use distance::Distance;
