//! cw-core: shared foundation for the Colebrook-White workspace.
//!
//! Contains:
//! - units (uom SI types + constructors for pipe-flow quantities)
//! - numeric (Real + float helpers)
//! - error (shared error types)

pub mod error;
pub mod numeric;
pub mod units;

// Re-exports: nice ergonomics for downstream crates
pub use error::{CoreError, CoreResult};
pub use numeric::*;
pub use units::*;
