//! # geoxref-core
//!
//! Foundation crate for the GEO cross-reference load.
//! Defines the accession codec, key allocator, association index,
//! run configuration, and the error taxonomy shared by the other crates.

pub mod accession;
pub mod config;
pub mod errors;
pub mod index;
pub mod keygen;

// Re-export the most commonly used types at the crate root.
pub use accession::AccessionParts;
pub use config::{LoadConfig, RunKeys};
pub use errors::{XrefError, XrefResult};
pub use index::{AssociationIndex, MarkerKey};
pub use keygen::KeyAllocator;
