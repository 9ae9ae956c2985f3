//src/model/mod.rs
pub mod constants;
pub mod elements;
pub mod particles;

// Re-exports for cleaner imports
pub use elements::{element_full_name, element_symbol, get_atomic_number};
pub use particles::{ParticleRecord, PdgId};
