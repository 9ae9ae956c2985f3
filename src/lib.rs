//! # pdg-resolve
//!
//! Translation between Particle Data Group (PDG) Monte Carlo numbers,
//! particle names and physical properties (charge, mass number, atomic
//! number, rest mass).
//!
//! ```
//! use pdg_resolve::{pdg_id_from_name, properties_from_pdg_id, mass_from_pdg_id};
//!
//! let lead = pdg_id_from_name("Pb-208").unwrap();
//! assert_eq!(lead, 1_000_822_080);
//!
//! let props = properties_from_pdg_id(lead).unwrap();
//! assert_eq!((props.mass_number, props.atomic_number), (208, 82));
//! assert_eq!(props.name, "Pb208");
//!
//! let proton = pdg_id_from_name("proton").unwrap();
//! assert_eq!(mass_from_pdg_id(proton, true, None).unwrap(), 938272088.16);
//! ```

pub mod config;
pub mod error;
pub mod model;
pub mod resolver;
pub mod utils;

pub use config::ResolverConfig;
pub use error::{PdgError, Result};
pub use model::constants::*;
pub use model::{element_full_name, element_symbol, get_atomic_number, PdgId};
pub use resolver::*;
