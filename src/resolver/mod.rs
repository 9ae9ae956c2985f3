// src/resolver/mod.rs

//! Particle identity resolver: names, PDG IDs, properties and masses.

pub mod batch;
pub mod grammar;
pub mod ion;
pub mod mass;
pub mod properties;

use std::sync::OnceLock;

use crate::config::ResolverConfig;
use crate::error::Result;
use crate::model::PdgId;

pub use batch::Broadcast;
pub use grammar::{NameInput, ParsedName};
pub use ion::{pdg_id_ion, IonId};
pub use properties::{
    name_from_pdg_id, names_from_pdg_ids, properties_from_pdg_id, properties_from_pdg_ids,
    ParticleProperties, PropertiesBatch,
};

/// Resolver carrying the classification tolerances.
///
/// Name and property lookups do not depend on the configuration and are
/// free functions; the mass-related operations live on this type.
#[derive(Debug, Clone, Default)]
pub struct Resolver {
    pub config: ResolverConfig,
}

// Shared instance with the default configuration
static GLOBAL: OnceLock<Resolver> = OnceLock::new();

impl Resolver {
    pub fn new(config: ResolverConfig) -> Self {
        Self { config }
    }

    pub fn global() -> &'static Resolver {
        GLOBAL.get_or_init(Resolver::default)
    }
}

/// Resolve a particle name (or pass through an already numeric ID)
pub fn pdg_id_from_name<'a>(name: impl Into<NameInput<'a>>) -> Result<PdgId> {
    match name.into() {
        NameInput::Undefined => Ok(0),
        NameInput::Id(pdg_id) => Ok(pdg_id),
        NameInput::Name(name) => match grammar::parse_name(name)? {
            ParsedName::Alias(pdg_id) => Ok(pdg_id),
            ParsedName::AntiAlias(pdg_id) => Ok(-pdg_id),
            ParsedName::Ion { anti: false, z, a } => pdg_id_ion(a, z),
            ParsedName::Ion { anti: true, z, a } => pdg_id_ion(a, z).map(|id| -id),
        },
    }
}

/// Element-wise [`pdg_id_from_name`]
pub fn pdg_ids_from_names<'a, I, N>(names: I) -> Result<Vec<PdgId>>
where
    I: IntoIterator<Item = N>,
    N: Into<NameInput<'a>>,
{
    names.into_iter().map(|name| pdg_id_from_name(name)).collect()
}

/// Zip form of [`pdg_id_ion`]
pub fn pdg_ids_ion(a: &[i64], z: &[i64]) -> Result<Vec<PdgId>> {
    let pairs = batch::zip_broadcast(Broadcast::Array(a), Broadcast::Array(z))?;
    pairs.into_iter().map(|(a, z)| pdg_id_ion(a, z)).collect()
}

/// [`Resolver::pdg_id_from_mass_charge`] with default tolerances
pub fn pdg_id_from_mass_charge(mass: f64, charge: f64) -> Result<PdgId> {
    Resolver::global().pdg_id_from_mass_charge(mass, charge)
}

pub fn pdg_ids_from_mass_charge(
    mass: Broadcast<'_, f64>,
    charge: Broadcast<'_, f64>,
) -> Result<Vec<PdgId>> {
    Resolver::global().pdg_ids_from_mass_charge(mass, charge)
}

/// [`Resolver::mass_from_pdg_id`] with default tolerances
pub fn mass_from_pdg_id(
    pdg_id: PdgId,
    allow_approximation: bool,
    expected_mass: Option<f64>,
) -> Result<f64> {
    Resolver::global().mass_from_pdg_id(pdg_id, allow_approximation, expected_mass)
}

pub fn masses_from_pdg_ids(
    pdg_ids: &[PdgId],
    allow_approximation: bool,
    expected_mass: Option<f64>,
) -> Result<Vec<f64>> {
    Resolver::global().masses_from_pdg_ids(pdg_ids, allow_approximation, expected_mass)
}

pub fn mass_consistent(pdg_id: PdgId, mass: f64) -> Result<bool> {
    Resolver::global().mass_consistent(pdg_id, mass)
}

pub fn mass_consistent_batch(
    pdg_ids: Broadcast<'_, PdgId>,
    masses: Broadcast<'_, f64>,
    mask: Option<&[bool]>,
) -> Result<bool> {
    Resolver::global().mass_consistent_batch(pdg_ids, masses, mask)
}
