// src/resolver/properties.rs

use crate::error::{PdgError, Result};
use crate::model::elements::element_symbol;
use crate::model::particles::{get_record, DEUTERIUM_ID, NEUTRON_ID, PROTON_ID, TRITIUM_ID};
use crate::model::PdgId;
use crate::resolver::grammar::anti_name;
use crate::resolver::ion::{IonId, ION_OFFSET};

/// Charge, nucleon content and display name of one particle
#[derive(Debug, Clone, PartialEq)]
pub struct ParticleProperties {
    /// In units of e
    pub charge: f64,
    /// Mass number A
    pub mass_number: i64,
    /// Atomic number Z, signed so that it flips under charge conjugation
    pub atomic_number: i64,
    pub name: String,
}

impl ParticleProperties {
    fn conjugate(self) -> Self {
        Self {
            charge: -self.charge,
            mass_number: self.mass_number,
            atomic_number: -self.atomic_number,
            name: anti_name(&self.name),
        }
    }
}

/// Column-wise properties of a batch of particles
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PropertiesBatch {
    pub charge: Vec<f64>,
    pub mass_number: Vec<i64>,
    pub atomic_number: Vec<i64>,
    pub name: Vec<String>,
}

impl PropertiesBatch {
    pub fn len(&self) -> usize {
        self.name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_empty()
    }
}

impl FromIterator<ParticleProperties> for PropertiesBatch {
    fn from_iter<I: IntoIterator<Item = ParticleProperties>>(iter: I) -> Self {
        let mut batch = PropertiesBatch::default();
        for props in iter {
            batch.charge.push(props.charge);
            batch.mass_number.push(props.mass_number);
            batch.atomic_number.push(props.atomic_number);
            batch.name.push(props.name);
        }
        batch
    }
}

/// Nucleon content (A, Z) of a tabulated particle
fn nucleon_content(pdg_id: PdgId, charge: f64) -> (i64, i64) {
    match pdg_id.abs() {
        PROTON_ID | NEUTRON_ID => (1, charge as i64),
        DEUTERIUM_ID => (2, 1),
        TRITIUM_ID => (3, 1),
        _ => (0, 0),
    }
}

fn ion_properties(pdg_id: PdgId) -> Result<ParticleProperties> {
    let ion = IonId::decode(pdg_id).ok_or(PdgError::UnrecognizedId(pdg_id))?;
    // TODO: decide whether strangeness and isomer level should survive a name round trip
    if ion.strangeness != 0 || ion.isomer_level != 0 {
        log::debug!(
            "PDG ID {}: ignoring strangeness {} and isomer level {}",
            pdg_id,
            ion.strangeness,
            ion.isomer_level
        );
    }
    Ok(ParticleProperties {
        charge: ion.z as f64,
        mass_number: ion.a,
        atomic_number: ion.z,
        name: format!("{}{}", element_symbol(ion.z)?, ion.a),
    })
}

/// Charge, A, Z and name for a PDG ID.
///
/// Tried in order: the table itself, the negated ID in the table
/// (anti-particle), then the ion encoding (negative ion numbers are
/// anti-ions). Ions are assumed fully stripped, so their charge equals Z.
pub fn properties_from_pdg_id(pdg_id: PdgId) -> Result<ParticleProperties> {
    if let Some(rec) = get_record(pdg_id) {
        let (mass_number, atomic_number) = nucleon_content(pdg_id, rec.charge);
        return Ok(ParticleProperties {
            charge: rec.charge,
            mass_number,
            atomic_number,
            name: rec.canonical_name().to_string(),
        });
    }

    let negated = pdg_id.checked_neg().ok_or(PdgError::UnrecognizedId(pdg_id))?;
    if get_record(negated).is_some() {
        return properties_from_pdg_id(negated).map(ParticleProperties::conjugate);
    }

    if pdg_id > ION_OFFSET {
        ion_properties(pdg_id)
    } else if negated > ION_OFFSET {
        ion_properties(negated).map(ParticleProperties::conjugate)
    } else {
        Err(PdgError::UnrecognizedId(pdg_id))
    }
}

/// Element-wise [`properties_from_pdg_id`], regrouped into columns
pub fn properties_from_pdg_ids(pdg_ids: &[PdgId]) -> Result<PropertiesBatch> {
    pdg_ids.iter().map(|&id| properties_from_pdg_id(id)).collect()
}

/// Display name of a PDG ID
pub fn name_from_pdg_id(pdg_id: PdgId) -> Result<String> {
    properties_from_pdg_id(pdg_id).map(|props| props.name)
}

pub fn names_from_pdg_ids(pdg_ids: &[PdgId]) -> Result<Vec<String>> {
    pdg_ids.iter().map(|&id| name_from_pdg_id(id)).collect()
}
