// src/resolver/ion.rs

//! Synthetic PDG numbers for bare nuclei.
//!
//! Layout: `1_000_000_000 + L*10_000_000 + Z*10_000 + A*10 + I`, where `L` is
//! the strangeness digit and `I` the isomer level.

use crate::error::{PdgError, Result};
use crate::model::elements::MAX_Z;
use crate::model::PdgId;

pub const ION_OFFSET: PdgId = 1_000_000_000;

/// Largest mass number that fits in the three A digits
pub const MAX_MASS_NUMBER: i64 = 999;

/// Decoded ion number
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IonId {
    pub strangeness: i64,
    pub z: i64,
    pub a: i64,
    pub isomer_level: i64,
}

impl IonId {
    /// Ground-state, non-strange nucleus
    pub fn new(a: i64, z: i64) -> Self {
        Self { strangeness: 0, z, a, isomer_level: 0 }
    }

    /// Encoding always writes zero strangeness and isomer level.
    /// Z must be a known element and A must fit its three digits.
    pub fn encode(&self) -> Result<PdgId> {
        if !(1..=MAX_Z).contains(&self.z) {
            return Err(PdgError::UnrecognizedElement(self.z));
        }
        if !(0..=MAX_MASS_NUMBER).contains(&self.a) {
            return Err(PdgError::MassNumberOutOfRange(self.a));
        }
        Ok(ION_OFFSET + self.z * 10_000 + self.a * 10)
    }

    /// Split an ion number into its digit groups. Returns None for ids that
    /// are not above the ion offset.
    pub fn decode(pdg_id: PdgId) -> Option<Self> {
        if pdg_id <= ION_OFFSET {
            return None;
        }
        let rest = pdg_id - ION_OFFSET;
        Some(Self {
            strangeness: rest / 10_000_000,
            z: (rest % 10_000_000) / 10_000,
            a: (rest % 10_000) / 10,
            isomer_level: rest % 10,
        })
    }
}

/// PDG number of the nucleus with mass number `a` and atomic number `z`
pub fn pdg_id_ion(a: i64, z: i64) -> Result<PdgId> {
    IonId::new(a, z).encode()
}
