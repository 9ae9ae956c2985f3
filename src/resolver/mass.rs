// src/resolver/mass.rs

use rayon::prelude::*;

use crate::error::{PdgError, Result};
use crate::model::constants::{
    ELECTRON_MASS_EV, MUON_MASS_EV, PB208_MASS_EV, PROTON_MASS_EV, U_MASS_EV,
};
use crate::model::elements::MAX_Z;
use crate::model::particles::{ELECTRON_ID, MUON_ID, PROTON_ID};
use crate::model::PdgId;
use crate::resolver::batch::{apply_mask, zip_broadcast, Broadcast};
use crate::resolver::ion::{pdg_id_ion, MAX_MASS_NUMBER};
use crate::resolver::properties::properties_from_pdg_id;
use crate::resolver::Resolver;

const PB208_ID: PdgId = 1_000_822_080;

/// Nearest whole number of atomic mass units
fn mass_number_of(mass: f64) -> i64 {
    (mass / U_MASS_EV).round() as i64
}

/// +1 / -1 for unit charges, None otherwise
fn unit_charge_sign(charge: f64) -> Option<i64> {
    if charge == 1.0 {
        Some(1)
    } else if charge == -1.0 {
        Some(-1)
    } else {
        None
    }
}

/// Tabulated rest mass, also valid for the anti-particle
fn exact_mass(pdg_id: PdgId) -> Option<f64> {
    match pdg_id.checked_abs()? {
        PROTON_ID => Some(PROTON_MASS_EV),
        ELECTRON_ID => Some(ELECTRON_MASS_EV),
        MUON_ID => Some(MUON_MASS_EV),
        PB208_ID => Some(PB208_MASS_EV),
        _ => None,
    }
}

impl Resolver {
    /// Guess the PDG ID of a particle from its rest mass (eV) and charge (e).
    ///
    /// Electrons, muons and protons are matched within the configured
    /// windows. Anything else with an integral charge in 1..=118 and a mass
    /// of 1 to 999 atomic mass units is taken to be a fully stripped ion
    /// (Z = charge). Neutral non-tabulated particles and negative heavy ions
    /// cannot be classified.
    pub fn pdg_id_from_mass_charge(&self, mass: f64, charge: f64) -> Result<PdgId> {
        let unclassifiable = PdgError::UnclassifiableMassCharge { mass, charge };
        let lepton_window = self.config.lepton_window_ev;

        let species = if (mass - ELECTRON_MASS_EV).abs() < lepton_window {
            Some(ELECTRON_ID)
        } else if (mass - MUON_MASS_EV).abs() < lepton_window {
            Some(MUON_ID)
        } else if (mass - PROTON_MASS_EV).abs() < self.config.proton_window_ev {
            Some(-PROTON_ID)
        } else {
            None
        };

        // Table IDs of the negatively charged member: e-, mu- and p-
        if let Some(negative_id) = species {
            let sign = unit_charge_sign(charge).ok_or(unclassifiable)?;
            return Ok(-sign * negative_id);
        }

        // Range checks on the floats, NaN fails both
        let a = (mass / U_MASS_EV).round();
        let z_ok = (1.0..=MAX_Z as f64).contains(&charge) && charge.fract() == 0.0;
        let a_ok = (1.0..=MAX_MASS_NUMBER as f64).contains(&a);
        if !(z_ok && a_ok) {
            return Err(unclassifiable);
        }
        pdg_id_ion(a as i64, charge as i64)
    }

    /// Broadcasting form of [`Resolver::pdg_id_from_mass_charge`]
    pub fn pdg_ids_from_mass_charge(
        &self,
        mass: Broadcast<'_, f64>,
        charge: Broadcast<'_, f64>,
    ) -> Result<Vec<PdgId>> {
        zip_broadcast(mass, charge)?
            .par_iter()
            .map(|&(m, q)| self.pdg_id_from_mass_charge(m, q))
            .collect()
    }

    /// Whether `mass` is plausible for `pdg_id`.
    ///
    /// Protons, electrons and muons must classify back to the same ID, nuclei
    /// with A > 1 must have the right number of mass units. Other species are
    /// not checked.
    pub fn mass_consistent(&self, pdg_id: PdgId, mass: f64) -> Result<bool> {
        let props = properties_from_pdg_id(pdg_id)?;
        match pdg_id.abs() {
            PROTON_ID | ELECTRON_ID | MUON_ID => Ok(self
                .pdg_id_from_mass_charge(mass, props.charge)
                .map_or(false, |derived| derived == pdg_id)),
            _ if props.mass_number > 1 => Ok(mass_number_of(mass) == props.mass_number),
            _ => Ok(true),
        }
    }

    /// All (masked-in) pairs pass [`Resolver::mass_consistent`]
    pub fn mass_consistent_batch(
        &self,
        pdg_ids: Broadcast<'_, PdgId>,
        masses: Broadcast<'_, f64>,
        mask: Option<&[bool]>,
    ) -> Result<bool> {
        let pairs = apply_mask(zip_broadcast(pdg_ids, masses)?, mask)?;
        let checks: Vec<bool> = pairs
            .par_iter()
            .map(|&(id, m)| self.mass_consistent(id, m))
            .collect::<Result<_>>()?;
        Ok(checks.into_iter().all(|ok| ok))
    }

    /// Rest mass (eV) of a particle.
    ///
    /// Exact values exist for protons, electrons, muons and Pb208. Otherwise
    /// nuclei are approximated as A * u when allowed, and finally a
    /// caller-supplied `expected_mass` is trusted if it is consistent.
    pub fn mass_from_pdg_id(
        &self,
        pdg_id: PdgId,
        allow_approximation: bool,
        expected_mass: Option<f64>,
    ) -> Result<f64> {
        let props = properties_from_pdg_id(pdg_id)?;
        if let Some(mass) = exact_mass(pdg_id) {
            return Ok(mass);
        }

        if allow_approximation && props.mass_number > 0 {
            log::warn!(
                "Approximating the mass of {} as {}u!",
                props.name,
                props.mass_number
            );
            return Ok(props.mass_number as f64 * U_MASS_EV);
        }

        if let Some(mass) = expected_mass {
            if self.mass_consistent(pdg_id, mass)? {
                return Ok(mass);
            }
        }
        Err(PdgError::MassNotFound(props.name))
    }

    /// Mass lookup with the configured approximation policy
    pub fn mass(&self, pdg_id: PdgId, expected_mass: Option<f64>) -> Result<f64> {
        self.mass_from_pdg_id(pdg_id, self.config.allow_approximation, expected_mass)
    }

    /// Element-wise [`Resolver::mass_from_pdg_id`] with shared options
    pub fn masses_from_pdg_ids(
        &self,
        pdg_ids: &[PdgId],
        allow_approximation: bool,
        expected_mass: Option<f64>,
    ) -> Result<Vec<f64>> {
        pdg_ids
            .par_iter()
            .map(|&id| self.mass_from_pdg_id(id, allow_approximation, expected_mass))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ResolverConfig;
    use crate::model::particles::NEUTRON_ID;

    fn resolver() -> Resolver {
        Resolver::default()
    }

    // Records emitted on the current thread while `f` runs
    mod capture {
        use log::{Level, Log, Metadata, Record};
        use std::cell::RefCell;
        use std::sync::Once;

        thread_local! {
            static RECORDS: RefCell<Vec<(Level, String)>> = RefCell::new(Vec::new());
        }

        struct CaptureLogger;

        impl Log for CaptureLogger {
            fn enabled(&self, _: &Metadata) -> bool {
                true
            }

            fn log(&self, record: &Record) {
                RECORDS.with(|r| r.borrow_mut().push((record.level(), record.args().to_string())));
            }

            fn flush(&self) {}
        }

        static LOGGER: CaptureLogger = CaptureLogger;
        static INIT: Once = Once::new();

        pub fn records_of<T>(f: impl FnOnce() -> T) -> (T, Vec<(Level, String)>) {
            INIT.call_once(|| {
                log::set_logger(&LOGGER).expect("no other logger in unit tests");
                log::set_max_level(log::LevelFilter::Trace);
            });
            RECORDS.with(|r| r.borrow_mut().clear());
            let out = f();
            (out, RECORDS.with(|r| r.borrow_mut().drain(..).collect()))
        }
    }

    #[test]
    fn test_classify_known_species() {
        let r = resolver();
        assert_eq!(r.pdg_id_from_mass_charge(PROTON_MASS_EV, 1.0), Ok(PROTON_ID));
        assert_eq!(r.pdg_id_from_mass_charge(PROTON_MASS_EV + 900.0, -1.0), Ok(-PROTON_ID));
        assert_eq!(r.pdg_id_from_mass_charge(ELECTRON_MASS_EV, -1.0), Ok(ELECTRON_ID));
        assert_eq!(r.pdg_id_from_mass_charge(ELECTRON_MASS_EV - 99.0, 1.0), Ok(-ELECTRON_ID));
        assert_eq!(r.pdg_id_from_mass_charge(MUON_MASS_EV, -1.0), Ok(MUON_ID));
        assert_eq!(r.pdg_id_from_mass_charge(MUON_MASS_EV, 1.0), Ok(-MUON_ID));
    }

    #[test]
    fn test_classify_window_edges() {
        let r = resolver();
        // Outside the electron window and far from anything else
        assert!(r.pdg_id_from_mass_charge(ELECTRON_MASS_EV + 150.0, -1.0).is_err());
        // Outside the proton window, rounds to A = 1 -> ion with Z = 1
        assert_eq!(
            r.pdg_id_from_mass_charge(PROTON_MASS_EV + 2000.0, 1.0),
            Ok(pdg_id_ion(1, 1).unwrap())
        );
    }

    #[test]
    fn test_classify_configured_window() {
        let r = Resolver::new(ResolverConfig {
            proton_window_ev: 5000.0,
            ..Default::default()
        });
        assert_eq!(r.pdg_id_from_mass_charge(PROTON_MASS_EV + 2000.0, 1.0), Ok(PROTON_ID));
    }

    #[test]
    fn test_classify_ions() {
        let r = resolver();
        assert_eq!(r.pdg_id_from_mass_charge(PB208_MASS_EV, 82.0), Ok(PB208_ID));
        assert_eq!(
            r.pdg_id_from_mass_charge(12.0 * U_MASS_EV, 6.0),
            Ok(pdg_id_ion(12, 6).unwrap())
        );
    }

    #[test]
    fn test_unclassifiable() {
        let r = resolver();
        // Neutral and negative heavy particles are not supported
        assert!(r.pdg_id_from_mass_charge(PB208_MASS_EV, 0.0).is_err());
        assert!(r.pdg_id_from_mass_charge(PB208_MASS_EV, -82.0).is_err());
        assert!(r.pdg_id_from_mass_charge(1.0, 1.0).is_err());
        assert!(r.pdg_id_from_mass_charge(PB208_MASS_EV, 1.5).is_err());
        // A neutral "electron" or doubly charged proton is nonsense
        assert_eq!(
            r.pdg_id_from_mass_charge(ELECTRON_MASS_EV, 0.0),
            Err(PdgError::UnclassifiableMassCharge { mass: ELECTRON_MASS_EV, charge: 0.0 })
        );
        assert!(r.pdg_id_from_mass_charge(PROTON_MASS_EV, 2.0).is_err());
    }

    #[test]
    fn test_unclassifiable_out_of_encoding_range() {
        let r = resolver();
        // A = 1000 does not fit the three A digits
        let heavy = 1000.0 * U_MASS_EV;
        assert_eq!(
            r.pdg_id_from_mass_charge(heavy, 1.0),
            Err(PdgError::UnclassifiableMassCharge { mass: heavy, charge: 1.0 })
        );
        assert_eq!(
            r.pdg_id_from_mass_charge(999.0 * U_MASS_EV, 1.0),
            Ok(pdg_id_ion(999, 1).unwrap())
        );
        // Z = 150 is not an element
        assert!(r.pdg_id_from_mass_charge(300.0 * U_MASS_EV, 150.0).is_err());
        assert_eq!(
            r.pdg_id_from_mass_charge(300.0 * U_MASS_EV, 118.0),
            Ok(pdg_id_ion(300, 118).unwrap())
        );
        // Huge and non-finite inputs must not overflow
        assert!(r.pdg_id_from_mass_charge(1e30, 1e30).is_err());
        assert!(r.pdg_id_from_mass_charge(f64::INFINITY, 82.0).is_err());
        assert!(r.pdg_id_from_mass_charge(f64::NAN, 82.0).is_err());
        assert!(r.pdg_id_from_mass_charge(PB208_MASS_EV, f64::NAN).is_err());
    }

    #[test]
    fn test_classified_ions_resolve() {
        let r = resolver();
        for (a, z) in [(1, 1), (4, 2), (208, 82), (999, 118)] {
            let id = r.pdg_id_from_mass_charge(a as f64 * U_MASS_EV, z as f64).unwrap();
            let props = properties_from_pdg_id(id).unwrap();
            assert_eq!((props.mass_number, props.atomic_number), (a, z));
        }
    }

    #[test]
    fn test_classify_broadcast() {
        let r = resolver();
        let masses = [PROTON_MASS_EV, ELECTRON_MASS_EV];
        let charges = [1.0, -1.0];
        assert_eq!(
            r.pdg_ids_from_mass_charge(Broadcast::from(&masses), Broadcast::from(&charges)),
            Ok(vec![PROTON_ID, ELECTRON_ID])
        );
        assert_eq!(
            r.pdg_ids_from_mass_charge(Broadcast::Scalar(MUON_MASS_EV), Broadcast::from(&charges)),
            Ok(vec![-MUON_ID, MUON_ID])
        );
        assert_eq!(
            r.pdg_ids_from_mass_charge(Broadcast::from(&masses), Broadcast::Scalar(1.0)),
            Ok(vec![PROTON_ID, -ELECTRON_ID])
        );
        assert!(r
            .pdg_ids_from_mass_charge(Broadcast::from(&masses), Broadcast::from(&[1.0][..]))
            .is_err());
    }

    #[test]
    fn test_exact_masses() {
        let r = resolver();
        assert_eq!(r.mass_from_pdg_id(PROTON_ID, true, None), Ok(938272088.16));
        assert_eq!(r.mass_from_pdg_id(-PROTON_ID, false, None), Ok(PROTON_MASS_EV));
        assert_eq!(r.mass_from_pdg_id(ELECTRON_ID, false, None), Ok(ELECTRON_MASS_EV));
        assert_eq!(r.mass_from_pdg_id(-ELECTRON_ID, false, None), Ok(ELECTRON_MASS_EV));
        assert_eq!(r.mass_from_pdg_id(-MUON_ID, false, None), Ok(MUON_MASS_EV));
        assert_eq!(r.mass_from_pdg_id(PB208_ID, false, None), Ok(PB208_MASS_EV));
    }

    #[test]
    fn test_approximated_mass() {
        let r = resolver();
        let pb206 = pdg_id_ion(206, 82).unwrap();
        assert_eq!(r.mass_from_pdg_id(pb206, true, None), Ok(206.0 * U_MASS_EV));
        assert_eq!(r.mass_from_pdg_id(NEUTRON_ID, true, None), Ok(U_MASS_EV));
        assert_eq!(
            r.mass_from_pdg_id(pb206, false, None),
            Err(PdgError::MassNotFound("Pb206".into()))
        );
    }

    #[test]
    fn test_approximation_emits_warning() {
        let r = resolver();
        let pb206 = pdg_id_ion(206, 82).unwrap();
        let (mass, records) = capture::records_of(|| r.mass_from_pdg_id(pb206, true, None));
        assert_eq!(mass, Ok(206.0 * U_MASS_EV));
        assert_eq!(records.len(), 1, "{:?}", records);
        assert_eq!(records[0].0, log::Level::Warn);
        assert!(records[0].1.contains("Pb206"), "{}", records[0].1);

        let (mass, records) = capture::records_of(|| r.mass_from_pdg_id(PROTON_ID, true, None));
        assert_eq!(mass, Ok(PROTON_MASS_EV));
        assert!(records.is_empty(), "{:?}", records);
    }

    #[test]
    fn test_configured_approximation_policy() {
        let strict = Resolver::new(ResolverConfig {
            allow_approximation: false,
            ..Default::default()
        });
        let pb206 = pdg_id_ion(206, 82).unwrap();
        assert_eq!(resolver().mass(pb206, None), Ok(206.0 * U_MASS_EV));
        assert_eq!(strict.mass(pb206, None), Err(PdgError::MassNotFound("Pb206".into())));
        assert_eq!(strict.mass(pb206, Some(206.1 * U_MASS_EV)), Ok(206.1 * U_MASS_EV));
        assert_eq!(strict.mass(PROTON_ID, None), Ok(PROTON_MASS_EV));
    }

    #[test]
    fn test_expected_mass_is_trusted_when_consistent() {
        let r = resolver();
        let pb206 = pdg_id_ion(206, 82).unwrap();
        let measured = 191_863_000_000.0;
        assert_eq!(r.mass_from_pdg_id(pb206, false, Some(measured)), Ok(measured));
        // 100u is not Pb206
        assert!(r.mass_from_pdg_id(pb206, false, Some(100.0 * U_MASS_EV)).is_err());
        // Pions carry no nucleons, so any expected mass passes
        assert_eq!(r.mass_from_pdg_id(211, true, Some(139_570_390.0)), Ok(139_570_390.0));
        assert!(r.mass_from_pdg_id(211, true, None).is_err());
    }

    #[test]
    fn test_mass_consistency() {
        let r = resolver();
        assert_eq!(r.mass_consistent(PROTON_ID, PROTON_MASS_EV), Ok(true));
        assert_eq!(r.mass_consistent(PROTON_ID, ELECTRON_MASS_EV), Ok(false));
        assert_eq!(r.mass_consistent(-ELECTRON_ID, ELECTRON_MASS_EV), Ok(true));
        assert_eq!(r.mass_consistent(MUON_ID, PROTON_MASS_EV), Ok(false));
        assert_eq!(r.mass_consistent(PB208_ID, PB208_MASS_EV), Ok(true));
        assert_eq!(r.mass_consistent(PB208_ID, 200.0 * U_MASS_EV), Ok(false));
        // Unchecked species
        assert_eq!(r.mass_consistent(22, 12345.0), Ok(true));
        assert!(r.mass_consistent(999999, 1.0).is_err());
    }

    #[test]
    fn test_mass_consistency_batch_and_mask() {
        let r = resolver();
        let ids = [PROTON_ID, PB208_ID, ELECTRON_ID];
        let masses = [PROTON_MASS_EV, PB208_MASS_EV, PROTON_MASS_EV];
        assert_eq!(
            r.mass_consistent_batch(Broadcast::from(&ids), Broadcast::from(&masses), None),
            Ok(false)
        );
        assert_eq!(
            r.mass_consistent_batch(
                Broadcast::from(&ids),
                Broadcast::from(&masses),
                Some(&[true, true, false][..])
            ),
            Ok(true)
        );
        // Scalar id against several masses
        assert_eq!(
            r.mass_consistent_batch(
                Broadcast::Scalar(PROTON_ID),
                Broadcast::from(&[PROTON_MASS_EV, PROTON_MASS_EV + 10.0][..]),
                None
            ),
            Ok(true)
        );
        // Everything masked out
        assert_eq!(
            r.mass_consistent_batch(
                Broadcast::from(&ids),
                Broadcast::from(&masses),
                Some(&[false, false, false][..])
            ),
            Ok(true)
        );
    }

    #[test]
    fn test_masses_batch() {
        let r = resolver();
        assert_eq!(
            r.masses_from_pdg_ids(&[PROTON_ID, ELECTRON_ID, pdg_id_ion(12, 6).unwrap()], true, None),
            Ok(vec![PROTON_MASS_EV, ELECTRON_MASS_EV, 12.0 * U_MASS_EV])
        );
        assert!(r.masses_from_pdg_ids(&[PROTON_ID, 22], true, None).is_err());
    }
}
