// src/model/particles.rs

//! Monte Carlo numbering scheme as defined by the Particle Data Group.
//! See https://pdg.lbl.gov/2007/reviews/montecarlorpp.pdf for details.
//! Not every particle is tabulated; ions are encoded on the fly.

use std::collections::HashMap;
use std::sync::OnceLock;

/// Signed PDG Monte Carlo particle number
pub type PdgId = i64;

pub const UNDEFINED_ID: PdgId = 0;
pub const ELECTRON_ID: PdgId = 11;
pub const MUON_ID: PdgId = 13;
pub const PROTON_ID: PdgId = 2212;
pub const NEUTRON_ID: PdgId = 2112;
pub const DEUTERIUM_ID: PdgId = 1_000_010_020;
pub const TRITIUM_ID: PdgId = 1_000_010_030;

/// Static table entry
#[derive(Debug, Clone, Copy)]
pub struct ParticleRecord {
    pub pdg_id: PdgId,
    /// In units of the elementary charge
    pub charge: f64,
    /// Display priority order, first one is canonical
    pub aliases: &'static [&'static str],
}

impl ParticleRecord {
    pub fn canonical_name(&self) -> &'static str {
        self.aliases[0]
    }
}

macro_rules! particle {
    ($id:expr, $q:expr, [$($alias:expr),+ $(,)?]) => {
        ParticleRecord { pdg_id: $id, charge: $q, aliases: &[$($alias),+] }
    };
}

const PARTICLES: &[ParticleRecord] = &[
    //        ID     q     names
    particle!(0,     0.0,  ["undefined"]),
    particle!(11,   -1.0,  ["e-", "electron", "e"]),
    particle!(-11,   1.0,  ["e+", "positron"]),
    particle!(12,    0.0,  ["𝛎e", "electron neutrino"]),
    particle!(13,   -1.0,  ["𝛍-", "muon", "muon-", "𝛍"]),
    particle!(-13,   1.0,  ["𝛍+", "anti-muon", "muon+"]),
    particle!(14,    0.0,  ["𝛎𝛍", "muon neutrino"]),
    particle!(15,   -1.0,  ["𝛕-", "tau", "tau-", "𝛕"]),
    particle!(-15,   1.0,  ["𝛕+", "anti-tau", "tau+"]),
    particle!(16,    0.0,  ["𝛎𝛕", "tau neutrino"]),
    particle!(22,    0.0,  ["𝛄", "photon"]),
    particle!(111,   0.0,  ["𝛑0", "pion", "pion0", "pi0"]),
    particle!(211,   1.0,  ["𝛑+", "pion+", "pi+"]),
    particle!(-211, -1.0,  ["𝛑-", "pion-", "pi-"]),
    particle!(311,   0.0,  ["K0", "kaon", "kaon0"]),
    particle!(321,   1.0,  ["K+", "kaon+"]),
    particle!(-321, -1.0,  ["K-", "kaon-"]),
    particle!(130,   0.0,  ["KL", "long kaon"]),
    particle!(310,   0.0,  ["KS", "short kaon"]),
    particle!(421,   0.0,  ["D0"]),
    particle!(411,   1.0,  ["D+"]),
    particle!(-411, -1.0,  ["D-"]),
    particle!(431,   1.0,  ["Ds+"]),
    particle!(-431, -1.0,  ["Ds-"]),
    particle!(2212,  1.0,  ["p+", "proton", "p"]),
    particle!(-2212, -1.0, ["p-", "anti-proton"]),
    particle!(2112,  0.0,  ["n", "neutron"]),
    particle!(2224,  2.0,  ["𝚫++", "delta++"]),
    particle!(2214,  1.0,  ["𝚫+", "delta+"]),
    particle!(2114,  0.0,  ["𝚫0", "delta0"]),
    particle!(1114, -1.0,  ["𝚫-", "delta-"]),
    particle!(3122,  0.0,  ["𝚲", "lambda"]),
    particle!(4122,  0.0,  ["𝚲c+", "lambdac+"]),
    particle!(3222,  1.0,  ["𝚺+", "sigma+"]),
    particle!(3212,  0.0,  ["𝚺0", "sigma0"]),
    particle!(3112, -1.0,  ["𝚺-", "sigma-"]),
    particle!(3322,  0.0,  ["𝚵0", "xi0"]),
    particle!(3312, -1.0,  ["𝚵-", "xi-"]),
    particle!(4132,  0.0,  ["𝚵c0", "xic0"]),
    particle!(4232,  0.0,  ["𝚵c+", "xic+"]),
    particle!(4312,  0.0,  ["𝚵'c0", "xiprimec0"]),
    particle!(4322,  0.0,  ["𝚵'c+", "xiprimec+"]),
    particle!(3334, -1.0,  ["𝛀-", "omega-"]),
    particle!(4332, -1.0,  ["𝛀c0", "omegac0"]),
    particle!(DEUTERIUM_ID, 1.0, ["deuterium"]),
    particle!(TRITIUM_ID,   1.0, ["tritium"]),
];

// Global lookups (initialized once on first use)
static BY_ID: OnceLock<HashMap<PdgId, ParticleRecord>> = OnceLock::new();
static BY_ALIAS: OnceLock<HashMap<String, PdgId>> = OnceLock::new();

fn by_id() -> &'static HashMap<PdgId, ParticleRecord> {
    BY_ID.get_or_init(|| PARTICLES.iter().map(|rec| (rec.pdg_id, *rec)).collect())
}

/// Lower-cased alias -> PDG ID. On a duplicate alias the first definition wins.
fn by_alias() -> &'static HashMap<String, PdgId> {
    BY_ALIAS.get_or_init(|| {
        let mut map = HashMap::new();
        for rec in PARTICLES {
            for alias in rec.aliases {
                map.entry(alias.to_lowercase()).or_insert(rec.pdg_id);
            }
        }
        map
    })
}

/// Table entry for an exact PDG ID
pub fn get_record(pdg_id: PdgId) -> Option<&'static ParticleRecord> {
    by_id().get(&pdg_id)
}

/// PDG ID registered for an already lower-cased alias
pub fn id_for_alias(lname: &str) -> Option<PdgId> {
    by_alias().get(lname).copied()
}

/// All tabulated particles in definition order
pub fn all_records() -> &'static [ParticleRecord] {
    PARTICLES
}
