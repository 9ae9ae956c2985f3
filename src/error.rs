// src/error.rs

use std::fmt;

/// Everything that can go wrong while resolving a particle identity.
#[derive(Debug, Clone, PartialEq)]
pub enum PdgError {
    /// The name matches no alias, no anti-particle form and no element prefix
    UnrecognizedName(String),
    /// An element prefix matched but the mass number could not be read
    MalformedIonName(String),
    /// Neither a table entry, its negation, nor an ion encoding
    UnrecognizedId(i64),
    /// Atomic number outside 1..=118
    UnrecognizedElement(i64),
    /// Mass number that does not fit the three A digits of an ion number
    MassNumberOutOfRange(i64),
    UnclassifiableMassCharge { mass: f64, charge: f64 },
    MassNotFound(String),
    /// Two batch inputs (or a batch and its mask) disagree in length
    ShapeMismatch { left: usize, right: usize },
}

impl fmt::Display for PdgError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            PdgError::UnrecognizedName(name) => {
                write!(f, "Particle {} not found in pdg dictionary!", name)
            }
            PdgError::MalformedIonName(name) => write!(
                f,
                "Particle {} not found in pdg dictionary, or wrongly formatted ion name: \
                 cannot deduce A from {}!\nUse e.g. 'Pb208', 'Pb 208', 'Pb-208', 'Pb_208', or 'Pb.208'.",
                name, name
            ),
            PdgError::UnrecognizedId(id) => write!(f, "PDG ID {} not recognised!", id),
            PdgError::UnrecognizedElement(z) => {
                write!(f, "Element with {} protons not known.", z)
            }
            PdgError::MassNumberOutOfRange(a) => {
                write!(f, "Mass number {} does not fit an ion PDG ID (0..=999).", a)
            }
            PdgError::UnclassifiableMassCharge { mass, charge } => write!(
                f,
                "Particle with q={} and m={} not recognised!",
                charge, mass
            ),
            PdgError::MassNotFound(name) => write!(f, "Exact mass for {} not found.", name),
            PdgError::ShapeMismatch { left, right } => write!(
                f,
                "Batch inputs have different lengths: {} vs {}",
                left, right
            ),
        }
    }
}

impl std::error::Error for PdgError {}

pub type Result<T> = std::result::Result<T, PdgError>;
