// src/resolver/grammar.rs

//! Particle name grammar.
//!
//! ```text
//! name     := alias | "anti-" alias' | ["anti-"] element sep* mass
//! element  := full element name | element symbol     (case-insensitive)
//! sep      := "." | "_" | "-" | " "
//! mass     := integer
//! ```
//!
//! `alias'` is an alias with its trailing charge flipped (`+` <-> `-`,
//! `++` <-> `--`), so "anti-X+" names the anti-particle of "X-".

use crate::error::{PdgError, Result};
use crate::model::elements::iter_elements;
use crate::model::particles::id_for_alias;
use crate::model::PdgId;
use crate::resolver::ion::MAX_MASS_NUMBER;

pub const ANTI_PREFIX: &str = "anti-";

const SEPARATORS: [char; 4] = ['.', '_', '-', ' '];

/// What a caller may hand to the name lookup
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NameInput<'a> {
    /// No name given, resolves to the undefined particle (0)
    Undefined,
    Name(&'a str),
    /// Already resolved, passed through unchanged
    Id(PdgId),
}

impl<'a> From<&'a str> for NameInput<'a> {
    fn from(name: &'a str) -> Self {
        NameInput::Name(name)
    }
}

impl<'a> From<&'a String> for NameInput<'a> {
    fn from(name: &'a String) -> Self {
        NameInput::Name(name.as_str())
    }
}

impl<'a> From<Option<&'a str>> for NameInput<'a> {
    fn from(name: Option<&'a str>) -> Self {
        name.map_or(NameInput::Undefined, NameInput::Name)
    }
}

impl<'a> From<PdgId> for NameInput<'a> {
    fn from(pdg_id: PdgId) -> Self {
        NameInput::Id(pdg_id)
    }
}

/// Outcome of parsing a name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParsedName {
    /// Direct alias hit
    Alias(PdgId),
    /// "anti-" form of an alias; holds the id of the conjugate partner
    AntiAlias(PdgId),
    Ion { anti: bool, z: i64, a: i64 },
}

/// Which element table produced an ion match
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ElementToken {
    FullName,
    Symbol,
}

/// Swap the trailing charge of a name: "++" <-> "--", "+" <-> "-".
pub fn flip_charge_suffix(name: &str) -> String {
    if let Some(stem) = name.strip_suffix("++") {
        format!("{}--", stem)
    } else if let Some(stem) = name.strip_suffix("--") {
        format!("{}++", stem)
    } else if let Some(stem) = name.strip_suffix('+') {
        format!("{}-", stem)
    } else if let Some(stem) = name.strip_suffix('-') {
        format!("{}+", stem)
    } else {
        name.to_string()
    }
}

/// Display name of the anti-particle of `name`
pub fn anti_name(name: &str) -> String {
    flip_charge_suffix(&format!("{}{}", ANTI_PREFIX, name))
}

/// Longest element name (or symbol) that `lname` starts with
fn match_element(lname: &str, token: ElementToken) -> Option<(i64, usize)> {
    iter_elements()
        .filter_map(|(z, symbol, full_name)| {
            let candidate = match token {
                ElementToken::FullName => full_name,
                ElementToken::Symbol => symbol,
            };
            let prefix = lname.get(..candidate.len())?;
            prefix.eq_ignore_ascii_case(candidate).then_some((z, candidate.len()))
        })
        .max_by_key(|(_, len)| *len)
}

/// Parse `<element><sep><A>` from an already lower-cased string.
/// Returns Ok(None) when no element prefix matches at all.
fn parse_ion(name: &str, body: &str) -> Result<Option<(i64, i64)>> {
    let Some((z, len)) = match_element(body, ElementToken::FullName)
        .or_else(|| match_element(body, ElementToken::Symbol))
    else {
        return Ok(None);
    };

    let digits: String = body[len..].chars().filter(|c| !SEPARATORS.contains(c)).collect();
    let a = digits
        .parse::<i64>()
        .ok()
        .filter(|a| (0..=MAX_MASS_NUMBER).contains(a))
        .ok_or_else(|| PdgError::MalformedIonName(name.to_string()))?;

    log::debug!("Parsed '{}' as ion Z={} A={}", name, z, a);
    Ok(Some((z, a)))
}

/// Parse a particle name according to the grammar above
pub fn parse_name(name: &str) -> Result<ParsedName> {
    let lname = name.to_lowercase();

    // 1. particle
    if let Some(pdg_id) = id_for_alias(&lname) {
        return Ok(ParsedName::Alias(pdg_id));
    }

    // 2. anti-particle
    let stripped = lname.strip_prefix(ANTI_PREFIX).filter(|rest| !rest.is_empty());
    if let Some(rest) = stripped {
        if let Some(pdg_id) = id_for_alias(&flip_charge_suffix(rest)) {
            return Ok(ParsedName::AntiAlias(pdg_id));
        }
    }

    // 3. (anti-)ion
    let (anti, body) = match stripped {
        Some(rest) => (true, rest),
        None => (false, lname.as_str()),
    };
    match parse_ion(name, body)? {
        Some((z, a)) => Ok(ParsedName::Ion { anti, z, a }),
        None => Err(PdgError::UnrecognizedName(name.to_string())),
    }
}
