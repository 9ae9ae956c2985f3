// src/model/elements.rs

use crate::error::{PdgError, Result};

/// Number of known elements (Og = 118)
pub const MAX_Z: i64 = 118;

/// (symbol, full name), indexed by Z - 1
const ELEMENTS: [(&str, &str); 118] = [
    // --- Period 1 ---
    ("H", "Hydrogen"), ("He", "Helium"),
    // --- Period 2 ---
    ("Li", "Lithium"), ("Be", "Beryllium"), ("B", "Boron"), ("C", "Carbon"),
    ("N", "Nitrogen"), ("O", "Oxygen"), ("F", "Fluorine"), ("Ne", "Neon"),
    // --- Period 3 ---
    ("Na", "Sodium"), ("Mg", "Magnesium"), ("Al", "Aluminum"), ("Si", "Silicon"),
    ("P", "Phosphorus"), ("S", "Sulfur"), ("Cl", "Chlorine"), ("Ar", "Argon"),
    // --- Period 4 ---
    ("K", "Potassium"), ("Ca", "Calcium"), ("Sc", "Scandium"), ("Ti", "Titanium"),
    ("V", "Vanadium"), ("Cr", "Chromium"), ("Mn", "Manganese"), ("Fe", "Iron"),
    ("Co", "Cobalt"), ("Ni", "Nickel"), ("Cu", "Copper"), ("Zn", "Zinc"),
    ("Ga", "Gallium"), ("Ge", "Germanium"), ("As", "Arsenic"), ("Se", "Selenium"),
    ("Br", "Bromine"), ("Kr", "Krypton"),
    // --- Period 5 ---
    ("Rb", "Rubidium"), ("Sr", "Strontium"), ("Y", "Yttrium"), ("Zr", "Zirconium"),
    ("Nb", "Niobium"), ("Mo", "Molybdenum"), ("Tc", "Technetium"), ("Ru", "Ruthenium"),
    ("Rh", "Rhodium"), ("Pd", "Palladium"), ("Ag", "Silver"), ("Cd", "Cadmium"),
    ("In", "Indium"), ("Sn", "Tin"), ("Sb", "Antimony"), ("Te", "Tellurium"),
    ("I", "Iodine"), ("Xe", "Xenon"),
    // --- Period 6 ---
    ("Cs", "Cesium"), ("Ba", "Barium"), ("La", "Lanthanum"), ("Ce", "Cerium"),
    ("Pr", "Praseodymium"), ("Nd", "Neodymium"), ("Pm", "Promethium"), ("Sm", "Samarium"),
    ("Eu", "Europium"), ("Gd", "Gadolinium"), ("Tb", "Terbium"), ("Dy", "Dysprosium"),
    ("Ho", "Holmium"), ("Er", "Erbium"), ("Tm", "Thulium"), ("Yb", "Ytterbium"),
    ("Lu", "Lutetium"), ("Hf", "Hafnium"), ("Ta", "Tantalum"), ("W", "Tungsten"),
    ("Re", "Rhenium"), ("Os", "Osmium"), ("Ir", "Iridium"), ("Pt", "Platinum"),
    ("Au", "Gold"), ("Hg", "Mercury"), ("Tl", "Thallium"), ("Pb", "Lead"),
    ("Bi", "Bismuth"), ("Po", "Polonium"), ("At", "Astatine"), ("Rn", "Radon"),
    // --- Period 7 ---
    ("Fr", "Francium"), ("Ra", "Radium"), ("Ac", "Actinium"), ("Th", "Thorium"),
    ("Pa", "Protactinium"), ("U", "Uranium"), ("Np", "Neptunium"), ("Pu", "Plutonium"),
    ("Am", "Americium"), ("Cm", "Curium"), ("Bk", "Berkelium"), ("Cf", "Californium"),
    ("Es", "Einsteinium"), ("Fm", "Fermium"), ("Md", "Mendelevium"), ("No", "Nobelium"),
    ("Lr", "Lawrencium"), ("Rf", "Rutherfordium"), ("Db", "Dubnium"), ("Sg", "Seaborgium"),
    ("Bh", "Bohrium"), ("Hs", "Hassium"), ("Mt", "Meitnerium"), ("Ds", "Darmstadtium"),
    ("Rg", "Roentgenium"), ("Cn", "Copernicium"), ("Nh", "Nihonium"), ("Fl", "Flerovium"),
    ("Mc", "Moscovium"), ("Lv", "Livermorium"), ("Ts", "Tennessine"), ("Og", "Oganesson"),
];

fn entry(z: i64) -> Result<(&'static str, &'static str)> {
    if (1..=MAX_Z).contains(&z) {
        Ok(ELEMENTS[(z - 1) as usize])
    } else {
        Err(PdgError::UnrecognizedElement(z))
    }
}

/// Short chemical symbol for atomic number `z` (e.g. 82 -> "Pb")
pub fn element_symbol(z: i64) -> Result<&'static str> {
    entry(z).map(|(symbol, _)| symbol)
}

/// Full English name for atomic number `z` (e.g. 82 -> "Lead")
pub fn element_full_name(z: i64) -> Result<&'static str> {
    entry(z).map(|(_, name)| name)
}

/// Returns the atomic number (Z) for a symbol, ignoring case
pub fn get_atomic_number(symbol: &str) -> Option<i64> {
    ELEMENTS
        .iter()
        .position(|(s, _)| s.eq_ignore_ascii_case(symbol))
        .map(|idx| idx as i64 + 1)
}

/// Iterate (Z, symbol, full name) in order of Z
pub fn iter_elements() -> impl Iterator<Item = (i64, &'static str, &'static str)> {
    ELEMENTS
        .iter()
        .enumerate()
        .map(|(idx, (symbol, name))| (idx as i64 + 1, *symbol, *name))
}
