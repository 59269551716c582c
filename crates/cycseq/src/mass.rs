use std::collections::BTreeMap;

use crate::Error;

/// Upper bound on any single mass read from input. Every sum the search
/// loop forms stays within one extension of the parent mass, so capping
/// individual masses here keeps all arithmetic inside `u32`.
pub const MAX_MASS: u32 = 1 << 20;

/// Integer residue masses for the 20 proteinogenic amino acids, in daltons
/// rounded to whole numbers
const STANDARD: [(u8, u32); 20] = [
    (b'G', 57),
    (b'A', 71),
    (b'S', 87),
    (b'P', 97),
    (b'V', 99),
    (b'T', 101),
    (b'C', 103),
    (b'I', 113),
    (b'L', 113),
    (b'N', 114),
    (b'D', 115),
    (b'K', 128),
    (b'Q', 128),
    (b'E', 129),
    (b'M', 131),
    (b'H', 137),
    (b'F', 147),
    (b'R', 156),
    (b'Y', 163),
    (b'W', 186),
];

/// Immutable amino acid to integer mass lookup, plus the deduplicated mass
/// alphabet used for peptide expansion
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MassTable {
    by_symbol: BTreeMap<u8, u32>,
    // Sorted, distinct mass values. I/L and K/Q share a mass, so this is
    // usually shorter than `by_symbol`
    masses: Vec<u32>,
}

impl MassTable {
    /// Parse a mass table from text, one `<symbol> <integer>` pair per line.
    /// Blank lines are skipped; anything else is malformed input.
    pub fn parse(contents: &str) -> Result<Self, Error> {
        let mut by_symbol = BTreeMap::new();
        for (idx, line) in contents.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            let mut tokens = line.split_ascii_whitespace();
            let (symbol, mass) = match (tokens.next(), tokens.next(), tokens.next()) {
                (Some(symbol), Some(mass), None) => (symbol, mass),
                _ => {
                    return Err(Error::MalformedInput {
                        line: idx + 1,
                        reason: format!("expected `<symbol> <integer>`, got `{}`", line),
                    })
                }
            };
            let symbol = match symbol.as_bytes() {
                [b] => *b,
                _ => {
                    return Err(Error::MalformedInput {
                        line: idx + 1,
                        reason: format!("amino acid symbol must be a single character, got `{}`", symbol),
                    })
                }
            };
            let mass = mass
                .parse::<u32>()
                .ok()
                .filter(|&m| m > 0 && m <= MAX_MASS)
                .ok_or_else(|| Error::MalformedInput {
                    line: idx + 1,
                    reason: format!(
                        "expected a positive integer mass of at most {}, got `{}`",
                        MAX_MASS, mass
                    ),
                })?;
            by_symbol.insert(symbol, mass);
        }
        Ok(Self::from_map(by_symbol))
    }

    fn from_map(by_symbol: BTreeMap<u8, u32>) -> Self {
        let mut masses = by_symbol.values().copied().collect::<Vec<_>>();
        masses.sort_unstable();
        masses.dedup();
        MassTable { by_symbol, masses }
    }

    /// The sorted, deduplicated mass alphabet
    pub fn masses(&self) -> &[u32] {
        &self.masses
    }

    pub fn mass_of(&self, symbol: u8) -> Result<u32, Error> {
        self.by_symbol
            .get(&symbol)
            .copied()
            .ok_or(Error::MissingMassForSymbol(symbol as char))
    }

    pub fn len(&self) -> usize {
        self.by_symbol.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_symbol.is_empty()
    }
}

impl Default for MassTable {
    fn default() -> Self {
        Self::from_map(STANDARD.into_iter().collect())
    }
}
