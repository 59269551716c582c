use serde::Serialize;

use crate::mass::MAX_MASS;
use crate::Error;

/// A multiset of integer masses, stored sorted in ascending order.
///
/// The same type holds both the experimental spectrum read from input and
/// the theoretical spectra derived from candidate peptides.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Spectrum {
    masses: Vec<u32>,
}

impl Spectrum {
    pub fn new(mut masses: Vec<u32>) -> Self {
        masses.sort_unstable();
        Spectrum { masses }
    }

    /// Parse a whitespace-separated list of integer masses
    pub fn parse(contents: &str) -> Result<Self, Error> {
        let mut masses = Vec::new();
        for token in contents.split_ascii_whitespace() {
            let mass = token
                .parse::<u32>()
                .ok()
                .filter(|&m| m <= MAX_MASS)
                .ok_or_else(|| Error::MalformedInput {
                    line: 1,
                    reason: format!(
                        "expected an integer mass of at most {}, got `{}`",
                        MAX_MASS, token
                    ),
                })?;
            masses.push(mass);
        }
        Ok(Self::new(masses))
    }

    /// Masses in ascending order, duplicates preserved
    pub fn masses(&self) -> &[u32] {
        &self.masses
    }

    pub fn len(&self) -> usize {
        self.masses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.masses.is_empty()
    }

    /// The maximum observed mass, taken as the mass of the intact peptide.
    /// Zero for an empty spectrum.
    pub fn parent_mass(&self) -> u32 {
        self.masses.last().copied().unwrap_or(0)
    }

    /// Multiset equality
    pub fn is_identical_to(&self, other: &Spectrum) -> bool {
        self.masses == other.masses
    }

    /// Sub-multiset test: every mass of `other` occurs in `self` with at
    /// least the same multiplicity
    pub fn contains(&self, other: &Spectrum) -> bool {
        let mut i = 0;
        for &mass in &other.masses {
            while i < self.masses.len() && self.masses[i] < mass {
                i += 1;
            }
            if i == self.masses.len() || self.masses[i] != mass {
                return false;
            }
            i += 1;
        }
        true
    }
}

impl std::fmt::Display for Spectrum {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (idx, mass) in self.masses.iter().enumerate() {
            if idx > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", mass)?;
        }
        Ok(())
    }
}
