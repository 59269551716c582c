use serde::Serialize;

use crate::mass::MassTable;
use crate::spectrum::Spectrum;
use crate::Error;

/// Boundary behavior when enumerating subpeptide windows
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Wrap {
    /// Windows wrap around the end of the sequence (cyclic peptide)
    Cyclic,
    /// Windows that would run past the end are skipped
    Linear,
}

/// An ordered sequence of residue masses. The sequence is the peptide;
/// amino acid symbols are only used when building one from text.
///
/// Peptides are immutable: [`Peptide::extend`] returns a new peptide, so a
/// candidate can never change under the search engine.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Peptide {
    masses: Vec<u32>,
    // Maintained on construction so the search loop never re-sums
    total_mass: u32,
}

impl Peptide {
    /// The empty peptide, root of the search tree
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a peptide from a list of residue masses. The caller ensures
    /// the masses sum within `u32`; masses read from input are capped by
    /// [`crate::mass::MAX_MASS`] at parse time.
    pub fn from_masses(masses: Vec<u32>) -> Self {
        let total_mass = masses.iter().sum();
        Peptide { masses, total_mass }
    }

    /// Build a peptide from a string of amino acid symbols, looking each
    /// residue up in `table`
    pub fn from_symbols(symbols: &str, table: &MassTable) -> Result<Self, Error> {
        let symbols = symbols.trim();
        let mut masses = Vec::with_capacity(symbols.len());
        let mut total_mass = 0u32;
        for &symbol in symbols.as_bytes() {
            let mass = table.mass_of(symbol)?;
            total_mass = total_mass
                .checked_add(mass)
                .ok_or_else(|| Error::MalformedInput {
                    line: 1,
                    reason: "total peptide mass exceeds the supported range".into(),
                })?;
            masses.push(mass);
        }
        Ok(Peptide { masses, total_mass })
    }

    /// A new peptide with `mass` appended
    pub fn extend(&self, mass: u32) -> Peptide {
        let mut masses = Vec::with_capacity(self.masses.len() + 1);
        masses.extend_from_slice(&self.masses);
        masses.push(mass);
        Peptide {
            masses,
            total_mass: self.total_mass + mass,
        }
    }

    pub fn masses(&self) -> &[u32] {
        &self.masses
    }

    pub fn len(&self) -> usize {
        self.masses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.masses.is_empty()
    }

    pub fn total_mass(&self) -> u32 {
        self.total_mass
    }

    // Total mass of every contiguous window of width 1..len at every offset.
    // The cyclic mode yields exactly len·(len−1) terms; linear mode skips
    // windows crossing the boundary and yields fewer.
    fn window_masses(&self, wrap: Wrap) -> Vec<u32> {
        let n = self.masses.len();
        let mut out = Vec::with_capacity(n * n.saturating_sub(1));
        for offset in 0..n {
            let mut sum = 0;
            for width in 1..n {
                let idx = match wrap {
                    Wrap::Cyclic => (offset + width - 1) % n,
                    Wrap::Linear => {
                        if offset + width > n {
                            break;
                        }
                        offset + width - 1
                    }
                };
                sum += self.masses[idx];
                out.push(sum);
            }
        }
        out
    }

    /// Theoretical spectrum of the cyclic form: 0, the total mass, and the
    /// mass of every cyclic subpeptide, duplicates preserved.
    ///
    /// For a peptide of length n this spectrum has n·(n−1)+2 entries.
    pub fn cyclospectrum(&self) -> Spectrum {
        let mut masses = self.window_masses(Wrap::Cyclic);
        masses.push(0);
        masses.push(self.total_mass);
        Spectrum::new(masses)
    }

    /// Theoretical spectrum of the linear form: as [`Peptide::cyclospectrum`]
    /// but windows never wrap around the end
    pub fn linear_spectrum(&self) -> Spectrum {
        let mut masses = self.window_masses(Wrap::Linear);
        masses.push(0);
        masses.push(self.total_mass);
        Spectrum::new(masses)
    }
}

impl std::fmt::Display for Peptide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (idx, mass) in self.masses.iter().enumerate() {
            if idx > 0 {
                f.write_str("-")?;
            }
            write!(f, "{}", mass)?;
        }
        Ok(())
    }
}
