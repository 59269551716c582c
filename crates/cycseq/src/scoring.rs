use serde::Serialize;

use crate::peptide::Peptide;
use crate::spectrum::Spectrum;

/// Shared-peaks count between two spectra: the size of their multiset
/// intersection, Σ min(count in `a`, count in `b`) over distinct masses.
///
/// Both stores are sorted, so a two-pointer merge walk suffices.
pub fn shared_peaks(a: &Spectrum, b: &Spectrum) -> u32 {
    let (a, b) = (a.masses(), b.masses());
    let mut shared = 0;
    let (mut i, mut j) = (0, 0);
    while i < a.len() && j < b.len() {
        match a[i].cmp(&b[j]) {
            std::cmp::Ordering::Less => i += 1,
            std::cmp::Ordering::Greater => j += 1,
            std::cmp::Ordering::Equal => {
                shared += 1;
                i += 1;
                j += 1;
            }
        }
    }
    shared
}

impl Peptide {
    /// Shared-peaks score of this peptide's cyclic theoretical spectrum
    /// against a reference spectrum
    pub fn score(&self, reference: &Spectrum) -> u32 {
        shared_peaks(&self.cyclospectrum(), reference)
    }
}

/// A candidate peptide carrying its score for one leaderboard round
#[derive(Clone, Debug, Serialize)]
pub struct ScoredPeptide {
    pub peptide: Peptide,
    pub score: u32,
}

impl ScoredPeptide {
    pub fn new(peptide: Peptide, reference: &Spectrum) -> Self {
        let score = peptide.score(reference);
        ScoredPeptide { peptide, score }
    }
}

impl PartialEq for ScoredPeptide {
    fn eq(&self, other: &Self) -> bool {
        self.score == other.score
    }
}

impl Eq for ScoredPeptide {}

impl PartialOrd for ScoredPeptide {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ScoredPeptide {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.score.cmp(&other.score)
    }
}
