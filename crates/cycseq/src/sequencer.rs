use log::{debug, trace};

use crate::peptide::Peptide;
use crate::scoring::ScoredPeptide;
use crate::spectrum::Spectrum;

/// Branch-and-bound search for cyclic peptides matching a reference
/// spectrum. Candidates are grown one residue mass at a time from the empty
/// peptide; total mass strictly increases every round, so the loop is
/// bounded by the parent mass.
pub struct Sequencer<'a> {
    reference: &'a Spectrum,
    // Sorted, distinct residue masses - iteration order fixes the
    // discovery order of results
    alphabet: &'a [u32],
}

impl<'a> Sequencer<'a> {
    pub fn new(reference: &'a Spectrum, alphabet: &'a [u32]) -> Self {
        Sequencer {
            reference,
            alphabet,
        }
    }

    // One residue-mass extension of every candidate, in alphabet order
    fn expand(&self, candidates: &[Peptide]) -> Vec<Peptide> {
        let mut expanded = Vec::with_capacity(candidates.len() * self.alphabet.len());
        for peptide in candidates {
            for &mass in self.alphabet {
                expanded.push(peptide.extend(mass));
            }
        }
        expanded
    }

    /// Exhaustive search: every peptide whose cyclic theoretical spectrum is
    /// multiset-identical to the reference, in discovery order.
    ///
    /// A candidate survives a round only if its *linear* spectrum is a
    /// sub-multiset of the reference. Linear subpeptide masses are a
    /// necessary condition for any cyclic completion, while acceptance
    /// tests the cyclic spectrum - the asymmetry is what makes the bound
    /// sound, so both checks stay as they are.
    pub fn exhaustive(&self) -> Vec<Peptide> {
        let mut matched = Vec::new();
        let mut candidates = vec![Peptide::new()];
        let mut round = 0;
        while !candidates.is_empty() {
            round += 1;
            let expanded = self.expand(&candidates);
            candidates = Vec::with_capacity(expanded.len());
            for peptide in expanded {
                if peptide.cyclospectrum().is_identical_to(self.reference) {
                    matched.push(peptide);
                } else if self.reference.contains(&peptide.linear_spectrum()) {
                    candidates.push(peptide);
                } else {
                    trace!("pruned {}", peptide);
                }
            }
            debug!(
                "round {}: {} candidates survive, {} matched",
                round,
                candidates.len(),
                matched.len()
            );
        }
        matched
    }

    /// Leaderboard search: keep only the `n` best-scoring candidates (with
    /// ties) per round, and return the best-scoring peptide whose total mass
    /// equals the parent mass of the reference.
    ///
    /// A later candidate replaces the leader only on a strict score
    /// improvement, so the first-found peptide wins ties. If no candidate
    /// ever reaches the parent mass the empty peptide is returned with
    /// score 0.
    pub fn leaderboard(&self, n: usize) -> ScoredPeptide {
        let parent_mass = self.reference.parent_mass();
        let mut leader = ScoredPeptide {
            peptide: Peptide::new(),
            score: 0,
        };
        let mut board = vec![Peptide::new()];
        let mut round = 0;
        while !board.is_empty() {
            round += 1;
            let expanded = self.expand(&board);
            let mut scored = Vec::with_capacity(expanded.len());
            for peptide in expanded {
                if peptide.total_mass() > parent_mass {
                    // Overshot - no extension can come back down
                    continue;
                }
                let candidate = ScoredPeptide::new(peptide, self.reference);
                if candidate.peptide.total_mass() == parent_mass && candidate.score > leader.score {
                    leader = candidate.clone();
                }
                scored.push(candidate);
            }
            Self::cut(&mut scored, n);
            debug!(
                "round {}: {} on the leaderboard, leader score {}",
                round,
                scored.len(),
                leader.score
            );
            board = scored.into_iter().map(|c| c.peptide).collect();
        }
        leader
    }

    // Keep the n best-scoring candidates plus everything tied with the
    // n-th score. No cut when the board is already small enough.
    fn cut(scored: &mut Vec<ScoredPeptide>, n: usize) {
        if scored.len() <= n {
            return;
        }
        if n == 0 {
            scored.clear();
            return;
        }
        // Stable sort keeps discovery order within a score tier
        scored.sort_by(|a, b| b.score.cmp(&a.score));
        let threshold = scored[n - 1].score;
        let keep = scored
            .iter()
            .position(|c| c.score < threshold)
            .unwrap_or(scored.len());
        scored.truncate(keep);
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::mass::MassTable;

    fn rotations_and_reflections(masses: &[u32]) -> Vec<Vec<u32>> {
        let n = masses.len();
        let mut out = Vec::new();
        let mut reversed = masses.to_vec();
        reversed.reverse();
        for seq in [masses.to_vec(), reversed] {
            for start in 0..n {
                out.push((0..n).map(|i| seq[(start + i) % n]).collect());
            }
        }
        out.sort();
        out.dedup();
        out
    }

    #[test]
    fn exhaustive_textbook() {
        let table = MassTable::default();
        let reference = Spectrum::parse("0 113 128 186 241 299 314 427").unwrap();
        let sequencer = Sequencer::new(&reference, table.masses());

        let mut found = sequencer
            .exhaustive()
            .into_iter()
            .map(|p| p.masses().to_vec())
            .collect::<Vec<_>>();
        found.sort();
        found.dedup();

        assert_eq!(found, rotations_and_reflections(&[113, 128, 186]));
    }

    #[test]
    fn exhaustive_results_match_reference_exactly() {
        let table = MassTable::default();
        let reference = Spectrum::parse("0 113 128 186 241 299 314 427").unwrap();
        let sequencer = Sequencer::new(&reference, table.masses());
        for peptide in sequencer.exhaustive() {
            assert!(peptide.cyclospectrum().is_identical_to(&reference));
        }
    }

    #[test]
    fn exhaustive_no_solution() {
        let table = MassTable::default();
        // 1 is not reachable from any residue mass
        let reference = Spectrum::parse("0 1 2 3").unwrap();
        let sequencer = Sequencer::new(&reference, table.masses());
        assert!(sequencer.exhaustive().is_empty());
    }

    #[test]
    fn empty_alphabet_is_degenerate() {
        let reference = Spectrum::parse("0 113 128 186 241 299 314 427").unwrap();
        let sequencer = Sequencer::new(&reference, &[]);
        assert!(sequencer.exhaustive().is_empty());

        let leader = sequencer.leaderboard(10);
        assert!(leader.peptide.is_empty());
        assert_eq!(leader.score, 0);
    }

    #[test]
    fn leaderboard_finds_perfect_match() {
        let table = MassTable::default();
        let reference = Peptide::from_masses(vec![113, 128, 186]).cyclospectrum();
        let sequencer = Sequencer::new(&reference, table.masses());

        let leader = sequencer.leaderboard(25);
        // Perfect match: every one of the 8 reference peaks accounted for
        assert_eq!(leader.score, 8);
        assert_eq!(leader.peptide.total_mass(), 427);
        assert!(leader.peptide.cyclospectrum().is_identical_to(&reference));
    }

    #[test]
    fn leaderboard_textbook() {
        let table = MassTable::default();
        let reference =
            Spectrum::parse("0 71 113 129 147 200 218 260 313 331 347 389 460").unwrap();
        let sequencer = Sequencer::new(&reference, table.masses());

        let leader = sequencer.leaderboard(10);
        // The winning cyclic peptide is NQEL-like LFAE (113-147-71-129) or
        // one of its rotations/reflections, all scoring 13
        assert_eq!(leader.score, 13);
        assert_eq!(leader.peptide.total_mass(), 460);
        let mut masses = leader.peptide.masses().to_vec();
        masses.sort_unstable();
        assert_eq!(masses, vec![71, 113, 129, 147]);
    }

    #[test]
    fn leaderboard_width_one_is_greedy() {
        // With a board of one (plus ties) each round, the search degenerates
        // to greedy hill-climbing and still recovers the winning peptide
        let table = MassTable::default();
        let reference =
            Spectrum::parse("0 71 113 129 147 200 218 260 313 331 347 389 460").unwrap();
        let sequencer = Sequencer::new(&reference, table.masses());

        let leader = sequencer.leaderboard(1);
        assert_eq!(leader.score, 13);
        assert_eq!(leader.peptide.total_mass(), 460);
        let mut masses = leader.peptide.masses().to_vec();
        masses.sort_unstable();
        assert_eq!(masses, vec![71, 113, 129, 147]);
    }

    #[test]
    fn leaderboard_width_zero_returns_empty_leader() {
        let table = MassTable::default();
        let reference = Spectrum::parse("0 113 128 186 241 299 314 427").unwrap();
        let sequencer = Sequencer::new(&reference, table.masses());

        let leader = sequencer.leaderboard(0);
        assert!(leader.peptide.is_empty());
        assert_eq!(leader.score, 0);
    }

    #[test]
    fn leaderboard_unreachable_parent_mass() {
        // No combination of residue masses sums to the parent mass 100, so
        // the leader is never replaced
        let table = MassTable::default();
        let reference = Spectrum::parse("0 57 100").unwrap();
        let sequencer = Sequencer::new(&reference, table.masses());

        let leader = sequencer.leaderboard(10);
        assert!(leader.peptide.is_empty());
        assert_eq!(leader.score, 0);
    }

    #[test]
    fn cut_keeps_boundary_ties() {
        let scores = [10, 10, 9, 8];
        let mut board = scores
            .iter()
            .map(|&score| ScoredPeptide {
                peptide: Peptide::from_masses(vec![score]),
                score,
            })
            .collect::<Vec<_>>();
        Sequencer::cut(&mut board, 2);
        assert_eq!(board.iter().map(|c| c.score).collect::<Vec<_>>(), [10, 10]);

        // A tie spanning the boundary survives
        let mut board = [10, 9, 9, 8]
            .iter()
            .map(|&score| ScoredPeptide {
                peptide: Peptide::from_masses(vec![score]),
                score,
            })
            .collect::<Vec<_>>();
        Sequencer::cut(&mut board, 2);
        assert_eq!(
            board.iter().map(|c| c.score).collect::<Vec<_>>(),
            [10, 9, 9]
        );
    }

    #[test]
    fn cut_noop_when_board_fits() {
        let mut board = (0..3)
            .map(|score| ScoredPeptide {
                peptide: Peptide::new(),
                score,
            })
            .collect::<Vec<_>>();
        Sequencer::cut(&mut board, 3);
        // Untouched, original order preserved
        assert_eq!(board.iter().map(|c| c.score).collect::<Vec<_>>(), [0, 1, 2]);
    }

    #[test]
    fn deterministic_reruns() {
        let table = MassTable::default();
        let reference = Spectrum::parse("0 113 128 186 241 299 314 427").unwrap();
        let sequencer = Sequencer::new(&reference, table.masses());

        let a = sequencer.exhaustive();
        let b = sequencer.exhaustive();
        assert_eq!(a, b);

        let x = sequencer.leaderboard(5);
        let y = sequencer.leaderboard(5);
        assert_eq!(x.peptide, y.peptide);
        assert_eq!(x.score, y.score);
    }
}
