use std::time::Instant;

use anyhow::Context;
use cycseq_core::mass::MassTable;
use cycseq_core::peptide::Peptide;
use cycseq_core::sequencer::Sequencer;
use log::info;
use serde::Serialize;

use crate::input::{CycloDataset, LeaderboardDataset, PeptideDataset};

#[derive(Serialize)]
pub struct CycloOutput {
    /// Matching peptides as hyphen-joined mass sequences, discovery order
    pub peptides: Vec<String>,
}

#[derive(Serialize)]
pub struct LeaderboardOutput {
    pub score: u32,
    pub peptide: String,
}

#[derive(Serialize)]
pub struct SpectrumOutput {
    pub spectrum: Vec<u32>,
}

impl CycloOutput {
    pub fn render(&self) -> String {
        self.peptides.join(" ")
    }
}

impl LeaderboardOutput {
    pub fn render(&self) -> String {
        format!("{}\n{}", self.score, self.peptide)
    }
}

impl SpectrumOutput {
    pub fn render(&self) -> String {
        self.spectrum
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

pub fn run_cyclo(dataset: &CycloDataset, table: &MassTable) -> CycloOutput {
    let start = Instant::now();
    let sequencer = Sequencer::new(&dataset.spectrum, table.masses());
    let matched = sequencer.exhaustive();
    info!(
        "exhaustive search finished in {:?}: {} matching peptides",
        start.elapsed(),
        matched.len()
    );
    CycloOutput {
        peptides: matched.iter().map(ToString::to_string).collect(),
    }
}

pub fn run_leaderboard(dataset: &LeaderboardDataset, table: &MassTable) -> LeaderboardOutput {
    let start = Instant::now();
    let sequencer = Sequencer::new(&dataset.spectrum, table.masses());
    let leader = sequencer.leaderboard(dataset.width);
    info!(
        "leaderboard search finished in {:?}: leader score {}",
        start.elapsed(),
        leader.score
    );
    LeaderboardOutput {
        score: leader.score,
        peptide: leader.peptide.to_string(),
    }
}

pub fn run_spectrum(dataset: &PeptideDataset, table: &MassTable) -> anyhow::Result<SpectrumOutput> {
    let peptide = Peptide::from_symbols(&dataset.symbols, table)
        .with_context(|| format!("failed to derive masses for `{}`", dataset.symbols))?;
    Ok(SpectrumOutput {
        spectrum: peptide.cyclospectrum().masses().to_vec(),
    })
}
