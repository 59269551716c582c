use anyhow::Context;
use cycseq_core::spectrum::Spectrum;
use cycseq_core::Error;

/// Dataset for the exhaustive variant: one line of spectrum masses
pub struct CycloDataset {
    pub spectrum: Spectrum,
}

/// Dataset for the leaderboard variant: the leaderboard width on the first
/// line, the spectrum masses on the second
pub struct LeaderboardDataset {
    pub width: usize,
    pub spectrum: Spectrum,
}

/// Dataset for theoretical spectrum generation: a peptide given as amino
/// acid symbols
pub struct PeptideDataset {
    pub symbols: String,
}

impl CycloDataset {
    pub fn parse(contents: &str) -> Result<Self, Error> {
        let spectrum = Spectrum::parse(contents.lines().next().unwrap_or(""))?;
        Ok(CycloDataset { spectrum })
    }
}

impl LeaderboardDataset {
    pub fn parse(contents: &str) -> Result<Self, Error> {
        let mut lines = contents.lines();
        let first = lines.next().unwrap_or("").trim();
        let width = first.parse::<usize>().map_err(|_| Error::MalformedInput {
            line: 1,
            reason: format!("expected the leaderboard width as an integer, got `{}`", first),
        })?;
        let second = lines.next().ok_or_else(|| Error::MalformedInput {
            line: 2,
            reason: "expected a line of spectrum masses".into(),
        })?;
        let spectrum = Spectrum::parse(second)?;
        Ok(LeaderboardDataset { width, spectrum })
    }
}

impl PeptideDataset {
    pub fn parse(contents: &str) -> Result<Self, Error> {
        let symbols = contents.lines().next().unwrap_or("").trim().to_string();
        Ok(PeptideDataset { symbols })
    }
}

fn read(path: &str) -> anyhow::Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("failed to read `{}`", path))
}

pub fn load_cyclo(path: &str) -> anyhow::Result<CycloDataset> {
    CycloDataset::parse(&read(path)?)
        .with_context(|| format!("failed to parse dataset `{}`", path))
}

pub fn load_leaderboard(path: &str) -> anyhow::Result<LeaderboardDataset> {
    LeaderboardDataset::parse(&read(path)?)
        .with_context(|| format!("failed to parse dataset `{}`", path))
}

pub fn load_peptide(path: &str) -> anyhow::Result<PeptideDataset> {
    PeptideDataset::parse(&read(path)?)
        .with_context(|| format!("failed to parse dataset `{}`", path))
}
