pub mod mass;
pub mod peptide;
pub mod scoring;
pub mod sequencer;
pub mod spectrum;

use std::path::Path;

#[derive(Debug)]
pub enum Error {
    IO(std::io::Error),
    /// A line or token in an input file did not match the expected format
    MalformedInput { line: usize, reason: String },
    /// A peptide references an amino acid absent from the loaded mass table
    MissingMassForSymbol(char),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::IO(e) => e.fmt(f),
            Self::MalformedInput { line, reason } => {
                write!(f, "malformed input at line {}: {}", line, reason)
            }
            Self::MissingMassForSymbol(c) => {
                write!(f, "no mass in table for amino acid `{}`", c)
            }
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(value: std::io::Error) -> Self {
        Self::IO(value)
    }
}

pub fn read_mass_table<P: AsRef<Path>>(path: P) -> Result<mass::MassTable, Error> {
    let contents = std::fs::read_to_string(path)?;
    mass::MassTable::parse(&contents)
}

pub fn read_spectrum<P: AsRef<Path>>(path: P) -> Result<spectrum::Spectrum, Error> {
    let contents = std::fs::read_to_string(path)?;
    spectrum::Spectrum::parse(&contents)
}
