use anyhow::Context;
use clap::{Arg, ArgMatches, Command, ValueHint};
use cycseq_cli::{input, runner};
use serde::Serialize;

fn file_args() -> [Arg; 2] {
    [
        Arg::new("dataset")
            .required(true)
            .value_parser(clap::builder::NonEmptyStringValueParser::new())
            .help("Path to the dataset file")
            .value_hint(ValueHint::FilePath),
        Arg::new("mass_table")
            .required(true)
            .value_parser(clap::builder::NonEmptyStringValueParser::new())
            .help("Path to the amino acid mass table (`<symbol> <integer>` per line)")
            .value_hint(ValueHint::FilePath),
    ]
}

fn emit<T: Serialize>(output: &T, rendered: String, json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string(output)?);
    } else {
        println!("{}", rendered);
    }
    Ok(())
}

fn paths(matches: &ArgMatches) -> (&String, &String) {
    let dataset = matches.get_one::<String>("dataset").expect("required");
    let mass_table = matches.get_one::<String>("mass_table").expect("required");
    (dataset, mass_table)
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::default()
        .filter_level(log::LevelFilter::Error)
        .parse_env(env_logger::Env::default().filter_or("CYCSEQ_LOG", "error,cycseq=info"))
        .init();

    let matches = Command::new("cycseq")
        .version(clap::crate_version!())
        .about("Cyclopeptide sequencing from integer mass spectra")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("json")
                .long("json")
                .global(true)
                .action(clap::ArgAction::SetTrue)
                .help("Emit results as JSON instead of plain text"),
        )
        .subcommand(
            Command::new("cyclo")
                .about(
                    "Exhaustive search: every cyclic peptide whose theoretical \
                     spectrum matches the reference exactly",
                )
                .args(file_args()),
        )
        .subcommand(
            Command::new("leaderboard")
                .about(
                    "Leaderboard-pruned search: the best-scoring cyclic peptide \
                     against a noisy reference spectrum",
                )
                .args(file_args()),
        )
        .subcommand(
            Command::new("spectrum")
                .about("Theoretical cyclospectrum of a peptide given as amino acid symbols")
                .args(file_args()),
        )
        .get_matches();

    let json = matches.get_one::<bool>("json").copied().unwrap_or(false);

    match matches.subcommand() {
        Some(("cyclo", sub)) => {
            let (dataset, mass_table) = paths(sub);
            let table = cycseq_core::read_mass_table(mass_table)
                .with_context(|| format!("failed to load mass table `{}`", mass_table))?;
            let dataset = input::load_cyclo(dataset)?;
            let output = runner::run_cyclo(&dataset, &table);
            emit(&output, output.render(), json)
        }
        Some(("leaderboard", sub)) => {
            let (dataset, mass_table) = paths(sub);
            let table = cycseq_core::read_mass_table(mass_table)
                .with_context(|| format!("failed to load mass table `{}`", mass_table))?;
            let dataset = input::load_leaderboard(dataset)?;
            let output = runner::run_leaderboard(&dataset, &table);
            emit(&output, output.render(), json)
        }
        Some(("spectrum", sub)) => {
            let (dataset, mass_table) = paths(sub);
            let table = cycseq_core::read_mass_table(mass_table)
                .with_context(|| format!("failed to load mass table `{}`", mass_table))?;
            let dataset = input::load_peptide(dataset)?;
            let output = runner::run_spectrum(&dataset, &table)?;
            emit(&output, output.render(), json)
        }
        _ => unreachable!("subcommand is required"),
    }
}
