use clap::{Parser, Subcommand};
use std::process::ExitCode;

use pdg_resolve::utils::logger;
use pdg_resolve::{
    name_from_pdg_id, pdg_id_from_name, properties_from_pdg_id, PdgId, Resolver, ResolverConfig,
};

/// Look up PDG particle numbers, names, properties and masses
#[derive(Parser, Debug)]
#[command(name = "pdg", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Resolve names (e.g. "proton", "anti-muon", "Pb-208") to PDG IDs
    Id { names: Vec<String> },
    /// Display names of PDG IDs
    Name {
        #[arg(allow_negative_numbers = true)]
        ids: Vec<PdgId>,
    },
    /// Charge, mass number, atomic number and name of PDG IDs
    Props {
        #[arg(allow_negative_numbers = true)]
        ids: Vec<PdgId>,
    },
    /// Rest mass in eV
    Mass {
        #[arg(allow_negative_numbers = true)]
        id: PdgId,
        /// Refuse the A * u approximation
        #[arg(long)]
        exact: bool,
        /// Trusted mass (eV) used when it is consistent with the ID
        #[arg(long)]
        expected: Option<f64>,
    },
    /// Guess the PDG ID from rest mass (eV) and charge (e)
    Classify {
        #[arg(long)]
        mass: f64,
        #[arg(long, allow_negative_numbers = true)]
        charge: f64,
    },
}

fn run(command: Command, resolver: &Resolver) -> pdg_resolve::Result<()> {
    match command {
        Command::Id { names } => {
            for name in &names {
                println!("{}\t{}", name, pdg_id_from_name(name)?);
            }
        }
        Command::Name { ids } => {
            for id in ids {
                println!("{}\t{}", id, name_from_pdg_id(id)?);
            }
        }
        Command::Props { ids } => {
            println!("id\tcharge\tA\tZ\tname");
            for id in ids {
                let p = properties_from_pdg_id(id)?;
                println!(
                    "{}\t{}\t{}\t{}\t{}",
                    id, p.charge, p.mass_number, p.atomic_number, p.name
                );
            }
        }
        Command::Mass { id, exact, expected } => {
            let mass = if exact {
                resolver.mass_from_pdg_id(id, false, expected)?
            } else {
                resolver.mass(id, expected)?
            };
            println!("{}", mass);
        }
        Command::Classify { mass, charge } => {
            println!("{}", resolver.pdg_id_from_mass_charge(mass, charge)?);
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let (config, status) = ResolverConfig::load();
    if logger::init(config.level_filter()).is_err() {
        eprintln!("Logger already initialised");
    }
    log::debug!("{}", status);

    let resolver = Resolver::new(config);
    match run(cli.command, &resolver) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
