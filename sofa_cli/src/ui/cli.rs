use std::path::PathBuf;

use clap::{Parser, Subcommand};
use log::info;
use sofa_core::core::errors::RegistryError;
use sofa_core::core::registry::CushionRegistry;
use sofa_core::storage::store::CushionStore;

/// Command-line arguments.
#[derive(Parser, Debug)]
#[command(name = "sofa-rs", version = "0.1.0", subcommand_required = true)]
pub struct Args {
    /// Cushion store file to read (default: ~/.sofa-auth)
    #[arg(long, global = true)]
    pub file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List every resolvable cushion by name
    List,
    /// Show one cushion's fields
    Show {
        /// Cushion name to look up
        name: String,
    },
}

pub fn run_cli(args: Args) -> Result<(), RegistryError> {
    let store = match args.file {
        Some(path) => CushionStore::at(path),
        None => CushionStore::new()?,
    };
    info!("Using cushion store at {:?}", store.path());
    let registry = CushionRegistry::new(store);

    match args.command {
        Command::List => {
            for (name, cushion) in registry.resolve_all()? {
                println!("{}  ({})", name, cushion.kind.as_deref().unwrap_or("custom"));
            }
        }
        Command::Show { name } => {
            let cushion = registry.resolve(&name)?;
            println!("{name}");
            println!("{cushion}");
        }
    }
    Ok(())
}
