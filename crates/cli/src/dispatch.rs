//! Command dispatch logic.
//!
//! Responsibilities:
//! - Route parsed CLI arguments to appropriate command handlers.
//! - Load the store each command operates on.
//!
//! Does NOT handle:
//! - CLI structure definitions (see `args` module).
//! - Store construction details (see `config_context`).

use anyhow::Result;

use crate::args::{Cli, Commands};
use crate::commands;
use crate::commands::lookup::Lookup;
use crate::config_context::load_store;

/// Dispatch CLI commands to their respective handlers.
pub(crate) fn run_command(cli: Cli) -> Result<()> {
    let store = load_store(&cli);
    let output = cli.output;

    match cli.command {
        Commands::Conf { key, default } => {
            commands::lookup::run(&store, Lookup::Conf { key }, default.as_deref(), output)?;
        }
        Commands::Env { name, default } => {
            commands::lookup::run(&store, Lookup::Env { name }, default.as_deref(), output)?;
        }
        Commands::Fetch {
            conf_key,
            env_key,
            default,
        } => {
            let env_key = env_key.unwrap_or_else(|| conf_key.clone());
            commands::lookup::run(
                &store,
                Lookup::Fetch { conf_key, env_key },
                default.as_deref(),
                output,
            )?;
        }
        Commands::Get {
            env_key,
            conf_key,
            default,
        } => {
            commands::lookup::run(
                &store,
                Lookup::Get { env_key, conf_key },
                default.as_deref(),
                output,
            )?;
        }
        Commands::Set { key, value } => {
            commands::edit::set(store, &key, &value, output)?;
        }
        Commands::List => commands::inspect::list(&store, output)?,
        Commands::Sections => commands::inspect::sections(&store, output)?,
        Commands::Dump => commands::inspect::dump(&store, output)?,
    }

    Ok(())
}
