//! Config command - inspect the configuration file and effective settings

use crate::{TriesError, cli::ConfigCommands, config::TriesConfig};

type Result<T> = std::result::Result<T, TriesError>;

/// Execute a config subcommand, writing to stderr
///
/// # Errors
/// Returns an error if the config location cannot be determined or the
/// configuration cannot be serialized
pub fn execute(command: ConfigCommands, config: &TriesConfig) -> Result<()> {
    eprint!("{}", render(command, config)?);
    Ok(())
}

fn render(command: ConfigCommands, config: &TriesConfig) -> Result<String> {
    match command {
        ConfigCommands::Path => Ok(format!("{}\n", TriesConfig::config_path()?.display())),
        ConfigCommands::Show => Ok(config.to_toml()?),
    }
}
