//! Hardware Crypto command line tool

mod commands;
mod error;
mod logging;

use std::{path::PathBuf, process::ExitCode};

use clap::{Parser, Subcommand};
use colored::Colorize;
use error::CliResult;
use hwcrypto_api::{HardwareCrypto, Settings};

#[derive(Parser)]
#[command(name = "hwcrypto")]
#[command(about = "P-256 key custody and ECDSA signing")]
#[command(version)]
struct Cli {
    /// TOML settings file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Key storage directory, overriding the settings file
    #[arg(long, env = "HWCRYPTO_STORAGE_ROOT", global = true)]
    storage_root: Option<PathBuf>,

    /// Log level when RUST_LOG is unset
    #[arg(long, default_value = "warn", global = true)]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Report whether key custody is available
    Supported,

    /// Generate a key pair, replacing any key under the same alias
    Generate {
        /// Key alias (default from settings)
        #[arg(short, long)]
        alias: Option<String>,
    },

    /// Delete a key pair
    Delete {
        #[arg(short, long)]
        alias: Option<String>,
    },

    /// Sign a message and print the DER signature as hex
    Sign {
        #[arg(short, long)]
        alias: Option<String>,

        /// Message text (default challenge from settings)
        #[arg(short, long, conflicts_with = "file")]
        message: Option<String>,

        /// Sign the contents of a file instead
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Also write the raw DER signature here
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Verify a hex DER signature; exits 1 when it does not verify
    Verify {
        /// Alias whose public key to use
        #[arg(short, long, conflicts_with = "public_key")]
        alias: Option<String>,

        /// Uncompressed SEC1 public key as hex
        #[arg(long)]
        public_key: Option<String>,

        #[arg(short, long, conflicts_with = "file")]
        message: Option<String>,

        #[arg(short, long)]
        file: Option<PathBuf>,

        /// DER signature as hex
        #[arg(short, long)]
        signature: String,
    },

    /// Print the uncompressed SEC1 public key as hex
    Export {
        #[arg(short, long)]
        alias: Option<String>,

        /// Also write the raw public key bytes here
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Import a PKCS#8 or SEC1 PEM private key
    Import {
        #[arg(short, long)]
        alias: Option<String>,

        /// PEM file
        #[arg(short, long)]
        file: PathBuf,
    },

    /// List stored key aliases
    List,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init_tracing(&cli.log_level);

    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{} {}", "✗".red(), e);
            ExitCode::from(e.exit_code())
        }
    }
}

fn run(cli: Cli) -> CliResult<ExitCode> {
    let core = open_core(cli.config, cli.storage_root)?;

    match cli.command {
        Commands::Supported => commands::supported::handle(&core),
        Commands::Generate { alias } => commands::generate::handle(&core, alias),
        Commands::Delete { alias } => commands::delete::handle(&core, alias),
        Commands::Sign {
            alias,
            message,
            file,
            output,
        } => commands::sign::handle(&core, alias, message, file, output),
        Commands::Verify {
            alias,
            public_key,
            message,
            file,
            signature,
        } => return commands::verify::handle(&core, alias, public_key, message, file, signature),
        Commands::Export { alias, output } => commands::export::handle(&core, alias, output),
        Commands::Import { alias, file } => commands::import::handle(&core, alias, file),
        Commands::List => commands::list::handle(&core),
    }?;

    Ok(ExitCode::SUCCESS)
}

fn open_core(config: Option<PathBuf>, storage_root: Option<PathBuf>) -> CliResult<HardwareCrypto> {
    let mut settings = match config {
        Some(path) => Settings::load(path)?,
        None => Settings::default(),
    };
    if storage_root.is_some() {
        settings.storage.root = storage_root;
    }
    Ok(HardwareCrypto::from_settings(&settings)?)
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_sign() {
        let cli =
            Cli::try_parse_from(["hwcrypto", "sign", "--alias", "alice", "-m", "hi"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Sign { alias: Some(ref a), message: Some(ref m), file: None, .. }
                if a == "alice" && m == "hi"
        ));
    }

    #[test]
    fn test_message_and_file_conflict() {
        assert!(Cli::try_parse_from(["hwcrypto", "sign", "-m", "hi", "-f", "data.bin"]).is_err());
    }

    #[test]
    fn test_global_storage_root() {
        let cli = Cli::try_parse_from(["hwcrypto", "list", "--storage-root", "/tmp/keys"]).unwrap();
        assert_eq!(cli.storage_root, Some(PathBuf::from("/tmp/keys")));
    }
}
