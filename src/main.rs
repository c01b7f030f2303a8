use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};

use crate::config::Config;
use crate::error::CliError;

mod config;
mod error;
mod lexer;
mod repl;
mod token;

#[derive(Parser)]
#[command(author, version, about = "Lexer for a minimal s-expression language")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the interactive prompt
    Repl,
    /// Lex a file line by line
    Lex {
        /// Path to the source file
        file: PathBuf,
    },
    /// Manage slex configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Show the current configuration
    Show,
    /// Initialize a new config file with defaults
    Init,
}

fn lex_file(path: &Path) -> Result<(), CliError> {
    if !path.exists() {
        return Err(CliError::FileNotFound(format!(
            "No such file: {}",
            path.display()
        )));
    }

    let source = fs::read_to_string(path).map_err(CliError::Io)?;
    let stdout = io::stdout();
    let mut out = stdout.lock();

    for (number, line) in source.lines().enumerate() {
        match lexer::tokenize(line) {
            Ok(tokens) => {
                let rendered: Vec<String> = tokens.iter().map(|t| t.to_string()).collect();
                writeln!(out, "{:>4}  {}", number + 1, rendered.join(" ")).map_err(CliError::Io)?;
            }
            Err(err) => {
                writeln!(out, "{:>4}  error: {}", number + 1, err).map_err(CliError::Io)?;
            }
        }
    }

    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = Config::load();

    match cli.command {
        Commands::Repl => repl::run(&config)?,
        Commands::Lex { file } => lex_file(&file)?,
        Commands::Config { command } => match command {
            ConfigCommands::Show => {
                println!("{}", serde_json::to_string_pretty(&config)?);
            }
            ConfigCommands::Init => {
                let config_path = Config::get_config_path();
                if config_path.exists() {
                    println!("Config file already exists at: {}", config_path.display());
                } else {
                    Config::default().save()?;
                    println!("Initialized new config file at: {}", config_path.display());
                }
            }
        },
    }

    Ok(())
}
