mod check;
mod completions;
mod generate;

use std::path::{Path, PathBuf};

use check::CheckCommand;
use clap::{Parser, Subcommand};
use completions::CompletionsCommand;
use eyre::{Context, Result, bail};
use generate::GenerateCommand;
use kiln_schema::{Config, GeneratorConfig};

/// Extension trait for exiting on schema errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for kiln_schema::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

#[derive(Parser)]
#[command(name = "kiln")]
#[command(version)]
#[command(about = "Generate decorated TypeScript classes from a schema document")]
pub(crate) struct Cli {
    /// Log debug output (overrides KILN_LOG / RUST_LOG)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Generate(cmd) => cmd.run(),
            Commands::Check(cmd) => cmd.run(),
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Generate one class file per model
    Generate(GenerateCommand),

    /// Validate kiln.toml and the schema document without generating code
    Check(CheckCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}

/// A loaded configuration and the directory its paths are relative to.
pub(crate) struct Project {
    pub config: GeneratorConfig,
    pub root: PathBuf,
}

impl Project {
    /// Load `config_path`, or start from defaults when it is absent and an
    /// input document was given on the command line.
    pub fn load(config_path: &Path, input: Option<&Path>) -> Result<Self> {
        if config_path.exists() {
            let config = Config::from_file(config_path).unwrap_or_exit().generator;
            let root = match config_path.parent() {
                Some(dir) if !dir.as_os_str().is_empty() => dir.to_path_buf(),
                _ => PathBuf::from("."),
            };
            return Ok(Self { config, root });
        }

        match input {
            Some(input) => Ok(Self {
                config: GeneratorConfig::new(input),
                root: PathBuf::from("."),
            }),
            None => bail!(
                "{} not found; create it or pass --input",
                config_path.display()
            ),
        }
    }

    /// Command-line paths are relative to the working directory, not the root.
    pub fn cli_path(path: &Path) -> Result<PathBuf> {
        std::path::absolute(path).wrap_err_with(|| format!("Invalid path {}", path.display()))
    }
}
