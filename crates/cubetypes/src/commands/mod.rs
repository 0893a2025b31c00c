//! CLI surface.

mod generate;
mod validate;

pub use generate::GenerateArgs;
pub use validate::ValidateArgs;

use clap::{Parser, Subcommand};

/// Generate typed cube definitions and query validation schemas from a cube
/// meta API.
#[derive(Parser)]
#[command(name = "cubetypes", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Generate cube definitions, and optionally a query validation schema
    Generate(GenerateArgs),
    /// Validate a query JSON document against the cube metadata
    Validate(ValidateArgs),
}

/// Run the CLI, returning the process exit code.
pub fn run(cli: Cli) -> i32 {
    match cli.command {
        Command::Generate(args) => generate::run(args),
        Command::Validate(args) => validate::run(args),
    }
}
