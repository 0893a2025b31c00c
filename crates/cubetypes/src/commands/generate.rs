//! Generate command: metadata in, definition and schema artifacts out.

use std::path::{Path, PathBuf};

use clap::Args;
use cubetypes_typegen::{CodegenError, generate_cube_defs, generate_query_schema};
use thiserror::Error;
use tracing::info;

use crate::source::{SourceArgs, SourceError};
use crate::write;

#[derive(Args)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Output file path for generated definitions
    #[arg(short, long, default_value = "./cubes.generated.ts")]
    pub output: PathBuf,

    /// Output file path for the generated query validation schema
    #[arg(short = 'z', long)]
    pub zod_schema: Option<PathBuf>,

    /// Delimiter for grouping cube names into a nested structure
    #[arg(short, long)]
    pub delimiter: Option<String>,
}

#[derive(Debug, Error)]
pub enum GenerateError {
    #[error(transparent)]
    Source(#[from] SourceError),
    #[error(transparent)]
    Codegen(#[from] CodegenError),
    #[error("failed to write {path}: {source}")]
    Write {
        path: String,
        source: std::io::Error,
    },
}

pub fn run(args: GenerateArgs) -> i32 {
    match execute(args) {
        Ok(()) => 0,
        Err(e) => {
            eprintln!("error: {e}");
            1
        }
    }
}

fn execute(args: GenerateArgs) -> Result<(), GenerateError> {
    let (config, cubes) = args.source.load()?;
    info!(cube_count = cubes.len(), "generating cube definitions");

    let delimiter = args
        .delimiter
        .as_deref()
        .or(config.group_delimiter.as_deref());
    let code = generate_cube_defs(&cubes, delimiter)?;
    write_artifact(&args.output, &code)?;
    eprintln!(
        "Generated definitions for {} cube(s) at {}",
        cubes.len(),
        args.output.display()
    );

    if let Some(path) = &args.zod_schema {
        let schema = generate_query_schema(&cubes);
        write_artifact(path, &schema)?;
        eprintln!("Generated query schema at {}", path.display());
    }
    Ok(())
}

fn write_artifact(path: &Path, content: &str) -> Result<(), GenerateError> {
    write::write_generated_file(path, content).map_err(|source| GenerateError::Write {
        path: path.display().to_string(),
        source,
    })
}
