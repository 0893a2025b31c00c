//! Validate command: check a query document against the cube metadata.

use std::io::Read;
use std::path::{Path, PathBuf};

use clap::Args;
use cubetypes_query::{QueryError, QuerySchema};
use cubetypes_typegen::MemberPools;
use thiserror::Error;

use crate::source::{SourceArgs, SourceError};

#[derive(Args)]
pub struct ValidateArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Query JSON file to validate (use - for stdin)
    pub query: PathBuf,

    /// Treat the input as an array of queries
    #[arg(long)]
    pub queries: bool,
}

#[derive(Debug, Error)]
pub enum ValidateError {
    #[error(transparent)]
    Source(#[from] SourceError),
    #[error("failed to read query file {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },
    #[error("query file is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Query(#[from] QueryError),
}

pub fn run(args: ValidateArgs) -> i32 {
    let plural = args.queries;
    match execute(args) {
        Ok(()) => {
            if plural {
                eprintln!("Queries are valid.");
            } else {
                eprintln!("Query is valid.");
            }
            0
        }
        Err(e) => {
            eprintln!("error: {e}");
            1
        }
    }
}

fn execute(args: ValidateArgs) -> Result<(), ValidateError> {
    let (_config, cubes) = args.source.load()?;
    let pools = MemberPools::collect(&cubes);
    let schema = QuerySchema::new(
        pools.measures,
        pools.dimensions,
        pools.time_dimensions,
        pools.segments,
    );

    let raw = read_query(&args.query)?;
    let value: serde_json::Value = serde_json::from_str(&raw)?;
    if args.queries {
        schema.parse_queries(&value)?;
    } else {
        schema.parse_query(&value)?;
    }
    Ok(())
}

fn read_query(path: &Path) -> Result<String, ValidateError> {
    if path.as_os_str() == "-" {
        let mut raw = String::new();
        std::io::stdin()
            .read_to_string(&mut raw)
            .map_err(|source| ValidateError::Read {
                path: "<stdin>".to_string(),
                source,
            })?;
        return Ok(raw);
    }
    std::fs::read_to_string(path).map_err(|source| ValidateError::Read {
        path: path.display().to_string(),
        source,
    })
}
