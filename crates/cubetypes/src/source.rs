//! Resolving the metadata document: a local file or an authenticated fetch.

use std::path::{Path, PathBuf};

use clap::Args;
use cubetypes_typegen::{CubeMeta, MetaResponse};
use thiserror::Error;
use tracing::debug;

use crate::config::{self, ConfigError, CubetypesConfig};
use crate::fetch::{self, FetchError};
use crate::token::{self, TokenError};

/// Shared options describing where cube metadata comes from and how the
/// request is authenticated.
#[derive(Debug, Clone, Args)]
pub struct SourceArgs {
    /// Path to cubetypes.config.json
    #[arg(short, long, default_value = config::DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,

    /// Cube API base URL
    #[arg(short, long)]
    pub url: Option<String>,

    /// Cube API secret for signing the security context
    #[arg(long)]
    pub secret: Option<String>,

    /// Read the metadata document from a local JSON file instead of fetching
    #[arg(long)]
    pub meta: Option<PathBuf>,

    /// Restrict to a single cube by name
    #[arg(long)]
    pub cube: Option<String>,
}

#[derive(Debug, Error)]
pub enum SourceError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Token(#[from] TokenError),
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error("failed to read metadata file {path}: {source}")]
    ReadMeta {
        path: String,
        source: std::io::Error,
    },
    #[error("failed to parse metadata file {path}: {source}")]
    ParseMeta {
        path: String,
        source: serde_json::Error,
    },
    #[error("API URL must be provided via --url, the config file, or CUBE_API_URL")]
    MissingUrl,
    #[error("API secret is required to sign the security context")]
    MissingSecret,
    #[error("no cubes found in the meta API response")]
    NoCubes,
    #[error("cube \"{name}\" not found; available cubes: {available}")]
    CubeNotFound { name: String, available: String },
}

impl SourceArgs {
    /// Load the config and the cube list, applying the single-cube filter.
    /// An empty cube list is rejected here so the generators never see one.
    pub fn load(&self) -> Result<(CubetypesConfig, Vec<CubeMeta>), SourceError> {
        let config = config::load_config(&self.config)?;
        let meta = match &self.meta {
            Some(path) => read_meta_file(path)?,
            None => self.fetch_meta(&config)?,
        };
        if meta.cubes.is_empty() {
            return Err(SourceError::NoCubes);
        }
        let cubes = filter_cubes(meta.cubes, self.cube.as_deref())?;
        Ok((config, cubes))
    }

    fn fetch_meta(&self, config: &CubetypesConfig) -> Result<MetaResponse, SourceError> {
        // Precedence for URL and secret: CLI flag, then config, then env.
        let url = self
            .url
            .clone()
            .or_else(|| config.api_url.clone())
            .or_else(|| std::env::var("CUBE_API_URL").ok())
            .ok_or(SourceError::MissingUrl)?;
        let secret = self
            .secret
            .clone()
            .or_else(|| config.api_secret.clone())
            .or_else(|| std::env::var("CUBE_API_SECRET").ok());

        let token = match &config.security_context {
            Some(context) => {
                let secret = secret.as_deref().ok_or(SourceError::MissingSecret)?;
                let token = token::sign_security_context(context, secret)?;
                debug!("security context signed");
                Some(token)
            }
            None => {
                debug!("no security context configured; fetching unauthenticated");
                None
            }
        };

        Ok(fetch::fetch_meta(&url, token.as_deref())?)
    }
}

fn read_meta_file(path: &Path) -> Result<MetaResponse, SourceError> {
    let raw = std::fs::read_to_string(path).map_err(|source| SourceError::ReadMeta {
        path: path.display().to_string(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| SourceError::ParseMeta {
        path: path.display().to_string(),
        source,
    })
}

fn filter_cubes(
    cubes: Vec<CubeMeta>,
    specific: Option<&str>,
) -> Result<Vec<CubeMeta>, SourceError> {
    let Some(name) = specific else {
        return Ok(cubes);
    };
    let available = cubes
        .iter()
        .map(|cube| cube.name.as_str())
        .collect::<Vec<_>>()
        .join(", ");
    let filtered: Vec<CubeMeta> = cubes.into_iter().filter(|cube| cube.name == name).collect();
    if filtered.is_empty() {
        return Err(SourceError::CubeNotFound {
            name: name.to_string(),
            available,
        });
    }
    Ok(filtered)
}
