//! Meta API client.

use cubetypes_typegen::MetaResponse;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("meta API request failed: {0}")]
    Http(#[from] Box<ureq::Error>),
    #[error("failed to decode meta API response: {0}")]
    Decode(#[from] std::io::Error),
}

/// Fetch the metadata document from `{base}/cubejs-api/v1/meta`, with an
/// optional bearer token.
pub fn fetch_meta(base_url: &str, token: Option<&str>) -> Result<MetaResponse, FetchError> {
    let url = format!("{}/cubejs-api/v1/meta", base_url.trim_end_matches('/'));
    debug!(%url, "fetching cube metadata");

    let mut request = ureq::get(&url);
    if let Some(token) = token {
        request = request.set("Authorization", &format!("Bearer {token}"));
    }
    let response = request.call().map_err(Box::new)?;
    Ok(response.into_json()?)
}
