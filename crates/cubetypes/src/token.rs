//! Security-context signing for authenticated meta API access.

use jsonwebtoken::{EncodingKey, Header};
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error)]
#[error("failed to sign security context: {0}")]
pub struct TokenError(#[from] jsonwebtoken::errors::Error);

/// Sign the security context as an HS256 JWT, the form the cube API expects.
pub fn sign_security_context(context: &Value, secret: &str) -> Result<String, TokenError> {
    let token = jsonwebtoken::encode(
        &Header::default(),
        context,
        &EncodingKey::from_secret(secret.as_bytes()),
    )?;
    Ok(token)
}
