//! cubetypes: generate typed cube definitions and query validation schemas
//! from a cube meta API.
//!
//! The CLI fetches (or reads) a metadata document, hands it to
//! [`cubetypes_typegen`] for artifact generation, and exposes a `validate`
//! command backed by [`cubetypes_query`]. Everything here is plumbing: the
//! config file, the HTTP fetch, token signing, and file writing.

pub mod commands;
pub mod config;
pub mod fetch;
pub mod source;
pub mod token;
pub mod write;
