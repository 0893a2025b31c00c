//! Output renderers for the two generated artifacts.

pub mod cubedef;
pub mod zod;

pub use cubedef::{CodegenError, generate_cube_defs, safe_ident};
pub use zod::{generate_query_schema, render_query_schema};
