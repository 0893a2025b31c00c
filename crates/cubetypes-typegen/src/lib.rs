//! Typed cube definitions and query-schema generation from cube metadata.
//!
//! `cubetypes-typegen` turns a meta API document (a list of cube descriptors
//! with typed member lists) into two text artifacts:
//!
//! ```text
//! Meta document            Core                    Artifacts
//! ─────────────     ───────────────────     ─────────────────────
//! cubes[]        ─┬─> member categories  ─> CubeDef declarations
//!                 ├─> name tree          ─> CubeSchema namespace + type mirror
//!                 └─> member pools       ─> Zod query validation schema
//! ```
//!
//! The transformation is pure and deterministic: identical input produces
//! byte-identical output. Fetching the document and writing the artifacts
//! belong to the caller.
//!
//! # Example
//!
//! ```
//! use cubetypes_typegen::{CubeMeta, generate_cube_defs};
//!
//! let cubes: Vec<CubeMeta> = serde_json::from_value(serde_json::json!([{
//!     "name": "orders",
//!     "measures": [{ "name": "orders.count", "type": "count" }],
//!     "dimensions": [{ "name": "orders.status", "type": "string" }]
//! }]))
//! .unwrap();
//!
//! let code = generate_cube_defs(&cubes, None).unwrap();
//! assert!(code.contains("export const orders"));
//! ```

pub mod member;
pub mod meta;
pub mod output;
pub mod pools;
pub mod tree;

pub use member::MemberCategory;
pub use meta::{CubeMeta, MemberMeta, MetaResponse};
pub use output::{CodegenError, generate_cube_defs, generate_query_schema, safe_ident};
pub use pools::MemberPools;
pub use tree::{NameTree, NameTreeNode, TreeError};
