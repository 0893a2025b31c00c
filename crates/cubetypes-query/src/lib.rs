//! Runtime cube query model and member-pool validation.
//!
//! The generated Zod artifact validates queries in TypeScript; this crate is
//! its Rust counterpart, used by the CLI `validate` command and anywhere a
//! query needs checking before it reaches a cube API. The recursive filter
//! shape (`and`/`or` groupings of binary and unary leaves) is an explicit sum
//! type, and [`QuerySchema`] enforces that every referenced member name
//! exists in the pools extracted from cube metadata.
//!
//! # Example
//!
//! ```
//! use cubetypes_query::QuerySchema;
//! use serde_json::json;
//!
//! let schema = QuerySchema::new(
//!     vec!["orders.count".into()],
//!     vec!["orders.status".into()],
//!     vec![],
//!     vec![],
//! );
//!
//! assert!(schema.is_valid_query(&json!({ "measures": ["orders.count"] })));
//! assert!(!schema.is_valid_query(&json!({ "measures": ["orders.bogus"] })));
//! ```

pub mod query;
pub mod schema;

pub use query::{
    BinaryFilter, BinaryOperator, DateRange, Filter, Order, OrderDirection, Query, ResponseFormat,
    TimeDimension, UnaryFilter, UnaryOperator,
};
pub use schema::{Issue, QueryError, QuerySchema};
