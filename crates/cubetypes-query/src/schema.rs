//! Pool-driven query validation.
//!
//! [`QuerySchema`] holds the four member name pools extracted from cube
//! metadata and rejects queries referencing any name outside them, after the
//! structural shape has been checked by deserialization.

use std::fmt;

use serde_json::Value;
use thiserror::Error;

use crate::query::{Filter, Query};

/// One validation failure. Unknown members carry the offending field and the
/// allowed set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Issue {
    UnknownMember {
        field: &'static str,
        name: String,
        allowed: Vec<String>,
    },
    NonPositive {
        field: &'static str,
        value: i64,
    },
    NegativeOffset {
        value: i64,
    },
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Issue::UnknownMember {
                field,
                name,
                allowed,
            } => {
                if allowed.is_empty() {
                    write!(f, "`{name}` is not a known member of `{field}` (none defined)")
                } else {
                    write!(
                        f,
                        "`{name}` is not a known member of `{field}` (allowed: {})",
                        allowed.join(", ")
                    )
                }
            }
            Issue::NonPositive { field, value } => {
                write!(f, "`{field}` must be a positive integer, got {value}")
            }
            Issue::NegativeOffset { value } => {
                write!(f, "`offset` must be non-negative, got {value}")
            }
        }
    }
}

#[derive(Debug, Error)]
pub enum QueryError {
    /// Structurally malformed: wrong field types, unknown operators,
    /// missing required sub-fields.
    #[error("malformed query: {0}")]
    Malformed(#[from] serde_json::Error),
    /// Well-formed but referencing unknown members or out-of-range values.
    #[error("invalid query: {}", format_issues(.0))]
    Invalid(Vec<Issue>),
}

fn format_issues(issues: &[Issue]) -> String {
    issues
        .iter()
        .map(|issue| issue.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

/// Validates queries against the member pools of a generated schema.
#[derive(Debug, Clone, Default)]
pub struct QuerySchema {
    measures: Vec<String>,
    dimensions: Vec<String>,
    time_dimensions: Vec<String>,
    segments: Vec<String>,
}

impl QuerySchema {
    pub fn new(
        measures: Vec<String>,
        dimensions: Vec<String>,
        time_dimensions: Vec<String>,
        segments: Vec<String>,
    ) -> Self {
        Self {
            measures,
            dimensions,
            time_dimensions,
            segments,
        }
    }

    /// Strict parse: deserialize, then collect every membership and range
    /// violation.
    pub fn parse_query(&self, value: &Value) -> Result<Query, QueryError> {
        let query: Query = serde_json::from_value(value.clone())?;
        let mut issues = Vec::new();
        self.check_query(&query, &mut issues);
        if issues.is_empty() {
            Ok(query)
        } else {
            Err(QueryError::Invalid(issues))
        }
    }

    /// Strict parse for an array of queries (data blending).
    pub fn parse_queries(&self, value: &Value) -> Result<Vec<Query>, QueryError> {
        let queries: Vec<Query> = serde_json::from_value(value.clone())?;
        let mut issues = Vec::new();
        for query in &queries {
            self.check_query(query, &mut issues);
        }
        if issues.is_empty() {
            Ok(queries)
        } else {
            Err(QueryError::Invalid(issues))
        }
    }

    pub fn is_valid_query(&self, value: &Value) -> bool {
        self.parse_query(value).is_ok()
    }

    pub fn is_valid_queries(&self, value: &Value) -> bool {
        self.parse_queries(value).is_ok()
    }

    fn check_query(&self, query: &Query, issues: &mut Vec<Issue>) {
        if let Some(measures) = &query.measures {
            for name in measures {
                self.check_member(name, "measures", &self.measures, issues);
            }
        }
        if let Some(dimensions) = &query.dimensions {
            for name in dimensions {
                self.check_member(name, "dimensions", &self.dimensions, issues);
            }
        }
        if let Some(segments) = &query.segments {
            for name in segments {
                self.check_member(name, "segments", &self.segments, issues);
            }
        }
        if let Some(time_dimensions) = &query.time_dimensions {
            for td in time_dimensions {
                self.check_member(
                    &td.dimension,
                    "timeDimensions",
                    &self.time_dimensions,
                    issues,
                );
            }
        }
        if let Some(filters) = &query.filters {
            for filter in filters {
                self.check_filter(filter, issues);
            }
        }
        if let Some(limit) = query.limit {
            if limit < 1 {
                issues.push(Issue::NonPositive {
                    field: "limit",
                    value: limit,
                });
            }
        }
        if let Some(row_limit) = query.row_limit {
            if row_limit < 1 {
                issues.push(Issue::NonPositive {
                    field: "rowLimit",
                    value: row_limit,
                });
            }
        }
        if let Some(offset) = query.offset {
            if offset < 0 {
                issues.push(Issue::NegativeOffset { value: offset });
            }
        }
    }

    fn check_filter(&self, filter: &Filter, issues: &mut Vec<Issue>) {
        match filter {
            Filter::And { and } => {
                for nested in and {
                    self.check_filter(nested, issues);
                }
            }
            Filter::Or { or } => {
                for nested in or {
                    self.check_filter(nested, issues);
                }
            }
            // The legacy `dimension` field stays unchecked, matching the
            // generated schema.
            Filter::Binary(binary) => self.check_filter_member(binary.member.as_deref(), issues),
            Filter::Unary(unary) => self.check_filter_member(unary.member.as_deref(), issues),
        }
    }

    /// Filter members come from measures and dimensions combined; an absent
    /// member is allowed.
    fn check_filter_member(&self, member: Option<&str>, issues: &mut Vec<Issue>) {
        let Some(name) = member else { return };
        if self.contains(&self.measures, name) || self.contains(&self.dimensions, name) {
            return;
        }
        let mut allowed = self.measures.clone();
        allowed.extend(self.dimensions.iter().cloned());
        issues.push(Issue::UnknownMember {
            field: "filters",
            name: name.to_string(),
            allowed,
        });
    }

    fn check_member(
        &self,
        name: &str,
        field: &'static str,
        pool: &[String],
        issues: &mut Vec<Issue>,
    ) {
        if !self.contains(pool, name) {
            issues.push(Issue::UnknownMember {
                field,
                name: name.to_string(),
                allowed: pool.to_vec(),
            });
        }
    }

    fn contains(&self, pool: &[String], name: &str) -> bool {
        pool.iter().any(|entry| entry == name)
    }
}
