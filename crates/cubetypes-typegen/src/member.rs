//! Member type inference: declared cube type to validation category.

/// Coarse validation class of a cube member.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemberCategory {
    String,
    Number,
    Time,
    None,
}

impl MemberCategory {
    /// Map a declared member type to its category. Total: unknown types fall
    /// back to `String` (unconstrained string filter) rather than failing.
    pub fn of(declared: &str) -> Self {
        match declared {
            "string" => Self::String,
            "number" | "count" | "sum" | "avg" | "min" | "max" => Self::Number,
            "time" => Self::Time,
            "boolean" => Self::None,
            _ => Self::String,
        }
    }

    /// Member token emitted into the generated definitions.
    pub fn validator_token(self) -> &'static str {
        match self {
            Self::String => "m.string",
            Self::Number => "m.number",
            Self::Time => "m.time",
            Self::None => "m.boolean",
        }
    }
}
