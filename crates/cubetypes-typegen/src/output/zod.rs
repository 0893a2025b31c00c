//! Query-validation artifact: a self-contained Zod module over the member
//! name pools.
//!
//! Everything except the four member enums and the introspection block is
//! fixed text; the recursive filter shape goes through `z.lazy` because the
//! logical grouping cases reference the filter schema itself.

use crate::meta::CubeMeta;
use crate::pools::MemberPools;

/// Render the validation schema for the cube list.
pub fn generate_query_schema(cubes: &[CubeMeta]) -> String {
    render_query_schema(&MemberPools::collect(cubes))
}

/// Render the validation schema from pre-collected pools.
pub fn render_query_schema(pools: &MemberPools) -> String {
    let mut out = String::with_capacity(4096);
    out.push_str(HEADER);
    out.push_str(&format!(
        "const MeasureNameSchema = {};\n",
        zod_enum(&pools.measures)
    ));
    out.push_str(&format!(
        "const DimensionNameSchema = {};\n",
        zod_enum(&pools.dimensions)
    ));
    out.push_str(&format!(
        "const TimeDimensionNameSchema = {};\n",
        zod_enum(&pools.time_dimensions)
    ));
    out.push_str(&format!(
        "const SegmentNameSchema = {};\n",
        zod_enum(&pools.segments)
    ));
    out.push_str(BODY);
    out.push_str(&format!(
        "export const availableMembers = {{\n  measures: {},\n  dimensions: {},\n  timeDimensions: {},\n  segments: {}\n}} as const;\n",
        ts_string_array(&pools.measures),
        ts_string_array(&pools.dimensions),
        ts_string_array(&pools.time_dimensions),
        ts_string_array(&pools.segments),
    ));
    out
}

/// `z.enum([...])` over the pool; an empty pool still renders a check, as
/// the always-false `z.never()`.
fn zod_enum(names: &[String]) -> String {
    if names.is_empty() {
        return "z.never()".to_string();
    }
    format!("z.enum([{}])", quoted(names).join(", "))
}

fn ts_string_array(names: &[String]) -> String {
    format!("[{}]", quoted(names).join(", "))
}

fn quoted(names: &[String]) -> Vec<String> {
    names.iter().map(|name| format!("\"{name}\"")).collect()
}

const HEADER: &str = r#"import { z } from "zod";
import type {
  Query,
  Filter,
  TimeDimension as CubeTimeDimension,
  BinaryOperator,
  UnaryOperator,
  QueryOrder,
  TQueryOrderObject,
  TQueryOrderArray
} from "@cubejs-client/core";

// Re-export the main Query type for convenience
export type { Query as CubeQuery } from "@cubejs-client/core";

// Zod schemas for operators
const BinaryOperatorSchema = z.enum([
  "equals", "notEquals", "contains", "notContains", "startsWith", "notStartsWith",
  "endsWith", "notEndsWith", "gt", "gte", "lt", "lte",
  "inDateRange", "notInDateRange", "beforeDate", "beforeOrOnDate",
  "afterDate", "afterOrOnDate"
]);

const UnaryOperatorSchema = z.enum(["set", "notSet"]);

const QueryOrderSchema = z.enum(["asc", "desc", "none"]);

// Available cube members (generated from your cubes)
"#;

const BODY: &str = r#"
// Union of all members
const MemberNameSchema = z.union([MeasureNameSchema, DimensionNameSchema]);

// Date range: a relative expression or an absolute [from, to] pair
const DateRangeSchema = z.union([
  z.string(),
  z.tuple([z.string(), z.string()]),
]);

// Binary filter
const BinaryFilterSchema = z.object({
  member: MemberNameSchema.optional(),
  dimension: z.string().optional(), // deprecated but still supported
  operator: BinaryOperatorSchema,
  values: z.array(z.string())
});

// Unary filter
const UnaryFilterSchema = z.object({
  member: MemberNameSchema.optional(),
  dimension: z.string().optional(), // deprecated but still supported
  operator: UnaryOperatorSchema,
  values: z.never().optional()
});

// Logical filters (recursive)
const LogicalFilterSchema: z.ZodType<Filter> = z.lazy(() => z.union([
  BinaryFilterSchema,
  UnaryFilterSchema,
  z.object({
    and: z.array(LogicalFilterSchema)
  }),
  z.object({
    or: z.array(LogicalFilterSchema)
  })
]));

// Time dimension
const TimeDimensionSchema = z.object({
  dimension: TimeDimensionNameSchema,
  granularity: z.string().optional(),
  dateRange: DateRangeSchema.optional(),
  compareDateRange: z.array(DateRangeSchema).optional()
});

// Order
const QueryOrderObjectSchema = z.record(z.string(), QueryOrderSchema);
const QueryOrderArraySchema = z.array(z.tuple([z.string(), QueryOrderSchema]));

// Main query schema
export const CubeQuerySchema = z.object({
  measures: z.array(MeasureNameSchema).optional(),
  dimensions: z.array(DimensionNameSchema).optional(),
  filters: z.array(LogicalFilterSchema).optional(),
  timeDimensions: z.array(TimeDimensionSchema).optional(),
  segments: z.array(SegmentNameSchema).optional(),
  limit: z.number().int().positive().nullable().optional(),
  rowLimit: z.number().int().positive().nullable().optional(),
  offset: z.number().int().min(0).optional(),
  order: z.union([
    QueryOrderObjectSchema,
    QueryOrderArraySchema
  ]).optional(),
  timezone: z.string().optional(),
  renewQuery: z.boolean().optional(),
  ungrouped: z.boolean().optional(),
  responseFormat: z.enum(["compact", "default"]).optional(),
  total: z.boolean().optional()
}) satisfies z.ZodType<Query>;

// Array of queries for data blending
export const CubeQueriesSchema = z.array(CubeQuerySchema);
export type CubeQueries = z.infer<typeof CubeQueriesSchema>;

// Validation helpers
export const validateQuery = (query: unknown): Query => {
  return CubeQuerySchema.parse(query);
};

export const validateQueries = (queries: unknown): CubeQueries => {
  return CubeQueriesSchema.parse(queries);
};

export const isValidQuery = (query: unknown): query is Query => {
  return CubeQuerySchema.safeParse(query).success;
};

export const isValidQueries = (queries: unknown): queries is CubeQueries => {
  return CubeQueriesSchema.safeParse(queries).success;
};

// Component schemas
export const CubeFilterSchema = LogicalFilterSchema;
export const CubeTimeDimensionSchema = TimeDimensionSchema;

// Available members for runtime introspection
"#;
