//! Member name pools for validator generation.

use crate::meta::CubeMeta;

/// All member names across all cubes, partitioned for enum generation.
///
/// Pools are ordered (first-seen order, cubes processed in input order) and
/// duplicate-preserving: the same fully-qualified name appearing under two
/// cubes yields two entries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemberPools {
    pub measures: Vec<String>,
    pub dimensions: Vec<String>,
    pub time_dimensions: Vec<String>,
    pub segments: Vec<String>,
}

impl MemberPools {
    /// Partition every member of every cube into the four pools. A dimension
    /// with declared type `time` lands in both `dimensions` and
    /// `time_dimensions`.
    pub fn collect(cubes: &[CubeMeta]) -> Self {
        let mut pools = Self::default();
        for cube in cubes {
            for measure in &cube.measures {
                pools.measures.push(measure.name.clone());
            }
            for dimension in &cube.dimensions {
                pools.dimensions.push(dimension.name.clone());
                if dimension.member_type == "time" {
                    pools.time_dimensions.push(dimension.name.clone());
                }
            }
            for segment in &cube.segments {
                pools.segments.push(segment.name.clone());
            }
        }
        pools
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn cubes(value: serde_json::Value) -> Vec<CubeMeta> {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn collects_in_input_order() {
        let cubes = cubes(json!([
            {
                "name": "A",
                "measures": [{ "name": "A.count", "type": "count" }],
                "dimensions": [{ "name": "A.city", "type": "string" }]
            },
            {
                "name": "B",
                "measures": [{ "name": "B.count", "type": "count" }],
                "segments": [{ "name": "B.active" }]
            }
        ]));

        let pools = MemberPools::collect(&cubes);
        assert_eq!(pools.measures, ["A.count", "B.count"]);
        assert_eq!(pools.dimensions, ["A.city"]);
        assert_eq!(pools.segments, ["B.active"]);
        assert!(pools.time_dimensions.is_empty());
    }

    #[test]
    fn time_dimension_lands_in_both_pools() {
        let cubes = cubes(json!([{
            "name": "orders",
            "dimensions": [
                { "name": "orders.status", "type": "string" },
                { "name": "orders.created_at", "type": "time" }
            ]
        }]));

        let pools = MemberPools::collect(&cubes);
        assert_eq!(pools.dimensions, ["orders.status", "orders.created_at"]);
        assert_eq!(pools.time_dimensions, ["orders.created_at"]);
    }

    #[test]
    fn duplicates_are_preserved() {
        let cubes = cubes(json!([
            { "name": "A", "measures": [{ "name": "shared.count", "type": "count" }] },
            { "name": "B", "measures": [{ "name": "shared.count", "type": "count" }] }
        ]));

        let pools = MemberPools::collect(&cubes);
        assert_eq!(pools.measures, ["shared.count", "shared.count"]);
    }
}
