//! Metadata IR: the cube descriptors returned by the meta API.

use serde::Deserialize;

/// Top-level document returned by the meta endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct MetaResponse {
    #[serde(default)]
    pub cubes: Vec<CubeMeta>,
}

/// One cube: name, display title, and its typed member lists.
#[derive(Debug, Clone, Deserialize)]
pub struct CubeMeta {
    pub name: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub measures: Vec<MemberMeta>,
    #[serde(default)]
    pub dimensions: Vec<MemberMeta>,
    #[serde(default)]
    pub segments: Vec<MemberMeta>,
}

impl CubeMeta {
    /// Title for generated comments, falling back to the cube name.
    pub fn display_title(&self) -> &str {
        self.title.as_deref().unwrap_or(&self.name)
    }
}

/// One member. `name` is fully qualified (`<cube>.<local>`); segments carry
/// no declared type.
#[derive(Debug, Clone, Deserialize)]
pub struct MemberMeta {
    pub name: String,
    #[serde(rename = "type", default)]
    pub member_type: String,
}

impl MemberMeta {
    /// Local member name: the last `.`-separated segment of the
    /// fully-qualified name, however many segments precede it.
    pub fn local_name(&self) -> &str {
        self.name.rsplit('.').next().unwrap_or(&self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parse_meta_response() {
        let meta: MetaResponse = serde_json::from_value(json!({
            "cubes": [{
                "name": "orders",
                "title": "Orders",
                "measures": [{ "name": "orders.count", "type": "count" }],
                "dimensions": [{ "name": "orders.status", "type": "string" }],
                "segments": [{ "name": "orders.completed" }]
            }]
        }))
        .unwrap();

        assert_eq!(meta.cubes.len(), 1);
        let cube = &meta.cubes[0];
        assert_eq!(cube.display_title(), "Orders");
        assert_eq!(cube.measures[0].member_type, "count");
        assert_eq!(cube.segments[0].member_type, "");
    }

    #[test]
    fn missing_member_lists_default_to_empty() {
        let cube: CubeMeta = serde_json::from_value(json!({ "name": "orders" })).unwrap();
        assert!(cube.measures.is_empty());
        assert!(cube.dimensions.is_empty());
        assert!(cube.segments.is_empty());
        assert_eq!(cube.display_title(), "orders");
    }

    #[test]
    fn local_name_keeps_last_segment_only() {
        let member: MemberMeta =
            serde_json::from_value(json!({ "name": "acme.orders.count", "type": "count" }))
                .unwrap();
        assert_eq!(member.local_name(), "count");
    }
}
