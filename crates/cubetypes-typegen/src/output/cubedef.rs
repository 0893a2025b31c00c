//! Cube definitions artifact.
//!
//! Per cube, a `CubeDef` instance declaration and a type alias; then the
//! `CubeSchema` namespace export built from the name tree, with a parallel
//! `CubeSchemaType` type mirror.

use thiserror::Error;

use crate::member::MemberCategory;
use crate::meta::{CubeMeta, MemberMeta};
use crate::tree::{NameTree, NameTreeNode, TreeError};

#[derive(Debug, Error)]
pub enum CodegenError {
    #[error("cube {0}")]
    Tree(#[from] TreeError),
}

const IMPORTS: &str = "import { CubeDef, m } from \"./cube-types\";\n";

/// Replace every non-alphanumeric character with `_` so a cube name can be
/// used as an identifier in the generated module. The same mapping keys the
/// type-mirror lookup, so object leaves and type leaves cannot diverge.
pub fn safe_ident(name: &str) -> String {
    name.chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect()
}

/// Render the full definitions artifact: imports, one block per cube in
/// input order, and the namespace export.
pub fn generate_cube_defs(
    cubes: &[CubeMeta],
    delimiter: Option<&str>,
) -> Result<String, CodegenError> {
    let definitions: Vec<String> = cubes.iter().map(render_cube).collect();
    let schema_export = render_schema_export(cubes, delimiter)?;
    Ok(format!(
        "{IMPORTS}\n{}\n\n{schema_export}\n",
        definitions.join("\n\n")
    ))
}

/// Build the namespace tree for the cube list. Leaves hold the sanitized
/// cube identifier; with no (or an empty) delimiter the tree is flat.
pub fn build_name_tree(
    cubes: &[CubeMeta],
    delimiter: Option<&str>,
) -> Result<NameTree, CodegenError> {
    let mut tree = NameTree::new();
    for cube in cubes {
        let ident = safe_ident(&cube.name);
        match delimiter {
            Some(d) if !d.is_empty() => {
                let path: Vec<&str> = cube.name.split(d).collect();
                tree.insert(&path, ident)?;
            }
            _ => tree.insert(&[cube.name.as_str()], ident)?,
        }
    }
    Ok(tree)
}

/// One cube block: instance declaration (measures before dimensions) plus
/// its type alias.
fn render_cube(cube: &CubeMeta) -> String {
    let ident = safe_ident(&cube.name);
    format!(
        "// {title}\nexport const {ident} = new CubeDef({{\n  name: \"{name}\",\n  measures: {{\n{measures}  }},\n  dimensions: {{\n{dimensions}  }},\n  segments: [{segments}],\n}});\n\nexport type {ident}Type = typeof {ident};",
        title = cube.display_title(),
        name = cube.name,
        measures = render_member_entries(&cube.measures),
        dimensions = render_member_entries(&cube.dimensions),
        segments = render_segments(&cube.segments),
    )
}

fn render_member_entries(members: &[MemberMeta]) -> String {
    let mut out = String::new();
    for member in members {
        out.push_str("    ");
        out.push_str(member.local_name());
        out.push_str(": ");
        out.push_str(MemberCategory::of(&member.member_type).validator_token());
        out.push_str(",\n");
    }
    out
}

fn render_segments(segments: &[MemberMeta]) -> String {
    segments
        .iter()
        .map(|segment| format!("\"{}\"", segment.local_name()))
        .collect::<Vec<_>>()
        .join(", ")
}

fn render_schema_export(
    cubes: &[CubeMeta],
    delimiter: Option<&str>,
) -> Result<String, CodegenError> {
    let tree = build_name_tree(cubes, delimiter)?;

    let mut object_code = String::new();
    let mut type_code = String::new();
    for (key, node) in tree.iter() {
        render_object_node(&mut object_code, key, node, 1);
        render_type_node(&mut type_code, key, node, 1, cubes);
    }

    let delimiter_note = match delimiter {
        Some(d) if !d.is_empty() => format!(" (delimiter: \"{d}\")"),
        _ => " (flat structure)".to_string(),
    };
    Ok(format!(
        "// Export all cubes in schema structure{delimiter_note}\nexport const CubeSchema = {{\n{object_code}}};\n\nexport type CubeSchemaType = {{\n{type_code}}};"
    ))
}

fn render_object_node(out: &mut String, key: &str, node: &NameTreeNode, depth: usize) {
    let indent = "  ".repeat(depth);
    match node {
        NameTreeNode::Leaf(ident) => {
            out.push_str(&format!("{indent}{key}: {ident},\n"));
        }
        NameTreeNode::Branch(children) => {
            out.push_str(&format!("{indent}{key}: {{\n"));
            for (child_key, child) in children {
                render_object_node(out, child_key, child, depth + 1);
            }
            out.push_str(&format!("{indent}}},\n"));
        }
    }
}

fn render_type_node(
    out: &mut String,
    key: &str,
    node: &NameTreeNode,
    depth: usize,
    cubes: &[CubeMeta],
) {
    let indent = "  ".repeat(depth);
    match node {
        NameTreeNode::Leaf(ident) => {
            // Leaves and lookup keys share the safe_ident mapping, so the
            // `any` arm only fires for a leaf no cube produced.
            let known = cubes.iter().any(|cube| safe_ident(&cube.name) == *ident);
            if known {
                out.push_str(&format!("{indent}{key}: {ident}Type;\n"));
            } else {
                out.push_str(&format!("{indent}{key}: any;\n"));
            }
        }
        NameTreeNode::Branch(children) => {
            out.push_str(&format!("{indent}{key}: {{\n"));
            for (child_key, child) in children {
                render_type_node(out, child_key, child, depth + 1, cubes);
            }
            out.push_str(&format!("{indent}}};\n"));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn cubes(value: serde_json::Value) -> Vec<CubeMeta> {
        serde_json::from_value(value).unwrap()
    }

    fn orders() -> Vec<CubeMeta> {
        cubes(json!([{
            "name": "orders",
            "title": "Orders",
            "measures": [{ "name": "orders.count", "type": "count" }],
            "dimensions": [{ "name": "orders.status", "type": "string" }],
            "segments": []
        }]))
    }

    #[test]
    fn safe_ident_replaces_non_alphanumerics() {
        assert_eq!(safe_ident("sales-orders"), "sales_orders");
        assert_eq!(safe_ident("a.b c"), "a_b_c");
        assert_eq!(safe_ident("orders"), "orders");
    }

    #[test]
    fn renders_definition_and_type_alias() {
        let code = generate_cube_defs(&orders(), None).unwrap();

        assert!(code.contains("import { CubeDef, m } from \"./cube-types\";"));
        assert!(code.contains("// Orders"));
        assert!(code.contains("export const orders = new CubeDef({"));
        assert!(code.contains("name: \"orders\","));
        assert!(code.contains("    count: m.number,"));
        assert!(code.contains("    status: m.string,"));
        assert!(code.contains("segments: [],"));
        assert!(code.contains("export type ordersType = typeof orders;"));
    }

    #[test]
    fn measures_render_before_dimensions() {
        let code = generate_cube_defs(&orders(), None).unwrap();
        let measures_at = code.find("count: m.number").unwrap();
        let dimensions_at = code.find("status: m.string").unwrap();
        assert!(measures_at < dimensions_at);
    }

    #[test]
    fn flat_schema_export() {
        let code = generate_cube_defs(&orders(), None).unwrap();
        assert!(code.contains("// Export all cubes in schema structure (flat structure)"));
        assert!(code.contains("export const CubeSchema = {\n  orders: orders,\n};"));
        assert!(code.contains("export type CubeSchemaType = {\n  orders: ordersType;\n};"));
    }

    #[test]
    fn delimited_schema_export_nests() {
        let cubes = cubes(json!([
            { "name": "sales-orders" },
            { "name": "sales-customers" },
            { "name": "ops" }
        ]));
        let code = generate_cube_defs(&cubes, Some("-")).unwrap();

        assert!(code.contains("// Export all cubes in schema structure (delimiter: \"-\")"));
        assert!(code.contains("export const sales_orders = new CubeDef({"));
        assert!(code.contains("  sales: {\n    orders: sales_orders,\n    customers: sales_customers,\n  },\n"));
        assert!(code.contains("  ops: ops,\n"));
        assert!(code.contains("  sales: {\n    orders: sales_ordersType;\n    customers: sales_customersType;\n  };\n"));
        assert!(code.contains("  ops: opsType;\n"));
    }

    #[test]
    fn empty_delimiter_means_flat() {
        let tree = build_name_tree(&orders(), Some("")).unwrap();
        assert_eq!(tree.get(&["orders"]), Some("orders"));
    }

    #[test]
    fn segment_local_names_are_quoted_and_joined() {
        let cubes = cubes(json!([{
            "name": "orders",
            "segments": [
                { "name": "orders.completed" },
                { "name": "orders.pending" }
            ]
        }]));
        let code = generate_cube_defs(&cubes, None).unwrap();
        assert!(code.contains("segments: [\"completed\", \"pending\"],"));
    }

    #[test]
    fn prefix_collision_is_reported() {
        let cubes = cubes(json!([
            { "name": "sales" },
            { "name": "sales-orders" }
        ]));
        let err = generate_cube_defs(&cubes, Some("-")).unwrap_err();
        assert!(err.to_string().contains("name collision"));
    }

    #[test]
    fn output_is_deterministic() {
        let cubes = orders();
        let first = generate_cube_defs(&cubes, None).unwrap();
        let second = generate_cube_defs(&cubes, None).unwrap();
        assert_eq!(first, second);
    }
}
