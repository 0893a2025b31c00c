//! End-to-end generation over a realistic metadata document.

use cubetypes_typegen::{
    CubeMeta, MemberPools, generate_cube_defs, generate_query_schema,
    output::cubedef::build_name_tree, safe_ident,
};
use serde_json::json;

fn fixture() -> Vec<CubeMeta> {
    serde_json::from_value(json!([
        {
            "name": "sales-orders",
            "title": "Orders",
            "measures": [
                { "name": "sales-orders.count", "type": "count" },
                { "name": "sales-orders.total_amount", "type": "sum" }
            ],
            "dimensions": [
                { "name": "sales-orders.status", "type": "string" },
                { "name": "sales-orders.created_at", "type": "time" }
            ],
            "segments": [{ "name": "sales-orders.completed" }]
        },
        {
            "name": "sales-customers",
            "title": "Customers",
            "measures": [{ "name": "sales-customers.count", "type": "count" }],
            "dimensions": [{ "name": "sales-customers.city", "type": "string" }],
            "segments": []
        },
        {
            "name": "inventory",
            "measures": [{ "name": "inventory.quantity", "type": "sum" }],
            "dimensions": [],
            "segments": []
        }
    ]))
    .unwrap()
}

#[test]
fn definitions_cover_every_cube_in_input_order() {
    let cubes = fixture();
    let code = generate_cube_defs(&cubes, None).unwrap();

    let orders_at = code.find("export const sales_orders = new CubeDef({").unwrap();
    let customers_at = code
        .find("export const sales_customers = new CubeDef({")
        .unwrap();
    let inventory_at = code.find("export const inventory = new CubeDef({").unwrap();
    assert!(orders_at < customers_at && customers_at < inventory_at);

    assert!(code.contains("    count: m.number,"));
    assert!(code.contains("    total_amount: m.number,"));
    assert!(code.contains("    status: m.string,"));
    assert!(code.contains("    created_at: m.time,"));
    assert!(code.contains("segments: [\"completed\"],"));
    assert!(code.contains("export type inventoryType = typeof inventory;"));
}

#[test]
fn delimited_generation_nests_the_namespace() {
    let cubes = fixture();
    let code = generate_cube_defs(&cubes, Some("-")).unwrap();

    assert!(code.contains(
        "export const CubeSchema = {\n  sales: {\n    orders: sales_orders,\n    customers: sales_customers,\n  },\n  inventory: inventory,\n};"
    ));
    assert!(code.contains(
        "export type CubeSchemaType = {\n  sales: {\n    orders: sales_ordersType;\n    customers: sales_customersType;\n  };\n  inventory: inventoryType;\n};"
    ));
}

#[test]
fn name_tree_round_trips_every_cube() {
    let cubes = fixture();
    let tree = build_name_tree(&cubes, Some("-")).unwrap();
    for cube in &cubes {
        let path: Vec<&str> = cube.name.split('-').collect();
        assert_eq!(tree.get(&path), Some(safe_ident(&cube.name).as_str()));
    }
}

#[test]
fn query_schema_covers_all_pools() {
    let cubes = fixture();
    let pools = MemberPools::collect(&cubes);
    assert_eq!(
        pools.measures,
        [
            "sales-orders.count",
            "sales-orders.total_amount",
            "sales-customers.count",
            "inventory.quantity"
        ]
    );
    assert_eq!(pools.time_dimensions, ["sales-orders.created_at"]);

    let schema = generate_query_schema(&cubes);
    assert!(schema.contains("\"sales-orders.count\""));
    assert!(schema.contains("const TimeDimensionNameSchema = z.enum([\"sales-orders.created_at\"]);"));
    assert!(schema.contains("const SegmentNameSchema = z.enum([\"sales-orders.completed\"]);"));
}

#[test]
fn both_artifacts_are_idempotent() {
    let cubes = fixture();
    assert_eq!(
        generate_cube_defs(&cubes, Some("-")).unwrap(),
        generate_cube_defs(&cubes, Some("-")).unwrap()
    );
    assert_eq!(generate_query_schema(&cubes), generate_query_schema(&cubes));
}
