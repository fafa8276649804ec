//! Build an org chart from flat rows, print it, and run a few queries.
//!
//! Run with `RUST_LOG=debug` to see conversion diagnostics.

use forest::prelude::*;
use forest::record;

fn main() {
    env_logger::init();

    let fields = FieldNames::default().with_parent_id("manager");
    let staff = vec![
        record! { "id" => 1, "manager" => 0, "name" => "Ada (CEO)" },
        record! { "id" => 2, "manager" => 1, "name" => "Grace (CTO)" },
        record! { "id" => 3, "manager" => 2, "name" => "Linus" },
        record! { "id" => 4, "manager" => 2, "name" => "Barbara" },
        record! { "id" => 5, "manager" => 1, "name" => "Edsger (CFO)" },
        record! { "id" => 6, "manager" => 5, "name" => "Donald" },
        record! { "id" => 7, "manager" => 99, "name" => "Contractor" },
    ];

    let chart = fields.array_to_tree(staff);

    println!("Org chart:");
    for (depth, node) in walk(&chart, TraversalOrder::PreOrder).with_depth() {
        let name = node.data.get_str("name").unwrap_or("?");
        println!("{:indent$}- {}", "", name, indent = depth * 2);
    }

    let path = node_path(&chart, &Key::from(6), &fields, PathMode::Nodes);
    let chain: Vec<_> = path
        .into_nodes()
        .unwrap_or_default()
        .iter()
        .filter_map(|n| n.data.get_str("name"))
        .collect();
    println!("\nReporting line for Donald: {}", chain.join(" -> "));

    let officers = search_field(&chart, "name", "(C");
    println!("\nOfficers (with scaffolding):");
    for node in tree_to_array_dfs(&officers) {
        println!("  {}", node.data.get_str("name").unwrap_or("?"));
    }

    println!("\nIndividual contributors:");
    for leaf in tree_leaves(&chart) {
        println!("  {}", leaf.data.get_str("name").unwrap_or("?"));
    }
}
