use pretty_assertions::assert_eq;
use proptest::prelude::*;
use treekit::prelude::*;
use treekit::{nested, record};

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn test_nested_batches_become_a_tree() {
    init_logger();
    // Rows arrive in nested batches of (id, parent id).
    let batches = nested!([[(1, 0), (2, 1)], [[(3, 1)], (4, 3)]]);
    let rows: Vec<Record> = flatten_all(batches)
        .into_vec()
        .into_iter()
        .map(|(id, pid)| record! { "id" => id, "pid" => pid })
        .collect();

    let fields = FieldNames::default();
    let forest = fields.array_to_tree(rows);
    let path = node_path(&forest, &Key::from(4), &fields, PathMode::Ids);
    assert_eq!(
        path.into_ids(),
        Some(vec![Some(Key::from(1)), Some(Key::from(3)), Some(Key::from(4))])
    );
    assert_eq!(treekit::forest::depth(&forest), 3);
}

#[tokio::test]
async fn test_queue_over_tree_in_visit_order() {
    init_logger();
    let forest = FieldNames::default().array_to_tree(vec![
        record! { "id" => 1, "pid" => 0, "name" => "root" },
        record! { "id" => 2, "pid" => 1, "name" => "left" },
        record! { "id" => 3, "pid" => 1, "name" => "right" },
        record! { "id" => 4, "pid" => 2 },
    ]);

    // Nodes without a name are not queued.
    let queue = tree_to_array_bfs(&forest)
        .into_iter()
        .map(|node| node.data.get_str("name").map(str::to_owned));

    let mut visited = Vec::new();
    let summary = run_queue(queue, |name| {
        visited.push(name);
        async { Ok(()) }
    })
    .await
    .unwrap();

    assert_eq!(visited, vec!["root", "left", "right"]);
    assert_eq!(
        summary,
        RunSummary {
            completed: 3,
            skipped: 1,
            cancelled: false
        }
    );
}

#[tokio::test]
async fn test_failing_step_reports_its_position() {
    let leaves = vec![Some(1), Some(2), None, Some(0), Some(4)];
    let err = run_queue(leaves, |n: i32| async move {
        anyhow::ensure!(n != 0, "zero weight");
        Ok(())
    })
    .await
    .unwrap_err();

    assert_eq!(format!("{:#}", err), "Step 3 failed: zero weight");
}

#[tokio::test]
async fn test_runner_reachable_through_crate_path() {
    let runner = treekit::run_queue::SequentialRunner::new();
    let summary = runner
        .run(vec![Some(()), None], |()| async { Ok(()) })
        .await
        .unwrap();
    assert_eq!(summary.completed + summary.skipped, 2);
}

/// Nested batches of rows where row `i` hangs under 0 or an earlier row
fn batched_rows() -> impl Strategy<Value = Nested<(i64, i64)>> {
    (1usize..30)
        .prop_flat_map(|n| (0..n).map(|i| 0..=i as i64).collect::<Vec<_>>())
        .prop_flat_map(|pids| {
            let rows: Vec<Nested<(i64, i64)>> = pids
                .into_iter()
                .enumerate()
                .map(|(i, pid)| Nested::Item((i as i64 + 1, pid)))
                .collect();
            prop::collection::vec(1usize..4, rows.len()).prop_map(move |sizes| {
                let mut batches = Vec::new();
                let mut rest = rows.clone();
                for size in sizes {
                    if rest.is_empty() {
                        break;
                    }
                    let tail = rest.split_off(size.min(rest.len()));
                    batches.push(Nested::List(std::mem::replace(&mut rest, tail)));
                }
                Nested::List(batches)
            })
        })
}

proptest! {
    #[test]
    fn flattened_batches_nest_every_row(batches in batched_rows()) {
        let rows: Vec<Record> = flatten_all(batches)
            .into_vec()
            .into_iter()
            .map(|(id, pid)| record! { "id" => id, "pid" => pid })
            .collect();
        let total = rows.len();

        let fields = FieldNames::default();
        let forest = fields.array_to_tree(rows);
        prop_assert_eq!(treekit::forest::node_count(&forest), total);
        for node in &forest {
            prop_assert_eq!(node.data.get_i64("pid"), Some(0));
        }
    }
}
