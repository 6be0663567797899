//! End-to-end scenarios driving the graph through realistic mutation
//! sequences entirely via the public API.
//!
//! Each test builds a graph, mutates it, and checks the externally
//! observable contract: a valid topological order after every completed
//! operation, rejected mutations leaving no trace, and query results
//! consistent with the edges actually present.

use dagorder::prelude::*;

/// Checks every externally observable ordering invariant.
///
/// The order snapshot must cover each live node exactly once, and every
/// registered edge must point forward through it.
fn assert_order_valid(dag: &Dag<&str>) {
    let order = dag.order();
    assert_eq!(order.len(), dag.len());

    for (slot, id) in order.iter().enumerate() {
        assert_eq!(dag.order_of(id), Some(slot));
    }
    for from in &order {
        for to in dag.immediate_successors_of(&[*from]) {
            assert!(
                dag.order_of(from) < dag.order_of(&to),
                "edge must point forward in the order",
            );
        }
    }
}

fn position(dag: &Dag<&str>, id: &str) -> usize {
    dag.order_of(&id).unwrap_or_else(|| panic!("missing node"))
}

/// A diamond with a tail: A feeds B and C, which both feed D, which feeds E.
#[test]
fn diamond_respects_all_edge_constraints() -> Result<()> {
    let mut dag: Dag<&str> = Dag::new();
    dag.add_edge("a", "b")?;
    dag.add_edge("a", "c")?;
    dag.add_edge("b", "d")?;
    dag.add_edge("c", "d")?;
    dag.add_edge("d", "e")?;

    assert!(position(&dag, "a") < position(&dag, "b"));
    assert!(position(&dag, "a") < position(&dag, "c"));
    assert!(position(&dag, "b") < position(&dag, "d"));
    assert!(position(&dag, "c") < position(&dag, "d"));
    assert!(position(&dag, "d") < position(&dag, "e"));
    assert_order_valid(&dag);
    Ok(())
}

/// Closing a chain into a loop must fail and leave the graph untouched.
#[test]
fn cycle_rejection_leaves_no_trace() -> Result<()> {
    let mut dag: Dag<&str> = Dag::new();
    dag.add_edge("a", "b")?;
    dag.add_edge("b", "c")?;
    let order_before = dag.order();

    assert_eq!(dag.add_edge("c", "a"), Err(Error::CycleDetected));

    assert!(!dag.has_edge(&"c", &"a"));
    assert_eq!(dag.order(), order_before);
    assert_eq!(dag.edge_count(), 2);
    assert_order_valid(&dag);
    Ok(())
}

/// Merging the midpoints of two independent chains routes both chains
/// through the surviving node.
#[test]
fn merging_chain_midpoints_reroutes_edges() -> Result<()> {
    let mut dag: Dag<&str> = Dag::new();
    dag.add_edge("a", "b")?;
    dag.add_edge("b", "c")?;
    dag.add_edge("d", "e")?;
    dag.add_edge("e", "f")?;

    dag.merge_nodes(&"b", &"e")?;

    let mut nodes = dag.order();
    nodes.sort_unstable();
    assert_eq!(nodes, vec!["a", "b", "c", "d", "f"]);

    assert!(dag.has_edge(&"a", &"b"));
    assert!(dag.has_edge(&"b", &"c"));
    assert!(dag.has_edge(&"d", &"b"));
    assert!(dag.has_edge(&"b", &"f"));
    assert_eq!(dag.edge_count(), 4);
    assert_order_valid(&dag);
    Ok(())
}

/// A build-system-like graph exercised through grow, query, shrink, and
/// re-grow phases, with the order checked after every phase.
#[test]
fn mixed_mutation_sequence_keeps_order_valid() -> Result<()> {
    let mut dag: Dag<&str> = Dag::new();

    // Grow: dependency edges arrive in an order that forces reorders.
    dag.add("deploy");
    dag.add("test");
    dag.add("build");
    dag.add_edge("build", "test")?;
    dag.add_edge("test", "deploy")?;
    dag.add_edge("fetch", "build")?;
    dag.add_edge("lint", "test")?;
    assert_order_valid(&dag);

    // Query phase.
    assert!(dag.has_path(&"fetch", &"deploy"));
    assert!(!dag.has_path(&"lint", &"build"));
    assert_eq!(
        dag.ordered_predecessors_of(&["deploy"]).last(),
        Some(&"test"),
    );
    assert_eq!(
        dag.sort_nodes(&["deploy", "fetch", "test"]),
        vec!["fetch", "test", "deploy"],
    );

    // Shrink: dropping a node severs its edges and compacts the order.
    dag.remove(&"test");
    assert!(!dag.has_path(&"build", &"deploy"));
    assert_order_valid(&dag);

    // Re-grow: a previously cycle-forming direction is now legal.
    dag.add_edge("deploy", "build")?;
    assert!(position(&dag, "deploy") < position(&dag, "build"));
    assert_order_valid(&dag);
    Ok(())
}

/// Disconnected clusters decompose into per-cluster subgraphs, each
/// topologically ordered.
#[test]
fn decomposition_splits_disconnected_clusters() -> Result<()> {
    let mut dag: Dag<&str> = Dag::new();
    dag.add_edge("a", "b")?;
    dag.add_edge("b", "c")?;
    dag.add_edge("x", "y")?;
    dag.add("isolated");

    let components = dag.components();
    assert_eq!(components.len(), 3);
    assert!(components.contains(&vec!["a", "b", "c"]));
    assert!(components.contains(&vec!["x", "y"]));
    assert!(components.contains(&vec!["isolated"]));

    // Connecting two clusters collapses them into one component.
    dag.add_edge("c", "x")?;
    assert_eq!(dag.components().len(), 2);
    Ok(())
}

/// Boolean-reporting twins behave identically to their fallible originals.
#[test]
fn boolean_twins_mirror_fallible_operations() -> Result<()> {
    let mut dag: Dag<&str> = Dag::new();
    assert!(dag.try_add_edge("a", "b"));
    assert!(dag.try_add_edge("b", "c"));
    assert!(!dag.try_add_edge("c", "a"));
    assert!(!dag.try_add_edge("a", "a"));

    assert!(!dag.try_merge_nodes(&"a", &"c"), "connected nodes");
    assert!(dag.try_merge_nodes(&"a", &"missing"), "no-op merge succeeds");

    assert_eq!(dag.len(), 3);
    assert_eq!(dag.edge_count(), 2);
    assert_order_valid(&dag);
    Ok(())
}

/// Works with any `Eq + Hash + Clone` identity type, not just strings.
#[test]
fn integer_identities_work_end_to_end() -> Result<()> {
    let mut dag: Dag<u64> = (0..6).collect();
    dag.add_edge(5, 0)?;
    dag.add_edge(0, 3)?;
    dag.add_edge(3, 1)?;

    assert_eq!(dag.ordered_successors_of(&[5]), vec![0, 3, 1]);
    assert_eq!(dag.add_edge(1, 5), Err(Error::CycleDetected));
    assert!(dag.has_path(&5, &1));
    Ok(())
}
