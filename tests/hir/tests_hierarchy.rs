//! Hierarchy construction through an AnalysisHost.

use rstest::rstest;
use veriscan::hir::{
    DuplicateResolution, HierarchyNodeKind, HierarchyOptions, build_hierarchy, root_modules,
};
use veriscan::project::ScanConfig;

use crate::helpers::host_helpers::*;
use crate::helpers::source_fixtures::*;

// =============================================================================
// CYCLES
// =============================================================================

#[test]
fn test_direct_cycle_terminates() {
    let mut host = host_with_config(
        &[("top.v", DIRECT_CYCLE_TOP), ("mid.v", DIRECT_CYCLE_MID)],
        hierarchy_config(20, "top"),
    );
    let hierarchy = host.analysis().hierarchy();

    assert_eq!(hierarchy.roots.len(), 1);
    let top = hierarchy.root("top").unwrap();
    let mid = top.child("u_mid").unwrap();
    assert_eq!(mid.kind, HierarchyNodeKind::Module);

    let again = mid.child("u_top").unwrap();
    assert_eq!(again.kind, HierarchyNodeKind::Cycle);
    assert!(again.children.is_empty());
    assert_eq!(again.label, "u_top : top (cycle)");
    assert!(hierarchy.stats.cycle_hits >= 1);
}

#[test]
fn test_pure_cycle_without_top_has_no_roots() {
    let mut host = host_from_sources(&[
        ("top.v", DIRECT_CYCLE_TOP),
        ("mid.v", DIRECT_CYCLE_MID),
    ]);
    let hierarchy = host.analysis().hierarchy();
    assert!(hierarchy.is_empty());
}

#[test]
fn test_unknown_top_falls_back_to_computed_roots() {
    let mut host = host_with_config(&[("chain.v", CHAIN)], hierarchy_config(20, "nope"));
    let hierarchy = host.analysis().hierarchy();
    let roots: Vec<_> = hierarchy.roots.iter().map(|r| &*r.module_name).collect();
    assert_eq!(roots, vec!["a"]);
}

#[test]
fn test_module_reused_in_sibling_branches_is_not_a_cycle() {
    let source = r#"
module top;
  left  u_l ();
  right u_r ();
endmodule
module left;
  leaf u_leaf ();
endmodule
module right;
  leaf u_leaf ();
endmodule
module leaf;
endmodule
"#;
    let mut host = host_from_sources(&[("t.v", source)]);
    let hierarchy = host.analysis().hierarchy();
    let top = hierarchy.root("top").unwrap();
    for path in [["u_l", "u_leaf"], ["u_r", "u_leaf"]] {
        assert_eq!(top.descend(&path).unwrap().kind, HierarchyNodeKind::Module);
    }
    assert_eq!(hierarchy.stats.cycle_hits, 0);
}

// =============================================================================
// DEPTH LIMIT
// =============================================================================

#[test]
fn test_depth_limit_on_chain() {
    let mut host = host_with_config(&[("chain.v", CHAIN)], hierarchy_config(2, ""));
    let hierarchy = host.analysis().hierarchy();

    let a = hierarchy.root("a").unwrap();
    let b = a.child("u_b").unwrap();
    assert_eq!(b.kind, HierarchyNodeKind::Module);

    let c = b.child("u_c").unwrap();
    assert_eq!(c.kind, HierarchyNodeKind::DepthLimit);
    assert_eq!(c.depth, 2);
    assert!(c.children.is_empty());
    assert_eq!(hierarchy.stats.depth_limit_hits, 1);
    assert_eq!(hierarchy.stats.max_depth, 2);

    // nothing below the limit is ever built
    assert!(a.walk().iter().all(|n| &*n.module_name != "d"));
}

#[rstest]
#[case(1, 1)]
#[case(3, 3)]
#[case(20, 3)]
fn test_depth_limit_bounds_tree(#[case] max_depth: usize, #[case] expected_depth: usize) {
    let mut host = host_with_config(&[("chain.v", CHAIN)], hierarchy_config(max_depth, ""));
    let hierarchy = host.analysis().hierarchy();
    assert_eq!(hierarchy.stats.max_depth, expected_depth);
    let deepest = hierarchy.roots[0].walk().into_iter().map(|n| n.depth).max();
    assert_eq!(deepest, Some(expected_depth));
}

// =============================================================================
// ROOTS
// =============================================================================

#[test]
fn test_root_computation_is_idempotent() {
    let mut host = host_from_sources(&[
        ("top.v", TOP_WITH_ALU),
        ("alu_fast.v", ALU_FAST),
        ("chain.v", CHAIN),
    ]);
    let analysis = host.analysis();
    let index = analysis.design_index();

    let first = root_modules(index);
    let second = root_modules(index);
    assert_eq!(first, second);

    let names: Vec<&str> = first.iter().map(|n| &**n).collect();
    assert_eq!(names, vec!["a", "top"]);
    for module in index.modules() {
        let is_root = first.contains(&module.name);
        assert_eq!(is_root, !index.is_instantiated(&module.name));
    }
}

#[test]
fn test_missing_index_gives_empty_hierarchy() {
    let hierarchy = build_hierarchy(None, &HierarchyOptions::default());
    assert!(hierarchy.is_empty());
    assert_eq!(hierarchy.stats.node_count, 0);
}

// =============================================================================
// DUPLICATE RESOLUTION
// =============================================================================

fn duplicate_host(resolve: DuplicateResolution) -> veriscan::ide::AnalysisHost {
    host_with_config(
        &[
            ("top.v", TOP_WITH_ALU),
            ("alu_fast.v", ALU_FAST),
            ("alu_small.v", ALU_SMALL),
        ],
        ScanConfig {
            hierarchy_resolve: resolve,
            ..ScanConfig::default()
        },
    )
}

#[test]
fn test_resolve_first_one_child_per_instance() {
    let mut host = duplicate_host(DuplicateResolution::First);
    let hierarchy = host.analysis().hierarchy();
    let top = hierarchy.root("top").unwrap();

    assert_eq!(top.children.len(), 2);
    for instance in ["u_alu0", "u_alu1"] {
        assert_eq!(top.children_for(instance).len(), 1);
    }
    let alu = top.child("u_alu0").unwrap();
    assert_eq!(&*alu.child("u_add").unwrap().module_name, "adder_fast");
}

#[test]
fn test_resolve_all_one_child_per_definition() {
    let mut host = duplicate_host(DuplicateResolution::All);
    let analysis = host.analysis();
    let definitions = analysis.design_index().modules_named("alu").len();
    assert_eq!(definitions, 2);

    let hierarchy = analysis.hierarchy();
    let top = hierarchy.root("top").unwrap();
    assert_eq!(top.children.len(), 4);

    let variants = top.children_for("u_alu0");
    assert_eq!(variants.len(), definitions);
    assert_eq!(variants[0].label, "u_alu0 : alu [alu_fast.v]");
    assert_eq!(variants[1].label, "u_alu0 : alu [alu_small.v]");

    // each variant expands only its own definition
    let adders: Vec<_> = variants
        .iter()
        .map(|v| &*v.child("u_add").unwrap().module_name)
        .collect();
    assert_eq!(adders, vec!["adder_fast", "adder_small"]);
    assert!(
        variants
            .iter()
            .all(|v| v.children.len() == 1 && v.children[0].kind == HierarchyNodeKind::External)
    );
}

#[test]
fn test_external_nodes_are_counted() {
    let mut host = duplicate_host(DuplicateResolution::All);
    let hierarchy = host.analysis().hierarchy();
    // two alu instances, two variants each, one unresolved adder per variant
    assert_eq!(hierarchy.stats.external_hits, 4);
    let external = hierarchy.root("top").unwrap().descend(&["u_alu1", "u_add"]).unwrap();
    assert_eq!(external.label, "u_add : adder_fast (external)");
    assert!(external.definition.is_none());
    assert!(external.instantiation.is_some());
}
