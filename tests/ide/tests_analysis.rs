//! AnalysisHost lifecycle.

use std::path::Path;
use std::sync::Arc;
use std::thread;

use veriscan::hir::DuplicateResolution;
use veriscan::ide::AnalysisHost;
use veriscan::project::ScanConfig;
use veriscan::syntax::DefineSet;

use crate::helpers::host_helpers::*;
use crate::helpers::source_fixtures::*;

#[test]
fn test_many_edits_one_rebuild() {
    let mut host = AnalysisHost::new();
    for i in 0..10 {
        host.set_file_content(format!("m{i}.v"), format!("module m{i};\nendmodule\n"));
    }
    assert_eq!(host.generation(), 0);
    let analysis = host.analysis();
    assert_eq!(analysis.design_index().module_count(), 10);
    assert_eq!(host.generation(), 1);
}

#[test]
fn test_file_order_threads_defines() {
    let mut host = host_from_sources(&[
        ("defs.vh", "`define USE_FAST\n"),
        ("top.v", CONDITIONAL_TOP),
    ]);
    let analysis = host.analysis();
    let top = analysis.design_index().module("top").unwrap();
    assert_eq!(&*top.instances[0].module_type, "fast_core");

    // replacing a file keeps its place in the order
    host.set_file_content("defs.vh", "`define OTHER\n");
    let analysis = host.analysis();
    let top = analysis.design_index().module("top").unwrap();
    assert_eq!(&*top.instances[0].module_type, "small_core");
}

#[test]
fn test_disabling_preprocess_sees_both_branches() {
    let config = ScanConfig {
        enable_preprocess: false,
        ..ScanConfig::default()
    };
    let mut host = host_with_config(&[("top.v", CONDITIONAL_TOP)], config);
    let analysis = host.analysis();
    let types: Vec<_> = analysis
        .design_index()
        .module("top")
        .unwrap()
        .instances
        .iter()
        .map(|i| &*i.module_type)
        .collect();
    assert_eq!(types, vec!["fast_core", "small_core"]);
}

#[test]
fn test_base_defines_apply_to_first_file() {
    let mut host = host_from_sources(&[("top.v", CONDITIONAL_TOP)]);
    host.set_defines(["USE_FAST"].into_iter().collect::<DefineSet>());
    let analysis = host.analysis();
    let top = analysis.design_index().module("top").unwrap();
    assert_eq!(&*top.instances[0].module_type, "fast_core");
}

#[test]
fn test_settings_change_hierarchy_without_rebuild() {
    let mut host = host_from_sources(&[
        ("top.v", TOP_WITH_ALU),
        ("alu_fast.v", ALU_FAST),
        ("alu_small.v", ALU_SMALL),
    ]);
    assert_eq!(host.analysis().hierarchy().roots[0].children.len(), 4);

    host.set_config(ScanConfig {
        hierarchy_resolve: DuplicateResolution::First,
        ..ScanConfig::default()
    });
    let generation = host.generation();
    assert_eq!(host.analysis().hierarchy().roots[0].children.len(), 2);
    assert_eq!(host.generation(), generation);
}

#[test]
fn test_snapshot_is_shareable_across_threads() {
    let mut host = host_from_sources(&[("chain.v", CHAIN)]);
    let analysis = host.analysis();
    let handle = host.index_handle();

    let worker = thread::spawn(move || {
        let hierarchy = analysis.hierarchy();
        hierarchy.roots.len()
    });
    assert_eq!(worker.join().unwrap(), 1);

    let index = handle.snapshot();
    host.remove_file(Path::new("chain.v"));
    let _ = host.analysis();
    assert_eq!(index.module_count(), 4);
    assert!(handle.snapshot().is_empty());
    assert_eq!(Arc::strong_count(&index), 1);
}
