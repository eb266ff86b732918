//! Design index aggregation across files.

use std::path::Path;

use veriscan::base::{FileId, Position};

use crate::helpers::host_helpers::*;
use crate::helpers::source_fixtures::*;

#[test]
fn test_duplicates_are_kept_in_discovery_order() {
    let mut host = host_from_sources(&[
        ("alu_small.v", ALU_SMALL),
        ("top.v", TOP_WITH_ALU),
        ("alu_fast.v", ALU_FAST),
    ]);
    let analysis = host.analysis();
    let index = analysis.design_index();

    let files: Vec<_> = index
        .modules_named("alu")
        .iter()
        .map(|m| index.file_path(m.file).unwrap())
        .collect();
    assert_eq!(files, vec![Path::new("alu_small.v"), Path::new("alu_fast.v")]);
    assert_eq!(index.duplicate_names(), vec![("alu", 2)]);
    assert_eq!(analysis.duplicate_names(), vec![("alu", 2)]);
    assert_eq!(index.module("alu").unwrap().file, FileId::new(0));
}

#[test]
fn test_module_at_position() {
    let mut host = host_from_sources(&[("chain.v", CHAIN)]);
    let analysis = host.analysis();
    let index = analysis.design_index();
    let file = analysis.file_id(Path::new("chain.v")).unwrap();

    let found = index.module_at(file, Position::new(6, 4)).unwrap();
    assert_eq!(&*found.name, "b");
    assert!(index.module_at(file, Position::new(0, 0)).is_none());
}

#[test]
fn test_instantiated_names() {
    let mut host = host_from_sources(&[("chain.v", CHAIN)]);
    let analysis = host.analysis();
    let index = analysis.design_index();
    assert!(!index.is_instantiated("a"));
    assert!(index.is_instantiated("d"));
    assert_eq!(index.instances().count(), 3);
}
