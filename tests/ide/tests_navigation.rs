//! Goto definition, instantiation lookup and module symbols.

use std::path::Path;

use veriscan::base::{FileId, Position};

use crate::helpers::host_helpers::*;
use crate::helpers::source_fixtures::*;

#[test]
fn test_goto_instance_type_across_files() {
    let mut host = host_from_sources(&[
        ("top.v", TOP_WITH_ALU),
        ("alu_fast.v", ALU_FAST),
        ("alu_small.v", ALU_SMALL),
    ]);
    let analysis = host.analysis();
    let top = analysis.file_id(Path::new("top.v")).unwrap();

    // `  alu u_alu0 ();` on line 2
    let result = analysis.goto_module_definition(top, Position::new(2, 3));
    let files: Vec<_> = result
        .targets
        .iter()
        .map(|t| analysis.file_path(t.location.file).unwrap())
        .collect();
    assert_eq!(files, vec![Path::new("alu_fast.v"), Path::new("alu_small.v")]);
}

#[test]
fn test_goto_on_whitespace() {
    let mut host = host_from_sources(&[("top.v", TOP_WITH_ALU)]);
    let analysis = host.analysis();
    assert!(
        analysis
            .goto_module_definition(FileId::new(0), Position::new(2, 0))
            .is_empty()
    );
}

#[test]
fn test_enclosing_module() {
    let mut host = host_from_sources(&[("chain.v", CHAIN)]);
    let analysis = host.analysis();
    let target = analysis
        .enclosing_module(FileId::new(0), Position::new(10, 2))
        .unwrap();
    assert_eq!(&*target.name, "c");
}

#[test]
fn test_find_instantiations_across_files() {
    let mut host = host_from_sources(&[
        ("soc.v", SHARED_CLOCK),
        ("bridge.v", OTHER_PARENT),
    ]);
    let analysis = host.analysis();
    let result = analysis.find_instantiations("consumer", false);
    let sites: Vec<_> = result
        .references
        .iter()
        .map(|r| (&*r.parent, r.instance_name.as_deref().unwrap()))
        .collect();
    assert_eq!(sites, vec![("soc", "u_cons"), ("bridge", "u_prod")]);
}

#[test]
fn test_module_symbols() {
    let mut host = host_from_sources(&[("chain.v", CHAIN), ("top.v", TOP_WITH_ALU)]);
    let analysis = host.analysis();

    let names: Vec<_> = analysis
        .module_symbols(None)
        .into_iter()
        .map(|s| s.name.to_string())
        .collect();
    assert_eq!(names, vec!["a", "b", "c", "d", "top"]);

    let filtered = analysis.module_symbols(Some("TO"));
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].instance_count, 2);

    let outline = analysis.document_modules(FileId::new(0));
    assert_eq!(outline.len(), 4);
    assert!(analysis.document_modules(FileId::new(1))[0].location.start().line == 1);
}
