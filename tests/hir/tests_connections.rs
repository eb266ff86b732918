//! Connection analysis between sibling instances.

use veriscan::hir::{connections_with_all, find_connections};

use crate::helpers::host_helpers::*;
use crate::helpers::source_fixtures::*;

#[test]
fn test_shared_clock_and_bus() {
    let mut host = host_from_sources(&[("soc.v", SHARED_CLOCK)]);
    let analysis = host.analysis();
    let matches = analysis.connections("soc", "u_prod", "u_cons");

    let nets: Vec<_> = matches
        .iter()
        .map(|m| (m.net.as_str(), &*m.left.port, &*m.right.port))
        .collect();
    assert_eq!(
        nets,
        vec![("sysclk", "clk", "clock"), ("data[7:0]", "dout", "din")]
    );
    assert_eq!(matches[0].location, matches[0].left.location);
    assert_eq!(matches[0].location.start().line, 6);
}

#[test]
fn test_query_order_swaps_sides() {
    let mut host = host_from_sources(&[("soc.v", SHARED_CLOCK)]);
    let analysis = host.analysis();
    let matches = analysis.connections("soc", "u_cons", "u_prod");
    assert_eq!(&*matches[0].left.port, "clock");
    assert_eq!(&*matches[0].right.port, "clk");
}

#[test]
fn test_no_shared_net() {
    let mut host = host_from_sources(&[("soc.v", SHARED_CLOCK)]);
    let analysis = host.analysis();
    assert!(analysis.connections("soc", "u_prod", "u_mon").is_empty());
}

#[test]
fn test_different_parents_never_match() {
    let mut host = host_from_sources(&[("soc.v", SHARED_CLOCK), ("bridge.v", OTHER_PARENT)]);
    let analysis = host.analysis();
    let index = analysis.design_index();

    // `u_prod` exists in both parents, but only soc holds both names
    assert!(find_connections(index, "bridge", "u_prod", "u_cons").is_empty());
    assert_eq!(find_connections(index, "soc", "u_prod", "u_cons").len(), 2);
}

#[test]
fn test_connections_with_all_siblings() {
    let mut host = host_from_sources(&[("soc.v", SHARED_CLOCK)]);
    let analysis = host.analysis();
    let all = connections_with_all(analysis.design_index(), "soc", "u_cons");
    assert_eq!(all.len(), 1);
    assert_eq!(&*all[0].0, "u_prod");
    assert_eq!(all[0].1.len(), 2);
    assert!(analysis.connections_with_all("soc", "u_mon").is_empty());
}
