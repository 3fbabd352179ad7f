//! Integration tests for mep-model.

use mep_core::{Category, ElementKind};
use mep_model::NetworkBuilder;

#[test]
fn build_minimal_network() {
    // Build: AHU -(Out/In)- Duct
    let mut builder = NetworkBuilder::new(1, "Supply Air", Category::Mechanical);
    let ahu = builder.add_element(100, "AHU-1", ElementKind::Equipment);
    let duct = builder.add_element(101, "Duct-1", ElementKind::Segment);
    builder.connect(ahu, "Out1", duct, "In");
    builder.set_root(ahu);

    let network = builder.build().unwrap();

    assert_eq!(network.elements().len(), 2);
    assert_eq!(network.connectors().len(), 1);
    assert_eq!(network.root(), ahu);

    // Each side sees the other with its own port label
    let ahu_nbrs = network.neighbors(ahu);
    assert_eq!(ahu_nbrs.len(), 1);
    assert_eq!(ahu_nbrs[0].port, "Out1");
    assert_eq!(ahu_nbrs[0].to, duct);

    let duct_nbrs = network.neighbors(duct);
    assert_eq!(duct_nbrs.len(), 1);
    assert_eq!(duct_nbrs[0].port, "In");
    assert_eq!(duct_nbrs[0].to, ahu);
}

#[test]
fn chain_of_segments() {
    // Build: Boiler - Pipe1 - Tee - Pipe2 - Radiator
    let mut builder = NetworkBuilder::new(2, "Heating", Category::Piping);
    let boiler = builder.add_element(200, "Boiler", ElementKind::Equipment);
    let pipe1 = builder.add_element(201, "Pipe-1", ElementKind::Segment);
    let tee = builder.add_element(202, "Tee", ElementKind::Junction);
    let pipe2 = builder.add_element(203, "Pipe-2", ElementKind::Segment);
    let rad = builder.add_element(204, "Radiator", ElementKind::Terminal);
    builder.connect(boiler, "Supply", pipe1, "In");
    builder.connect(pipe1, "Out", tee, "In");
    builder.connect(tee, "Branch1", pipe2, "In");
    builder.connect(pipe2, "Out", rad, "In");
    builder.set_root(boiler);

    let network = builder.build().unwrap();

    assert_eq!(network.elements().len(), 5);
    assert_eq!(network.connectors().len(), 4);

    // Interior elements see both sides
    assert_eq!(network.degree(pipe1), 2);
    assert_eq!(network.degree(tee), 2);
    // Ends see one
    assert_eq!(network.degree(boiler), 1);
    assert_eq!(network.degree(rad), 1);
}

#[test]
fn parallel_connectors_between_same_elements() {
    // Supply and return loop: Chiller and Coil attached twice
    let mut builder = NetworkBuilder::new(3, "CHW Loop", Category::Piping);
    let chiller = builder.add_element(300, "Chiller", ElementKind::Equipment);
    let coil = builder.add_element(301, "Coil", ElementKind::Terminal);
    builder.connect(chiller, "Supply", coil, "In");
    builder.connect(coil, "Out", chiller, "Return");
    builder.set_root(chiller);

    let network = builder.build().unwrap();

    // Both elements see two endpoints, one per connector
    assert_eq!(network.degree(chiller), 2);
    assert_eq!(network.degree(coil), 2);

    let chiller_nbrs = network.neighbors(chiller);
    assert_eq!(chiller_nbrs[0].port, "Supply");
    assert_eq!(chiller_nbrs[1].port, "Return");
}

#[test]
fn neighbor_enumeration_is_repeatable() {
    let mut builder = NetworkBuilder::new(4, "Panel", Category::Electrical);
    let panel = builder.add_element(400, "LP-1", ElementKind::Equipment);
    let mut circuits = Vec::new();
    for i in 0..8 {
        let c = builder.add_element(
            410 + i,
            format!("Circuit-{}", i),
            ElementKind::Segment,
        );
        builder.connect(panel, format!("Breaker-{}", i), c, "Feed");
        circuits.push(c);
    }
    builder.set_root(panel);
    let network = builder.build().unwrap();

    let first: Vec<_> = network.neighbors(panel).to_vec();
    let second: Vec<_> = network.neighbors(panel).to_vec();
    assert_eq!(first, second);
    for (i, ep) in first.iter().enumerate() {
        assert_eq!(ep.to, circuits[i]);
    }
}
