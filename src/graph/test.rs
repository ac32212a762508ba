use std::str::FromStr;

use crate::graph::{Access, DirectedEdge, NodeInfo, NodeType, Surface, Use};

#[test]
fn worse_surfaces_compare_greater() {
    assert!(Surface::PavedSmooth < Surface::Paved, "smooth pavement must rank best");
    assert!(Surface::Gravel < Surface::Path);
    assert!(
        Surface::Impassable > Surface::Path,
        "impassable must rank worse than any usable surface"
    );
}

#[test]
fn enums_parse_from_snake_case() {
    assert_eq!(
        Use::from_str("transit_connection").expect("must parse"),
        Use::TransitConnection
    );
    assert_eq!(
        Surface::from_str("paved_rough").expect("must parse"),
        Surface::PavedRough
    );
    assert_eq!(
        NodeType::from_str("border_control").expect("must parse"),
        NodeType::BorderControl
    );
}

#[test]
fn access_masks_combine_and_test_bitwise() {
    let mask = Access::PEDESTRIAN | Access::WHEELCHAIR;
    assert!(mask.contains(Access::PEDESTRIAN));
    assert!(mask.contains(Access::WHEELCHAIR));
    assert!(!mask.contains(Access::AUTO));
    assert!(Access::default().is_empty(), "default mask must allow nothing");
}

#[test]
fn intersection_queries_key_off_the_arriving_index() {
    let edge = DirectedEdge {
        edges_to_left: 0b0000_0100,
        edges_to_right: 0b0000_0101,
        stop_impacts: [0, 1, 7, 0, 0, 0, 0, 3],
        ..Default::default()
    };

    assert!(edge.edge_to_left(2));
    assert!(!edge.edge_to_left(0));
    assert!(edge.edge_to_right(0));
    assert!(!edge.edge_to_right(1));

    assert_eq!(edge.stop_impact(2), 7);
    assert_eq!(edge.stop_impact(1), 1);
}

#[test]
fn out_of_range_local_indices_clamp() {
    let edge = DirectedEdge {
        edges_to_left: 0b1000_0000,
        stop_impacts: [0, 0, 0, 0, 0, 0, 0, 3],
        ..Default::default()
    };

    // Anything past the last local index resolves to it.
    assert!(edge.edge_to_left(31));
    assert_eq!(edge.stop_impact(31), 3);
}

#[test]
fn name_consistency_is_per_turn() {
    let mut node = NodeInfo::new(NodeType::Street, Access::PEDESTRIAN);
    assert!(
        !node.name_consistency(1, 2),
        "turns must default to inconsistent names"
    );

    node.set_name_consistency(1, 2);
    assert!(node.name_consistency(1, 2));
    assert!(!node.name_consistency(2, 1), "consistency must be directional");
}
