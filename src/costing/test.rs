use serde_json::json;

use crate::costing::{
    Cost, Costing, CostingError, EdgeFilter, NodeFilter, RangedDefault, TravelMode, create_costing,
};
use crate::graph::{Access, DirectedEdge, NodeInfo, NodeType, Use};

#[test]
fn missing_values_resolve_to_the_default() {
    let range = RangedDefault::new(0.0, 5.0, 10.0);
    assert_eq!(range.value_or_default(None), 5.0);
}

#[test]
fn supplied_values_saturate_into_range() {
    let range = RangedDefault::new(1.0, 5.0, 10.0);

    assert_eq!(range.value_or_default(Some(-3.0)), 1.0, "below min must clamp up");
    assert_eq!(range.value_or_default(Some(12.0)), 10.0, "above max must clamp down");
    assert_eq!(range.value_or_default(Some(7.5)), 7.5, "in range must pass through");
    assert_eq!(range.value_or_default(Some(1.0)), 1.0);
    assert_eq!(range.value_or_default(Some(10.0)), 10.0);
}

#[test]
fn integral_ranges_validate_too() {
    let range = RangedDefault::new(0u32, 30, 120);

    assert_eq!(range.value_or_default(Some(500)), 120);
    assert_eq!(range.value_or_default(None), 30);
    assert!(range.contains(30));
    assert!(!range.contains(121));
}

#[test]
fn costs_accumulate_component_wise() {
    let mut total = Cost::new(10.0, 4.0) + Cost::new(2.5, 1.5);
    assert_eq!(total, Cost::new(12.5, 5.5));

    total += Cost::new(0.5, 0.5);
    assert_eq!(total, Cost::new(13.0, 6.0));
}

#[test_log::test]
fn builds_a_pedestrian_model() {
    let costing = create_costing(TravelMode::Pedestrian, &json!({ "type": "foot" }))
        .expect("pedestrian costing must build");

    assert_eq!(costing.travel_mode(), TravelMode::Pedestrian);
    assert_eq!(costing.access_mode(), Access::PEDESTRIAN);
    assert!(costing.mode_weight() > 0.0);
}

#[test]
fn malformed_configuration_fails_construction() {
    let result = create_costing(TravelMode::Pedestrian, &json!({ "walking_speed": "brisk" }));
    assert!(
        matches!(result, Err(CostingError::Configuration(_))),
        "a mistyped field must fail construction"
    );
}

#[test]
fn unregistered_modes_are_refused() {
    let result = create_costing(TravelMode::Drive, &json!({}));
    assert!(matches!(
        result,
        Err(CostingError::UnsupportedMode(TravelMode::Drive))
    ));
}

fn snap_edge(use_: Use, forward_access: Access) -> DirectedEdge {
    DirectedEdge {
        length: 25.0,
        use_,
        forward_access,
        ..Default::default()
    }
}

#[test]
fn edge_filter_admits_static_topology_only() {
    let filter = EdgeFilter::new(Access::PEDESTRIAN);

    assert!(filter.allows(&snap_edge(Use::Road, Access::PEDESTRIAN)));
    assert!(
        !filter.allows(&snap_edge(Use::Road, Access::AUTO)),
        "the mode access bit must be present"
    );
    assert!(!filter.allows(&snap_edge(Use::Rail, Access::PEDESTRIAN)));
    assert!(!filter.allows(&snap_edge(Use::TransitConnection, Access::PEDESTRIAN)));

    let shortcut = DirectedEdge {
        shortcut: true,
        ..snap_edge(Use::Road, Access::PEDESTRIAN)
    };
    assert!(!filter.allows(&shortcut), "shortcuts are never snap targets");

    let transition = DirectedEdge {
        trans_up: true,
        ..snap_edge(Use::Road, Access::PEDESTRIAN)
    };
    assert!(!filter.allows(&transition), "hierarchy transitions are never snap targets");
}

#[test]
fn node_filter_tests_the_access_bit() {
    let filter = NodeFilter::new(Access::PEDESTRIAN);

    assert!(filter.allows(&NodeInfo::new(NodeType::Gate, Access::PEDESTRIAN)));
    assert!(!filter.allows(&NodeInfo::new(NodeType::Street, Access::AUTO)));
}
