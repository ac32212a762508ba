use std::collections::HashSet;

use log::debug;

use crate::costing::pedestrian::config::{
    ALLEY_FACTOR_RANGE, COUNTRY_CROSSING_COST_RANGE, COUNTRY_CROSSING_PENALTY_RANGE,
    CROSSING_COSTS, DRIVEWAY_FACTOR_RANGE, FERRY_COST_RANGE, GATE_PENALTY_RANGE,
    MANEUVER_PENALTY_RANGE, MAX_DISTANCE_FOOT_RANGE, MAX_DISTANCE_WHEELCHAIR_RANGE,
    MAX_FERRY_PENALTY, MAX_GRADE_FOOT_RANGE, MAX_GRADE_WHEELCHAIR_RANGE, MODE_WEIGHT_RANGE,
    PedestrianConfig, PedestrianType, ROUNDABOUT_FACTOR, SEC_PER_HOUR, SIDEWALK_FACTOR_RANGE,
    SPEED_FOOT_RANGE, SPEED_WHEELCHAIR_RANGE, STEP_PENALTY_FOOT_RANGE,
    STEP_PENALTY_WHEELCHAIR_RANGE, TRANSIT_START_END_MAX_DISTANCE_RANGE,
    TRANSIT_TRANSFER_MAX_DISTANCE_RANGE, USE_FERRY_RANGE, WALKWAY_FACTOR_RANGE,
};
use crate::costing::{Cost, Costing, CostingError, EdgeFilter, NodeFilter, TravelMode};
use crate::graph::{Access, DirectedEdge, EdgeId, EdgeLabel, NodeInfo, NodeType, Surface, Use};

/// Dynamic costing for pedestrian travel.
///
/// Built once per route request from a [`PedestrianConfig`], then
/// read-only for the lifetime of the search. It holds no graph data
/// and no per-search state, which is what makes a configured instance
/// safe to share across concurrent searches.
pub struct PedestrianCosting {
    pub(crate) type_: PedestrianType,
    pub(crate) access_mode: Access,
    /// Meters of walking the whole route may accumulate.
    pub(crate) max_distance: f64,
    pub(crate) mode_weight: f64,
    pub(crate) transit_start_end_max_distance: f64,
    pub(crate) transit_transfer_max_distance: f64,
    /// Worst surface the sub-type will traverse.
    pub(crate) minimal_allowed_surface: Surface,
    pub(crate) max_grade: f64,
    pub(crate) speed: f64,
    /// Seconds per meter at the nominal speed; keeps division off the
    /// hot path.
    pub(crate) speed_factor: f64,
    pub(crate) walkway_factor: f64,
    pub(crate) sidewalk_factor: f64,
    pub(crate) alley_factor: f64,
    pub(crate) driveway_factor: f64,
    pub(crate) step_penalty: f64,
    pub(crate) gate_penalty: f64,
    pub(crate) maneuver_penalty: f64,
    pub(crate) country_crossing_cost: f64,
    pub(crate) country_crossing_penalty: f64,
    pub(crate) ferry_cost: f64,
    pub(crate) ferry_penalty: f64,
    pub(crate) ferry_weight: f64,
    pub(crate) use_ferry: f64,
    pub(crate) allow_transit_connections: bool,
    pub(crate) avoid_edges: HashSet<EdgeId>,
}

impl PedestrianCosting {
    /// Builds a model from an untyped configuration record.
    ///
    /// A record of the wrong shape fails here; out-of-range values
    /// are saturated into their declared ranges, never rejected.
    pub fn from_json(config: &serde_json::Value) -> Result<Self, CostingError> {
        let config: PedestrianConfig = serde_json::from_value(config.clone())?;
        Ok(Self::new(&config))
    }

    /// Builds a model from typed options. Infallible: every numeric
    /// resolves through its declared range.
    pub fn new(config: &PedestrianConfig) -> Self {
        let type_ = config.type_;

        // Sub-type parameters. Segway shares the foot arm.
        let (access_mode, minimal_allowed_surface) = match type_ {
            PedestrianType::Wheelchair => (Access::WHEELCHAIR, Surface::Compacted),
            PedestrianType::Foot | PedestrianType::Segway => (Access::PEDESTRIAN, Surface::Path),
        };
        let (max_distance, speed, step_penalty, max_grade) = match type_ {
            PedestrianType::Wheelchair => (
                MAX_DISTANCE_WHEELCHAIR_RANGE.value_or_default(config.max_distance),
                SPEED_WHEELCHAIR_RANGE.value_or_default(config.walking_speed),
                STEP_PENALTY_WHEELCHAIR_RANGE.value_or_default(config.step_penalty),
                MAX_GRADE_WHEELCHAIR_RANGE.value_or_default(config.max_grade),
            ),
            PedestrianType::Foot | PedestrianType::Segway => (
                MAX_DISTANCE_FOOT_RANGE.value_or_default(config.max_distance),
                SPEED_FOOT_RANGE.value_or_default(config.walking_speed),
                STEP_PENALTY_FOOT_RANGE.value_or_default(config.step_penalty),
                MAX_GRADE_FOOT_RANGE.value_or_default(config.max_grade),
            ),
        };

        let use_ferry = USE_FERRY_RANGE.value_or_default(config.use_ferry);
        let (ferry_penalty, ferry_weight) = ferry_preference(use_ferry);

        let model = Self {
            type_,
            access_mode,
            max_distance,
            mode_weight: MODE_WEIGHT_RANGE.value_or_default(config.mode_weight),
            transit_start_end_max_distance: TRANSIT_START_END_MAX_DISTANCE_RANGE
                .value_or_default(config.transit_start_end_max_distance),
            transit_transfer_max_distance: TRANSIT_TRANSFER_MAX_DISTANCE_RANGE
                .value_or_default(config.transit_transfer_max_distance),
            minimal_allowed_surface,
            max_grade,
            speed,
            speed_factor: SEC_PER_HOUR * 0.001 / speed,
            walkway_factor: WALKWAY_FACTOR_RANGE.value_or_default(config.walkway_factor),
            sidewalk_factor: SIDEWALK_FACTOR_RANGE.value_or_default(config.sidewalk_factor),
            alley_factor: ALLEY_FACTOR_RANGE.value_or_default(config.alley_factor),
            driveway_factor: DRIVEWAY_FACTOR_RANGE.value_or_default(config.driveway_factor),
            step_penalty,
            gate_penalty: GATE_PENALTY_RANGE.value_or_default(config.gate_penalty),
            maneuver_penalty: MANEUVER_PENALTY_RANGE.value_or_default(config.maneuver_penalty),
            country_crossing_cost: COUNTRY_CROSSING_COST_RANGE
                .value_or_default(config.country_crossing_cost),
            country_crossing_penalty: COUNTRY_CROSSING_PENALTY_RANGE
                .value_or_default(config.country_crossing_penalty),
            ferry_cost: FERRY_COST_RANGE.value_or_default(config.ferry_cost),
            ferry_penalty,
            ferry_weight,
            use_ferry,
            allow_transit_connections: false,
            avoid_edges: HashSet::new(),
        };

        debug!(
            "built pedestrian costing: type={}, speed={:.1} km/h, max distance={:.0} m, ferry weight={:.2}",
            model.type_, model.speed, model.max_distance, model.ferry_weight
        );
        model
    }

    /// Sub-type this model was built for.
    pub fn pedestrian_type(&self) -> PedestrianType {
        self.type_
    }

    /// Marks edges the request asked to avoid. Applies to searches
    /// started after the call.
    pub fn add_avoid_edges(&mut self, edges: impl IntoIterator<Item = EdgeId>) {
        self.avoid_edges.extend(edges);
    }

    /// Shared body of the forward and reverse transition costs. Both
    /// must agree wherever the bidirectional frontiers meet, so the
    /// direction-specific entry points only differ in how they key
    /// the predecessor.
    fn transition(&self, edge: &DirectedEdge, node: &NodeInfo, pred_use: Use, idx: u32) -> Cost {
        // Steps dominate every other transition term.
        if edge.use_ == Use::Steps {
            return Cost::new(self.step_penalty, 0.0);
        }

        let mut secs = 0.0;
        let mut penalty = 0.0;

        match node.node_type {
            NodeType::BorderControl => {
                secs += self.country_crossing_cost;
                penalty += self.country_crossing_penalty;
            }
            NodeType::Gate => penalty += self.gate_penalty,
            _ => {}
        }

        // Boarding a ferry, not riding one through.
        if pred_use != Use::Ferry && edge.use_ == Use::Ferry {
            secs += self.ferry_cost;
            penalty += self.ferry_penalty;
        }

        // A link already expresses the turn; don't penalize it twice.
        if !edge.link && !node.name_consistency(idx, edge.local_idx) {
            penalty += self.maneuver_penalty;
        }

        // Crossing an intersection with edges on both sides.
        if edge.edge_to_right(idx) && edge.edge_to_left(idx) {
            secs += CROSSING_COSTS[edge.stop_impact(idx) as usize];
        }

        Cost::new(secs + penalty, secs)
    }
}

impl Costing for PedestrianCosting {
    fn travel_mode(&self) -> TravelMode {
        TravelMode::Pedestrian
    }

    fn access_mode(&self) -> Access {
        self.access_mode
    }

    fn allowed(&self, edge: &DirectedEdge, pred: &EdgeLabel, edge_id: EdgeId) -> bool {
        // TODO: enforce max_grade once the tile store exposes edge slope.
        if !edge.forward_access.contains(self.access_mode)
            || edge.surface > self.minimal_allowed_surface
            || edge.shortcut
            || self.avoid_edges.contains(&edge_id)
            || pred.path_distance + edge.length > self.max_distance
        {
            return false;
        }

        // Transit connections stay closed outside multimodal itineraries.
        if !self.allow_transit_connections && edge.use_ == Use::TransitConnection {
            return false;
        }
        true
    }

    fn allowed_reverse(
        &self,
        _edge: &DirectedEdge,
        _pred: &EdgeLabel,
        opp_edge: &DirectedEdge,
        opp_edge_id: EdgeId,
    ) -> bool {
        // The reverse tree never spends the distance budget and never
        // enters multimodal transfers.
        !(!opp_edge.forward_access.contains(self.access_mode)
            || opp_edge.surface > self.minimal_allowed_surface
            || opp_edge.shortcut
            || self.avoid_edges.contains(&opp_edge_id)
            || opp_edge.use_ == Use::TransitConnection)
    }

    fn allowed_node(&self, node: &NodeInfo) -> bool {
        node.access.contains(self.access_mode)
    }

    fn edge_cost(&self, edge: &DirectedEdge) -> Cost {
        // Ferries run on their posted speed rather than walking speed.
        if edge.use_ == Use::Ferry {
            let secs = edge.length * (SEC_PER_HOUR * 0.001) / edge.speed;
            return Cost::new(secs * self.ferry_weight, secs);
        }

        let secs = edge.length * self.speed_factor;
        let factor = match edge.use_ {
            Use::Footway => self.walkway_factor,
            Use::Alley => self.alley_factor,
            Use::Driveway => self.driveway_factor,
            Use::Sidewalk => self.sidewalk_factor,
            _ if edge.roundabout => ROUNDABOUT_FACTOR,
            _ => 1.0,
        };
        Cost::new(secs * factor, secs)
    }

    fn transition_cost(&self, edge: &DirectedEdge, node: &NodeInfo, pred: &EdgeLabel) -> Cost {
        self.transition(edge, node, pred.use_, pred.opp_local_idx)
    }

    fn transition_cost_reverse(
        &self,
        idx: u32,
        node: &NodeInfo,
        pred: &DirectedEdge,
        edge: &DirectedEdge,
    ) -> Cost {
        self.transition(edge, node, pred.use_, idx)
    }

    fn a_star_cost_factor(&self) -> f64 {
        // The walkway discount is the only multiplier able to undercut
        // the nominal speed, so admissibility assumes it holds
        // everywhere whenever it is active.
        if self.walkway_factor < 1.0 {
            self.walkway_factor * self.speed_factor
        } else {
            self.speed_factor
        }
    }

    fn edge_filter(&self) -> EdgeFilter {
        EdgeFilter::new(self.access_mode)
    }

    fn node_filter(&self) -> NodeFilter {
        NodeFilter::new(self.access_mode)
    }

    fn use_max_multimodal_distance(&mut self) {
        self.max_distance = self.transit_start_end_max_distance;
    }

    fn set_allow_transit_connections(&mut self, allow: bool) {
        self.allow_transit_connections = allow;
    }

    fn max_transfer_distance(&self) -> f64 {
        self.transit_transfer_max_distance
    }

    fn mode_weight(&self) -> f64 {
        self.mode_weight
    }
}

/// Splits the `[0, 1]` ferry preference into the penalty to board and
/// the weight on time spent aboard.
///
/// Below 0.5 the penalty falls linearly from its cap to zero while
/// the weight falls from 10x to 1x; from 0.5 up there is no penalty
/// and the weight continues down to 0.5x at full preference.
fn ferry_preference(use_ferry: f64) -> (f64, f64) {
    if use_ferry < 0.5 {
        (
            MAX_FERRY_PENALTY * (1.0 - use_ferry * 2.0),
            10.0 - use_ferry * 18.0,
        )
    } else {
        (0.0, 1.5 - use_ferry)
    }
}
