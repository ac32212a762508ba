use strum::{AsRefStr, Display, EnumString};

use crate::costing::{Cost, EdgeFilter, NodeFilter};
use crate::graph::{Access, DirectedEdge, EdgeId, EdgeLabel, NodeInfo};

/// Travel modes a costing model may be registered for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumString, AsRefStr)]
#[strum(serialize_all = "snake_case")]
#[repr(u8)]
pub enum TravelMode {
    Drive,
    Pedestrian,
    Bicycle,
    Transit,
}

/// Costing policy contract, implemented once per travel mode.
///
/// The search engine drives every operation here from its expansion
/// loop, once per edge or node touched, so the predicates and cost
/// functions must stay O(1) and side-effect free. All operations are
/// total over well-formed inputs; nothing returns a recoverable error
/// during a live search.
///
/// A built model is read-only. The `&mut self` hooks exist for the
/// multimodal planner and must run before the model is shared with a
/// search; afterwards a single instance may serve any number of
/// concurrent searches.
pub trait Costing: Send + Sync {
    /// Mode this model costs for.
    fn travel_mode(&self) -> TravelMode;

    /// The single access bit tested against edge and node masks.
    fn access_mode(&self) -> Access;

    /// Whether the forward search may expand onto `edge`.
    ///
    /// False when the edge lacks the mode's access bit, its surface is
    /// worse than the mode tolerates, it is a shortcut, the request
    /// asked to avoid it, the accumulated path distance plus this edge
    /// would exceed the mode's distance budget, or it is a transit
    /// connection while those are closed. Checked before any cost is
    /// computed so the search never settles an inadmissible edge.
    fn allowed(&self, edge: &DirectedEdge, pred: &EdgeLabel, edge_id: EdgeId) -> bool;

    /// Whether the reverse search, running from the destination, may
    /// expand onto `edge`.
    ///
    /// Tests the opposing edge's static attributes. Never spends the
    /// distance budget (the forward search owns it) and never enters
    /// transit connections: the reverse tree stays out of multimodal
    /// transfer logic by definition.
    fn allowed_reverse(
        &self,
        edge: &DirectedEdge,
        pred: &EdgeLabel,
        opp_edge: &DirectedEdge,
        opp_edge_id: EdgeId,
    ) -> bool;

    /// Whether the mode may pass the node (gates, bollards).
    fn allowed_node(&self, node: &NodeInfo) -> bool;

    /// Cost to traverse `edge` in isolation, excluding turn and node
    /// effects.
    fn edge_cost(&self, edge: &DirectedEdge) -> Cost;

    /// Cost of moving from the predecessor edge onto `edge` through
    /// `node`.
    fn transition_cost(&self, edge: &DirectedEdge, node: &NodeInfo, pred: &EdgeLabel) -> Cost;

    /// Reverse-search twin of [`Costing::transition_cost`], keyed by
    /// the local index `idx` of the opposing predecessor.
    ///
    /// For the mirrored physical transition both variants return the
    /// same value; bidirectional search relies on that agreement at
    /// the edge where the two frontiers meet.
    fn transition_cost_reverse(
        &self,
        idx: u32,
        node: &NodeInfo,
        pred: &DirectedEdge,
        edge: &DirectedEdge,
    ) -> Cost;

    /// Scalar multiplied with the remaining great-circle distance to
    /// form the A* heuristic.
    ///
    /// Derived from the fastest per-distance cost the model can ever
    /// produce, including any sub-unit multiplier, so the estimate
    /// never overstates the true remaining cost.
    fn a_star_cost_factor(&self) -> f64;

    /// Snap-target predicate over edges for location correlation,
    /// valid independent of any live search.
    fn edge_filter(&self) -> EdgeFilter;

    /// Snap-target predicate over nodes for location correlation.
    fn node_filter(&self) -> NodeFilter;

    /// Replaces the mode's distance budget with its per-segment
    /// multimodal limit. A pure walking route may allow 100 km while
    /// the walk legs of a transit itinerary are capped far lower.
    fn use_max_multimodal_distance(&mut self) {}

    /// Opens or closes transit-connection edges for this search.
    fn set_allow_transit_connections(&mut self, _allow: bool) {}

    /// Furthest the mode will travel between transit transfers, in
    /// meters.
    fn max_transfer_distance(&self) -> f64 {
        0.0
    }

    /// Multiplier the multimodal planner uses to favor time spent in
    /// this mode relative to others; higher favors the mode.
    fn mode_weight(&self) -> f64 {
        1.0
    }
}
