use strum::{AsRefStr, Display, EnumString};

use crate::graph::Access;

/// Stable handle to a directed edge within the external tile store.
///
/// Costing never dereferences a handle; it only keys lookups such as
/// the per-request avoid set.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct EdgeId(pub u64);

/// Specialized use of an edge, beyond its road class.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Display, EnumString, AsRefStr)]
#[strum(serialize_all = "snake_case")]
#[repr(u8)]
pub enum Use {
    /// General road with no specialized use.
    #[default]
    Road,
    /// Sliproad / ramp joining two roads.
    Ramp,
    /// Dedicated walkway.
    Footway,
    /// Walkway running alongside a road.
    Sidewalk,
    /// Service road between property rears.
    Alley,
    /// Private access to a single property.
    Driveway,
    /// Generic mixed-use path.
    Path,
    /// Dedicated cycleway.
    Cycleway,
    /// Steps or stairs.
    Steps,
    /// Rough agricultural or forestry track.
    Track,
    /// Passenger or vehicle ferry leg.
    Ferry,
    /// Ferry carrying rail vehicles.
    RailFerry,
    /// Rail line.
    Rail,
    /// Synthetic edge joining the street graph to a transit stop.
    TransitConnection,
    Other,
}

/// Surface quality ordinal. Declaration order runs best to worst, so
/// a worse surface compares greater.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Display, EnumString, AsRefStr,
)]
#[strum(serialize_all = "snake_case")]
#[repr(u8)]
pub enum Surface {
    #[default]
    PavedSmooth,
    Paved,
    PavedRough,
    Compacted,
    Dirt,
    Gravel,
    Path,
    Impassable,
}

/// Read-only attributes of one directed edge, as the external tile
/// store surfaces them to the search engine.
///
/// The intersection queries ([`DirectedEdge::edge_to_left`],
/// [`DirectedEdge::edge_to_right`], [`DirectedEdge::stop_impact`])
/// describe the end node of the edge and are keyed by the local index
/// of the edge the search arrives from.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DirectedEdge {
    /// Edge length in meters.
    pub length: f64,
    /// Posted speed in km/h. Costing only reads this for uses which
    /// carry their own speed, such as ferries.
    pub speed: f64,
    pub use_: Use,
    pub surface: Surface,
    /// Modes allowed to traverse the edge in its forward direction.
    pub forward_access: Access,
    /// Precomputed aggregate spanning several real edges.
    pub shortcut: bool,
    /// Part of a roundabout.
    pub roundabout: bool,
    /// Sliproad / turn-channel flag; such an edge already expresses a
    /// turn.
    pub link: bool,
    /// Hierarchy transition up to a less detailed tile level.
    pub trans_up: bool,
    /// Hierarchy transition down to a more detailed tile level.
    pub trans_down: bool,
    /// Index of this edge among the edges of its end node.
    pub local_idx: u32,
    /// Local index of the opposing edge at the end node.
    pub opp_local_idx: u32,
    /// Bit per arriving local index: another edge lies to the left.
    pub edges_to_left: u8,
    /// Bit per arriving local index: another edge lies to the right.
    pub edges_to_right: u8,
    /// Crossing severity (0-7) per arriving local index.
    pub stop_impacts: [u8; 8],
}

impl DirectedEdge {
    const MAX_LOCAL_IDX: u32 = 7;

    /// Whether an edge lies to the left when arriving from `from_idx`.
    pub fn edge_to_left(&self, from_idx: u32) -> bool {
        self.edges_to_left >> from_idx.min(Self::MAX_LOCAL_IDX) & 1 == 1
    }

    /// Whether an edge lies to the right when arriving from `from_idx`.
    pub fn edge_to_right(&self, from_idx: u32) -> bool {
        self.edges_to_right >> from_idx.min(Self::MAX_LOCAL_IDX) & 1 == 1
    }

    /// Crossing severity (0-7) when arriving from `from_idx`.
    pub fn stop_impact(&self, from_idx: u32) -> u8 {
        self.stop_impacts[from_idx.min(Self::MAX_LOCAL_IDX) as usize].min(7)
    }
}
