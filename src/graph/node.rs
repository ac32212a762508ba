use strum::{AsRefStr, Display, EnumString};

use crate::graph::Access;

/// Intersection classification relevant to transition penalties.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Display, EnumString, AsRefStr)]
#[strum(serialize_all = "snake_case")]
#[repr(u8)]
pub enum NodeType {
    /// Plain street intersection.
    #[default]
    Street,
    Gate,
    Bollard,
    TollBooth,
    BorderControl,
}

/// Read-only attributes of one node, as the external tile store
/// surfaces them to the search engine.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NodeInfo {
    pub node_type: NodeType,
    /// Modes allowed to pass the node.
    pub access: Access,
    /// Bit per (from, to) local index pair: the road name carries
    /// through that turn.
    consistent_names: u64,
}

impl NodeInfo {
    const MAX_LOCAL_IDX: u32 = 7;

    pub fn new(node_type: NodeType, access: Access) -> Self {
        Self {
            node_type,
            access,
            consistent_names: 0,
        }
    }

    /// True when the road name carries through the turn between the
    /// two local edge indices.
    pub fn name_consistency(&self, from_idx: u32, to_idx: u32) -> bool {
        self.consistent_names >> Self::bit(from_idx, to_idx) & 1 == 1
    }

    /// Marks the turn between two local edge indices as keeping its
    /// road name. Used by tile builders and tests.
    pub fn set_name_consistency(&mut self, from_idx: u32, to_idx: u32) {
        self.consistent_names |= 1 << Self::bit(from_idx, to_idx);
    }

    fn bit(from_idx: u32, to_idx: u32) -> u32 {
        from_idx.min(Self::MAX_LOCAL_IDX) * 8 + to_idx.min(Self::MAX_LOCAL_IDX)
    }
}
