use crate::graph::{Access, DirectedEdge, NodeInfo, Use};

/// Edge snap-target predicate handed to location correlation.
///
/// Captures only the mode's access bit, so a filter stays valid
/// independent of any live search and is free to copy across threads.
#[derive(Clone, Copy, Debug)]
pub struct EdgeFilter {
    access: Access,
}

impl EdgeFilter {
    pub fn new(access: Access) -> Self {
        Self { access }
    }

    /// Whether the edge is usable as a snap target for the mode.
    ///
    /// Static topology only: hierarchy transitions, shortcuts, and
    /// rail or transit uses are never valid targets, and the edge
    /// must carry the mode's access bit.
    pub fn allows(&self, edge: &DirectedEdge) -> bool {
        !(edge.trans_up
            || edge.trans_down
            || edge.shortcut
            || matches!(edge.use_, Use::Rail | Use::TransitConnection)
            || !edge.forward_access.contains(self.access))
    }
}

/// Node snap-target predicate handed to location correlation.
#[derive(Clone, Copy, Debug)]
pub struct NodeFilter {
    access: Access,
}

impl NodeFilter {
    pub fn new(access: Access) -> Self {
        Self { access }
    }

    /// Whether the node is passable by the mode.
    pub fn allows(&self, node: &NodeInfo) -> bool {
        node.access.contains(self.access)
    }
}
