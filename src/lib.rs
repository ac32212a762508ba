#![doc = include_str!("../README.md")]

pub mod costing;
pub mod graph;

#[doc(inline)]
pub use costing::{
    Cost, Costing, CostingError, EdgeFilter, NodeFilter, RangedDefault, TravelMode, create_costing,
};
#[doc(inline)]
pub use costing::pedestrian::{PedestrianConfig, PedestrianCosting, PedestrianType};
