//! Travel-mode costing models for graph search.
//!
//! A costing model decides, for every edge and node the search engine
//! expands, whether traversal is legal, what it costs in penalized
//! seconds against real elapsed seconds, and which scalar keeps the
//! A* heuristic admissible. The engine depends only on the [`Costing`]
//! contract and never on a concrete mode.
//!
//! ## Structure
//!
//! Models are built once per route request through [`create_costing`],
//! which resolves an untyped configuration record against the mode's
//! declared parameter ranges (see [`RangedDefault`]). A built model is
//! immutable; only the multimodal hooks on [`Costing`] may adjust it,
//! and only before a search starts.
//!
//! ```rust
//! use routers_costing::costing::{Costing, TravelMode, create_costing};
//! use serde_json::json;
//!
//! let config = json!({ "type": "wheelchair", "use_ferry": 0.2 });
//! let costing = create_costing(TravelMode::Pedestrian, &config).unwrap();
//!
//! assert!(costing.a_star_cost_factor() > 0.0);
//! ```
//!
//! The pedestrian model is the reference implementation; see
//! [`pedestrian`].

#[doc(hidden)]
pub mod cost;
#[doc(hidden)]
pub mod definition;
#[doc(hidden)]
pub mod error;
#[doc(hidden)]
pub mod filter;
pub mod pedestrian;
#[doc(hidden)]
pub mod ranged;
#[cfg(test)]
mod test;

#[doc(inline)]
pub use cost::Cost;
#[doc(inline)]
pub use definition::{Costing, TravelMode};
#[doc(inline)]
pub use error::CostingError;
#[doc(inline)]
pub use filter::{EdgeFilter, NodeFilter};
#[doc(inline)]
pub use ranged::RangedDefault;

use log::debug;
use serde_json::Value;

use crate::costing::pedestrian::PedestrianCosting;

/// Builds the costing model for a travel mode from an untyped
/// configuration record.
///
/// A record of the wrong shape fails with
/// [`CostingError::Configuration`]; out-of-range values are saturated
/// into their declared ranges, never rejected. Modes without a
/// registered model yield [`CostingError::UnsupportedMode`].
pub fn create_costing(mode: TravelMode, config: &Value) -> Result<Box<dyn Costing>, CostingError> {
    debug!("building {mode} costing model");

    match mode {
        TravelMode::Pedestrian => Ok(Box::new(PedestrianCosting::from_json(config)?)),
        mode => Err(CostingError::UnsupportedMode(mode)),
    }
}
