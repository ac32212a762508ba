use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString};

use crate::costing::RangedDefault;

/// Pedestrian sub-type selecting the type-dependent defaults.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumString,
    AsRefStr,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum PedestrianType {
    /// Unassisted foot travel.
    #[default]
    Foot,
    /// Wheelchair travel: shorter range, lower speed, stronger step
    /// penalty, better surfaces required.
    Wheelchair,
    /// Stand-up assistive device, costed with the foot parameters.
    Segway,
}

/// Pedestrian costing options as supplied by the route request.
///
/// Every field is optional. Missing values take the declared defaults
/// for the sub-type; supplied values are saturated into their ranges
/// at construction and never rejected.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct PedestrianConfig {
    #[serde(default, rename = "type")]
    pub type_: PedestrianType,
    /// Meters of walking the whole route may accumulate.
    pub max_distance: Option<f64>,
    /// Nominal walking speed in km/h.
    pub walking_speed: Option<f64>,
    /// Seconds charged for taking steps/stairs.
    pub step_penalty: Option<f64>,
    /// Maximum grade in percent.
    pub max_grade: Option<f64>,
    pub mode_weight: Option<f64>,
    /// Seconds charged when the road name changes across a turn.
    pub maneuver_penalty: Option<f64>,
    /// Seconds charged for passing a gate.
    pub gate_penalty: Option<f64>,
    pub walkway_factor: Option<f64>,
    pub sidewalk_factor: Option<f64>,
    pub alley_factor: Option<f64>,
    pub driveway_factor: Option<f64>,
    /// Seconds of boarding overhead charged on entering a ferry.
    pub ferry_cost: Option<f64>,
    /// Seconds spent at a border-control crossing.
    pub country_crossing_cost: Option<f64>,
    /// Extra penalty for crossing a country border.
    pub country_crossing_penalty: Option<f64>,
    /// `[0, 1]` ferry preference; 0 avoids, 1 prefers.
    pub use_ferry: Option<f64>,
    /// Furthest walk to or from transit at the ends of a multimodal
    /// route, in meters.
    pub transit_start_end_max_distance: Option<f64>,
    /// Furthest walk between transit transfers, in meters.
    pub transit_transfer_max_distance: Option<f64>,
}

pub(crate) const SEC_PER_HOUR: f64 = 3600.0;

// Distance budgets (meters).
const MAX_DISTANCE_FOOT: f64 = 100_000.0;
const MAX_DISTANCE_WHEELCHAIR: f64 = 10_000.0;

// Nominal speeds (km/h) and the window any supplied speed is held to.
const DEFAULT_SPEED_FOOT: f64 = 5.1;
const DEFAULT_SPEED_WHEELCHAIR: f64 = 4.0;
const MIN_SPEED: f64 = 0.5;
const MAX_SPEED: f64 = 25.0;

// Steps (seconds).
const STEP_PENALTY_FOOT: f64 = 30.0;
const STEP_PENALTY_WHEELCHAIR: f64 = 600.0;

// Maximum grade (percent). Stored but not yet enforced; see model.rs.
const MAX_GRADE_FOOT: f64 = 90.0;
const MAX_GRADE_WHEELCHAIR: f64 = 12.0;

// Shared defaults.
const DEFAULT_MODE_WEIGHT: f64 = 1.5;
const DEFAULT_MANEUVER_PENALTY: f64 = 5.0;
const DEFAULT_GATE_PENALTY: f64 = 10.0;
const DEFAULT_WALKWAY_FACTOR: f64 = 0.9;
const DEFAULT_SIDEWALK_FACTOR: f64 = 0.95;
const DEFAULT_ALLEY_FACTOR: f64 = 2.0;
const DEFAULT_DRIVEWAY_FACTOR: f64 = 5.0;
const DEFAULT_FERRY_COST: f64 = 300.0;
const DEFAULT_COUNTRY_CROSSING_COST: f64 = 600.0;
const DEFAULT_COUNTRY_CROSSING_PENALTY: f64 = 0.0;
const DEFAULT_USE_FERRY: f64 = 1.0;
const TRANSIT_START_END_MAX_DISTANCE: f64 = 2_415.0;
const TRANSIT_TRANSFER_MAX_DISTANCE: f64 = 805.0;

// Caps shared by the ranges below. Seconds-valued penalties can't be
// unbounded; a required path may have to absorb them.
const MAX_SECONDS: f64 = 12.0 * SEC_PER_HOUR;
const MAX_FACTOR: f64 = 20.0;

/// Fixed multiplier applied to roundabout-flagged edges.
pub(crate) const ROUNDABOUT_FACTOR: f64 = 5.0;

/// Ferry penalty at `use_ferry = 0`. Capped, since a ferry is
/// sometimes required to complete a route at all.
pub(crate) const MAX_FERRY_PENALTY: f64 = 8.0 * SEC_PER_HOUR;

/// Intersection crossing cost (seconds) indexed by stop impact.
pub(crate) const CROSSING_COSTS: [f64; 8] = [0.0, 0.0, 1.0, 1.0, 2.0, 3.0, 5.0, 15.0];

// Declared ranges. Every tunable of the model resolves through
// exactly one of these.
pub(crate) const MAX_DISTANCE_FOOT_RANGE: RangedDefault<f64> =
    RangedDefault::new(0.0, MAX_DISTANCE_FOOT, MAX_DISTANCE_FOOT);
pub(crate) const MAX_DISTANCE_WHEELCHAIR_RANGE: RangedDefault<f64> =
    RangedDefault::new(0.0, MAX_DISTANCE_WHEELCHAIR, MAX_DISTANCE_WHEELCHAIR);

pub(crate) const SPEED_FOOT_RANGE: RangedDefault<f64> =
    RangedDefault::new(MIN_SPEED, DEFAULT_SPEED_FOOT, MAX_SPEED);
pub(crate) const SPEED_WHEELCHAIR_RANGE: RangedDefault<f64> =
    RangedDefault::new(MIN_SPEED, DEFAULT_SPEED_WHEELCHAIR, MAX_SPEED);

pub(crate) const STEP_PENALTY_FOOT_RANGE: RangedDefault<f64> =
    RangedDefault::new(0.0, STEP_PENALTY_FOOT, MAX_SECONDS);
pub(crate) const STEP_PENALTY_WHEELCHAIR_RANGE: RangedDefault<f64> =
    RangedDefault::new(0.0, STEP_PENALTY_WHEELCHAIR, MAX_SECONDS);

pub(crate) const MAX_GRADE_FOOT_RANGE: RangedDefault<f64> =
    RangedDefault::new(0.0, MAX_GRADE_FOOT, MAX_GRADE_FOOT);
pub(crate) const MAX_GRADE_WHEELCHAIR_RANGE: RangedDefault<f64> =
    RangedDefault::new(0.0, MAX_GRADE_WHEELCHAIR, MAX_GRADE_WHEELCHAIR);

pub(crate) const MODE_WEIGHT_RANGE: RangedDefault<f64> =
    RangedDefault::new(0.0, DEFAULT_MODE_WEIGHT, MAX_FACTOR);
pub(crate) const MANEUVER_PENALTY_RANGE: RangedDefault<f64> =
    RangedDefault::new(0.0, DEFAULT_MANEUVER_PENALTY, MAX_SECONDS);
pub(crate) const GATE_PENALTY_RANGE: RangedDefault<f64> =
    RangedDefault::new(0.0, DEFAULT_GATE_PENALTY, MAX_SECONDS);
pub(crate) const WALKWAY_FACTOR_RANGE: RangedDefault<f64> =
    RangedDefault::new(0.0, DEFAULT_WALKWAY_FACTOR, MAX_FACTOR);
pub(crate) const SIDEWALK_FACTOR_RANGE: RangedDefault<f64> =
    RangedDefault::new(0.0, DEFAULT_SIDEWALK_FACTOR, MAX_FACTOR);
pub(crate) const ALLEY_FACTOR_RANGE: RangedDefault<f64> =
    RangedDefault::new(0.0, DEFAULT_ALLEY_FACTOR, MAX_FACTOR);
pub(crate) const DRIVEWAY_FACTOR_RANGE: RangedDefault<f64> =
    RangedDefault::new(0.0, DEFAULT_DRIVEWAY_FACTOR, MAX_FACTOR);
pub(crate) const FERRY_COST_RANGE: RangedDefault<f64> =
    RangedDefault::new(0.0, DEFAULT_FERRY_COST, MAX_SECONDS);
pub(crate) const COUNTRY_CROSSING_COST_RANGE: RangedDefault<f64> =
    RangedDefault::new(0.0, DEFAULT_COUNTRY_CROSSING_COST, MAX_SECONDS);
pub(crate) const COUNTRY_CROSSING_PENALTY_RANGE: RangedDefault<f64> =
    RangedDefault::new(0.0, DEFAULT_COUNTRY_CROSSING_PENALTY, MAX_SECONDS);
pub(crate) const USE_FERRY_RANGE: RangedDefault<f64> =
    RangedDefault::new(0.0, DEFAULT_USE_FERRY, 1.0);
pub(crate) const TRANSIT_START_END_MAX_DISTANCE_RANGE: RangedDefault<f64> =
    RangedDefault::new(0.0, TRANSIT_START_END_MAX_DISTANCE, TRANSIT_START_END_MAX_DISTANCE);
pub(crate) const TRANSIT_TRANSFER_MAX_DISTANCE_RANGE: RangedDefault<f64> =
    RangedDefault::new(0.0, TRANSIT_TRANSFER_MAX_DISTANCE, TRANSIT_TRANSFER_MAX_DISTANCE);
