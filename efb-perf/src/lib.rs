// SPDX-License-Identifier: Apache-2.0
// Copyright 2024, 2026 Joe Pearson
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Flight performance and fuel planning for an Electronic Flight Bag.
//!
//! The crate plans multi-stop flights, e.g. of a helicopter that lands at
//! several sites to pick up or drop passengers. From the waypoints of a
//! route, the aircraft's performance, the wind and a fuel policy it
//! computes
//!
//! - the wind triangle and time and fuel of each leg,
//! - the fuel required at each landing stop to finish the route safely,
//! - the passengers that can board at each stop and
//! - the operational radius of a search and rescue mission.
//!
//! Every result is computed from scratch from the inputs. The [`FMS`] owns
//! the inputs and recomputes the results whenever one is modified.
//!
//! # Example
//!
//! ```
//! use efb_perf::prelude::*;
//! use efb_perf::coord;
//! use efb_perf::measurements::{Duration, Mass, Speed};
//!
//! # fn main() -> Result<(), Error> {
//! let mut fms = FMS::new();
//!
//! let mut builder = FlightPlanningBuilder::new();
//! builder
//!     .aircraft(
//!         Aircraft::new(Speed::kt(120.0), FuelFlow::lb_per_h(800.0))
//!             .with_weights(Mass::lb(7800.0), Mass::lb(11_000.0))
//!             .with_max_passengers(12),
//!     )
//!     .policy(FuelPolicy {
//!         taxi: Mass::lb(50.0),
//!         contingency_percent: 10.0,
//!         reserve: Reserve::Fixed(Mass::lb(400.0)),
//!         deck_time: Duration::min(5.0),
//!         deck_fuel_flow: FuelFlow::lb_per_h(300.0),
//!         passenger_weight: Mass::lb(200.0),
//!         contingency_allocation: ContingencyAllocation::ProRata,
//!     });
//!
//! fms.set_flight_planning(builder)?;
//! fms.set_weather(Weather::new("27015KT".parse()?))?;
//! fms.modify_waypoints(|waypoints| {
//!     waypoints.push(Waypoint::landing_stop("EDHF", coord!(53.99, 9.58)));
//!     waypoints.push(Waypoint::navigation("VRP", coord!(53.80, 9.70)));
//!     waypoints.push(Waypoint::landing_stop("EDHE", coord!(53.64, 9.70)));
//!     waypoints.push(Waypoint::landing_stop("EDDH", coord!(53.63, 9.99)));
//! })?;
//!
//! if let Some(schedule) = fms.flight_planning().and_then(|fp| fp.schedule()) {
//!     for stop in schedule.stops() {
//!         println!(
//!             "{} {:.0} required, {} passengers",
//!             stop.ident, stop.total_fuel_required, stop.capacity.max_passengers
//!         );
//!     }
//! }
//! # Ok(())
//! # }
//! ```

pub mod aircraft;
mod core;
pub mod error;
pub mod fc;
pub mod fms;
pub mod fp;
#[cfg(feature = "geojson")]
mod geojson;
pub mod geom;
mod macros;
pub mod measurements;
pub mod nd;
pub mod route;

pub use crate::core::{FuelFlow, Wind};

pub mod prelude {
    pub use crate::aircraft::Aircraft;
    pub use crate::error::{Diagnostic, Error, ErrorKind};
    pub use crate::fms::FMS;
    pub use crate::fp::{
        ContingencyAllocation, FlightPlanning, FlightPlanningBuilder, FuelPolicy, FuelSchedule,
        PassengerCapacity, Performance, Reserve, ReturnStrategy, SarMission, SarRadius, SarTask,
        StopCard, StopRole,
    };
    pub use crate::geom::Coordinate;
    pub use crate::measurements::{Duration, Length, Mass, Speed};
    pub use crate::nd::{Waypoint, WaypointRole};
    pub use crate::route::{Leg, Route, Weather};
    pub use crate::{FuelFlow, Wind};
}
