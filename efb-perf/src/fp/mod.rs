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

//! Flight Planning.
//!
//! The flight planning cascades the fuel required at each landing stop back
//! from the destination to the departure and derives the passengers that
//! can board at each stop. On demand, it solves the operational radius of a
//! search and rescue mission.

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::aircraft::Aircraft;
use crate::error::Result;
use crate::route::{Route, TotalsToLeg};

mod auxiliary;
mod builder;
mod capacity;
mod performance;
mod policy;
mod sar;
mod schedule;

pub use auxiliary::{intermediate_stops, AuxiliaryFuel};
pub use builder::FlightPlanningBuilder;
pub use capacity::PassengerCapacity;
pub use performance::{Performance, MIN_GROUND_SPEED_KT};
pub use policy::{ContingencyAllocation, FuelPolicy, Reserve};
pub use sar::{ReturnStrategy, SarEndurance, SarFuel, SarMission, SarRadius, SarTask};
pub use schedule::{FuelBreakdown, FuelSchedule, StopCard, StopRole};

/// The flight planning of a route.
///
/// Use the [`FlightPlanningBuilder`] to create a planning.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct FlightPlanning {
    aircraft: Option<Aircraft>,
    policy: Option<FuelPolicy>,
    totals: Option<TotalsToLeg>,
    schedule: Option<FuelSchedule>,
}

impl FlightPlanning {
    pub fn aircraft(&self) -> Option<&Aircraft> {
        self.aircraft.as_ref()
    }

    pub fn policy(&self) -> Option<&FuelPolicy> {
        self.policy.as_ref()
    }

    /// The distance, time and fuel of the entire route.
    pub fn totals(&self) -> Option<&TotalsToLeg> {
        self.totals.as_ref()
    }

    /// The fuel required at each landing stop.
    pub fn schedule(&self) -> Option<&FuelSchedule> {
        self.schedule.as_ref()
    }

    /// Solves the SAR `mission` with the planning's aircraft and policy.
    ///
    /// Returns `None` if no aircraft or policy is set. See
    /// [`SarMission::solve`] for how the `route` is used.
    pub fn sar(&self, mission: &SarMission, route: Option<&Route>) -> Option<Result<SarRadius>> {
        match (&self.aircraft, &self.policy) {
            (Some(aircraft), Some(policy)) => Some(mission.solve(aircraft, policy, route)),
            _ => None,
        }
    }
}
