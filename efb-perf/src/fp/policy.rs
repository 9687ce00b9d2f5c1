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

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::measurements::{Duration, Mass};
use crate::FuelFlow;

/// The final reserve fuel.
#[derive(Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Reserve {
    /// A fixed mass of fuel.
    Fixed(Mass),
    /// A percentage of the fuel the reserve is planned for.
    Percent(f32),
}

impl Reserve {
    /// Returns the reserve for the planned `fuel`.
    ///
    /// The planned fuel is the trip fuel for a route and the takeoff fuel for
    /// a search and rescue mission.
    pub fn fuel(&self, fuel: Mass) -> Mass {
        match self {
            Self::Fixed(mass) => *mass,
            Self::Percent(pct) => fuel * (pct.max(0.0) / 100.0),
        }
    }
}

/// How the contingency fuel is carried from stop to stop.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ContingencyAllocation {
    /// Each stop carries the share of the contingency that matches its share
    /// of the remaining trip fuel.
    #[default]
    ProRata,
    /// Each stop carries the full contingency of the route.
    Constant,
}

/// The policy by which fuel is planned.
///
/// # Examples
///
/// With the `serde` feature a policy can be read from a configuration:
///
/// ```
/// # #[cfg(feature = "serde")]
/// # {
/// # use efb_perf::prelude::*;
/// let policy: FuelPolicy = serde_json::from_str(r#"{
///     "taxi": { "value": 50.0, "unit": "Pounds" },
///     "contingency_percent": 10.0,
///     "reserve": { "Fixed": { "value": 400.0, "unit": "Pounds" } },
///     "deck_time": { "value": 5.0, "unit": "Minutes" },
///     "deck_fuel_flow": { "PerHour": { "value": 300.0, "unit": "Pounds" } },
///     "passenger_weight": { "value": 200.0, "unit": "Pounds" }
/// }"#).unwrap();
///
/// assert_eq!(policy.contingency_allocation, ContingencyAllocation::ProRata);
/// # }
/// ```
#[derive(Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FuelPolicy {
    /// Fuel burned before takeoff.
    pub taxi: Mass,

    /// Contingency as percentage of the trip fuel.
    pub contingency_percent: f32,

    pub reserve: Reserve,

    /// Time on deck with rotors running at each intermediate stop.
    pub deck_time: Duration,

    pub deck_fuel_flow: FuelFlow,

    /// Standard weight of a passenger including baggage.
    pub passenger_weight: Mass,

    #[cfg_attr(feature = "serde", serde(default))]
    pub contingency_allocation: ContingencyAllocation,
}

impl FuelPolicy {
    /// The fuel burned on deck at one intermediate stop.
    pub fn deck_fuel_per_stop(&self) -> Mass {
        self.deck_fuel_flow * self.deck_time
    }
}
