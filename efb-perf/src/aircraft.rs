// SPDX-License-Identifier: Apache-2.0
// Copyright 2025, 2026 Joe Pearson
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

//! Aircraft performance and weight limits.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::fp::Performance;
use crate::measurements::{Mass, Speed};
use crate::FuelFlow;

/// The profile of an aircraft used to plan a flight.
///
/// The cruise speed and fuel burn are required to compute any leg. The
/// weights are required to compute the payload. A missing weight is never
/// replaced by an assumed value.
///
/// # Examples
///
/// ```
/// # use efb_perf::prelude::*;
/// # use efb_perf::measurements::{Mass, Speed};
/// let aircraft = Aircraft::new(Speed::kt(120.0), FuelFlow::lb_per_h(800.0))
///     .with_weights(Mass::lb(7800.0), Mass::lb(11_000.0))
///     .with_max_passengers(12);
///
/// assert_eq!(aircraft.useful_load(), Ok(Mass::lb(3200.0)));
/// ```
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Aircraft {
    /// True airspeed in cruise.
    pub cruise_speed: Speed,

    /// Fuel burned in cruise.
    pub fuel_burn: FuelFlow,

    /// Maximum takeoff weight minus empty weight if known directly.
    pub useful_load: Option<Mass>,

    pub empty_weight: Option<Mass>,

    pub max_takeoff_weight: Option<Mass>,

    /// Seats available to passengers.
    pub max_passengers: Option<u16>,

    /// Fuel burned in a hover e.g. while hoisting.
    pub hover_fuel_flow: Option<FuelFlow>,

    /// Overrides the minimum ground speed assumed for any leg.
    pub min_gs: Option<Speed>,
}

impl Aircraft {
    pub fn new(cruise_speed: Speed, fuel_burn: FuelFlow) -> Self {
        Self {
            cruise_speed,
            fuel_burn,
            useful_load: None,
            empty_weight: None,
            max_takeoff_weight: None,
            max_passengers: None,
            hover_fuel_flow: None,
            min_gs: None,
        }
    }

    pub fn with_useful_load(mut self, useful_load: Mass) -> Self {
        self.useful_load = Some(useful_load);
        self
    }

    pub fn with_weights(mut self, empty_weight: Mass, max_takeoff_weight: Mass) -> Self {
        self.empty_weight = Some(empty_weight);
        self.max_takeoff_weight = Some(max_takeoff_weight);
        self
    }

    pub fn with_max_passengers(mut self, max_passengers: u16) -> Self {
        self.max_passengers = Some(max_passengers);
        self
    }

    pub fn with_hover_fuel_flow(mut self, ff: FuelFlow) -> Self {
        self.hover_fuel_flow = Some(ff);
        self
    }

    pub fn with_min_gs(mut self, min_gs: Speed) -> Self {
        self.min_gs = Some(min_gs);
        self
    }

    /// Returns the useful load.
    ///
    /// The useful load is taken as is if present or derived from the maximum
    /// takeoff and empty weight.
    ///
    /// # Errors
    ///
    /// Returns [`MissingWeightData`] if neither is known or the load isn't
    /// positive.
    ///
    /// [`MissingWeightData`]: Error::MissingWeightData
    pub fn useful_load(&self) -> Result<Mass> {
        let useful_load = match (self.useful_load, self.empty_weight, self.max_takeoff_weight) {
            (Some(useful_load), _, _) => useful_load,
            (None, Some(empty), Some(mtow)) => mtow - empty,
            _ => return Err(Error::MissingWeightData),
        };

        if useful_load.is_positive() {
            Ok(useful_load)
        } else {
            Err(Error::MissingWeightData)
        }
    }

    /// Returns the cruise performance of the aircraft.
    ///
    /// # Errors
    ///
    /// Returns [`MissingPerformanceData`] if the cruise speed or fuel burn
    /// isn't positive.
    ///
    /// [`MissingPerformanceData`]: Error::MissingPerformanceData
    pub fn performance(&self) -> Result<Performance> {
        if !self.cruise_speed.is_positive() {
            return Err(Error::MissingPerformanceData {
                field: "cruise speed",
            });
        }

        if !self.fuel_burn.is_positive() {
            return Err(Error::MissingPerformanceData { field: "fuel burn" });
        }

        let perf = Performance::new(self.cruise_speed, self.fuel_burn);

        Ok(match self.min_gs {
            Some(min_gs) => perf.with_min_gs(min_gs),
            None => perf,
        })
    }

    /// The fuel flow while working a task, which is the hover fuel flow if
    /// known or the cruise fuel burn otherwise.
    pub fn task_fuel_flow(&self) -> FuelFlow {
        self.hover_fuel_flow
            .filter(FuelFlow::is_positive)
            .unwrap_or(self.fuel_burn)
    }
}
