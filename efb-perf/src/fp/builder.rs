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

use log::{debug, info, trace};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::*;

use crate::aircraft::Aircraft;
use crate::error::Result;
use crate::measurements::Mass;
use crate::route::Route;

/// Flight planning factory, which is used to build a flight planning.
#[derive(Clone, PartialEq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FlightPlanningBuilder {
    aircraft: Option<Aircraft>,
    policy: Option<FuelPolicy>,
    cargo: Option<Mass>,
}

impl FlightPlanningBuilder {
    /// Creates a new builder.
    pub fn new() -> FlightPlanningBuilder {
        Self::default()
    }

    /// Builds a flight planning for the specified route.
    ///
    /// The fuel schedule is computed once an aircraft and a fuel policy are
    /// set.
    ///
    /// # Errors
    ///
    /// Returns [`MissingPerformanceData`] if the aircraft has no positive
    /// cruise speed or fuel burn.
    ///
    /// [`MissingPerformanceData`]: crate::error::Error::MissingPerformanceData
    pub fn build(&self, route: &Route) -> Result<FlightPlanning> {
        info!("building flight planning");

        if let Some(aircraft) = &self.aircraft {
            aircraft.performance()?;
        }

        let totals = route.totals();

        let schedule = match (&self.aircraft, &self.policy) {
            (Some(aircraft), Some(policy)) => {
                debug!("computing fuel schedule (policy={:?})", policy);
                Some(FuelSchedule::new(
                    route,
                    policy,
                    aircraft,
                    self.cargo.unwrap_or(Mass::lb(0.0)),
                ))
            }
            _ => {
                trace!("fuel schedule skipped: missing aircraft or policy");
                None
            }
        };

        info!(
            "flight planning built: totals={}, schedule={}",
            totals.is_some(),
            schedule.is_some(),
        );

        Ok(FlightPlanning {
            aircraft: self.aircraft.clone(),
            policy: self.policy,
            totals,
            schedule,
        })
    }

    pub fn aircraft(&mut self, aircraft: Aircraft) -> &mut Self {
        self.aircraft = Some(aircraft);
        self
    }

    pub fn policy(&mut self, policy: FuelPolicy) -> &mut Self {
        self.policy = Some(policy);
        self
    }

    /// Sets the cargo on board, which reduces the passenger capacity.
    pub fn cargo(&mut self, cargo: Mass) -> &mut Self {
        self.cargo = Some(cargo);
        self
    }

    /// Returns the aircraft's performance the route is computed with.
    pub(crate) fn performance(&self) -> Option<Result<Performance>> {
        self.aircraft.as_ref().map(Aircraft::performance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::measurements::Speed;
    use crate::route::Weather;
    use crate::FuelFlow;

    #[test]
    fn schedule_requires_aircraft_and_policy() {
        let aircraft = Aircraft::new(Speed::kt(120.0), FuelFlow::lb_per_h(800.0));
        let fp = FlightPlanningBuilder::new()
            .aircraft(aircraft)
            .build(&Route::new())
            .unwrap();

        assert!(fp.schedule().is_none());
        assert!(fp.totals().is_none());
    }

    #[test]
    fn invalid_performance_fails() {
        let aircraft = Aircraft::new(Speed::kt(0.0), FuelFlow::lb_per_h(800.0));
        let perf = Performance::new(Speed::kt(120.0), FuelFlow::lb_per_h(800.0));
        let route = Route::build(Vec::new(), &perf, &Weather::default());

        assert_eq!(
            FlightPlanningBuilder::new().aircraft(aircraft).build(&route),
            Err(Error::MissingPerformanceData {
                field: "cruise speed"
            })
        );
    }
}
