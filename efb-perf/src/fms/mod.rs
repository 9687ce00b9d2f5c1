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

//! Flight Management System.
//!
//! [`FMS`] is the type that owns the inputs supplied by the host and keeps
//! the results up to date. The route depends on the waypoints, the weather
//! and the aircraft's performance and the flight planning depends on the
//! route. Whenever an input is modified, everything that depends on it is
//! recomputed from scratch.

use std::collections::HashMap;

use log::trace;

use crate::error::{Error, Result};
use crate::fp::{FlightPlanning, FlightPlanningBuilder, SarMission, SarRadius};
use crate::nd::{Waypoint, Waypoints};
use crate::route::{Route, Weather};

#[derive(Clone, PartialEq, Debug, Default)]
struct Context {
    waypoints: Waypoints,
    weather: Weather,
    alternate: Option<Waypoint>,
    flight_planning_builder: Option<FlightPlanningBuilder>,
}

/// `FMS` is the type that manages all flight systems.
///
/// See the [module documentation](self) for details.
///
/// # Examples
///
/// ```
/// # use efb_perf::prelude::*;
/// # use efb_perf::coord;
/// # use efb_perf::measurements::{Duration, Mass, Speed};
/// # fn plan() -> Result<(), Error> {
/// let mut fms = FMS::new();
///
/// let mut builder = FlightPlanningBuilder::new();
/// builder
///     .aircraft(
///         Aircraft::new(Speed::kt(120.0), FuelFlow::lb_per_h(800.0))
///             .with_useful_load(Mass::lb(3000.0)),
///     )
///     .policy(FuelPolicy {
///         taxi: Mass::lb(50.0),
///         contingency_percent: 10.0,
///         reserve: Reserve::Fixed(Mass::lb(400.0)),
///         deck_time: Duration::min(5.0),
///         deck_fuel_flow: FuelFlow::lb_per_h(300.0),
///         passenger_weight: Mass::lb(200.0),
///         contingency_allocation: ContingencyAllocation::ProRata,
///     });
/// fms.set_flight_planning(builder)?;
///
/// fms.modify_waypoints(|waypoints| {
///     waypoints.push(Waypoint::landing_stop("A", coord!(53.0, 9.0)));
///     waypoints.push(Waypoint::landing_stop("B", coord!(53.5, 10.0)));
/// })?;
///
/// let schedule = fms.flight_planning().and_then(|fp| fp.schedule());
/// assert_eq!(schedule.map(|s| s.stops().len()), Some(2));
/// # Ok(())
/// # }
/// # plan().unwrap();
/// ```
#[derive(Clone, PartialEq, Debug, Default)]
pub struct FMS {
    context: Context,
    route: Route,
    flight_planning: Option<FlightPlanning>,
}

impl FMS {
    /// Constructs a new `FMS`.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn waypoints(&self) -> &[Waypoint] {
        &self.context.waypoints
    }

    /// Modifies the waypoints of the route.
    pub fn modify_waypoints<F>(&mut self, f: F) -> Result<()>
    where
        F: FnOnce(&mut Waypoints),
    {
        f(&mut self.context.waypoints);
        EvalPipeline::default()
            .inspect_err(EvalStage::Route, |_, fms| fms.clear())
            .eval(self)
    }

    pub fn weather(&self) -> &Weather {
        &self.context.weather
    }

    /// Sets the wind on the route and the per-leg overrides.
    pub fn set_weather(&mut self, weather: Weather) -> Result<()> {
        self.context.weather = weather;
        EvalPipeline::default()
            .inspect_err(EvalStage::Route, |_, fms| fms.clear())
            .eval(self)
    }

    /// Sets an alternate on the route.
    ///
    /// The alternate is removed by setting it to `None`.
    pub fn set_alternate(&mut self, alternate: Option<Waypoint>) -> Result<()> {
        self.context.alternate = alternate;
        EvalPipeline::default()
            .inspect_err(EvalStage::Route, |_, fms| fms.clear())
            .eval(self)
    }

    /// Sets the flight planning.
    ///
    /// The route is only recomputed if the aircraft's performance changes.
    pub fn set_flight_planning(&mut self, builder: FlightPlanningBuilder) -> Result<()> {
        let same_perf = self
            .context
            .flight_planning_builder
            .as_ref()
            .map(FlightPlanningBuilder::performance)
            == Some(builder.performance());

        self.context.flight_planning_builder = Some(builder);

        let pipeline = if same_perf {
            trace!("performance unchanged, keeping route");
            EvalPipeline::default().skip_until(EvalStage::FlightPlanning)
        } else {
            EvalPipeline::default().inspect_err(EvalStage::Route, |_, fms| fms.clear())
        };

        pipeline
            .inspect_err(EvalStage::FlightPlanning, |_, fms| {
                fms.flight_planning.take();
            })
            .eval(self)
    }

    pub fn route(&self) -> &Route {
        &self.route
    }

    pub fn flight_planning(&self) -> Option<&FlightPlanning> {
        self.flight_planning.as_ref()
    }

    /// Solves the SAR `mission` from the destination of the route or, if
    /// there is no route, from the base.
    ///
    /// Returns `None` if no flight planning with aircraft and policy is set.
    pub fn sar(&self, mission: &SarMission) -> Option<Result<SarRadius>> {
        let route = Some(&self.route).filter(|route| !route.legs().is_empty());
        self.flight_planning.as_ref()?.sar(mission, route)
    }

    fn clear(&mut self) {
        self.route.clear();
        self.flight_planning.take();
    }
}

/////////////////////////////////////////////////////////////////////////////
// Evaluation pipeline
/////////////////////////////////////////////////////////////////////////////

type Inspector = Box<dyn FnOnce(&Error, &mut FMS)>;

/// Evaluates the FMS in a defined order.
///
/// The FMS is evaluated in stages, where each stage can fail. If a stage fails,
/// it can be inspected to run e.g. clean-up tasks on the FMS. If a certain
/// action doesn't require an update of the entire pipeline, stages can be
/// skipped to start at a specific stage.
struct EvalPipeline {
    stages: [EvalStage; 2],
    stage_range: std::ops::Range<usize>,
    inspectors: HashMap<EvalStage, Inspector>,
}

impl EvalPipeline {
    fn skip_until(mut self, stage: EvalStage) -> Self {
        if let Some(i) = self.stages[self.stage_range.clone()]
            .iter()
            .position(|s| s == &stage)
        {
            self.stage_range.start += i;
        }
        self
    }

    /// Adds an error inspector for a specific stage.
    ///
    /// The inspector is called if that stage fails, before the error is propagated.
    fn inspect_err<F>(mut self, stage: EvalStage, f: F) -> Self
    where
        F: FnOnce(&Error, &mut FMS) + 'static,
    {
        self.inspectors.insert(stage, Box::new(f));
        self
    }

    /// Executes the evaluation pipeline.
    fn eval(mut self, fms: &mut FMS) -> Result<()> {
        for stage in &self.stages[self.stage_range.clone()] {
            let result = stage.eval(fms);

            if let Err(ref e) = result {
                if let Some(inspector) = self.inspectors.remove(stage) {
                    inspector(e, fms);
                }
            }

            result?;
        }

        Ok(())
    }
}

impl Default for EvalPipeline {
    fn default() -> Self {
        Self {
            stages: [EvalStage::Route, EvalStage::FlightPlanning],
            stage_range: 0..2,
            inspectors: HashMap::new(),
        }
    }
}

#[derive(PartialEq, Eq, Debug, Hash, Clone, Copy)]
enum EvalStage {
    Route,
    FlightPlanning,
}

impl EvalStage {
    fn eval(&self, fms: &mut FMS) -> Result<()> {
        match self {
            EvalStage::Route => {
                let perf = fms
                    .context
                    .flight_planning_builder
                    .as_ref()
                    .and_then(FlightPlanningBuilder::performance);

                match perf {
                    Some(perf) => {
                        let mut route =
                            Route::build(fms.context.waypoints.clone(), &perf?, &fms.context.weather);
                        route.set_alternate(fms.context.alternate.clone());
                        fms.route = route;
                    }
                    None => {
                        trace!("route skipped: no aircraft performance");
                        fms.route.clear();
                    }
                }
            }
            EvalStage::FlightPlanning => {
                if let Some(builder) = &fms.context.flight_planning_builder.clone() {
                    let flight_planning = builder.build(&fms.route)?;
                    fms.flight_planning = Some(flight_planning);
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aircraft::Aircraft;
    use crate::fp::{ContingencyAllocation, FuelPolicy, Reserve, SarTask};
    use crate::geom::Coordinate;
    use crate::measurements::{Duration, Mass, Speed};
    use crate::{FuelFlow, Wind};

    fn builder(cruise_speed: f32) -> FlightPlanningBuilder {
        let mut builder = FlightPlanningBuilder::new();
        builder
            .aircraft(
                Aircraft::new(Speed::kt(cruise_speed), FuelFlow::lb_per_h(800.0))
                    .with_useful_load(Mass::lb(3000.0)),
            )
            .policy(FuelPolicy {
                taxi: Mass::lb(50.0),
                contingency_percent: 10.0,
                reserve: Reserve::Fixed(Mass::lb(400.0)),
                deck_time: Duration::min(5.0),
                deck_fuel_flow: FuelFlow::lb_per_h(300.0),
                passenger_weight: Mass::lb(200.0),
                contingency_allocation: ContingencyAllocation::ProRata,
            });
        builder
    }

    fn add_stops(fms: &mut FMS) -> Result<()> {
        fms.modify_waypoints(|waypoints| {
            waypoints.push(Waypoint::landing_stop("A", Coordinate::new(0.0, 0.0)));
            waypoints.push(Waypoint::landing_stop("B", Coordinate::new(0.0, 1.0)));
            waypoints.push(Waypoint::landing_stop("C", Coordinate::new(0.0, 2.0)));
        })
    }

    #[test]
    fn fms_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<FMS>();
    }

    #[test]
    fn no_route_without_aircraft() {
        let mut fms = FMS::new();
        add_stops(&mut fms).unwrap();

        assert_eq!(fms.waypoints().len(), 3);
        assert!(fms.route().legs().is_empty());
        assert!(fms.flight_planning().is_none());
    }

    #[test]
    fn planning_follows_modifications() {
        let mut fms = FMS::new();
        fms.set_flight_planning(builder(120.0)).unwrap();
        add_stops(&mut fms).unwrap();

        let stops = |fms: &FMS| {
            fms.flight_planning()
                .and_then(FlightPlanning::schedule)
                .map(|s| s.stops().len())
        };
        assert_eq!(stops(&fms), Some(3));

        fms.modify_waypoints(|waypoints| {
            waypoints.pop();
        })
        .unwrap();
        assert_eq!(stops(&fms), Some(2));
    }

    #[test]
    fn weather_changes_fuel() {
        let mut fms = FMS::new();
        fms.set_flight_planning(builder(120.0)).unwrap();
        add_stops(&mut fms).unwrap();
        let calm = fms.route().trip_fuel();

        fms.set_weather(Weather::new(Wind::new(90.0, Speed::kt(30.0))))
            .unwrap();
        assert!(fms.route().trip_fuel() > calm);
    }

    #[test]
    fn new_performance_rebuilds_route() {
        let mut fms = FMS::new();
        fms.set_flight_planning(builder(120.0)).unwrap();
        add_stops(&mut fms).unwrap();
        let slow = fms.route().trip_fuel();

        fms.set_flight_planning(builder(150.0)).unwrap();
        assert!(fms.route().trip_fuel() < slow);
    }

    #[test]
    fn invalid_performance_clears_results() {
        let mut fms = FMS::new();
        fms.set_flight_planning(builder(120.0)).unwrap();
        add_stops(&mut fms).unwrap();

        let result = fms.set_flight_planning(builder(0.0));
        assert_eq!(
            result,
            Err(Error::MissingPerformanceData {
                field: "cruise speed"
            })
        );
        assert!(fms.route().legs().is_empty());
        assert!(fms.flight_planning().is_none());
    }

    #[test]
    fn sar_from_destination() {
        let mut fms = FMS::new();
        let mission = SarMission::new(Mass::lb(2500.0), SarTask::Fuel(Mass::lb(200.0)));
        assert!(fms.sar(&mission).is_none());

        fms.set_flight_planning(builder(120.0)).unwrap();
        let round_trip = fms.sar(&mission).unwrap().unwrap();

        add_stops(&mut fms).unwrap();
        let from_destination = fms.sar(&mission).unwrap().unwrap();

        assert!(from_destination.fuel.route.is_positive());
        assert!(from_destination.radius < round_trip.radius);
    }
}
