// SPDX-License-Identifier: Apache-2.0
// Copyright 2026 Joe Pearson
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

//! Search and rescue (SAR) operational radius.

use log::{debug, warn};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{intermediate_stops, FuelPolicy};
use crate::aircraft::Aircraft;
use crate::error::{Error, Result};
use crate::measurements::{Duration, Length, LengthUnit, Mass};
use crate::route::Route;

/// The task worked in the search area.
#[derive(Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SarTask {
    /// The fuel planned for the task.
    Fuel(Mass),
    /// The time spent on the task, burning fuel at the hover fuel flow.
    Duration(Duration),
}

/// Where the aircraft returns to after the task.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ReturnStrategy {
    /// Back along the route to the departure.
    Base,
    /// From the destination to the alternate.
    Alternate,
}

/// A search and rescue mission.
///
/// # Examples
///
/// ```
/// # use efb_perf::prelude::*;
/// # use efb_perf::measurements::{Duration, Mass, Speed};
/// let aircraft = Aircraft::new(Speed::kt(140.0), FuelFlow::lb_per_h(1000.0))
///     .with_useful_load(Mass::lb(4000.0));
/// let policy = FuelPolicy {
///     taxi: Mass::lb(0.0),
///     contingency_percent: 0.0,
///     reserve: Reserve::Fixed(Mass::lb(500.0)),
///     deck_time: Duration::min(0.0),
///     deck_fuel_flow: FuelFlow::lb_per_h(0.0),
///     passenger_weight: Mass::lb(200.0),
///     contingency_allocation: ContingencyAllocation::ProRata,
/// };
/// let mission = SarMission::new(Mass::lb(3000.0), SarTask::Fuel(Mass::lb(600.0)));
///
/// let sar = mission.solve(&aircraft, &policy, None).unwrap();
/// assert_eq!(sar.radius.round(), Length::nm(133.0));
/// assert_eq!(sar.return_strategy, ReturnStrategy::Base);
/// ```
#[derive(Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SarMission {
    /// The fuel on board at takeoff.
    pub takeoff_fuel: Mass,
    /// The weight of the SAR equipment on board.
    #[cfg_attr(feature = "serde", serde(default = "zero_mass"))]
    pub equipment: Mass,
    pub task: SarTask,
    /// Overrides the reserve of the fuel policy.
    #[cfg_attr(feature = "serde", serde(default))]
    pub reserve: Option<Mass>,
}

#[cfg(feature = "serde")]
fn zero_mass() -> Mass {
    Mass::lb(0.0)
}

/// The fuel accounted to find the operational radius.
#[derive(Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SarFuel {
    pub takeoff: Mass,
    pub reserve: Mass,
    pub task: Mass,
    /// Fuel burned on the route to the destination, including the time on
    /// deck at the intermediate stops.
    pub route: Mass,
    /// Fuel burned to return from the destination.
    pub return_fuel: Mass,
    /// Fuel left to fly out to the search area and back.
    pub usable: Mass,
}

#[derive(Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SarEndurance {
    /// Time until the tanks run dry.
    pub total: Duration,
    /// Time until the reserve is reached.
    pub operational: Duration,
    /// Time spent on the task.
    pub task: Duration,
}

/// The distance the aircraft can fly out to a search area and still return.
#[derive(Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SarRadius {
    pub radius: Length,
    /// Time to fly out and back.
    pub radius_flight_time: Duration,
    pub one_way: Duration,
    pub endurance: SarEndurance,
    pub fuel: SarFuel,
    pub return_strategy: ReturnStrategy,
}

impl SarMission {
    pub fn new(takeoff_fuel: Mass, task: SarTask) -> Self {
        Self {
            takeoff_fuel,
            equipment: Mass::lb(0.0),
            task,
            reserve: None,
        }
    }

    pub fn with_equipment(mut self, equipment: Mass) -> Self {
        self.equipment = equipment;
        self
    }

    pub fn with_reserve(mut self, reserve: Mass) -> Self {
        self.reserve = Some(reserve);
        self
    }

    /// Solves the operational radius of the mission.
    ///
    /// Without a `route`, the search starts and ends at the base. With a
    /// route, the search starts at the route's destination and the aircraft
    /// returns either back along the route or to the alternate, whichever
    /// burns less fuel.
    ///
    /// # Errors
    ///
    /// - [`MissingPerformanceData`] or [`MissingWeightData`] if the aircraft
    ///   lacks the data to compute the radius.
    /// - [`WeightLimitExceeded`] if the equipment and takeoff fuel exceed the
    ///   useful load.
    /// - [`InsufficientFuelToReachDestination`] if the destination can't be
    ///   reached with the reserve on board.
    /// - [`InsufficientFuelForSAR`] if no fuel is left to fly out.
    ///
    /// [`MissingPerformanceData`]: Error::MissingPerformanceData
    /// [`MissingWeightData`]: Error::MissingWeightData
    /// [`WeightLimitExceeded`]: Error::WeightLimitExceeded
    /// [`InsufficientFuelToReachDestination`]: Error::InsufficientFuelToReachDestination
    /// [`InsufficientFuelForSAR`]: Error::InsufficientFuelForSAR
    pub fn solve(
        &self,
        aircraft: &Aircraft,
        policy: &FuelPolicy,
        route: Option<&Route>,
    ) -> Result<SarRadius> {
        let perf = aircraft.performance()?;
        let useful_load = aircraft.useful_load()?;

        let takeoff = self.takeoff_fuel.max_of(Mass::lb(0.0));
        let load = self.equipment.max_of(Mass::lb(0.0)) + takeoff;
        if load > useful_load {
            let e = Error::WeightLimitExceeded {
                excess: load - useful_load,
            };
            warn!("SAR: {}", e);
            return Err(e);
        }

        let reserve = self
            .reserve
            .unwrap_or_else(|| policy.reserve.fuel(takeoff))
            .max_of(Mass::lb(0.0));

        let task_ff = aircraft.task_fuel_flow();
        let (task, task_time) = match self.task {
            SarTask::Fuel(fuel) => {
                let fuel = fuel.max_of(Mass::lb(0.0));
                (fuel, fuel / task_ff)
            }
            SarTask::Duration(time) => {
                let time = time.max_of(Duration::h(0.0));
                (task_ff * time, time)
            }
        };

        let (route_fuel, return_fuel, return_strategy) =
            match route.filter(|route| !route.legs().is_empty()) {
                Some(route) => {
                    let deck = policy.deck_fuel_per_stop()
                        * intermediate_stops(route.stops().len()) as f32;
                    let route_fuel = route.trip_fuel() + deck;
                    let at_destination = takeoff - route_fuel - reserve;
                    if !at_destination.is_positive() {
                        let e = Error::InsufficientFuelToReachDestination {
                            shortfall: -at_destination,
                        };
                        warn!("SAR: {}", e);
                        return Err(e);
                    }

                    let back = route.reversed().trip_fuel();
                    match route.alternate() {
                        Some(alternate) if *alternate.fuel() < back => {
                            (route_fuel, *alternate.fuel(), ReturnStrategy::Alternate)
                        }
                        _ => (route_fuel, back, ReturnStrategy::Base),
                    }
                }
                None => (Mass::lb(0.0), Mass::lb(0.0), ReturnStrategy::Base),
            };

        let usable = takeoff - route_fuel - reserve - task - return_fuel;
        if !usable.is_positive() {
            let e = Error::InsufficientFuelForSAR { shortfall: -usable };
            warn!("SAR: {}", e);
            return Err(e);
        }

        let radius_flight_time = usable / perf.ff();
        let one_way = radius_flight_time / 2.0;
        let radius = (perf.tas() * one_way).convert_to(LengthUnit::NauticalMiles);

        debug!(
            "SAR radius {:.0} ({:.2} out and back), usable {:.0}, return {:?}",
            radius, radius_flight_time, usable, return_strategy
        );

        Ok(SarRadius {
            radius,
            radius_flight_time,
            one_way,
            endurance: SarEndurance {
                total: takeoff / perf.ff(),
                operational: (takeoff - reserve) / perf.ff(),
                task: task_time,
            },
            fuel: SarFuel {
                takeoff,
                reserve,
                task,
                route: route_fuel,
                return_fuel,
                usable,
            },
            return_strategy,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fp::{ContingencyAllocation, Performance, Reserve};
    use crate::geom::Coordinate;
    use crate::measurements::Speed;
    use crate::nd::Waypoint;
    use crate::route::{Leg, Weather};
    use crate::{FuelFlow, Wind};

    fn aircraft() -> Aircraft {
        Aircraft::new(Speed::kt(140.0), FuelFlow::lb_per_h(1000.0)).with_useful_load(Mass::lb(4000.0))
    }

    fn policy(reserve: Reserve) -> FuelPolicy {
        FuelPolicy {
            taxi: Mass::lb(0.0),
            contingency_percent: 10.0,
            reserve,
            deck_time: Duration::min(5.0),
            deck_fuel_flow: FuelFlow::lb_per_h(300.0),
            passenger_weight: Mass::lb(200.0),
            contingency_allocation: ContingencyAllocation::ProRata,
        }
    }

    fn route(dist: f32) -> Route {
        let perf = Performance::new(Speed::kt(140.0), FuelFlow::lb_per_h(1000.0));
        let a = Waypoint::landing_stop("A", Coordinate::new(0.0, 0.0));
        let b = Waypoint::landing_stop("B", Coordinate::new(0.0, 1.0));
        let leg = Leg::with_dist(a, b, Length::nm(dist), 90.0, &perf, Wind::calm());
        Route::from_legs(vec![leg], &perf, &Weather::default())
    }

    fn assert_near(actual: f32, expected: f32) {
        assert!((actual - expected).abs() < 1e-3, "{actual} != {expected}");
    }

    #[test]
    fn round_trip_radius() {
        let mission = SarMission::new(Mass::lb(3000.0), SarTask::Fuel(Mass::lb(600.0)));
        let sar = mission
            .solve(&aircraft(), &policy(Reserve::Fixed(Mass::lb(500.0))), None)
            .unwrap();

        assert_eq!(sar.fuel.usable, Mass::lb(1900.0));
        assert_near(sar.radius_flight_time.to_h(), 1.9);
        assert_near(sar.one_way.to_h(), 0.95);
        assert_near(sar.radius.to_nm(), 133.0);
        assert_eq!(sar.return_strategy, ReturnStrategy::Base);
        assert_near(sar.endurance.total.to_h(), 3.0);
        assert_near(sar.endurance.operational.to_h(), 2.5);
        assert_near(sar.endurance.task.to_h(), 0.6);
    }

    #[test]
    fn task_duration_burns_hover_fuel_flow() {
        let aircraft = aircraft().with_hover_fuel_flow(FuelFlow::lb_per_h(1200.0));
        let mission = SarMission::new(Mass::lb(3000.0), SarTask::Duration(Duration::min(30.0)));
        let sar = mission
            .solve(&aircraft, &policy(Reserve::Fixed(Mass::lb(500.0))), None)
            .unwrap();

        assert_near(sar.fuel.task.to_lb(), 600.0);
        assert_near(sar.radius.to_nm(), 133.0);
    }

    #[test]
    fn percent_reserve_of_takeoff_fuel() {
        let mission = SarMission::new(Mass::lb(3000.0), SarTask::Fuel(Mass::lb(600.0)));
        let sar = mission
            .solve(&aircraft(), &policy(Reserve::Percent(10.0)), None)
            .unwrap();

        assert_near(sar.fuel.reserve.to_lb(), 300.0);
        assert_near(sar.fuel.usable.to_lb(), 2100.0);
    }

    #[test]
    fn weight_limit_is_checked_first() {
        let mission = SarMission::new(Mass::lb(3000.0), SarTask::Fuel(Mass::lb(6000.0)))
            .with_equipment(Mass::lb(1250.0));
        let result = mission.solve(&aircraft(), &policy(Reserve::Fixed(Mass::lb(500.0))), None);

        assert_eq!(
            result,
            Err(Error::WeightLimitExceeded {
                excess: Mass::lb(250.0)
            })
        );
    }

    #[test]
    fn missing_weight_data() {
        let aircraft = Aircraft::new(Speed::kt(140.0), FuelFlow::lb_per_h(1000.0));
        let mission = SarMission::new(Mass::lb(3000.0), SarTask::Fuel(Mass::lb(600.0)));
        let result = mission.solve(&aircraft, &policy(Reserve::Fixed(Mass::lb(500.0))), None);

        assert_eq!(result, Err(Error::MissingWeightData));
    }

    #[test]
    fn insufficient_fuel_for_sar() {
        let mission = SarMission::new(Mass::lb(1000.0), SarTask::Fuel(Mass::lb(600.0)));
        let result = mission.solve(&aircraft(), &policy(Reserve::Fixed(Mass::lb(500.0))), None);

        let e = result.unwrap_err();
        assert_eq!(
            e,
            Error::InsufficientFuelForSAR {
                shortfall: Mass::lb(100.0)
            }
        );
        assert_eq!(e.severity(), crate::error::Severity::Critical);
    }

    #[test]
    fn from_destination_returns_to_base() {
        // 70 NM out and back burn 500 lb each way
        let route = route(70.0);
        let mission = SarMission::new(Mass::lb(3000.0), SarTask::Fuel(Mass::lb(600.0)));
        let sar = mission
            .solve(&aircraft(), &policy(Reserve::Fixed(Mass::lb(500.0))), Some(&route))
            .unwrap();

        assert_near(sar.fuel.route.to_lb(), 500.0);
        assert_near(sar.fuel.return_fuel.to_lb(), 500.0);
        assert_near(sar.fuel.usable.to_lb(), 900.0);
        assert_near(sar.radius.to_nm(), 63.0);
        assert_eq!(sar.return_strategy, ReturnStrategy::Base);
    }

    #[test]
    fn from_destination_burns_deck_fuel_at_intermediate_stops() {
        let perf = Performance::new(Speed::kt(140.0), FuelFlow::lb_per_h(1000.0));
        let stops: Vec<Waypoint> = ["A", "B", "C", "D"]
            .iter()
            .enumerate()
            .map(|(i, id)| Waypoint::landing_stop(*id, Coordinate::new(0.0, i as f64)))
            .collect();
        // 35 NM legs burn 250 lb each
        let legs = stops
            .windows(2)
            .map(|pair| {
                Leg::with_dist(
                    pair[0].clone(),
                    pair[1].clone(),
                    Length::nm(35.0),
                    90.0,
                    &perf,
                    Wind::calm(),
                )
            })
            .collect();
        let route = Route::from_legs(legs, &perf, &Weather::default());

        let mut policy = policy(Reserve::Fixed(Mass::lb(500.0)));
        policy.deck_time = Duration::min(30.0);

        let mission = SarMission::new(Mass::lb(3000.0), SarTask::Fuel(Mass::lb(100.0)));
        let sar = mission.solve(&aircraft(), &policy, Some(&route)).unwrap();

        // 750 lb trip and 150 lb on deck at B and C
        assert_near(sar.fuel.route.to_lb(), 1050.0);
        assert_near(sar.fuel.return_fuel.to_lb(), 750.0);
        assert_near(sar.fuel.usable.to_lb(), 600.0);
        assert_near(sar.radius.to_nm(), 42.0);
    }

    #[test]
    fn deck_fuel_can_leave_destination_out_of_reach() {
        let perf = Performance::new(Speed::kt(140.0), FuelFlow::lb_per_h(1000.0));
        let legs = (0..3)
            .map(|i| {
                Leg::with_dist(
                    Waypoint::landing_stop(format!("S{i}"), Coordinate::new(0.0, i as f64)),
                    Waypoint::landing_stop(format!("S{}", i + 1), Coordinate::new(0.0, (i + 1) as f64)),
                    Length::nm(35.0),
                    90.0,
                    &perf,
                    Wind::calm(),
                )
            })
            .collect();
        let route = Route::from_legs(legs, &perf, &Weather::default());

        let mut policy = policy(Reserve::Fixed(Mass::lb(500.0)));
        policy.deck_time = Duration::min(30.0);

        // enough for the legs and the reserve, not for the time on deck
        let mission = SarMission::new(Mass::lb(1300.0), SarTask::Fuel(Mass::lb(0.0)));
        let result = mission.solve(&aircraft(), &policy, Some(&route));

        assert_eq!(
            result.map_err(|e| e.kind()),
            Err(crate::error::ErrorKind::InsufficientFuelToReachDestination)
        );
    }

    #[test]
    fn from_destination_returns_to_cheaper_alternate() {
        let mut route = route(70.0);
        // roughly 30 NM from the destination
        route.set_alternate(Some(Waypoint::landing_stop(
            "ALT",
            Coordinate::new(0.0, 1.5),
        )));

        let mission = SarMission::new(Mass::lb(3000.0), SarTask::Fuel(Mass::lb(600.0)));
        let sar = mission
            .solve(&aircraft(), &policy(Reserve::Fixed(Mass::lb(500.0))), Some(&route))
            .unwrap();

        assert_eq!(sar.return_strategy, ReturnStrategy::Alternate);
        assert!(sar.fuel.return_fuel < Mass::lb(500.0));
    }

    #[test]
    fn destination_out_of_reach() {
        let route = route(70.0);
        let mission = SarMission::new(Mass::lb(900.0), SarTask::Fuel(Mass::lb(0.0)));
        let result = mission.solve(&aircraft(), &policy(Reserve::Fixed(Mass::lb(500.0))), Some(&route));

        assert!(matches!(
            result,
            Err(Error::InsufficientFuelToReachDestination { .. })
        ));
    }

    #[test]
    fn empty_route_is_round_trip() {
        let mission = SarMission::new(Mass::lb(3000.0), SarTask::Fuel(Mass::lb(600.0)));
        let sar = mission
            .solve(
                &aircraft(),
                &policy(Reserve::Fixed(Mass::lb(500.0))),
                Some(&Route::new()),
            )
            .unwrap();

        assert_near(sar.radius.to_nm(), 133.0);
    }
}
