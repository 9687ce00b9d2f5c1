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

use log::{debug, trace};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{AuxiliaryFuel, ContingencyAllocation, FuelPolicy, PassengerCapacity};
use crate::aircraft::Aircraft;
use crate::measurements::{Duration, Length, Mass};
use crate::route::{Route, TotalsToLeg};

/// The role of a landing stop on the route.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum StopRole {
    Departure,
    Intermediate,
    Destination,
}

/// The fuel components required at a stop.
#[derive(Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FuelBreakdown {
    /// Fuel burned on all legs after the stop.
    pub trip: Mass,
    pub contingency: Mass,
    /// Fuel burned on deck at the intermediate stops still ahead.
    pub deck: Mass,
    pub reserve: Mass,
}

impl FuelBreakdown {
    pub fn total(&self) -> Mass {
        self.trip + self.contingency + self.deck + self.reserve
    }
}

/// What the crew needs to know at a landing stop.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct StopCard {
    pub index: usize,
    pub ident: String,
    pub name: String,
    pub role: StopRole,
    /// Distance flown from the departure.
    pub cumulative_dist: Length,
    /// Time enroute from the departure.
    pub cumulative_ete: Duration,
    /// Fuel burned on the leg arriving at the stop.
    pub leg_fuel: Mass,
    pub fuel: FuelBreakdown,
    /// The minimum fuel on board at the stop to finish the route.
    pub total_fuel_required: Mass,
    /// Passengers that can board with the required fuel.
    pub capacity: PassengerCapacity,
}

/// The fuel required at each landing stop of a route.
///
/// Each stop must carry the trip fuel of all legs ahead, the deck fuel of the
/// intermediate stops ahead, its share of the contingency and the final
/// reserve. The destination carries the reserve and its share of the
/// contingency only. Thus, the required fuel never increases from one stop to
/// the next.
///
/// # Examples
///
/// ```
/// # use efb_perf::prelude::*;
/// # use efb_perf::coord;
/// # use efb_perf::measurements::{Duration, Length, Mass, Speed};
/// let aircraft = Aircraft::new(Speed::kt(120.0), FuelFlow::lb_per_h(800.0))
///     .with_useful_load(Mass::lb(3000.0));
/// let perf = aircraft.performance().unwrap();
/// let policy = FuelPolicy {
///     taxi: Mass::lb(50.0),
///     contingency_percent: 10.0,
///     reserve: Reserve::Fixed(Mass::lb(400.0)),
///     deck_time: Duration::min(5.0),
///     deck_fuel_flow: FuelFlow::lb_per_h(300.0),
///     passenger_weight: Mass::lb(200.0),
///     contingency_allocation: ContingencyAllocation::ProRata,
/// };
///
/// let a = Waypoint::landing_stop("A", coord!(0.0, 0.0));
/// let b = Waypoint::landing_stop("B", coord!(0.0, 1.0));
/// let c = Waypoint::landing_stop("C", coord!(0.0, 2.0));
/// let route = Route::from_legs(
///     vec![
///         Leg::with_dist(a, b.clone(), Length::nm(50.0), 90.0, &perf, Wind::calm()),
///         Leg::with_dist(b, c, Length::nm(70.0), 90.0, &perf, Wind::calm()),
///     ],
///     &perf,
///     &Weather::default(),
/// );
///
/// let schedule = FuelSchedule::new(&route, &policy, &aircraft, Mass::lb(0.0));
/// let totals: Vec<f32> = schedule
///     .stops()
///     .iter()
///     .map(|stop| stop.total_fuel_required.to_lb().round())
///     .collect();
///
/// assert_eq!(totals, [1305.0, 913.0, 400.0]);
/// ```
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct FuelSchedule {
    aux: AuxiliaryFuel,
    trip: Mass,
    stops: Vec<StopCard>,
}

impl FuelSchedule {
    /// Computes the stop cards of the `route` according to the `policy`.
    ///
    /// The passenger capacity at each stop is computed with the `cargo` on
    /// board.
    pub fn new(route: &Route, policy: &FuelPolicy, aircraft: &Aircraft, cargo: Mass) -> Self {
        let stops = route.stops();
        let legs = route.legs();
        let n = stops.len();

        // remaining[i] is the fuel of all legs from stop i on
        let mut remaining = vec![Mass::lb(0.0); legs.len() + 1];
        for (i, leg) in legs.iter().enumerate().rev() {
            remaining[i] = remaining[i + 1] + *leg.fuel();
        }

        let trip = remaining[0];
        let aux = AuxiliaryFuel::new(policy, trip, n);
        let totals: Vec<TotalsToLeg> = route.accumulate_legs().collect();

        debug!(
            "fuel schedule: {} stops, trip {:.0}, contingency {:.0}, reserve {:.0}, deck {:.0}",
            n,
            trip,
            aux.contingency(),
            aux.reserve(),
            aux.deck()
        );

        let stops = stops
            .iter()
            .enumerate()
            .map(|(i, wp)| {
                let role = match i {
                    0 => StopRole::Departure,
                    i if i + 1 == n => StopRole::Destination,
                    _ => StopRole::Intermediate,
                };
                let is_last = i + 1 == n;

                let remaining_trip = if is_last {
                    Mass::lb(0.0)
                } else {
                    remaining.get(i).copied().unwrap_or(Mass::lb(0.0))
                };

                let contingency = match policy.contingency_allocation {
                    ContingencyAllocation::ProRata if trip.is_positive() => {
                        aux.contingency() * (remaining_trip / trip)
                    }
                    ContingencyAllocation::ProRata => Mass::lb(0.0),
                    ContingencyAllocation::Constant => aux.contingency(),
                };

                let deck = if is_last {
                    Mass::lb(0.0)
                } else {
                    policy.deck_fuel_per_stop() * n.saturating_sub(2 + i) as f32
                };

                let fuel = FuelBreakdown {
                    trip: remaining_trip,
                    contingency,
                    deck,
                    reserve: aux.reserve(),
                };
                let total_fuel_required = fuel.total();

                let (cumulative_dist, cumulative_ete) = match i.checked_sub(1) {
                    Some(leg) => totals
                        .get(leg)
                        .map(|totals| (*totals.dist(), *totals.ete()))
                        .unwrap_or((Length::nm(0.0), Duration::h(0.0))),
                    None => (Length::nm(0.0), Duration::h(0.0)),
                };

                let leg_fuel = i
                    .checked_sub(1)
                    .and_then(|leg| legs.get(leg))
                    .map(|leg| *leg.fuel())
                    .unwrap_or(Mass::lb(0.0));

                trace!(
                    "stop {} {} ({:?}): trip {:.0}, contingency {:.1}, deck {:.1}, required {:.1}",
                    i,
                    wp.ident,
                    role,
                    fuel.trip,
                    fuel.contingency,
                    fuel.deck,
                    total_fuel_required
                );

                StopCard {
                    index: i,
                    ident: wp.ident.clone(),
                    name: wp.name.clone(),
                    role,
                    cumulative_dist,
                    cumulative_ete,
                    leg_fuel,
                    fuel,
                    total_fuel_required,
                    capacity: PassengerCapacity::new(
                        aircraft,
                        total_fuel_required,
                        policy.passenger_weight,
                        cargo,
                    ),
                }
            })
            .collect();

        Self { aux, trip, stops }
    }

    /// The cards of all landing stops in order of the route.
    pub fn stops(&self) -> &[StopCard] {
        &self.stops
    }

    /// The auxiliary fuel planned for the whole route.
    pub fn aux(&self) -> &AuxiliaryFuel {
        &self.aux
    }

    /// The fuel burned on all legs of the route.
    pub fn trip(&self) -> Mass {
        self.trip
    }

    pub fn departure(&self) -> Option<&StopCard> {
        self.stops.first()
    }

    pub fn destination(&self) -> Option<&StopCard> {
        self.stops.last()
    }

    /// The fuel required at the departure plus the taxi fuel.
    pub fn block_fuel(&self) -> Option<Mass> {
        self.departure()
            .map(|stop| stop.total_fuel_required + self.aux.taxi())
    }
}
