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

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::FuelPolicy;
use crate::measurements::Mass;

/// Returns the number of intermediate stops on a route with `landing_stops`.
///
/// The departure and the destination are no intermediate stops.
pub fn intermediate_stops(landing_stops: usize) -> usize {
    landing_stops.saturating_sub(2)
}

/// The fuel planned on top of the trip fuel.
#[derive(Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AuxiliaryFuel {
    taxi: Mass,
    contingency: Mass,
    reserve: Mass,
    deck: Mass,
}

impl AuxiliaryFuel {
    /// Computes the auxiliary fuel of a route with the `trip` fuel and the
    /// number of `landing_stops` according to the `policy`.
    ///
    /// The contingency is rounded to the nearest pound.
    pub fn new(policy: &FuelPolicy, trip: Mass, landing_stops: usize) -> Self {
        let contingency = Mass::lb(
            (trip.to_lb() * policy.contingency_percent.max(0.0) / 100.0).round(),
        );

        Self {
            taxi: policy.taxi,
            contingency,
            reserve: policy.reserve.fuel(trip),
            deck: policy.deck_fuel_per_stop() * intermediate_stops(landing_stops) as f32,
        }
    }

    pub fn taxi(&self) -> Mass {
        self.taxi
    }

    pub fn contingency(&self) -> Mass {
        self.contingency
    }

    pub fn reserve(&self) -> Mass {
        self.reserve
    }

    /// The fuel burned on deck at all intermediate stops.
    pub fn deck(&self) -> Mass {
        self.deck
    }

    pub fn total(&self) -> Mass {
        self.taxi + self.contingency + self.reserve + self.deck
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fp::{ContingencyAllocation, Reserve};
    use crate::measurements::Duration;
    use crate::FuelFlow;

    fn policy(reserve: Reserve) -> FuelPolicy {
        FuelPolicy {
            taxi: Mass::lb(50.0),
            contingency_percent: 10.0,
            reserve,
            deck_time: Duration::min(5.0),
            deck_fuel_flow: FuelFlow::lb_per_h(300.0),
            passenger_weight: Mass::lb(200.0),
            contingency_allocation: ContingencyAllocation::ProRata,
        }
    }

    #[test]
    fn no_intermediate_stops_on_short_routes() {
        assert_eq!(intermediate_stops(0), 0);
        assert_eq!(intermediate_stops(1), 0);
        assert_eq!(intermediate_stops(2), 0);
        assert_eq!(intermediate_stops(5), 3);
    }

    #[test]
    fn fixed_reserve() {
        let aux = AuxiliaryFuel::new(&policy(Reserve::Fixed(Mass::lb(400.0))), Mass::lb(800.0), 3);

        assert_eq!(aux.taxi(), Mass::lb(50.0));
        assert_eq!(aux.contingency(), Mass::lb(80.0));
        assert_eq!(aux.reserve(), Mass::lb(400.0));
        assert!((aux.deck().to_lb() - 25.0).abs() < 1e-3);
        assert!((aux.total().to_lb() - 555.0).abs() < 1e-3);
    }

    #[test]
    fn percent_reserve() {
        let aux = AuxiliaryFuel::new(&policy(Reserve::Percent(30.0)), Mass::lb(1000.0), 2);
        assert!((aux.reserve().to_lb() - 300.0).abs() < 1e-3);
        assert_eq!(aux.deck(), Mass::lb(0.0));
    }

    #[test]
    fn contingency_is_rounded() {
        let aux = AuxiliaryFuel::new(&policy(Reserve::Fixed(Mass::lb(0.0))), Mass::lb(804.6), 2);
        assert_eq!(aux.contingency(), Mass::lb(80.0));

        let aux = AuxiliaryFuel::new(&policy(Reserve::Fixed(Mass::lb(0.0))), Mass::lb(805.0), 2);
        assert_eq!(aux.contingency(), Mass::lb(81.0));
    }
}
