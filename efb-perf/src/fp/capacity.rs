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

use log::{trace, warn};

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::aircraft::Aircraft;
use crate::error::Error;
use crate::measurements::{Mass, MassUnit};

/// The passengers that can be carried with the fuel required at a stop.
///
/// The capacity is never guessed. If the aircraft's useful load is unknown,
/// no passenger can be carried and the [`condition`] tells why.
///
/// [`condition`]: PassengerCapacity::condition
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct PassengerCapacity {
    pub max_passengers: u16,
    /// Useful load left after fuel and cargo. Negative if exceeded.
    pub available_weight: Mass,
    pub used_by_passengers: Mass,
    /// The margin left with `max_passengers` on board.
    pub remaining_weight: Mass,
    /// Why fewer passengers than the math allows, or none, can be carried.
    pub condition: Option<Error>,
}

impl PassengerCapacity {
    /// Computes the capacity with the `required_fuel` and `cargo` on board.
    pub fn new(
        aircraft: &Aircraft,
        required_fuel: Mass,
        passenger_weight: Mass,
        cargo: Mass,
    ) -> Self {
        let useful_load = match aircraft.useful_load() {
            Ok(useful_load) => useful_load,
            Err(e) => {
                warn!("no passenger capacity: {}", e);
                return Self::unavailable(Mass::lb(0.0), e);
            }
        };

        let cargo = cargo.max_of(Mass::lb(0.0));
        let available_weight =
            (useful_load - required_fuel - cargo).convert_to(MassUnit::Pounds);

        if *available_weight.value() < 0.0 {
            let e = Error::WeightLimitExceeded {
                excess: -available_weight,
            };
            warn!("no passenger capacity: {}", e);
            return Self::unavailable(available_weight, e);
        }

        if !passenger_weight.is_positive() {
            warn!("no passenger capacity: {}", Error::InvalidPassengerWeight);
            return Self::unavailable(available_weight, Error::InvalidPassengerWeight);
        }

        let by_weight = (available_weight / passenger_weight)
            .floor()
            .min(u16::MAX as f32) as u16;
        let max_passengers = match aircraft.max_passengers {
            Some(seats) => by_weight.min(seats),
            None => by_weight,
        };

        let used_by_passengers =
            (passenger_weight * max_passengers as f32).convert_to(MassUnit::Pounds);

        trace!(
            "{} passengers ({} by weight) with {:.0} available",
            max_passengers,
            by_weight,
            available_weight
        );

        Self {
            max_passengers,
            available_weight,
            used_by_passengers,
            remaining_weight: available_weight - used_by_passengers,
            condition: None,
        }
    }

    fn unavailable(available_weight: Mass, condition: Error) -> Self {
        Self {
            max_passengers: 0,
            available_weight,
            used_by_passengers: Mass::lb(0.0),
            remaining_weight: available_weight,
            condition: Some(condition),
        }
    }

    /// Returns `true` if passengers can be carried as computed.
    pub fn is_available(&self) -> bool {
        self.condition.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::measurements::Speed;
    use crate::FuelFlow;

    fn aircraft() -> Aircraft {
        Aircraft::new(Speed::kt(120.0), FuelFlow::lb_per_h(800.0))
    }

    #[test]
    fn passengers_by_weight() {
        let ac = aircraft().with_useful_load(Mass::lb(3000.0));
        let capacity = PassengerCapacity::new(&ac, Mass::lb(1305.0), Mass::lb(200.0), Mass::lb(100.0));

        assert_eq!(capacity.available_weight, Mass::lb(1595.0));
        assert_eq!(capacity.max_passengers, 7);
        assert_eq!(capacity.used_by_passengers, Mass::lb(1400.0));
        assert_eq!(capacity.remaining_weight, Mass::lb(195.0));
        assert!(capacity.is_available());
    }

    #[test]
    fn capped_by_seats() {
        let ac = aircraft()
            .with_useful_load(Mass::lb(3000.0))
            .with_max_passengers(4);
        let capacity = PassengerCapacity::new(&ac, Mass::lb(400.0), Mass::lb(200.0), Mass::lb(0.0));

        assert_eq!(capacity.max_passengers, 4);
        assert_eq!(capacity.remaining_weight, Mass::lb(1800.0));
    }

    #[test]
    fn missing_useful_load_is_never_defaulted() {
        let capacity = PassengerCapacity::new(&aircraft(), Mass::lb(400.0), Mass::lb(200.0), Mass::lb(0.0));

        assert_eq!(capacity.max_passengers, 0);
        assert_eq!(capacity.condition, Some(Error::MissingWeightData));
    }

    #[test]
    fn non_positive_useful_load() {
        let ac = aircraft().with_weights(Mass::lb(5000.0), Mass::lb(5000.0));
        let capacity = PassengerCapacity::new(&ac, Mass::lb(0.0), Mass::lb(200.0), Mass::lb(0.0));

        assert_eq!(capacity.max_passengers, 0);
        assert_eq!(capacity.condition, Some(Error::MissingWeightData));
    }

    #[test]
    fn fuel_exceeding_useful_load() {
        let ac = aircraft().with_useful_load(Mass::lb(1000.0));
        let capacity = PassengerCapacity::new(&ac, Mass::lb(1250.0), Mass::lb(200.0), Mass::lb(0.0));

        assert_eq!(capacity.max_passengers, 0);
        assert_eq!(
            capacity.condition,
            Some(Error::WeightLimitExceeded {
                excess: Mass::lb(250.0)
            })
        );
    }

    #[test]
    fn invalid_passenger_weight() {
        let ac = aircraft().with_useful_load(Mass::lb(3000.0));
        let capacity = PassengerCapacity::new(&ac, Mass::lb(400.0), Mass::lb(0.0), Mass::lb(0.0));

        assert_eq!(capacity.max_passengers, 0);
        assert_eq!(capacity.condition, Some(Error::InvalidPassengerWeight));
        assert_eq!(capacity.available_weight, Mass::lb(2600.0));
    }
}
