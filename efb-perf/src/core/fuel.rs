// SPDX-License-Identifier: Apache-2.0
// Copyright 2024 Joe Pearson
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

use std::fmt::{Display, Formatter, Result};
use std::ops::{Div, Mul};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::measurements::{Duration, Mass};

/// The rate at which fuel is burned.
///
/// Fuel is accounted by mass. Multiplying a flow with a [`Duration`] gives the
/// [`Mass`] of fuel burned within that time and dividing a mass of fuel by
/// the flow gives the endurance:
///
/// ```
/// # use efb_perf::FuelFlow;
/// # use efb_perf::measurements::{Duration, Mass};
/// let ff = FuelFlow::PerHour(Mass::lb(800.0));
/// assert_eq!(ff * Duration::h(0.5), Mass::lb(400.0));
/// assert_eq!(Mass::lb(1200.0) / ff, Duration::h(1.5));
/// ```
#[derive(Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(C)]
pub enum FuelFlow {
    PerHour(Mass),
}

impl FuelFlow {
    /// Creates a fuel flow in pounds per hour.
    pub fn lb_per_h(value: f32) -> Self {
        Self::PerHour(Mass::lb(value))
    }

    /// The mass burned within one hour.
    pub fn hourly(&self) -> Mass {
        match self {
            Self::PerHour(mass) => *mass,
        }
    }

    /// Returns `true` if the flow burns any fuel.
    pub fn is_positive(&self) -> bool {
        self.hourly().is_positive()
    }
}

impl Mul<Duration> for FuelFlow {
    type Output = Mass;

    fn mul(self, rhs: Duration) -> Self::Output {
        match self {
            Self::PerHour(mass) => mass * rhs.to_h(),
        }
    }
}

/// The time it takes to burn the fuel.
impl Div<FuelFlow> for Mass {
    type Output = Duration;

    fn div(self, rhs: FuelFlow) -> Self::Output {
        match rhs {
            FuelFlow::PerHour(mass) => Duration::h(self / mass),
        }
    }
}

impl Display for FuelFlow {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::PerHour(mass) => {
                if let Some(precision) = f.precision() {
                    write!(f, "{:.precision$}/h", mass)
                } else {
                    write!(f, "{}/h", mass)
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mul_fuel_flow() {
        let ff = FuelFlow::lb_per_h(800.0);
        let fuel = ff * Duration::min(30.0);
        assert!((fuel.to_lb() - 400.0).abs() < 1e-3);
    }

    #[test]
    fn endurance_of_fuel() {
        let ff = FuelFlow::lb_per_h(1000.0);
        assert_eq!(Mass::lb(1900.0) / ff, Duration::h(1.9));
    }

    #[test]
    fn display_fuel_flow() {
        assert_eq!(format!("{:.0}", FuelFlow::lb_per_h(300.0)), "300 lb/h");
    }
}
