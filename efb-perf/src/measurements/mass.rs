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

use super::{constants, Measurement, PhysicalQuantity, UnitOfMeasure};

/// Mass unit with _kg_ as SI unit.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(C)]
pub enum MassUnit {
    Kilograms,
    Pounds,
}

impl UnitOfMeasure<f32> for MassUnit {
    fn quantity() -> PhysicalQuantity {
        PhysicalQuantity::Mass
    }

    fn si() -> Self {
        Self::Kilograms
    }

    fn symbol(&self) -> &'static str {
        match self {
            Self::Kilograms => "kg",
            Self::Pounds => "lb",
        }
    }

    fn from_si(value: f32, to: &Self) -> f32 {
        match to {
            Self::Kilograms => value,
            Self::Pounds => value / constants::POUNDS_IN_KILOGRAMS,
        }
    }

    fn to_si(&self, value: &f32) -> f32 {
        match self {
            Self::Kilograms => *value,
            Self::Pounds => value * constants::POUNDS_IN_KILOGRAMS,
        }
    }
}

/// Mass of fuel, payload or the aircraft itself.
pub type Mass = Measurement<f32, MassUnit>;

impl Mass {
    pub fn kg(value: f32) -> Self {
        Self {
            value,
            unit: MassUnit::Kilograms,
        }
    }

    pub fn lb(value: f32) -> Self {
        Self {
            value,
            unit: MassUnit::Pounds,
        }
    }

    /// The mass in pounds.
    pub fn to_lb(&self) -> f32 {
        *self.convert_to(MassUnit::Pounds).value()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pounds_to_kilograms() {
        let m = Mass::lb(100.0).convert_to(MassUnit::Kilograms);
        assert!((m.value() - 45.35924).abs() < 1e-4);
    }

    #[test]
    fn to_lb_of_pounds_is_identity() {
        assert_eq!(Mass::lb(1234.5).to_lb(), 1234.5);
    }
}
