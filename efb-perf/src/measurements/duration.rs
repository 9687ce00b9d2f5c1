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

/// Duration unit with _s_ as SI unit.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(C)]
pub enum DurationUnit {
    Seconds,
    Minutes,
    Hours,
}

impl UnitOfMeasure<f32> for DurationUnit {
    fn quantity() -> PhysicalQuantity {
        PhysicalQuantity::Time
    }

    fn si() -> Self {
        Self::Seconds
    }

    fn symbol(&self) -> &'static str {
        match self {
            Self::Seconds => "s",
            Self::Minutes => "min",
            Self::Hours => "h",
        }
    }

    fn from_si(value: f32, to: &Self) -> f32 {
        match to {
            Self::Seconds => value,
            Self::Minutes => value / constants::SECONDS_IN_MINUTE,
            Self::Hours => value / constants::SECONDS_IN_HOUR,
        }
    }

    fn to_si(&self, value: &f32) -> f32 {
        match self {
            Self::Seconds => *value,
            Self::Minutes => value * constants::SECONDS_IN_MINUTE,
            Self::Hours => value * constants::SECONDS_IN_HOUR,
        }
    }
}

/// Time enroute, on deck or in a search pattern.
pub type Duration = Measurement<f32, DurationUnit>;

impl Duration {
    pub fn s(value: f32) -> Self {
        Self {
            value,
            unit: DurationUnit::Seconds,
        }
    }

    pub fn min(value: f32) -> Self {
        Self {
            value,
            unit: DurationUnit::Minutes,
        }
    }

    pub fn h(value: f32) -> Self {
        Self {
            value,
            unit: DurationUnit::Hours,
        }
    }

    /// The duration in decimal hours.
    pub fn to_h(&self) -> f32 {
        *self.convert_to(DurationUnit::Hours).value()
    }
}

impl Default for Duration {
    fn default() -> Self {
        Self::h(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minutes_to_hours() {
        assert!((Duration::min(5.0).to_h() - 1.0 / 12.0).abs() < 1e-6);
    }
}
