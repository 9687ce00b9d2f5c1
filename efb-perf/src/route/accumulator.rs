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

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::Leg;
use crate::measurements::{Duration, Length, Mass};

/// Totals from the start of the route up to a leg.
#[derive(Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TotalsToLeg {
    dist: Length,
    ete: Duration,
    fuel: Mass,
}

impl TotalsToLeg {
    /// Starts the totals with the first leg.
    pub fn new(leg: &Leg) -> Self {
        Self {
            dist: *leg.dist(),
            ete: *leg.ete(),
            fuel: *leg.fuel(),
        }
    }

    /// Returns the totals including the next leg.
    pub fn accumulate(&self, leg: &Leg) -> Self {
        Self {
            dist: self.dist + *leg.dist(),
            ete: self.ete + *leg.ete(),
            fuel: self.fuel + *leg.fuel(),
        }
    }

    pub fn dist(&self) -> &Length {
        &self.dist
    }

    pub fn ete(&self) -> &Duration {
        &self.ete
    }

    pub fn fuel(&self) -> &Mass {
        &self.fuel
    }
}

impl Default for TotalsToLeg {
    fn default() -> Self {
        Self {
            dist: Length::nm(0.0),
            ete: Duration::h(0.0),
            fuel: Mass::lb(0.0),
        }
    }
}
