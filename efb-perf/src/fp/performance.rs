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

use log::warn;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::measurements::Speed;
use crate::FuelFlow;

/// The lowest ground speed in knots assumed on any leg.
///
/// Near-cancelling headwinds would otherwise let the time enroute run away.
pub const MIN_GROUND_SPEED_KT: f32 = 40.0;

/// The cruise performance used to compute the legs of a route.
///
/// Use [`Aircraft::performance`] to get a performance with a validated speed
/// and fuel flow.
///
/// [`Aircraft::performance`]: crate::aircraft::Aircraft::performance
#[derive(Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Performance {
    tas: Speed,
    ff: FuelFlow,
    min_gs: Speed,
}

impl Performance {
    pub fn new(tas: Speed, ff: FuelFlow) -> Self {
        Self {
            tas,
            ff,
            min_gs: Speed::kt(MIN_GROUND_SPEED_KT),
        }
    }

    /// Sets the ground speed floor.
    ///
    /// A floor that isn't positive is ignored and the default of
    /// [`MIN_GROUND_SPEED_KT`] is kept.
    pub fn with_min_gs(mut self, min_gs: Speed) -> Self {
        if min_gs.is_positive() {
            self.min_gs = min_gs;
        } else {
            warn!(
                "ignoring ground speed floor {}, using {} kt",
                min_gs, MIN_GROUND_SPEED_KT
            );
        }
        self
    }

    /// The true airspeed.
    pub fn tas(&self) -> Speed {
        self.tas
    }

    /// The fuel flow, which is independent of the wind.
    pub fn ff(&self) -> FuelFlow {
        self.ff
    }

    /// The floor applied to the ground speed.
    pub fn min_gs(&self) -> Speed {
        self.min_gs
    }
}
