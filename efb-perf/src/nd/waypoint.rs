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

use crate::geom::Coordinate;

pub type Waypoints = Vec<Waypoint>;

/// What the aircraft does at a waypoint.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum WaypointRole {
    /// The aircraft lands, e.g. to pick up or drop passengers.
    #[default]
    LandingStop,
    /// The waypoint only shapes the path flown.
    NavigationOnly,
}

/// A waypoint on the route.
///
/// Only landing stops take part in the fuel and passenger accounting.
/// Navigation-only waypoints between two stops just add to the distance flown
/// on that leg.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Waypoint {
    pub ident: String,
    pub name: String,
    /// The position or `None` if it isn't known yet.
    pub coordinate: Option<Coordinate>,
    pub role: WaypointRole,
}

impl Waypoint {
    pub fn new(
        ident: impl Into<String>,
        name: impl Into<String>,
        coordinate: Option<Coordinate>,
        role: WaypointRole,
    ) -> Self {
        Self {
            ident: ident.into(),
            name: name.into(),
            coordinate,
            role,
        }
    }

    /// Creates a landing stop at the coordinate.
    pub fn landing_stop(ident: impl Into<String>, coordinate: Coordinate) -> Self {
        let ident = ident.into();
        Self::new(
            ident.clone(),
            ident,
            Some(coordinate),
            WaypointRole::LandingStop,
        )
    }

    /// Creates a navigation-only waypoint at the coordinate.
    pub fn navigation(ident: impl Into<String>, coordinate: Coordinate) -> Self {
        let ident = ident.into();
        Self::new(
            ident.clone(),
            ident,
            Some(coordinate),
            WaypointRole::NavigationOnly,
        )
    }

    pub fn is_landing_stop(&self) -> bool {
        self.role == WaypointRole::LandingStop
    }

    /// Returns the coordinate if it's known and valid.
    pub fn valid_coordinate(&self) -> Option<Coordinate> {
        self.coordinate.filter(Coordinate::is_valid)
    }
}
