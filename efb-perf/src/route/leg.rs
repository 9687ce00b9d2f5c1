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

use log::{trace, warn};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::fc::{self, WindTriangle};
use crate::fp::Performance;
use crate::geom::Coordinate;
use crate::measurements::{Duration, Length, LengthUnit, Mass, Speed};
use crate::nd::Waypoint;
use crate::Wind;

/// A leg `from` one landing stop `to` the next.
///
/// The leg may pass navigation-only waypoints, which add to the distance
/// flown. The wind triangle is solved for the course from stop to stop.
///
/// If either stop has no valid coordinate, the leg is _degraded_: its
/// distance, time and fuel are zero and the rest of the route is planned as
/// usual.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Leg {
    from: Waypoint,
    to: Waypoint,
    via: Vec<Waypoint>,
    tas: Speed,
    wind: Wind,
    course: Option<f32>,
    dist: Length,
    wind_triangle: Option<WindTriangle>,
    gs: Option<Speed>,
    gs_limited: bool,
    ete: Duration,
    fuel: Mass,
}

impl Leg {
    /// Creates a leg between two stops through the navigation-only `via`
    /// waypoints.
    pub fn new(
        from: Waypoint,
        via: Vec<Waypoint>,
        to: Waypoint,
        perf: &Performance,
        wind: Wind,
    ) -> Self {
        let (from_coord, to_coord) = match (from.valid_coordinate(), to.valid_coordinate()) {
            (Some(from_coord), Some(to_coord)) => (from_coord, to_coord),
            _ => {
                warn!(
                    "leg {} -> {} degraded: missing or invalid coordinate",
                    from.ident, to.ident
                );
                return Self::degraded(from, via, to, perf, wind);
            }
        };

        let path: Vec<Coordinate> = std::iter::once(from_coord)
            .chain(via.iter().filter_map(|wp| {
                let coord = wp.valid_coordinate();
                if coord.is_none() {
                    warn!("skipping {} without valid coordinate", wp.ident);
                }
                coord
            }))
            .chain(std::iter::once(to_coord))
            .collect();

        let dist: Length = path
            .windows(2)
            .map(|segment| segment[0].dist(&segment[1]))
            .sum::<Length>()
            .convert_to(LengthUnit::NauticalMiles);

        let course = from_coord.bearing(&to_coord);
        let course = if course.is_finite() { course } else { 0.0 };

        let mut leg = Self::with_dist(from, to, dist, course, perf, wind);
        leg.via = via;
        leg
    }

    /// Creates a leg over a known distance flown on the true `course`.
    ///
    /// A negative distance is treated as zero.
    pub fn with_dist(
        from: Waypoint,
        to: Waypoint,
        dist: Length,
        course: f32,
        perf: &Performance,
        wind: Wind,
    ) -> Self {
        let dist = if *dist.value() < 0.0 {
            warn!("negative distance {} treated as zero", dist);
            Length::nm(0.0)
        } else {
            dist
        };

        let wind_triangle = fc::wind_triangle(perf.tas(), course, &wind);
        let gs_limited = wind_triangle.gs < perf.min_gs();
        let gs = if gs_limited {
            warn!(
                "ground speed {:.0} on leg {} -> {} floored to {:.0}",
                wind_triangle.gs, from.ident, to.ident, perf.min_gs()
            );
            perf.min_gs()
        } else {
            wind_triangle.gs
        };

        let ete = dist / gs;
        let fuel = perf.ff() * ete;

        trace!(
            "leg {} -> {}: dist {:.1}, gs {:.0}, ete {:.3}, fuel {:.0}",
            from.ident,
            to.ident,
            dist,
            gs,
            ete,
            fuel
        );

        Self {
            from,
            to,
            via: Vec::new(),
            tas: perf.tas(),
            wind,
            course: Some(course),
            dist,
            wind_triangle: Some(wind_triangle),
            gs: Some(gs),
            gs_limited,
            ete,
            fuel,
        }
    }

    /// Returns the leg flown back from `to` to `from` on the reciprocal
    /// course with the `wind` on the way back.
    pub fn reversed(&self, perf: &Performance, wind: Wind) -> Self {
        let via: Vec<Waypoint> = self.via.iter().rev().cloned().collect();

        let Some(course) = self.course else {
            return Self::degraded(self.to.clone(), via, self.from.clone(), perf, wind);
        };

        let mut leg = Self::with_dist(
            self.to.clone(),
            self.from.clone(),
            self.dist,
            fc::normalize_bearing(course + 180.0),
            perf,
            wind,
        );
        leg.via = via;
        leg
    }

    fn degraded(
        from: Waypoint,
        via: Vec<Waypoint>,
        to: Waypoint,
        perf: &Performance,
        wind: Wind,
    ) -> Self {
        Self {
            from,
            to,
            via,
            tas: perf.tas(),
            wind,
            course: None,
            dist: Length::nm(0.0),
            wind_triangle: None,
            gs: None,
            gs_limited: false,
            ete: Duration::h(0.0),
            fuel: Mass::lb(0.0),
        }
    }

    /// The stop from which the leg starts.
    pub fn from(&self) -> &Waypoint {
        &self.from
    }

    /// The stop at which the leg ends.
    pub fn to(&self) -> &Waypoint {
        &self.to
    }

    /// The navigation-only waypoints passed on the leg.
    pub fn via(&self) -> &[Waypoint] {
        &self.via
    }

    /// The true airspeed.
    pub fn tas(&self) -> &Speed {
        &self.tas
    }

    /// The wind taken into account.
    pub fn wind(&self) -> &Wind {
        &self.wind
    }

    /// The true course from stop to stop.
    pub fn course(&self) -> Option<f32> {
        self.course
    }

    /// The distance flown on the leg.
    pub fn dist(&self) -> &Length {
        &self.dist
    }

    pub fn wind_triangle(&self) -> Option<&WindTriangle> {
        self.wind_triangle.as_ref()
    }

    /// The ground speed used to compute the time enroute.
    ///
    /// This is the ground speed of the wind triangle but not less than the
    /// performance's minimum ground speed.
    pub fn gs(&self) -> Option<&Speed> {
        self.gs.as_ref()
    }

    /// Returns `true` if the ground speed was raised to the minimum.
    pub fn is_gs_limited(&self) -> bool {
        self.gs_limited
    }

    /// The drift angle in degrees.
    pub fn drift(&self) -> Option<f32> {
        self.wind_triangle.map(|wt| wt.drift)
    }

    pub fn headwind(&self) -> Option<Speed> {
        self.wind_triangle.map(|wt| wt.headwind)
    }

    pub fn crosswind(&self) -> Option<Speed> {
        self.wind_triangle.map(|wt| wt.crosswind)
    }

    /// The estimated time enroute.
    pub fn ete(&self) -> &Duration {
        &self.ete
    }

    /// The fuel burned on the leg.
    pub fn fuel(&self) -> &Mass {
        &self.fuel
    }

    /// Returns `true` if a stop is missing a valid coordinate.
    pub fn is_degraded(&self) -> bool {
        self.course.is_none()
    }
}
