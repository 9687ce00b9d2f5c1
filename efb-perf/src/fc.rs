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

//! Flight Computer.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::measurements::Speed;
use crate::Wind;

/// Converts an angle from degree minutes and seconds to decimal.
pub fn dms_to_decimal(degree: u8, minutes: u8, seconds: u8) -> f64 {
    degree as f64 + minutes as f64 / 60.0 + seconds as f64 / 3600.0
}

/// Normalizes a bearing in degrees into `[0, 360)`.
pub fn normalize_bearing(deg: f32) -> f32 {
    let n = deg.rem_euclid(360.0);
    // rem_euclid may round up to exactly 360 for tiny negative inputs
    if n >= 360.0 {
        0.0
    } else {
        n
    }
}

/// Normalizes a relative angle in degrees into `[-180, 180]`.
pub fn normalize_relative(deg: f32) -> f32 {
    let n = normalize_bearing(deg);
    if n > 180.0 {
        n - 360.0
    } else {
        n
    }
}

/// The solved wind triangle of an aircraft flying a course through wind.
///
/// Angles are in degrees. The crosswind is positive if the wind pushes the
/// aircraft to the right of its course, i.e. the wind comes from the left.
#[derive(Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct WindTriangle {
    /// The speed over ground.
    pub gs: Speed,
    /// The true track made good over ground.
    pub track: f32,
    /// The angle between course and track within `[-180, 180]`.
    pub drift: f32,
    /// The wind component against the course. A tailwind is negative.
    pub headwind: Speed,
    /// The wind component across the course.
    pub crosswind: Speed,
}

/// Solves the wind triangle for the `tas` flown on a true `course`.
///
/// Both the aircraft's velocity along the course and the wind's velocity
/// towards its azimuth are added as plane vectors. Bearings are measured
/// clockwise from north and thus remapped to `90 - bearing` to be used as
/// standard angles. Calm wind adds a null vector and leaves the airspeed as
/// ground speed without drift.
///
/// # Examples
///
/// ```
/// # use efb_perf::fc::wind_triangle;
/// # use efb_perf::measurements::Speed;
/// # use efb_perf::Wind;
/// // flying east into a wind from the east
/// let wt = wind_triangle(Speed::kt(120.0), 90.0, &Wind::new(90.0, Speed::kt(20.0)));
/// assert!((wt.gs.to_kt() - 100.0).abs() < 1e-3);
/// assert!((wt.headwind.to_kt() - 20.0).abs() < 1e-3);
/// ```
pub fn wind_triangle(tas: Speed, course: f32, wind: &Wind) -> WindTriangle {
    let tas_kt = tas.to_kt() as f64;
    let ws_kt = wind.speed.to_kt() as f64;
    let course = normalize_bearing(course) as f64;
    let azimuth = wind.azimuth() as f64;

    let (ax, ay) = plane_vector(course, tas_kt);
    let (wx, wy) = plane_vector(azimuth, ws_kt);
    let (gx, gy) = (ax + wx, ay + wy);

    let gs = gx.hypot(gy);
    let track = normalize_bearing((90.0 - gy.atan2(gx).to_degrees()) as f32);
    let drift = normalize_relative(track - course as f32);

    let delta = (azimuth - course).to_radians();
    let headwind = -ws_kt * delta.cos();
    let crosswind = ws_kt * delta.sin();

    WindTriangle {
        gs: Speed::kt(gs as f32),
        track,
        drift,
        headwind: Speed::kt(headwind as f32),
        crosswind: Speed::kt(crosswind as f32),
    }
}

/// Returns the x and y component of a vector pointing to the `bearing`.
fn plane_vector(bearing: f64, magnitude: f64) -> (f64, f64) {
    let theta = (90.0 - bearing).to_radians();
    (magnitude * theta.cos(), magnitude * theta.sin())
}
