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

use std::fmt;
use std::str::FromStr;

use log::warn;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::fc;
use crate::measurements::Speed;

/// Wind with the direction it's blowing from.
///
/// The direction follows the meteorological convention and is the true
/// bearing in degrees _from_ which the wind blows.
#[derive(Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Wind {
    /// Direction in degrees within `[0, 360)` the wind is coming from.
    pub direction: f32,
    pub speed: Speed,
}

impl Wind {
    /// Creates a new wind from the `direction` in degrees and the `speed`.
    ///
    /// The direction is normalized into `[0, 360)`. A negative speed has no
    /// meaning and is treated as calm.
    pub fn new(direction: f32, speed: Speed) -> Self {
        let speed = if *speed.value() < 0.0 {
            warn!("negative wind speed {} treated as calm", speed);
            Speed::kt(0.0)
        } else {
            speed
        };

        Self {
            direction: fc::normalize_bearing(direction),
            speed,
        }
    }

    /// No wind at all.
    pub fn calm() -> Self {
        Self {
            direction: 0.0,
            speed: Speed::kt(0.0),
        }
    }

    /// The direction in degrees to which the wind is blowing.
    pub fn azimuth(&self) -> f32 {
        fc::normalize_bearing(self.direction + 180.0)
    }
}

impl Default for Wind {
    fn default() -> Self {
        Self::calm()
    }
}

impl FromStr for Wind {
    type Err = Error;

    /// Parses a wind as it's encoded in a METAR e.g. `27015KT`.
    ///
    /// The first three figures are the direction followed by two or three
    /// figures of speed and the unit `KT` or `MPS`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (value, to_speed): (&str, fn(f32) -> Speed) = if let Some(v) = s.strip_suffix("KT") {
            (v, Speed::kt)
        } else if let Some(v) = s.strip_suffix("MPS") {
            (v, Speed::m_s)
        } else {
            return Err(Error::UnexpectedString);
        };

        if !(5..=6).contains(&value.len()) || !value.bytes().all(|b| b.is_ascii_digit()) {
            return Err(Error::UnexpectedString);
        }

        let direction = value[0..3]
            .parse::<u16>()
            .map_err(|_| Error::UnexpectedString)?;
        let speed = value[3..]
            .parse::<u16>()
            .map_err(|_| Error::UnexpectedString)?;

        if direction > 360 {
            return Err(Error::UnexpectedString);
        }

        Ok(Self::new(direction as f32, to_speed(speed as f32)))
    }
}

impl fmt::Display for Wind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:03.0}{:02.0}KT",
            self.direction.round(),
            self.speed.to_kt().round()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wind_from_str() {
        assert_eq!(
            "27015KT".parse::<Wind>(),
            Ok(Wind::new(270.0, Speed::kt(15.0)))
        );
        assert_eq!(
            "090105KT".parse::<Wind>(),
            Ok(Wind::new(90.0, Speed::kt(105.0)))
        );
        assert_eq!(
            "36010MPS".parse::<Wind>(),
            Ok(Wind::new(0.0, Speed::m_s(10.0)))
        );
        assert_eq!("2701KT".parse::<Wind>(), Err(Error::UnexpectedString));
        assert_eq!("27015".parse::<Wind>(), Err(Error::UnexpectedString));
        assert_eq!("45015KT".parse::<Wind>(), Err(Error::UnexpectedString));
    }

    #[test]
    fn azimuth_is_opposite_of_direction() {
        assert_eq!(Wind::new(90.0, Speed::kt(20.0)).azimuth(), 270.0);
        assert_eq!(Wind::new(270.0, Speed::kt(20.0)).azimuth(), 90.0);
    }

    #[test]
    fn negative_speed_is_calm() {
        assert_eq!(Wind::new(90.0, Speed::kt(-5.0)).speed, Speed::kt(0.0));
    }

    #[test]
    fn display_wind() {
        assert_eq!(Wind::new(90.0, Speed::kt(9.0)).to_string(), "09009KT");
    }
}
