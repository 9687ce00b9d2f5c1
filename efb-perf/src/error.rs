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

use std::error;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::measurements::Mass;

pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while planning a flight.
///
/// Planning errors are plain values. A failure at one stop is reported for
/// that stop without aborting the rest of the route, and every error can be
/// turned into a [`Diagnostic`] that a host renders as is.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum Error {
    /// The aircraft lacks the cruise speed or fuel burn needed to compute any
    /// leg.
    MissingPerformanceData { field: &'static str },

    /// Neither a useful load nor the empty and maximum takeoff weight are
    /// known.
    MissingWeightData,

    /// The load exceeds the useful load by `excess`.
    WeightLimitExceeded { excess: Mass },

    /// The fuel on board doesn't reach the destination with the reserve left.
    InsufficientFuelToReachDestination { shortfall: Mass },

    /// No fuel is left to fly out to a search area and back.
    InsufficientFuelForSAR { shortfall: Mass },

    /// The standard passenger weight isn't positive.
    InvalidPassengerWeight,

    /// A string couldn't be parsed.
    UnexpectedString,
}

/// The kind of an [`Error`] without its details.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ErrorKind {
    MissingPerformanceData,
    MissingWeightData,
    WeightLimitExceeded,
    InsufficientFuelToReachDestination,
    InsufficientFuelForSAR,
    InvalidPassengerWeight,
    UnexpectedString,
}

/// The domain an [`Error`] belongs to.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Category {
    Performance,
    Weight,
    Fuel,
    Input,
}

/// How serious an [`Error`] is.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Severity {
    /// Some value can't be computed but planning goes on.
    Warning,
    /// A required input is missing and no dependent value can be computed.
    Error,
    /// The flight can't be conducted safely as planned.
    Critical,
}

/// A structured description of an [`Error`] for presentation.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Diagnostic {
    pub kind: ErrorKind,
    pub category: Category,
    pub severity: Severity,
    pub details: String,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::MissingPerformanceData { .. } => ErrorKind::MissingPerformanceData,
            Self::MissingWeightData => ErrorKind::MissingWeightData,
            Self::WeightLimitExceeded { .. } => ErrorKind::WeightLimitExceeded,
            Self::InsufficientFuelToReachDestination { .. } => {
                ErrorKind::InsufficientFuelToReachDestination
            }
            Self::InsufficientFuelForSAR { .. } => ErrorKind::InsufficientFuelForSAR,
            Self::InvalidPassengerWeight => ErrorKind::InvalidPassengerWeight,
            Self::UnexpectedString => ErrorKind::UnexpectedString,
        }
    }

    pub fn category(&self) -> Category {
        match self {
            Self::MissingPerformanceData { .. } => Category::Performance,
            Self::MissingWeightData | Self::WeightLimitExceeded { .. } => Category::Weight,
            Self::InsufficientFuelToReachDestination { .. }
            | Self::InsufficientFuelForSAR { .. } => Category::Fuel,
            Self::InvalidPassengerWeight | Self::UnexpectedString => Category::Input,
        }
    }

    /// Weight and fuel shortfalls are always critical.
    pub fn severity(&self) -> Severity {
        match self {
            Self::WeightLimitExceeded { .. }
            | Self::InsufficientFuelToReachDestination { .. }
            | Self::InsufficientFuelForSAR { .. } => Severity::Critical,
            Self::MissingPerformanceData { .. } | Self::MissingWeightData => Severity::Error,
            Self::InvalidPassengerWeight | Self::UnexpectedString => Severity::Warning,
        }
    }

    pub fn diagnostic(&self) -> Diagnostic {
        Diagnostic {
            kind: self.kind(),
            category: self.category(),
            severity: self.severity(),
            details: self.to_string(),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingPerformanceData { field } => {
                write!(f, "aircraft performance is missing a positive {field}")
            }
            Self::MissingWeightData => {
                write!(f, "useful load or empty and maximum takeoff weight required")
            }
            Self::WeightLimitExceeded { excess } => {
                write!(f, "useful load exceeded by {:.0}", excess)
            }
            Self::InsufficientFuelToReachDestination { shortfall } => {
                write!(
                    f,
                    "destination can't be reached with reserve, {:.0} short",
                    shortfall
                )
            }
            Self::InsufficientFuelForSAR { shortfall } => {
                write!(f, "no fuel left for the search, {:.0} short", shortfall)
            }
            Self::InvalidPassengerWeight => write!(f, "passenger weight must be positive"),
            Self::UnexpectedString => write!(f, "unexpected string"),
        }
    }
}

impl error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shortfalls_are_critical() {
        let errors = [
            Error::WeightLimitExceeded {
                excess: Mass::lb(10.0),
            },
            Error::InsufficientFuelToReachDestination {
                shortfall: Mass::lb(10.0),
            },
            Error::InsufficientFuelForSAR {
                shortfall: Mass::lb(10.0),
            },
        ];

        for e in errors {
            assert_eq!(e.severity(), Severity::Critical);
        }
    }

    #[test]
    fn diagnostic_carries_details() {
        let d = Error::WeightLimitExceeded {
            excess: Mass::lb(250.0),
        }
        .diagnostic();

        assert_eq!(d.kind, ErrorKind::WeightLimitExceeded);
        assert_eq!(d.category, Category::Weight);
        assert_eq!(d.details, "useful load exceeded by 250 lb");
    }
}
