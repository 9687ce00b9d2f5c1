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

//! Physical quantities with a unit of measure.
//!
//! Every quantity is a [`Measurement`] that stores its value in the unit it
//! was created with. Arithmetic between measurements of the same quantity
//! converts through the SI unit, so a mass in pounds can be added to a mass
//! in kilograms:
//!
//! ```
//! # use efb_perf::measurements::{Mass, MassUnit};
//! let total = Mass::lb(100.0) + Mass::kg(10.0);
//! assert_eq!(total.unit(), &MassUnit::Pounds);
//! assert!((total.value() - 122.046).abs() < 0.01);
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Div, Mul, Neg, Sub};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub(crate) mod constants;
mod duration;
mod length;
mod mass;
mod speed;

pub use duration::{Duration, DurationUnit};
pub use length::{Length, LengthUnit};
pub use mass::{Mass, MassUnit};
pub use speed::{Speed, SpeedUnit};

/// The physical quantity that a unit measures.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum PhysicalQuantity {
    Length,
    Mass,
    Speed,
    Time,
}

/// A unit in which a physical quantity is measured.
///
/// Each unit knows how to convert a value from and to the quantity's SI unit.
pub trait UnitOfMeasure<T>: Copy + PartialEq + fmt::Debug {
    /// The quantity measured by the unit.
    fn quantity() -> PhysicalQuantity;

    /// The SI unit of the quantity.
    fn si() -> Self;

    /// The symbol of the unit e.g. `kt`.
    fn symbol(&self) -> &'static str;

    /// Converts the SI `value` into the unit `to`.
    fn from_si(value: T, to: &Self) -> T;

    /// Converts the `value` measured in this unit into SI.
    fn to_si(&self, value: &T) -> T;
}

/// A value measured in a unit.
#[derive(Copy, Clone, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Measurement<T, U> {
    pub(crate) value: T,
    pub(crate) unit: U,
}

impl<U> Measurement<f32, U>
where
    U: UnitOfMeasure<f32>,
{
    /// Creates a new measurement of the `value` in the `unit`.
    pub fn new(value: f32, unit: U) -> Self {
        Self { value, unit }
    }

    /// Creates a measurement from an SI `value` converted into the `unit`.
    pub fn from_si(value: f32, unit: U) -> Self {
        Self {
            value: U::from_si(value, &unit),
            unit,
        }
    }

    /// The value in the measurement's unit.
    pub fn value(&self) -> &f32 {
        &self.value
    }

    /// The unit of the measurement.
    pub fn unit(&self) -> &U {
        &self.unit
    }

    /// The value converted into SI.
    pub fn to_si(&self) -> f32 {
        self.unit.to_si(&self.value)
    }

    /// Returns the measurement converted into the `unit`.
    pub fn convert_to(&self, unit: U) -> Self {
        if self.unit == unit {
            *self
        } else {
            Self::from_si(self.to_si(), unit)
        }
    }

    /// Returns the larger of two measurements.
    pub fn max_of(self, other: Self) -> Self {
        if other > self {
            other.convert_to(self.unit)
        } else {
            self
        }
    }

    /// Returns the smaller of two measurements.
    pub fn min_of(self, other: Self) -> Self {
        if other < self {
            other.convert_to(self.unit)
        } else {
            self
        }
    }

    /// Returns `true` if the value is greater than zero.
    pub fn is_positive(&self) -> bool {
        self.value > 0.0
    }

    /// Returns the measurement with the value rounded to the nearest integer
    /// in its own unit.
    pub fn round(self) -> Self {
        Self {
            value: self.value.round(),
            unit: self.unit,
        }
    }

    fn zero() -> Self {
        Self {
            value: 0.0,
            unit: U::si(),
        }
    }
}

impl<U> PartialEq for Measurement<f32, U>
where
    U: UnitOfMeasure<f32>,
{
    fn eq(&self, other: &Self) -> bool {
        if self.unit == other.unit {
            self.value == other.value
        } else {
            self.to_si() == other.to_si()
        }
    }
}

impl<U> PartialOrd for Measurement<f32, U>
where
    U: UnitOfMeasure<f32>,
{
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self.unit == other.unit {
            self.value.partial_cmp(&other.value)
        } else {
            self.to_si().partial_cmp(&other.to_si())
        }
    }
}

impl<U> Add for Measurement<f32, U>
where
    U: UnitOfMeasure<f32>,
{
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self {
            value: self.value + *rhs.convert_to(self.unit).value(),
            unit: self.unit,
        }
    }
}

impl<U> Sub for Measurement<f32, U>
where
    U: UnitOfMeasure<f32>,
{
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self {
            value: self.value - *rhs.convert_to(self.unit).value(),
            unit: self.unit,
        }
    }
}

impl<U> Neg for Measurement<f32, U>
where
    U: UnitOfMeasure<f32>,
{
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self {
            value: -self.value,
            unit: self.unit,
        }
    }
}

impl<U> Mul<f32> for Measurement<f32, U>
where
    U: UnitOfMeasure<f32>,
{
    type Output = Self;

    fn mul(self, rhs: f32) -> Self::Output {
        Self {
            value: self.value * rhs,
            unit: self.unit,
        }
    }
}

impl<U> Div<f32> for Measurement<f32, U>
where
    U: UnitOfMeasure<f32>,
{
    type Output = Self;

    fn div(self, rhs: f32) -> Self::Output {
        Self {
            value: self.value / rhs,
            unit: self.unit,
        }
    }
}

/// The ratio between two measurements of the same quantity.
impl<U> Div for Measurement<f32, U>
where
    U: UnitOfMeasure<f32>,
{
    type Output = f32;

    fn div(self, rhs: Self) -> Self::Output {
        self.value / rhs.convert_to(self.unit).value
    }
}

/// Sums in the unit of the first measurement. An empty sum is zero in the
/// SI unit.
impl<U> Sum for Measurement<f32, U>
where
    U: UnitOfMeasure<f32>,
{
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.reduce(|acc, m| acc + m).unwrap_or_else(Self::zero)
    }
}

impl<'a, U> Sum<&'a Self> for Measurement<f32, U>
where
    U: UnitOfMeasure<f32>,
{
    fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

impl<U> fmt::Display for Measurement<f32, U>
where
    U: UnitOfMeasure<f32>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(precision) = f.precision() {
            write!(f, "{:.precision$} {}", self.value, self.unit.symbol())
        } else {
            write!(f, "{} {}", self.value, self.unit.symbol())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_keeps_lhs_unit() {
        let sum = Length::nm(1.0) + Length::m(1852.0);
        assert_eq!(sum.unit(), &LengthUnit::NauticalMiles);
        assert!((sum.value() - 2.0).abs() < 1e-5);
    }

    #[test]
    fn same_unit_arithmetic_is_exact() {
        assert_eq!(Mass::lb(333.0) + Mass::lb(467.0), Mass::lb(800.0));
        assert_eq!(Mass::lb(800.0) - Mass::lb(467.0), Mass::lb(333.0));
    }

    #[test]
    fn sum_of_empty_iterator_is_zero() {
        let masses: Vec<Mass> = Vec::new();
        assert_eq!(masses.iter().sum::<Mass>(), Mass::kg(0.0));
    }

    #[test]
    fn ratio_of_measurements() {
        assert_eq!(Mass::lb(200.0) / Mass::lb(800.0), 0.25);
    }

    #[test]
    fn min_max_across_units() {
        let a = Speed::kt(40.0);
        let b = Speed::m_s(30.0); // ~58 kt
        assert_eq!(a.max_of(b).unit(), &SpeedUnit::Knots);
        assert!((a.max_of(b).value() - 58.315).abs() < 0.01);
        assert_eq!(a.min_of(b), a);
        assert_eq!(Duration::min(5.0).max_of(Duration::h(0.0)), Duration::min(5.0));
    }

    #[test]
    fn display_with_precision() {
        assert_eq!(format!("{:.1}", Mass::lb(333.333)), "333.3 lb");
        assert_eq!(format!("{}", Speed::kt(120.0)), "120 kt");
    }
}
