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

use log::{debug, trace, warn};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::fp::Performance;
use crate::measurements::Mass;
use crate::nd::{Waypoint, Waypoints};
use crate::Wind;

mod accumulator;
mod leg;

pub use accumulator::TotalsToLeg;
pub use leg::Leg;

/// The wind on the route.
///
/// The `wind` is used on every leg unless `leg_winds` holds an override for
/// the leg's index.
#[derive(Clone, PartialEq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Weather {
    pub wind: Wind,
    #[cfg_attr(feature = "serde", serde(default))]
    pub leg_winds: Vec<Option<Wind>>,
}

impl Weather {
    pub fn new(wind: Wind) -> Self {
        Self {
            wind,
            leg_winds: Vec::new(),
        }
    }

    /// Overrides the wind on the leg with index `leg`.
    pub fn with_leg_wind(mut self, leg: usize, wind: Wind) -> Self {
        if self.leg_winds.len() <= leg {
            self.leg_winds.resize(leg + 1, None);
        }
        self.leg_winds[leg] = Some(wind);
        self
    }

    /// Returns the wind on the leg with index `leg`.
    pub fn wind_on_leg(&self, leg: usize) -> Wind {
        self.leg_winds
            .get(leg)
            .copied()
            .flatten()
            .unwrap_or(self.wind)
    }

    /// Returns the weather for the route with `legs` flown in reverse order.
    fn reversed(&self, legs: usize) -> Self {
        Self {
            wind: self.wind,
            leg_winds: (0..legs)
                .rev()
                .map(|leg| self.leg_winds.get(leg).copied().flatten())
                .collect(),
        }
    }
}

/// A route from the departure over intermediate stops to the destination.
///
/// The route is built from the waypoints supplied by the host. Every landing
/// stop starts a new [`Leg`]; navigation-only waypoints between two stops
/// shape the path of that leg. Navigation-only waypoints before the first or
/// after the last stop have no leg to shape and are ignored.
///
/// # Examples
///
/// ```
/// # use efb_perf::prelude::*;
/// # use efb_perf::coord;
/// let waypoints = vec![
///     Waypoint::landing_stop("A", coord!(0.0, 0.0)),
///     Waypoint::navigation("N", coord!(0.2, 0.5)),
///     Waypoint::landing_stop("B", coord!(0.0, 1.0)),
/// ];
/// let perf = Performance::new(Speed::kt(120.0), FuelFlow::lb_per_h(800.0));
/// let route = Route::build(waypoints, &perf, &Weather::default());
///
/// assert_eq!(route.stops().len(), 2);
/// assert_eq!(route.legs().len(), 1);
/// assert_eq!(route.legs()[0].via().len(), 1);
/// ```
#[derive(Clone, PartialEq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Route {
    waypoints: Waypoints,
    stops: Vec<Waypoint>,
    legs: Vec<Leg>,
    perf: Option<Performance>,
    weather: Weather,
    alternate: Option<Waypoint>,
}

impl Route {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the route's legs from the `waypoints` with the performance and
    /// weather.
    pub fn build(waypoints: Waypoints, perf: &Performance, weather: &Weather) -> Self {
        let mut stops: Vec<Waypoint> = Vec::new();
        let mut legs: Vec<Leg> = Vec::new();
        let mut via: Vec<Waypoint> = Vec::new();

        for wp in &waypoints {
            if !wp.is_landing_stop() {
                if stops.is_empty() {
                    warn!("navigation waypoint {} before departure is ignored", wp.ident);
                } else {
                    via.push(wp.clone());
                }
                continue;
            }

            if let Some(from) = stops.last() {
                let wind = weather.wind_on_leg(legs.len());
                trace!("leg {} wind {}", legs.len(), wind);
                legs.push(Leg::new(
                    from.clone(),
                    std::mem::take(&mut via),
                    wp.clone(),
                    perf,
                    wind,
                ));
            }

            stops.push(wp.clone());
        }

        for wp in &via {
            warn!("navigation waypoint {} after destination is ignored", wp.ident);
        }

        let route = Self {
            waypoints,
            stops,
            legs,
            perf: Some(*perf),
            weather: weather.clone(),
            alternate: None,
        };

        debug!(
            "route built: {} stops, {} legs, {} degraded",
            route.stops.len(),
            route.legs.len(),
            route.legs.iter().filter(|leg| leg.is_degraded()).count()
        );

        route
    }

    /// Clears the waypoints, legs and alternate.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// The waypoints from which the route was built.
    pub fn waypoints(&self) -> &[Waypoint] {
        &self.waypoints
    }

    /// The landing stops in order of the route.
    pub fn stops(&self) -> &[Waypoint] {
        &self.stops
    }

    pub fn legs(&self) -> &[Leg] {
        &self.legs
    }

    pub fn perf(&self) -> Option<&Performance> {
        self.perf.as_ref()
    }

    pub fn weather(&self) -> &Weather {
        &self.weather
    }

    /// Returns the departure, which is the first landing stop.
    pub fn departure(&self) -> Option<&Waypoint> {
        self.stops.first()
    }

    /// Returns the destination, which is the last landing stop.
    pub fn destination(&self) -> Option<&Waypoint> {
        self.stops.last()
    }

    /// Sets an alternate on the route.
    ///
    /// The alternate is removed by setting it to `None`.
    pub fn set_alternate(&mut self, alternate: Option<Waypoint>) {
        self.alternate = alternate;
    }

    /// Returns the leg from the destination to the alternate.
    ///
    /// The leg is flown with the wind of the final leg.
    pub fn alternate(&self) -> Option<Leg> {
        let destination = self.destination()?.clone();
        let alternate = self.alternate.clone()?;
        let perf = self.perf.as_ref()?;
        let wind = self.weather.wind_on_leg(self.legs.len().saturating_sub(1));
        Some(Leg::new(destination, Vec::new(), alternate, perf, wind))
    }

    /// Returns the route flown back from the destination to the departure.
    ///
    /// The stops and navigation waypoints are visited in reverse order and
    /// each leg is flown on the reciprocal course with the wind of the leg
    /// it's flown back on.
    pub fn reversed(&self) -> Self {
        let Some(perf) = self.perf.as_ref() else {
            return Self::default();
        };

        let legs = self
            .legs
            .iter()
            .enumerate()
            .rev()
            .map(|(i, leg)| leg.reversed(perf, self.weather.wind_on_leg(i)))
            .collect();

        let mut route = Self::from_legs(legs, perf, &self.weather.reversed(self.legs.len()));
        route.alternate = self.alternate.clone();
        route
    }

    /// Creates a route from legs that are already computed.
    ///
    /// Each leg must start at the stop where the previous leg ended.
    pub fn from_legs(legs: Vec<Leg>, perf: &Performance, weather: &Weather) -> Self {
        let mut waypoints: Waypoints = Vec::with_capacity(legs.len() + 1);
        let mut stops: Vec<Waypoint> = Vec::with_capacity(legs.len() + 1);

        if let Some(first) = legs.first() {
            waypoints.push(first.from().clone());
            stops.push(first.from().clone());
        }

        for leg in &legs {
            waypoints.extend(leg.via().iter().cloned());
            waypoints.push(leg.to().clone());
            stops.push(leg.to().clone());
        }

        Self {
            waypoints,
            stops,
            legs,
            perf: Some(*perf),
            weather: weather.clone(),
            alternate: None,
        }
    }

    /// Returns an iterator that accumulates totals progressively through each
    /// leg of the route.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use efb_perf::route::Route;
    /// # fn accumulate_legs(route: Route) {
    /// for (i, totals) in route.accumulate_legs().enumerate() {
    ///     println!("Leg {}: Total distance: {}, Total fuel: {}",
    ///              i + 1, totals.dist(), totals.fuel());
    /// }
    /// # }
    /// ```
    pub fn accumulate_legs(&self) -> impl Iterator<Item = TotalsToLeg> + '_ {
        self.legs
            .iter()
            .scan(None, |totals_to_leg: &mut Option<TotalsToLeg>, leg| {
                *totals_to_leg = Some(match totals_to_leg.as_ref() {
                    None => TotalsToLeg::new(leg),
                    Some(prev) => prev.accumulate(leg),
                });
                *totals_to_leg
            })
    }

    /// Returns the totals of the entire route.
    pub fn totals(&self) -> Option<TotalsToLeg> {
        self.accumulate_legs().last()
    }

    /// The fuel burned on all legs in pounds.
    pub fn trip_fuel(&self) -> Mass {
        self.legs
            .iter()
            .fold(Mass::lb(0.0), |fuel, leg| fuel + *leg.fuel())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom::Coordinate;
    use crate::measurements::{Length, MassUnit, Speed};
    use crate::nd::WaypointRole;
    use crate::FuelFlow;

    fn perf() -> Performance {
        Performance::new(Speed::kt(120.0), FuelFlow::lb_per_h(800.0))
    }

    fn waypoints() -> Waypoints {
        vec![
            Waypoint::navigation("X", Coordinate::new(-0.5, 0.0)),
            Waypoint::landing_stop("A", Coordinate::new(0.0, 0.0)),
            Waypoint::navigation("N", Coordinate::new(0.3, 0.5)),
            Waypoint::landing_stop("B", Coordinate::new(0.0, 1.0)),
            Waypoint::landing_stop("C", Coordinate::new(0.0, 2.0)),
            Waypoint::navigation("Y", Coordinate::new(0.5, 2.0)),
        ]
    }

    #[test]
    fn legs_between_landing_stops() {
        let route = Route::build(waypoints(), &perf(), &Weather::default());

        let idents: Vec<&str> = route.stops().iter().map(|wp| wp.ident.as_str()).collect();
        assert_eq!(idents, ["A", "B", "C"]);
        assert_eq!(route.legs().len(), 2);
        assert_eq!(route.legs()[0].via()[0].ident, "N");
        assert!(route.legs()[1].via().is_empty());
    }

    #[test]
    fn totals_sum_up_legs() {
        let route = Route::build(waypoints(), &perf(), &Weather::default());
        let totals = route.totals().unwrap();

        let fuel: f32 = route.legs().iter().map(|leg| leg.fuel().to_lb()).sum();
        assert!((totals.fuel().to_lb() - fuel).abs() < 1e-2);
        assert!((route.trip_fuel().to_lb() - fuel).abs() < 1e-2);
        assert_eq!(route.accumulate_legs().count(), 2);
    }

    #[test]
    fn leg_wind_override() {
        let headwind = Wind::new(90.0, Speed::kt(30.0));
        let weather = Weather::default().with_leg_wind(1, headwind);
        let route = Route::build(waypoints(), &perf(), &weather);

        assert_eq!(route.legs()[0].wind(), &Wind::calm());
        assert_eq!(route.legs()[1].wind(), &headwind);
        assert!(route.legs()[1].gs().unwrap().to_kt() < 100.0);
    }

    #[test]
    fn reversed_route_flies_back() {
        let weather = Weather::new(Wind::new(90.0, Speed::kt(20.0)));
        let route = Route::build(waypoints(), &perf(), &weather);
        let back = route.reversed();

        let idents: Vec<&str> = back.stops().iter().map(|wp| wp.ident.as_str()).collect();
        assert_eq!(idents, ["C", "B", "A"]);
        assert_eq!(back.legs()[1].via()[0].ident, "N");
        // the wind from the east is a tailwind on the way back
        assert!(back.trip_fuel() < route.trip_fuel());
    }

    #[test]
    fn reversed_route_keeps_leg_winds() {
        let headwind = Wind::new(90.0, Speed::kt(30.0));
        let weather = Weather::default().with_leg_wind(0, headwind);
        let back = Route::build(waypoints(), &perf(), &weather).reversed();

        assert_eq!(back.legs()[0].wind(), &Wind::calm());
        assert_eq!(back.legs()[1].wind(), &headwind);
    }

    #[test]
    fn alternate_leg_from_destination() {
        let mut route = Route::build(waypoints(), &perf(), &Weather::default());
        assert!(route.alternate().is_none());

        route.set_alternate(Some(Waypoint::landing_stop("ALT", Coordinate::new(0.0, 2.5))));
        let leg = route.alternate().unwrap();
        assert_eq!(leg.from().ident, "C");
        assert_eq!(leg.to().ident, "ALT");
        assert!((leg.dist().to_nm() - 30.0).abs() < 0.5);
    }

    #[test]
    fn degraded_leg_does_not_abort_route() {
        let mut waypoints = waypoints();
        waypoints[3] = Waypoint::new("B", "Bravo", None, WaypointRole::LandingStop);
        let route = Route::build(waypoints, &perf(), &Weather::default());

        assert_eq!(route.legs().len(), 2);
        assert!(route.legs().iter().all(Leg::is_degraded));
        assert_eq!(route.trip_fuel(), Mass::lb(0.0));
    }

    #[test]
    fn route_from_legs() {
        let a = Waypoint::landing_stop("A", Coordinate::new(0.0, 0.0));
        let b = Waypoint::landing_stop("B", Coordinate::new(0.0, 1.0));
        let c = Waypoint::landing_stop("C", Coordinate::new(0.0, 2.0));
        let legs = vec![
            Leg::with_dist(a, b.clone(), Length::nm(50.0), 90.0, &perf(), Wind::calm()),
            Leg::with_dist(b, c, Length::nm(70.0), 90.0, &perf(), Wind::calm()),
        ];
        let route = Route::from_legs(legs, &perf(), &Weather::default());

        assert_eq!(route.stops().len(), 3);
        assert!((route.trip_fuel().to_lb() - 800.0).abs() < 0.01);

        let back = route.reversed();
        assert_eq!(back.departure().map(|wp| wp.ident.as_str()), Some("C"));
        assert_eq!(back.legs()[0].dist(), &Length::nm(70.0));
        assert!((back.trip_fuel().to_lb() - 800.0).abs() < 0.01);
    }

    #[test]
    fn empty_route() {
        let route = Route::build(Vec::new(), &perf(), &Weather::default());
        assert!(route.totals().is_none());
        assert_eq!(route.trip_fuel(), Mass::lb(0.0));
        assert_eq!(route.trip_fuel().unit(), &MassUnit::Pounds);
        assert_eq!(format!("{}", route.trip_fuel()), "0 lb");
        assert!(route.reversed().legs().is_empty());
    }
}
