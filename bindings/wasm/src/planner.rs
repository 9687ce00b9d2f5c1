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

use efb_perf::error::Error;
use efb_perf::fp::{FlightPlanning, FlightPlanningBuilder, FuelPolicy, SarMission};
use efb_perf::measurements::Mass;
use efb_perf::nd::Waypoint;
use efb_perf::prelude::{Aircraft, Weather, FMS};
use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::input::{AircraftInput, FuelPolicyInput, SarInput, WaypointInput, WeatherInput};
use crate::output::{Outcome, SarOutput, StopCardOutput, TotalsOutput};

/// Plans a multi-stop flight.
///
/// Every setter recomputes the route and the fuel schedule. Failing setters
/// throw a diagnostic `{ kind, category, severity, details }`.
#[wasm_bindgen]
#[derive(Default)]
pub struct FlightPlanner {
    fms: FMS,
    builder: FlightPlanningBuilder,
}

#[wasm_bindgen]
impl FlightPlanner {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self::default()
    }

    #[wasm_bindgen(js_name = setAircraft)]
    pub fn set_aircraft(&mut self, aircraft: JsValue) -> Result<(), JsValue> {
        let aircraft: AircraftInput = serde_wasm_bindgen::from_value(aircraft)?;
        self.builder.aircraft(Aircraft::from(aircraft));
        self.update_flight_planning()
    }

    #[wasm_bindgen(js_name = setFuelPolicy)]
    pub fn set_fuel_policy(&mut self, policy: JsValue) -> Result<(), JsValue> {
        let policy: FuelPolicyInput = serde_wasm_bindgen::from_value(policy)?;
        self.builder.policy(FuelPolicy::from(policy));
        self.update_flight_planning()
    }

    #[wasm_bindgen(js_name = setCargo)]
    pub fn set_cargo(&mut self, cargo_lbs: f32) -> Result<(), JsValue> {
        self.builder.cargo(Mass::lb(cargo_lbs));
        self.update_flight_planning()
    }

    #[wasm_bindgen(js_name = setWaypoints)]
    pub fn set_waypoints(&mut self, waypoints: JsValue) -> Result<(), JsValue> {
        let waypoints: Vec<WaypointInput> = serde_wasm_bindgen::from_value(waypoints)?;
        let waypoints: Vec<Waypoint> = waypoints.into_iter().map(Waypoint::from).collect();
        self.fms
            .modify_waypoints(|wps| *wps = waypoints)
            .map_err(to_js_error)
    }

    #[wasm_bindgen(js_name = setWeather)]
    pub fn set_weather(&mut self, weather: JsValue) -> Result<(), JsValue> {
        let weather: WeatherInput = serde_wasm_bindgen::from_value(weather)?;
        self.fms
            .set_weather(Weather::from(weather))
            .map_err(to_js_error)
    }

    /// Sets the alternate or removes it if `null` or `undefined`.
    #[wasm_bindgen(js_name = setAlternate)]
    pub fn set_alternate(&mut self, alternate: JsValue) -> Result<(), JsValue> {
        let alternate: Option<WaypointInput> = serde_wasm_bindgen::from_value(alternate)?;
        self.fms
            .set_alternate(alternate.map(Waypoint::from))
            .map_err(to_js_error)
    }

    /// Returns the cards of all landing stops.
    #[wasm_bindgen(js_name = stopCards)]
    pub fn stop_cards(&self) -> Result<JsValue, JsValue> {
        let cards: Vec<StopCardOutput> = self
            .flight_planning()
            .and_then(FlightPlanning::schedule)
            .map(|schedule| schedule.stops().iter().map(StopCardOutput::from).collect())
            .unwrap_or_default();
        to_js_value(&cards)
    }

    /// Returns the distance, time and fuel of the route.
    pub fn totals(&self) -> Result<JsValue, JsValue> {
        let totals = self
            .flight_planning()
            .and_then(FlightPlanning::totals)
            .map(TotalsOutput::from);
        to_js_value(&totals)
    }

    /// Returns the fuel required at departure plus taxi fuel in pounds.
    #[wasm_bindgen(js_name = blockFuel)]
    pub fn block_fuel(&self) -> Option<f32> {
        self.flight_planning()
            .and_then(FlightPlanning::schedule)
            .and_then(|schedule| schedule.block_fuel())
            .map(|fuel| fuel.to_lb())
    }

    /// Returns the route as GeoJSON string.
    #[wasm_bindgen(js_name = routeGeoJson)]
    pub fn route_geojson(&self) -> String {
        self.fms.route().to_geojson().to_string()
    }

    /// Solves the operational radius of a search and rescue mission.
    ///
    /// Returns `{ ok: result }` or `{ error: diagnostic }` and `undefined`
    /// if no aircraft or fuel policy is set.
    pub fn sar(&self, mission: JsValue) -> Result<JsValue, JsValue> {
        let mission: SarInput = serde_wasm_bindgen::from_value(mission)?;
        let outcome = self
            .fms
            .sar(&SarMission::from(mission))
            .map(|result| match result {
                Ok(sar) => Outcome::Ok(SarOutput::from(&sar)),
                Err(e) => Outcome::Error(e.diagnostic()),
            });
        to_js_value(&outcome)
    }
}

impl FlightPlanner {
    fn update_flight_planning(&mut self) -> Result<(), JsValue> {
        self.fms
            .set_flight_planning(self.builder.clone())
            .map_err(to_js_error)
    }

    fn flight_planning(&self) -> Option<&FlightPlanning> {
        self.fms.flight_planning()
    }
}

fn to_js_value<T: Serialize + ?Sized>(value: &T) -> Result<JsValue, JsValue> {
    Ok(serde_wasm_bindgen::to_value(value)?)
}

fn to_js_error(e: Error) -> JsValue {
    serde_wasm_bindgen::to_value(&e.diagnostic()).unwrap_or_else(|_| JsValue::from_str(&e.to_string()))
}
