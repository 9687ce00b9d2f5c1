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

//! Inputs as supplied by the host.

use efb_perf::fp::{ContingencyAllocation, FuelPolicy, Reserve, SarMission, SarTask};
use efb_perf::measurements::{Duration, Mass, Speed};
use efb_perf::nd::{Waypoint, WaypointRole};
use efb_perf::prelude::{Aircraft, Coordinate, Weather};
use efb_perf::{FuelFlow, Wind};
use serde::Deserialize;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct AircraftInput {
    cruise_speed_kts: f32,
    fuel_burn_lbs_per_hr: f32,
    useful_load_lbs: Option<f32>,
    empty_weight_lbs: Option<f32>,
    max_takeoff_weight_lbs: Option<f32>,
    max_passengers: Option<u16>,
    hover_fuel_flow_lbs_per_hr: Option<f32>,
    min_ground_speed_kts: Option<f32>,
}

impl From<AircraftInput> for Aircraft {
    fn from(input: AircraftInput) -> Self {
        let mut aircraft = Aircraft::new(
            Speed::kt(input.cruise_speed_kts),
            FuelFlow::lb_per_h(input.fuel_burn_lbs_per_hr),
        );
        aircraft.useful_load = input.useful_load_lbs.map(Mass::lb);
        aircraft.empty_weight = input.empty_weight_lbs.map(Mass::lb);
        aircraft.max_takeoff_weight = input.max_takeoff_weight_lbs.map(Mass::lb);
        aircraft.max_passengers = input.max_passengers;
        aircraft.hover_fuel_flow = input.hover_fuel_flow_lbs_per_hr.map(FuelFlow::lb_per_h);
        aircraft.min_gs = input.min_ground_speed_kts.map(Speed::kt);
        aircraft
    }
}

#[derive(Deserialize)]
pub(crate) enum ReserveMethod {
    Fixed,
    Percent,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct FuelPolicyInput {
    taxi_fuel_lbs: f32,
    contingency_fuel_percent: f32,
    reserve_method: ReserveMethod,
    /// Pounds with a fixed reserve or percent of the planned fuel.
    reserve_fuel_lbs: f32,
    deck_time_per_stop_min: f32,
    deck_fuel_flow_lbs_per_hr: f32,
    passenger_weight_lbs: f32,
    #[serde(default)]
    contingency_allocation: ContingencyAllocation,
}

impl From<FuelPolicyInput> for FuelPolicy {
    fn from(input: FuelPolicyInput) -> Self {
        FuelPolicy {
            taxi: Mass::lb(input.taxi_fuel_lbs),
            contingency_percent: input.contingency_fuel_percent,
            reserve: match input.reserve_method {
                ReserveMethod::Fixed => Reserve::Fixed(Mass::lb(input.reserve_fuel_lbs)),
                ReserveMethod::Percent => Reserve::Percent(input.reserve_fuel_lbs),
            },
            deck_time: Duration::min(input.deck_time_per_stop_min),
            deck_fuel_flow: FuelFlow::lb_per_h(input.deck_fuel_flow_lbs_per_hr),
            passenger_weight: Mass::lb(input.passenger_weight_lbs),
            contingency_allocation: input.contingency_allocation,
        }
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct WaypointInput {
    id: String,
    #[serde(default)]
    name: Option<String>,
    lat: Option<f64>,
    lon: Option<f64>,
    #[serde(default)]
    role: WaypointRole,
}

impl From<WaypointInput> for Waypoint {
    fn from(input: WaypointInput) -> Self {
        let coordinate = match (input.lat, input.lon) {
            (Some(lat), Some(lon)) => Some(Coordinate::new(lat, lon)),
            _ => None,
        };
        let name = input.name.unwrap_or_else(|| input.id.clone());
        Waypoint::new(input.id, name, coordinate, input.role)
    }
}

#[derive(Deserialize, Clone, Copy)]
#[serde(rename_all = "camelCase")]
pub(crate) struct WindInput {
    wind_direction_deg: f32,
    wind_speed_kts: f32,
}

impl From<WindInput> for Wind {
    fn from(input: WindInput) -> Self {
        Wind::new(input.wind_direction_deg, Speed::kt(input.wind_speed_kts))
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct WeatherInput {
    #[serde(flatten)]
    wind: WindInput,
    #[serde(default)]
    leg_winds: Vec<Option<WindInput>>,
}

impl From<WeatherInput> for Weather {
    fn from(input: WeatherInput) -> Self {
        Weather {
            wind: input.wind.into(),
            leg_winds: input
                .leg_winds
                .into_iter()
                .map(|wind| wind.map(Wind::from))
                .collect(),
        }
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SarInput {
    takeoff_fuel_lbs: f32,
    #[serde(default)]
    equipment_weight_lbs: f32,
    task_fuel_lbs: Option<f32>,
    task_duration_min: Option<f32>,
    reserve_fuel_lbs: Option<f32>,
}

impl From<SarInput> for SarMission {
    fn from(input: SarInput) -> Self {
        let task = match (input.task_fuel_lbs, input.task_duration_min) {
            (Some(fuel), _) => SarTask::Fuel(Mass::lb(fuel)),
            (None, Some(min)) => SarTask::Duration(Duration::min(min)),
            (None, None) => SarTask::Fuel(Mass::lb(0.0)),
        };

        let mission = SarMission::new(Mass::lb(input.takeoff_fuel_lbs), task)
            .with_equipment(Mass::lb(input.equipment_weight_lbs));

        match input.reserve_fuel_lbs {
            Some(reserve) => mission.with_reserve(Mass::lb(reserve)),
            None => mission,
        }
    }
}
