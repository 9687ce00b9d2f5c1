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

//! Results as plain data for the host.

use efb_perf::error::Diagnostic;
use efb_perf::fp::{FuelBreakdown, PassengerCapacity, ReturnStrategy, SarRadius, StopCard, StopRole};
use efb_perf::route::TotalsToLeg;
use serde::Serialize;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct FuelBreakdownOutput {
    trip_fuel_lbs: f32,
    contingency_fuel_lbs: f32,
    deck_fuel_lbs: f32,
    reserve_fuel_lbs: f32,
}

impl From<&FuelBreakdown> for FuelBreakdownOutput {
    fn from(fuel: &FuelBreakdown) -> Self {
        Self {
            trip_fuel_lbs: fuel.trip.to_lb(),
            contingency_fuel_lbs: fuel.contingency.to_lb(),
            deck_fuel_lbs: fuel.deck.to_lb(),
            reserve_fuel_lbs: fuel.reserve.to_lb(),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct PassengerOutput {
    max_passengers: u16,
    available_weight_lbs: f32,
    used_by_passengers_lbs: f32,
    remaining_weight_lbs: f32,
    condition: Option<Diagnostic>,
}

impl From<&PassengerCapacity> for PassengerOutput {
    fn from(capacity: &PassengerCapacity) -> Self {
        Self {
            max_passengers: capacity.max_passengers,
            available_weight_lbs: capacity.available_weight.to_lb(),
            used_by_passengers_lbs: capacity.used_by_passengers.to_lb(),
            remaining_weight_lbs: capacity.remaining_weight.to_lb(),
            condition: capacity.condition.as_ref().map(|e| e.diagnostic()),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct StopCardOutput {
    index: usize,
    id: String,
    name: String,
    role: StopRole,
    cumulative_distance_nm: f32,
    cumulative_time_hr: f32,
    leg_fuel_lbs: f32,
    total_fuel_required_lbs: f32,
    fuel: FuelBreakdownOutput,
    passengers: PassengerOutput,
}

impl From<&StopCard> for StopCardOutput {
    fn from(stop: &StopCard) -> Self {
        Self {
            index: stop.index,
            id: stop.ident.clone(),
            name: stop.name.clone(),
            role: stop.role,
            cumulative_distance_nm: stop.cumulative_dist.to_nm(),
            cumulative_time_hr: stop.cumulative_ete.to_h(),
            leg_fuel_lbs: stop.leg_fuel.to_lb(),
            total_fuel_required_lbs: stop.total_fuel_required.to_lb(),
            fuel: (&stop.fuel).into(),
            passengers: (&stop.capacity).into(),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct TotalsOutput {
    distance_nm: f32,
    time_hr: f32,
    fuel_lbs: f32,
}

impl From<&TotalsToLeg> for TotalsOutput {
    fn from(totals: &TotalsToLeg) -> Self {
        Self {
            distance_nm: totals.dist().to_nm(),
            time_hr: totals.ete().to_h(),
            fuel_lbs: totals.fuel().to_lb(),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SarOutput {
    operational_radius_nm: f32,
    radius_flight_time_hr: f32,
    one_way_time_hr: f32,
    total_endurance_hr: f32,
    operational_endurance_hr: f32,
    task_endurance_hr: f32,
    takeoff_fuel_lbs: f32,
    reserve_fuel_lbs: f32,
    task_fuel_lbs: f32,
    route_fuel_lbs: f32,
    return_fuel_lbs: f32,
    usable_fuel_lbs: f32,
    return_strategy: ReturnStrategy,
}

impl From<&SarRadius> for SarOutput {
    fn from(sar: &SarRadius) -> Self {
        Self {
            operational_radius_nm: sar.radius.to_nm(),
            radius_flight_time_hr: sar.radius_flight_time.to_h(),
            one_way_time_hr: sar.one_way.to_h(),
            total_endurance_hr: sar.endurance.total.to_h(),
            operational_endurance_hr: sar.endurance.operational.to_h(),
            task_endurance_hr: sar.endurance.task.to_h(),
            takeoff_fuel_lbs: sar.fuel.takeoff.to_lb(),
            reserve_fuel_lbs: sar.fuel.reserve.to_lb(),
            task_fuel_lbs: sar.fuel.task.to_lb(),
            route_fuel_lbs: sar.fuel.route.to_lb(),
            return_fuel_lbs: sar.fuel.return_fuel.to_lb(),
            usable_fuel_lbs: sar.fuel.usable.to_lb(),
            return_strategy: sar.return_strategy,
        }
    }
}

/// Either a result or the diagnostic why it couldn't be computed.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) enum Outcome<T> {
    Ok(T),
    Error(Diagnostic),
}
