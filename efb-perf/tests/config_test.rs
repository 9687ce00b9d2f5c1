// SPDX-License-Identifier: Apache-2.0
// Copyright 2026 Joe Pearson
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

#![cfg(feature = "serde")]

use efb_perf::measurements::Mass;
use efb_perf::prelude::*;

#[test]
fn policy_and_aircraft_from_json() {
    let policy: FuelPolicy = serde_json::from_str(
        r#"{
            "taxi": { "value": 50.0, "unit": "Pounds" },
            "contingency_percent": 10.0,
            "reserve": { "Percent": 20.0 },
            "deck_time": { "value": 5.0, "unit": "Minutes" },
            "deck_fuel_flow": { "PerHour": { "value": 300.0, "unit": "Pounds" } },
            "passenger_weight": { "value": 90.0, "unit": "Kilograms" },
            "contingency_allocation": "Constant"
        }"#,
    )
    .unwrap();

    assert_eq!(policy.reserve, Reserve::Percent(20.0));
    assert_eq!(policy.contingency_allocation, ContingencyAllocation::Constant);
    assert!((policy.passenger_weight.to_lb() - 198.4).abs() < 0.1);

    let aircraft: Aircraft = serde_json::from_str(
        r#"{
            "cruise_speed": { "value": 120.0, "unit": "Knots" },
            "fuel_burn": { "PerHour": { "value": 800.0, "unit": "Pounds" } },
            "useful_load": null,
            "empty_weight": { "value": 7800.0, "unit": "Pounds" },
            "max_takeoff_weight": { "value": 11000.0, "unit": "Pounds" },
            "max_passengers": 12,
            "hover_fuel_flow": null,
            "min_gs": null
        }"#,
    )
    .unwrap();

    assert_eq!(aircraft.useful_load(), Ok(Mass::lb(3200.0)));
}

#[test]
fn diagnostics_serialize() {
    let json = serde_json::to_value(Error::MissingWeightData.diagnostic()).unwrap();

    assert_eq!(json["kind"], "MissingWeightData");
    assert_eq!(json["category"], "Weight");
    assert_eq!(json["severity"], "Error");
}
