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

//! WebAssembly bindings of the flight performance and fuel planning engine.
//!
//! The host passes plain JavaScript objects to the [`FlightPlanner`] and
//! receives plain objects back. Quantities cross the boundary as numbers in
//! pounds, knots, nautical miles, minutes and hours.

use wasm_bindgen::prelude::*;

mod input;
mod logger;
mod output;
mod planner;

pub use planner::FlightPlanner;

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
}

/// Routes the planner's log records to the browser console.
///
/// The `level` is one of `error`, `warn`, `info`, `debug` or `trace`.
#[wasm_bindgen(js_name = initLogging)]
pub fn init_logging(level: &str) -> Result<(), JsError> {
    let level: log::LevelFilter = level
        .parse()
        .map_err(|_| JsError::new(&format!("invalid log level: {level}")))?;
    logger::init(level).map_err(|e| JsError::new(&e.to_string()))
}
