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

use geo::BoundingRect;
use geojson::{Feature, FeatureCollection, GeoJson, Geometry, Value};

use super::geom::rect_to_bbox;
use crate::nd::Waypoint;
use crate::route::Route;

impl Route {
    /// Returns the route as GeoJSON.
    ///
    /// The path flown is a line string feature through all waypoints with a
    /// valid coordinate, followed by a point feature for each landing stop
    /// with its ident, name, index and role as properties.
    #[cfg_attr(docsrs, doc(cfg(feature = "geojson")))]
    pub fn to_geojson(&self) -> GeoJson {
        let mut coords: Vec<geo::Coord<f64>> = Vec::with_capacity(self.waypoints().len());

        if let Some(origin) = self.legs().first() {
            coords.extend(origin.from().valid_coordinate().map(geo::Coord::from));
        }

        for leg in self.legs() {
            coords.extend(
                leg.via()
                    .iter()
                    .chain(std::iter::once(leg.to()))
                    .filter_map(Waypoint::valid_coordinate)
                    .map(geo::Coord::from),
            );
        }

        let line = geo::LineString::from(coords);
        let mut features = vec![Feature {
            bbox: line.bounding_rect().map(rect_to_bbox),
            geometry: Some(Geometry::new(Value::from(&line))),
            id: None,
            properties: None,
            foreign_members: None,
        }];

        features.extend(self.stops().iter().enumerate().filter_map(|(i, stop)| {
            let point = geo::Point::from(stop.valid_coordinate()?);
            let mut feature = Feature::from(Geometry::new(Value::from(&point)));
            feature.set_property("ident", stop.ident.clone());
            feature.set_property("name", stop.name.clone());
            feature.set_property("index", i);
            feature.set_property(
                "role",
                match i {
                    0 => "departure",
                    i if i + 1 == self.stops().len() => "destination",
                    _ => "intermediate",
                },
            );
            Some(feature)
        }));

        GeoJson::FeatureCollection(FeatureCollection {
            bbox: line.bounding_rect().map(rect_to_bbox),
            features,
            foreign_members: None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fp::Performance;
    use crate::geom::Coordinate;
    use crate::measurements::Speed;
    use crate::route::Weather;
    use crate::FuelFlow;

    #[test]
    fn stops_and_path() {
        let perf = Performance::new(Speed::kt(120.0), FuelFlow::lb_per_h(800.0));
        let route = Route::build(
            vec![
                Waypoint::landing_stop("A", Coordinate::new(0.0, 0.0)),
                Waypoint::navigation("N", Coordinate::new(0.5, 0.5)),
                Waypoint::landing_stop("B", Coordinate::new(0.0, 1.0)),
            ],
            &perf,
            &Weather::default(),
        );

        let GeoJson::FeatureCollection(collection) = route.to_geojson() else {
            panic!("route should be a feature collection");
        };

        assert_eq!(collection.features.len(), 3);
        assert_eq!(
            collection.features[0].geometry.as_ref().map(|g| &g.value),
            Some(&Value::LineString(vec![
                vec![0.0, 0.0],
                vec![0.5, 0.5],
                vec![1.0, 0.0]
            ]))
        );
        assert_eq!(
            collection.features[2].property("ident"),
            Some(&geojson::JsonValue::from("B"))
        );
        assert_eq!(
            collection.features[1].property("role"),
            Some(&geojson::JsonValue::from("departure"))
        );
    }
}
