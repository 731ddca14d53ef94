use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::base_types::{Idx, LocationId, TripIdx};
use crate::errors::ModelError;
use crate::road_network::RoadNetwork;
use crate::trips::Trip;


type Integer = u64;

#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct JsonRoad {
    origin: Idx,
    destination: Idx,
    travel_time_in_seconds: Integer,
}

#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct JsonTrip {
    origin: Idx,
    destination: Idx,
    requested_time_in_seconds: Integer,
}

#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct JsonInput {
    number_of_locations: Idx,
    roads: Vec<JsonRoad>,
    trips: Vec<JsonTrip>,
}

/// build the road network and the trip list from a json instance.
///
/// Every road and trip endpoint is validated against the registered location
/// range 1..=numberOfLocations before it reaches the network, so downstream
/// queries never run into undefined lookups. Duplicate roads are tolerated;
/// the first travel time wins.
pub fn load_instance_from_json(
    input_data: serde_json::Value,
) -> Result<(Arc<RoadNetwork>, Vec<Trip>), ModelError> {
    let json_input: JsonInput = serde_json::from_value(input_data)
        .map_err(|err| ModelError::MalformedInput(err.to_string()))?;
    let network = create_road_network(&json_input)?;
    let trips = create_trips(&json_input)?;
    Ok((Arc::new(network), trips))
}

fn create_road_network(json_input: &JsonInput) -> Result<RoadNetwork, ModelError> {
    if json_input.number_of_locations == 0 && !(json_input.roads.is_empty() && json_input.trips.is_empty()) {
        return Err(ModelError::MalformedInput(
            "instance has roads or trips but no locations".to_string(),
        ));
    }
    let mut network = RoadNetwork::with_locations(json_input.number_of_locations);
    for road in &json_input.roads {
        let origin = validate_location(road.origin, json_input.number_of_locations)?;
        let destination = validate_location(road.destination, json_input.number_of_locations)?;
        network.add_road(origin, destination, road.travel_time_in_seconds);
    }
    Ok(network)
}

fn create_trips(json_input: &JsonInput) -> Result<Vec<Trip>, ModelError> {
    json_input
        .trips
        .iter()
        .enumerate()
        .map(|(idx, trip)| {
            let origin = validate_location(trip.origin, json_input.number_of_locations)?;
            let destination = validate_location(trip.destination, json_input.number_of_locations)?;
            Ok(Trip::new(
                TripIdx::from(idx as Idx),
                origin,
                destination,
                trip.requested_time_in_seconds,
            ))
        })
        .collect()
}

fn validate_location(id: Idx, number_of_locations: Idx) -> Result<LocationId, ModelError> {
    if id == 0 || id > number_of_locations {
        return Err(ModelError::UnknownLocation {
            location: LocationId::from(id),
        });
    }
    Ok(LocationId::from(id))
}
