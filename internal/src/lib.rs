use model::errors::ModelError;
use model::json_serialisation::load_instance_from_json;
use solution::json_serialisation::plan_to_json;
use solver::greedy::GreedyChaining;
use solver::Solver;

use std::time as stdtime;

pub fn run(input_data: serde_json::Value) -> Result<serde_json::Value, ModelError> {
    let start_time = stdtime::Instant::now();

    let (network, trips) = load_instance_from_json(input_data)?;
    println!(
        "*** Instance with {} locations, {} roads and {} trips loaded (elapsed time: {:0.2}sec) ***",
        network.size(),
        network.number_of_roads(),
        trips.len(),
        start_time.elapsed().as_secs_f32()
    );

    let greedy = GreedyChaining::initialize(network, trips);
    let plan = greedy.solve()?;

    let end_time = stdtime::Instant::now();
    let runtime_duration = end_time.duration_since(start_time);

    println!("\n{}", plan);
    println!("number of drivers: {}", plan.number_of_drivers());
    println!("running time: {:0.2}sec", runtime_duration.as_secs_f32());

    Ok(serde_json::json!({
        "info": {
            "runningTime": format!("{:0.2}sec", runtime_duration.as_secs_f32()),
        },
        "numberOfDrivers": plan.number_of_drivers(),
        "dispatchPlan": plan_to_json(&plan),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn run_reports_the_driver_count() {
        let input_data = json!({
            "numberOfLocations": 3,
            "roads": [
                { "origin": 1, "destination": 2, "travelTimeInSeconds": 5 },
                { "origin": 2, "destination": 3, "travelTimeInSeconds": 3 }
            ],
            "trips": [
                { "origin": 1, "destination": 2, "requestedTimeInSeconds": 0 },
                { "origin": 2, "destination": 3, "requestedTimeInSeconds": 5 },
                { "origin": 1, "destination": 3, "requestedTimeInSeconds": 20 }
            ]
        });

        let output = run(input_data).unwrap();
        assert_eq!(output["numberOfDrivers"], 2);
        assert_eq!(output["dispatchPlan"]["shifts"][0]["trips"][1]["origin"], 2);
    }

    #[test]
    fn run_rejects_malformed_instances() {
        let output = run(json!({ "numberOfLocations": 1 }));
        assert!(matches!(output, Err(ModelError::MalformedInput(_))));
    }
}
