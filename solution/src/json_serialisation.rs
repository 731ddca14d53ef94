use serde_json::json;

use crate::dispatch_plan::DispatchPlan;

/// serialise a dispatch plan to json, one entry per driver with the chained
/// trips in service order.
pub fn plan_to_json(plan: &DispatchPlan) -> serde_json::Value {
    let shifts: Vec<serde_json::Value> = plan
        .shifts_iter()
        .map(|shift| {
            json!({
                "driver": shift.driver().to_string(),
                "trips": shift
                    .trips_iter()
                    .map(|trip| {
                        json!({
                            "origin": trip.origin().0,
                            "destination": trip.destination().0,
                            "requestedTimeInSeconds": trip.requested_time(),
                        })
                    })
                    .collect::<Vec<_>>(),
            })
        })
        .collect();

    json!({
        "numberOfDrivers": plan.number_of_drivers(),
        "shifts": shifts,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatch_plan::DriverShift;
    use model::base_types::{DriverIdx, LocationId, TripIdx};
    use model::trips::Trip;

    #[test]
    fn plan_serialises_to_json() {
        let first = Trip::new(TripIdx::from(0), LocationId::from(1), LocationId::from(2), 0);
        let second = Trip::new(TripIdx::from(1), LocationId::from(2), LocationId::from(3), 5);
        let mut shift = DriverShift::new(DriverIdx::from(0), first);
        shift.append(second);
        let plan = DispatchPlan::new(vec![shift]);

        let value = plan_to_json(&plan);
        assert_eq!(value["numberOfDrivers"], 1);
        assert_eq!(value["shifts"][0]["driver"], "driver0");
        assert_eq!(value["shifts"][0]["trips"][1]["origin"], 2);
        assert_eq!(value["shifts"][0]["trips"][1]["requestedTimeInSeconds"], 5);
    }
}
