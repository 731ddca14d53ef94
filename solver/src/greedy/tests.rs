use super::*;
use model::base_types::TripIdx;

fn loc(id: Idx) -> LocationId {
    LocationId::from(id)
}

fn trip(idx: Idx, origin: Idx, destination: Idx, requested_time: Seconds) -> Trip {
    Trip::new(TripIdx::from(idx), loc(origin), loc(destination), requested_time)
}

/// 1 -5-> 2 -3-> 3, slow direct road 1 -20-> 3.
fn triangle_network() -> Arc<RoadNetwork> {
    let mut network = RoadNetwork::with_locations(3);
    network.add_road(loc(1), loc(2), 5);
    network.add_road(loc(2), loc(3), 3);
    network.add_road(loc(1), loc(3), 20);
    Arc::new(network)
}

fn solve(network: Arc<RoadNetwork>, trips: Vec<Trip>) -> DispatchPlan {
    GreedyChaining::initialize(network, trips).solve().unwrap()
}

#[test]
fn chained_trips_share_a_driver() {
    // trip0 arrives at location 2 at time 5, exactly when trip1 starts there;
    // trip2 starts independently at time 20.
    let trips = vec![trip(0, 1, 2, 0), trip(1, 2, 3, 5), trip(2, 1, 3, 20)];
    let plan = solve(triangle_network(), trips);

    assert_eq!(plan.number_of_drivers(), 2);
    assert_eq!(plan.number_of_trips(), 3);

    let shifts: Vec<_> = plan.shifts_iter().collect();
    let chained: Vec<TripIdx> = shifts[0].trips_iter().map(|t| t.idx()).collect();
    assert_eq!(chained, vec![TripIdx::from(0), TripIdx::from(1)]);
    assert_eq!(shifts[1].len(), 1);
    assert_eq!(shifts[1].first_trip().idx(), TripIdx::from(2));
}

#[test]
fn without_exact_matches_every_trip_needs_its_own_driver() {
    // arrival times (5, 8, 25) never coincide with any later requested time
    let trips = vec![trip(0, 1, 2, 0), trip(1, 2, 3, 7), trip(2, 1, 3, 21)];
    let plan = solve(triangle_network(), trips);

    assert_eq!(plan.number_of_drivers(), 3);
    for shift in plan.shifts_iter() {
        assert_eq!(shift.len(), 1);
    }
}

#[test]
fn no_trips_means_no_drivers() {
    let plan = solve(triangle_network(), vec![]);
    assert_eq!(plan.number_of_drivers(), 0);
}

#[test]
fn zero_weight_self_trip_is_chainable() {
    // the driver finishes trip0 at location 2 at time 5; the self trip at
    // location 2 starts exactly then and is reached over the zero-length
    // self path.
    let trips = vec![trip(0, 1, 2, 0), trip(1, 2, 2, 5)];
    let plan = solve(triangle_network(), trips);

    assert_eq!(plan.number_of_drivers(), 1);
    let shift = plan.shifts_iter().next().unwrap();
    let chained: Vec<TripIdx> = shift.trips_iter().map(|t| t.idx()).collect();
    assert_eq!(chained, vec![TripIdx::from(0), TripIdx::from(1)]);
}

#[test]
fn first_match_from_the_small_time_end_wins() {
    // two trips match the arrival at location 2 at time 5; the scan starts at
    // the small-time end of the working list, where trips with equal times
    // appear in reverse input order, so trip2 is taken first.
    let mut network = RoadNetwork::with_locations(4);
    network.add_road(loc(1), loc(2), 5);
    network.add_road(loc(2), loc(3), 3);
    network.add_road(loc(2), loc(4), 1);
    let trips = vec![trip(0, 1, 2, 0), trip(1, 2, 3, 5), trip(2, 2, 4, 5)];
    let plan = solve(Arc::new(network), trips);

    assert_eq!(plan.number_of_drivers(), 2);
    let shifts: Vec<_> = plan.shifts_iter().collect();
    let chained: Vec<TripIdx> = shifts[0].trips_iter().map(|t| t.idx()).collect();
    assert_eq!(chained, vec![TripIdx::from(0), TripIdx::from(2)]);
    assert_eq!(shifts[1].first_trip().idx(), TripIdx::from(1));
}

#[test]
fn unchainable_extra_trip_adds_a_driver() {
    let base = vec![trip(0, 1, 2, 0), trip(1, 2, 3, 5)];
    let plan = solve(triangle_network(), base.clone());
    assert_eq!(plan.number_of_drivers(), 1);

    // location 3 has no outgoing roads and the time matches nothing
    let mut extended = base;
    extended.push(trip(2, 3, 1, 1000));
    let plan = solve(triangle_network(), extended);
    assert_eq!(plan.number_of_drivers(), 2);
}

#[test]
fn unreachable_own_path_ends_the_chain() {
    // trip1 starts right where and when the first driver arrives, but its own
    // path 3 -> 2 is unreachable, so nothing can be chained after it; trip2
    // needs a fresh driver.
    let trips = vec![trip(0, 2, 3, 0), trip(1, 3, 2, 3), trip(2, 2, 3, 10)];
    let plan = solve(triangle_network(), trips);

    assert_eq!(plan.number_of_drivers(), 2);
    let shifts: Vec<_> = plan.shifts_iter().collect();
    let chained: Vec<TripIdx> = shifts[0].trips_iter().map(|t| t.idx()).collect();
    assert_eq!(chained, vec![TripIdx::from(0), TripIdx::from(1)]);
    assert_eq!(shifts[1].first_trip().idx(), TripIdx::from(2));
}

#[test]
fn unknown_trip_location_is_an_error() {
    let trips = vec![trip(0, 1, 9, 0)];
    let result = GreedyChaining::initialize(triangle_network(), trips).solve();
    assert_eq!(
        result.unwrap_err(),
        ModelError::UnknownLocation { location: loc(9) }
    );
}
