pub mod greedy;

pub use greedy::GreedyChaining;

use model::errors::ModelError;
use model::road_network::RoadNetwork;
use model::trips::Trip;
use solution::DispatchPlan;
use std::sync::Arc;

pub trait Solver {
    fn initialize(network: Arc<RoadNetwork>, trips: Vec<Trip>) -> Self;

    fn solve(&self) -> Result<DispatchPlan, ModelError>;
}
