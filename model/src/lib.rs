pub mod base_types;
pub mod errors;
pub mod json_serialisation;
pub mod road_network;
pub mod trips;
