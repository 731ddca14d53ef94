pub mod dispatch_plan;
pub mod json_serialisation;

pub use dispatch_plan::{DispatchPlan, DriverShift};
