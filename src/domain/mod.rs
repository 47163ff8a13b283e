// Domain layer: fixed data and the step interface.

pub mod model;
pub mod ports;
