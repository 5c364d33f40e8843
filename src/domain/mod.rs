// Domain layer: board file models and the ports the installer runs against.

pub mod model;
pub mod ports;
