// Domain layer: content records, the built-in profile and the ports the pipeline runs against.

pub mod builtin;
pub mod model;
pub mod ports;
