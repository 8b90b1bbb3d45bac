// Domain layer: plain data and ports, no clap or tracing.

pub mod model;
pub mod ports;
