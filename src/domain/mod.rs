// Domain layer: request envelopes and the ports the adapters implement.

pub mod model;
pub mod ports;
