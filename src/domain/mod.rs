// Domain layer: meal models and the ports the search engine talks through.

pub mod model;
pub mod ports;
