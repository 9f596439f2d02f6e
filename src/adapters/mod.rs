// Adapters layer: concrete implementations of the domain ports (http transport, renderers).

pub mod http;
pub mod render;
