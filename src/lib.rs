pub mod circuit_builder;
pub mod combinator;
pub mod components;
pub mod config;
pub mod cutoff;
pub mod node;
pub mod noise;
pub mod presets;
pub mod stimulus;
pub mod timer;
pub mod trace;

mod circuit;
mod error;
pub use circuit::{Circuit, DT};
pub use error::{Error, Result};
pub use node::NodeId;
